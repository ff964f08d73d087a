// BVEC - bvec-foundation
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for bvec-foundation
//!
//! Re-exports the vector type, its element trait and the error types, so
//! downstream code needs a single glob import.

pub use bvec_error::{codes, kinds, Error, ErrorCategory, ErrorKind, Result};

pub use crate::{bounded_vector::BoundedVector, limits::MAX_VECTOR_SIZE, traits::Element};
