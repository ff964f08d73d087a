// BVEC - bvec-foundation
// SW-REQ-ID: REQ_VEC_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded, offset-indexed vector for the BVEC workspace.
//!
//! This crate provides [`BoundedVector`], a vector whose length is validated
//! against a compile-time platform limit ([`MAX_VECTOR_SIZE`]), whose
//! elements are addressed from a configurable start index, and whose
//! clones never share storage. Failures are reported as
//! [`bvec_error::Error`] values.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - `tracing`: Structured diagnostics through the `tracing` crate
//! - `embedded-small` / `embedded-medium`: Smaller `MAX_VECTOR_SIZE`
//! - Default: `no_std` with `alloc`
//!
//! # Example
//!
//! ```
//! use bvec_foundation::{BoundedVector, ErrorKind};
//!
//! let v = BoundedVector::from_slice(&[1, 2, 3], 0)?;
//! let w = BoundedVector::from_slice(&[4, 5, 6], 0)?;
//!
//! assert_eq!(v.dot(&w)?, 32);
//! assert_eq!((&v + 1).as_slice(), &[2, 3, 4]);
//!
//! let short = BoundedVector::<i32>::new(2)?;
//! assert_eq!(v.add_vector(&short).unwrap_err().kind(), ErrorKind::SizeMismatch);
//! # Ok::<(), bvec_foundation::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// Bounded, offset-indexed vector
pub mod bounded_vector;
/// Compile-time platform limits
pub mod limits;
/// Element traits for vector arithmetic
pub mod traits;
/// Structured diagnostics (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing;

pub use bounded_vector::BoundedVector;
// Re-export error related types for convenience
pub use bvec_error::{codes, kinds, Error, ErrorCategory, ErrorKind};
pub use limits::MAX_VECTOR_SIZE;
pub use traits::Element;

/// Result type alias for BVEC operations using `bvec_error::Error`
pub type BvecResult<T> = core::result::Result<T, Error>;
