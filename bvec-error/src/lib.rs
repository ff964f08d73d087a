// BVEC - bvec-error
// Module: BVEC Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! BVEC Error handling library
//!
//! Error type, codes and typed kinds shared by the bounded vector
//! workspace. The [`Error`] value is `Copy`, allocation-free and usable in
//! `no_std` builds.
//!
//! # Error Categories
//!
//! ## Validation Errors (1000-1999)
//! - Non-positive length
//! - Negative start index
//!
//! ## Bounds Errors (2000-2999)
//! - Index outside `[start_index, start_index + len)`
//!
//! ## Arithmetic Errors (3000-3999)
//! - Operand size mismatch
//!
//! ## Capacity Errors (4000-4999)
//! - Length above `MAX_VECTOR_SIZE`
//!
//! ## Parse Errors (5000-5999)
//! - Missing or malformed element in text input
//!
//! # Usage
//!
//! ```
//! use bvec_error::{kinds, Error, ErrorCategory, ErrorKind};
//!
//! let error = Error::new(
//!     ErrorCategory::Bounds,
//!     bvec_error::codes::INDEX_OUT_OF_RANGE,
//!     "Vector index out of range",
//! );
//! assert_eq!(error.kind(), ErrorKind::IndexOutOfRange);
//!
//! // Typed kinds carry context and convert into `Error`
//! let mismatch: Error = kinds::size_mismatch(3, 5).into();
//! assert_eq!(mismatch.kind(), ErrorKind::SizeMismatch);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for bvec
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorKind, ErrorSource};

/// A specialized `Result` type for BVEC operations.
pub type Result<T> = core::result::Result<T, Error>;

// Re-export error kinds for convenience
pub use kinds::{
    IndexOutOfRangeError, InvalidLengthError, InvalidStartIndexError, ParseElementError,
    SizeMismatchError,
};

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
