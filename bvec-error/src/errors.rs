// BVEC - bvec-error
// Module: BVEC Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error handling for the bounded vector workspace
//!
//! Every fallible operation returns the same small `Copy` error value: a
//! category, a numeric code and a static message. Contextual detail such as
//! the offending index lives in the typed kinds of [`crate::kinds`] and is
//! reported through diagnostics before conversion.

use core::fmt;

use crate::{codes, ToErrorCategory};

/// `Error` categories for BVEC operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Construction arguments rejected (length, start index)
    Validation = 1,
    /// Element access outside the addressable range
    Bounds     = 2,
    /// Elementwise operation on incompatible operands
    Arithmetic = 3,
    /// Size limit exceeded
    Capacity   = 4,
    /// Text input errors
    Parse      = 5,
}

/// Coarse classification of an [`Error`], independent of its category.
///
/// Callers match on this rather than on raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Length is non-positive or above `MAX_VECTOR_SIZE`
    InvalidLength,
    /// Start index is negative
    InvalidStartIndex,
    /// Index outside `[start_index, start_index + len)`
    IndexOutOfRange,
    /// Operands of a binary vector operation differ in length
    SizeMismatch,
    /// Text input could not be read into the vector
    Parse,
    /// Anything else
    Other,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// BVEC `Error` type
///
/// Carries a category, a code from [`crate::codes`] and a static message.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Requested length is zero or negative
    pub const NON_POSITIVE_LENGTH: Self = Self::invalid_length("Vector length must be positive");
    /// Requested length is above the platform maximum
    pub const LENGTH_TOO_LARGE: Self =
        Self::length_exceeds_maximum("Vector length exceeds MAX_VECTOR_SIZE");
    /// Requested start index is negative
    pub const NEGATIVE_START_INDEX: Self =
        Self::invalid_start_index("Vector start index must not be negative");

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    // Factory methods

    /// Create an invalid length error
    #[must_use]
    pub const fn invalid_length(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::INVALID_LENGTH, message)
    }

    /// Create a length-exceeds-maximum error
    #[must_use]
    pub const fn length_exceeds_maximum(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::LENGTH_EXCEEDS_MAXIMUM, message)
    }

    /// Create an invalid start index error
    #[must_use]
    pub const fn invalid_start_index(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::INVALID_START_INDEX, message)
    }

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_RANGE, message)
    }

    /// Create a size mismatch error
    #[must_use]
    pub const fn size_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Arithmetic, codes::SIZE_MISMATCH, message)
    }

    /// Create a parse error for input that ended early
    #[must_use]
    pub const fn parse_missing_element(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::PARSE_MISSING_ELEMENT, message)
    }

    /// Create a parse error for a token that is not a valid element
    #[must_use]
    pub const fn parse_invalid_element(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::PARSE_INVALID_ELEMENT, message)
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self.code {
            codes::INVALID_LENGTH | codes::LENGTH_EXCEEDS_MAXIMUM => ErrorKind::InvalidLength,
            codes::INVALID_START_INDEX => ErrorKind::InvalidStartIndex,
            codes::INDEX_OUT_OF_RANGE => ErrorKind::IndexOutOfRange,
            codes::SIZE_MISMATCH => ErrorKind::SizeMismatch,
            codes::PARSE_MISSING_ELEMENT | codes::PARSE_INVALID_ELEMENT => ErrorKind::Parse,
            _ => ErrorKind::Other,
        }
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is an arithmetic error
    #[must_use]
    pub fn is_arithmetic_error(&self) -> bool {
        self.category == ErrorCategory::Arithmetic
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
