// BVEC - bvec-error
// Module: BVEC Error Kinds
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Typed error kinds with context.
//!
//! Each kind records the values that caused the failure and converts into
//! the flat [`Error`] with the matching category and code.

use core::fmt::{self, Display};

use crate::Error;

/// Rejected vector length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLengthError {
    /// Length the caller asked for
    pub requested: isize,
    /// Largest length the platform allows
    pub max:       usize,
}

impl InvalidLengthError {
    /// `true` when the request is positive but above `max`.
    #[must_use]
    pub const fn exceeds_maximum(&self) -> bool {
        self.requested > 0 && self.requested as usize > self.max
    }
}

impl Display for InvalidLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid vector length {}: must be in 1..={}",
            self.requested, self.max
        )
    }
}

impl From<InvalidLengthError> for Error {
    fn from(e: InvalidLengthError) -> Self {
        if e.exceeds_maximum() {
            Error::LENGTH_TOO_LARGE
        } else {
            Error::NON_POSITIVE_LENGTH
        }
    }
}

/// Rejected start index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStartIndexError {
    /// Start index the caller asked for
    pub requested: isize,
}

impl Display for InvalidStartIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid start index {}: must not be negative", self.requested)
    }
}

impl From<InvalidStartIndexError> for Error {
    fn from(_e: InvalidStartIndexError) -> Self {
        Error::NEGATIVE_START_INDEX
    }
}

/// Element access outside the addressable range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    /// External index that was used
    pub index:       isize,
    /// First valid external index
    pub start_index: usize,
    /// Number of elements
    pub len:         usize,
}

impl Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Index {} out of range {}..{}",
            self.index,
            self.start_index,
            self.start_index + self.len
        )
    }
}

impl From<IndexOutOfRangeError> for Error {
    fn from(_e: IndexOutOfRangeError) -> Self {
        Error::index_out_of_range("Vector index out of range")
    }
}

/// Binary vector operation on operands of different length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatchError {
    /// Length of the left operand
    pub left:  usize,
    /// Length of the right operand
    pub right: usize,
}

impl Display for SizeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector sizes differ: {} vs {}", self.left, self.right)
    }
}

impl From<SizeMismatchError> for Error {
    fn from(_e: SizeMismatchError) -> Self {
        Error::size_mismatch("Vector sizes differ")
    }
}

/// Text input that could not be read into a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseElementError {
    /// Zero-based position of the element being read
    pub position: usize,
    /// `true` if the input ended, `false` if the token was malformed
    pub missing:  bool,
}

impl Display for ParseElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing {
            write!(f, "Input ended before element {}", self.position)
        } else {
            write!(f, "Element {} is not a valid value", self.position)
        }
    }
}

impl From<ParseElementError> for Error {
    fn from(e: ParseElementError) -> Self {
        if e.missing {
            Error::parse_missing_element("Input ended before every element was read")
        } else {
            Error::parse_invalid_element("Input token is not a valid element")
        }
    }
}

/// Create an invalid length kind
#[must_use]
pub const fn invalid_length(requested: isize, max: usize) -> InvalidLengthError {
    InvalidLengthError { requested, max }
}

/// Create an invalid start index kind
#[must_use]
pub const fn invalid_start_index(requested: isize) -> InvalidStartIndexError {
    InvalidStartIndexError { requested }
}

/// Create an index out of range kind
#[must_use]
pub const fn index_out_of_range(
    index: isize,
    start_index: usize,
    len: usize,
) -> IndexOutOfRangeError {
    IndexOutOfRangeError {
        index,
        start_index,
        len,
    }
}

/// Create a size mismatch kind
#[must_use]
pub const fn size_mismatch(left: usize, right: usize) -> SizeMismatchError {
    SizeMismatchError { left, right }
}
