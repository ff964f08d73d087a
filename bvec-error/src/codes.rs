// BVEC - bvec-error
// Module: BVEC Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for BVEC

// Validation error codes (1000-1999)
/// Requested length is zero or negative
pub const INVALID_LENGTH: u16 = 1000;
/// Requested start index is negative
pub const INVALID_START_INDEX: u16 = 1001;

// Bounds error codes (2000-2999)
/// External index lies outside `[start_index, start_index + len)`
pub const INDEX_OUT_OF_RANGE: u16 = 2000;

// Arithmetic error codes (3000-3999)
/// Binary vector operation on operands of different length
pub const SIZE_MISMATCH: u16 = 3000;

// Capacity error codes (4000-4999)
/// Requested length exceeds `MAX_VECTOR_SIZE`
pub const LENGTH_EXCEEDS_MAXIMUM: u16 = 4000;

// Parse error codes (5000-5999)
/// Input ran out before every element was read
pub const PARSE_MISSING_ELEMENT: u16 = 5000;
/// A token could not be parsed as an element
pub const PARSE_INVALID_ELEMENT: u16 = 5001;
