// BVEC - bvec-foundation
// Module: Element Traits
// SW-REQ-ID: REQ_VEC_ARITH_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Traits bounding the element types of arithmetic vector operations.

use core::{
    fmt::Debug,
    ops::{Add, Mul, Sub},
};

/// Numeric element usable in elementwise vector arithmetic.
///
/// `Default::default()` must be the additive identity; it seeds the dot
/// product accumulator and fills freshly constructed vectors.
pub trait Element:
    Copy + Default + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Copy
        + Default
        + PartialEq
        + Debug
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
{
}
