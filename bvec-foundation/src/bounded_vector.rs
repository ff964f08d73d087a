// BVEC - bvec-foundation
// Module: BoundedVector - Offset-indexed vector with a hard length cap
// SW-REQ-ID: REQ_VEC_001, REQ_VEC_BOUNDS_001, REQ_VEC_ARITH_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded, offset-indexed vector with validated construction.
//!
//! `BoundedVector<T>` owns a heap buffer of exactly `len()` elements and
//! addresses them through external indices starting at `start_index()`.
//!
//! # Characteristics
//!
//! - **Validated construction**: length in `1..=MAX_VECTOR_SIZE`, start
//!   index non-negative
//! - **Checked access**: every external index is translated to a storage
//!   slot before use; out-of-range access returns an error
//! - **Value semantics**: clones and assignments never share storage
//! - **Elementwise arithmetic**: scalar operators, plus size-checked vector
//!   sum, difference and dot product

use alloc::vec::Vec;
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
    slice,
    str::FromStr,
};

use bvec_error::{kinds, Error, Result};

#[cfg(feature = "tracing")]
use crate::tracing::VectorTrace;
use crate::{
    limits::{self, MAX_VECTOR_SIZE},
    traits::Element,
};

/// A vector with a validated length, an index offset and exclusively owned
/// storage.
///
/// # Invariants
///
/// 1. `0 < len() <= MAX_VECTOR_SIZE`
/// 2. `start_index() <= isize::MAX`
/// 3. External index `i` is valid iff `start_index <= i < start_index + len`,
///    and addresses storage slot `i - start_index`
/// 4. No two instances share storage
///
/// Equality compares length and elements only; the start index does not
/// take part.
///
/// # Examples
///
/// ```
/// use bvec_foundation::BoundedVector;
///
/// let mut v = BoundedVector::<i32>::with_start_index(3, 10)?;
/// v.set(10, 1)?;
/// v.set(12, 3)?;
///
/// assert_eq!(v.get(12)?, &3);
/// assert!(v.get(9).is_err());
/// assert!(v.get(13).is_err());
///
/// let w = &v * 2;
/// assert_eq!(w.as_slice(), &[2, 0, 6]);
/// assert_eq!(v.dot(&w)?, 20);
/// # Ok::<(), bvec_error::Error>(())
/// ```
#[derive(Debug)]
pub struct BoundedVector<T> {
    /// Element storage, exactly `len()` long
    data: Vec<T>,

    /// External index of the first element
    start_index: usize,
}

impl<T> BoundedVector<T> {
    /// Creates a vector of `length` default elements starting at index 0.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLength` error if `length <= 0` or
    /// `length > MAX_VECTOR_SIZE`.
    pub fn new(length: isize) -> Result<Self>
    where
        T: Default + Clone,
    {
        Self::with_start_index(length, 0)
    }

    /// Creates a vector of `length` default elements addressed from
    /// `start_index`.
    ///
    /// The length is validated before the start index.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLength` error if `length <= 0` or
    /// `length > MAX_VECTOR_SIZE`, and an `InvalidStartIndex` error if
    /// `start_index < 0`.
    pub fn with_start_index(length: isize, start_index: isize) -> Result<Self>
    where
        T: Default + Clone,
    {
        enter_span!(VectorTrace::constructing(length, start_index));

        let (len, start_index) = validate_shape(length, start_index)?;
        Ok(Self {
            data: alloc::vec![T::default(); len],
            start_index,
        })
    }

    /// Creates a vector holding a copy of `values`, addressed from
    /// `start_index`.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedVector::with_start_index`], with `values.len()` as the
    /// requested length.
    pub fn from_slice(values: &[T], start_index: isize) -> Result<Self>
    where
        T: Clone,
    {
        let length = isize::try_from(values.len()).unwrap_or(isize::MAX);
        enter_span!(VectorTrace::constructing(length, start_index));

        let (_, start_index) = validate_shape(length, start_index)?;
        Ok(Self {
            data: values.to_vec(),
            start_index,
        })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a constructed vector holds at least one element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the external index of the first element.
    #[inline]
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// First valid external index, as a signed index.
    #[inline]
    #[must_use]
    pub const fn first_index(&self) -> isize {
        self.start_index as isize
    }

    /// One past the last valid external index.
    ///
    /// Saturates at `isize::MAX` for vectors placed at the very top of the
    /// index space.
    #[inline]
    #[must_use]
    pub fn end_index(&self) -> isize {
        self.first_index().saturating_add(self.len() as isize)
    }

    /// Returns `true` if `index` addresses an element.
    #[inline]
    #[must_use]
    pub fn contains_index(&self, index: isize) -> bool {
        self.offset_of(index).is_some()
    }

    /// Returns a reference to the element at external `index`.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index` is outside
    /// `start_index()..start_index() + len()`.
    #[inline]
    pub fn get(&self, index: isize) -> Result<&T> {
        let slot = self.slot_of(index)?;
        Ok(&self.data[slot])
    }

    /// Returns a mutable reference to the element at external `index`.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index` is outside
    /// `start_index()..start_index() + len()`.
    #[inline]
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let slot = self.slot_of(index)?;
        Ok(&mut self.data[slot])
    }

    /// Overwrites the element at external `index`.
    ///
    /// The vector is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index` is outside
    /// `start_index()..start_index() + len()`.
    #[inline]
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Replaces the contents, length and start index with a copy of `other`.
    ///
    /// Storage is reused when the lengths match and reallocated to
    /// `other.len()` otherwise; it is never shared with `other`.
    pub fn assign_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        enter_span!(VectorTrace::reassigning(self.len(), other.len()));

        if self.data.len() == other.data.len() {
            self.data.clone_from_slice(&other.data);
        } else {
            vector_debug!(from = self.len(), to = other.len(), "reallocating vector storage");
            self.data = other.data.clone();
        }
        self.start_index = other.start_index;
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Elements in storage order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable elements in storage order.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copies the elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterates over `(external index, element)` pairs.
    pub fn indexed(&self) -> impl Iterator<Item = (isize, &T)> + '_ {
        let first = self.first_index();
        self.data
            .iter()
            .enumerate()
            .map(move |(slot, value)| (first + slot as isize, value))
    }

    /// Reads `len()` whitespace-separated values from `input`, in index
    /// order. Tokens after the last element are ignored.
    ///
    /// The vector is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error if `input` holds fewer than `len()` tokens or
    /// a token does not parse as `T`.
    pub fn read_from_str(&mut self, input: &str) -> Result<()>
    where
        T: FromStr,
    {
        enter_span!(VectorTrace::reading(self.len()));

        let mut tokens = input.split_whitespace();
        let mut values = Vec::with_capacity(self.len());
        for position in 0..self.len() {
            let token = tokens
                .next()
                .ok_or_else(|| parse_failure(position, true))?;
            let value = token
                .parse::<T>()
                .map_err(|_| parse_failure(position, false))?;
            values.push(value);
        }
        self.data = values;
        Ok(())
    }

    /// Offset of `index` from the start, if it addresses an element.
    #[inline]
    fn offset_of(&self, index: isize) -> Option<usize> {
        let offset = index.checked_sub(self.first_index())?;
        if offset >= 0 && (offset as usize) < self.data.len() {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Translates an external index to a storage slot.
    #[inline]
    fn slot_of(&self, index: isize) -> Result<usize> {
        self.offset_of(index).ok_or_else(|| {
            let kind = kinds::index_out_of_range(index, self.start_index, self.len());
            vector_warn!(index, start_index = self.start_index, len = self.len(), "{}", kind);
            Error::from(kind)
        })
    }
}

impl<T: Element> BoundedVector<T> {
    /// Returns a vector with `scalar` added to every element.
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map_elements(|x| x + scalar)
    }

    /// Returns a vector with `scalar` subtracted from every element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map_elements(|x| x - scalar)
    }

    /// Returns a vector with every element multiplied by `scalar`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map_elements(|x| x * scalar)
    }

    /// Elementwise sum. The result keeps `self`'s start index.
    ///
    /// # Errors
    ///
    /// Returns a `SizeMismatch` error if the lengths differ.
    pub fn add_vector(&self, other: &Self) -> Result<Self> {
        self.zip_elements(other, "add", |a, b| a + b)
    }

    /// Elementwise difference. The result keeps `self`'s start index.
    ///
    /// # Errors
    ///
    /// Returns a `SizeMismatch` error if the lengths differ.
    pub fn sub_vector(&self, other: &Self) -> Result<Self> {
        self.zip_elements(other, "sub", |a, b| a - b)
    }

    /// Sum of elementwise products, accumulated from `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns a `SizeMismatch` error if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        enter_span!(VectorTrace::elementwise("dot", self.len()));

        self.check_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::default(), |acc, (&a, &b)| acc + a * b))
    }

    fn map_elements(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            start_index: self.start_index,
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn zip_elements(&self, other: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        enter_span!(VectorTrace::elementwise(op, self.len()));

        self.check_same_size(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            start_index: self.start_index,
        })
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        if self.len() == other.len() {
            return Ok(());
        }
        let kind = kinds::size_mismatch(self.len(), other.len());
        vector_warn!(left = self.len(), right = other.len(), "{}", kind);
        Err(kind.into())
    }
}

fn validate_shape(length: isize, start_index: isize) -> Result<(usize, usize)> {
    if limits::check_length(length).is_some() {
        let kind = kinds::invalid_length(length, MAX_VECTOR_SIZE);
        vector_warn!(requested = length, max = MAX_VECTOR_SIZE, "{}", kind);
        return Err(kind.into());
    }
    if start_index < 0 {
        let kind = kinds::invalid_start_index(start_index);
        vector_warn!(requested = start_index, "{}", kind);
        return Err(kind.into());
    }
    Ok((length as usize, start_index as usize))
}

fn parse_failure(position: usize, missing: bool) -> Error {
    let kind = kinds::ParseElementError { position, missing };
    vector_warn!(position, missing, "{}", kind);
    kind.into()
}

impl<T: Clone> Clone for BoundedVector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            start_index: self.start_index,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T: PartialEq> PartialEq for BoundedVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for BoundedVector<T> {}

impl<T: fmt::Display> fmt::Display for BoundedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.data.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for value in iter {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a BoundedVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> AsRef<[T]> for BoundedVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

// Scalar operators: `v + c`, `&v + c`, `v += c` and the same for `-` and `*`.
macro_rules! impl_scalar_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $token:tt) => {
        impl<T: Element> $op<T> for BoundedVector<T> {
            type Output = BoundedVector<T>;

            fn $method(mut self, scalar: T) -> Self::Output {
                for x in &mut self.data {
                    *x = *x $token scalar;
                }
                self
            }
        }

        impl<T: Element> $op<T> for &BoundedVector<T> {
            type Output = BoundedVector<T>;

            fn $method(self, scalar: T) -> Self::Output {
                self.map_elements(|x| x $token scalar)
            }
        }

        impl<T: Element> $assign_op<T> for BoundedVector<T> {
            fn $assign_method(&mut self, scalar: T) {
                for x in &mut self.data {
                    *x = *x $token scalar;
                }
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_construction_validation() {
        let length: isize = kani::any();
        let start_index: isize = kani::any();
        kani::assume(length <= 4);

        let result = BoundedVector::<u8>::with_start_index(length, start_index);
        assert!(result.is_ok() == (length > 0 && start_index >= 0));
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_slot_translation() {
        let start_index: isize = kani::any();
        kani::assume(start_index >= 0 && start_index <= 1024);
        let index: isize = kani::any();

        if let Ok(v) = BoundedVector::<u8>::with_start_index(3, start_index) {
            let in_range = index >= start_index && index < start_index + 3;
            assert!(v.get(index).is_ok() == in_range);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
