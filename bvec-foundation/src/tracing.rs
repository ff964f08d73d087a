// BVEC - bvec-foundation
// Module: Tracing Support
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for bounded vectors
//!
//! Structured diagnostics that work in both std and no_std environments.
//! Wraps the `tracing` crate and provides span constructors for the vector
//! operations worth following in a trace.

#![cfg(feature = "tracing")]

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, info_span, span, trace_span, warn_span};
pub use tracing::{event, Level, Span};

/// Spans for vector lifecycle and arithmetic
#[derive(Debug, Clone)]
pub struct VectorTrace;

impl VectorTrace {
    /// Create a span for vector construction
    #[inline]
    #[must_use]
    pub fn constructing(length: isize, start_index: isize) -> Span {
        debug_span!("vector_construct", length = %length, start_index = %start_index)
    }

    /// Create a span for whole-vector assignment
    #[inline]
    #[must_use]
    pub fn reassigning(from_len: usize, to_len: usize) -> Span {
        trace_span!("vector_assign", from_len = %from_len, to_len = %to_len)
    }

    /// Create a span for an elementwise operation
    #[inline]
    #[must_use]
    pub fn elementwise(op: &'static str, len: usize) -> Span {
        trace_span!("vector_elementwise", op = %op, len = %len)
    }

    /// Create a span for reading elements from text
    #[inline]
    #[must_use]
    pub fn reading(len: usize) -> Span {
        debug_span!("vector_read", len = %len)
    }
}
