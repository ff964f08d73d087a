// BVEC - bvec-foundation
// Module: Diagnostic Macros
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate-internal diagnostic macros.
//!
//! They forward to `tracing` when the `tracing` feature is enabled and expand
//! to nothing otherwise, so call sites need no `cfg` of their own.

/// Emit a debug-level diagnostic event
macro_rules! vector_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::debug!($($arg)*);
        }
    };
}

/// Emit a warn-level diagnostic event
macro_rules! vector_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::warn!($($arg)*);
        }
    };
}

/// Enter a span for the rest of the enclosing scope
macro_rules! enter_span {
    ($span:expr) => {
        #[cfg(feature = "tracing")]
        let _guard = $span.entered();
    };
}
