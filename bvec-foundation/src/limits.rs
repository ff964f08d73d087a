// BVEC - bvec-foundation
// Module: Platform Limits
// SW-REQ-ID: REQ_VEC_LIMIT_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Platform-specific size limits for bounded vectors.
//!
//! The maximum vector length is fixed at compile time. Different platform
//! profiles are supported via feature flags:
//!
//! - `embedded-small`: MCU targets with ~64KB RAM
//! - `embedded-medium`: Embedded Linux with ~1MB RAM
//! - Default: Desktop/Server with ample memory
//!
//! # Usage
//!
//! ```rust
//! use bvec_foundation::limits;
//!
//! assert!(limits::check_length(0).is_some());
//! assert!(limits::check_length(1).is_none());
//! assert!(limits::check_length(limits::MAX_VECTOR_SIZE as isize + 1).is_some());
//! ```

/// Platform profile for embedded microcontrollers (~64KB RAM)
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Maximum number of elements in a vector
    pub const MAX_VECTOR_SIZE: usize = 4096;
}

/// Platform profile for embedded Linux (~1MB RAM)
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Maximum number of elements in a vector
    pub const MAX_VECTOR_SIZE: usize = 1024 * 1024;
}

/// Default platform profile for desktop/server
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Maximum number of elements in a vector
    pub const MAX_VECTOR_SIZE: usize = 100_000_000;
}

// Re-export platform limits at module level for convenience
pub use platform::*;

/// Checks a requested vector length against `1..=MAX_VECTOR_SIZE`.
///
/// Returns a description of the violated bound, or `None` if the length is
/// acceptable.
#[inline]
#[must_use]
pub const fn check_length(requested: isize) -> Option<&'static str> {
    if requested <= 0 {
        Some("length must be positive")
    } else if requested as usize > MAX_VECTOR_SIZE {
        Some("length exceeds MAX_VECTOR_SIZE")
    } else {
        None
    }
}

/// Compile-time assertions to ensure limits are reasonable
mod assertions {
    use super::platform::MAX_VECTOR_SIZE;

    const _: () = assert!(MAX_VECTOR_SIZE > 0, "Vectors must hold at least one element");
    // External indices are signed; every slot must be addressable.
    const _: () = assert!(
        MAX_VECTOR_SIZE <= isize::MAX as usize,
        "MAX_VECTOR_SIZE must fit in isize"
    );
}
