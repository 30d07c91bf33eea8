// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the checked fill wrapper.

use thiserror::Error;

/// Errors reported by [`try_fill`](crate::try_fill).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FillError {
    /// The requested range does not fit in the target buffer.
    #[error("range at offset {offset} with length {len} is out of bounds for a {capacity}-byte buffer")]
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Length of the target buffer.
        capacity: usize,
    },
}
