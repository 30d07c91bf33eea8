// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable, alignment-tolerant block-fill primitives.
//!
//! Given a byte slice and a one-byte fill value, these routines set every
//! byte of the slice to that value using native-word stores for the
//! word-aligned interior of the range instead of byte-by-byte stores.
//!
//! The range is spliced into three phases:
//!
//! - **Prologue**: byte stores up to the first word boundary
//! - **Bulk**: whole-word stores of the replicated fill byte
//! - **Epilogue**: byte stores for the trailing sub-word remainder
//!
//! Neither the start address nor the length needs to be word-aligned; ranges
//! shorter than one word degrade to pure byte filling.
//!
//! # Example
//!
//! ```
//! use memfill::fill_wordwise;
//!
//! let mut buf = [0u8; 37];
//! fill_wordwise(&mut buf, 0xAB);
//! assert!(buf.iter().all(|&b| b == 0xAB));
//! ```
//!
//! For callers that cannot guarantee their range up front, [`try_fill`]
//! validates bounds and reports [`FillError`] instead of panicking. For
//! callers holding a raw region, [`fill_raw`] matches the conventional
//! fill-routine signature and returns the start pointer.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod error;
mod fill;
mod pattern;
mod splice;

#[cfg(test)]
mod tests;

pub use error::FillError;
pub use fill::{
    BYTES_PER_WORD, fill_bytewise, fill_raw, fill_wordwise, fill_wordwise_aligned,
    fill_wordwise_aligned_u32, fill_wordwise_u32, try_fill,
};
pub use pattern::{repeat_byte_u16, repeat_byte_u32, repeat_byte_u64, repeat_byte_usize};
pub use splice::Splice;
