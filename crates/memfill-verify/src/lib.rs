// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-exact verification harness for block-fill implementations.
//!
//! The harness drives a candidate fill through every possible fill value and
//! reports the first byte that does not match. It is a test oracle, not a
//! runtime guard: a mismatch is reported as an offset, never raised as an
//! error, and a single mismatch is enough to fail the candidate.
//!
//! The harness itself is validated against the trusted `<[u8]>::fill` from
//! core before it is trusted to validate candidates; see the crate's test
//! suite.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

/// Size of the harness buffer in bytes.
pub const CHECK_BUFFER_LEN: usize = 4096;

/// Word-aligned backing store for the check buffer.
///
/// The alignment guarantees that the aligned mode really hands the candidate
/// a word-aligned start, and that the misaligned mode (start offset by one
/// byte) really does not.
#[repr(align(16))]
struct CheckBuffer([u8; CHECK_BUFFER_LEN]);

/// Runs `fill` over every fill value `0..=255` and returns the offset of the
/// first byte that does not match, or `None` if every value passes.
///
/// With `misaligned` set, the start is offset by one byte and the length is
/// shrunk by one byte at each end, so the candidate sees a non-word-aligned
/// start and a length with a nonzero word remainder. Only candidates that
/// tolerate unaligned ranges can pass that mode.
///
/// # Example
///
/// ```
/// use memfill_verify::check_fill;
///
/// // The core slice fill is the trusted reference.
/// assert!(check_fill(|buf, value| buf.fill(value), false).is_none());
/// assert!(check_fill(|buf, value| buf.fill(value), true).is_none());
///
/// // A fill that skips the last byte is caught.
/// let broken = |buf: &mut [u8], value: u8| {
///     let last = buf.len() - 1;
///     buf[..last].fill(value);
/// };
/// assert!(check_fill(broken, false).is_some());
/// ```
pub fn check_fill<F>(mut fill: F, misaligned: bool) -> Option<usize>
where
    F: FnMut(&mut [u8], u8),
{
    let mut buffer = CheckBuffer([0u8; CHECK_BUFFER_LEN]);
    let offset = usize::from(misaligned);
    let len = CHECK_BUFFER_LEN - 2 * offset;

    for value in 0..=u8::MAX {
        fill(&mut buffer.0[offset..offset + len], value);

        for (index, &byte) in buffer.0[offset..offset + len].iter().enumerate() {
            if byte != value {
                return Some(offset + index);
            }
        }
    }

    None
}
