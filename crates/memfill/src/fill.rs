// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block-fill implementations at byte and word granularity.
//!
//! Every routine here writes the same bytes as [`fill_bytewise`]; they differ
//! only in store granularity and in what they require of the caller.

use crate::error::FillError;
use crate::pattern::{repeat_byte_u32, repeat_byte_usize};
use crate::splice::Splice;

/// Number of bytes in the native machine word.
pub const BYTES_PER_WORD: usize = (usize::BITS / 8) as usize;

/// Fills `buf` with `value` one byte at a time.
///
/// The reference implementation: no alignment games, just a byte loop. The
/// word-wise routines in this crate are byte-for-byte equivalent to it.
///
/// # Example
///
/// ```
/// use memfill::fill_bytewise;
///
/// let mut buf = [0u8; 16];
/// fill_bytewise(&mut buf, 0x42);
/// assert!(buf.iter().all(|&b| b == 0x42));
/// ```
#[inline]
pub fn fill_bytewise(buf: &mut [u8], value: u8) {
    for byte in buf.iter_mut() {
        *byte = value;
    }
}

/// Fills `buf` with `value` using native-word stores for the aligned interior.
///
/// The range is spliced into a byte-wise prologue up to the first word
/// boundary, a bulk loop storing the replicated pattern one word at a time,
/// and a byte-wise epilogue for the trailing remainder. Neither the start
/// address nor the length needs to be word-aligned; ranges shorter than one
/// word are filled entirely by the prologue and epilogue.
///
/// # Example
///
/// ```
/// use memfill::fill_wordwise;
///
/// let mut buf = [0u8; 37];
/// fill_wordwise(&mut buf[3..], 0xAB);
/// assert!(buf[3..].iter().all(|&b| b == 0xAB));
/// assert!(buf[..3].iter().all(|&b| b == 0));
/// ```
#[inline]
pub fn fill_wordwise(buf: &mut [u8], value: u8) {
    let splice = Splice::of(buf.as_ptr() as usize, buf.len(), BYTES_PER_WORD);
    let (prologue, rest) = buf.split_at_mut(splice.prologue);
    let (bulk, epilogue) = rest.split_at_mut(splice.words * BYTES_PER_WORD);

    for byte in prologue.iter_mut() {
        *byte = value;
    }

    let pattern = repeat_byte_usize(value);
    let mut word = bulk.as_mut_ptr().cast::<usize>();
    for _ in 0..splice.words {
        // SAFETY: `bulk` starts at a word boundary (the prologue consumed the
        // misalignment) and holds exactly `splice.words` whole words.
        unsafe {
            word.write(pattern);
            word = word.add(1);
        }
    }

    for byte in epilogue.iter_mut() {
        *byte = value;
    }
}

/// Fills `buf` with `value` using 32-bit stores for the aligned interior.
///
/// Fixed-width specialization of [`fill_wordwise`]: the splice is identical,
/// but the pattern replication is unrolled to two doublings instead of a loop
/// bounded by the platform word width. Behaviorally identical to the generic
/// version.
#[inline]
pub fn fill_wordwise_u32(buf: &mut [u8], value: u8) {
    const BYTES: usize = (u32::BITS / 8) as usize;

    let splice = Splice::of(buf.as_ptr() as usize, buf.len(), BYTES);
    let (prologue, rest) = buf.split_at_mut(splice.prologue);
    let (bulk, epilogue) = rest.split_at_mut(splice.words * BYTES);

    for byte in prologue.iter_mut() {
        *byte = value;
    }

    let mut pattern = u32::from(value);
    pattern |= pattern << 8;
    pattern |= pattern << 16;

    let mut word = bulk.as_mut_ptr().cast::<u32>();
    for _ in 0..splice.words {
        // SAFETY: `bulk` starts at a 4-byte boundary and holds exactly
        // `splice.words` whole `u32`s.
        unsafe {
            word.write(pattern);
            word = word.add(1);
        }
    }

    for byte in epilogue.iter_mut() {
        *byte = value;
    }
}

/// Fills a word-aligned `buf` with `value` using native-word stores only.
///
/// No prologue or epilogue: the caller guarantees alignment, so the whole
/// range is covered by the bulk loop.
///
/// # Panics
///
/// Panics if `buf` does not start on a word boundary or if its length is not
/// a whole number of words. Use [`fill_wordwise`] for ranges that cannot
/// guarantee either.
pub fn fill_wordwise_aligned(buf: &mut [u8], value: u8) {
    assert_eq!(
        buf.as_ptr() as usize % BYTES_PER_WORD,
        0,
        "buffer does not start on a word boundary"
    );
    assert_eq!(
        buf.len() % BYTES_PER_WORD,
        0,
        "buffer length is not a whole number of words"
    );

    let pattern = repeat_byte_usize(value);
    let words = buf.len() / BYTES_PER_WORD;
    let mut word = buf.as_mut_ptr().cast::<usize>();
    for _ in 0..words {
        // SAFETY: alignment and length were checked above, so `buf` holds
        // exactly `words` whole words starting at a word boundary.
        unsafe {
            word.write(pattern);
            word = word.add(1);
        }
    }
}

/// Fills a 4-byte-aligned `buf` with `value` using 32-bit stores only.
///
/// Fixed-width specialization of [`fill_wordwise_aligned`].
///
/// # Panics
///
/// Panics if `buf` does not start on a 4-byte boundary or if its length is
/// not a multiple of 4.
pub fn fill_wordwise_aligned_u32(buf: &mut [u8], value: u8) {
    const BYTES: usize = (u32::BITS / 8) as usize;

    assert_eq!(
        buf.as_ptr() as usize % BYTES,
        0,
        "buffer does not start on a 4-byte boundary"
    );
    assert_eq!(
        buf.len() % BYTES,
        0,
        "buffer length is not a multiple of 4"
    );

    let pattern = repeat_byte_u32(value);
    let words = buf.len() / BYTES;
    let mut word = buf.as_mut_ptr().cast::<u32>();
    for _ in 0..words {
        // SAFETY: alignment and length were checked above.
        unsafe {
            word.write(pattern);
            word = word.add(1);
        }
    }
}

/// Fills `len` bytes starting at `start` with `value` and returns `start`.
///
/// Drop-in replacement for the conventional fill-routine signature. The
/// region is written word-wise like [`fill_wordwise`]; a zero `len` performs
/// no writes.
///
/// # Safety
///
/// When `len` is nonzero, `start` must point to a writable region of at
/// least `len` bytes, and no other reference into that region may be live
/// for the duration of the call.
#[inline]
pub unsafe fn fill_raw(start: *mut u8, value: u8, len: usize) -> *mut u8 {
    if len > 0 {
        // SAFETY: caller guarantees `start..start + len` is valid for writes
        // and unaliased.
        let buf = unsafe { core::slice::from_raw_parts_mut(start, len) };
        fill_wordwise(buf, value);
    }

    start
}

/// Fills `len` bytes of `buf` starting at `offset`, after validating bounds.
///
/// The checked counterpart to the precondition-contract routines: a range
/// that does not fit in `buf` is reported as [`FillError::OutOfBounds`] and
/// leaves `buf` untouched, instead of panicking.
///
/// # Example
///
/// ```
/// use memfill::{FillError, try_fill};
///
/// let mut buf = [0u8; 16];
///
/// try_fill(&mut buf, 2, 7, 0xCD)?;
/// assert!(buf[2..9].iter().all(|&b| b == 0xCD));
///
/// assert!(try_fill(&mut buf, 10, 7, 0xCD).is_err());
/// # Ok::<(), FillError>(())
/// ```
pub fn try_fill(buf: &mut [u8], offset: usize, len: usize, value: u8) -> Result<(), FillError> {
    let end = offset
        .checked_add(len)
        .filter(|&end| end <= buf.len())
        .ok_or(FillError::OutOfBounds {
            offset,
            len,
            capacity: buf.len(),
        })?;

    fill_wordwise(&mut buf[offset..end], value);

    Ok(())
}
