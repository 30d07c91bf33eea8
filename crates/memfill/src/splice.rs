// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Range decomposition for word-wise filling.

/// Decomposition of a byte range into prologue, bulk and epilogue.
///
/// The three sub-ranges partition the original range exactly:
/// `prologue + words * bytes_per_word + epilogue == len`, with no gap or
/// overlap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice {
    /// Unaligned leading bytes, in `[0, bytes_per_word)`.
    pub prologue: usize,
    /// Whole aligned words between prologue and epilogue.
    pub words: usize,
    /// Unaligned trailing bytes, in `[0, bytes_per_word)`.
    pub epilogue: usize,
}

impl Splice {
    /// Splits the `len`-byte range starting at address `addr` for stores of
    /// `bytes_per_word` bytes.
    ///
    /// Ranges shorter than one word degrade gracefully: the prologue (or the
    /// epilogue, if `addr` is already aligned) absorbs the whole range and
    /// `words` is zero.
    ///
    /// `bytes_per_word` must be a power of two.
    ///
    /// # Example
    ///
    /// ```
    /// use memfill::Splice;
    ///
    /// // 7 bytes starting at address 2, 4-byte words: two prologue bytes
    /// // reach the boundary at 4, one word covers 4..8, one byte remains.
    /// let splice = Splice::of(2, 7, 4);
    /// assert_eq!(splice, Splice { prologue: 2, words: 1, epilogue: 1 });
    /// ```
    #[inline]
    pub fn of(addr: usize, len: usize, bytes_per_word: usize) -> Self {
        debug_assert!(bytes_per_word.is_power_of_two());

        let misalignment = addr % bytes_per_word;
        let prologue = if misalignment == 0 {
            0
        } else {
            (bytes_per_word - misalignment).min(len)
        };
        let rest = len - prologue;

        Self {
            prologue,
            words: rest / bytes_per_word,
            epilogue: rest % bytes_per_word,
        }
    }
}
