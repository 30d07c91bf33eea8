// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word-pattern construction: replicating a fill byte across every byte lane
//! of an integer type.
//!
//! The builders use the doubling construction: start with the byte in the low
//! 8 bits, then repeatedly OR the pattern with itself shifted left by its
//! current significant width (8 → 16 → 32 → …) until the width reaches the
//! type's bit width. The same code works for any power-of-two word width
//! without hardcoding 32 or 64.

/// Generates `repeat_byte_{type}` pattern builders for integer types.
macro_rules! impl_repeat_byte {
    ($type:ty, $fn:ident) => {
        #[doc = concat!("Replicates `value` across every byte lane of a `", stringify!($type), "`.")]
        ///
        /// # Example
        ///
        /// ```
        #[doc = concat!("use memfill::", stringify!($fn), ";")]
        ///
        #[doc = concat!("let pattern = ", stringify!($fn), "(0xAB);")]
        /// assert!(pattern.to_ne_bytes().iter().all(|&b| b == 0xAB));
        /// ```
        #[inline(always)]
        pub fn $fn(value: u8) -> $type {
            let mut pattern = value as $type;
            let mut width = 8u32;

            while width < <$type>::BITS {
                pattern |= pattern << width;
                width *= 2;
            }

            pattern
        }
    };
}

impl_repeat_byte!(u16, repeat_byte_u16);
impl_repeat_byte!(u32, repeat_byte_u32);
impl_repeat_byte!(u64, repeat_byte_u64);
impl_repeat_byte!(usize, repeat_byte_usize);
