// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::pattern::{repeat_byte_u16, repeat_byte_u32, repeat_byte_u64, repeat_byte_usize};

#[test]
fn test_repeat_byte_u32_known_value() {
    assert_eq!(repeat_byte_u32(0xAB), 0xABAB_ABAB);
}

#[test]
fn test_repeat_byte_u16_known_value() {
    assert_eq!(repeat_byte_u16(0xFF), 0xFFFF);
}

#[test]
fn test_repeat_byte_u64_known_value() {
    assert_eq!(repeat_byte_u64(0x5A), 0x5A5A_5A5A_5A5A_5A5A);
}

#[test]
fn test_repeat_byte_zero() {
    assert_eq!(repeat_byte_u16(0), 0);
    assert_eq!(repeat_byte_u32(0), 0);
    assert_eq!(repeat_byte_u64(0), 0);
    assert_eq!(repeat_byte_usize(0), 0);
}

#[test]
fn test_repeat_byte_usize_every_lane() {
    for value in 0..=u8::MAX {
        let pattern = repeat_byte_usize(value);
        assert!(pattern.to_ne_bytes().iter().all(|&b| b == value));
    }
}
