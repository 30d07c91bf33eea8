// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use memfill::{fill_bytewise, fill_wordwise_u32};

/// Word-aligned backing store so tests control misalignment exactly.
#[repr(align(16))]
struct AlignedBuf<const N: usize>([u8; N]);

#[test]
fn test_fill_wordwise_u32_every_value() {
    let mut buf = AlignedBuf([0u8; 128]);
    let len = buf.0.len();

    for value in 0..=u8::MAX {
        fill_wordwise_u32(&mut buf.0, value);
        assert!(buf.0.iter().all(|&b| b == value), "value {value} mismatch");

        fill_wordwise_u32(&mut buf.0[1..len - 1], value.wrapping_add(1));
        assert!(
            buf.0[1..len - 1].iter().all(|&b| b == value.wrapping_add(1)),
            "value {value} misaligned mismatch"
        );
    }
}

#[test]
fn test_fill_wordwise_u32_worked_example() {
    // 7 bytes starting at offset 2 in a 4-byte-word world: two prologue
    // bytes at 2..4, one word at 4..8, one epilogue byte at 8.
    let mut buf = AlignedBuf([0xA5u8; 16]);

    fill_wordwise_u32(&mut buf.0[2..9], 0x00);

    assert!(buf.0[..2].iter().all(|&b| b == 0xA5));
    assert!(buf.0[2..9].iter().all(|&b| b == 0x00));
    assert!(buf.0[9..].iter().all(|&b| b == 0xA5));
}

#[test]
fn test_fill_wordwise_u32_every_offset_and_length() {
    let mut buf = AlignedBuf([0u8; 32]);

    for offset in 0..8 {
        for len in 0..16 {
            buf.0 = [0xA5; 32];
            let mut expected = [0xA5u8; 32];

            fill_wordwise_u32(&mut buf.0[offset..offset + len], 0xC3);
            fill_bytewise(&mut expected[offset..offset + len], 0xC3);

            assert_eq!(buf.0, expected, "mismatch for offset={offset} len={len}");
        }
    }
}

#[test]
fn test_fill_wordwise_u32_empty_slice() {
    let mut buf: [u8; 0] = [];
    fill_wordwise_u32(&mut buf, 0xFF);
    assert!(buf.is_empty());
}
