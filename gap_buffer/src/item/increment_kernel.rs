// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Element-wise in-place addition over a run of encoded elements, one kernel per item
//! width. Addition wraps, and `value` is truncated to the element width first, so a
//! byte buffer incremented by `-1` decrements every byte.

use super::ItemKind;

/// Add `value` to every element encoded in `bytes`. `bytes.len()` must be a multiple of
/// `kind.width()`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn increment_in_place(kind: ItemKind, bytes: &mut [u8], value: i32) {
    debug_assert!(bytes.len().is_multiple_of(kind.width()));
    match kind {
        ItemKind::Byte => {
            let delta = value as u8;
            for it in bytes.iter_mut() {
                *it = it.wrapping_add(delta);
            }
        }
        ItemKind::WideChar => {
            let delta = value as u16;
            for chunk in bytes.chunks_exact_mut(2) {
                let it = u16::from_ne_bytes([chunk[0], chunk[1]]).wrapping_add(delta);
                chunk.copy_from_slice(&it.to_ne_bytes());
            }
        }
        ItemKind::Integer => {
            for chunk in bytes.chunks_exact_mut(4) {
                let it = i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
                    .wrapping_add(value);
                chunk.copy_from_slice(&it.to_ne_bytes());
            }
        }
    }
}
