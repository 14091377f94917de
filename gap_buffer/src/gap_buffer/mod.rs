// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`GapBuffer`] engine.
//!
//! # Module Architecture
//!
//! [`GapBuffer`] is a single concrete type. Its inherent methods are split across files
//! by responsibility, all operating on the state declared in `gb_core`:
//!
//! | File                 | Responsibility                                              |
//! | :------------------- | :---------------------------------------------------------- |
//! | `gb_core`            | Struct, constructors, introspection, bounds and addressing  |
//! | `gb_storage_ops`     | Growth, reallocation, [`compact()`], [`reserve()`]          |
//! | `gb_gap_ops`         | Relocating the gap, [`defragment()`]                        |
//! | `gb_insert_ops`      | [`insert()`] and friends                                    |
//! | `gb_delete_ops`      | [`delete()`], [`clear()`]                                   |
//! | `gb_assign_ops`      | [`replace()`], [`set_item_at()`]                            |
//! | `gb_increment_ops`   | [`increment()`]                                             |
//! | `gb_read_ops`        | [`retrieve()`], [`item_at()`], [`iter()`]                   |
//! | `gb_derive_ops`      | [`slice()`], [`concat()`], [`repeat()`]                     |
//! | `gb_ordering`        | [`compare()`], `Eq`, `Ord`, `Display`                       |
//! | `zero_copy_access`   | [`pin()`], [`pin_raw()`], [`unpin_raw()`]                   |
//!
//! # Edit flow
//!
//! Every structural edit runs the same steps, and nothing is mutated until the first
//! three have passed:
//!
//! 1. Refuse if pinned ([`GapBufferError::Locked`]).
//! 2. Check the item kind ([`GapBufferError::TypeMismatch`]).
//! 3. Check positions and lengths in elements ([`GapBufferError::OutOfRange`]).
//! 4. Grow the arena if the gap is too small.
//! 5. Move the gap to the edit point.
//! 6. Copy once.
//!
//! [`GapBufferError::Locked`]: crate::GapBufferError::Locked
//! [`GapBufferError::TypeMismatch`]: crate::GapBufferError::TypeMismatch
//! [`GapBufferError::OutOfRange`]: crate::GapBufferError::OutOfRange
//! [`compact()`]: GapBuffer::compact
//! [`reserve()`]: GapBuffer::reserve
//! [`defragment()`]: GapBuffer::defragment
//! [`insert()`]: GapBuffer::insert
//! [`delete()`]: GapBuffer::delete
//! [`clear()`]: GapBuffer::clear
//! [`replace()`]: GapBuffer::replace
//! [`set_item_at()`]: GapBuffer::set_item_at
//! [`increment()`]: GapBuffer::increment
//! [`retrieve()`]: GapBuffer::retrieve
//! [`item_at()`]: GapBuffer::item_at
//! [`iter()`]: GapBuffer::iter
//! [`slice()`]: GapBuffer::slice
//! [`concat()`]: GapBuffer::concat
//! [`repeat()`]: GapBuffer::repeat
//! [`compare()`]: GapBuffer::compare
//! [`pin()`]: GapBuffer::pin
//! [`pin_raw()`]: GapBuffer::pin_raw
//! [`unpin_raw()`]: GapBuffer::unpin_raw

// Attach.
mod gb_assign_ops;
mod gb_core;
mod gb_delete_ops;
mod gb_derive_ops;
mod gb_gap_ops;
mod gb_increment_ops;
mod gb_insert_ops;
mod gb_ordering;
mod gb_read_ops;
mod gb_storage_ops;
mod zero_copy_access;

// Re-export.
pub use gb_core::*;
pub use gb_ordering::DISPLAY_MAX_INTEGERS;
pub use gb_read_ops::{ItemIter, RetrievedText};
pub use zero_copy_access::*;
