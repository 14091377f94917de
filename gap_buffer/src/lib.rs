// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_gap_buffer
//!
//! A gap buffer: a mutable, randomly indexable sequence of fixed-width elements kept in
//! one contiguous arena with a movable hole (the gap) at the most recent edit point.
//! Edits near the same place cost time proportional to the distance the gap moves, not
//! to the size of the buffer.
//!
//! ```text
//!  ┌──────────── segment 1 ───────────┬────── gap ──────┬──── segment 2 ────┐
//!  │ T  h  e     q  u  i  c  k        │ .  .  .  .  .   │ b  r  o  w  n     │
//!  └──────────────────────────────────┴─────────────────┴───────────────────┘
//! ```
//!
//! A buffer holds exactly one [`ItemKind`] for its whole life:
//!
//! | Kind                  | Element | Width |
//! | :-------------------- | :------ | :---- |
//! | [`ItemKind::Byte`]     | [`u8`]  | 1     |
//! | [`ItemKind::WideChar`] | [`u16`] | 2     |
//! | [`ItemKind::Integer`]  | [`i32`] | 4     |
//!
//! # Example
//!
//! ```
//! use r3bl_gap_buffer::{BufferAppearance, GapBuffer};
//!
//! let mut buffer = GapBuffer::from_text("The quick fox");
//! buffer.insert_str(10, "brown ").unwrap();
//! assert_eq!(buffer.to_string(), "The quick brown fox");
//!
//! // Edits near the last one are cheap, the gap is already there.
//! buffer.delete(10, 6).unwrap();
//! buffer.insert_str(10, "red ").unwrap();
//!
//! let mut integers = GapBuffer::from_integers(&[1, 2, 3]);
//! integers.increment(0, 3, 10).unwrap();
//! assert_eq!(integers.to_string(), "GapBuffer('i') [11, 12, 13]");
//!
//! // Zero-copy views lock out mutation until released.
//! let guard = integers.pin(BufferAppearance::Contiguous).unwrap();
//! assert_eq!(guard.len_bytes(), 12);
//! drop(guard);
//! integers.extend(&[14_i32]).unwrap();
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with a [`GapBufferError`], which is also
//! a [`miette::Diagnostic`]. Operations validate fully before mutating, so an error
//! always leaves the buffer as it was.
//!
//! # Logging
//!
//! Reallocation, compaction and pinning emit [`tracing`] events at `trace` and `debug`
//! level. Nothing is printed unless the application installs a subscriber.
//!
//! # Host boundary
//!
//! Embedding the buffer in a dynamically typed host goes through the [`HostCodec`]
//! trait. [`DynamicHost`] is a reference implementation over [`HostValue`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod config;
pub mod error;
pub mod gap_buffer;
pub mod host;
pub mod item;

// Re-export.
pub use config::*;
pub use error::*;
pub use gap_buffer::*;
pub use host::*;
pub use item::*;
