// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Marshalling between [`GapBuffer`](crate::GapBuffer) elements and the values of a
//! dynamically typed host, behind the [`HostCodec`] trait.

// Attach.
pub mod dynamic_host;
pub mod host_codec;

// Re-export.
pub use dynamic_host::*;
pub use host_codec::*;
