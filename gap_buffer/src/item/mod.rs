// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The closed set of element kinds and everything that depends on the kind: widths,
//! encode/decode, and the increment kernels.

// Attach.
pub mod increment_kernel;
pub mod item_kind;
pub mod item_value;

// Re-export.
pub use increment_kernel::*;
pub use item_kind::*;
pub use item_value::*;
