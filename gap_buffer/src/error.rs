// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors from [`GapBuffer`] operations. See [`GapBufferError`] for details.
//!
//! [`GapBuffer`]: crate::GapBuffer

/// Errors from every fallible [`GapBuffer`] operation.
///
/// All variants are reported before any mutation happens, so a buffer that returned an
/// error is in exactly the state it was in before the call.
///
/// | Variant          | Cause                                                         |
/// | :--------------- | :------------------------------------------------------------ |
/// | [`OutOfRange`]   | Position or length outside the valid element range            |
/// | [`TypeMismatch`] | Wrong item kind, undecodable element, misaligned raw bytes     |
/// | [`NotIterable`]  | A host value given for a bulk integer insert is not a sequence |
/// | [`Locked`]       | Mutation attempted while a zero-copy view is pinned           |
/// | [`CapacityOverflow`] | Requested arena larger than `isize::MAX` bytes            |
///
/// [`GapBuffer`]: crate::GapBuffer
/// [`OutOfRange`]: Self::OutOfRange
/// [`TypeMismatch`]: Self::TypeMismatch
/// [`NotIterable`]: Self::NotIterable
/// [`Locked`]: Self::Locked
/// [`CapacityOverflow`]: Self::CapacityOverflow
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GapBufferError {
    #[error(
        "GapBuffer.{operation}: out of range (position: {position}, length: {length}, \
         element count: {element_count})"
    )]
    #[diagnostic(
        code(r3bl_gap_buffer::out_of_range),
        help("Positions and lengths are counted in elements, not bytes")
    )]
    OutOfRange {
        operation: &'static str,
        position: usize,
        length: usize,
        element_count: usize,
    },

    #[error("GapBuffer.{operation}: wrong type (expected {expected}, found {found})")]
    #[diagnostic(code(r3bl_gap_buffer::type_mismatch))]
    TypeMismatch {
        operation: &'static str,
        expected: String,
        found: String,
    },

    #[error("GapBuffer.{operation}: argument not iterable")]
    #[diagnostic(
        code(r3bl_gap_buffer::not_iterable),
        help("Integer buffers take a sequence of integers, not a single value")
    )]
    NotIterable { operation: &'static str },

    /// Outstanding zero-copy views would be invalidated by this mutation.
    #[error("GapBuffer.{operation}: object is locked ({pin_count} outstanding pins)")]
    #[diagnostic(
        code(r3bl_gap_buffer::locked),
        help("Drop every PinGuard and hand back every RawPin before mutating")
    )]
    Locked {
        operation: &'static str,
        pin_count: usize,
    },

    #[error(
        "GapBuffer.{operation}: capacity overflow (room for {additional_items} more \
         elements requested)"
    )]
    #[diagnostic(
        code(r3bl_gap_buffer::capacity_overflow),
        help("An arena can hold at most isize::MAX bytes")
    )]
    CapacityOverflow {
        operation: &'static str,
        additional_items: usize,
    },
}

impl GapBufferError {
    pub(crate) fn type_mismatch(
        operation: &'static str,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GapBufferError>;
