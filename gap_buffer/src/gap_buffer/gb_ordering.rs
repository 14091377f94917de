// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Equality, ordering and the textual rendering of a [`GapBuffer`]. Both only look at
//! the logical content: where the gap sits and how much capacity is allocated never
//! affect the result.

use std::{cmp::Ordering,
          fmt::{Display, Formatter, Result as FmtResult}};

use super::{GapBuffer, gb_read_ops::decode_wide};
use crate::ItemKind;

/// How many elements an integer buffer renders before eliding the rest.
pub const DISPLAY_MAX_INTEGERS: usize = 10;

impl GapBuffer {
    /// Total order over buffers. Buffers of different kinds order by type code
    /// (`'c' < 'i' < 'u'`). Buffers of the same kind compare element by element, and
    /// when one is a prefix of the other the shorter comes first.
    #[must_use]
    pub fn compare(&self, other: &GapBuffer) -> Ordering {
        self.item_kind
            .type_code()
            .cmp(&other.item_kind.type_code())
            .then_with(|| match self.item_kind {
                // Byte order is element order, compare the segments directly.
                ItemKind::Byte => {
                    let (lhs_1, lhs_2) = self.segments();
                    let (rhs_1, rhs_2) = other.segments();
                    lhs_1
                        .iter()
                        .chain(lhs_2)
                        .cmp(rhs_1.iter().chain(rhs_2))
                }
                ItemKind::WideChar | ItemKind::Integer => self.iter().cmp(other.iter()),
            })
    }
}

impl PartialEq for GapBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.item_kind == other.item_kind
            && self.content_length == other.content_length
            && self.compare(other) == Ordering::Equal
    }
}

impl Eq for GapBuffer {}

impl PartialOrd for GapBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for GapBuffer {
    fn cmp(&self, other: &Self) -> Ordering { self.compare(other) }
}

/// - Byte buffers render as an escaped byte string literal, `b"abc\n"`.
/// - Wide char buffers render as their text, with unpaired surrogates replaced.
/// - Integer buffers render as `GapBuffer('i') [1, 2, 3]`, eliding everything past the
///   first [`DISPLAY_MAX_INTEGERS`] elements.
impl Display for GapBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.item_kind {
            ItemKind::Byte => write!(f, "b\"{}\"", self.to_raw_vec().escape_ascii()),
            ItemKind::WideChar => {
                let units = decode_wide(&self.to_raw_vec());
                write!(f, "{}", String::from_utf16_lossy(&units))
            }
            ItemKind::Integer => {
                write!(f, "GapBuffer('{}') [", self.item_kind.type_code())?;
                for (index, item) in self.iter().take(DISPLAY_MAX_INTEGERS).enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if self.len() > DISPLAY_MAX_INTEGERS {
                    write!(f, ", ...")?;
                }
                write!(f, "]")
            }
        }
    }
}
