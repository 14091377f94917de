// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The fixed-width element type a [`GapBuffer`](crate::GapBuffer) holds. Chosen once at
/// construction and never changed.
///
/// | Kind       | Type code | Width | Element |
/// | :--------- | :-------- | :---- | :------ |
/// | `Byte`     | `'c'`     | 1     | [`u8`]  |
/// | `WideChar` | `'u'`     | 2     | [`u16`] |
/// | `Integer`  | `'i'`     | 4     | [`i32`] |
///
/// Elements are stored in native byte order, so a pinned view of an integer buffer can
/// be reinterpreted as `[i32]` by the consumer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Byte,
    WideChar,
    Integer,
}

impl ItemKind {
    /// Size of one element in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            ItemKind::Byte => 1,
            ItemKind::WideChar => 2,
            ItemKind::Integer => 4,
        }
    }

    /// Single character type code, also the sort key between buffers of different
    /// kinds (`'c' < 'i' < 'u'`).
    #[must_use]
    pub const fn type_code(self) -> char {
        match self {
            ItemKind::Byte => 'c',
            ItemKind::WideChar => 'u',
            ItemKind::Integer => 'i',
        }
    }

    /// Text kinds can be handed out by [`retrieve()`](crate::GapBuffer::retrieve).
    #[must_use]
    pub const fn is_text(self) -> bool { !matches!(self, ItemKind::Integer) }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case(ItemKind::Byte, 1)]
    #[test_case(ItemKind::WideChar, 2)]
    #[test_case(ItemKind::Integer, 4)]
    fn test_width(kind: ItemKind, expected: usize) {
        assert_eq!(kind.width(), expected);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        for kind in ItemKind::iter() {
            assert_eq!(ItemKind::from_str(&kind.to_string()), Ok(kind));
        }
        assert_eq!(ItemKind::from_str("wide_char"), Ok(ItemKind::WideChar));
        assert!(ItemKind::from_str("float").is_err());
    }

    #[test]
    fn test_type_code_order() {
        assert!(ItemKind::Byte.type_code() < ItemKind::Integer.type_code());
        assert!(ItemKind::Integer.type_code() < ItemKind::WideChar.type_code());
    }
}
