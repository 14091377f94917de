// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoded elements ([`Item`]) and typed runs of elements to insert ([`Items`]). This is
//! the encode/decode pair for each item width: everything that enters the arena goes
//! through [`Items::encode()`] and everything that leaves it through [`Item::decode()`].

use std::borrow::Cow;

use super::ItemKind;

/// One decoded element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Byte(u8),
    WideChar(u16),
    Integer(i32),
}

impl Item {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Item::Byte(_) => ItemKind::Byte,
            Item::WideChar(_) => ItemKind::WideChar,
            Item::Integer(_) => ItemKind::Integer,
        }
    }

    /// Decode one element from exactly `kind.width()` native-endian bytes.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than the width of `kind`. Callers slice with
    /// [`ItemKind::width()`], so this is an internal invariant.
    #[must_use]
    pub fn decode(kind: ItemKind, bytes: &[u8]) -> Self {
        match kind {
            ItemKind::Byte => Item::Byte(bytes[0]),
            ItemKind::WideChar => Item::WideChar(u16::from_ne_bytes([bytes[0], bytes[1]])),
            ItemKind::Integer => Item::Integer(i32::from_ne_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ])),
        }
    }

    /// Write this element's native-endian bytes into `out`, which must be exactly as
    /// wide as the element.
    pub fn encode_into(&self, out: &mut [u8]) {
        match self {
            Item::Byte(it) => out.copy_from_slice(&[*it]),
            Item::WideChar(it) => out.copy_from_slice(&it.to_ne_bytes()),
            Item::Integer(it) => out.copy_from_slice(&it.to_ne_bytes()),
        }
    }
}

/// The numeric value of the element.
impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Byte(it) => write!(f, "{it}"),
            Item::WideChar(it) => write!(f, "{it}"),
            Item::Integer(it) => write!(f, "{it}"),
        }
    }
}

impl From<u8> for Item {
    fn from(it: u8) -> Self { Item::Byte(it) }
}

impl From<u16> for Item {
    fn from(it: u16) -> Self { Item::WideChar(it) }
}

impl From<i32> for Item {
    fn from(it: i32) -> Self { Item::Integer(it) }
}

/// A typed run of elements, borrowed where the caller already has the right layout.
///
/// `&str` converts into [`Items::WideChars`] (UTF-16 code units), since that is the only
/// text representation with a fixed element width wider than a byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Items<'a> {
    Bytes(Cow<'a, [u8]>),
    WideChars(Cow<'a, [u16]>),
    Integers(Cow<'a, [i32]>),
}

impl Items<'_> {
    /// An empty run of the given kind.
    #[must_use]
    pub fn empty(kind: ItemKind) -> Items<'static> {
        match kind {
            ItemKind::Byte => Items::Bytes(Cow::Borrowed(&[])),
            ItemKind::WideChar => Items::WideChars(Cow::Borrowed(&[])),
            ItemKind::Integer => Items::Integers(Cow::Borrowed(&[])),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Items::Bytes(_) => ItemKind::Byte,
            Items::WideChars(_) => ItemKind::WideChar,
            Items::Integers(_) => ItemKind::Integer,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Items::Bytes(it) => it.len(),
            Items::WideChars(it) => it.len(),
            Items::Integers(it) => it.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Native-endian bytes, ready to copy into the arena. Byte runs are not copied.
    #[must_use]
    pub fn encode(&self) -> Cow<'_, [u8]> {
        match self {
            Items::Bytes(it) => Cow::Borrowed(it.as_ref()),
            Items::WideChars(it) => {
                Cow::Owned(it.iter().flat_map(|unit| unit.to_ne_bytes()).collect())
            }
            Items::Integers(it) => {
                Cow::Owned(it.iter().flat_map(|value| value.to_ne_bytes()).collect())
            }
        }
    }
}

impl<'a> From<&'a [u8]> for Items<'a> {
    fn from(it: &'a [u8]) -> Self { Items::Bytes(Cow::Borrowed(it)) }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Items<'a> {
    fn from(it: &'a [u8; N]) -> Self { Items::Bytes(Cow::Borrowed(it.as_slice())) }
}

impl From<Vec<u8>> for Items<'_> {
    fn from(it: Vec<u8>) -> Self { Items::Bytes(Cow::Owned(it)) }
}

impl<'a> From<&'a [u16]> for Items<'a> {
    fn from(it: &'a [u16]) -> Self { Items::WideChars(Cow::Borrowed(it)) }
}

impl From<Vec<u16>> for Items<'_> {
    fn from(it: Vec<u16>) -> Self { Items::WideChars(Cow::Owned(it)) }
}

impl From<&str> for Items<'_> {
    fn from(it: &str) -> Self { Items::WideChars(Cow::Owned(it.encode_utf16().collect())) }
}

impl<'a> From<&'a [i32]> for Items<'a> {
    fn from(it: &'a [i32]) -> Self { Items::Integers(Cow::Borrowed(it)) }
}

impl<'a, const N: usize> From<&'a [i32; N]> for Items<'a> {
    fn from(it: &'a [i32; N]) -> Self { Items::Integers(Cow::Borrowed(it.as_slice())) }
}

impl From<Vec<i32>> for Items<'_> {
    fn from(it: Vec<i32>) -> Self { Items::Integers(Cow::Owned(it)) }
}

impl From<Item> for Items<'_> {
    fn from(it: Item) -> Self {
        match it {
            Item::Byte(value) => Items::Bytes(Cow::Owned(vec![value])),
            Item::WideChar(value) => Items::WideChars(Cow::Owned(vec![value])),
            Item::Integer(value) => Items::Integers(Cow::Owned(vec![value])),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(Item::Byte(0xAB))]
    #[test_case(Item::WideChar(0x263A))]
    #[test_case(Item::Integer(-7))]
    fn test_encode_then_decode(item: Item) {
        let mut bytes = [0_u8; 4];
        let width = item.kind().width();
        item.encode_into(&mut bytes[..width]);
        assert_eq!(Item::decode(item.kind(), &bytes[..width]), item);
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(Item::Byte(b'a').to_string(), "97");
        assert_eq!(Item::WideChar(0x263A).to_string(), "9786");
        assert_eq!(Item::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn test_str_becomes_utf16_units() {
        let items = Items::from("hé");
        assert_eq!(items.kind(), ItemKind::WideChar);
        assert_eq!(items.len(), 2);
        assert_eq!(items, Items::WideChars(Cow::Owned(vec![0x68, 0xE9])));
    }

    #[test]
    fn test_encode_bytes_borrows() {
        let items = Items::from(b"abc");
        assert!(matches!(items.encode(), Cow::Borrowed(b"abc")));
    }

    #[test]
    fn test_encode_integers_native_endian() {
        let items = Items::from(&[1_i32, -1]);
        let mut expected = 1_i32.to_ne_bytes().to_vec();
        expected.extend_from_slice(&(-1_i32).to_ne_bytes());
        assert_eq!(items.encode().as_ref(), expected.as_slice());
        assert_eq!(items.len(), 2);
        assert!(!items.is_empty());
    }
}
