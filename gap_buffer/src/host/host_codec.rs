// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The capability boundary between a [`GapBuffer`] and a dynamically typed host.
//!
//! The core never inspects host values itself. Everything it needs to know about them
//! goes through a [`HostCodec`]: how to read a text run, how to traverse a sequence,
//! how to decode an integer element, how to build a host value from an element, and how
//! to recognize another gap buffer for comparison.

use std::cmp::Ordering;

use crate::{GapBuffer, GapBufferError, Item, ItemKind, Items, Result};

/// Conversions between host values and gap buffer elements.
pub trait HostCodec {
    type Value;

    /// Host type name of `value`, for error messages.
    fn type_name(&self, value: &Self::Value) -> String;

    /// `value` as a run of text elements (bytes or UTF-16 code units), if it is text.
    fn as_items<'v>(&self, value: &'v Self::Value) -> Option<Items<'v>>;

    /// The elements of `value`, or [`None`] if it cannot be traversed.
    fn iterate(&self, value: &Self::Value) -> Option<Vec<Self::Value>>;

    /// `value` as an integer element, or [`None`] if it is not an integer that fits.
    fn decode_integer(&self, value: &Self::Value) -> Option<i32>;

    fn encode_item(&self, item: Item) -> Self::Value;

    /// The gap buffer wrapped by `value`, if any.
    fn as_gap_buffer<'v>(&self, value: &'v Self::Value) -> Option<&'v GapBuffer>;
}

impl GapBuffer {
    /// Create a buffer of `item_kind` holding the elements of a host value.
    ///
    /// # Errors
    ///
    /// See [`insert_from_host()`](Self::insert_from_host).
    pub fn from_host<C: HostCodec>(
        codec: &C,
        item_kind: ItemKind,
        value: &C::Value,
    ) -> Result<Self> {
        let mut it = Self::new(item_kind);
        it.insert_from_host(codec, 0, value)?;
        Ok(it)
    }

    /// Insert the elements of a host value before element `position`.
    ///
    /// Text buffers take host text of the matching kind, integer buffers take any
    /// traversable host value whose elements are integers. Both also take another gap
    /// buffer of the same kind.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`] while pinned.
    /// - [`GapBufferError::NotIterable`] if an integer buffer is given a value that
    ///   cannot be traversed.
    /// - [`GapBufferError::TypeMismatch`] if the value or one of its elements has the
    ///   wrong type. Nothing is inserted in that case.
    /// - [`GapBufferError::OutOfRange`] if `position > len()`.
    pub fn insert_from_host<C: HostCodec>(
        &mut self,
        codec: &C,
        position: usize,
        value: &C::Value,
    ) -> Result<()> {
        self.ensure_unlocked("insert")?;
        let items = self.decode_host_items(codec, "insert", value)?;
        self.insert(position, items)
    }

    /// # Errors
    ///
    /// See [`insert_from_host()`](Self::insert_from_host).
    pub fn extend_from_host<C: HostCodec>(
        &mut self,
        codec: &C,
        value: &C::Value,
    ) -> Result<()> {
        self.insert_from_host(codec, self.len(), value)
    }

    /// Replace `[lo, hi)` (clamped) with the elements of a host value, or delete the
    /// range when `value` is [`None`].
    ///
    /// # Errors
    ///
    /// As [`insert_from_host()`](Self::insert_from_host), without the range check.
    pub fn replace_from_host<C: HostCodec>(
        &mut self,
        codec: &C,
        lo: usize,
        hi: usize,
        value: Option<&C::Value>,
    ) -> Result<()> {
        self.ensure_unlocked("replace")?;
        let items = match value {
            Some(value) => self.decode_host_items(codec, "replace", value)?,
            None => Items::empty(self.item_kind),
        };
        self.replace(lo, hi, items)
    }

    /// Overwrite the element at `index` with a host value, or delete it when `value` is
    /// [`None`]. A text value must hold exactly one element.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`] while pinned.
    /// - [`GapBufferError::TypeMismatch`] if the value is not a single element of this
    ///   buffer's kind.
    /// - [`GapBufferError::OutOfRange`] if `index >= len()`.
    pub fn set_item_from_host<C: HostCodec>(
        &mut self,
        codec: &C,
        index: usize,
        value: Option<&C::Value>,
    ) -> Result<()> {
        let Some(value) = value else {
            return self.set_item_at(index, None);
        };
        let item = match self.item_kind {
            ItemKind::Integer => codec.decode_integer(value).map(Item::Integer),
            ItemKind::Byte | ItemKind::WideChar => codec
                .as_items(value)
                .filter(|items| items.kind() == self.item_kind && items.len() == 1)
                .map(|items| Item::decode(self.item_kind, &items.encode())),
        };
        match item {
            Some(item) => self.set_item_at(index, Some(item)),
            None => Err(GapBufferError::type_mismatch(
                "set_item_at",
                format!("one {} element", self.item_kind),
                codec.type_name(value),
            )),
        }
    }

    /// The element at `index` as a host value.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::OutOfRange`] if `index >= len()`.
    pub fn item_to_host<C: HostCodec>(&self, codec: &C, index: usize) -> Result<C::Value> {
        self.item_at(index).map(|item| codec.encode_item(item))
    }

    /// Order against a host value, which must wrap a gap buffer.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::TypeMismatch`] if `value` is not a gap buffer.
    pub fn compare_with_host<C: HostCodec>(
        &self,
        codec: &C,
        value: &C::Value,
    ) -> Result<Ordering> {
        codec
            .as_gap_buffer(value)
            .map(|other| self.compare(other))
            .ok_or_else(|| {
                GapBufferError::type_mismatch("compare", "gap_buffer", codec.type_name(value))
            })
    }

    fn decode_host_items<'v, C: HostCodec>(
        &self,
        codec: &C,
        operation: &'static str,
        value: &'v C::Value,
    ) -> Result<Items<'v>> {
        if let Some(other) = codec
            .as_gap_buffer(value)
            .filter(|other| other.item_kind == self.item_kind)
        {
            return Ok(other.to_items());
        }

        match self.item_kind {
            ItemKind::Integer => {
                let elements = codec
                    .iterate(value)
                    .ok_or(GapBufferError::NotIterable { operation })?;
                let values = elements
                    .iter()
                    .map(|element| {
                        codec.decode_integer(element).ok_or_else(|| {
                            GapBufferError::type_mismatch(
                                operation,
                                "int",
                                codec.type_name(element),
                            )
                        })
                    })
                    .collect::<Result<Vec<i32>>>()?;
                Ok(Items::from(values))
            }
            ItemKind::Byte | ItemKind::WideChar => codec
                .as_items(value)
                .filter(|items| items.kind() == self.item_kind)
                .ok_or_else(|| {
                    GapBufferError::type_mismatch(
                        operation,
                        self.item_kind.as_ref(),
                        codec.type_name(value),
                    )
                }),
        }
    }
}
