// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Insertion into a [`GapBuffer`]. Every variant validates the lock, the item kind and
//! the position first, then funnels into [`GapBuffer::insert_encoded()`] which makes
//! room, moves the gap to the insertion point, and copies once.

use super::GapBuffer;
use crate::{GapBufferError, ItemKind, Items, Result};

impl GapBuffer {
    /// Insert `items` before element `position`. `position == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`] while pinned.
    /// - [`GapBufferError::TypeMismatch`] if `items` is of a different kind.
    /// - [`GapBufferError::OutOfRange`] if `position > len()`.
    #[allow(single_use_lifetimes)]
    pub fn insert<'a>(&mut self, position: usize, items: impl Into<Items<'a>>) -> Result<()> {
        let items = items.into();
        self.ensure_unlocked("insert")?;
        self.ensure_kind("insert", items.kind())?;
        let byte_position = self.check_insert_position("insert", position)?;
        self.insert_encoded(byte_position, &items.encode());
        Ok(())
    }

    /// Insert already encoded elements. `bytes` must hold whole elements in native byte
    /// order.
    ///
    /// # Errors
    ///
    /// As [`insert()`](Self::insert), with [`GapBufferError::TypeMismatch`] when
    /// `bytes.len()` is not a multiple of the item width.
    pub fn insert_raw(&mut self, position: usize, bytes: &[u8]) -> Result<()> {
        self.ensure_unlocked("insert_raw")?;
        let width = self.item_width();
        if !bytes.len().is_multiple_of(width) {
            return Err(GapBufferError::type_mismatch(
                "insert_raw",
                format!("a multiple of {width} bytes"),
                format!("{} bytes", bytes.len()),
            ));
        }
        let byte_position = self.check_insert_position("insert_raw", position)?;
        self.insert_encoded(byte_position, bytes);
        Ok(())
    }

    /// # Errors
    ///
    /// See [`insert()`](Self::insert).
    pub fn insert_bytes(&mut self, position: usize, bytes: &[u8]) -> Result<()> {
        self.insert(position, bytes)
    }

    /// Insert the UTF-16 code units of `text` into a wide char buffer.
    ///
    /// # Errors
    ///
    /// See [`insert()`](Self::insert).
    pub fn insert_str(&mut self, position: usize, text: &str) -> Result<()> {
        self.insert(position, text)
    }

    /// # Errors
    ///
    /// See [`insert()`](Self::insert).
    pub fn insert_integers(&mut self, position: usize, values: &[i32]) -> Result<()> {
        self.insert(position, values)
    }

    /// Insert every element of `source` into an integer buffer. The whole source is
    /// converted before the buffer is touched, so a bad element leaves the buffer
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`] while pinned.
    /// - [`GapBufferError::TypeMismatch`] if this is not an integer buffer, or an element
    ///   does not fit in an [`i32`].
    /// - [`GapBufferError::OutOfRange`] if `position > len()`.
    pub fn insert_from_iter<I, T>(&mut self, position: usize, source: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i32>,
    {
        self.ensure_unlocked("insert_from_iter")?;
        self.ensure_kind("insert_from_iter", ItemKind::Integer)?;
        let byte_position = self.check_insert_position("insert_from_iter", position)?;

        let values = source
            .into_iter()
            .map(|it| {
                it.try_into().map_err(|_| {
                    GapBufferError::type_mismatch(
                        "insert_from_iter",
                        "i32",
                        std::any::type_name::<T>(),
                    )
                })
            })
            .collect::<Result<Vec<i32>>>()?;

        self.insert_encoded(byte_position, &Items::from(values).encode());
        Ok(())
    }

    /// Append `items`.
    ///
    /// # Errors
    ///
    /// See [`insert()`](Self::insert).
    #[allow(single_use_lifetimes)]
    pub fn extend<'a>(&mut self, items: impl Into<Items<'a>>) -> Result<()> {
        self.insert(self.len(), items)
    }

    /// Append every element of `source` to an integer buffer.
    ///
    /// # Errors
    ///
    /// See [`insert_from_iter()`](Self::insert_from_iter).
    pub fn extend_from_iter<I, T>(&mut self, source: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i32>,
    {
        self.insert_from_iter(self.len(), source)
    }

    /// The one place content enters the arena. Callers have validated `byte_position`
    /// and the alignment of `bytes`.
    pub(crate) fn insert_encoded(&mut self, byte_position: usize, bytes: &[u8]) {
        let length = bytes.len();
        if length == 0 {
            return;
        }
        self.ensure_room(length);
        self.gap_to(byte_position);
        self.storage[byte_position..byte_position + length].copy_from_slice(bytes);
        self.content_length += length;
        self.segment1_length += length;
        self.gap_length -= length;
    }
}
