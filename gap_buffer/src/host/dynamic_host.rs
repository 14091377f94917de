// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A reference [`HostCodec`] over a small dynamically typed value model. It is what the
//! demo binary and the tests use to exercise the host boundary.

use std::borrow::Cow;

use strum_macros::AsRefStr;

use super::HostCodec;
use crate::{GapBuffer, Item, Items};

/// A dynamically typed host value.
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HostValue {
    None,
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
    List(Vec<HostValue>),
    GapBuffer(GapBuffer),
}

impl From<i64> for HostValue {
    fn from(it: i64) -> Self { HostValue::Int(it) }
}

impl From<&str> for HostValue {
    fn from(it: &str) -> Self { HostValue::Text(it.to_string()) }
}

impl From<&[u8]> for HostValue {
    fn from(it: &[u8]) -> Self { HostValue::Bytes(it.to_vec()) }
}

impl From<GapBuffer> for HostValue {
    fn from(it: GapBuffer) -> Self { HostValue::GapBuffer(it) }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(it: Vec<T>) -> Self { HostValue::List(it.into_iter().map(Into::into).collect()) }
}

/// [`HostCodec`] for [`HostValue`].
///
/// - Bytes and text insert into byte and wide char buffers respectively.
/// - Lists, bytes, text and gap buffers can be traversed. Only `Int` elements that fit
///   in an [`i32`] decode as integers, so floats are rejected.
/// - Byte elements come back as one-byte `Bytes`, wide chars as one-unit `Text`
///   (lossy for a lone surrogate), integers as `Int`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicHost;

impl HostCodec for DynamicHost {
    type Value = HostValue;

    fn type_name(&self, value: &HostValue) -> String { value.as_ref().to_string() }

    fn as_items<'v>(&self, value: &'v HostValue) -> Option<Items<'v>> {
        match value {
            HostValue::Bytes(it) => Some(Items::Bytes(Cow::Borrowed(it.as_slice()))),
            HostValue::Text(it) => Some(Items::from(it.as_str())),
            _ => None,
        }
    }

    fn iterate(&self, value: &HostValue) -> Option<Vec<HostValue>> {
        match value {
            HostValue::List(it) => Some(it.clone()),
            HostValue::Bytes(it) => Some(it.iter().map(|&b| HostValue::Int(b.into())).collect()),
            HostValue::Text(it) => Some(
                it.chars()
                    .map(|ch| HostValue::Text(ch.to_string()))
                    .collect(),
            ),
            HostValue::GapBuffer(it) => {
                Some(it.iter().map(|item| self.encode_item(item)).collect())
            }
            HostValue::None | HostValue::Int(_) | HostValue::Float(_) => None,
        }
    }

    fn decode_integer(&self, value: &HostValue) -> Option<i32> {
        match value {
            HostValue::Int(it) => i32::try_from(*it).ok(),
            _ => None,
        }
    }

    fn encode_item(&self, item: Item) -> HostValue {
        match item {
            Item::Byte(it) => HostValue::Bytes(vec![it]),
            Item::WideChar(it) => HostValue::Text(String::from_utf16_lossy(&[it])),
            Item::Integer(it) => HostValue::Int(it.into()),
        }
    }

    fn as_gap_buffer<'v>(&self, value: &'v HostValue) -> Option<&'v GapBuffer> {
        match value {
            HostValue::GapBuffer(it) => Some(it),
            _ => None,
        }
    }
}
