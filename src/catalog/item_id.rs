use std::fmt;

use serde::{
    de::{ Error, Visitor },
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

/// Item identifier as it appears on the wire: some source feeds key items
/// numerically, others by string. `5` and `"5"` are distinct identities and
/// are never coerced into each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl ItemId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemId::Int(value) => Some(*value),
            ItemId::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ItemId::Int(_) => None,
            ItemId::Text(value) => Some(value.as_str()),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(value) => write!(f, "{}", value),
            ItemId::Text(value) => f.write_str(value),
        }
    }
}

// Encodes back to the bare primitive, no tag or wrapper, so documents that
// used either convention round-trip unchanged.
impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ItemId::Int(value) => serializer.serialize_i64(*value),
            ItemId::Text(value) => serializer.serialize_str(value),
        }
    }
}

struct ItemIdVisitor;

impl<'de> Visitor<'de> for ItemIdVisitor {
    type Value = ItemId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string item id")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<ItemId, E> {
        Ok(ItemId::Int(value))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<ItemId, E> {
        i64::try_from(value)
            .map(ItemId::Int)
            .map_err(|_| E::custom(format!("item id {} is out of range", value)))
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<ItemId, E> {
        Ok(ItemId::Text(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ItemId, D::Error> {
        deserializer.deserialize_any(ItemIdVisitor)
    }
}
