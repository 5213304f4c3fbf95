//! Wire serialization of render results.
//!
//! ```text
//! Rend           {"s": [statics], "0": d0, "1": d1, ...}
//! Text           "literal"
//! Component      {"s": [statics], "0": ..., "c": id}   first sighting
//!                {"s": id, "0": ...}                   back-reference
//! Comprehension  {"s": [...], "d": [[...], ...], "stream": [id, inserts, deletes, reset?]}
//! Insert         [dom_id, at, limit | null]
//! ```
//!
//! Statics come first, then the positional dynamics, then the optional
//! stream tuple.

use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::{Component, Comprehension, Dynamic, Insert, Rend, RenderResult, StreamOp};

impl Serialize for Rend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.dynamics.len() + 1))?;
        map.serialize_entry("s", &self.statics)?;
        for (i, dynamic) in self.dynamics.iter().enumerate() {
            map.serialize_entry(&i, dynamic)?;
        }
        map.end()
    }
}

impl Serialize for Dynamic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Rend(rend) => rend.serialize(serializer),
            Self::Comprehension(comprehension) => comprehension.serialize(serializer),
            Self::Component(component) => component.serialize(serializer),
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.shared {
            map.serialize_entry("s", &self.id)?;
        } else {
            map.serialize_entry("s", &self.rend.statics)?;
        }
        for (i, dynamic) in self.rend.dynamics.iter().enumerate() {
            map.serialize_entry(&i, dynamic)?;
        }
        if !self.shared {
            map.serialize_entry("c", &self.id)?;
        }
        map.end()
    }
}

impl Serialize for Comprehension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(statics) = &self.statics {
            map.serialize_entry("s", statics)?;
        }
        if self.statics.is_some() || self.stream.is_none() {
            map.serialize_entry("d", &self.dynamics)?;
        }
        if let Some(stream) = &self.stream {
            map.serialize_entry("stream", stream)?;
        }
        map.end()
    }
}

impl Serialize for StreamOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        seq.serialize_element(&self.id)?;
        seq.serialize_element(&self.inserts)?;
        seq.serialize_element(&self.deletes)?;
        if self.reset {
            seq.serialize_element(&true)?;
        }
        seq.end()
    }
}

impl Serialize for Insert {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.dom_id)?;
        seq.serialize_element(&self.at)?;
        seq.serialize_element(&self.limit)?;
        seq.end()
    }
}

/// Serialize a render result to compact JSON.
pub fn to_json(rend: &Rend) -> RenderResult<String> {
    Ok(serde_json::to_string(rend)?)
}

/// Serialize a render result to indented JSON.
pub fn to_json_pretty(rend: &Rend) -> RenderResult<String> {
    Ok(serde_json::to_string_pretty(rend)?)
}

/// Serialize a render result to a JSON value.
pub fn to_value(rend: &Rend) -> RenderResult<serde_json::Value> {
    Ok(serde_json::to_value(rend)?)
}
