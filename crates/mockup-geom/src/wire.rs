// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lenient wire form for name-keyed enums.

use core::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// Any JSON value read as an optional name.
///
/// Strings become `Some`; `null`, numbers, booleans, arrays and objects
/// become `None`, so enums built from it fall back to their default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WireName(pub Option<String>);

impl WireName {
    /// The name, if the value was a string.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

struct WireNameVisitor;

impl<'de> Visitor<'de> for WireNameVisitor {
    type Value = WireName;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<WireName, E> {
        Ok(WireName(Some(v.to_owned())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<WireName, E> {
        Ok(WireName(Some(v)))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<WireName, E> {
        Ok(WireName(None))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<WireName, E> {
        Ok(WireName(None))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<WireName, E> {
        Ok(WireName(None))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<WireName, E> {
        Ok(WireName(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<WireName, E> {
        Ok(WireName(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<WireName, E> {
        Ok(WireName(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<WireName, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WireName, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(WireName(None))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WireName, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(WireName(None))
    }
}

impl<'de> Deserialize<'de> for WireName {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(WireNameVisitor)
    }
}
