use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::{Serialize, Serializer};

use crate::error::Error;
use crate::types::NullableInt;

const JSON_NULL: &[u8] = b"null";

impl NullableInt {
    /// Encodes `self` as a single JSON token: `null`, or the decimal digits of the value.
    pub fn marshal_json(&self) -> Vec<u8> {
        if self.null {
            JSON_NULL.to_vec()
        } else {
            itoa::Buffer::new().format(self.value).as_bytes().to_vec()
        }
    }

    /// Decodes a single JSON token.
    ///
    /// Accepts `null` and integers in the range of `i64`, including `-0`. Everything else is an
    /// [`Error::Parse`], including numbers written with a fraction or an exponent (`1.5`, `1.0`,
    /// `1e3`) and integers that overflow `i64`.
    ///
    /// serde_json hands `-0` over as a float, so any spelling of zero as a float (`-0.0`, `0.0`,
    /// `0e5`) cannot be told apart from it and decodes to `0` as well.
    pub fn unmarshal_json(bytes: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(bytes).map_err(|e| Error::Parse(e.into()))
    }
}

impl Serialize for NullableInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.null {
            serializer.serialize_none()
        } else {
            serializer.serialize_i64(self.value)
        }
    }
}

impl<'de> Deserialize<'de> for NullableInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NullableIntVisitor)
    }
}

struct NullableIntVisitor;

impl<'de> Visitor<'de> for NullableIntVisitor {
    type Value = NullableInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null or an integer between -2^63 and 2^63-1")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NullableInt, E> {
        Ok(NullableInt::new(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NullableInt, E> {
        i64::try_from(v)
            .map(NullableInt::new)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    // `-0` arrives here; every other float is rejected
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NullableInt, E> {
        if v == 0.0 {
            Ok(NullableInt::new(0))
        } else {
            Err(E::invalid_type(Unexpected::Float(v), &self))
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<NullableInt, E> {
        Ok(NullableInt::null())
    }

    fn visit_none<E: de::Error>(self) -> Result<NullableInt, E> {
        Ok(NullableInt::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<NullableInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        NullableInt::deserialize(deserializer)
    }
}
