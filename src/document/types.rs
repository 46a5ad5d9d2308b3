//! Value types that appear inside a command spec.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

const SCALAR_EXPECTED: &str = "a scalar value (string, number, bool, or null)";

/// A single YAML scalar as it appears in a flag value or positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// String form used when building the argument vector.
    ///
    /// `null` becomes the empty string. Floats keep a fractional part so
    /// `1.0` stays `1.0` rather than collapsing to `1`.
    pub fn to_arg_string(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(f) => format!("{:?}", f),
            Scalar::String(s) => s.clone(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SCALAR_EXPECTED)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
        Ok(Scalar::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(i64::try_from(v).map_or(Scalar::Unsigned(v), Scalar::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        Ok(Scalar::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
        Ok(Scalar::String(v))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// The value attached to a flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// A single value, or `null` for a presence flag.
    One(Scalar),
    /// Repeat the flag once per element.
    Many(Vec<Scalar>),
}

struct FlagValueVisitor;

impl<'de> Visitor<'de> for FlagValueVisitor {
    type Value = FlagValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} or a sequence of scalars", SCALAR_EXPECTED)
    }

    fn visit_unit<E: de::Error>(self) -> Result<FlagValue, E> {
        ScalarVisitor.visit_unit().map(FlagValue::One)
    }

    fn visit_none<E: de::Error>(self) -> Result<FlagValue, E> {
        ScalarVisitor.visit_none().map(FlagValue::One)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FlagValue, E> {
        ScalarVisitor.visit_bool(v).map(FlagValue::One)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlagValue, E> {
        ScalarVisitor.visit_i64(v).map(FlagValue::One)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlagValue, E> {
        ScalarVisitor.visit_u64(v).map(FlagValue::One)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FlagValue, E> {
        ScalarVisitor.visit_f64(v).map(FlagValue::One)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlagValue, E> {
        ScalarVisitor.visit_str(v).map(FlagValue::One)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FlagValue, E> {
        ScalarVisitor.visit_string(v).map(FlagValue::One)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FlagValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Scalar>()? {
            items.push(item);
        }
        Ok(FlagValue::Many(items))
    }
}

impl<'de> Deserialize<'de> for FlagValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlagValueVisitor)
    }
}

/// Flags in document order.
///
/// A plain map type would lose the insertion order, which decides the order
/// of flag tokens on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags(Vec<(String, FlagValue)>);

impl Flags {
    pub fn as_slice(&self) -> &[(String, FlagValue)] {
        &self.0
    }
}

struct FlagsVisitor;

impl<'de> Visitor<'de> for FlagsVisitor {
    type Value = Flags;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of flag names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Flags, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<Scalar>()? {
            let name = match key {
                Scalar::Null => return Err(de::Error::custom("flag name must not be null")),
                other => other.to_arg_string(),
            };
            if name.is_empty() {
                return Err(de::Error::custom("flag name must not be empty"));
            }
            let value = map.next_value::<FlagValue>()?;
            entries.push((name, value));
        }
        Ok(Flags(entries))
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FlagsVisitor)
    }
}
