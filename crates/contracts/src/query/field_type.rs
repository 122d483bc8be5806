//! Field type bitmask used in query result schemas

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ContractError;

/// Number of named primitive types
pub const PRIMITIVE_COUNT: usize = 9;

/// One bit past the last primitive. Never a valid field type.
const MAX_FIELD_TYPE: u16 = 1 << PRIMITIVE_COUNT;

/// Type of a [`Field`](super::Field).
///
/// A single primitive is one bit. Fields that held several primitives across
/// the queried data carry the union, e.g. `int|long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldType(u16);

impl FieldType {
    pub const INVALID: Self = Self(0);
    pub const BOOL: Self = Self(1 << 0);
    pub const DATETIME: Self = Self(1 << 1);
    pub const INT: Self = Self(1 << 2);
    pub const LONG: Self = Self(1 << 3);
    pub const REAL: Self = Self(1 << 4);
    pub const STRING: Self = Self(1 << 5);
    pub const TIMESPAN: Self = Self(1 << 6);
    pub const ARRAY: Self = Self(1 << 7);
    pub const DICTIONARY: Self = Self(1 << 8);

    /// Primitives with their canonical names, in bit order
    pub const PRIMITIVES: [(FieldType, &'static str); PRIMITIVE_COUNT] = [
        (Self::BOOL, "bool"),
        (Self::DATETIME, "datetime"),
        (Self::INT, "int"),
        (Self::LONG, "long"),
        (Self::REAL, "real"),
        (Self::STRING, "string"),
        (Self::TIMESPAN, "timespan"),
        (Self::ARRAY, "array"),
        (Self::DICTIONARY, "dictionary"),
    ];

    /// Wrap raw bits without any range check
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// In range of the known primitives. Any combination of them qualifies.
    pub const fn is_valid(&self) -> bool {
        self.0 < MAX_FIELD_TYPE
    }

    /// True if every bit of `other` is set in `self`
    pub const fn contains(&self, other: FieldType) -> bool {
        self.0 & other.0 == other.0
    }

    /// More than one primitive bit set
    pub const fn is_composite(&self) -> bool {
        self.0.count_ones() > 1
    }

    /// Canonical name when `self` is exactly one primitive
    pub fn primitive_name(&self) -> Option<&'static str> {
        Self::PRIMITIVES
            .iter()
            .find(|(ft, _)| ft == self)
            .map(|(_, name)| *name)
    }

    /// Primitives contained in `self`, in bit order
    pub fn primitives(self) -> impl Iterator<Item = FieldType> {
        Self::PRIMITIVES
            .into_iter()
            .map(|(ft, _)| ft)
            .filter(move |ft| self.contains(*ft))
    }

    /// Name used on the wire. Fails for the zero value and for values outside
    /// the primitive range, which the server never emits.
    pub fn canonical_name(&self) -> Result<String, ContractError> {
        if self.is_empty() || !self.is_valid() {
            return Err(ContractError::UnencodableFieldType(self.0));
        }
        Ok(self.to_string())
    }
}

impl FromStr for FieldType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ft = FieldType::INVALID;
        for token in s.split('|') {
            ft |= match token.to_lowercase().as_str() {
                "bool" => FieldType::BOOL,
                "datetime" => FieldType::DATETIME,
                "int" | "integer" => FieldType::INT,
                "long" => FieldType::LONG,
                "real" | "float64" => FieldType::REAL,
                "string" => FieldType::STRING,
                "timespan" => FieldType::TIMESPAN,
                "array" => FieldType::ARRAY,
                "dictionary" => FieldType::DICTIONARY,
                _ => return Err(ContractError::UnknownFieldType(token.to_string())),
            };
        }
        Ok(ft)
    }
}

/// Zero renders as an empty string. Out-of-range values render as a
/// diagnostic that does not parse back.
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "<unknown field type: {} ({:08b})>", self.0, self.0);
        }

        if let Some(name) = self.primitive_name() {
            return f.write_str(name);
        }

        let mut sep = "";
        for (ft, name) in Self::PRIMITIVES {
            if self.contains(ft) {
                write!(f, "{}{}", sep, name)?;
                sep = "|";
            }
        }
        Ok(())
    }
}

impl BitOr for FieldType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FieldType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FieldType {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let name = self.canonical_name().map_err(ser::Error::custom)?;
        serializer.serialize_str(&name)
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
