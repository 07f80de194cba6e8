//! Serialization adapter between [`FuzzyDate`](crate::datatype::FuzzyDate)
//! and structured-data formats.
//!
//! The only shape on the wire is the canonical `YYYY.MM.DD` string: it is
//! emitted verbatim on write, and reads go through the strict parser so a
//! malformed or semantically invalid string fails the enclosing
//! deserialization.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::datatype::FuzzyDate;

impl Serialize for FuzzyDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

struct FuzzyDateVisitor;

impl<'de> Visitor<'de> for FuzzyDateVisitor {
    type Value = FuzzyDate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a fuzzy date in YYYY.MM.DD form with ? placeholders")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<FuzzyDate, E> {
        value.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FuzzyDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<FuzzyDate, D::Error> {
        deserializer.deserialize_str(FuzzyDateVisitor)
    }
}
