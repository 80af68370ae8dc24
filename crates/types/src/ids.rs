//! Record identifiers as returned by the data store.
//!
//! Tables key their rows with either integers (`food_items.id`) or opaque
//! strings (profile UUIDs). Both forms share one type so foreign keys can be
//! compared without caring which table they point at.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer or opaque string identifier.
///
/// Equality is exact and type-sensitive: `RecordId::Int(10)` never equals
/// `RecordId::Text("10")`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Text(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{}", i),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}
