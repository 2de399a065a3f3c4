//! Card property system for game-specific data.
//!
//! Card types carry properties like "suit", "rank", "cost". The engine
//! never interprets them; rules code reads them and library groups are
//! computed from them.
//!
//! ## PropertyValue Types
//!
//! - `Int`: numbers (rank, cost)
//! - `Bool`: flags (wild, trump)
//! - `Text`: strings (suit, color)
//! - `IntList`: number lists
//! - `TextList`: string lists (keywords)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing card properties.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyKey(pub String);

impl PropertyKey {
    /// Create a new property key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value of a card property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Integer value (rank, cost).
    Int(i64),
    /// Boolean flag (wild, trump).
    Bool(bool),
    /// Text value (suit, color).
    Text(String),
    /// List of integers.
    IntList(Vec<i64>),
    /// List of strings (keywords).
    TextList(Vec<String>),
}

impl PropertyValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as int list reference if this is an IntList value.
    #[must_use]
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            PropertyValue::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

// Convenient From implementations
impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v as i64)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<Vec<i64>> for PropertyValue {
    fn from(v: Vec<i64>) -> Self {
        PropertyValue::IntList(v)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(v: Vec<String>) -> Self {
        PropertyValue::TextList(v)
    }
}

/// Collection of properties.
///
/// Cloning one is the "deep, cycle-free copy" each card instance takes at
/// creation time: values own their data, so instances never observe later
/// template edits.
pub type Properties = FxHashMap<PropertyKey, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_key() {
        let key1 = PropertyKey::new("suit");
        let key2: PropertyKey = "suit".into();
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_property_value_int() {
        let val = PropertyValue::Int(5);
        assert_eq!(val.as_int(), Some(5));
        assert_eq!(val.as_bool(), None);
    }

    #[test]
    fn test_property_value_bool() {
        let val = PropertyValue::Bool(true);
        assert_eq!(val.as_bool(), Some(true));
        assert_eq!(val.as_int(), None);
    }

    #[test]
    fn test_property_value_text() {
        let val = PropertyValue::Text("hearts".to_string());
        assert_eq!(val.as_text(), Some("hearts"));
    }

    #[test]
    fn test_property_value_from() {
        let int: PropertyValue = 42i32.into();
        assert_eq!(int.as_int(), Some(42));

        let boolean: PropertyValue = true.into();
        assert_eq!(boolean.as_bool(), Some(true));

        let text: PropertyValue = "clubs".into();
        assert_eq!(text.as_text(), Some("clubs"));
    }

    #[test]
    fn test_properties_map() {
        let mut props = Properties::default();
        props.insert("rank".into(), 3i32.into());
        props.insert("wild".into(), true.into());

        assert_eq!(props.get(&PropertyKey::new("rank")).and_then(|v| v.as_int()), Some(3));
        assert_eq!(
            props.get(&PropertyKey::new("wild")).and_then(|v| v.as_bool()),
            Some(true)
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut props = Properties::default();
        props.insert("rank".into(), 3i32.into());

        let snapshot = props.clone();
        props.insert("rank".into(), 9i32.into());

        assert_eq!(
            snapshot.get(&PropertyKey::new("rank")).and_then(|v| v.as_int()),
            Some(3)
        );
    }
}
