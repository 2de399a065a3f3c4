//! Card templates - static per-type data.
//!
//! A `CardTemplate` holds the immutable description of a card type: its
//! face payload and its property bag. Instance-specific data (orientation,
//! pile, stacking) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

use super::properties::{Properties, PropertyKey, PropertyValue};

/// Unique identifier for a card type.
///
/// This names the kind of card ("hearts-7", "copper"), not a specific
/// instance on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub String);

impl TypeId {
    /// Create a new type ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque face payload for a card type.
///
/// The engine never looks inside; a renderer turns it into whatever the
/// table displays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceTemplate(pub String);

impl FaceTemplate {
    /// Create a face template from an opaque payload.
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    /// Borrow the raw payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaceTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FaceTemplate {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Static card type description.
///
/// Immutable once registered. All game-specific data goes in `properties`.
///
/// ## Example
///
/// ```
/// use cardtable::library::{CardTemplate, TypeId};
///
/// let seven = CardTemplate::new(TypeId::new("hearts-7"), "♥7")
///     .with_prop("suit", "hearts")
///     .with_prop("rank", 7i32);
///
/// assert_eq!(seven.get_int("rank", 0), 7);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this card type.
    pub type_id: TypeId,

    /// Opaque face payload.
    pub face: FaceTemplate,

    /// Game-specific properties.
    pub properties: Properties,
}

impl CardTemplate {
    /// Create a new card template.
    #[must_use]
    pub fn new(type_id: TypeId, face: impl Into<FaceTemplate>) -> Self {
        Self {
            type_id,
            face: face.into(),
            properties: Properties::default(),
        }
    }

    /// Add a property (builder pattern).
    #[must_use]
    pub fn with_prop(
        mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property value.
    #[must_use]
    pub fn get_prop(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(&PropertyKey::new(key))
    }

    /// Get an integer property with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_prop(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a boolean property with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_prop(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    /// Get a text property.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_prop(key).and_then(|v| v.as_text())
    }
}
