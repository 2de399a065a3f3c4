//! Card library: type registration and frozen groups.
//!
//! The `CardLibrary` stores every card template for a game and the named
//! groups over them. It is set up once, before play, and never mutated
//! afterwards.
//!
//! Groups are computed when they are created: the predicate runs once per
//! *currently registered* type, in registration order, and the resulting
//! member list is frozen. Types registered later are never retroactively
//! added.
//!
//! ## Example
//!
//! ```
//! use cardtable::library::{CardLibrary, CardTemplate, PropertyKey, TypeId};
//!
//! let mut library = CardLibrary::new();
//! library
//!     .register(CardTemplate::new(TypeId::new("hearts-7"), "♥7").with_prop("suit", "hearts"))
//!     .unwrap();
//! library
//!     .register(CardTemplate::new(TypeId::new("spades-7"), "♠7").with_prop("suit", "spades"))
//!     .unwrap();
//!
//! library
//!     .create_group("red", |props| {
//!         props
//!             .get(&PropertyKey::new("suit"))
//!             .and_then(|v| v.as_text())
//!             .map_or(false, |s| s == "hearts" || s == "diamonds")
//!     })
//!     .unwrap();
//!
//! assert!(library.belongs_to_group(&TypeId::new("hearts-7"), &"red".into()));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::SetupError;

use super::properties::Properties;
use super::template::{CardTemplate, TypeId};

/// Unique identifier for a library group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub String);

impl GroupId {
    /// Create a new group ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A frozen group of card types.
///
/// Membership is an ordered snapshot taken when the group was created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardGroup {
    /// Unique identifier for this group.
    pub id: GroupId,

    /// Member types, in registration order at creation time.
    member_types: Vec<TypeId>,
}

impl CardGroup {
    /// Member type ids, in registration order.
    #[must_use]
    pub fn members(&self) -> &[TypeId] {
        &self.member_types
    }

    /// Check whether a type belongs to this group.
    #[must_use]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.member_types.contains(type_id)
    }
}

/// Registry of card templates and groups.
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    templates: FxHashMap<TypeId, CardTemplate>,
    /// Registration order; drives group computation and default iteration.
    order: Vec<TypeId>,
    groups: FxHashMap<GroupId, CardGroup>,
}

impl CardLibrary {
    /// Create a new empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card template.
    ///
    /// Fails with `SetupError::DuplicateType` if a template with the same
    /// type id is already registered.
    pub fn register(&mut self, template: CardTemplate) -> Result<(), SetupError> {
        if self.templates.contains_key(&template.type_id) {
            return Err(SetupError::DuplicateType {
                type_id: template.type_id.0.clone(),
            });
        }
        self.order.push(template.type_id.clone());
        self.templates.insert(template.type_id.clone(), template);
        Ok(())
    }

    /// Create a group from a predicate over type properties.
    ///
    /// The predicate runs once per registered type, in registration order.
    /// The resulting member list is frozen: registering more types later
    /// does not change it.
    ///
    /// Fails with `SetupError::DuplicateGroup` if the group id exists.
    pub fn create_group<F>(
        &mut self,
        group_id: impl Into<GroupId>,
        predicate: F,
    ) -> Result<(), SetupError>
    where
        F: Fn(&Properties) -> bool,
    {
        let group_id = group_id.into();
        if self.groups.contains_key(&group_id) {
            return Err(SetupError::DuplicateGroup {
                group_id: group_id.0.clone(),
            });
        }

        let member_types = self
            .order
            .iter()
            .filter(|id| predicate(&self.templates[*id].properties))
            .cloned()
            .collect();

        self.groups.insert(
            group_id.clone(),
            CardGroup {
                id: group_id,
                member_types,
            },
        );
        Ok(())
    }

    /// Get a template by type id.
    #[must_use]
    pub fn get(&self, type_id: &TypeId) -> Option<&CardTemplate> {
        self.templates.get(type_id)
    }

    /// Check if a type id is registered.
    #[must_use]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.templates.contains_key(type_id)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.order.iter().map(move |id| &self.templates[id])
    }

    /// Check whether a type belongs to a group.
    ///
    /// False when either the type or the group does not exist.
    #[must_use]
    pub fn belongs_to_group(&self, type_id: &TypeId, group_id: &GroupId) -> bool {
        self.groups
            .get(group_id)
            .map_or(false, |g| g.contains(type_id))
    }

    /// Member type ids of a group, in registration order.
    ///
    /// Returns a defensive copy; empty when the group does not exist.
    #[must_use]
    pub fn types_in_group(&self, group_id: &GroupId) -> Vec<TypeId> {
        self.groups
            .get(group_id)
            .map_or_else(Vec::new, |g| g.member_types.clone())
    }

    /// Get a group by id.
    #[must_use]
    pub fn group(&self, group_id: &GroupId) -> Option<&CardGroup> {
        self.groups.get(group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::PropertyKey;

    fn template(id: &str, suit: &str, rank: i32) -> CardTemplate {
        CardTemplate::new(TypeId::new(id), format!("{suit}-{rank}"))
            .with_prop("suit", suit)
            .with_prop("rank", rank)
    }

    #[test]
    fn test_register_and_get() {
        let mut library = CardLibrary::new();
        library.register(template("h7", "hearts", 7)).unwrap();

        let found = library.get(&TypeId::new("h7"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().get_text("suit"), Some("hearts"));

        assert!(library.get(&TypeId::new("missing")).is_none());
        assert!(library.contains(&TypeId::new("h7")));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut library = CardLibrary::new();
        library.register(template("h7", "hearts", 7)).unwrap();

        let err = library.register(template("h7", "hearts", 7)).unwrap_err();
        assert_eq!(
            err,
            SetupError::DuplicateType {
                type_id: "h7".to_string()
            }
        );
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let mut library = CardLibrary::new();
        library.register(template("c", "clubs", 1)).unwrap();
        library.register(template("a", "hearts", 2)).unwrap();
        library.register(template("b", "spades", 3)).unwrap();

        let ids: Vec<_> = library.iter().map(|t| t.type_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_group_membership() {
        let mut library = CardLibrary::new();
        library.register(template("h7", "hearts", 7)).unwrap();
        library.register(template("s7", "spades", 7)).unwrap();
        library.register(template("d2", "diamonds", 2)).unwrap();

        library
            .create_group("red", |props| {
                props
                    .get(&PropertyKey::new("suit"))
                    .and_then(|v| v.as_text())
                    .map_or(false, |s| s == "hearts" || s == "diamonds")
            })
            .unwrap();

        assert!(library.belongs_to_group(&TypeId::new("h7"), &"red".into()));
        assert!(library.belongs_to_group(&TypeId::new("d2"), &"red".into()));
        assert!(!library.belongs_to_group(&TypeId::new("s7"), &"red".into()));

        let members = library.types_in_group(&"red".into());
        assert_eq!(members, vec![TypeId::new("h7"), TypeId::new("d2")]);
    }

    #[test]
    fn test_group_is_frozen() {
        let mut library = CardLibrary::new();
        library.register(template("h7", "hearts", 7)).unwrap();

        library
            .create_group("hearts", |props| {
                props.get(&PropertyKey::new("suit")).and_then(|v| v.as_text()) == Some("hearts")
            })
            .unwrap();

        // Registered after group creation: never retroactively added.
        library.register(template("h9", "hearts", 9)).unwrap();

        assert!(!library.belongs_to_group(&TypeId::new("h9"), &"hearts".into()));
        assert_eq!(library.types_in_group(&"hearts".into()).len(), 1);
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let mut library = CardLibrary::new();
        library.create_group("all", |_| true).unwrap();

        let err = library.create_group("all", |_| true).unwrap_err();
        assert_eq!(
            err,
            SetupError::DuplicateGroup {
                group_id: "all".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_group_queries() {
        let library = CardLibrary::new();

        assert!(!library.belongs_to_group(&TypeId::new("x"), &"none".into()));
        assert!(library.types_in_group(&"none".into()).is_empty());
        assert!(library.group(&"none".into()).is_none());
    }

    #[test]
    fn test_types_in_group_is_a_copy() {
        let mut library = CardLibrary::new();
        library.register(template("h7", "hearts", 7)).unwrap();
        library.create_group("all", |_| true).unwrap();

        let mut copy = library.types_in_group(&"all".into());
        copy.clear();

        assert_eq!(library.types_in_group(&"all".into()).len(), 1);
    }
}
