//! Precedence-ordered setting overrides.
//!
//! Piles (and other named things) inherit settings through a three-level
//! convention on the key string:
//!
//! - a plain id (`"draw"`) targets one individual,
//! - a `'.'`-prefixed name (`".tableau"`) targets a group,
//! - `"*"` targets everything.
//!
//! Resolution picks the most specific match: individual, then the first
//! matching group in the order the caller supplies, then the wildcard.
//! This is configuration plumbing, kept outside the move engine; group
//! membership comes from wherever the caller tracks it (for piles,
//! `Table::groups_of_pile`).
//!
//! ## Example
//!
//! ```
//! use cardtable::settings::SettingsResolver;
//!
//! let mut overrides = SettingsResolver::new();
//! overrides.set("*", 0);
//! overrides.set(".tableau", 1);
//! overrides.set("draw", 2);
//!
//! assert_eq!(overrides.resolve("draw", &[]), Some(&2));
//! assert_eq!(overrides.resolve("t1", &["tableau".to_string()]), Some(&1));
//! assert_eq!(overrides.resolve("waste", &[]), Some(&0));
//! ```

use rustc_hash::FxHashMap;

/// A precedence-ordered override map: individual > group > wildcard.
#[derive(Clone, Debug)]
pub struct SettingsResolver<T> {
    wildcard: Option<T>,
    groups: FxHashMap<String, T>,
    individuals: FxHashMap<String, T>,
}

impl<T> Default for SettingsResolver<T> {
    fn default() -> Self {
        Self {
            wildcard: None,
            groups: FxHashMap::default(),
            individuals: FxHashMap::default(),
        }
    }
}

impl<T> SettingsResolver<T> {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value for a key.
    ///
    /// `"*"` sets the wildcard, `".name"` sets a group override, anything
    /// else an individual override. Setting a key again replaces its
    /// value.
    pub fn set(&mut self, key: &str, value: T) {
        if key == "*" {
            self.wildcard = Some(value);
        } else if let Some(group) = key.strip_prefix('.') {
            self.groups.insert(group.to_string(), value);
        } else {
            self.individuals.insert(key.to_string(), value);
        }
    }

    /// Resolve the value for an id belonging to the given groups.
    ///
    /// Most specific wins: an individual override, then the first of
    /// `groups` (in the given order) with a group override, then the
    /// wildcard. `None` when nothing matches.
    #[must_use]
    pub fn resolve(&self, id: &str, groups: &[String]) -> Option<&T> {
        if let Some(value) = self.individuals.get(id) {
            return Some(value);
        }
        for group in groups {
            if let Some(value) = self.groups.get(group) {
                return Some(value);
            }
        }
        self.wildcard.as_ref()
    }

    /// Is there any override at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wildcard.is_none() && self.groups.is_empty() && self.individuals.is_empty()
    }
}
