//! Membership-set core for favorites and comparison shortlists
//!
//! A shortlist is an ordered set of property ids persisted as a JSON
//! array under a fixed storage key. Membership is read fresh before
//! every mutation and written back after it, so the store is the single
//! source of truth. Unparseable stored data counts as an empty set.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::KeyValueStore;

/// Storage key for the favorites shortlist.
pub const FAVORITES_KEY: &str = "favoriteProperties";

/// Storage key for the comparison shortlist.
pub const COMPARE_KEY: &str = "compareProperties";

/// Comparison shortlists hold at most this many properties.
pub const COMPARE_LIMIT: usize = 4;

/// Opaque identifier for one real-estate listing.
///
/// Page markup supplies ids as strings or numbers, so the wire form
/// accepts both; the normalized form is always a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PropertyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for PropertyId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for PropertyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PropertyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = PropertyId;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string or integer property id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PropertyId, E> {
                Ok(PropertyId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PropertyId, E> {
                Ok(PropertyId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PropertyId, E> {
                Ok(PropertyId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Why an add was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("You can compare up to {limit} properties")]
    CapacityReached { limit: usize },
}

/// Outcome of a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The id was absent and has been appended.
    Added,
    /// The id was present and has been removed.
    Removed,
    /// The add was refused; membership is unchanged.
    Rejected(RejectReason),
}

/// Change notification delivered to subscribers after every toggle.
#[derive(Debug, Clone)]
pub struct ShortlistEvent {
    pub id: PropertyId,
    pub outcome: Toggle,
    /// Cardinality after the toggle.
    pub count: usize,
}

type Subscriber = Box<dyn Fn(&ShortlistEvent)>;

/// A storage-backed ordered set of property ids.
pub struct Shortlist<S: KeyValueStore> {
    storage: S,
    key: &'static str,
    capacity: Option<usize>,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> Shortlist<S> {
    /// Favorites: unbounded, under `favoriteProperties`.
    pub fn favorites(storage: S) -> Self {
        Self::new(storage, FAVORITES_KEY, None)
    }

    /// Comparison: at most [`COMPARE_LIMIT`] members, under `compareProperties`.
    pub fn comparison(storage: S) -> Self {
        Self::new(storage, COMPARE_KEY, Some(COMPARE_LIMIT))
    }

    pub fn new(storage: S, key: &'static str, capacity: Option<usize>) -> Self {
        Self {
            storage,
            key,
            capacity,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback invoked after every toggle, including rejected
    /// ones.
    pub fn subscribe(&mut self, subscriber: impl Fn(&ShortlistEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Current members, in insertion order. Missing or malformed stored
    /// data reads as empty.
    pub fn members(&self) -> Vec<PropertyId> {
        let raw = match self.storage.get(self.key) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(members) => members,
            Err(e) => {
                warn!(key = self.key, error = %e, "stored shortlist malformed, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, id: &PropertyId) -> bool {
        self.members().contains(id)
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// Flip membership of `id`.
    ///
    /// Present ids are removed unconditionally. Absent ids are appended
    /// unless the shortlist is at capacity, in which case nothing is
    /// written and the outcome is [`Toggle::Rejected`].
    pub fn toggle(&mut self, id: &PropertyId) -> Toggle {
        let mut members = self.members();

        let outcome = if let Some(pos) = members.iter().position(|m| m == id) {
            members.remove(pos);
            self.write(&members);
            Toggle::Removed
        } else if let Some(limit) = self.capacity.filter(|limit| members.len() >= *limit) {
            Toggle::Rejected(RejectReason::CapacityReached { limit })
        } else {
            members.push(id.clone());
            self.write(&members);
            Toggle::Added
        };

        debug!(key = self.key, id = %id, ?outcome, "toggle");

        let event = ShortlistEvent {
            id: id.clone(),
            outcome: outcome.clone(),
            count: members.len(),
        };
        for subscriber in &self.subscribers {
            subscriber(&event);
        }

        outcome
    }

    /// Drop every member.
    pub fn clear(&mut self) {
        self.storage.remove(self.key);
    }

    fn write(&mut self, members: &[PropertyId]) {
        match serde_json::to_string(members) {
            Ok(raw) => self.storage.set(self.key, &raw),
            Err(e) => warn!(key = self.key, error = %e, "failed to serialize shortlist"),
        }
    }
}
