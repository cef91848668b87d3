// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route table.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::matcher;
use crate::update::{Transition, Update, transition, transition_with};
use crate::{Location, RouteError};

/// Default not-found key.
pub const NOT_FOUND: &str = "/404";

/// Insertion-ordered mapping from path keys to [`Transition`]s.
///
/// Keys are unique and must start with `/`. Iteration follows insertion
/// order, which is also the order the matcher visits keys in.
pub struct RouteTable<S, F> {
    entries: Vec<(String, Transition<S, F>)>,
    index: HashMap<String, usize>,
    not_found: String,
}

/// A resolved route: the selected key and its entry, if the table has one.
pub struct Resolved<'a, S, F> {
    /// Selected key. Either an exact match or the table's not-found key.
    pub key: &'a str,
    /// Entry for `key`; `None` when `key` is the not-found key and the table
    /// has no entry for it.
    pub transition: Option<&'a Transition<S, F>>,
}

impl<S, F> core::fmt::Debug for RouteTable<S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RouteTable")
            .field("keys", &self.entries.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .field("not_found", &self.not_found)
            .finish_non_exhaustive()
    }
}

impl<S, F> core::fmt::Debug for Resolved<'_, S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Resolved")
            .field("key", &self.key)
            .field("has_transition", &self.transition.is_some())
            .finish()
    }
}

impl<S, F> Default for RouteTable<S, F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            not_found: NOT_FOUND.to_string(),
        }
    }
}

impl<S, F> RouteTable<S, F> {
    /// Create an empty table whose not-found key is [`NOT_FOUND`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different not-found key.
    pub fn with_not_found(mut self, key: impl Into<String>) -> Result<Self, RouteError> {
        let key = key.into();
        validate(&key)?;
        self.not_found = key;
        Ok(self)
    }

    /// Register a transition under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        transition: Transition<S, F>,
    ) -> Result<(), RouteError> {
        let key = key.into();
        validate(&key)?;
        if self.index.contains_key(&key) {
            return Err(RouteError::Duplicate(key));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, transition));
        Ok(())
    }

    /// Entry registered under `key`.
    pub fn get(&self, key: &str) -> Option<&Transition<S, F>> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Whether `key` has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The key unmatched locations resolve to.
    pub fn not_found_key(&self) -> &str {
        &self.not_found
    }

    /// Whether the not-found key has an entry.
    pub fn has_not_found(&self) -> bool {
        self.contains(&self.not_found)
    }

    /// Best key for `location`; see [`matcher`] for the policy.
    pub fn best_route(&self, location: &Location) -> &str {
        matcher::best_route(self.keys(), location, &self.not_found)
    }

    /// Best key for `location` together with its entry.
    pub fn resolve(&self, location: &Location) -> Resolved<'_, S, F> {
        let key = self.best_route(location);
        Resolved {
            key,
            transition: self.get(key),
        }
    }
}

impl<S: 'static, F: 'static> RouteTable<S, F> {
    /// Builder form of [`insert`](Self::insert) for `(state) -> state` functions.
    pub fn route(
        mut self,
        key: impl Into<String>,
        f: impl Fn(S) -> S + 'static,
    ) -> Result<Self, RouteError> {
        self.insert(key, transition(f))?;
        Ok(self)
    }

    /// Builder form of [`insert`](Self::insert) for `(state) -> Update` functions.
    pub fn route_with(
        mut self,
        key: impl Into<String>,
        f: impl Fn(S) -> Update<S, F> + 'static,
    ) -> Result<Self, RouteError> {
        self.insert(key, transition_with(f))?;
        Ok(self)
    }
}

fn validate(key: &str) -> Result<(), RouteError> {
    if key.starts_with('/') {
        Ok(())
    } else {
        Err(RouteError::InvalidKey(key.to_string()))
    }
}
