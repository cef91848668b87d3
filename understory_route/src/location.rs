// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// The part of a URL that routing looks at.
///
/// `search` and `hash` keep their leading `?`/`#` when non-empty, matching the
/// browser's `Location` accessors. Only [`Location::path`] takes part in matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    search: String,
    hash: String,
}

impl Location {
    /// Create a location from a path. An empty path is treated as `/`.
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if path.is_empty() {
            path.push('/');
        }
        Self {
            path,
            search: String::new(),
            hash: String::new(),
        }
    }

    /// Attach a query string (with or without the leading `?`).
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = prefixed('?', search);
        self
    }

    /// Attach a fragment (with or without the leading `#`).
    #[must_use]
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = prefixed('#', hash);
        self
    }

    /// Path component, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string including `?`, or empty.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fragment including `#`, or empty.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}{}", self.path, self.search, self.hash)
    }
}

#[cfg(feature = "url")]
impl From<&url::Url> for Location {
    fn from(url: &url::Url) -> Self {
        let mut loc = Self::new(url.path());
        if let Some(q) = url.query() {
            loc = loc.with_search(q);
        }
        if let Some(h) = url.fragment() {
            loc = loc.with_hash(h);
        }
        loc
    }
}

fn prefixed(prefix: char, s: &str) -> String {
    let body = s.strip_prefix(prefix).unwrap_or(s);
    let mut out = String::new();
    if !body.is_empty() {
        out.push(prefix);
        out.push_str(body);
    }
    out
}
