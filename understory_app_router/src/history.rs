// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session history capability.

use url::Url;

/// The environment's session history and viewport scroll.
///
/// Mirrors the browser operations the router relies on. Implementations
/// backed by a real browser delegate to `history.pushState`,
/// `history.back()`/`forward()` and `window.scroll`.
pub trait HistoryController {
    /// URL of the current entry.
    fn current(&self) -> Url;

    /// Add an entry for `url` after the current one, discarding any forward
    /// entries. Never reloads.
    fn push(&mut self, url: &Url);

    /// Move one entry back; returns the new current URL, or `None` at the
    /// first entry.
    fn back(&mut self) -> Option<Url>;

    /// Move one entry forward; returns the new current URL, or `None` at the
    /// last entry.
    fn forward(&mut self) -> Option<Url>;

    /// Scroll the viewport to the top-left corner.
    fn scroll_to_top(&mut self);

    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history with browser stack semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    index: usize,
    scroll_y: f64,
    scroll_resets: usize,
}

impl MemoryHistory {
    /// History with a single entry.
    pub fn new(start: Url) -> Self {
        Self {
            entries: vec![start],
            index: 0,
            scroll_y: 0.0,
            scroll_resets: 0,
        }
    }

    /// History with a single entry parsed from `href`.
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        Url::parse(href).map(Self::new)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Url] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Simulate the user scrolling.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// How many times the viewport was reset to the top.
    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }
}

impl HistoryController for MemoryHistory {
    fn current(&self) -> Url {
        self.entries[self.index].clone()
    }

    fn push(&mut self, url: &Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.clone());
        self.index = self.entries.len() - 1;
    }

    fn back(&mut self) -> Option<Url> {
        self.index = self.index.checked_sub(1)?;
        Some(self.current())
    }

    fn forward(&mut self) -> Option<Url> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
        self.scroll_resets += 1;
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
