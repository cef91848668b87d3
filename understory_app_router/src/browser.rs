// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering environment as explicit capabilities.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use understory_head::DocumentHead;
use understory_head::memory::MemoryHead;
use understory_route::Location;
use url::Url;

use crate::events::{NavigationBus, NavigationEvent};
use crate::history::{HistoryController, MemoryHistory};
use crate::RouterError;

/// Shared handle to the environment's history.
pub type SharedHistory = Rc<RefCell<dyn HistoryController>>;

/// Shared handle to the environment's document head.
pub type SharedHead = Rc<RefCell<dyn DocumentHead>>;

/// Session history, document head and navigation event target.
///
/// Cloning yields another handle to the same environment.
#[derive(Clone)]
pub struct Browser {
    history: SharedHistory,
    head: SharedHead,
    events: NavigationBus,
}

impl core::fmt::Debug for Browser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Browser")
            .field("url", &self.current_url().as_str())
            .field("history_len", &self.history.borrow().len())
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Browser {
    /// Assemble an environment from its parts.
    pub fn new(history: SharedHistory, head: SharedHead) -> Self {
        Self {
            history,
            head,
            events: NavigationBus::new(),
        }
    }

    /// In-memory environment starting at `href`.
    pub fn memory(href: &str) -> Result<Self, RouterError> {
        let history = MemoryHistory::parse(href)?;
        Ok(Self::new(
            Rc::new(RefCell::new(history)),
            Rc::new(RefCell::new(MemoryHead::new())),
        ))
    }

    /// URL of the current history entry.
    pub fn current_url(&self) -> Url {
        self.history.borrow().current()
    }

    /// Routable part of the current URL.
    pub fn location(&self) -> Location {
        Location::from(&self.current_url())
    }

    /// Resolve `target` against the current URL, as an anchor would.
    pub fn resolve(&self, target: &str) -> Result<Url, RouterError> {
        Ok(self.current_url().join(target)?)
    }

    /// Borrow the history.
    pub fn history(&self) -> Ref<'_, dyn HistoryController> {
        self.history.borrow()
    }

    /// Mutably borrow the history.
    pub fn history_mut(&self) -> RefMut<'_, dyn HistoryController> {
        self.history.borrow_mut()
    }

    /// Shared history handle.
    pub fn shared_history(&self) -> SharedHistory {
        self.history.clone()
    }

    /// Borrow the document head.
    pub fn head(&self) -> Ref<'_, dyn DocumentHead> {
        self.head.borrow()
    }

    /// Mutably borrow the document head.
    pub fn head_mut(&self) -> RefMut<'_, dyn DocumentHead> {
        self.head.borrow_mut()
    }

    /// The navigation event target.
    pub fn events(&self) -> &NavigationBus {
        &self.events
    }

    /// Start in-app navigation to `target` by dispatching a push event.
    pub fn navigate(&self, target: &str) -> Result<(), RouterError> {
        let url = self.resolve(target)?;
        tracing::debug!(url = %url, "navigate");
        self.events.dispatch(&NavigationEvent::push(url));
        Ok(())
    }

    /// Add a history entry for `target` without dispatching any event, as a
    /// bare `history.pushState` would. Returns the resolved URL.
    pub fn push_entry(&self, target: &str) -> Result<Url, RouterError> {
        let url = self.resolve(target)?;
        self.history.borrow_mut().push(&url);
        Ok(url)
    }

    /// Native back navigation: move history, then dispatch a pop event.
    ///
    /// Returns `false` when already at the first entry.
    pub fn back(&self) -> bool {
        let moved = self.history.borrow_mut().back();
        self.pop_to(moved)
    }

    /// Native forward navigation: move history, then dispatch a pop event.
    ///
    /// Returns `false` when already at the last entry.
    pub fn forward(&self) -> bool {
        let moved = self.history.borrow_mut().forward();
        self.pop_to(moved)
    }

    fn pop_to(&self, url: Option<Url>) -> bool {
        match url {
            Some(url) => {
                self.events.dispatch(&NavigationEvent::pop(url));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NavKind;
    use std::cell::Cell;

    #[test]
    fn navigate_dispatches_push_without_touching_history() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let pushes = Rc::new(RefCell::new(Vec::new()));
        let p = pushes.clone();
        browser
            .events()
            .listen(NavKind::Push, move |e| p.borrow_mut().push(e.url.path().to_owned()));
        browser.navigate("/blog").unwrap();
        assert_eq!(*pushes.borrow(), vec!["/blog"]);
        assert_eq!(browser.history().len(), 1);
    }

    #[test]
    fn relative_targets_resolve_against_current_url() {
        let browser = Browser::memory("http://localhost/blog/").unwrap();
        assert_eq!(browser.resolve("post").unwrap().path(), "/blog/post");
        assert_eq!(browser.resolve("/").unwrap().path(), "/");
    }

    #[test]
    fn back_moves_history_then_pops() {
        let browser = Browser::memory("http://localhost/").unwrap();
        browser.push_entry("/blog").unwrap();
        let pops = Rc::new(Cell::new(0));
        let p = pops.clone();
        let seen = browser.clone();
        browser.events().listen(NavKind::Pop, move |e| {
            assert_eq!(seen.current_url(), e.url);
            p.set(p.get() + 1);
        });
        assert!(browser.back());
        assert!(!browser.back());
        assert!(browser.forward());
        assert_eq!(pops.get(), 2);
        assert_eq!(browser.location().path(), "/blog");
    }

    #[test]
    fn push_entry_adds_history_without_events() {
        let browser = Browser::memory("http://localhost/blog/").unwrap();
        let events = Rc::new(Cell::new(0));
        for kind in [NavKind::Push, NavKind::Pop] {
            let e = events.clone();
            browser.events().listen(kind, move |_| e.set(e.get() + 1));
        }
        let url = browser.push_entry("post").unwrap();
        assert_eq!(url.path(), "/blog/post");
        assert_eq!(browser.history().len(), 2);
        assert_eq!(browser.location().path(), "/blog/post");
        assert_eq!(events.get(), 0);
    }

    #[test]
    fn invalid_start_url_is_an_error() {
        assert!(matches!(
            Browser::memory("not a url"),
            Err(RouterError::InvalidUrl(_))
        ));
    }
}
