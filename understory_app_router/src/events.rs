// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation events and the process-wide target they are delivered on.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use understory_route::Location;
use url::Url;

/// Kind of navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKind {
    /// In-app navigation; history has not been updated yet.
    Push,
    /// Native back/forward; history is already at the target.
    Pop,
}

impl NavKind {
    /// DOM event name for this kind.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Push => "pushstate",
            Self::Pop => "popstate",
        }
    }
}

/// A change of the active location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Push or pop.
    pub kind: NavKind,
    /// Target URL.
    pub url: Url,
}

impl NavigationEvent {
    /// A push event.
    pub fn push(url: Url) -> Self {
        Self {
            kind: NavKind::Push,
            url,
        }
    }

    /// A pop event.
    pub fn pop(url: Url) -> Self {
        Self {
            kind: NavKind::Pop,
            url,
        }
    }

    /// The routable part of the target URL.
    pub fn location(&self) -> Location {
        Location::from(&self.url)
    }
}

/// Identifies one registration on a [`NavigationBus`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&NavigationEvent)>;

#[derive(Default)]
struct Registry {
    next: u64,
    listeners: Vec<(ListenerId, NavKind, Listener)>,
}

/// Process-wide event target for navigation events.
///
/// Cloning yields another handle to the same target. Delivery is synchronous
/// and in registration order. Listeners are snapshotted before delivery, so a
/// listener may dispatch further events or change registrations. A listener
/// removed during delivery is not called for the rest of it; one added during
/// delivery is first called on the next dispatch.
#[derive(Clone, Default)]
pub struct NavigationBus {
    inner: Rc<RefCell<Registry>>,
}

impl core::fmt::Debug for NavigationBus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationBus")
            .field("push_listeners", &self.listener_count(NavKind::Push))
            .field("pop_listeners", &self.listener_count(NavKind::Pop))
            .finish_non_exhaustive()
    }
}

impl NavigationBus {
    /// A target with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of `kind`.
    pub fn listen(&self, kind: NavKind, listener: impl Fn(&NavigationEvent) + 'static) -> ListenerId {
        let mut reg = self.inner.borrow_mut();
        let id = ListenerId(reg.next);
        reg.next += 1;
        reg.listeners.push((id, kind, Rc::new(listener)));
        id
    }

    /// Remove a registration. Returns `false` if it was already gone.
    pub fn unlisten(&self, id: ListenerId) -> bool {
        let mut reg = self.inner.borrow_mut();
        let before = reg.listeners.len();
        reg.listeners.retain(|(l, _, _)| *l != id);
        reg.listeners.len() != before
    }

    /// Number of registrations for `kind`.
    pub fn listener_count(&self, kind: NavKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }

    /// Deliver `event` to every listener of its kind; returns how many were called.
    pub fn dispatch(&self, event: &NavigationEvent) -> usize {
        let targets: SmallVec<[(ListenerId, Listener); 2]> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == event.kind)
            .map(|(id, _, l)| (*id, l.clone()))
            .collect();
        tracing::trace!(
            event = event.kind.event_name(),
            url = %event.url,
            listeners = targets.len(),
            "navigation event"
        );
        let mut called = 0;
        for (id, listener) in &targets {
            if !self.is_registered(*id) {
                continue;
            }
            listener(event);
            called += 1;
        }
        called
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.iter().any(|(l, _, _)| *l == id)
    }
}
