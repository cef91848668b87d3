// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State updates and the transitions that produce them.

use alloc::rc::Rc;

use smallvec::SmallVec;

/// Inline storage for the effect requests of one update.
///
/// Most transitions request zero or one effect.
pub type Effects<F> = SmallVec<[F; 1]>;

/// Result of running a [`Transition`]: the next state plus effect requests.
///
/// Effect requests are data. They are handed, in order, to the host's effect
/// runner after the new state has been committed.
#[derive(Clone, Debug, PartialEq)]
pub struct Update<S, F> {
    /// The next application state.
    pub state: S,
    /// Effect requests to run after `state` is committed.
    pub effects: Effects<F>,
}

impl<S, F> Update<S, F> {
    /// An update that only replaces state.
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: SmallVec::new(),
        }
    }

    /// An update that replaces state and requests one effect.
    pub fn with_effect(state: S, effect: F) -> Self {
        let mut effects = SmallVec::new();
        effects.push(effect);
        Self { state, effects }
    }

    /// Append another effect request.
    #[must_use]
    pub fn and(mut self, effect: F) -> Self {
        self.effects.push(effect);
        self
    }

    /// Split into state and effect requests.
    pub fn into_parts(self) -> (S, Effects<F>) {
        (self.state, self.effects)
    }

    /// Convert every effect request, keeping order.
    pub fn map_effects<G>(self, f: impl FnMut(F) -> G) -> Update<S, G> {
        Update {
            state: self.state,
            effects: self.effects.into_iter().map(f).collect(),
        }
    }
}

/// A shared, pure state transition evaluated when its route becomes active.
pub type Transition<S, F> = Rc<dyn Fn(S) -> Update<S, F>>;

/// Wrap a bare `(state) -> state` function as a [`Transition`].
pub fn transition<S: 'static, F: 'static>(f: impl Fn(S) -> S + 'static) -> Transition<S, F> {
    Rc::new(move |state| Update::new(f(state)))
}

/// Wrap a `(state) -> Update` function as a [`Transition`].
pub fn transition_with<S: 'static, F: 'static>(
    f: impl Fn(S) -> Update<S, F> + 'static,
) -> Transition<S, F> {
    Rc::new(f)
}

/// A transition that returns the state untouched and requests nothing.
///
/// Used in place of a route entry that does not exist.
pub fn pass_through<S: 'static, F: 'static>() -> Transition<S, F> {
    Rc::new(Update::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn bare_transition_requests_nothing() {
        let t: Transition<u32, &str> = transition(|n| n + 1);
        let out = t(1);
        assert_eq!(out.state, 2);
        assert!(out.effects.is_empty());
    }

    #[test]
    fn effects_keep_insertion_order() {
        let t: Transition<u32, &str> =
            transition_with(|n| Update::with_effect(n * 2, "first").and("second"));
        let (state, effects) = t(3).into_parts();
        assert_eq!(state, 6);
        assert_eq!(effects.into_vec(), vec!["first", "second"]);
    }

    #[test]
    fn pass_through_is_identity() {
        let t: Transition<&str, ()> = pass_through();
        assert_eq!(t("same"), Update::new("same"));
    }

    #[test]
    fn map_effects_converts_in_order() {
        let up: Update<(), u8> = Update::with_effect((), 1).and(2);
        let mapped: Vec<u16> = up.map_effects(|e| u16::from(e) * 10).effects.into_vec();
        assert_eq!(mapped, vec![10, 20]);
    }
}
