// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hosting app contract and a minimal single-threaded runtime.
//!
//! ## Overview
//!
//! An app is configured with an initializer ([`Init`]), a `view` from state to
//! some view value `V`, a mounting target ([`Mount`]) that receives each
//! rendered view, a single effect runner, and subscriptions. [`AppFactory`] is
//! the contract the router composes around; [`app`] is the runtime shipped
//! here, and any `Fn(AppConfig) -> App` can stand in for it.
//!
//! ## Update semantics
//!
//! - [`Dispatcher::dispatch`] applies a transition immediately. Its effect
//!   requests are queued and handed to the runner in FIFO order once the
//!   outermost dispatch finishes applying.
//! - A dispatch made from inside the runner applies its transition at once and
//!   appends its requests to the queue that is already being drained.
//! - Rendering happens once per outermost dispatch, after the queue is empty,
//!   and only if state changed.
//! - After unmount, dispatch is a logged no-op.
//!
//! Views and transitions must not dispatch.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use understory_route::{Transition, Update};

use crate::Subscription;

/// An effect the runtime runs at startup or on behalf of the app.
pub enum Effect<S, F> {
    /// Request handed to the app's effect runner.
    Request(F),
    /// Dispatch a transition against the state current at the time it runs.
    Dispatch(Transition<S, F>),
}

impl<S, F: core::fmt::Debug> core::fmt::Debug for Effect<S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Request(r) => f.debug_tuple("Request").field(r).finish(),
            Self::Dispatch(_) => f.debug_tuple("Dispatch").finish_non_exhaustive(),
        }
    }
}

/// How the app's first state is produced.
pub enum Init<S, F> {
    /// A fixed initial state.
    State(S),
    /// A fixed initial state followed by startup effects, run in order.
    WithEffects(S, Vec<Effect<S, F>>),
    /// Computed when the app starts.
    Derived(Box<dyn FnOnce() -> Self>),
}

impl<S, F> Init<S, F> {
    /// Resolve to the base state and its startup effects.
    pub fn normalize(self) -> (S, Vec<Effect<S, F>>) {
        match self {
            Self::State(state) => (state, Vec::new()),
            Self::WithEffects(state, effects) => (state, effects),
            Self::Derived(f) => f().normalize(),
        }
    }
}

impl<S, F> From<S> for Init<S, F> {
    fn from(state: S) -> Self {
        Self::State(state)
    }
}

impl<S: core::fmt::Debug, F: core::fmt::Debug> core::fmt::Debug for Init<S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::State(s) => f.debug_tuple("State").field(s).finish(),
            Self::WithEffects(s, e) => f.debug_tuple("WithEffects").field(s).field(e).finish(),
            Self::Derived(_) => f.debug_tuple("Derived").finish_non_exhaustive(),
        }
    }
}

/// Mounting target: receives every rendered view.
pub trait Mount<V> {
    /// Replace what is shown with `view`.
    fn render(&mut self, view: V);
}

impl<V, T: FnMut(V)> Mount<V> for T {
    fn render(&mut self, view: V) {
        self(view);
    }
}

/// The app's single effect runner.
pub type Runner<S, F> = Box<dyn FnMut(F, &Dispatcher<S, F>)>;

/// Starts a subscription when the app mounts.
pub type Subscribe<S, F> = Box<dyn FnOnce(&Dispatcher<S, F>) -> Subscription>;

/// Everything an app factory needs to start an app.
pub struct AppConfig<S, F, V> {
    /// Initial state and startup effects.
    pub init: Init<S, F>,
    /// Renders state into a view.
    pub view: Box<dyn Fn(&S) -> V>,
    /// Receives rendered views.
    pub node: Box<dyn Mount<V>>,
    /// Interprets effect requests.
    pub runner: Runner<S, F>,
    /// Started at mount, disposed at unmount.
    pub subscriptions: Vec<Subscribe<S, F>>,
}

impl<S: 'static, F: 'static, V> AppConfig<S, F, V> {
    /// Config with no subscriptions and a runner that drops every request.
    pub fn new(
        init: impl Into<Init<S, F>>,
        view: impl Fn(&S) -> V + 'static,
        node: impl Mount<V> + 'static,
    ) -> Self {
        Self {
            init: init.into(),
            view: Box::new(view),
            node: Box::new(node),
            runner: Box::new(|_: F, _: &Dispatcher<S, F>| {
                tracing::trace!("effect request ignored");
            }),
            subscriptions: Vec::new(),
        }
    }

    /// Replace the effect runner.
    #[must_use]
    pub fn runner(mut self, runner: impl FnMut(F, &Dispatcher<S, F>) + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Add a subscription.
    #[must_use]
    pub fn subscribe(
        mut self,
        subscribe: impl FnOnce(&Dispatcher<S, F>) -> Subscription + 'static,
    ) -> Self {
        self.subscriptions.push(Box::new(subscribe));
        self
    }
}

impl<S, F, V> core::fmt::Debug for AppConfig<S, F, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

/// Something that turns an [`AppConfig`] into a running app.
pub trait AppFactory<S, F, V> {
    /// The running app.
    type App;

    /// Start an app.
    fn create(&self, config: AppConfig<S, F, V>) -> Self::App;
}

impl<S, F, V, A, T> AppFactory<S, F, V> for T
where
    T: Fn(AppConfig<S, F, V>) -> A,
{
    type App = A;

    fn create(&self, config: AppConfig<S, F, V>) -> A {
        self(config)
    }
}

struct Core<S, F> {
    state: RefCell<Option<S>>,
    queue: RefCell<VecDeque<F>>,
    runner: RefCell<Runner<S, F>>,
    render: RefCell<Box<dyn FnMut(&S)>>,
    flushing: Cell<bool>,
    dirty: Cell<bool>,
    started: Cell<bool>,
    mounted: Cell<bool>,
}

impl<S, F> Core<S, F> {
    fn apply(&self, dispatcher: &Dispatcher<S, F>, f: impl FnOnce(S) -> Update<S, F>) {
        if !self.mounted.get() {
            tracing::warn!("dispatch after unmount ignored");
            return;
        }
        let taken = self.state.borrow_mut().take();
        let Some(state) = taken else {
            tracing::warn!("dispatch from inside a transition ignored");
            return;
        };
        let (state, effects) = f(state).into_parts();
        *self.state.borrow_mut() = Some(state);
        self.dirty.set(true);
        self.queue.borrow_mut().extend(effects);
        self.flush(dispatcher);
    }

    fn flush(&self, dispatcher: &Dispatcher<S, F>) {
        if self.flushing.replace(true) {
            return;
        }
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(request) = next else { break };
            let mut runner = self.runner.borrow_mut();
            (*runner)(request, dispatcher);
        }
        self.flushing.set(false);
        self.render_if_dirty();
    }

    fn render_if_dirty(&self) {
        if !self.started.get() || !self.dirty.replace(false) {
            return;
        }
        if let Some(state) = self.state.borrow().as_ref() {
            let mut render = self.render.borrow_mut();
            (*render)(state);
        }
    }
}

/// Handle for dispatching transitions into a running app.
///
/// Holds the app weakly: once the app is gone, dispatching does nothing.
pub struct Dispatcher<S, F> {
    core: Weak<Core<S, F>>,
}

impl<S, F> Clone for Dispatcher<S, F> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<S, F> core::fmt::Debug for Dispatcher<S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl<S, F> Dispatcher<S, F> {
    /// Apply a shared transition.
    pub fn dispatch(&self, transition: &Transition<S, F>) {
        self.dispatch_with(|state| transition(state));
    }

    /// Apply a one-off transition.
    pub fn dispatch_with(&self, f: impl FnOnce(S) -> Update<S, F>) {
        match self.core.upgrade() {
            Some(core) => core.apply(self, f),
            None => tracing::warn!("dispatch to a dropped app ignored"),
        }
    }

    /// Whether the app is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.core.upgrade().is_some_and(|core| core.mounted.get())
    }

    fn run(&self, core: &Core<S, F>, effect: Effect<S, F>) {
        match effect {
            Effect::Request(request) => {
                core.queue.borrow_mut().push_back(request);
                core.flush(self);
            }
            Effect::Dispatch(transition) => core.apply(self, |state| transition(state)),
        }
    }
}

/// A running app created by [`app`].
pub struct App<S, F> {
    core: Rc<Core<S, F>>,
    subscriptions: Vec<Subscription>,
}

impl<S, F> core::fmt::Debug for App<S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("mounted", &self.core.mounted.get())
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

impl<S, F> App<S, F> {
    /// A dispatcher bound to this app.
    pub fn dispatcher(&self) -> Dispatcher<S, F> {
        Dispatcher {
            core: Rc::downgrade(&self.core),
        }
    }

    /// Read the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.core.state.borrow().as_ref().map(f)
    }

    /// Clone of the current state.
    pub fn state(&self) -> Option<S>
    where
        S: Clone,
    {
        self.with_state(S::clone)
    }

    /// Whether the app is mounted.
    pub fn is_mounted(&self) -> bool {
        self.core.mounted.get()
    }

    /// Dispose every subscription and stop accepting dispatches; returns the
    /// final state.
    pub fn unmount(mut self) -> Option<S> {
        self.teardown();
        self.core.state.borrow_mut().take()
    }

    fn teardown(&mut self) {
        if !self.core.mounted.replace(false) {
            return;
        }
        for sub in &mut self.subscriptions {
            sub.dispose();
        }
        tracing::debug!(subscriptions = self.subscriptions.len(), "app unmounted");
    }
}

impl<S, F> Drop for App<S, F> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Start an app.
///
/// Sets the base state from `init`, starts the subscriptions, runs the startup
/// effects in order, then renders once. Subscriptions are live while startup
/// effects run, so anything those effects trigger reaches them.
pub fn app<S: 'static, F: 'static, V: 'static>(config: AppConfig<S, F, V>) -> App<S, F> {
    let AppConfig {
        init,
        view,
        mut node,
        runner,
        subscriptions,
    } = config;
    let (state, effects) = init.normalize();

    let core = Rc::new(Core {
        state: RefCell::new(Some(state)),
        queue: RefCell::new(VecDeque::new()),
        runner: RefCell::new(runner),
        render: RefCell::new(Box::new(move |state: &S| node.render(view(state)))),
        flushing: Cell::new(false),
        dirty: Cell::new(true),
        started: Cell::new(false),
        mounted: Cell::new(true),
    });
    let dispatcher = Dispatcher {
        core: Rc::downgrade(&core),
    };

    let subscriptions: Vec<Subscription> = subscriptions
        .into_iter()
        .map(|subscribe| subscribe(&dispatcher))
        .collect();
    let startup = effects.len();
    for effect in effects {
        dispatcher.run(&core, effect);
    }

    core.started.set(true);
    core.dirty.set(true);
    core.render_if_dirty();
    tracing::debug!(
        startup_effects = startup,
        subscriptions = subscriptions.len(),
        "app mounted"
    );

    App {
        core,
        subscriptions,
    }
}
