// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router-aware app composer.
//!
//! ## Overview
//!
//! [`with_router`] wraps an [`AppFactory`] so that the app it creates follows
//! the browser location. [`WithRouter::mount`]:
//!
//! 1. resolves the best route for the current URL;
//! 2. wraps the caller's [`Init`] so that, once it has produced the base state
//!    and its own startup effects, one more startup effect dispatches the
//!    initial route's transition against that base state;
//! 3. appends one subscription that keeps the [navigation
//!    bridge](crate::bridge) listening for as long as the app is mounted;
//! 4. hands the augmented config to the factory.
//!
//! Nothing else about the factory's behavior changes: it still owns update
//! application, effect order and the subscription lifecycle.

use std::rc::Rc;

use understory_route::{Location, RouteTable, pass_through};

use crate::app::{AppConfig, AppFactory, Dispatcher, Effect, Init};
use crate::bridge::listen_routes;
use crate::{Browser, RouterError};

/// Router behavior switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouterOptions {
    /// Reset the scroll position after every push navigation.
    pub scroll_to_top: bool,
    /// Refuse to mount a table without an entry for its not-found key.
    pub require_not_found: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            scroll_to_top: true,
            require_not_found: false,
        }
    }
}

/// An app factory bound to a browser environment.
#[derive(Clone, Debug)]
pub struct WithRouter<A> {
    factory: A,
    browser: Browser,
    options: RouterOptions,
}

/// Compose `factory` with routing over `browser`.
pub fn with_router<A>(factory: A, browser: Browser) -> WithRouter<A> {
    WithRouter {
        factory,
        browser,
        options: RouterOptions::default(),
    }
}

impl<A> WithRouter<A> {
    /// Replace the options.
    #[must_use]
    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    /// The environment this router drives.
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Create an app whose state follows the current location.
    pub fn mount<S: 'static, F: 'static, V>(
        &self,
        routes: RouteTable<S, F>,
        config: AppConfig<S, F, V>,
    ) -> Result<A::App, RouterError>
    where
        A: AppFactory<S, F, V>,
    {
        if self.options.require_not_found && !routes.has_not_found() {
            return Err(RouterError::MissingNotFound(
                routes.not_found_key().to_owned(),
            ));
        }

        let url = self.browser.current_url();
        let resolved = routes.resolve(&Location::from(&url));
        let startup = match resolved.transition {
            Some(transition) => transition.clone(),
            None => {
                tracing::warn!(
                    route = resolved.key,
                    "no entry for initial route; starting with base state"
                );
                pass_through()
            }
        };
        tracing::debug!(url = %url, route = resolved.key, routes = routes.len(), "mounting router");

        let AppConfig {
            init,
            view,
            node,
            runner,
            mut subscriptions,
        } = config;

        let init = Init::Derived(Box::new(move || {
            let (state, mut effects) = init.normalize();
            effects.push(Effect::Dispatch(startup));
            Init::WithEffects(state, effects)
        }));

        let routes = Rc::new(routes);
        let browser = self.browser.clone();
        let options = self.options;
        subscriptions.push(Box::new(move |dispatcher: &Dispatcher<S, F>| {
            listen_routes(routes, dispatcher.clone(), &browser, options)
        }));

        Ok(self.factory.create(AppConfig {
            init,
            view,
            node,
            runner,
            subscriptions,
        }))
    }
}
