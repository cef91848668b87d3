// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory App Router: route-driven state for single-page apps.
//!
//! ## Overview
//!
//! This crate turns URL navigation into application-state transitions without
//! a full routing framework. It composes around an app factory that follows
//! the init/view/subscriptions pattern:
//!
//! - [`app`](app::app) is a minimal single-threaded runtime implementing the
//!   [`AppFactory`](app::AppFactory) contract. Transitions are pure; effects
//!   are data handed to one runner owned by the app.
//! - [`with_router`] wraps a factory so the created app starts on the route
//!   matching the current URL and keeps following push/pop navigation until it
//!   is unmounted.
//! - [`Link`] is an anchor whose activation suppresses the default navigation
//!   and emits an in-app push event.
//! - [`Browser`] bundles the environment as explicit capabilities:
//!   [`HistoryController`](history::HistoryController), a
//!   [`DocumentHead`](understory_head::DocumentHead) and the
//!   [`NavigationBus`](events::NavigationBus) carrying push/pop events.
//!   [`Browser::memory`] builds an in-memory environment.
//!
//! Routes come from [`understory_route`]; head metadata effects from
//! [`understory_head`].
//!
//! ## Example
//!
//! ```
//! use understory_app_router::app::{AppConfig, app};
//! use understory_app_router::{Browser, ClickEvent, Link, with_router};
//! use understory_route::RouteTable;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Site {
//!     page: &'static str,
//! }
//!
//! let routes: RouteTable<Site, ()> = RouteTable::new()
//!     .route("/", |_| Site { page: "home" })?
//!     .route("/blog", |_| Site { page: "blog" })?
//!     .route("/404", |_| Site { page: "not found" })?;
//!
//! let browser = Browser::memory("https://example.com/")?;
//! let site = with_router(app::<Site, (), &str>, browser.clone()).mount(
//!     routes,
//!     AppConfig::new(Site::default(), |s: &Site| s.page, |page: &'static str| {
//!         println!("render {page}");
//!     }),
//! )?;
//! assert_eq!(site.with_state(|s| s.page), Some("home"));
//!
//! let mut click = ClickEvent::new();
//! Link::new("/blog", "blog").activate(&mut click, &browser)?;
//! assert!(click.default_prevented());
//! assert_eq!(site.with_state(|s| s.page), Some("blog"));
//! assert_eq!(browser.location().path(), "/blog");
//!
//! browser.back();
//! assert_eq!(site.with_state(|s| s.page), Some("home"));
//!
//! site.unmount();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Threading
//!
//! Everything runs on one thread. Navigation events are handled synchronously
//! and in delivery order; nothing is batched or cancelled.

pub mod app;
pub mod bridge;
mod browser;
mod error;
pub mod events;
pub mod history;
mod link;
mod router;
mod subscription;

#[cfg(test)]
mod testing;

pub use browser::{Browser, SharedHead, SharedHistory};
pub use error::RouterError;
pub use link::{ClickEvent, Link, text};
pub use router::{RouterOptions, WithRouter, with_router};
pub use subscription::Subscription;
