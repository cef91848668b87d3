// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Route: exact-path route tables for client-side navigation.
//!
//! ## Overview
//!
//! A [`RouteTable`] maps literal path keys (`/`, `/blog`, `/404`) to
//! [`Transition`]s: pure functions from the current application state to an
//! [`Update`], which is the new state plus zero or more effect requests.
//! Effect requests are opaque to this crate; the host's effect runner
//! interprets them.
//!
//! Matching is exact-path only. [`RouteTable::best_route`] selects the first
//! key equal to the [`Location`]'s path, and falls back to the table's
//! not-found key ([`NOT_FOUND`] unless changed) when nothing matches.
//! The not-found key is not required to be present in the table; callers
//! that resolve to a missing entry get `None` from [`RouteTable::resolve`]
//! and decide what to do with it.
//!
//! ## Minimal example
//!
//! ```
//! use understory_route::{Location, RouteTable, Update};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Site {
//!     page: &'static str,
//!     visits: u32,
//! }
//!
//! let routes: RouteTable<Site, ()> = RouteTable::new()
//!     .route("/", |s: Site| Site { page: "home", ..s })?
//!     .route("/blog", |s: Site| Site { page: "blog", ..s })?
//!     .route("/404", |s: Site| Site { page: "missing", ..s })?;
//!
//! assert_eq!(routes.best_route(&Location::new("/blog")), "/blog");
//! assert_eq!(routes.best_route(&Location::new("/missing")), "/404");
//!
//! let resolved = routes.resolve(&Location::new("/nope"));
//! let Update { state, .. } = (resolved.transition.unwrap())(Site::default());
//! assert_eq!(state.page, "missing");
//! # Ok::<(), understory_route::RouteError>(())
//! ```
//!
//! ## Features
//!
//! - `url`: build a [`Location`] from a parsed [`url::Url`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod location;
pub mod matcher;
mod table;
mod update;

pub use error::RouteError;
pub use location::Location;
pub use table::{NOT_FOUND, Resolved, RouteTable};
pub use update::{Effects, Transition, Update, pass_through, transition, transition_with};
