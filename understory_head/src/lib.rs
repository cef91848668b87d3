// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Head: document head metadata as effect data.
//!
//! ## Overview
//!
//! Routes describe the document title and a set of `<meta>` tags declaratively
//! with [`HeadParams`]. [`head_effect`] turns those parameters into a
//! [`HeadRequest`], a plain value that a host effect runner applies to a
//! [`DocumentHead`] when the route becomes active.
//!
//! ## Managed tags
//!
//! Every tag inserted by [`HeadRequest::apply`] carries the [`HEAD_MARKER`]
//! attribute. Applying a request:
//!
//! 1. sets the title, if the request has one (an absent title leaves the
//!    current title alone);
//! 2. removes every tag bearing the marker;
//! 3. appends one `<meta>` per [`MetaTag`], in order, each with its attributes
//!    followed by the marker.
//!
//! Tags without the marker, such as static tags authored in the page shell,
//! are never touched. There is no diffing: managed tags are removed and
//! reinserted wholesale.
//!
//! ```
//! use understory_head::memory::MemoryHead;
//! use understory_head::{DocumentHead, HeadParams, MetaTag, head_effect};
//!
//! let mut head = MemoryHead::new();
//! head.push_static("meta", &[("charset", "utf-8")]);
//!
//! head_effect(
//!     HeadParams::new()
//!         .title("hartley mcguire")
//!         .meta(MetaTag::name_content("description", "portfolio")),
//! )
//! .apply(&mut head);
//! head_effect(HeadParams::new().title("blog - hartley mcguire")).apply(&mut head);
//!
//! assert_eq!(head.title(), "blog - hartley mcguire");
//! // Only the static charset tag is left.
//! assert_eq!(head.elements().len(), 1);
//! ```
//!
//! The [`memory`] module provides an in-memory [`DocumentHead`] for headless
//! hosts and tests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod effect;
pub mod markup;
pub mod memory;

pub use effect::{HEAD_MARKER, HeadParams, HeadRequest, MetaTag, head_effect};

/// Capability for mutating a document head.
///
/// Implemented by the host for its rendering environment. The head effect is
/// the only intended caller.
pub trait DocumentHead {
    /// Current document title.
    fn title(&self) -> &str;

    /// Replace the document title.
    fn set_title(&mut self, title: &str);

    /// Remove every element carrying the attribute `marker`; returns how many
    /// were removed.
    fn remove_marked(&mut self, marker: &str) -> usize;

    /// Append a `<meta>` element with `attributes`, in order.
    fn append_meta(&mut self, attributes: &[(&str, &str)]);
}
