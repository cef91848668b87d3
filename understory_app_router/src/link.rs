// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-app links.

use core::fmt;

use smallvec::SmallVec;
use understory_head::markup::{write_attribute, write_escaped};
use url::Url;

use crate::{Browser, RouterError};

/// Activation of an interactive element.
///
/// Handlers record `prevent_default` here; the host checks it afterwards to
/// decide whether to run the platform's default action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    /// A fresh click.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the platform's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was suppressed.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// An anchor that navigates in-app instead of loading a new document.
///
/// Renders as `<a href="{to}" ...attributes>{children}</a>`. Children are
/// written as-is, so they may be nested markup; attribute values are escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link<C> {
    to: String,
    attributes: SmallVec<[(String, String); 2]>,
    children: C,
}

impl<C> Link<C> {
    /// A link to `to` (absolute or relative to the current URL).
    pub fn new(to: impl Into<String>, children: C) -> Self {
        Self {
            to: to.into(),
            attributes: SmallVec::new(),
            children,
        }
    }

    /// Pass an extra attribute through to the anchor.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Navigation target as written.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Link content.
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Whether the link points at the same path as `current`.
    pub fn is_active(&self, current: &Url) -> bool {
        current
            .join(&self.to)
            .is_ok_and(|target| target.path() == current.path())
    }

    /// Handle activation: suppress the default navigation and dispatch a push
    /// event for the resolved target.
    pub fn activate(&self, click: &mut ClickEvent, browser: &Browser) -> Result<(), RouterError> {
        click.prevent_default();
        browser.navigate(&self.to)
    }
}

impl<C: fmt::Display> fmt::Display for Link<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<a")?;
        write_attribute(f, "href", &self.to)?;
        for (name, value) in &self.attributes {
            write_attribute(f, name, value)?;
        }
        f.write_str(">")?;
        write!(f, "{}", self.children)?;
        f.write_str("</a>")
    }
}

/// Escape `text` for use as link content.
pub fn text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = write_escaped(&mut out, text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NavKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn renders_anchor_with_passthrough_attributes() {
        let link = Link::new("/blog", "blog").attr("class", "nav \"main\"");
        assert_eq!(
            link.to_string(),
            r#"<a href="/blog" class="nav &quot;main&quot;">blog</a>"#
        );
    }

    #[test]
    fn nested_children_are_not_escaped() {
        let inner = Link::new("/", text("a < b"));
        let outer = Link::new("/x", inner.to_string());
        assert_eq!(
            outer.to_string(),
            r#"<a href="/x"><a href="/">a &lt; b</a></a>"#
        );
    }

    #[test]
    fn activation_prevents_default_and_pushes_once() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let pushes = Rc::new(RefCell::new(Vec::new()));
        let p = pushes.clone();
        browser
            .events()
            .listen(NavKind::Push, move |e| p.borrow_mut().push(e.url.path().to_owned()));

        let mut click = ClickEvent::new();
        Link::new("/blog", "blog").activate(&mut click, &browser).unwrap();
        assert!(click.default_prevented());
        assert_eq!(*pushes.borrow(), vec!["/blog"]);
    }

    #[test]
    fn active_link_matches_current_path() {
        let here = Url::parse("http://localhost/blog?page=2").unwrap();
        assert!(Link::new("/blog", "").is_active(&here));
        assert!(!Link::new("/", "").is_active(&here));
    }
}
