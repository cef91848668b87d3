// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`DocumentHead`].
//!
//! Keeps the title and an ordered list of head elements. Useful wherever no
//! real document exists: tests, headless hosts, and pre-rendering the head
//! markup for a route.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::DocumentHead;
use crate::markup::{write_attribute, write_escaped};

/// One element in a [`MemoryHead`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadElement {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl HeadElement {
    /// Element name, e.g. `meta`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Title plus ordered head elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHead {
    title: String,
    elements: Vec<HeadElement>,
}

impl MemoryHead {
    /// Empty head with an empty title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append an author-provided element. It carries no marker, so the head
    /// effect leaves it alone.
    pub fn push_static(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.elements.push(HeadElement {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        });
    }

    /// Elements in document order.
    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    /// Number of elements bearing `marker`.
    pub fn marked_count(&self, marker: &str) -> usize {
        self.elements.iter().filter(|e| e.has_attribute(marker)).count()
    }

    /// Write the head as markup: `<title>` followed by each element.
    pub fn write_markup<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<title>")?;
        write_escaped(out, &self.title)?;
        out.write_str("</title>")?;
        for el in &self.elements {
            write!(out, "<{}", el.tag)?;
            for (name, value) in el.attributes() {
                write_attribute(out, name, value)?;
            }
            out.write_char('>')?;
        }
        Ok(())
    }
}

impl fmt::Display for MemoryHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markup(f)
    }
}

impl DocumentHead for MemoryHead {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
    }

    fn remove_marked(&mut self, marker: &str) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| !e.has_attribute(marker));
        before - self.elements.len()
    }

    fn append_meta(&mut self, attributes: &[(&str, &str)]) {
        self.push_static("meta", attributes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_marked_only_touches_marked() {
        let mut head = MemoryHead::new();
        head.push_static("link", &[("rel", "icon")]);
        head.append_meta(&[("name", "a"), ("x-mark", "true")]);
        head.append_meta(&[("name", "b"), ("x-mark", "true")]);
        assert_eq!(head.remove_marked("x-mark"), 2);
        assert_eq!(head.elements().len(), 1);
        assert_eq!(head.elements()[0].tag(), "link");
        assert_eq!(head.remove_marked("x-mark"), 0);
    }

    #[test]
    fn renders_markup() {
        let mut head = MemoryHead::new().with_title("a & b");
        head.push_static("meta", &[("charset", "utf-8")]);
        assert_eq!(
            head.to_string(),
            r#"<title>a &amp; b</title><meta charset="utf-8">"#
        );
    }
}
