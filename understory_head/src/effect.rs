// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::DocumentHead;

/// Attribute marking the tags owned by the head effect.
pub const HEAD_MARKER: &str = "data-ha-helmet";

/// One managed `<meta>` tag: an ordered list of attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaTag {
    attributes: SmallVec<[(String, String); 2]>,
}

impl MetaTag {
    /// An empty tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// `<meta name=".." content="..">`.
    pub fn name_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new().attr("name", name).attr("content", content)
    }

    /// `<meta property=".." content="..">`, as used by Open Graph.
    pub fn property_content(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new().attr("property", property).attr("content", content)
    }

    /// Append an attribute. Later attributes with the same name are kept as is.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Declarative head data supplied by a route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadParams {
    /// New document title, if any.
    pub title: Option<String>,
    /// Managed meta tags, in insertion order.
    pub meta: Vec<MetaTag>,
}

impl HeadParams {
    /// No title, no tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a managed meta tag.
    #[must_use]
    pub fn meta(mut self, tag: MetaTag) -> Self {
        self.meta.push(tag);
        self
    }
}

/// A pending head update. Data only; nothing happens until [`apply`](Self::apply).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadRequest {
    params: HeadParams,
}

/// Build the effect request for `params`.
pub fn head_effect(params: HeadParams) -> HeadRequest {
    HeadRequest { params }
}

impl HeadRequest {
    /// Parameters this request carries.
    pub fn params(&self) -> &HeadParams {
        &self.params
    }

    /// Synchronize `head` with this request.
    pub fn apply<H: DocumentHead + ?Sized>(&self, head: &mut H) {
        if let Some(title) = &self.params.title {
            head.set_title(title);
        }

        let removed = head.remove_marked(HEAD_MARKER);

        let mut attrs: SmallVec<[(&str, &str); 4]> = SmallVec::new();
        for tag in &self.params.meta {
            attrs.clear();
            attrs.extend(tag.attributes());
            attrs.push((HEAD_MARKER, "true"));
            head.append_meta(&attrs);
        }

        tracing::trace!(
            title = self.params.title.as_deref(),
            removed,
            inserted = self.params.meta.len(),
            "applied head metadata"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHead;
    use alloc::vec;

    fn names(head: &MemoryHead) -> Vec<&str> {
        head.elements()
            .iter()
            .filter_map(|e| e.attribute("name"))
            .collect()
    }

    #[test]
    fn second_run_replaces_managed_tags() {
        let mut head = MemoryHead::new();
        head_effect(
            HeadParams::new()
                .meta(MetaTag::name_content("description", "one"))
                .meta(MetaTag::name_content("keywords", "a,b")),
        )
        .apply(&mut head);
        head_effect(HeadParams::new().meta(MetaTag::name_content("author", "hm"))).apply(&mut head);

        assert_eq!(names(&head), vec!["author"]);
        assert_eq!(head.marked_count(HEAD_MARKER), 1);
    }

    #[test]
    fn unmarked_tags_survive() {
        let mut head = MemoryHead::new();
        head.push_static("meta", &[("name", "viewport"), ("content", "width=device-width")]);
        head_effect(HeadParams::new().meta(MetaTag::name_content("description", "x")))
            .apply(&mut head);
        head_effect(HeadParams::new()).apply(&mut head);

        assert_eq!(names(&head), vec!["viewport"]);
        assert_eq!(head.marked_count(HEAD_MARKER), 0);
    }

    #[test]
    fn title_is_optional() {
        let mut head = MemoryHead::new().with_title("shell");
        head_effect(HeadParams::new()).apply(&mut head);
        assert_eq!(head.title(), "shell");
        head_effect(HeadParams::new().title("blog")).apply(&mut head);
        assert_eq!(head.title(), "blog");
    }

    #[test]
    fn attributes_keep_order_and_end_with_marker() {
        let mut head = MemoryHead::new();
        head_effect(HeadParams::new().meta(MetaTag::property_content("og:title", "Home")))
            .apply(&mut head);
        let el = &head.elements()[0];
        let attrs: Vec<(&str, &str)> = el.attributes().collect();
        assert_eq!(
            attrs,
            vec![
                ("property", "og:title"),
                ("content", "Home"),
                (HEAD_MARKER, "true"),
            ]
        );
    }

    #[test]
    fn meta_order_mirrors_params() {
        let mut head = MemoryHead::new();
        head_effect(
            HeadParams::new()
                .meta(MetaTag::name_content("b", ""))
                .meta(MetaTag::name_content("a", ""))
                .meta(MetaTag::name_content("c", "")),
        )
        .apply(&mut head);
        assert_eq!(names(&head), vec!["b", "a", "c"]);
    }
}
