// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the crate's tests: a three-page site.

use understory_head::{HeadParams, HeadRequest, MetaTag, head_effect};
use understory_route::{RouteTable, Update};

use crate::Browser;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Page {
    #[default]
    Home,
    Blog,
    NotFound,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Site {
    pub(crate) page: Page,
    pub(crate) ready: bool,
    pub(crate) visits: u32,
}

fn show(page: Page) -> impl Fn(Site) -> Site {
    move |s| Site { page, ..s }
}

pub(crate) fn plain_routes() -> RouteTable<Site, ()> {
    RouteTable::new()
        .route("/", show(Page::Home))
        .and_then(|t| t.route("/blog", show(Page::Blog)))
        .and_then(|t| t.route("/404", show(Page::NotFound)))
        .unwrap()
}

fn show_with_head(page: Page, head: HeadParams) -> impl Fn(Site) -> Update<Site, HeadRequest> {
    move |s| Update::with_effect(Site { page, ..s }, head_effect(head.clone()))
}

pub(crate) fn head_routes() -> RouteTable<Site, HeadRequest> {
    RouteTable::new()
        .route_with(
            "/",
            show_with_head(
                Page::Home,
                HeadParams::new()
                    .title("hartley mcguire")
                    .meta(MetaTag::name_content("description", "helmet testing :D")),
            ),
        )
        .and_then(|t| {
            t.route_with(
                "/blog",
                show_with_head(Page::Blog, HeadParams::new().title("blog - hartley mcguire")),
            )
        })
        .and_then(|t| {
            t.route_with(
                "/404",
                show_with_head(Page::NotFound, HeadParams::new().title("404 - hartley mcguire")),
            )
        })
        .unwrap()
}

pub(crate) fn run_head(browser: &Browser, request: &HeadRequest) {
    request.apply(&mut *browser.head_mut());
}
