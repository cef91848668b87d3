// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A three-page portfolio site driven by `understory_app_router`.
//!
//! This example shows how to combine:
//! - `understory_route` for the route table (`/`, `/blog`, `/404`),
//! - `understory_head` for per-route titles and meta tags,
//! - `understory_app_router` for link navigation, back/forward and rendering.
//!
//! The browser is in-memory: each render prints the page markup, and the head
//! markup is printed at the end.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example portfolio_site`

use std::cell::RefCell;
use std::rc::Rc;

use understory_app_router::app::{AppConfig, app};
use understory_app_router::history::MemoryHistory;
use understory_app_router::{Browser, ClickEvent, Link, RouterError, text, with_router};
use understory_head::memory::MemoryHead;
use understory_head::{HeadParams, HeadRequest, MetaTag, head_effect};
use understory_route::{RouteTable, Update};

/// Renders the current page.
type View = fn(&Site) -> String;

/// Application state: the page to render plus a navigation counter.
#[derive(Clone)]
struct Site {
    view: View,
    navigations: u32,
}

fn home(_: &Site) -> String {
    let items: String = [
        Link::new("/blog", "blog").to_string(),
        "<a href=\"/resume.pdf\">resume</a>".to_owned(),
        "<a href=\"https://github.com/skipkayhil/dotfiles\">dotfiles</a>".to_owned(),
        "<a href=\"https://github.com/skipkayhil\">github</a>".to_owned(),
    ]
    .iter()
    .map(|link| format!("<li>{link}</li>"))
    .collect();
    format!(
        "<h1>hartley mcguire</h1><p>{}</p><ul>{items}</ul><p>{}</p>",
        text("Full Stack developer and Georgia Tech grad working full-time at Zuora"),
        text("B.S. Computer Science, Georgia Institute of Technology"),
    )
}

fn blog(_: &Site) -> String {
    format!(
        "<header>{} / {}</header><p>Coming soon...</p>",
        Link::new("/", "hm").attr("style", "color: inherit"),
        Link::new("/blog", "blog").attr("style", "color: inherit; text-decoration: none"),
    )
}

fn not_found(_: &Site) -> String {
    format!("<h1>404</h1><p>{}</p>", Link::new("/", "go back home"))
}

/// Route entry showing `view`, replacing the managed head when `head` is set.
fn page(view: View, head: Option<HeadParams>) -> impl Fn(Site) -> Update<Site, HeadRequest> {
    move |site| {
        let next = Site {
            view,
            navigations: site.navigations + 1,
        };
        match &head {
            Some(params) => Update::with_effect(next, head_effect(params.clone())),
            None => Update::new(next),
        }
    }
}

fn routes() -> Result<RouteTable<Site, HeadRequest>, RouterError> {
    let home_head = HeadParams::new()
        .title("hartley mcguire")
        .meta(MetaTag::name_content("description", "helmet testing :D"));
    Ok(RouteTable::new()
        .route_with("/", page(home, Some(home_head)))?
        .route_with(
            "/blog",
            page(blog, Some(HeadParams::new().title("blog - hartley mcguire"))),
        )?
        .route_with(
            "/404",
            page(not_found, Some(HeadParams::new().title("404 - hartley mcguire"))),
        )?)
}

fn print_head(browser: &Browser) {
    let head = browser.head();
    println!("  title: {}", head.title());
}

fn main() -> Result<(), RouterError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let head = Rc::new(RefCell::new(MemoryHead::new()));
    head.borrow_mut().push_static("meta", &[("charset", "utf-8")]);
    let history = MemoryHistory::parse("https://hartley.example/")?;
    let browser = Browser::new(Rc::new(RefCell::new(history)), head.clone());

    let runner_browser = browser.clone();
    let render_browser = browser.clone();
    let config = AppConfig::new(
        Site {
            view: not_found,
            navigations: 0,
        },
        |site: &Site| (site.view)(site),
        move |markup: String| {
            println!("[{}]", render_browser.location());
            println!("  body: {markup}");
        },
    )
    .runner(move |request: HeadRequest, _| {
        request.apply(&mut *runner_browser.head_mut());
        tracing::info!(title = runner_browser.head().title(), "head updated");
    });
    let site = with_router(app::<Site, HeadRequest, String>, browser.clone())
        .mount(routes()?, config)?;
    print_head(&browser);

    // Click the "blog" link on the home page.
    let mut click = ClickEvent::new();
    Link::new("/blog", "blog").activate(&mut click, &browser)?;
    assert!(click.default_prevented(), "link click should stay in-app");
    print_head(&browser);

    // Follow a dead link, then press back twice.
    browser.navigate("/projects")?;
    print_head(&browser);
    browser.back();
    browser.back();
    print_head(&browser);

    let navigations = site.unmount().map_or(0, |s| s.navigations);
    println!(
        "navigations: {navigations}, history entries: {}",
        browser.history().len()
    );
    println!("{}", head.borrow());
    Ok(())
}
