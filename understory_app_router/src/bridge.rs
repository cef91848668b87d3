// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bridge: turns navigation events into route transitions.
//!
//! ## Handling
//!
//! - Pop: resolve the best route for the event URL and dispatch its
//!   transition. History already points at the URL and is left alone.
//! - Push: resolve and dispatch the same way, then push the URL onto history,
//!   then reset the scroll position.
//!
//! The transition is applied and its effects scheduled before history changes,
//! so the render reflecting the new state is ordered deterministically
//! relative to the URL update.
//!
//! A resolved key without an entry (the not-found key missing from the table)
//! leaves state unchanged and logs a warning.

use std::rc::Rc;

use understory_route::{Location, RouteTable};
use url::Url;

use crate::app::Dispatcher;
use crate::events::{NavKind, NavigationEvent};
use crate::{Browser, RouterOptions, Subscription};

/// Register push and pop listeners that drive `routes` into `dispatcher`.
///
/// The returned subscription removes both listeners.
pub fn listen_routes<S: 'static, F: 'static>(
    routes: Rc<RouteTable<S, F>>,
    dispatcher: Dispatcher<S, F>,
    browser: &Browser,
    options: RouterOptions,
) -> Subscription {
    let route_to = Rc::new(move |url: &Url| set_route(&routes, &dispatcher, url));
    let events = browser.events().clone();

    let pop = {
        let route_to = route_to.clone();
        events.listen(NavKind::Pop, move |event: &NavigationEvent| {
            route_to(&event.url);
        })
    };

    let history = browser.shared_history();
    let push = events.listen(NavKind::Push, move |event: &NavigationEvent| {
        route_to(&event.url);
        let mut history = history.borrow_mut();
        history.push(&event.url);
        if options.scroll_to_top {
            history.scroll_to_top();
        }
    });

    tracing::debug!("route listeners registered");
    Subscription::new(move || {
        events.unlisten(pop);
        events.unlisten(push);
        tracing::debug!("route listeners removed");
    })
}

fn set_route<S, F>(routes: &RouteTable<S, F>, dispatcher: &Dispatcher<S, F>, url: &Url) {
    let location = Location::from(url);
    let resolved = routes.resolve(&location);
    match resolved.transition {
        Some(transition) => {
            tracing::debug!(path = location.path(), route = resolved.key, "route change");
            dispatcher.dispatch(transition);
        }
        None => tracing::warn!(
            path = location.path(),
            route = resolved.key,
            "no entry for resolved route; state unchanged"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppConfig, app};
    use crate::testing::{Page, Site, plain_routes};

    fn mounted(browser: &Browser, options: RouterOptions) -> App<Site, ()> {
        let routes = Rc::new(plain_routes());
        let browser = browser.clone();
        app(
            AppConfig::new(Site::default(), |s: &Site| s.page, |_: Page| {})
                .subscribe(move |d| listen_routes(routes, d.clone(), &browser, options)),
        )
    }

    #[test]
    fn push_transitions_then_updates_history_and_scroll() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let app = mounted(&browser, RouterOptions::default());
        browser.navigate("/blog").unwrap();
        assert_eq!(app.with_state(|s| s.page), Some(Page::Blog));
        assert_eq!(browser.history().len(), 2);
        assert_eq!(browser.location().path(), "/blog");
    }

    #[test]
    fn history_is_pushed_after_the_transition() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let routes = {
            let seen = seen.clone();
            let b = browser.clone();
            RouteTable::<Site, ()>::new()
                .route("/blog", move |s| {
                    seen.borrow_mut().push(b.history().len());
                    Site { page: Page::Blog, ..s }
                })
                .unwrap()
        };
        let routes = Rc::new(routes);
        let b = browser.clone();
        let _app = app(
            AppConfig::new(Site::default(), |s: &Site| s.page, |_: Page| {})
                .subscribe(move |d| listen_routes(routes, d.clone(), &b, RouterOptions::default())),
        );
        browser.navigate("/blog").unwrap();
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(browser.history().len(), 2);
    }

    #[test]
    fn pop_transitions_without_pushing() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let app = mounted(&browser, RouterOptions::default());
        browser.navigate("/blog").unwrap();
        assert!(browser.back());
        assert_eq!(app.with_state(|s| s.page), Some(Page::Home));
        assert_eq!(browser.history().len(), 2);
        assert!(browser.forward());
        assert_eq!(app.with_state(|s| s.page), Some(Page::Blog));
        assert_eq!(browser.history().len(), 2);
    }

    #[test]
    fn unknown_path_routes_to_not_found() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let app = mounted(&browser, RouterOptions::default());
        browser.navigate("/nowhere").unwrap();
        assert_eq!(app.with_state(|s| s.page), Some(Page::NotFound));
        assert_eq!(browser.location().path(), "/nowhere");
    }

    #[test]
    fn missing_not_found_entry_leaves_state_alone() {
        let browser = Browser::memory("http://localhost/").unwrap();
        let routes = Rc::new(
            RouteTable::<Site, ()>::new()
                .route("/blog", |s| Site { page: Page::Blog, ..s })
                .unwrap(),
        );
        let b = browser.clone();
        let app = app(
            AppConfig::new(Site::default(), |s: &Site| s.page, |_: Page| {})
                .subscribe(move |d| listen_routes(routes, d.clone(), &b, RouterOptions::default())),
        );
        browser.navigate("/gone").unwrap();
        assert_eq!(app.with_state(|s| s.page), Some(Page::Home));
        // The URL still changes; only state is untouched.
        assert_eq!(browser.location().path(), "/gone");
    }

    #[test]
    fn scroll_reset_can_be_disabled() {
        let history = Rc::new(std::cell::RefCell::new(
            crate::history::MemoryHistory::parse("http://localhost/").unwrap(),
        ));
        let browser = Browser::new(
            history.clone(),
            Rc::new(std::cell::RefCell::new(understory_head::memory::MemoryHead::new())),
        );
        let on = mounted(&browser, RouterOptions::default());
        history.borrow_mut().set_scroll_y(300.0);
        browser.navigate("/blog").unwrap();
        assert_eq!(history.borrow().scroll_resets(), 1);
        assert_eq!(history.borrow().scroll_y(), 0.0);
        drop(on);

        let _off = mounted(
            &browser,
            RouterOptions {
                scroll_to_top: false,
                ..RouterOptions::default()
            },
        );
        history.borrow_mut().set_scroll_y(300.0);
        browser.navigate("/").unwrap();
        assert_eq!(history.borrow().scroll_resets(), 1);
        assert_eq!(history.borrow().scroll_y(), 300.0);
    }
}
