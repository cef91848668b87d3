// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path matcher.
//!
//! ## Scoring
//!
//! Every candidate key is scored against the location's path: an exact match
//! scores [`EXACT`], anything else scores [`MISS`]. A candidate replaces the
//! current best only when its score is strictly greater, so among equal scores
//! the earliest-seen key wins. Since the starting score equals [`MISS`], a key
//! that does not match can never be selected.
//!
//! When no key scores above [`MISS`], including when there are no keys at all,
//! the caller's not-found key is returned. It does not have to be one of the
//! candidates.
//!
//! Prefix, wildcard and parameterized segments are not supported.

use crate::Location;

/// Score of a key equal to the location path.
pub const EXACT: i8 = 1;

/// Score of a key that does not match.
pub const MISS: i8 = -1;

/// Score a single key against a location.
pub fn score(key: &str, location: &Location) -> i8 {
    if key == location.path() { EXACT } else { MISS }
}

/// Select the best key for `location`, or `not_found` when none matches.
///
/// ```
/// use understory_route::Location;
/// use understory_route::matcher::best_route;
///
/// let keys = ["/", "/blog", "/404"];
/// assert_eq!(best_route(keys, &Location::new("/blog"), "/404"), "/blog");
/// assert_eq!(best_route(keys, &Location::new("/nope"), "/404"), "/404");
///
/// let none: [&str; 0] = [];
/// assert_eq!(best_route(none, &Location::new("/"), "/404"), "/404");
/// ```
pub fn best_route<'a, I>(keys: I, location: &Location, not_found: &'a str) -> &'a str
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<&'a str> = None;
    let mut best_score = MISS;
    for key in keys {
        let s = score(key, location);
        if s > best_score {
            best = Some(key);
            best_score = s;
        }
    }
    let selected = best.unwrap_or(not_found);
    tracing::trace!(path = location.path(), route = selected, "best route");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    const KEYS: [&str; 3] = ["/", "/blog", "/404"];

    #[test]
    fn exact_keys_match_themselves() {
        for key in KEYS {
            assert_eq!(best_route(KEYS, &Location::new(key), "/404"), key);
        }
    }

    #[test]
    fn unmatched_path_falls_back_to_not_found() {
        assert_eq!(best_route(KEYS, &Location::new("/missing"), "/404"), "/404");
    }

    #[test]
    fn prefix_is_not_a_match() {
        assert_eq!(best_route(KEYS, &Location::new("/blog/post"), "/404"), "/404");
        assert_eq!(best_route(KEYS, &Location::new("/blo"), "/404"), "/404");
    }

    #[test]
    fn not_found_key_need_not_be_a_candidate() {
        let keys = ["/", "/blog"];
        assert_eq!(best_route(keys, &Location::new("/x"), "/404"), "/404");
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let loc = Location::new("/blog").with_search("a=1").with_hash("b");
        assert_eq!(best_route(KEYS, &loc, "/404"), "/blog");
    }

    #[test]
    fn earliest_equal_score_wins() {
        // Only reachable with non-unique keys; the first occurrence is kept.
        let keys = [String::from("/a"), String::from("/b"), String::from("/b")];
        let picked = best_route(keys.iter().map(String::as_str), &Location::new("/b"), "/404");
        assert_eq!(picked.as_ptr(), keys[1].as_ptr());
    }

    #[test]
    fn scores() {
        assert_eq!(score("/", &Location::new("/")), EXACT);
        assert_eq!(score("/", &Location::new("/blog")), MISS);
    }
}
