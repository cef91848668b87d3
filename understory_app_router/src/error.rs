// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_route::RouteError;

/// Errors raised while composing or driving the router.
///
/// All of them surface at configuration time or when a navigation target
/// cannot be parsed; unmatched paths are never errors.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// `require_not_found` is set and the table has no entry for its
    /// not-found key.
    #[error("route table has no entry for its not-found key `{0}`")]
    MissingNotFound(String),
    /// The route table could not be built.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// A URL or link target could not be parsed.
    #[error("invalid navigation target: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
