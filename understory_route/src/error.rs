// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors raised while building a [`RouteTable`](crate::RouteTable).
///
/// These are configuration-time failures; matching itself never fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The key was already registered in the table.
    #[error("route `{0}` is already registered")]
    Duplicate(String),
    /// Route keys are absolute paths and must start with `/`.
    #[error("route key `{0}` must start with `/`")]
    InvalidKey(String),
}
