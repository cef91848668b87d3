// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An active listener registration owned by one mounted app.
///
/// Disposing runs the teardown at most once; later calls do nothing.
/// Dropping an active subscription disposes it.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a teardown function.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down.
    pub fn empty() -> Self {
        Self { teardown: None }
    }

    /// Whether teardown has yet to run.
    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    /// Run the teardown if it has not run yet.
    pub fn dispose(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
