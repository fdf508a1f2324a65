//! Navigation lifecycle hooks.
//!
//! Each hook is a single replaceable slot, not a subscriber list: setting a
//! hook discards the previous one.

use std::{fmt, sync::Arc};
use wayfinder_core::NavigationError;

/// Runs before every hop; returns the parameters the hop continues with.
pub type WillPrepareHook<R, P> = Arc<dyn Fn(&R, Option<P>) -> Option<P> + Send + Sync>;

/// Receives each presentable unit, on the UI scheduler.
pub type PresentableReadyHook<V> = Arc<dyn Fn(V) + Send + Sync>;

/// Runs on the UI scheduler when back navigation is requested.
pub type BackNavigationHook = Arc<dyn Fn() + Send + Sync>;

/// Observes failures that cannot reach the caller of `navigate`.
pub type NavigationFailedHook<R> = Arc<dyn Fn(&R, &NavigationError) + Send + Sync>;

/// The hook bundle held by a navigator.
pub struct EventHooks<R, P, V> {
    pub(crate) will_prepare: Option<WillPrepareHook<R, P>>,
    pub(crate) presentable_ready: Option<PresentableReadyHook<V>>,
    pub(crate) back_navigation: Option<BackNavigationHook>,
    pub(crate) navigation_failed: Option<NavigationFailedHook<R>>,
}

impl<R, P, V> EventHooks<R, P, V> {
    /// A bundle with every slot empty.
    pub fn new() -> Self {
        Self {
            will_prepare: None,
            presentable_ready: None,
            back_navigation: None,
            navigation_failed: None,
        }
    }

    /// Set the `will_prepare` hook.
    pub fn on_will_prepare<F>(mut self, f: F) -> Self
    where
        F: Fn(&R, Option<P>) -> Option<P> + Send + Sync + 'static,
    {
        self.will_prepare = Some(Arc::new(f));
        self
    }

    /// Set the `presentable_ready` hook.
    pub fn on_presentable_ready<F>(mut self, f: F) -> Self
    where
        F: Fn(V) + Send + Sync + 'static,
    {
        self.presentable_ready = Some(Arc::new(f));
        self
    }

    /// Set the `back_navigation` hook.
    pub fn on_back_navigation<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.back_navigation = Some(Arc::new(f));
        self
    }

    /// Set the `navigation_failed` observer.
    pub fn on_navigation_failed<F>(mut self, f: F) -> Self
    where
        F: Fn(&R, &NavigationError) + Send + Sync + 'static,
    {
        self.navigation_failed = Some(Arc::new(f));
        self
    }
}

impl<R, P, V> Default for EventHooks<R, P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, P, V> Clone for EventHooks<R, P, V> {
    fn clone(&self) -> Self {
        Self {
            will_prepare: self.will_prepare.clone(),
            presentable_ready: self.presentable_ready.clone(),
            back_navigation: self.back_navigation.clone(),
            navigation_failed: self.navigation_failed.clone(),
        }
    }
}

impl<R, P, V> fmt::Debug for EventHooks<R, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("will_prepare", &self.will_prepare.is_some())
            .field("presentable_ready", &self.presentable_ready.is_some())
            .field("back_navigation", &self.back_navigation.is_some())
            .field("navigation_failed", &self.navigation_failed.is_some())
            .finish()
    }
}
