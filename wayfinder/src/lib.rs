//! # wayfinder - Route Resolution and Dispatch
//!
//! `wayfinder` is the navigation core of an interactive application. Routes
//! are registered once; afterwards callers navigate by symbolic name and the
//! engine decides what happens: present a screen, follow a redirect, run a
//! side effect, publish a notification or kick off asynchronous work that
//! picks the next route.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wayfinder::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum AppRoute { Home, Start }
//!
//! let navigator: Navigator<AppRoute, Params, View> = Navigator::builder()
//!     .route(AppRoute::Home, Action::factory(|_| View::home()))
//!     .route(AppRoute::Start, Action::redirect(AppRoute::Home))
//!     .scheduler(ui_thread)
//!     .build();
//!
//! navigator.set_on_presentable_ready(|view| window.show(view));
//! navigator.navigate(AppRoute::Start, None)?;
//! ```
//!
//! ## Where things run
//!
//! Presenting actions run on the configured [`Scheduler`]; everything else
//! runs on the caller, except `ProcessThenRedirect`, whose future is driven
//! by the configured [`Executor`] and re-enters `navigate` when it resolves.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use wayfinder_core::{
    // Actions
    Action,
    ActionKind,
    ActionTraits,
    // Errors
    BoxError,
    // Collaborators
    Broadcaster,
    Executor,
    FactoryFn,
    NavigationError,
    Notification,
    // Data
    Parameters,
    ProcessFn,
    RedirectFn,
    Route,
    Scheduler,
    Screen,
    ScreenFactory,
    SideEffectFn,
    Task,
    Template,
    TemplateLoader,
};

pub use wayfinder_std::{
    ChannelBroadcaster, DEFAULT_MAX_REDIRECT_DEPTH, EventHooks, InlineScheduler, Navigator,
    NavigatorBuilder, NavigatorConfig, Params, Registry, RegistryBuilder, ThreadExecutor,
    ThreadPoolExecutor, UiThread,
};

#[cfg(feature = "deep-link")]
pub use wayfinder_std::{DeepLinkError, DeepLinks};

#[cfg(feature = "tokio")]
pub use wayfinder_std::TokioExecutor;

pub use url::Url;

/// Hook slot types.
pub mod hooks {
    pub use wayfinder_std::hooks::{
        BackNavigationHook, EventHooks, NavigationFailedHook, PresentableReadyHook,
        WillPrepareHook,
    };
}

/// Testing utilities.
pub mod testing {
    pub use wayfinder_std::testing::{QueueExecutor, QueueScheduler, Recorder, RecordingBroadcaster};
}

/// Prelude module - common imports for Wayfinder.
///
/// # Usage
///
/// ```rust,ignore
/// use wayfinder::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, BoxError, EventHooks, NavigationError, Navigator, Notification, Parameters,
        Params, Route, Scheduler, Screen, Template, Url,
    };
}
