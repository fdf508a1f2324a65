//! # wayfinder-core
//!
//! Core traits and types for the Wayfinder route resolution engine.
//!
//! This crate has no opinion on threads, UI toolkits or logging. It defines
//! the vocabulary the engine in `wayfinder-std` is written against:
//!
//! - [`Route`]: the opaque key callers navigate to
//! - [`Parameters`]: the payload travelling with a navigation request
//! - [`Action`]: what a route resolves to, tagged by [`ActionKind`]
//! - [`Screen`] and [`TemplateLoader`]: presentation collaborators
//! - [`Scheduler`] and [`Executor`]: execution-context capabilities
//! - [`Broadcaster`]: the notification collaborator
//!
//! # Error Types
//!
//! - [`NavigationError`] - everything that can go wrong while resolving
//! - [`BoxError`] - caller-supplied errors passed through untouched

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod broadcast;
mod error;
mod params;
mod present;
mod route;
mod schedule;

// Re-exports
pub use action::{
    Action, ActionKind, ActionTraits, FactoryFn, ProcessFn, RedirectFn, ScreenFactory,
    SideEffectFn,
};
pub use broadcast::{Broadcaster, Notification};
pub use error::{BoxError, NavigationError};
pub use params::Parameters;
pub use present::{Screen, Template, TemplateLoader};
pub use route::Route;
pub use schedule::{Executor, Scheduler, Task};
