//! # wayfinder-std
//!
//! Standard implementations for the Wayfinder route resolution engine.
//!
//! This crate provides:
//! - **Engine**: [`Navigator`] and its [`NavigatorBuilder`]
//! - **Registry**: [`Registry`], [`RegistryBuilder`]
//! - **Hooks**: [`EventHooks`]
//! - **Schedulers**: [`InlineScheduler`], [`UiThread`]
//! - **Executors**: [`ThreadExecutor`], [`ThreadPoolExecutor`], `TokioExecutor` (feature `tokio`)
//! - **Adapters**: [`Params`], [`ChannelBroadcaster`], `DeepLinks` (feature `deep-link`, on by default)
//! - **Testing**: deterministic collaborators in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use wayfinder_core;

// Modules
pub mod broadcast;
pub mod config;
#[cfg(feature = "deep-link")]
pub mod deep_link;
pub mod executor;
pub mod hooks;
pub mod navigator;
pub mod params;
pub mod registry;
pub mod scheduler;
pub mod testing;

pub use broadcast::ChannelBroadcaster;
pub use config::{DEFAULT_MAX_REDIRECT_DEPTH, NavigatorConfig};
#[cfg(feature = "deep-link")]
pub use deep_link::{DeepLinkError, DeepLinks};
#[cfg(feature = "tokio")]
pub use executor::TokioExecutor;
pub use executor::{ThreadExecutor, ThreadPoolExecutor};
pub use hooks::{
    BackNavigationHook, EventHooks, NavigationFailedHook, PresentableReadyHook, WillPrepareHook,
};
pub use navigator::{Navigator, NavigatorBuilder};
pub use params::Params;
pub use registry::{Registry, RegistryBuilder};
pub use scheduler::{InlineScheduler, UiThread};
