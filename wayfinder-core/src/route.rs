//! Route identifier trait.

use std::{fmt::Debug, hash::Hash};

/// A symbolic identifier naming a navigable destination.
///
/// Routes are opaque keys: the engine only hashes and compares them. Any
/// thread-safe `'static` value with value equality qualifies, which in
/// practice is usually a fieldless enum owned by the application.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum AppRoute { Home, Login }
/// // AppRoute: Route via the blanket impl
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Route",
    label = "must be `Eq + Hash + Clone + Debug + Send + Sync + 'static`",
    note = "Derive `Debug, Clone, PartialEq, Eq, Hash` on your route type."
)]
pub trait Route: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> Route for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}
