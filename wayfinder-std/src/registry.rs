//! Route registry.

use std::collections::HashMap;
use wayfinder_core::{Action, ActionKind, Route};

/// Maps each route to exactly one [`Action`].
///
/// Registering a route again replaces its action. There is no ordering and
/// no removal; the registry is filled at setup and read during navigation.
pub struct Registry<R, P, V> {
    routes: HashMap<R, Action<R, P, V>>,
}

impl<R: Route, P, V> Registry<R, P, V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Bind `route` to `action`, returning the action it replaced.
    pub fn register(&mut self, route: R, action: Action<R, P, V>) -> Option<Action<R, P, V>> {
        self.routes.insert(route, action)
    }

    /// The action bound to `route`.
    pub fn lookup(&self, route: &R) -> Option<&Action<R, P, V>> {
        self.routes.get(route)
    }

    /// Kind of the action bound to `route`.
    pub fn kind_of(&self, route: &R) -> Option<ActionKind> {
        self.lookup(route).map(Action::kind)
    }

    /// Whether `route` is registered.
    pub fn contains(&self, route: &R) -> bool {
        self.routes.contains_key(route)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over registered routes, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &R> {
        self.routes.keys()
    }
}

impl<R: Route, P, V> Default for Registry<R, P, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a Registry.
pub struct RegistryBuilder<R, P, V> {
    registry: Registry<R, P, V>,
}

impl<R: Route, P, V> Default for RegistryBuilder<R, P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Route, P, V> RegistryBuilder<R, P, V> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register a route. Later registrations of the same route win.
    pub fn route(mut self, route: R, action: Action<R, P, V>) -> Self {
        self.registry.register(route, action);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<R, P, V> {
        self.registry
    }
}
