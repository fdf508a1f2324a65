//! Action descriptors.
//!
//! An [`Action`] says what happens when a route resolves. The set of kinds is
//! closed; each variant carries its own payload type and the engine matches
//! on them exhaustively.

use crate::{
    broadcast::Notification,
    error::BoxError,
    present::{Screen, Template},
    route::Route,
};
use bitflags::bitflags;
use futures::{FutureExt, future::BoxFuture};
use std::{any::type_name, fmt, future::Future, sync::Arc};

/// Builds a presentable unit from parameters.
pub type FactoryFn<P, V> = Arc<dyn Fn(Option<P>) -> V + Send + Sync>;

/// Picks the next route from the current parameters. May refuse.
pub type RedirectFn<R, P> = Arc<dyn Fn(Option<&P>) -> Result<R, BoxError> + Send + Sync>;

/// Asynchronous work that eventually yields the next route and parameters.
pub type ProcessFn<R, P> =
    Arc<dyn Fn(Option<P>) -> BoxFuture<'static, Result<(R, Option<P>), BoxError>> + Send + Sync>;

/// A callback run for its effect only.
pub type SideEffectFn<P> = Arc<dyn Fn(Option<P>) + Send + Sync>;

/// A [`Screen`] type erased into a factory, keeping its type name for logs.
pub struct ScreenFactory<P, V> {
    build: FactoryFn<P, V>,
    type_name: &'static str,
}

impl<P: 'static, V: 'static> ScreenFactory<P, V> {
    /// Erase `S`.
    pub fn of<S>() -> Self
    where
        S: Screen<P> + Into<V> + 'static,
    {
        Self {
            build: Arc::new(|params: Option<P>| {
                let mut screen = S::create(params.as_ref());
                screen.accept_parameters(params);
                screen.into()
            }),
            type_name: type_name::<S>(),
        }
    }
}

impl<P, V> ScreenFactory<P, V> {
    /// Create and inject the screen, then convert it into the presentable type.
    pub fn build(&self, params: Option<P>) -> V {
        (self.build)(params)
    }

    /// Name of the erased screen type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<P, V> Clone for ScreenFactory<P, V> {
    fn clone(&self) -> Self {
        Self {
            build: Arc::clone(&self.build),
            type_name: self.type_name,
        }
    }
}

/// What a route resolves to.
pub enum Action<R, P, V> {
    /// Instantiate a named template.
    Template(Template),
    /// Build a [`Screen`] type.
    Screen(ScreenFactory<P, V>),
    /// Call a factory function.
    Factory(FactoryFn<P, V>),
    /// Resolve another route with the same parameters.
    Redirect(R),
    /// Compute the next route; failure aborts the navigation.
    RedirectWith(RedirectFn<R, P>),
    /// Run asynchronous work, then navigate to the route it yields.
    ProcessThenRedirect(ProcessFn<R, P>),
    /// Run a callback; nothing is presented.
    SideEffect(SideEffectFn<P>),
    /// Publish a notification; nothing is presented.
    Broadcast(Notification),
}

impl<R: Route, P: Send + 'static, V: 'static> Action<R, P, V> {
    /// `Template` action.
    pub fn template(group: impl Into<String>, item: impl Into<String>) -> Self {
        Action::Template(Template::new(group, item))
    }

    /// `Screen` action for the screen type `S`.
    pub fn screen<S>() -> Self
    where
        S: Screen<P> + Into<V> + 'static,
    {
        Action::Screen(ScreenFactory::of::<S>())
    }

    /// `Factory` action.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(Option<P>) -> V + Send + Sync + 'static,
    {
        Action::Factory(Arc::new(f))
    }

    /// `Redirect` action.
    pub fn redirect(target: R) -> Self {
        Action::Redirect(target)
    }

    /// `RedirectWith` action.
    pub fn redirect_with<F>(f: F) -> Self
    where
        F: Fn(Option<&P>) -> Result<R, BoxError> + Send + Sync + 'static,
    {
        Action::RedirectWith(Arc::new(f))
    }

    /// `ProcessThenRedirect` action. The returned future must be `Send`; it is
    /// driven by the navigator's executor.
    pub fn process<F, Fut>(f: F) -> Self
    where
        F: Fn(Option<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(R, Option<P>), BoxError>> + Send + 'static,
    {
        Action::ProcessThenRedirect(Arc::new(move |params: Option<P>| f(params).boxed()))
    }

    /// `SideEffect` action.
    pub fn side_effect<F>(f: F) -> Self
    where
        F: Fn(Option<P>) + Send + Sync + 'static,
    {
        Action::SideEffect(Arc::new(f))
    }

    /// `Broadcast` action.
    pub fn broadcast(notification: Notification) -> Self {
        Action::Broadcast(notification)
    }
}

impl<R, P, V> Action<R, P, V> {
    /// The variant tag.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Template(_) => ActionKind::Template,
            Action::Screen(_) => ActionKind::Screen,
            Action::Factory(_) => ActionKind::Factory,
            Action::Redirect(_) => ActionKind::Redirect,
            Action::RedirectWith(_) => ActionKind::RedirectWith,
            Action::ProcessThenRedirect(_) => ActionKind::ProcessThenRedirect,
            Action::SideEffect(_) => ActionKind::SideEffect,
            Action::Broadcast(_) => ActionKind::Broadcast,
        }
    }

    /// Shorthand for `self.kind().requires_ui_affinity()`.
    pub fn requires_ui_affinity(&self) -> bool {
        self.kind().requires_ui_affinity()
    }
}

impl<R: Clone, P, V> Clone for Action<R, P, V> {
    fn clone(&self) -> Self {
        match self {
            Action::Template(t) => Action::Template(t.clone()),
            Action::Screen(s) => Action::Screen(s.clone()),
            Action::Factory(f) => Action::Factory(Arc::clone(f)),
            Action::Redirect(r) => Action::Redirect(r.clone()),
            Action::RedirectWith(f) => Action::RedirectWith(Arc::clone(f)),
            Action::ProcessThenRedirect(f) => Action::ProcessThenRedirect(Arc::clone(f)),
            Action::SideEffect(f) => Action::SideEffect(Arc::clone(f)),
            Action::Broadcast(n) => Action::Broadcast(n.clone()),
        }
    }
}

impl<R: fmt::Debug, P, V> fmt::Debug for Action<R, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Action::Screen(s) => f.debug_tuple("Screen").field(&s.type_name()).finish(),
            Action::Redirect(r) => f.debug_tuple("Redirect").field(r).finish(),
            Action::Broadcast(n) => f.debug_tuple("Broadcast").field(n).finish(),
            other => f.write_str(other.kind().name()),
        }
    }
}

/// Tag of an [`Action`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// See [`Action::Template`].
    Template,
    /// See [`Action::Screen`].
    Screen,
    /// See [`Action::Factory`].
    Factory,
    /// See [`Action::Redirect`].
    Redirect,
    /// See [`Action::RedirectWith`].
    RedirectWith,
    /// See [`Action::ProcessThenRedirect`].
    ProcessThenRedirect,
    /// See [`Action::SideEffect`].
    SideEffect,
    /// See [`Action::Broadcast`].
    Broadcast,
}

bitflags! {
    /// Static properties of an action kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActionTraits: u8 {
        /// Must run on the UI scheduler.
        const UI_AFFINITY = 1;
        /// Produces a presentable unit.
        const PRESENTS = 1 << 1;
        /// Continues resolution at another route.
        const REDIRECTS = 1 << 2;
        /// Can fail on the caller's frame.
        const FALLIBLE = 1 << 3;
        /// Suspends on caller-supplied asynchronous work.
        const ASYNC = 1 << 4;
    }
}

impl ActionKind {
    /// Properties of this kind. Depends on the tag only, never on a payload.
    pub const fn traits(self) -> ActionTraits {
        match self {
            ActionKind::Template | ActionKind::Screen | ActionKind::Factory => {
                ActionTraits::UI_AFFINITY.union(ActionTraits::PRESENTS)
            }
            ActionKind::Redirect => ActionTraits::REDIRECTS,
            ActionKind::RedirectWith => ActionTraits::REDIRECTS.union(ActionTraits::FALLIBLE),
            ActionKind::ProcessThenRedirect => ActionTraits::REDIRECTS.union(ActionTraits::ASYNC),
            ActionKind::SideEffect | ActionKind::Broadcast => ActionTraits::empty(),
        }
    }

    /// Whether resolving this kind must happen on the UI scheduler.
    pub const fn requires_ui_affinity(self) -> bool {
        self.traits().contains(ActionTraits::UI_AFFINITY)
    }

    /// Stable name, used in log fields.
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Template => "Template",
            ActionKind::Screen => "Screen",
            ActionKind::Factory => "Factory",
            ActionKind::Redirect => "Redirect",
            ActionKind::RedirectWith => "RedirectWith",
            ActionKind::ProcessThenRedirect => "ProcessThenRedirect",
            ActionKind::SideEffect => "SideEffect",
            ActionKind::Broadcast => "Broadcast",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
