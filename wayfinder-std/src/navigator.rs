//! The resolution/dispatch engine.
//!
//! A [`Navigator`] looks a route up in its [`Registry`], runs the
//! `will_prepare` hook, then follows the action:
//!
//! | Action | Where it runs | Outcome |
//! |--------|---------------|---------|
//! | `Template`, `Screen`, `Factory` | UI scheduler | presentable handed to `presentable_ready` |
//! | `Redirect`, `RedirectWith` | caller | next hop, same parameters |
//! | `SideEffect`, `Broadcast` | caller | callback run / notification published |
//! | `ProcessThenRedirect` | executor | new `navigate` once the future resolves |
//!
//! # Errors on detached paths
//!
//! `navigate` returns before presentation (when the scheduler queues) and
//! before asynchronous processing finishes. Failures on those paths cannot
//! reach the caller; they are logged with `tracing` and handed to the
//! `navigation_failed` hook instead.
//!
//! # Redirect chains
//!
//! Each hop runs `will_prepare` again. A chain that revisits a route fails
//! with `RedirectCycleDetected`, and one longer than
//! [`NavigatorConfig::max_redirect_depth`] with `RedirectDepthExceeded`.
//! Without those guards a self-redirect would loop forever.

#[cfg(feature = "deep-link")]
use crate::deep_link::DeepLinks;
use crate::{
    config::NavigatorConfig,
    executor::ThreadExecutor,
    hooks::EventHooks,
    registry::Registry,
    scheduler::InlineScheduler,
};
use futures::future::{AbortHandle, Abortable, Aborted};
use std::{
    collections::HashMap,
    fmt,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicU64, Ordering},
    },
};
use tracing::{debug, error, trace, warn};
#[cfg(feature = "deep-link")]
use url::Url;
use wayfinder_core::{
    Action, ActionKind, Broadcaster, Executor, FactoryFn, NavigationError, Notification,
    Parameters, ProcessFn, Route, Scheduler, ScreenFactory, Template, TemplateLoader,
};

/// Route resolution and dispatch engine.
///
/// Cloning is cheap and every clone drives the same registry and hooks.
pub struct Navigator<R, P, V> {
    inner: Arc<Inner<R, P, V>>,
}

struct Inner<R, P, V> {
    registry: RwLock<Registry<R, P, V>>,
    hooks: RwLock<EventHooks<R, P, V>>,
    scheduler: Arc<dyn Scheduler>,
    executor: Arc<dyn Executor>,
    broadcaster: Option<Arc<dyn Broadcaster>>,
    templates: Option<Arc<dyn TemplateLoader<P, V>>>,
    #[cfg(feature = "deep-link")]
    deep_links: Option<DeepLinks<R>>,
    pending: Mutex<HashMap<u64, AbortHandle>>,
    next_process: AtomicU64,
    config: NavigatorConfig,
}

/// The presenting subset of [`Action`], carried to the UI scheduler.
enum Presentation<P, V> {
    Template(Template),
    Screen(ScreenFactory<P, V>),
    Factory(FactoryFn<P, V>),
}

impl<R, P, V> Clone for Navigator<R, P, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Route, P: Parameters, V: Send + 'static> Default for Navigator<R, P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Route, P: Parameters, V: Send + 'static> Navigator<R, P, V> {
    /// A navigator with an empty registry, an inline scheduler and a
    /// thread-per-process executor.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a navigator.
    pub fn builder() -> NavigatorBuilder<R, P, V> {
        NavigatorBuilder::new()
    }

    /// The configuration this navigator was built with.
    pub fn config(&self) -> NavigatorConfig {
        self.inner.config
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Bind `route` to `action`, replacing any previous binding.
    ///
    /// Register before the first navigation; registering while another
    /// thread is navigating is safe but the other thread may see either
    /// binding.
    pub fn register(&self, route: R, action: Action<R, P, V>) {
        let kind = action.kind();
        if let Some(previous) = self.registry_mut().register(route.clone(), action) {
            debug!(route = ?route, %kind, previous = %previous.kind(), "route re-registered");
        } else {
            trace!(route = ?route, %kind, "route registered");
        }
    }

    /// Kind of the action bound to `route`.
    pub fn kind_of(&self, route: &R) -> Option<ActionKind> {
        self.registry().kind_of(route)
    }

    /// Whether `route` is registered.
    pub fn is_registered(&self, route: &R) -> bool {
        self.registry().contains(route)
    }

    // ------------------------------------------------------------------
    // Hooks
    // ------------------------------------------------------------------

    /// Replace the whole hook bundle.
    pub fn set_hooks(&self, hooks: EventHooks<R, P, V>) {
        *self.hooks_mut() = hooks;
    }

    /// Replace the `will_prepare` hook.
    pub fn set_will_prepare<F>(&self, f: F)
    where
        F: Fn(&R, Option<P>) -> Option<P> + Send + Sync + 'static,
    {
        self.hooks_mut().will_prepare = Some(Arc::new(f));
    }

    /// Replace the `presentable_ready` hook.
    pub fn set_on_presentable_ready<F>(&self, f: F)
    where
        F: Fn(V) + Send + Sync + 'static,
    {
        self.hooks_mut().presentable_ready = Some(Arc::new(f));
    }

    /// Replace the `back_navigation` hook.
    pub fn set_on_back_navigation<F>(&self, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.hooks_mut().back_navigation = Some(Arc::new(f));
    }

    /// Replace the `navigation_failed` observer.
    pub fn set_on_navigation_failed<F>(&self, f: F)
    where
        F: Fn(&R, &NavigationError) + Send + Sync + 'static,
    {
        self.hooks_mut().navigation_failed = Some(Arc::new(f));
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Resolve `route` and dispatch its action.
    ///
    /// Returns once the action has been performed or handed off: presentation
    /// is scheduled on the UI scheduler and asynchronous processing is
    /// spawned, so `Ok(())` does not mean either has finished.
    ///
    /// # Errors
    ///
    /// - `NoRegistrationForRoute` if a hop's route is not registered; no hook
    ///   runs for that hop
    /// - `Redirect` with the error a `RedirectWith` function returned
    /// - `RedirectCycleDetected` / `RedirectDepthExceeded` from the chain guards
    pub fn navigate(&self, route: R, params: Option<P>) -> Result<(), NavigationError> {
        let span = tracing::debug_span!("navigate", route = ?route);
        let _enter = span.enter();

        let result = self.resolve(route, params);
        if let Err(error) = &result {
            debug!(%error, "navigation failed");
        }
        result
    }

    /// Ask the UI to go back. Runs the `back_navigation` hook on the UI
    /// scheduler.
    pub fn navigate_back(&self) {
        let navigator = self.clone();
        self.inner.scheduler.schedule(Box::new(move || {
            let hook = navigator.hooks().back_navigation;
            match hook {
                Some(hook) => hook(),
                None => debug!("back navigation requested without a back_navigation hook"),
            }
        }));
    }

    /// Navigate to the route a deep link points at.
    ///
    /// Parameters are built with [`Parameters::from_uri`], then each path
    /// capture is added through [`Parameters::with_value`].
    ///
    /// # Errors
    ///
    /// `NoDeepLinkMatch` when no pattern matches (or none are configured),
    /// otherwise whatever [`navigate`](Self::navigate) returns.
    #[cfg(feature = "deep-link")]
    pub fn handle(&self, link: &Url) -> Result<(), NavigationError> {
        let (route, captures) = self
            .inner
            .deep_links
            .as_ref()
            .and_then(|links| links.resolve(link))
            .ok_or_else(|| NavigationError::NoDeepLinkMatch(link.to_string()))?;

        tracing::info!(%link, route = ?route, "handling deep link");
        let params = captures
            .into_iter()
            .fold(P::from_uri(link), |params, (key, value)| {
                params.with_value(&key, &value)
            });
        self.navigate(route, Some(params))
    }

    /// Abort every asynchronous process still in flight. Returns how many
    /// were aborted. Aborted processes never navigate.
    pub fn cancel_pending(&self) -> usize {
        let handles: Vec<AbortHandle> = self.pending().drain().map(|(_, h)| h).collect();
        for handle in &handles {
            handle.abort();
        }
        if !handles.is_empty() {
            debug!(count = handles.len(), "cancelled pending processes");
        }
        handles.len()
    }

    /// Number of asynchronous processes in flight.
    pub fn pending_processes(&self) -> usize {
        self.pending().len()
    }

    fn resolve(&self, mut route: R, mut params: Option<P>) -> Result<(), NavigationError> {
        let config = self.inner.config;
        let mut chain: Vec<R> = Vec::new();

        loop {
            let Some(action) = self.lookup(&route) else {
                return Err(NavigationError::NoRegistrationForRoute(format!("{route:?}")));
            };

            if config.detect_cycles && chain.contains(&route) {
                return Err(NavigationError::RedirectCycleDetected {
                    route: format!("{route:?}"),
                    chain: chain.iter().map(|r| format!("{r:?}")).collect(),
                });
            }
            if chain.len() > config.max_redirect_depth {
                return Err(NavigationError::RedirectDepthExceeded(
                    config.max_redirect_depth,
                ));
            }
            chain.push(route.clone());

            let kind = action.kind();
            debug!(
                route = ?route,
                %kind,
                hop = chain.len(),
                affinity = kind.requires_ui_affinity(),
                "resolving"
            );

            params = self.will_prepare(&route, params);

            let next = match action {
                Action::Template(template) => {
                    self.schedule_presentation(route, Presentation::Template(template), params);
                    return Ok(());
                }
                Action::Screen(factory) => {
                    self.schedule_presentation(route, Presentation::Screen(factory), params);
                    return Ok(());
                }
                Action::Factory(factory) => {
                    self.schedule_presentation(route, Presentation::Factory(factory), params);
                    return Ok(());
                }
                Action::Redirect(target) => target,
                Action::RedirectWith(redirect) => {
                    redirect(params.as_ref()).map_err(NavigationError::Redirect)?
                }
                Action::SideEffect(effect) => {
                    effect(params);
                    return Ok(());
                }
                Action::Broadcast(notification) => {
                    self.publish(notification);
                    return Ok(());
                }
                Action::ProcessThenRedirect(process) => {
                    self.spawn_process(route, process, params);
                    return Ok(());
                }
            };

            trace!(from = ?route, to = ?next, "redirect");
            route = next;
        }
    }

    fn schedule_presentation(&self, route: R, presentation: Presentation<P, V>, params: Option<P>) {
        let navigator = self.clone();
        self.inner.scheduler.schedule(Box::new(move || {
            navigator.present(route, presentation, params);
        }));
    }

    fn present(&self, route: R, presentation: Presentation<P, V>, params: Option<P>) {
        let unit = match presentation {
            Presentation::Template(template) => self.instantiate(template, params),
            Presentation::Screen(factory) => Ok(factory.build(params)),
            Presentation::Factory(factory) => Ok(factory(params)),
        };

        match unit {
            Ok(unit) => {
                let hook = self.hooks().presentable_ready;
                match hook {
                    Some(hook) => {
                        debug!(route = ?route, "presentable ready");
                        hook(unit);
                    }
                    None => warn!(route = ?route, "no presentable_ready hook set; unit dropped"),
                }
            }
            Err(error) => self.report(&route, error),
        }
    }

    fn instantiate(&self, template: Template, params: Option<P>) -> Result<V, NavigationError> {
        let Some(loader) = &self.inner.templates else {
            return Err(NavigationError::Template {
                group: template.group,
                item: template.item,
                source: "no template loader configured".into(),
            });
        };
        loader
            .instantiate(&template, params.as_ref())
            .map_err(|source| NavigationError::Template {
                group: template.group.clone(),
                item: template.item.clone(),
                source,
            })
    }

    fn publish(&self, notification: Notification) {
        match &self.inner.broadcaster {
            Some(broadcaster) => {
                debug!(name = %notification.name, "broadcasting");
                broadcaster.publish(notification);
            }
            None => warn!(
                name = %notification.name,
                "no broadcaster configured; notification dropped"
            ),
        }
    }

    fn spawn_process(&self, route: R, process: ProcessFn<R, P>, params: Option<P>) {
        let (handle, registration) = AbortHandle::new_pair();
        let work = Abortable::new(process(params), registration);

        let id = self.inner.next_process.fetch_add(1, Ordering::Relaxed);
        self.pending().insert(id, handle);
        let guard = PendingGuard {
            navigator: self.clone(),
            id,
        };
        let navigator = self.clone();
        debug!(route = ?route, process = id, "awaiting asynchronous processor");

        self.inner.executor.spawn(Box::pin(async move {
            let outcome = work.await;
            drop(guard);

            match outcome {
                Ok(Ok((next, next_params))) => {
                    trace!(from = ?route, to = ?next, process = id, "process finished");
                    if let Err(error) = navigator.navigate(next.clone(), next_params) {
                        navigator.report(&next, error);
                    }
                }
                Ok(Err(source)) => navigator.report(&route, NavigationError::Process(source)),
                Err(Aborted) => navigator.report(&route, NavigationError::Cancelled),
            }
        }));
    }

    /// Side channel for failures the caller of `navigate` can no longer see.
    fn report(&self, route: &R, error: NavigationError) {
        if matches!(error, NavigationError::Cancelled) {
            debug!(route = ?route, "asynchronous processing cancelled");
        } else {
            error!(route = ?route, %error, "navigation failed after navigate returned");
        }

        let observer = self.hooks().navigation_failed;
        if let Some(observer) = observer {
            observer(route, &error);
        }
    }

    fn will_prepare(&self, route: &R, params: Option<P>) -> Option<P> {
        let hook = self.hooks().will_prepare;
        match hook {
            Some(hook) => hook(route, params),
            None => params,
        }
    }

    fn lookup(&self, route: &R) -> Option<Action<R, P, V>> {
        self.registry().lookup(route).cloned()
    }

    /// Snapshot of the hooks, so none is called with the lock held.
    fn hooks(&self) -> EventHooks<R, P, V> {
        self.inner
            .hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn hooks_mut(&self) -> RwLockWriteGuard<'_, EventHooks<R, P, V>> {
        self.inner
            .hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn registry(&self) -> RwLockReadGuard<'_, Registry<R, P, V>> {
        self.inner
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, Registry<R, P, V>> {
        self.inner
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<u64, AbortHandle>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Removes a process from the pending table when its future completes, panics
/// or is dropped unpolled by the executor.
struct PendingGuard<R, P, V> {
    navigator: Navigator<R, P, V>,
    id: u64,
}

impl<R, P, V> Drop for PendingGuard<R, P, V> {
    fn drop(&mut self) {
        self.navigator
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

impl<R: Route, P: Parameters, V: Send + 'static> fmt::Debug for Navigator<R, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.registry().len())
            .field("pending_processes", &self.pending_processes())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Navigator`].
pub struct NavigatorBuilder<R, P, V> {
    registry: Registry<R, P, V>,
    hooks: EventHooks<R, P, V>,
    scheduler: Option<Arc<dyn Scheduler>>,
    executor: Option<Arc<dyn Executor>>,
    broadcaster: Option<Arc<dyn Broadcaster>>,
    templates: Option<Arc<dyn TemplateLoader<P, V>>>,
    #[cfg(feature = "deep-link")]
    deep_links: Option<DeepLinks<R>>,
    config: NavigatorConfig,
}

impl<R: Route, P: Parameters, V: Send + 'static> Default for NavigatorBuilder<R, P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Route, P: Parameters, V: Send + 'static> NavigatorBuilder<R, P, V> {
    /// Create a builder with defaults.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            hooks: EventHooks::new(),
            scheduler: None,
            executor: None,
            broadcaster: None,
            templates: None,
            #[cfg(feature = "deep-link")]
            deep_links: None,
            config: NavigatorConfig::default(),
        }
    }

    /// Start from an existing registry.
    pub fn registry(mut self, registry: Registry<R, P, V>) -> Self {
        self.registry = registry;
        self
    }

    /// Register a route.
    pub fn route(mut self, route: R, action: Action<R, P, V>) -> Self {
        self.registry.register(route, action);
        self
    }

    /// Set the hook bundle.
    pub fn hooks(mut self, hooks: EventHooks<R, P, V>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Scheduler for the UI context. Defaults to [`InlineScheduler`].
    pub fn scheduler(mut self, scheduler: impl Scheduler) -> Self {
        self.scheduler = Some(Arc::new(scheduler));
        self
    }

    /// Executor for asynchronous processing. Defaults to [`ThreadExecutor`].
    pub fn executor(mut self, executor: impl Executor) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Broadcaster for `Broadcast` actions. Without one, notifications are
    /// dropped with a warning.
    pub fn broadcaster(mut self, broadcaster: impl Broadcaster) -> Self {
        self.broadcaster = Some(Arc::new(broadcaster));
        self
    }

    /// Loader for `Template` actions.
    pub fn templates(mut self, loader: impl TemplateLoader<P, V>) -> Self {
        self.templates = Some(Arc::new(loader));
        self
    }

    /// Deep-link table used by [`Navigator::handle`].
    #[cfg(feature = "deep-link")]
    pub fn deep_links(mut self, links: DeepLinks<R>) -> Self {
        self.deep_links = Some(links);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set [`NavigatorConfig::max_redirect_depth`].
    pub fn max_redirect_depth(mut self, depth: usize) -> Self {
        self.config.max_redirect_depth = depth;
        self
    }

    /// Build the navigator.
    pub fn build(self) -> Navigator<R, P, V> {
        Navigator {
            inner: Arc::new(Inner {
                registry: RwLock::new(self.registry),
                hooks: RwLock::new(self.hooks),
                scheduler: self
                    .scheduler
                    .unwrap_or_else(|| Arc::new(InlineScheduler)),
                executor: self.executor.unwrap_or_else(|| Arc::new(ThreadExecutor)),
                broadcaster: self.broadcaster,
                templates: self.templates,
                #[cfg(feature = "deep-link")]
                deep_links: self.deep_links,
                pending: Mutex::new(HashMap::new()),
                next_process: AtomicU64::new(0),
                config: self.config,
            }),
        }
    }
}
