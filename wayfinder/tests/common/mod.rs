#![allow(dead_code)]

use wayfinder::{
    Action, BoxError, InlineScheduler, Navigator, Notification, Params, Screen, Template,
    testing::{QueueExecutor, Recorder, RecordingBroadcaster},
};

// ============================================================================
// Test Routes and Views
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Fetch,
    Profile,
    Settings,
    Logout,
    Start,
    Broken,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Template { group: String, item: String },
    Profile { user: Option<String>, injected: bool },
    Settings { theme: Option<String> },
}

pub struct ProfileScreen {
    user: Option<String>,
    injected: bool,
}

impl Screen<Params> for ProfileScreen {
    fn create(params: Option<&Params>) -> Self {
        Self {
            user: params.and_then(|p| p.get("user")).map(str::to_owned),
            injected: false,
        }
    }

    fn accept_parameters(&mut self, params: Option<Params>) {
        self.injected = params.is_some();
    }
}

impl From<ProfileScreen> for View {
    fn from(screen: ProfileScreen) -> Self {
        View::Profile {
            user: screen.user,
            injected: screen.injected,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("not authorized")]
pub struct NotAuthorized;

pub fn load_template(template: &Template, _params: Option<&Params>) -> Result<View, BoxError> {
    if template.group == "Missing" {
        return Err("no such template group".into());
    }
    Ok(View::Template {
        group: template.group.clone(),
        item: template.item.clone(),
    })
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub navigator: Navigator<AppRoute, Params, View>,
    pub presented: Recorder<View>,
    pub failures: Recorder<(AppRoute, String)>,
    pub broadcasts: RecordingBroadcaster,
    pub executor: QueueExecutor,
}

/// A navigator wired to inline presentation, a hand-driven executor and
/// recording collaborators, with the usual routes registered.
pub fn harness() -> Harness {
    let presented = Recorder::new();
    let failures = Recorder::new();
    let broadcasts = RecordingBroadcaster::new();
    let executor = QueueExecutor::new();

    let navigator = Navigator::builder()
        .route(AppRoute::Home, Action::template("Main", "HomeVC"))
        .route(AppRoute::Profile, Action::screen::<ProfileScreen>())
        .route(
            AppRoute::Settings,
            Action::factory(|params: Option<Params>| View::Settings {
                theme: params.and_then(|p| p.get("theme").map(str::to_owned)),
            }),
        )
        .route(AppRoute::Start, Action::redirect(AppRoute::Home))
        .route(
            AppRoute::Login,
            Action::redirect_with(|params: Option<&Params>| {
                match params.and_then(|p| p.get("token")) {
                    Some(_) => Ok(AppRoute::Home),
                    None => Err(Box::new(NotAuthorized) as BoxError),
                }
            }),
        )
        .route(
            AppRoute::Logout,
            Action::broadcast(
                Notification::new("session.ended").with_payload([("reason", "logout")]),
            ),
        )
        .route(AppRoute::Broken, Action::template("Missing", "Nope"))
        .scheduler(InlineScheduler)
        .executor(executor.clone())
        .broadcaster(broadcasts.clone())
        .templates(load_template)
        .build();

    let sink = presented.clone();
    navigator.set_on_presentable_ready(move |view| sink.push(view));
    let sink = failures.clone();
    navigator.set_on_navigation_failed(move |route: &AppRoute, error| {
        sink.push((route.clone(), error.to_string()));
    });

    Harness {
        navigator,
        presented,
        failures,
        broadcasts,
        executor,
    }
}

pub fn home_view() -> View {
    View::Template {
        group: "Main".into(),
        item: "HomeVC".into(),
    }
}
