use wayfinder::{Action, ActionKind, NavigationError, Navigator, Params, testing::Recorder};

mod common;
use common::{AppRoute, View, harness, home_view};

#[test]
fn template_route_presents_once() {
    let h = harness();

    h.navigator.navigate(AppRoute::Home, None).unwrap();

    assert_eq!(h.presented.take(), vec![home_view()]);
    assert!(h.failures.is_empty());
}

#[test]
fn unregistered_route_fails_without_effects() {
    let h = harness();
    let prepared = Recorder::new();
    let sink = prepared.clone();
    h.navigator.set_will_prepare(move |route: &AppRoute, params| {
        sink.push(route.clone());
        params
    });

    let err = h.navigator.navigate(AppRoute::Missing, None).unwrap_err();

    assert!(matches!(err, NavigationError::NoRegistrationForRoute(ref r) if r == "Missing"));
    assert!(prepared.is_empty(), "hook must not run on a lookup miss");
    assert!(h.presented.is_empty());
    assert!(h.broadcasts.notifications().is_empty());
}

#[test]
fn screen_is_created_then_injected() {
    let h = harness();

    let params = Params::new().with("user", "ada");
    h.navigator.navigate(AppRoute::Profile, Some(params)).unwrap();
    h.navigator.navigate(AppRoute::Profile, None).unwrap();

    assert_eq!(
        h.presented.take(),
        vec![
            View::Profile {
                user: Some("ada".into()),
                injected: true
            },
            View::Profile {
                user: None,
                injected: false
            },
        ]
    );
}

#[test]
fn will_prepare_can_replace_parameters() {
    let h = harness();
    h.navigator.set_will_prepare(|route: &AppRoute, params| match route {
        AppRoute::Settings => Some(Params::new().with("theme", "dark")),
        _ => params,
    });

    let original = Params::new().with("theme", "light");
    h.navigator.navigate(AppRoute::Settings, Some(original)).unwrap();

    assert_eq!(
        h.presented.take(),
        vec![View::Settings {
            theme: Some("dark".into())
        }]
    );
}

#[test]
fn hooks_are_replaced_not_stacked() {
    let h = harness();
    let first = Recorder::new();
    let second = Recorder::new();

    let sink = first.clone();
    h.navigator.set_on_presentable_ready(move |view| sink.push(view));
    let sink = second.clone();
    h.navigator.set_on_presentable_ready(move |view| sink.push(view));

    h.navigator.navigate(AppRoute::Home, None).unwrap();

    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
    // the harness recorder was replaced too
    assert!(h.presented.is_empty());
}

#[test]
fn side_effect_runs_without_presenting() {
    let h = harness();
    let effects = Recorder::new();
    let sink = effects.clone();
    h.navigator.register(
        AppRoute::Missing,
        Action::side_effect(move |params: Option<Params>| {
            sink.push(params.and_then(|p| p.get("id").map(str::to_owned)));
        }),
    );

    h.navigator
        .navigate(AppRoute::Missing, Some(Params::new().with("id", "7")))
        .unwrap();

    assert_eq!(effects.take(), vec![Some("7".to_string())]);
    assert!(h.presented.is_empty());
}

#[test]
fn broadcast_publishes_without_presenting() {
    let h = harness();

    h.navigator.navigate(AppRoute::Logout, None).unwrap();

    let published = h.broadcasts.notifications();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].name, "session.ended");
    assert_eq!(
        published[0]
            .payload
            .as_ref()
            .and_then(|p| p.get("reason"))
            .map(String::as_str),
        Some("logout")
    );
    assert!(h.presented.is_empty());
}

#[test]
fn reregistration_overwrites() {
    let h = harness();
    assert_eq!(h.navigator.kind_of(&AppRoute::Home), Some(ActionKind::Template));

    h.navigator
        .register(AppRoute::Home, Action::redirect(AppRoute::Profile));
    assert_eq!(h.navigator.kind_of(&AppRoute::Home), Some(ActionKind::Redirect));

    h.navigator.navigate(AppRoute::Home, None).unwrap();
    assert!(matches!(
        h.presented.take().as_slice(),
        [View::Profile { .. }]
    ));
}

#[test]
fn template_failure_is_reported_not_returned() {
    let h = harness();

    // Presentation ran (inline) and failed, but the call itself succeeded.
    h.navigator.navigate(AppRoute::Broken, None).unwrap();

    assert!(h.presented.is_empty());
    let failures = h.failures.take();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, AppRoute::Broken);
    assert!(failures[0].1.contains("Missing/Nope"));
}

#[test]
fn template_without_loader_is_reported() {
    let failures = Recorder::new();
    let navigator: Navigator<AppRoute, Params, View> = Navigator::builder()
        .route(AppRoute::Home, Action::template("Main", "HomeVC"))
        .build();
    let sink = failures.clone();
    navigator.set_on_navigation_failed(move |_route: &AppRoute, error| {
        sink.push(matches!(error, NavigationError::Template { .. }));
    });

    navigator.navigate(AppRoute::Home, None).unwrap();

    assert_eq!(failures.take(), vec![true]);
}
