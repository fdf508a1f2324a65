use wayfinder::{Action, NavigationError, Navigator, NavigatorConfig, Params, testing::Recorder};

mod common;
use common::{AppRoute, NotAuthorized, View, harness, home_view};

#[test]
fn redirect_matches_target_with_hook_per_hop() {
    let direct = harness();
    direct.navigator.navigate(AppRoute::Home, None).unwrap();

    let redirected = harness();
    let hops = Recorder::new();
    let sink = hops.clone();
    redirected
        .navigator
        .set_will_prepare(move |route: &AppRoute, params| {
            sink.push(route.clone());
            params
        });
    redirected.navigator.navigate(AppRoute::Start, None).unwrap();

    assert_eq!(redirected.presented.take(), direct.presented.take());
    assert_eq!(hops.take(), vec![AppRoute::Start, AppRoute::Home]);
}

#[test]
fn redirect_keeps_parameters() {
    let h = harness();
    h.navigator
        .register(AppRoute::Start, Action::redirect(AppRoute::Settings));

    h.navigator
        .navigate(AppRoute::Start, Some(Params::new().with("theme", "solar")))
        .unwrap();

    assert_eq!(
        h.presented.take(),
        vec![View::Settings {
            theme: Some("solar".into())
        }]
    );
}

#[test]
fn login_without_token_is_not_authorized() {
    let h = harness();

    let err = h
        .navigator
        .navigate(AppRoute::Login, Some(Params::new()))
        .unwrap_err();

    match err {
        NavigationError::Redirect(source) => {
            assert!(source.downcast_ref::<NotAuthorized>().is_some());
        }
        other => panic!("expected NotAuthorized, got {other}"),
    }
    assert!(h.presented.is_empty());
    assert!(h.failures.is_empty(), "synchronous errors go to the caller");
}

#[test]
fn login_with_token_goes_home() {
    let h = harness();

    h.navigator
        .navigate(AppRoute::Login, Some(Params::new().with("token", "abc")))
        .unwrap();

    assert_eq!(h.presented.take(), vec![home_view()]);
}

#[test]
fn self_redirect_is_detected() {
    let h = harness();
    h.navigator
        .register(AppRoute::Start, Action::redirect(AppRoute::Start));

    let err = h.navigator.navigate(AppRoute::Start, None).unwrap_err();

    assert!(matches!(
        err,
        NavigationError::RedirectCycleDetected { ref route, .. } if route == "Start"
    ));
    assert!(h.presented.is_empty());

    // the engine is still usable
    h.navigator.navigate(AppRoute::Home, None).unwrap();
    assert_eq!(h.presented.len(), 1);
}

#[test]
fn cycle_through_redirect_function_is_detected() {
    let h = harness();
    h.navigator.register(
        AppRoute::Start,
        Action::redirect_with(|_: Option<&Params>| Ok(AppRoute::Fetch)),
    );
    h.navigator
        .register(AppRoute::Fetch, Action::redirect(AppRoute::Start));

    let err = h.navigator.navigate(AppRoute::Start, None).unwrap_err();
    match err {
        NavigationError::RedirectCycleDetected { route, chain } => {
            assert_eq!(route, "Start");
            assert_eq!(chain, vec!["Start".to_string(), "Fetch".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn redirect_to_unregistered_route_fails() {
    let h = harness();
    h.navigator
        .register(AppRoute::Start, Action::redirect(AppRoute::Missing));

    let err = h.navigator.navigate(AppRoute::Start, None).unwrap_err();
    assert!(matches!(err, NavigationError::NoRegistrationForRoute(ref r) if r == "Missing"));
}

#[test]
fn long_chain_hits_depth_limit() {
    let navigator: Navigator<AppRoute, Params, View> = Navigator::builder()
        .route(AppRoute::Start, Action::redirect(AppRoute::Login))
        .route(AppRoute::Login, Action::redirect(AppRoute::Fetch))
        .route(AppRoute::Fetch, Action::redirect(AppRoute::Settings))
        .route(
            AppRoute::Settings,
            Action::factory(|_| View::Settings { theme: None }),
        )
        .config(NavigatorConfig::new().with_max_redirect_depth(2))
        .build();

    let err = navigator.navigate(AppRoute::Start, None).unwrap_err();
    assert!(matches!(err, NavigationError::RedirectDepthExceeded(2)));

    // two redirects are within the limit
    navigator.navigate(AppRoute::Login, None).unwrap();
}
