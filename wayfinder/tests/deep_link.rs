#![cfg(feature = "deep-link")]

use wayfinder::{Action, DeepLinks, NavigationError, Navigator, Params, Url, testing::Recorder};

mod common;
use common::{AppRoute, ProfileScreen, View};

fn navigator() -> (Navigator<AppRoute, Params, View>, Recorder<View>) {
    let links = DeepLinks::new()
        .with("/users/{id}", AppRoute::Profile)
        .and_then(|links| links.with("/settings", AppRoute::Settings))
        .unwrap();

    let navigator = Navigator::builder()
        .route(AppRoute::Profile, Action::screen::<ProfileScreen>())
        .route(
            AppRoute::Settings,
            Action::factory(|params: Option<Params>| View::Settings {
                theme: params.and_then(|p| p.get("theme").map(str::to_owned)),
            }),
        )
        .deep_links(links)
        .build();

    let presented = Recorder::new();
    let sink = presented.clone();
    navigator.set_on_presentable_ready(move |view| sink.push(view));
    (navigator, presented)
}

#[test]
fn link_captures_become_parameters() {
    let (navigator, presented) = navigator();
    let prepared = Recorder::new();
    let sink = prepared.clone();
    navigator.set_will_prepare(move |_route: &AppRoute, params: Option<Params>| {
        sink.push(params.clone());
        params
    });

    let link = Url::parse("myapp://users/ada?tab=posts").unwrap();
    navigator.handle(&link).unwrap();

    let params = prepared.take().pop().flatten().unwrap();
    assert_eq!(params.get("id"), Some("ada"));
    assert_eq!(params.get("tab"), Some("posts"));
    assert_eq!(params.uri(), Some(&link));
    assert!(matches!(presented.take().as_slice(), [View::Profile { injected: true, .. }]));
}

#[test]
fn encoded_captures_arrive_decoded_like_query_values() {
    let (navigator, _) = navigator();
    let prepared = Recorder::new();
    let sink = prepared.clone();
    navigator.set_will_prepare(move |_route: &AppRoute, params: Option<Params>| {
        sink.push(params.clone());
        params
    });

    let link = Url::parse("myapp://users/Ada%20Lovelace?q=Ada%20Lovelace").unwrap();
    navigator.handle(&link).unwrap();

    let params = prepared.take().pop().flatten().unwrap();
    assert_eq!(params.get("id"), Some("Ada Lovelace"));
    assert_eq!(params.get("id"), params.get("q"));
}

#[test]
fn query_parameters_reach_the_destination() {
    let (navigator, presented) = navigator();

    let link = Url::parse("https://example.com/settings?theme=dark").unwrap();
    navigator.handle(&link).unwrap();

    assert_eq!(
        presented.take(),
        vec![View::Settings {
            theme: Some("dark".into())
        }]
    );
}

#[test]
fn unknown_link_is_rejected() {
    let (navigator, presented) = navigator();

    let link = Url::parse("myapp://nowhere").unwrap();
    let err = navigator.handle(&link).unwrap_err();

    assert!(matches!(err, NavigationError::NoDeepLinkMatch(ref l) if l == "myapp://nowhere"));
    assert!(presented.is_empty());
}

#[test]
fn no_table_means_no_match() {
    let navigator: Navigator<AppRoute, Params, View> = Navigator::new();
    let link = Url::parse("myapp://users/1").unwrap();
    assert!(matches!(
        navigator.handle(&link),
        Err(NavigationError::NoDeepLinkMatch(_))
    ));
}
