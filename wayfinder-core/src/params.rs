//! Navigation parameters.

use std::collections::HashMap;
use url::Url;

/// The payload carried alongside a navigation request.
///
/// Parameters travel by value through one navigation chain. The engine may
/// swap the whole value (see the `will_prepare` hook) but never reaches
/// into it.
pub trait Parameters: Default + Send + Sync + 'static {
    /// Build parameters from an external URI, e.g. an incoming deep link.
    fn from_uri(uri: &Url) -> Self;

    /// Open-ended string side map, if the type carries one.
    fn user_info(&self) -> Option<&HashMap<String, String>> {
        None
    }

    /// Attach a named value.
    ///
    /// Deep-link handling uses this to hand matched path captures to the
    /// destination. Types without a side map ignore it.
    fn with_value(self, _key: &str, _value: &str) -> Self {
        self
    }
}

impl Parameters for () {
    fn from_uri(_uri: &Url) -> Self {}
}
