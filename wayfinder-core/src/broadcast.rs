//! Broadcast collaborator contract.

use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// A named event published by a `Broadcast` action.
#[derive(Clone)]
pub struct Notification {
    /// Event name.
    pub name: String,
    /// Opaque object the event is about.
    pub subject: Option<Arc<dyn Any + Send + Sync>>,
    /// String payload.
    pub payload: Option<HashMap<String, String>>,
}

impl Notification {
    /// A notification with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: None,
            payload: None,
        }
    }

    /// Attach a subject.
    pub fn with_subject<T: Any + Send + Sync>(mut self, subject: T) -> Self {
        self.subject = Some(Arc::new(subject));
        self
    }

    /// Attach a payload.
    pub fn with_payload<I, K, V>(mut self, payload: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.payload = Some(
            payload
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Borrow the subject as `T`, if it is one.
    pub fn subject<T: Any>(&self) -> Option<&T> {
        self.subject.as_deref()?.downcast_ref()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .field("has_subject", &self.subject.is_some())
            .field("payload", &self.payload)
            .finish()
    }
}

/// Publishes notifications. Fire-and-forget: no acknowledgment, no result.
pub trait Broadcaster: Send + Sync + 'static {
    /// Publish one notification.
    fn publish(&self, notification: Notification);
}

impl<F> Broadcaster for F
where
    F: Fn(Notification) + Send + Sync + 'static,
{
    fn publish(&self, notification: Notification) {
        self(notification)
    }
}
