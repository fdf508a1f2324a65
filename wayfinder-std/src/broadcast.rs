//! Channel-backed broadcaster.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;
use wayfinder_core::{Broadcaster, Notification};

/// Fans notifications out to any number of subscribers.
///
/// Each subscriber gets an unbounded `futures` channel. Subscribers that
/// dropped their receiver are pruned on the next publish.
#[derive(Debug, Clone, Default)]
pub struct ChannelBroadcaster {
    subscribers: Arc<Mutex<Vec<UnboundedSender<Notification>>>>,
}

impl ChannelBroadcaster {
    /// A broadcaster with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every notification published from now on.
    pub fn subscribe(&self) -> UnboundedReceiver<Notification> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|tx| !tx.is_closed())
            .count()
    }
}

impl Broadcaster for ChannelBroadcaster {
    fn publish(&self, notification: Notification) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.unbounded_send(notification.clone()).is_ok());
        trace!(name = %notification.name, subscribers = subscribers.len(), "published");
    }
}
