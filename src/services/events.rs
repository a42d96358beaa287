//! Session expiry notifications

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::models::session::{Scope, SessionExpired};

const DEFAULT_CAPACITY: usize = 16;

/// Fan-out channel announcing that a scope's session was rejected by the
/// backend. Each rejected request produces exactly one event.
#[derive(Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionExpired>,
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SessionEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionExpired> {
        self.sender.subscribe()
    }

    /// Subscribe as a `Stream`; lagging subscribers see an error item
    pub fn stream(&self) -> BroadcastStream<SessionExpired> {
        BroadcastStream::new(self.sender.subscribe())
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Announce expiry; returns how many subscribers were notified
    pub fn emit_expired(&self, scope: Scope) -> usize {
        match self.sender.send(SessionExpired { scope }) {
            Ok(count) => count,
            Err(_) => {
                tracing::debug!("No listener for {} session expiry", scope);
                0
            }
        }
    }
}
