//! Event Broadcasting
//!
//! Fans moderation events out to every subscribed collaborator.

use super::events::ModerationEvent;
use tokio::sync::broadcast;
use tracing::{trace, warn};

/// Event broadcaster for moderation events
///
/// Uses a tokio broadcast channel, so emitting never blocks and needs no
/// runtime. Subscribers that fall more than `capacity` events behind see
/// `RecvError::Lagged` on their next receive.
#[derive(Clone)]
pub struct EventBroadcaster {
    tx: broadcast::Sender<ModerationEvent>,
}

impl EventBroadcaster {
    /// Create a new event broadcaster
    ///
    /// # Arguments
    /// * `capacity` - Channel capacity (number of events buffered); 0 is raised to 1
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            warn!("Moderation event capacity of 0 raised to 1");
        }
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Emit an event to all subscribers
    ///
    /// # Returns
    /// Number of active subscribers that received the event
    pub fn emit(&self, event: ModerationEvent) -> usize {
        let event_type = event.event_type();
        match self.tx.send(event) {
            Ok(count) => count,
            Err(_) => {
                trace!(event_type, "No moderation subscribers");
                0
            }
        }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<ModerationEvent> {
        self.tx.subscribe()
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_EVENT_CAPACITY)
    }
}
