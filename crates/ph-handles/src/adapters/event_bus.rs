//! # Handle Event Bus
//!
//! In-memory `HandleEventPublisher` built on `tokio::sync::broadcast`.
//!
//! Publishing never blocks and never fails: with no subscribers the event is
//! dropped and counted.

use crate::events::HandleEvent;
use crate::ports::outbound::HandleEventPublisher;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Default number of events buffered per subscriber.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// In-memory event bus for handle events.
pub struct InMemoryHandleEventBus {
    sender: broadcast::Sender<HandleEvent>,
    events_published: AtomicU64,
    capacity: usize,
}

impl InMemoryHandleEventBus {
    /// Create a bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a bus buffering up to `capacity` events per subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to all subsequent events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HandleEvent> {
        debug!("New handle event subscription");
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events published, delivered or not.
    #[must_use]
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }

    /// Channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryHandleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleEventPublisher for InMemoryHandleEventBus {
    fn publish(&self, event: HandleEvent) -> usize {
        let topic = event.topic();
        self.events_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(?topic, receivers, "Event published");
                receivers
            }
            Err(_) => {
                trace!(?topic, "Event dropped (no receivers)");
                0
            }
        }
    }
}
