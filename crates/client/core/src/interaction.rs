//! Interaction event bus.
//!
//! An owned, injected pub/sub object rather than a module-level singleton,
//! so tests can run isolated buses side by side. Its one job in
//! the client: any tap anywhere cancels the pending "desire accent" cues so
//! a stale accent never fires over a screen the user already left.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// User touched the screen somewhere.
    Tap,
    /// Accent cue lifecycle.
    Accent,
}

/// Events carried on the bus.
#[derive(Debug, Clone)]
pub enum InteractionEvent {
    /// A tap on any surface; the payload names the surface for telemetry.
    Tap { surface: &'static str },
    /// An accent cue was scheduled.
    AccentScheduled { id: u64 },
    /// Pending accent cues were cancelled.
    AccentsCancelled { count: usize },
}

impl InteractionEvent {
    pub fn topic(&self) -> Topic {
        match self {
            InteractionEvent::Tap { .. } => Topic::Tap,
            InteractionEvent::AccentScheduled { .. }
            | InteractionEvent::AccentsCancelled { .. } => Topic::Accent,
        }
    }
}

/// Topic-based interaction bus.
///
/// Publish is best-effort: with no subscribers the event is dropped, which
/// is the normal idle state.
#[derive(Clone)]
pub struct InteractionBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<InteractionEvent>>>,
}

impl InteractionBus {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();
        channels.insert(Topic::Tap, broadcast::channel(capacity).0);
        channels.insert(Topic::Accent, broadcast::channel(capacity).0);
        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its topic.
    pub fn publish(&self, event: InteractionEvent) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!(?topic, "no subscribers");
        }
    }

    /// Subscribe to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<InteractionEvent> {
        self.channels
            .get(&topic)
            .expect("topic channel not initialized")
            .subscribe()
    }
}

impl Default for InteractionBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks pending desire-accent cues and cancels them on any tap.
#[derive(Clone)]
pub struct AccentScheduler {
    bus: InteractionBus,
    pending: Arc<Mutex<BTreeSet<u64>>>,
    next_id: Arc<AtomicU64>,
}

impl AccentScheduler {
    pub fn new(bus: InteractionBus) -> Self {
        Self {
            bus,
            pending: Arc::new(Mutex::new(BTreeSet::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a pending accent cue and announce it.
    pub fn schedule(&self) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.pending.lock().unwrap().insert(id);
        self.bus.publish(InteractionEvent::AccentScheduled { id });
        id
    }

    /// Mark a single cue as fired.
    pub fn complete(&self, id: u64) {
        self.pending.lock().unwrap().remove(&id);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Drop every pending cue and announce how many were cancelled.
    pub fn cancel_pending(&self) -> usize {
        let count = {
            let mut pending = self.pending.lock().unwrap();
            let count = pending.len();
            pending.clear();
            count
        };
        if count > 0 {
            self.bus
                .publish(InteractionEvent::AccentsCancelled { count });
        }
        count
    }

    /// Consume tap events until the bus closes, cancelling pending cues on
    /// each one. Spawn this once per session.
    pub async fn run(self) {
        let mut taps = self.bus.subscribe(Topic::Tap);
        loop {
            match taps.recv().await {
                Ok(InteractionEvent::Tap { surface }) => {
                    let cancelled = self.cancel_pending();
                    if cancelled > 0 {
                        tracing::debug!(surface, cancelled, "tap cancelled pending accents");
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Missed taps still mean the user touched the screen.
                    tracing::debug!(skipped, "tap stream lagged; cancelling anyway");
                    self.cancel_pending();
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn tap_cancels_pending_accents() {
        let bus = InteractionBus::new();
        let scheduler = AccentScheduler::new(bus.clone());
        tokio::spawn(scheduler.clone().run());

        scheduler.schedule();
        scheduler.schedule();
        assert_eq!(scheduler.pending_count(), 2);

        bus.publish(InteractionEvent::Tap { surface: "home" });

        // The run loop drains asynchronously; poll briefly.
        for _ in 0..100 {
            if scheduler.pending_count() == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test]
    async fn accent_subscribers_see_the_lifecycle() {
        let bus = InteractionBus::new();
        let scheduler = AccentScheduler::new(bus.clone());
        let mut accents = bus.subscribe(Topic::Accent);

        let id = scheduler.schedule();
        match accents.recv().await.unwrap() {
            InteractionEvent::AccentScheduled { id: seen } => assert_eq!(seen, id),
            other => panic!("unexpected event: {other:?}"),
        }

        scheduler.cancel_pending();
        match accents.recv().await.unwrap() {
            InteractionEvent::AccentsCancelled { count } => assert_eq!(count, 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn completing_a_cue_removes_just_that_cue() {
        let scheduler = AccentScheduler::new(InteractionBus::new());
        let first = scheduler.schedule();
        let _second = scheduler.schedule();

        scheduler.complete(first);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus = InteractionBus::new();
        bus.publish(InteractionEvent::Tap { surface: "roster" });
    }
}
