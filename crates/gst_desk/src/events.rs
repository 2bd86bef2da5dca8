//! # Pointer Event Bus
//!
//! Carries pointer events from the host into the page.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │    Host     │─────>│  bounded    │─────>│    Page     │
//! │ (listeners) │      │  channel    │      │ (per frame) │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! The page drains the channel once per frame, so only the latest pointer
//! position matters. A full channel never blocks the host: queued runs of
//! `Move` events are folded into their last position to make room, and only
//! if that frees nothing is the oldest event dropped. The newest event is
//! always kept.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use gst_shared::PointerEvent;
use tracing::{debug, warn};

/// Default number of events in flight.
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded channel of pointer events.
pub struct PointerBus {
    sender: Sender<PointerEvent>,
    receiver: Receiver<PointerEvent>,
}

impl PointerBus {
    /// Creates a bus holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> PointerSender {
        PointerSender {
            sender: self.sender.clone(),
            overflow: self.receiver.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> PointerReceiver {
        PointerReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender and receiver.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (PointerSender, PointerReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

impl Default for PointerBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Handle for sending pointer events.
///
/// Holds a receiver handle of its own to make room when the channel is full,
/// so the channel stays open while any sender is alive.
#[derive(Clone)]
pub struct PointerSender {
    sender: Sender<PointerEvent>,
    overflow: Receiver<PointerEvent>,
}

impl PointerSender {
    /// Sends an event without blocking.
    ///
    /// When the channel is full, queued moves are folded and, failing that,
    /// the oldest event is dropped. Returns `false` only if `event` itself
    /// could not be queued.
    #[inline]
    pub fn send(&self, event: PointerEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => self.send_with_room(event),
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    fn send_with_room(&self, event: PointerEvent) -> bool {
        let pending: Vec<PointerEvent> = self.overflow.try_iter().collect();
        let before = pending.len();
        let mut queue = fold_moves(pending);
        debug!(before, after = queue.len(), "pointer bus full, folding moves");

        // Leave one slot for the new event.
        let capacity = self.sender.capacity().unwrap_or(usize::MAX);
        let excess = (queue.len() + 1).saturating_sub(capacity).min(queue.len());
        for dropped in queue.drain(..excess) {
            warn!(kind = ?dropped.kind(), "pointer bus full, dropping oldest event");
        }

        for queued in queue {
            if self.sender.try_send(queued).is_err() {
                warn!(kind = ?queued.kind(), "pointer bus contended, dropping event");
            }
        }
        self.sender.try_send(event).is_ok()
    }
}

/// Collapses each run of consecutive moves into its last position.
fn fold_moves(events: Vec<PointerEvent>) -> Vec<PointerEvent> {
    let mut folded: Vec<PointerEvent> = Vec::with_capacity(events.len());
    for event in events {
        match folded.last_mut() {
            Some(last)
                if matches!(last, PointerEvent::Move { .. })
                    && matches!(event, PointerEvent::Move { .. }) =>
            {
                *last = event;
            }
            _ => folded.push(event),
        }
    }
    folded
}

/// Handle for receiving pointer events.
#[derive(Clone)]
pub struct PointerReceiver {
    receiver: Receiver<PointerEvent>,
}

impl PointerReceiver {
    /// Takes every pending event, oldest first.
    #[inline]
    pub fn drain(&self) -> Vec<PointerEvent> {
        self.receiver.try_iter().collect()
    }

    /// Takes one event, if any.
    #[inline]
    pub fn try_recv(&self) -> Option<PointerEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_receive() {
        let (sender, receiver) = PointerBus::create_pair(8);
        assert!(sender.send(PointerEvent::moved(1.0, 2.0)));
        assert!(receiver.has_events());
        assert_eq!(receiver.try_recv(), Some(PointerEvent::moved(1.0, 2.0)));
        assert_eq!(receiver.try_recv(), None);
    }

    #[test]
    fn test_drain_keeps_order() {
        let (sender, receiver) = PointerBus::create_pair(16);
        for i in 0..10 {
            let _ = sender.send(PointerEvent::moved(f64::from(i), 0.0));
        }
        assert_eq!(receiver.pending_count(), 10);

        let events = receiver.drain();
        assert_eq!(events.len(), 10);
        assert_eq!(events[9], PointerEvent::moved(9.0, 0.0));
        assert!(!receiver.has_events());
    }

    #[test]
    fn test_full_bus_folds_moves_and_keeps_newest() {
        let (sender, receiver) = PointerBus::create_pair(4);
        assert!(sender.send(PointerEvent::moved(1.0, 0.0)));
        assert!(sender.send(PointerEvent::moved(2.0, 0.0)));
        assert!(sender.send(PointerEvent::moved(3.0, 0.0)));
        assert!(sender.send(PointerEvent::Leave));
        assert!(sender.send(PointerEvent::Enter));
        assert_eq!(
            receiver.drain(),
            vec![PointerEvent::moved(3.0, 0.0), PointerEvent::Leave, PointerEvent::Enter]
        );
    }

    #[test]
    fn test_full_bus_without_moves_drops_oldest() {
        let (sender, receiver) = PointerBus::create_pair(2);
        assert!(sender.send(PointerEvent::Enter));
        assert!(sender.send(PointerEvent::Leave));
        assert!(sender.send(PointerEvent::Enter));
        assert_eq!(receiver.drain(), vec![PointerEvent::Leave, PointerEvent::Enter]);
    }

    #[test]
    fn test_overfilled_bus_ends_with_latest_events() {
        let (sender, receiver) = PointerBus::create_pair(DEFAULT_CAPACITY);
        for i in 0..1000 {
            assert!(sender.send(PointerEvent::moved(f64::from(i), 0.0)));
        }
        assert!(sender.send(PointerEvent::Leave));

        let events = receiver.drain();
        assert!(events.len() <= DEFAULT_CAPACITY);
        assert_eq!(events.last(), Some(&PointerEvent::Leave));
        assert_eq!(events[events.len() - 2], PointerEvent::moved(999.0, 0.0));
    }

    #[test]
    fn test_fold_keeps_non_move_boundaries() {
        let folded = fold_moves(vec![
            PointerEvent::moved(1.0, 1.0),
            PointerEvent::moved(2.0, 2.0),
            PointerEvent::Leave,
            PointerEvent::moved(3.0, 3.0),
        ]);
        assert_eq!(
            folded,
            vec![PointerEvent::moved(2.0, 2.0), PointerEvent::Leave, PointerEvent::moved(3.0, 3.0)]
        );
    }
}
