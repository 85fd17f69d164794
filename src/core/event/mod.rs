use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};
use crate::core::document::Document;

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(1); // global counter for event sequence numbers

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventOp {
    Enqueue,
    Dequeue,
}

impl Display for EventOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventOp::Enqueue => write!(f, "enqueue"),
            EventOp::Dequeue => write!(f, "dequeue"),
        }
    }
}

/// A successful mutation of a print queue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEvent {
    pub sequence: u64,
    pub op: EventOp,
    pub document: Document,
    pub queue_len: usize, // length after the operation
}

impl QueueEvent {

    fn next_sequence() -> u64 {
        EVENT_COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    pub fn new_enqueue(document: Document, queue_len: usize) -> Self {
        Self {
            sequence: Self::next_sequence(),
            op: EventOp::Enqueue,
            document,
            queue_len,
        }
    }

    pub fn new_dequeue(document: Document, queue_len: usize) -> Self {
        Self {
            sequence: Self::next_sequence(),
            op: EventOp::Dequeue,
            document,
            queue_len,
        }
    }
}

/// Hook notified after every successful enqueue or dequeue
pub trait QueueObserver {
    fn on_event(&mut self, event: &QueueEvent);
}

impl<F> QueueObserver for F
where
    F: FnMut(&QueueEvent),
{
    fn on_event(&mut self, event: &QueueEvent) {
        self(event)
    }
}
