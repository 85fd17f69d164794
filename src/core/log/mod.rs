use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::document::Document;
use crate::core::event::{EventOp, QueueEvent, QueueObserver};
use serde::{Serialize, Deserialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Log entry recording a queue operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub local_log_id: u64,
    pub op: EventOp,
    pub document: Document,
    pub queue_len: usize,          // Length after the operation
    pub event_sequence: u64,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, op: {}, document: {}, queue_len: {}, event_sequence: {} }}",
            self.local_log_id,
            self.op,
            self.document,
            self.queue_len,
            self.event_sequence,
        )
    }
}

/// Journal of every successful queue operation
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record an event
    pub fn record(&mut self, event: &QueueEvent) {
        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            op: event.op,
            document: event.document.clone(),
            queue_len: event.queue_len,
            event_sequence: event.sequence,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "EventLog must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries_for(&self, op: EventOp) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.op == op)
    }

    /// Documents in the order they left the queue
    pub fn printed(&self) -> Vec<Document> {
        self.entries_for(EventOp::Dequeue)
            .map(|e| e.document.clone())
            .collect()
    }
}

impl QueueObserver for EventLog {
    fn on_event(&mut self, event: &QueueEvent) {
        self.record(event);
    }
}

/// Shareable handle: keep one clone, hand another to the queue
#[derive(Clone, Debug, Default)]
pub struct SafeEventLog(Arc<Mutex<EventLog>>);

impl SafeEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the journal; a poisoned lock still yields the entries recorded so far
    pub fn lock(&self) -> MutexGuard<'_, EventLog> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl QueueObserver for SafeEventLog {
    fn on_event(&mut self, event: &QueueEvent) {
        self.lock().record(event);
    }
}
