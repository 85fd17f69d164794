pub use crate::core::{
    document::Document,
    error::{QueueError, Result},
    event::{EventOp, QueueEvent, QueueObserver},
    log::{EventLog, LogEntry, SafeEventLog},
    queue::Queue,
};
use std::fmt;
use tracing::{debug, info};

/// FIFO print queue: storage + observers + narration
///
/// Mutations are reported through `tracing` and to every attached
/// [`QueueObserver`]. Failed operations report nothing and change nothing.
#[derive(Default)]
pub struct PrintQueue {
    queue: Queue<Document>,
    observers: Vec<Box<dyn QueueObserver>>,
}

impl PrintQueue {
    /// Create an empty print queue with no observers
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
            observers: Vec::new(),
        }
    }

    /// Builder-style variant of [`PrintQueue::subscribe`]
    pub fn with_observer(mut self, observer: impl QueueObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    /// Attach an observer; it only sees operations performed after this call
    pub fn subscribe(&mut self, observer: impl QueueObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    /// Add a document at the tail
    pub fn enqueue(&mut self, document: Document) {
        self.queue.enqueue(document.clone());
        let queue_len = self.queue.len();

        info!(
            file_name = %document.file_name(),
            page_count = document.page_count(),
            queue_len,
            "{} added to the queue",
            document.file_name()
        );
        self.notify(QueueEvent::new_enqueue(document, queue_len));
    }

    /// Remove and return the document at the head
    pub fn dequeue(&mut self) -> Result<Document> {
        let Some(document) = self.queue.dequeue() else {
            debug!("dequeue rejected: print queue is empty");
            return Err(QueueError::Empty);
        };
        let queue_len = self.queue.len();

        info!(
            file_name = %document.file_name(),
            page_count = document.page_count(),
            queue_len,
            "printing {}",
            document
        );
        self.notify(QueueEvent::new_dequeue(document.clone(), queue_len));
        Ok(document)
    }

    /// The document that the next dequeue would return
    pub fn peek(&self) -> Result<&Document> {
        self.queue.peek().ok_or_else(|| {
            debug!("peek rejected: print queue is empty");
            QueueError::Empty
        })
    }

    /// Documents from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.queue.iter()
    }

    /// Numbered listing of the queue, head first, followed by a total line
    pub fn display(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["The print queue is empty.".to_string()];
        }

        let mut lines: Vec<String> = self
            .iter()
            .enumerate()
            .map(|(i, doc)| format!("{}. {}", i + 1, doc))
            .collect();
        lines.push(format!("Total documents in queue: {}", self.size()));
        lines
    }

    fn notify(&mut self, event: QueueEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}

impl fmt::Debug for PrintQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintQueue")
            .field("queue", &self.queue)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Extend<Document> for PrintQueue {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        for document in iter {
            self.enqueue(document);
        }
    }
}

impl FromIterator<Document> for PrintQueue {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut queue = PrintQueue::new();
        queue.extend(iter);
        queue
    }
}
