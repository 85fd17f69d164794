use std::collections::VecDeque;

/// core queue structure: handles only enqueue/dequeue logic
#[derive(Debug, Clone)]
pub struct Queue<T>{
    items: VecDeque<T>,
}

impl <T> Queue <T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self{ items:VecDeque::new() }
    }

    /// Enqueue an item at the tail
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.items.len();
        self.items.push_back(item);
        // -- post op assertion
        assert_eq!(self.items.len(), len_before + 1, "Queue length should grow by 1");
    }

    /// Dequeue the item at the head
    pub fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => assert_eq!(self.items.len(), len_before, "Queue length unchanged when empty"),
        }
        result
    }

    /// Look at the head without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
