use PrintQueueMini::core::buildcore::{
    Document, EventOp, PrintQueue, QueueError, QueueEvent, SafeEventLog,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

fn doc(name: &str, pages: u32) -> Document {
    Document::new(name, pages)
}

#[test]
fn test_print_simulation_scenario() {
    let mut queue = PrintQueue::new();
    queue.enqueue(doc("A", 50));
    queue.enqueue(doc("B", 25));
    queue.enqueue(doc("C", 5));
    queue.enqueue(doc("D", 1));
    assert_eq!(queue.size(), 4);

    assert_eq!(queue.dequeue(), Ok(doc("A", 50)));
    assert_eq!(queue.dequeue(), Ok(doc("B", 25)));
    assert_eq!(queue.size(), 2);

    assert_eq!(queue.peek(), Ok(&doc("C", 5)));

    queue.enqueue(doc("E", 150));
    assert_eq!(queue.size(), 3);

    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.dequeue().unwrap());
    }
    assert_eq!(drained, vec![doc("C", 5), doc("D", 1), doc("E", 150)]);
    assert!(queue.is_empty());
}

#[test]
fn test_dequeue_on_fresh_queue_fails() {
    let mut queue = PrintQueue::new();
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    assert_eq!(queue.size(), 0);
    assert!(queue.is_empty());
}

#[test]
fn test_peek_on_empty_queue_fails() {
    let queue = PrintQueue::new();
    assert_eq!(queue.peek(), Err(QueueError::Empty));
    assert_eq!(QueueError::Empty.to_string(), "print queue is empty");
}

#[test]
fn test_queue_is_reusable_after_draining() {
    let mut queue = PrintQueue::new();
    queue.enqueue(doc("first.pdf", 2));
    assert!(queue.dequeue().is_ok());
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_err());

    // Empty -> NonEmpty again
    queue.enqueue(doc("second.pdf", 3));
    assert_eq!(queue.size(), 1);
    assert_eq!(queue.peek(), Ok(&doc("second.pdf", 3)));
    assert_eq!(queue.dequeue(), Ok(doc("second.pdf", 3)));
    assert!(queue.is_empty());
}

#[test]
fn test_peek_and_size_are_idempotent() {
    let mut queue = PrintQueue::new();
    queue.enqueue(doc("x.txt", 1));
    queue.enqueue(doc("y.txt", 2));

    for _ in 0..5 {
        assert_eq!(queue.peek(), Ok(&doc("x.txt", 1)));
        assert_eq!(queue.size(), 2);
    }
    let peeked = queue.peek().cloned().unwrap();
    assert_eq!(queue.dequeue(), Ok(peeked));
}

#[test]
fn test_fifo_and_size_laws_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue = PrintQueue::new();
    let mut model: VecDeque<Document> = VecDeque::new();
    let mut enqueues = 0usize;
    let mut successful_dequeues = 0usize;

    for step in 0..2_000u32 {
        if rng.gen_bool(0.55) {
            let d = doc(&format!("job-{step}.pdf"), rng.gen_range(0..500));
            queue.enqueue(d.clone());
            model.push_back(d);
            enqueues += 1;
        } else {
            let expected = model.pop_front();
            match queue.dequeue() {
                Ok(d) => {
                    assert_eq!(Some(d), expected);
                    successful_dequeues += 1;
                }
                Err(e) => {
                    assert_eq!(e, QueueError::Empty);
                    assert!(expected.is_none());
                }
            }
        }

        assert_eq!(queue.size(), enqueues - successful_dequeues);
        assert_eq!(queue.is_empty(), queue.size() == 0);
        assert_eq!(queue.peek().ok(), model.front());
    }
}

#[test]
fn test_display_lists_documents_in_order() {
    let mut queue = PrintQueue::new();
    assert_eq!(queue.display().len(), 1);

    queue.enqueue(doc("one.pdf", 10));
    queue.enqueue(doc("two.pdf", 20));
    let lines = queue.display();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("1. "));
    assert!(lines[0].contains("one.pdf"));
    assert!(lines[1].starts_with("2. "));
    assert!(lines[1].contains("two.pdf"));
    assert!(lines[2].contains('2'));

    // display is read-only
    assert_eq!(queue.size(), 2);
}

#[test]
fn test_observers_see_successful_mutations_only() {
    let journal = SafeEventLog::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let mut queue = PrintQueue::new()
        .with_observer(journal.clone())
        .with_observer(move |event: &QueueEvent| sink.borrow_mut().push((event.op, event.queue_len)));

    assert!(queue.dequeue().is_err());
    assert!(queue.peek().is_err());
    assert!(journal.lock().is_empty());

    queue.enqueue(doc("a.pdf", 1));
    queue.enqueue(doc("b.pdf", 2));
    let _ = queue.peek();
    queue.dequeue().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![(EventOp::Enqueue, 1), (EventOp::Enqueue, 2), (EventOp::Dequeue, 1)]
    );

    let log = journal.lock();
    assert_eq!(log.len(), 3);
    assert_eq!(log.printed(), vec![doc("a.pdf", 1)]);
    let sequences: Vec<u64> = log.entries().iter().map(|e| e.event_sequence).collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_collect_and_iterate() {
    let queue: PrintQueue = vec![doc("p.pdf", 1), doc("q.pdf", 2), doc("r.pdf", 3)]
        .into_iter()
        .collect();
    assert_eq!(queue.size(), 3);

    let names: Vec<&str> = queue.iter().map(Document::file_name).collect();
    assert_eq!(names, vec!["p.pdf", "q.pdf", "r.pdf"]);
}
