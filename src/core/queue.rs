//! The delivery queue between producers and the worker
//!
//! An unbounded multi-producer/single-consumer FIFO. Producers push from
//! any thread without ever blocking; the single consumer (the worker)
//! blocks while the queue is empty. Ordering is the global arrival order
//! across all producers, as observed by the channel.

use super::message::QueueMessage;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Create a connected sender/receiver pair.
pub fn queue() -> (QueueSender, QueueReceiver) {
    let (tx, rx) = unbounded();
    (QueueSender(tx), QueueReceiver(rx))
}

/// Producer half of the queue. Cheap to clone; every clone pushes into the
/// same FIFO.
#[derive(Clone)]
pub struct QueueSender(Sender<QueueMessage>);

impl QueueSender {
    /// Append a message to the tail. Never blocks. A push after the
    /// receiver is gone is silently discarded; that only happens once
    /// shutdown is already underway.
    pub fn push(&self, message: QueueMessage) {
        let _ = self.0.send(message);
    }
}

/// Consumer half of the queue. Exactly one exists per logger.
pub struct QueueReceiver(Receiver<QueueMessage>);

impl QueueReceiver {
    /// Remove and return the head message, blocking while the queue is
    /// empty. Returns `None` once every sender has been dropped and the
    /// queue is drained, which the worker treats like a shutdown sentinel.
    pub fn pop_blocking(&self) -> Option<QueueMessage> {
        self.0.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use crate::core::message::LogRecord;
    use std::thread;

    fn record(text: String) -> QueueMessage {
        QueueMessage::Record(LogRecord::new(LogLevel::Info, "queue.rs", 1, "test", text))
    }

    fn text_of(message: QueueMessage) -> String {
        match message {
            QueueMessage::Record(r) => r.text,
            QueueMessage::Shutdown => panic!("unexpected sentinel"),
        }
    }

    #[test]
    fn test_fifo_single_producer() {
        let (tx, rx) = queue();
        for i in 0..100 {
            tx.push(record(format!("m{}", i)));
        }
        for i in 0..100 {
            assert_eq!(text_of(rx.pop_blocking().unwrap()), format!("m{}", i));
        }
    }

    #[test]
    fn test_fifo_per_producer_order_preserved() {
        let (tx, rx) = queue();
        let producers = 4;
        let per_producer = 250;

        let handles: Vec<_> = (0..producers)
            .map(|p| {
                let tx = tx.clone();
                thread::spawn(move || {
                    for i in 0..per_producer {
                        tx.push(record(format!("{}:{}", p, i)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        drop(tx);

        let mut next_expected = vec![0usize; producers];
        let mut total = 0usize;
        while let Some(message) = rx.pop_blocking() {
            let text = text_of(message);
            let (p, i) = text.split_once(':').unwrap();
            let p: usize = p.parse().unwrap();
            let i: usize = i.parse().unwrap();
            assert_eq!(i, next_expected[p], "producer {} reordered", p);
            next_expected[p] += 1;
            total += 1;
        }
        assert_eq!(total, producers * per_producer);
    }

    #[test]
    fn test_pop_returns_none_when_senders_are_gone() {
        let (tx, rx) = queue();
        tx.push(record("last".into()));
        drop(tx);
        assert_eq!(text_of(rx.pop_blocking().unwrap()), "last");
        assert!(rx.pop_blocking().is_none());
    }
}
