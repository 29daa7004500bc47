use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::{Header, Message, Payload};

/// The single FIFO queue shared by every actor of a runtime.
///
/// Producers append at the tail from any thread; the runtime removes from the
/// head. Both ends go through one lock, so an append racing a removal can
/// neither lose nor reorder messages. The lock is never held while a handler
/// runs.
pub(crate) struct Mailbox<P> {
    queue: Mutex<VecDeque<Message<P>>>,
}

impl<P: Payload> Mailbox<P> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn enqueue(&self, message: Message<P>) {
        self.queue.lock().push_back(message);
    }

    pub fn dequeue(&self) -> Option<Message<P>> {
        self.queue.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Headers of the queued messages, head first.
    pub fn headers(&self) -> Vec<Header> {
        self.queue.lock().iter().map(|m| m.header.clone()).collect()
    }
}
