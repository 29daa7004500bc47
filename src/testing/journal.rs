use std::sync::Arc;

use parking_lot::Mutex;

use crate::{ActorId, Delivery, Header, MessageKind, Payload, monitoring::Monitor};

/// One dispatch recorded by a [`Journal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub header: Header,
    pub delivery: Delivery,
}

/// A cloneable monitor that keeps every dispatch in memory.
///
/// Register one clone with the runtime and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded dispatches, in dispatch order.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().clone()
    }

    /// Kinds delivered or addressed to `target`, in dispatch order.
    pub fn kinds_for(&self, target: ActorId) -> Vec<MessageKind> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.header.target() == target)
            .map(|e| e.header.kind())
            .collect()
    }

    /// Targets of every recorded dispatch, in dispatch order.
    pub fn targets(&self) -> Vec<ActorId> {
        self.entries.lock().iter().map(|e| e.header.target()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, header: &Header, delivery: Delivery) {
        self.entries.lock().push(JournalEntry {
            header: header.clone(),
            delivery,
        });
    }
}

impl<P: Payload> Monitor<P> for Journal {
    fn on_message_handled(&self, header: &Header, outcome: crate::Outcome) {
        self.push(header, Delivery::Handled(outcome));
    }

    fn on_undeliverable(&self, header: &Header) {
        self.push(header, Delivery::Undeliverable);
    }
}
