mod mailbox;
mod registry;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::{Actor, Payload};

pub(crate) use mailbox::Mailbox;
pub(crate) use registry::Registry;

/// State shared between a runtime and all of its handles.
pub(crate) struct Shared<P: Payload> {
    pub(crate) registry: Mutex<Registry<P>>,
    pub(crate) mailbox: Mailbox<P>,
    /// Wakes [`Runtime::run`](crate::Runtime::run) when something is posted.
    pub(crate) notify: Notify,
}

impl<P: Payload> Shared<P> {
    pub fn new(root: Box<dyn Actor<P>>, queue_capacity: usize) -> Self {
        Self {
            registry: Mutex::new(Registry::new(root)),
            mailbox: Mailbox::with_capacity(queue_capacity),
            notify: Notify::new(),
        }
    }
}
