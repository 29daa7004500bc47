use std::sync::Arc;

use crate::{
    Actor, ActorId, ActorInfo, Header, Message, MessageKind, Payload, internal::Shared,
};

/// Producer-side access to a [`Runtime`](crate::Runtime).
///
/// Handles are cheap to clone and can be moved to other threads. Everything
/// that feeds work into the runtime goes through a handle:
///
/// - `create(parent, name, actor, init)`: register an actor and queue its INIT message
/// - `post(sender, target, kind, payload)`: queue a message for any actor
/// - `lookup(id)`: inspect an actor's registry record
///
/// Posting never blocks on message processing and never fails; whether the
/// target exists is checked when the message is dispatched.
pub struct Handle<P: Payload> {
    pub(crate) shared: Arc<Shared<P>>,
}

impl<P: Payload> Clone for Handle<P> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<P: Payload> Handle<P> {
    pub(crate) fn new(shared: Arc<Shared<P>>) -> Self {
        Self { shared }
    }

    /// Register a new actor and queue its INIT message.
    ///
    /// The INIT message carries `init` as its payload and `parent` as its
    /// sender. It is the first message the actor handles: anything queued
    /// for the identity before the INIT (only possible with a forged
    /// [`ActorId`]) fails dispatch with
    /// [`Error::UnknownActor`](crate::Error::UnknownActor).
    pub fn create<A>(
        &self,
        parent: ActorId,
        name: Option<&str>,
        actor: A,
        init: impl Into<Option<P>>,
    ) -> ActorId
    where
        A: Actor<P>,
    {
        let message = {
            let mut registry = self.shared.registry.lock();
            let id = registry.register(parent, name, Box::new(actor));
            let message = Message::new(parent, id, MessageKind::INIT, init.into());
            registry.expect_init(id, message.header().id());
            message
        };
        let id = message.target();
        tracing::debug!(actor_id = %id, parent = %parent, name = name.unwrap_or_default(), "actor created");
        self.send(message);
        id
    }

    /// Queue a message for `target`.
    ///
    /// Ownership of `payload` moves to the runtime. It is dropped once the
    /// target's handler returns (or right away if the target turns out to be
    /// stopped).
    pub fn post(
        &self,
        sender: ActorId,
        target: ActorId,
        kind: MessageKind,
        payload: impl Into<Option<P>>,
    ) {
        self.send(Message::new(sender, target, kind, payload.into()));
    }

    fn send(&self, message: Message<P>) {
        tracing::trace!(
            sender = %message.sender(),
            receiver = %message.target(),
            kind = %message.kind(),
            payload = %message.payload_name(),
            "message posted"
        );
        self.shared.mailbox.enqueue(message);
        self.shared.notify.notify_one();
    }

    /// Snapshot of an actor's registry record.
    pub fn lookup(&self, id: ActorId) -> Option<ActorInfo> {
        self.shared.registry.lock().lookup(id)
    }

    /// Number of registered actors, root included.
    pub fn actor_count(&self) -> usize {
        self.shared.registry.lock().len()
    }

    /// Number of messages waiting in the mailbox.
    pub fn pending(&self) -> usize {
        self.shared.mailbox.len()
    }

    /// Headers of the waiting messages, oldest first.
    pub fn queued(&self) -> Vec<Header> {
        self.shared.mailbox.headers()
    }
}
