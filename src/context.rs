use std::sync::Arc;

use crate::{Actor, ActorId, Handle, MessageKind, Payload};

/// Runtime-provided context for the actor currently handling a message.
///
/// Use it to:
/// - `post(target, kind, payload)`: send a message on behalf of this actor
/// - `post_to_parent(kind, payload)`: same, addressed to the actor's parent
/// - `spawn(name, actor, init)`: create a child actor
/// - `id()`, `parent()`, `name()`: identity of the running actor
///
/// Messages posted from a handler join the back of the mailbox and are
/// delivered during the same drain.
pub struct Context<P: Payload> {
    id: ActorId,
    parent: Option<ActorId>,
    name: Option<Arc<str>>,
    handle: Handle<P>,
}

impl<P: Payload> Context<P> {
    pub(crate) fn new(
        id: ActorId,
        parent: Option<ActorId>,
        name: Option<Arc<str>>,
        handle: Handle<P>,
    ) -> Self {
        Self {
            id,
            parent,
            name,
            handle,
        }
    }

    /// Post a message with this actor as the sender.
    #[inline]
    pub fn post(&self, target: ActorId, kind: MessageKind, payload: impl Into<Option<P>>) {
        self.handle.post(self.id, target, kind, payload);
    }

    /// Post a message to this actor's parent.
    ///
    /// The root actor has no parent; for it the message is addressed to itself.
    pub fn post_to_parent(&self, kind: MessageKind, payload: impl Into<Option<P>>) {
        self.post(self.parent.unwrap_or(self.id), kind, payload);
    }

    /// Create a child of this actor.
    #[inline]
    pub fn spawn<A>(&self, name: Option<&str>, actor: A, init: impl Into<Option<P>>) -> ActorId
    where
        A: Actor<P>,
    {
        self.handle.create(self.id, name, actor, init)
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<ActorId> {
        self.parent
    }

    /// The actor's display name, or `""` when it has none.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// A handle to the runtime, e.g. to pass to a background producer.
    #[inline]
    pub fn handle(&self) -> &Handle<P> {
        &self.handle
    }
}
