use std::time::SystemTime;

use uuid::Uuid;

use crate::{ActorId, MessageId, MessageKind, Payload};

/// Routing data attached to every message.
///
/// - `id`: unique identifier for the message.
/// - `timestamp`: creation time in nanoseconds since Unix epoch (truncated to `u64`).
/// - `sender`: actor on whose behalf the message was posted.
/// - `target`: actor the message will be delivered to.
/// - `kind`: integer tag interpreted by the target's handler.
///
/// The runtime never looks at `sender`; it is carried for the receiver's benefit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    id: MessageId,
    timestamp: u64,
    sender: ActorId,
    target: ActorId,
    kind: MessageKind,
}

impl Header {
    pub(crate) fn new(sender: ActorId, target: ActorId, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4().as_u128(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default(),
            sender,
            target,
            kind,
        }
    }

    /// Unique identifier for this message.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Timestamp in nanoseconds since Unix epoch (u64 truncation).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn sender(&self) -> ActorId {
        self.sender
    }

    pub fn target(&self) -> ActorId {
        self.target
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }
}

/// A header plus an optional, owned payload.
///
/// Handlers receive `&mut Message<P>`. Reading the payload does not consume
/// it: the runtime drops it once the handler returns. A handler that wants
/// to keep the payload (e.g. to store creation arguments in its state) calls
/// [`take_payload`](Self::take_payload).
#[derive(Debug)]
pub struct Message<P> {
    pub(crate) header: Header,
    pub(crate) payload: Option<P>,
}

impl<P: Payload> Message<P> {
    pub(crate) fn new(
        sender: ActorId,
        target: ActorId,
        kind: MessageKind,
        payload: Option<P>,
    ) -> Self {
        Self {
            header: Header::new(sender, target, kind),
            payload,
        }
    }

    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[inline]
    pub fn sender(&self) -> ActorId {
        self.header.sender
    }

    #[inline]
    pub fn target(&self) -> ActorId {
        self.header.target
    }

    #[inline]
    pub fn kind(&self) -> MessageKind {
        self.header.kind
    }

    /// Borrow the payload, if any.
    #[inline]
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Borrow the payload mutably, if any.
    #[inline]
    pub fn payload_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }

    /// Take ownership of the payload.
    ///
    /// Once taken, the runtime no longer drops the payload after the handler
    /// returns; its lifetime belongs to whoever holds it now.
    #[inline]
    pub fn take_payload(&mut self) -> Option<P> {
        self.payload.take()
    }

    /// Name of the payload for logging, or `"-"` when there is none.
    pub(crate) fn payload_name(&self) -> std::borrow::Cow<'static, str> {
        self.payload
            .as_ref()
            .map(Payload::name)
            .unwrap_or(std::borrow::Cow::Borrowed("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_ids_are_unique() {
        let a = Header::new(ActorId::ROOT, ActorId::from_raw(1), MessageKind::INIT);
        let b = Header::new(ActorId::ROOT, ActorId::from_raw(1), MessageKind::INIT);
        assert_ne!(a.id(), b.id());
        assert!(a.timestamp() > 0);
    }

    #[test]
    fn test_take_payload() {
        let mut msg = Message::new(
            ActorId::ROOT,
            ActorId::from_raw(3),
            MessageKind::new(100),
            Some(String::from("hello")),
        );
        assert_eq!(msg.payload().map(String::as_str), Some("hello"));
        assert_eq!(msg.take_payload().as_deref(), Some("hello"));
        assert!(msg.payload().is_none());
        assert_eq!(msg.payload_name(), "-");
    }
}
