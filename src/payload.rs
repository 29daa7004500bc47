use std::borrow::Cow;

/// Marker trait for message payloads carried by a runtime.
///
/// A runtime is generic over one payload type, usually an enum with one
/// variant per kind of argument the application passes around. Payloads must
/// be `Send + 'static` because producers may live on other threads.
///
/// Ownership of a payload moves into the mailbox on post and into the
/// dispatch on delivery. The payload is dropped right after the receiving
/// handler returns, unless the handler took it with
/// [`Message::take_payload`](crate::Message::take_payload). Resources that
/// need releasing (sockets, buffers) should do it in `Drop`.
///
/// # Payload Names
///
/// `name()` returns a human-readable name used in logs. The default returns
/// the type name. `#[derive(Payload)]` on an enum returns the variant name
/// instead.
pub trait Payload: Send + 'static {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl Payload for () {}
impl Payload for String {}
impl Payload for u64 {}
impl Payload for i64 {}
