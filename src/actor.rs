use crate::{Context, Message, Outcome, Payload};

/// Core trait implemented by user-defined actors.
///
/// An actor is a message handler together with its private state: the
/// implementing value itself. The runtime only ever touches it through
/// [`handle`](Actor::handle), one message at a time, on the thread that
/// drains the mailbox. No other actor can reach it.
///
/// The first message an actor sees is always [`MessageKind::INIT`] carrying
/// the payload passed to [`Handle::create`]. A typical actor builds its
/// working state there:
///
/// ```rust
/// use mailroom::{Actor, Context, Message, MessageKind, Outcome};
///
/// struct Counter {
///     seen: Option<u64>,
/// }
///
/// impl Actor<u64> for Counter {
///     fn handle(&mut self, _ctx: &Context<u64>, msg: &mut Message<u64>) -> Outcome {
///         if msg.kind() == MessageKind::INIT {
///             self.seen = Some(msg.take_payload().unwrap_or(0));
///             return Outcome::Continue;
///         }
///         match self.seen.as_mut() {
///             Some(seen) => {
///                 *seen += 1;
///                 Outcome::Continue
///             }
///             None => Outcome::NotInState,
///         }
///     }
/// }
/// ```
///
/// Closures of the shape `FnMut(&Context<P>, &mut Message<P>) -> Outcome`
/// are actors too; whatever they capture is their state.
///
/// Handlers must not block: there is a single consumer and a blocked handler
/// stalls every other actor.
///
/// [`MessageKind::INIT`]: crate::MessageKind::INIT
/// [`Handle::create`]: crate::Handle::create
pub trait Actor<P: Payload>: Send + 'static {
    /// Handle a single message addressed to this actor.
    ///
    /// Use the context to post follow-up messages or spawn children. Both
    /// append to the same mailbox and are delivered during the current drain.
    fn handle(&mut self, ctx: &Context<P>, msg: &mut Message<P>) -> Outcome;
}

impl<P, F> Actor<P> for F
where
    P: Payload,
    F: FnMut(&Context<P>, &mut Message<P>) -> Outcome + Send + 'static,
{
    fn handle(&mut self, ctx: &Context<P>, msg: &mut Message<P>) -> Outcome {
        self(ctx, msg)
    }
}

/// The root actor installed by [`Runtime::new`](crate::Runtime::new).
///
/// It only logs what it receives.
pub(crate) struct RootActor;

impl<P: Payload> Actor<P> for RootActor {
    fn handle(&mut self, _ctx: &Context<P>, msg: &mut Message<P>) -> Outcome {
        tracing::debug!(
            sender = %msg.sender(),
            kind = %msg.kind(),
            payload = %msg.payload_name(),
            "root received message"
        );
        Outcome::Continue
    }
}
