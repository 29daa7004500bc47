use crate::{ActorId, Header, Outcome, Payload};

/// Observer of dispatch activity.
///
/// Monitors are called synchronously on the draining thread, right after the
/// event they describe. Keep them cheap. A monitor that panics is removed.
pub trait Monitor<P: Payload>: Send {
    /// A handler returned `outcome` for the message described by `header`.
    /// The payload has already been released.
    fn on_message_handled(&self, header: &Header, outcome: Outcome) {
        let _h = header;
        let _o = outcome;
    }

    /// The message reached a stopped actor and was released without delivery.
    fn on_undeliverable(&self, header: &Header) {
        let _h = header;
    }

    /// The actor was retired after returning `Stop`.
    fn on_actor_stopped(&self, actor_id: ActorId) {
        let _a = actor_id;
    }
}
