use std::sync::Arc;

use tokio::{select, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{
    Actor, ActorId, Config, Context, Error, Handle, Header, Message, MessageKind, Outcome,
    Payload, Result, StopPolicy,
    actor::RootActor,
    internal::Shared,
    monitoring::{Monitor, MonitorId, MonitorSet},
};

/// What happened to a dispatched message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The target's handler ran and returned this outcome.
    Handled(Outcome),
    /// The target was stopped; the message was released unhandled.
    Undeliverable,
}

/// Result of dispatching a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub header: Header,
    pub delivery: Delivery,
}

/// Owns the actors of one runtime and drives message dispatch.
///
/// - `handle()` returns a cloneable [`Handle`] for creating actors and posting
///   messages, from this thread or any other.
/// - `drain_all()` delivers queued messages, including the ones posted while
///   draining, until the mailbox is empty.
/// - `run(cancel)` drains periodically and whenever something is posted,
///   until `cancel` fires.
/// - `shutdown()` sends `SHUTDOWN` to every running actor and drains.
///
/// There is exactly one consumer per runtime: dispatch needs `&mut self` and
/// `Runtime` is not `Clone`, so handlers never run concurrently.
///
/// See also: [`Actor`], [`Context`], [`Monitor`].
pub struct Runtime<P: Payload> {
    config: Config,
    handle: Handle<P>,
    monitors: MonitorSet<P>,
}

impl<P: Payload> Runtime<P> {
    /// Create a runtime whose root actor only logs what it receives.
    pub fn new(config: Config) -> Self {
        Self::with_root(config, RootActor)
    }

    /// Create a runtime with a custom root actor.
    ///
    /// The root actor is registered as [`ActorId::ROOT`] and, unlike every
    /// other actor, receives no INIT message.
    pub fn with_root<A: Actor<P>>(config: Config, root: A) -> Self {
        let shared = Shared::new(Box::new(root), config.queue_capacity);
        Self {
            config,
            handle: Handle::new(Arc::new(shared)),
            monitors: MonitorSet::new(),
        }
    }

    /// A new handle to this runtime.
    pub fn handle(&self) -> Handle<P> {
        self.handle.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shorthand for `handle().create(..)`.
    pub fn create<A: Actor<P>>(
        &self,
        parent: ActorId,
        name: Option<&str>,
        actor: A,
        init: impl Into<Option<P>>,
    ) -> ActorId {
        self.handle.create(parent, name, actor, init)
    }

    /// Shorthand for `handle().post(..)`.
    pub fn post(
        &self,
        sender: ActorId,
        target: ActorId,
        kind: MessageKind,
        payload: impl Into<Option<P>>,
    ) {
        self.handle.post(sender, target, kind, payload);
    }

    /// Number of messages waiting in the mailbox.
    pub fn pending(&self) -> usize {
        self.handle.pending()
    }

    pub fn add_monitor<M: Monitor<P> + 'static>(&mut self, monitor: M) -> MonitorId {
        self.monitors.add(Box::new(monitor))
    }

    pub fn remove_monitor(&mut self, id: MonitorId) -> bool {
        self.monitors.remove(id)
    }

    /// Dispatch the oldest queued message, if any.
    ///
    /// Returns `Ok(None)` when the mailbox is empty and
    /// [`Error::UnknownActor`](crate::Error::UnknownActor) when the target was
    /// never registered. In the error case the message's payload has been
    /// released and the rest of the mailbox is untouched.
    pub fn dispatch_one(&mut self) -> Result<Option<Dispatched>> {
        match self.handle.shared.mailbox.dequeue() {
            Some(message) => self.dispatch(message).map(Some),
            None => Ok(None),
        }
    }

    /// Dispatch until the mailbox is observed empty.
    ///
    /// Messages posted by handlers during the drain are dispatched by the same
    /// call. Returns the number of messages dispatched, or the first
    /// unknown-target error.
    pub fn try_drain_all(&mut self) -> Result<usize> {
        let mut count = 0;
        while self.dispatch_one()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// Dispatch until the mailbox is observed empty.
    ///
    /// # Panics
    ///
    /// Panics when a message targets an actor that was never registered.
    /// That is a programming error: identities are never removed, so such a
    /// message can only come from a forged or foreign [`ActorId`]. Use
    /// [`try_drain_all`](Self::try_drain_all) to handle it instead.
    pub fn drain_all(&mut self) -> usize {
        match self.try_drain_all() {
            Ok(count) => count,
            Err(e) => {
                tracing::error!(error = %e, "fatal dispatch error");
                panic!("{e}");
            }
        }
    }

    /// Post `SHUTDOWN` from the root to every running actor except the root,
    /// in creation order, then drain.
    pub fn shutdown(&mut self) -> Result<usize> {
        let running = self.handle.shared.registry.lock().running();
        for id in running.into_iter().filter(|id| !id.is_root()) {
            self.handle
                .post(ActorId::ROOT, id, MessageKind::SHUTDOWN, None);
        }
        self.try_drain_all()
    }

    /// Drain on every `drain_interval` tick and whenever a message is posted,
    /// until `cancel` is cancelled.
    ///
    /// After cancellation, runs [`shutdown`](Self::shutdown) if
    /// `shutdown_on_cancel` is set. Unknown targets end the loop with an error.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<()> {
        let shared = self.handle.shared.clone();
        let mut ticker = tokio::time::interval(self.config.drain_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {},
                _ = shared.notify.notified() => {},
            }
            self.try_drain_all()?;
        }

        if self.config.shutdown_on_cancel {
            self.shutdown()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, mut message: Message<P>) -> Result<Dispatched> {
        let target = message.target();
        let slot = {
            let mut registry = self.handle.shared.registry.lock();
            let record = registry.resolve(target)?;
            match record.pending_init {
                Some(init) if init == message.header.id() => record.pending_init = None,
                Some(_) => {
                    tracing::error!(actor_id = %target, kind = %message.kind(), "message queued before the actor existed");
                    return Err(Error::UnknownActor(target));
                }
                None => {}
            }
            record
                .cell
                .clone()
                .map(|cell| (cell, record.parent, record.name.clone()))
        };

        let Some((cell, parent, name)) = slot else {
            tracing::warn!(
                actor_id = %target,
                sender = %message.sender(),
                kind = %message.kind(),
                "message to stopped actor dropped"
            );
            let header = message.header.clone();
            drop(message);
            self.monitors.notify(|m| m.on_undeliverable(&header));
            return Ok(Dispatched {
                header,
                delivery: Delivery::Undeliverable,
            });
        };

        let ctx = Context::new(target, parent, name, self.handle.clone());
        let outcome = cell.lock().handle(&ctx, &mut message);
        drop(cell);

        let header = message.header.clone();
        // Payload is released here, after the handler has returned.
        drop(message);

        if outcome.is_failure() {
            tracing::warn!(actor_id = %target, kind = %header.kind(), %outcome, "handler reported failure");
        } else {
            tracing::debug!(actor_id = %target, kind = %header.kind(), %outcome, "message handled");
        }

        self.monitors
            .notify(|m| m.on_message_handled(&header, outcome));

        if outcome == Outcome::Stop && self.config.stop_policy == StopPolicy::Retire {
            self.retire(target);
        }
        Ok(Dispatched {
            header,
            delivery: Delivery::Handled(outcome),
        })
    }

    fn retire(&mut self, id: ActorId) {
        let cell = self.handle.shared.registry.lock().retire(id);
        // Dropped outside the registry lock; the actor's Drop may post.
        if cell.is_some() {
            drop(cell);
            tracing::debug!(actor_id = %id, "actor retired");
            self.monitors.notify(|m| m.on_actor_stopped(id));
        }
    }
}

impl<P: Payload> Default for Runtime<P> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
