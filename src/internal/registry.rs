use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use crate::{Actor, ActorId, ActorInfo, ActorStatus, Error, MessageId, Payload, Result};

pub(crate) type ActorCell<P> = Arc<Mutex<Box<dyn Actor<P>>>>;

pub(crate) struct Record<P: Payload> {
    pub(crate) parent: Option<ActorId>,
    pub(crate) name: Option<Arc<str>>,
    pub(crate) status: ActorStatus,
    pub(crate) cell: Option<ActorCell<P>>,
    /// Id of the INIT message the actor has not handled yet. Until it is
    /// dispatched, no other message may reach the actor.
    pub(crate) pending_init: Option<MessageId>,
}

impl<P: Payload> Record<P> {
    fn info(&self, id: ActorId) -> ActorInfo {
        ActorInfo {
            id,
            parent: self.parent,
            name: self.name.clone(),
            status: self.status,
        }
    }
}

/// Actor records keyed by identity.
///
/// Records are never removed. Identities come from a counter that only moves
/// forward, so an identity is never handed out twice.
pub(crate) struct Registry<P: Payload> {
    actors: HashMap<ActorId, Record<P>>,
    order: Vec<ActorId>,
    next_id: u64,
}

impl<P: Payload> Registry<P> {
    /// Creates a registry holding only the root actor.
    pub fn new(root: Box<dyn Actor<P>>) -> Self {
        let mut registry = Self {
            actors: HashMap::new(),
            order: Vec::new(),
            next_id: ActorId::ROOT.as_u64(),
        };
        registry.insert(None, Some(Arc::from("root")), root);
        registry
    }

    pub fn register(
        &mut self,
        parent: ActorId,
        name: Option<&str>,
        actor: Box<dyn Actor<P>>,
    ) -> ActorId {
        self.insert(Some(parent), name.map(Arc::from), actor)
    }

    fn insert(
        &mut self,
        parent: Option<ActorId>,
        name: Option<Arc<str>>,
        actor: Box<dyn Actor<P>>,
    ) -> ActorId {
        let id = ActorId::from_raw(self.next_id);
        self.next_id += 1;
        self.actors.insert(
            id,
            Record {
                parent,
                name,
                status: ActorStatus::Running,
                cell: Some(Arc::new(Mutex::new(actor))),
                pending_init: None,
            },
        );
        self.order.push(id);
        id
    }

    /// Holds back messages to `id` until the INIT identified by `init` is
    /// dispatched.
    pub fn expect_init(&mut self, id: ActorId, init: MessageId) {
        if let Some(record) = self.actors.get_mut(&id) {
            record.pending_init = Some(init);
        }
    }

    pub fn lookup(&self, id: ActorId) -> Option<ActorInfo> {
        self.actors.get(&id).map(|record| record.info(id))
    }

    /// Like `lookup`, but a missing record is an error.
    pub fn resolve(&mut self, id: ActorId) -> Result<&mut Record<P>> {
        self.actors.get_mut(&id).ok_or(Error::UnknownActor(id))
    }

    /// Marks the actor as stopped and hands back its cell so the caller can
    /// drop it outside the registry lock.
    pub fn retire(&mut self, id: ActorId) -> Option<ActorCell<P>> {
        let record = self.actors.get_mut(&id)?;
        record.status = ActorStatus::Stopped;
        record.cell.take()
    }

    /// Identities of running actors, in creation order.
    pub fn running(&self) -> Vec<ActorId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.actors
                    .get(id)
                    .is_some_and(|r| r.status == ActorStatus::Running)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }
}
