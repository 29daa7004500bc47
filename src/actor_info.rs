use std::sync::Arc;

use crate::ActorId;

/// Lifecycle status recorded for every registered actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorStatus {
    /// The actor receives messages.
    Running,
    /// The actor returned `Stop` under [`StopPolicy::Retire`](crate::StopPolicy::Retire).
    /// Its handler and state are gone; messages to it are undeliverable.
    Stopped,
}

/// Snapshot of an actor's registry record.
///
/// Returned by [`Handle::lookup`](crate::Handle::lookup). The snapshot does not
/// track later changes to the record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorInfo {
    pub id: ActorId,
    /// `None` only for the root actor.
    pub parent: Option<ActorId>,
    pub name: Option<Arc<str>>,
    pub status: ActorStatus,
}

impl ActorInfo {
    /// The actor's display name, or `""` when it was created without one.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
