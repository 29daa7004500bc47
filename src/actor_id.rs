use std::fmt;

/// Identity of an actor registered with a [`Runtime`](crate::Runtime).
///
/// Identities are assigned at creation, increase monotonically and are never
/// reused within a runtime. The ordering carries no meaning beyond uniqueness.
///
/// [`ActorId::ROOT`] names the root actor, which exists as soon as the runtime
/// is constructed and has no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(u64);

impl ActorId {
    /// The well-known identity of the root actor.
    pub const ROOT: ActorId = ActorId(0);

    /// Builds an identity from its raw value.
    ///
    /// Only identities returned by [`Handle::create`](crate::Handle::create)
    /// name registered actors. A message posted to any other value, or to a
    /// value before `create` hands it out, fails dispatch with
    /// [`Error::UnknownActor`](crate::Error::UnknownActor).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value of this identity.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ActorId> for u64 {
    fn from(id: ActorId) -> Self {
        id.0
    }
}
