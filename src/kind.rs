use std::fmt;

/// Integer tag describing what a message means to its receiver.
///
/// Kinds share one flat namespace. The runtime reserves [`INIT`](Self::INIT),
/// [`SHUTDOWN`](Self::SHUTDOWN) and [`CLOSE`](Self::CLOSE); everything else is
/// free for applications. By convention application kinds start at
/// [`FIRST_USER`](Self::FIRST_USER).
///
/// ```rust
/// use mailroom::MessageKind;
///
/// const LISTENER_READY: MessageKind = MessageKind::new(100);
/// assert!(!LISTENER_READY.is_reserved());
/// assert!(MessageKind::INIT.is_reserved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageKind(u32);

impl MessageKind {
    /// First message every actor receives, carrying its creation payload.
    pub const INIT: MessageKind = MessageKind(0);
    /// Sent by [`Runtime::shutdown`](crate::Runtime::shutdown) to running actors.
    pub const SHUTDOWN: MessageKind = MessageKind(1);
    /// Asks an actor to release whatever it holds open.
    pub const CLOSE: MessageKind = MessageKind(2);
    /// Lowest kind conventionally used by applications.
    pub const FIRST_USER: MessageKind = MessageKind(100);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Whether this kind is one of the runtime's own kinds.
    #[inline]
    pub const fn is_reserved(&self) -> bool {
        self.0 <= Self::CLOSE.0
    }
}

impl From<u32> for MessageKind {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INIT => write!(f, "INIT"),
            Self::SHUTDOWN => write!(f, "SHUTDOWN"),
            Self::CLOSE => write!(f, "CLOSE"),
            Self(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_kinds() {
        assert!(MessageKind::INIT.is_reserved());
        assert!(MessageKind::SHUTDOWN.is_reserved());
        assert!(MessageKind::CLOSE.is_reserved());
        assert!(!MessageKind::new(3).is_reserved());
        assert!(!MessageKind::FIRST_USER.is_reserved());
    }

    #[test]
    fn test_display() {
        assert_eq!(MessageKind::INIT.to_string(), "INIT");
        assert_eq!(MessageKind::CLOSE.to_string(), "CLOSE");
        assert_eq!(MessageKind::new(102).to_string(), "102");
    }
}
