use std::fmt;

/// Result reported by an actor after handling a single message.
///
/// Outcomes are informational. The runtime logs them and forwards them to
/// every registered [`Monitor`](crate::Monitor); only [`Stop`](Outcome::Stop)
/// can change the runtime's behaviour, and only when the runtime is configured
/// with [`StopPolicy::Retire`](crate::StopPolicy::Retire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Message handled, keep going.
    Continue,
    /// Message handled, the actor has nothing more to do.
    Stop,
    /// The actor hit an unrecoverable condition.
    Fatal,
    /// The actor failed to handle the message.
    Error,
    /// The actor does not understand this message kind.
    UnrecognisedKind,
    /// The kind is known but not valid in the actor's current state.
    NotInState,
}

impl Outcome {
    /// `true` for outcomes signalling that something went wrong.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Continue | Outcome::Stop)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Continue => "continue",
            Outcome::Stop => "stop",
            Outcome::Fatal => "fatal",
            Outcome::Error => "error",
            Outcome::UnrecognisedKind => "unrecognised-kind",
            Outcome::NotInState => "not-in-state",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures() {
        assert!(!Outcome::Continue.is_failure());
        assert!(!Outcome::Stop.is_failure());
        assert!(Outcome::Fatal.is_failure());
        assert!(Outcome::NotInState.is_failure());
    }
}
