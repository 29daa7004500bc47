use std::time::Duration;

/// What the dispatch loop does when a handler returns [`Outcome::Stop`](crate::Outcome::Stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopPolicy {
    /// Log and report the outcome; the actor stays registered and keeps
    /// receiving messages.
    #[default]
    Ignore,
    /// Mark the actor as stopped and drop its handler and state. Messages
    /// that reach it afterwards are released and reported as undeliverable.
    Retire,
}

/// Runtime configuration.
///
/// Use the builder methods to customize, or [`Default`] for sensible defaults.
///
/// # Examples
///
/// ```rust
/// use mailroom::{Config, StopPolicy};
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_drain_interval(Duration::from_millis(100))
///     .with_stop_policy(StopPolicy::Retire);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// How often [`Runtime::run`](crate::Runtime::run) drains the mailbox when
    /// nothing wakes it earlier.
    /// Default: 10 ms
    pub drain_interval: Duration,

    /// Reaction to handlers returning `Stop`.
    /// Default: [`StopPolicy::Ignore`]
    pub stop_policy: StopPolicy,

    /// Initial capacity of the mailbox. The mailbox is unbounded; this only
    /// avoids early reallocations.
    /// Default: 128
    pub queue_capacity: usize,

    /// Whether [`Runtime::run`](crate::Runtime::run) broadcasts `SHUTDOWN`
    /// and drains once more after cancellation.
    /// Default: true
    pub shutdown_on_cancel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            drain_interval: Duration::from_millis(10),
            stop_policy: StopPolicy::Ignore,
            queue_capacity: 128,
            shutdown_on_cancel: true,
        }
    }
}

impl Config {
    pub fn with_drain_interval(mut self, interval: Duration) -> Self {
        self.drain_interval = interval;
        self
    }

    pub fn with_stop_policy(mut self, policy: StopPolicy) -> Self {
        self.stop_policy = policy;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_shutdown_on_cancel(mut self, enabled: bool) -> Self {
        self.shutdown_on_cancel = enabled;
        self
    }
}
