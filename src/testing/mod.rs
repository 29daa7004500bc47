//! Helpers for asserting on dispatch order in tests.
//!
//! Enabled with the `test-harness` feature.
//!
//! ```rust,ignore
//! let journal = Journal::new();
//! runtime.add_monitor(journal.clone());
//! runtime.drain_all();
//! assert_eq!(journal.kinds_for(child), vec![MessageKind::INIT, PING]);
//! ```

mod journal;

pub use journal::{Journal, JournalEntry};
