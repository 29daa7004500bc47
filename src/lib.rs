//! mailroom - a single-process actor runtime with one global mailbox
//!
//! Actors are addressed by [`ActorId`], own their private state and handle
//! typed messages one at a time. Every message of a runtime goes through a
//! single FIFO queue, so delivery follows the exact order in which messages
//! were posted, across all actors.
//!
//! - [`Handle::create`] registers an actor and queues its INIT message, which
//!   is guaranteed to be the first message the actor sees.
//! - [`Handle::post`] queues a message. Handles are `Clone + Send + Sync`, so
//!   background threads (e.g. a socket accept loop) can feed the runtime.
//! - [`Runtime::drain_all`] dispatches until the mailbox is empty, including
//!   messages posted by handlers along the way. [`Runtime::run`] does that
//!   periodically on a tokio runtime.
//!
//! ```rust
//! use mailroom::*;
//!
//! const GREET: MessageKind = MessageKind::new(100);
//!
//! let mut runtime = Runtime::<String>::default();
//! let greeter = runtime.create(
//!     ActorId::ROOT,
//!     Some("greeter"),
//!     |_ctx: &Context<String>, msg: &mut Message<String>| {
//!         if msg.kind() == GREET {
//!             println!("Hello, {}!", msg.payload().map(String::as_str).unwrap_or("nobody"));
//!         }
//!         Outcome::Continue
//!     },
//!     None,
//! );
//! runtime.post(ActorId::ROOT, greeter, GREET, Some("World".to_string()));
//! assert_eq!(runtime.drain_all(), 2);
//! ```
//!
//! See `demos/listener.rs` and `demos/pingpong.rs`.

extern crate self as mailroom;

mod actor;
mod actor_id;
mod actor_info;
mod config;
mod context;
mod error;
mod handle;
mod kind;
mod message;
mod outcome;
mod payload;
mod runtime;

mod internal;

pub mod monitoring;

#[cfg(feature = "test-harness")]
pub mod testing;

pub use actor::Actor;
pub use actor_id::ActorId;
pub use actor_info::{ActorInfo, ActorStatus};
pub use config::{Config, StopPolicy};
pub use context::Context;
pub use error::Error;
pub use handle::Handle;
pub use kind::MessageKind;
pub use message::{Header, Message};
pub use monitoring::Monitor;
pub use outcome::Outcome;
pub use payload::Payload;
pub use runtime::{Delivery, Dispatched, Runtime};

#[cfg(feature = "macros")]
pub use mailroom_macros::Payload;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type MessageId = u128;
