//! Eventkit - composable event primitives
//!
//! This library provides two small, generic building blocks for
//! event-driven code:
//!
//! * [`Notifier`] - fan-out: one event, many independent observers,
//!   invoked synchronously.
//! * [`Chain`] - a nestable processing chain: ordered handlers that may
//!   short-circuit, transform, or wrap the result of the rest of the chain,
//!   terminating in a default processor.
//!
//! Both are plain containers for caller-supplied closures: no I/O, no
//! threads, no internal locking. Cross-thread wrappers are available behind
//! the `sync` feature, and ready-made handlers (logging, timing, metrics,
//! retry, filtering) behind the individual middleware features.
//!
//! # Quick Start
//!
//! ```
//! use eventkit::{Chain, Notifier};
//!
//! // Fan-out to observers.
//! let mut notifier = Notifier::new();
//! notifier.subscribe(|event: &i32| println!("saw {event}"));
//! notifier.notify(&42);
//!
//! // Handlers wrap the chain newest-outermost.
//! let mut chain = Chain::new(|n: &i32| n.to_string());
//! chain.add_handler(|event, next| format!("checked:{}", next(event)));
//! assert_eq!(chain.execute(&7), "checked:7");
//! ```

pub mod core;
pub mod middleware;
#[cfg(feature = "sync")]
pub mod sync;

// Convenience re-exports
pub use crate::core::chain::{Chain, Next};
pub use crate::core::notifier::Notifier;
