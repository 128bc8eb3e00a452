//! Ready-made handlers for [`Chain`](crate::Chain) pipelines.
//!
//! Each module is gated behind a cargo feature of the same name; the
//! `middleware` feature enables all of them. Every builder here produces an
//! ordinary chain handler via `into_handler`, layered with
//! [`Chain::add_handler`](crate::Chain::add_handler) like any hand-written
//! closure.

/// Logging handler for chain execution
#[cfg(feature = "logging")]
pub mod logging;

/// Timing/performance measurement handler
#[cfg(feature = "timing")]
pub mod timing;

/// Execution metrics collection handler
#[cfg(feature = "metrics")]
pub mod metrics;

/// Retry handler with backoff strategies
#[cfg(feature = "retry")]
pub mod retry;

/// Predicate-based short-circuit handler
#[cfg(feature = "filter")]
pub mod filter;
