/// Nestable handler chain with LIFO dispatch
pub mod chain;

/// Fan-out event notifier
pub mod notifier;
