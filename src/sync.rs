//! Synchronized wrappers for multi-threaded use.
//!
//! The core [`Notifier`](crate::Notifier) and [`Chain`](crate::Chain) carry
//! no locking on purpose: adding it silently would change behavior under
//! composition (a re-entrant notify during subscribe, for instance) and
//! force every single-threaded caller to pay for it. These decorators make
//! that trade explicit instead: same contracts, `&self` mutation, `Send`
//! bounds on the stored closures.

use crate::core::chain::Next;
use std::sync::{Arc, Mutex};

/// Thread-safe fan-out notifier.
///
/// Observers must be `Send`. The observer list lock is held for the whole
/// fan-out, so subscriptions block until an in-flight `notify` finishes and
/// observers must not call back into their own notifier.
///
/// # Example
///
/// ```
/// use eventkit::sync::SyncNotifier;
/// use std::sync::Arc;
///
/// let notifier = Arc::new(SyncNotifier::new());
/// notifier.subscribe(|event: &i32| println!("saw {event}"));
///
/// let shared = Arc::clone(&notifier);
/// std::thread::spawn(move || shared.notify(&1)).join().unwrap();
/// ```
pub struct SyncNotifier<T> {
    observers: Mutex<Vec<Box<dyn FnMut(&T) + Send>>>,
}

impl<T> SyncNotifier<T> {
    /// Create a notifier with no observers.
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe an observer to be notified of events.
    pub fn subscribe<O>(&self, observer: O)
    where
        O: FnMut(&T) + Send + 'static,
    {
        self.observers.lock().unwrap().push(Box::new(observer));
    }

    /// Notify all subscribed observers of an event.
    pub fn notify(&self, event: &T) {
        let mut observers = self.observers.lock().unwrap();
        for observer in observers.iter_mut() {
            observer(event);
        }
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().unwrap().len()
    }
}

impl<T> Default for SyncNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

type SharedProcessor<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// Thread-safe handler chain.
///
/// Handlers and the default processor must be `Send + Sync`. Registration
/// replaces the composed callable under a short-lived lock; `execute` clones
/// the current composed callable and releases the lock *before* running it,
/// so long-running handlers never block registration and re-entrant
/// execution from inside a handler is fine. An execution therefore sees the
/// chain as it was when it started, even if handlers are added concurrently.
///
/// Ordering, short-circuit, and zero-state semantics are exactly those of
/// [`Chain`](crate::Chain).
pub struct SyncChain<T, R> {
    processor: Mutex<SharedProcessor<T, R>>,
}

impl<T: 'static, R: 'static> SyncChain<T, R> {
    /// Create a chain with a default processor.
    pub fn new<P>(default_processor: P) -> Self
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self {
            processor: Mutex::new(Arc::new(default_processor)),
        }
    }

    /// Add a handler to the chain. Handlers run newest-first.
    pub fn add_handler<H>(&self, handler: H)
    where
        H: Fn(&T, Next<'_, T, R>) -> R + Send + Sync + 'static,
    {
        let mut slot = self.processor.lock().unwrap();
        let inner = Arc::clone(&*slot);
        *slot = Arc::new(move |event: &T| {
            let next: Next<'_, T, R> = inner.as_ref();
            handler(event, next)
        });
    }

    /// Execute the chain for an event and return the composed result.
    pub fn execute(&self, event: &T) -> R {
        let processor = {
            let slot = self.processor.lock().unwrap();
            Arc::clone(&*slot)
        };
        (processor.as_ref())(event)
    }
}

/// The zero-state chain: the effective default processor returns
/// `R::default()`, matching [`Chain::default`](crate::Chain::default).
impl<T: 'static, R: Default + 'static> Default for SyncChain<T, R> {
    fn default() -> Self {
        Self::new(|_| R::default())
    }
}
