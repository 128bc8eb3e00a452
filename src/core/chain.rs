use std::rc::Rc;

/// The continuation passed to a handler: the rest of the chain as it existed
/// when the handler was added, down to the default processor.
///
/// A handler may invoke its continuation zero or more times. Not invoking it
/// short-circuits the chain: every earlier-added handler and the default
/// processor are skipped for that execution.
pub type Next<'a, T, R> = &'a dyn Fn(&T) -> R;

type Processor<T, R> = Rc<dyn Fn(&T) -> R>;

/// A nestable chain of handlers processing events of type `T` into results
/// of type `R`.
///
/// The chain is a single composed callable built from a terminal *default
/// processor* plus zero or more handlers layered around it. Each handler
/// receives the event and a continuation ([`Next`]) representing everything
/// registered before it; the handler decides whether to pass the event down,
/// substitute its own result, or wrap the continuation's result.
///
/// # Execution Order: LIFO (Last In, First Out)
///
/// Handlers execute in **reverse order** of registration - the last handler
/// added is the **first** to run (outermost layer).
///
/// ```text
/// h3 (added last, runs first)
///   → h2
///     → h1
///       → default processor
///     ← h1 result
///   ← h2 result
/// ← h3 result
/// ```
///
/// Infrastructure handlers (logging, timing, metrics) should therefore be
/// added **last** so they wrap around business-logic handlers.
///
/// # Purity
///
/// [`execute`](Chain::execute) never mutates the chain; repeated calls with
/// the same event and pure handlers return equal results.
///
/// # Thread Safety
///
/// `Chain` has no internal synchronization and its composed callable is not
/// `Send`. For cross-thread use see the `sync` feature; locking is never
/// added silently here.
///
/// # Example
///
/// ```
/// use eventkit::Chain;
///
/// let mut chain = Chain::new(|n: &i32| format!("processed {n}"));
///
/// // Validation handler: short-circuits on negative events.
/// chain.add_handler(|event, next| {
///     if *event < 0 {
///         format!("rejected {event}")
///     } else {
///         next(event)
///     }
/// });
///
/// assert_eq!(chain.execute(&7), "processed 7");
/// assert_eq!(chain.execute(&-1), "rejected -1");
/// ```
pub struct Chain<T, R> {
    processor: Processor<T, R>,
    handlers: usize,
}

impl<T: 'static, R: 'static> Chain<T, R> {
    /// Create a chain with a default processor.
    ///
    /// The default processor is the innermost callable: it runs only when
    /// every handler passes the event down through its continuation.
    pub fn new<P>(default_processor: P) -> Self
    where
        P: Fn(&T) -> R + 'static,
    {
        Self {
            processor: Rc::new(default_processor),
            handlers: 0,
        }
    }

    /// Add a handler to the chain.
    ///
    /// The handler wraps the chain's current composed callable, which it
    /// receives as its continuation on every execution. Handlers run
    /// newest-first; see the type-level docs for the full ordering contract.
    /// There is no handler removal.
    pub fn add_handler<H>(&mut self, handler: H)
    where
        H: Fn(&T, Next<'_, T, R>) -> R + 'static,
    {
        let inner = Rc::clone(&self.processor);
        self.processor = Rc::new(move |event: &T| handler(event, inner.as_ref()));
        self.handlers += 1;
    }

    /// Add a handler to the chain (fluent API - consumes self).
    ///
    /// ```
    /// use eventkit::Chain;
    ///
    /// let chain = Chain::new(|n: &i32| *n)
    ///     .with_handler(|event, next| next(event) + 1)   // runs 2nd
    ///     .with_handler(|event, next| next(event) * 10); // runs 1st
    ///
    /// // (3 + 1) * 10: the handler added last wraps the one added first.
    /// assert_eq!(chain.execute(&3), 40);
    /// ```
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: Fn(&T, Next<'_, T, R>) -> R + 'static,
    {
        self.add_handler(handler);
        self
    }

    /// Execute the chain for an event and return the composed result.
    ///
    /// The most recently added handler runs first; the result is whatever
    /// the outermost executed callable returns. Execution does not mutate
    /// the chain. A panicking handler propagates to the caller unmodified.
    pub fn execute(&self, event: &T) -> R {
        (self.processor.as_ref())(event)
    }

    /// Number of handlers added to the chain.
    pub fn handler_count(&self) -> usize {
        self.handlers
    }
}

/// The zero-state chain: no explicit default processor.
///
/// The effective default processor of a `Chain::default()` returns
/// `R::default()`, so both [`execute`](Chain::execute) and any handler's
/// continuation yield `R`'s default value rather than an absent one. Chains
/// whose result type has no meaningful default should be built with
/// [`Chain::new`] instead, which makes an absent processor unrepresentable.
impl<T: 'static, R: Default + 'static> Default for Chain<T, R> {
    fn default() -> Self {
        Self::new(|_| R::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn default_processor_only() {
        let chain = Chain::new(|_: &i32| "default".to_string());
        assert_eq!(chain.execute(&0), "default");
    }

    #[test]
    fn handlers_execute_newest_first() {
        let mut chain = Chain::new(|_: &i32| "default".to_string());
        let log = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&log);
        chain.add_handler(move |event, next| {
            sink.borrow_mut().push(*event);
            format!("handler1-{}", next(event))
        });
        let sink = Rc::clone(&log);
        chain.add_handler(move |event, next| {
            let result = format!("handler2-{}", next(event));
            sink.borrow_mut().push(*event * 10);
            sink.borrow_mut().push(*event * 100);
            result
        });

        assert_eq!(chain.execute(&1), "handler2-handler1-default");
        assert_eq!(*log.borrow(), vec![1, 10, 100]);
    }

    #[test]
    fn short_circuit_skips_earlier_handlers_and_default() {
        let default_ran = Rc::new(RefCell::new(false));
        let inner_ran = Rc::new(RefCell::new(false));

        let ran = Rc::clone(&default_ran);
        let mut chain = Chain::new(move |n: &i32| {
            *ran.borrow_mut() = true;
            Ok(*n)
        });

        let ran = Rc::clone(&inner_ran);
        chain.add_handler(move |event, next| {
            *ran.borrow_mut() = true;
            next(event)
        });
        // Added last, runs first: rejects negative events without calling next.
        chain.add_handler(|event: &i32, next| {
            if *event < 0 {
                Err("negative event".to_string())
            } else {
                next(event)
            }
        });

        assert_eq!(chain.execute(&-1), Err("negative event".to_string()));
        assert!(!*default_ran.borrow());
        assert!(!*inner_ran.borrow());

        assert_eq!(chain.execute(&4), Ok(4));
        assert!(*default_ran.borrow());
        assert!(*inner_ran.borrow());
    }

    #[test]
    fn zero_state_chain_yields_default_value() {
        let chain = Chain::<i32, i32>::default();
        assert_eq!(chain.execute(&5), 0);

        let chain = Chain::<i32, String>::default();
        assert_eq!(chain.execute(&5), "");
    }

    #[test]
    fn continuation_of_zero_state_chain_yields_default_value() {
        let mut chain = Chain::<i32, i32>::default();
        chain.add_handler(|event, next| next(event) + 1);
        assert_eq!(chain.execute(&5), 1);
    }

    #[test]
    fn continuation_may_run_more_than_once() {
        let mut chain = Chain::new(|n: &i32| *n);
        chain.add_handler(|event, next| next(event) + next(event));
        assert_eq!(chain.execute(&3), 6);
    }

    #[test]
    fn execute_does_not_mutate_the_chain() {
        let mut chain = Chain::new(|n: &i32| n * 2);
        chain.add_handler(|event, next| next(event) + 1);

        let first = chain.execute(&10);
        let second = chain.execute(&10);
        assert_eq!(first, 21);
        assert_eq!(first, second);
        assert_eq!(chain.handler_count(), 1);
    }

    #[test]
    fn handlers_compose_across_executions() {
        let mut chain = Chain::new(|n: &i32| *n);
        assert_eq!(chain.execute(&2), 2);

        chain.add_handler(|event, next| next(event) * 10);
        assert_eq!(chain.execute(&2), 20);

        chain.add_handler(|event, next| next(event) + 1);
        assert_eq!(chain.execute(&2), 21);
        assert_eq!(chain.handler_count(), 2);
    }
}
