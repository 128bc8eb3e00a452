/// Fan-out broadcaster that delivers each event to every subscribed observer.
///
/// Observers are plain closures taking the event by reference. They are
/// invoked synchronously on the caller's stack, in subscription order, once
/// per [`notify`](Notifier::notify) call. Duplicate subscriptions are kept
/// and invoked once each.
///
/// Delivery order matches subscription order in this implementation, but
/// callers should treat the order as unspecified and not build logic on it.
///
/// A panicking observer propagates to the caller of `notify` and skips the
/// remaining observers for that call; the notifier does not catch or
/// isolate observer failures.
///
/// `Notifier` has no internal synchronization. For cross-thread use see the
/// `sync` feature.
///
/// # Example
///
/// ```
/// use eventkit::Notifier;
///
/// let mut notifier = Notifier::new();
/// notifier.subscribe(|event: &String| println!("observer 1 received: {event}"));
/// notifier.subscribe(|event: &String| println!("observer 2 received: {event}"));
/// notifier.notify(&"Hello!".to_string());
/// ```
pub struct Notifier<T> {
    observers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Notifier<T> {
    /// Create a notifier with no observers.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to be notified of events.
    ///
    /// Observers are appended; there is no deduplication and no way to
    /// unsubscribe. `FnMut` is accepted so an observer may carry its own
    /// state (counters, buffers).
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: FnMut(&T) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Notify all subscribed observers of an event.
    pub fn notify(&mut self, event: &T) {
        for observer in &mut self.observers {
            observer(event);
        }
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fan_out_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();

        let sink = Rc::clone(&log);
        notifier.subscribe(move |event: &i32| sink.borrow_mut().push(*event));
        let sink = Rc::clone(&log);
        notifier.subscribe(move |event: &i32| sink.borrow_mut().push(*event + 1));

        notifier.notify(&1);
        notifier.notify(&10);

        assert_eq!(*log.borrow(), vec![1, 2, 10, 11]);
    }

    #[test]
    fn duplicate_observers_are_kept() {
        let hits = Rc::new(RefCell::new(0));
        let mut notifier = Notifier::new();

        for _ in 0..2 {
            let hits = Rc::clone(&hits);
            notifier.subscribe(move |_: &()| *hits.borrow_mut() += 1);
        }

        notifier.notify(&());
        assert_eq!(notifier.observer_count(), 2);
        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn notify_without_observers_is_a_no_op() {
        let mut notifier: Notifier<i32> = Notifier::new();
        notifier.notify(&42);
    }

    #[test]
    fn stateful_observer() {
        let mut seen = 0u32;
        let total = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&total);
        let mut notifier = Notifier::new();

        notifier.subscribe(move |event: &u32| {
            seen += 1;
            *sink.borrow_mut() = seen * 100 + event;
        });

        notifier.notify(&7);
        notifier.notify(&7);
        assert_eq!(*total.borrow(), 207);
    }
}
