use crate::core::chain::Next;

/// Build a handler that short-circuits events matching a predicate.
///
/// When `predicate` returns `true` for an event, the continuation is never
/// invoked: every earlier-added handler and the default processor are
/// skipped, and `rejected` supplies the result. All other events pass
/// through untouched.
///
/// # Example
///
/// ```
/// use eventkit::Chain;
/// use eventkit::middleware::filter::reject_if;
///
/// let chain: Chain<i32, Result<i32, String>> = Chain::new(|n: &i32| Ok(n * 2))
///     .with_handler(reject_if(
///         |event: &i32| *event < 0,
///         |event| Err(format!("invalid event {event}")),
///     ));
///
/// assert_eq!(chain.execute(&4), Ok(8));
/// assert_eq!(chain.execute(&-1), Err("invalid event -1".to_string()));
/// ```
pub fn reject_if<T, R, P, F>(predicate: P, rejected: F) -> impl Fn(&T, Next<'_, T, R>) -> R
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> R,
{
    move |event, next| {
        if predicate(event) {
            rejected(event)
        } else {
            next(event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chain;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn rejected_events_never_reach_the_default_processor() {
        let processed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&processed);

        let chain = Chain::new(move |n: &i32| {
            counter.set(counter.get() + 1);
            Ok(*n)
        })
        .with_handler(reject_if(
            |event: &i32| *event < 0,
            |event| Err(format!("invalid event {event}")),
        ));

        assert_eq!(chain.execute(&-1), Err("invalid event -1".to_string()));
        assert_eq!(processed.get(), 0);

        assert_eq!(chain.execute(&5), Ok(5));
        assert_eq!(processed.get(), 1);
    }
}
