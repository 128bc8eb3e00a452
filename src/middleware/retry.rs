use crate::core::chain::Next;
use std::time::Duration;

/// Backoff strategy for retry attempts
#[derive(Debug, Clone, Copy)]
pub enum BackoffStrategy {
    /// No delay between retries
    None,
    /// Fixed delay between retries
    Fixed(Duration),
    /// Exponential backoff: delay doubles after each retry
    Exponential { initial: Duration, max: Duration },
    /// Linear backoff: delay increases by a fixed amount
    Linear {
        initial: Duration,
        increment: Duration,
    },
}

/// Handler that re-runs its continuation while a predicate deems the result
/// retryable
///
/// The chain contract places no restriction on how often a handler invokes
/// its continuation; this handler leans on that to call `next` up to
/// `max_attempts` times. What counts as "failed" is up to the caller: the
/// predicate passed to [`into_handler`](RetryHandler::into_handler) inspects
/// each result, and the last result is returned once it passes or attempts
/// run out.
///
/// Handlers added *before* this one (closer to the default processor) run
/// again on every attempt; place retry close to the work it should repeat.
///
/// # Example
///
/// ```
/// use eventkit::Chain;
/// use eventkit::middleware::retry::{BackoffStrategy, RetryHandler};
/// use std::time::Duration;
///
/// // Retry flaky processing up to 3 times with a fixed delay.
/// let chain: Chain<u32, Result<u32, String>> =
///     Chain::new(|n: &u32| Ok(n * 2)).with_handler(
///         RetryHandler::fixed(3, Duration::from_millis(1))
///             .with_logging(false)
///             .into_handler(|result: &Result<u32, String>| result.is_err()),
///     );
///
/// assert_eq!(chain.execute(&21), Ok(42));
/// ```
pub struct RetryHandler {
    max_attempts: usize,
    backoff: BackoffStrategy,
    log_retries: bool,
}

impl RetryHandler {
    /// Create a retry handler with the specified maximum number of attempts
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            backoff: BackoffStrategy::None,
            log_retries: true,
        }
    }

    /// Set the backoff strategy
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Configure whether to log retry attempts
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_retries = enabled;
        self
    }

    /// Create a retry handler with exponential backoff
    pub fn exponential(max_attempts: usize, initial: Duration, max: Duration) -> Self {
        Self::new(max_attempts).with_backoff(BackoffStrategy::Exponential { initial, max })
    }

    /// Create a retry handler with fixed delay
    pub fn fixed(max_attempts: usize, delay: Duration) -> Self {
        Self::new(max_attempts).with_backoff(BackoffStrategy::Fixed(delay))
    }

    fn calculate_delay(&self, attempt: usize) -> Duration {
        match self.backoff {
            BackoffStrategy::None => Duration::from_millis(0),
            BackoffStrategy::Fixed(delay) => delay,
            BackoffStrategy::Exponential { initial, max } => {
                let multiplier = 2u32.pow(attempt as u32 - 1);
                let delay = initial * multiplier;
                delay.min(max)
            }
            BackoffStrategy::Linear { initial, increment } => {
                initial + increment * (attempt as u32 - 1)
            }
        }
    }

    /// Consume the builder, producing a chain handler
    ///
    /// `should_retry` inspects each result; a `true` return triggers another
    /// attempt until `max_attempts` is reached.
    pub fn into_handler<T, R, P>(self, should_retry: P) -> impl Fn(&T, Next<'_, T, R>) -> R
    where
        P: Fn(&R) -> bool,
    {
        move |event, next| {
            let mut attempts = 0;

            loop {
                attempts += 1;
                let result = next(event);

                if !should_retry(&result) {
                    if attempts > 1 && self.log_retries {
                        println!("succeeded after {} attempts", attempts);
                    }
                    return result;
                }

                if attempts >= self.max_attempts {
                    if self.log_retries {
                        println!("giving up after {} attempts", attempts);
                    }
                    return result;
                }

                let delay = self.calculate_delay(attempts);
                if self.log_retries {
                    println!(
                        "attempt {}/{} failed, retrying{}",
                        attempts,
                        self.max_attempts,
                        if delay.is_zero() {
                            " immediately".to_string()
                        } else {
                            format!(" in {:?}", delay)
                        }
                    );
                }

                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
            }
        }
    }
}
