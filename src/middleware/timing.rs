use crate::core::chain::Next;
use std::time::{Duration, Instant};

/// Handler that measures and logs chain execution time
///
/// # Example
///
/// ```
/// use eventkit::Chain;
/// use eventkit::middleware::timing::TimingHandler;
/// use std::time::Duration;
///
/// // Log every execution
/// let chain = Chain::new(|n: &i32| *n)
///     .with_handler(TimingHandler::new("pipeline").into_handler());
///
/// // Only log slow executions (> 100ms)
/// let chain = Chain::new(|n: &i32| *n)
///     .with_handler(
///         TimingHandler::new("pipeline")
///             .with_threshold(Duration::from_millis(100))
///             .into_handler(),
///     );
/// # chain.execute(&1);
/// ```
pub struct TimingHandler {
    label: String,
    threshold: Option<Duration>,
}

impl TimingHandler {
    /// Create a timing handler that logs every execution's duration
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            threshold: None,
        }
    }

    /// Only log executions that take longer than the specified threshold
    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = Some(threshold);
        self
    }

    fn should_log(&self, duration: Duration) -> bool {
        match self.threshold {
            Some(threshold) => duration >= threshold,
            None => true,
        }
    }

    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();
        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }

    /// Consume the builder, producing a chain handler
    pub fn into_handler<T, R>(self) -> impl Fn(&T, Next<'_, T, R>) -> R {
        move |event, next| {
            let start = Instant::now();
            let result = next(event);
            let duration = start.elapsed();

            if self.should_log(duration) {
                println!("{} took {}", self.label, Self::format_duration(duration));
            }

            result
        }
    }
}
