use crate::core::chain::Next;
use std::fmt::Debug;

/// Logging levels for the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Handler that logs chain execution with configurable log levels
///
/// Incoming events are logged at debug level, produced results at info
/// level; both sides can be toggled independently. Logging wraps the
/// continuation, so add this handler last to observe the whole pipeline.
///
/// # Example
///
/// ```
/// use eventkit::Chain;
/// use eventkit::middleware::logging::{LoggingHandler, LogLevel};
///
/// let chain = Chain::new(|n: &i32| n * 2)
///     .with_handler(LoggingHandler::new("doubler").into_handler());
///
/// assert_eq!(chain.execute(&21), 42);
/// ```
pub struct LoggingHandler {
    level: LogLevel,
    label: String,
    log_input: bool,
    log_output: bool,
}

impl LoggingHandler {
    /// Create a logging handler at info level with the given pipeline label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            label: label.into(),
            log_input: true,
            log_output: true,
        }
    }

    /// Create a logging handler at debug level
    pub fn debug(label: impl Into<String>) -> Self {
        Self::new(label).with_level(LogLevel::Debug)
    }

    /// Set the minimum level this handler emits at
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Configure whether incoming events are logged
    pub fn with_input_logging(mut self, enabled: bool) -> Self {
        self.log_input = enabled;
        self
    }

    /// Configure whether produced results are logged
    pub fn with_output_logging(mut self, enabled: bool) -> Self {
        self.log_output = enabled;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level as u8 >= self.level as u8
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }
        let prefix = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        println!("[{}] {}: {}", prefix, self.label, message);
    }

    /// Consume the builder, producing a chain handler
    pub fn into_handler<T, R>(self) -> impl Fn(&T, Next<'_, T, R>) -> R
    where
        T: Debug,
        R: Debug,
    {
        move |event, next| {
            if self.log_input {
                self.log(LogLevel::Debug, &format!("processing {:?}", event));
            }
            let result = next(event);
            if self.log_output {
                self.log(LogLevel::Info, &format!("produced {:?}", result));
            }
            result
        }
    }
}

impl Default for LoggingHandler {
    fn default() -> Self {
        Self::new("chain")
    }
}
