use crate::core::chain::Next;
use hashbrown::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Execution statistics for a single labeled pipeline
#[derive(Debug, Clone)]
pub struct ChainMetrics {
    pub label: String,
    pub executions: u64,
    pub total_duration_micros: u64,
    pub min_duration_micros: u64,
    pub max_duration_micros: u64,
}

impl ChainMetrics {
    fn new(label: String) -> Self {
        Self {
            label,
            executions: 0,
            total_duration_micros: 0,
            min_duration_micros: u64::MAX,
            max_duration_micros: 0,
        }
    }

    fn record(&mut self, duration_micros: u64) {
        self.executions += 1;
        self.total_duration_micros += duration_micros;
        self.min_duration_micros = self.min_duration_micros.min(duration_micros);
        self.max_duration_micros = self.max_duration_micros.max(duration_micros);
    }

    /// Get the average execution time in microseconds
    pub fn avg_duration_micros(&self) -> u64 {
        if self.executions == 0 {
            0
        } else {
            self.total_duration_micros / self.executions
        }
    }
}

/// Shared storage for [`ChainMetrics`], keyed by pipeline label
///
/// Cloning is cheap and every clone reads the same underlying map, so a
/// registry handed to a [`MetricsHandler`] stays queryable after the handler
/// has been moved into a chain.
#[derive(Clone)]
pub struct MetricsRegistry {
    metrics: Arc<Mutex<HashMap<String, ChainMetrics>>>,
}

impl MetricsRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get metrics for a specific pipeline label
    pub fn get(&self, label: &str) -> Option<ChainMetrics> {
        self.metrics.lock().ok()?.get(label).cloned()
    }

    /// Get all collected metrics
    pub fn all(&self) -> Vec<ChainMetrics> {
        self.metrics
            .lock()
            .ok()
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Reset all metrics
    pub fn reset(&self) {
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.clear();
        }
    }

    /// Print a summary of all metrics to stdout
    pub fn print_summary(&self) {
        let Ok(metrics) = self.metrics.lock() else {
            eprintln!("Warning: Could not acquire metrics lock for printing");
            return;
        };

        println!("\n=== Chain Metrics Summary ===");
        println!(
            "{:<25} {:>10} {:>12} {:>12} {:>12}",
            "Pipeline", "Total", "Avg (µs)", "Min (µs)", "Max (µs)"
        );
        println!("{}", "-".repeat(75));

        let mut sorted: Vec<_> = metrics.values().collect();
        sorted.sort_by(|a, b| a.label.cmp(&b.label));

        for metric in sorted {
            println!(
                "{:<25} {:>10} {:>12} {:>12} {:>12}",
                metric.label,
                metric.executions,
                metric.avg_duration_micros(),
                metric.min_duration_micros,
                metric.max_duration_micros
            );
        }
        println!();
    }

    fn record(&self, label: &str, duration_micros: u64) {
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics
                .entry(label.to_string())
                .or_insert_with(|| ChainMetrics::new(label.to_string()))
                .record(duration_micros);
        }
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler that records execution counts and durations for a pipeline
///
/// # Example
///
/// ```
/// use eventkit::Chain;
/// use eventkit::middleware::metrics::MetricsHandler;
///
/// let handler = MetricsHandler::new("orders");
/// let registry = handler.registry();
///
/// let chain = Chain::new(|n: &i32| n * 2).with_handler(handler.into_handler());
/// chain.execute(&1);
/// chain.execute(&2);
///
/// let stats = registry.get("orders").unwrap();
/// assert_eq!(stats.executions, 2);
/// ```
pub struct MetricsHandler {
    label: String,
    registry: MetricsRegistry,
}

impl MetricsHandler {
    /// Create a metrics handler with its own fresh registry
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_registry(label, MetricsRegistry::new())
    }

    /// Create a metrics handler recording into an existing registry,
    /// so several chains can share one summary
    pub fn with_registry(label: impl Into<String>, registry: MetricsRegistry) -> Self {
        Self {
            label: label.into(),
            registry,
        }
    }

    /// A handle to this handler's registry for later queries
    pub fn registry(&self) -> MetricsRegistry {
        self.registry.clone()
    }

    /// Consume the builder, producing a chain handler
    pub fn into_handler<T, R>(self) -> impl Fn(&T, Next<'_, T, R>) -> R {
        move |event, next| {
            let start = Instant::now();
            let result = next(event);
            self.registry
                .record(&self.label, start.elapsed().as_micros() as u64);
            result
        }
    }
}
