/// All ready-made handlers working together on one pipeline.
///
/// Run with: cargo run --example pipeline_demo --features middleware
use eventkit::Chain;
use eventkit::middleware::filter::reject_if;
use eventkit::middleware::logging::LoggingHandler;
use eventkit::middleware::metrics::MetricsHandler;
use eventkit::middleware::retry::RetryHandler;
use eventkit::middleware::timing::TimingHandler;
use std::sync::atomic::{AtomicU32, Ordering};

static ATTEMPTS: AtomicU32 = AtomicU32::new(0);

fn main() {
    println!("=== Pipeline demo: filter, retry, logging, timing, metrics ===\n");

    let metrics = MetricsHandler::new("payments");
    let registry = metrics.registry();

    // Default processor: flaky "payment gateway" that fails on its first
    // two calls, then succeeds.
    let mut chain: Chain<i32, Result<String, String>> = Chain::new(|amount: &i32| {
        let attempt = ATTEMPTS.fetch_add(1, Ordering::Relaxed) + 1;
        if attempt <= 2 {
            Err(format!("gateway timeout (attempt {attempt})"))
        } else {
            Ok(format!("charged {amount}"))
        }
    });

    // Innermost layers run last; infrastructure wraps everything.
    chain.add_handler(RetryHandler::new(3).into_handler(|result: &Result<String, String>| result.is_err()));
    chain.add_handler(reject_if(
        |amount: &i32| *amount <= 0,
        |amount| Err(format!("invalid amount {amount}")),
    ));
    chain.add_handler(LoggingHandler::new("payments").into_handler());
    chain.add_handler(TimingHandler::new("payments").into_handler());
    chain.add_handler(metrics.into_handler());

    println!("-- charging 100 (flaky gateway, retried) --");
    let result = chain.execute(&100);
    assert_eq!(result, Ok("charged 100".to_string()));

    println!("\n-- charging -5 (rejected before the gateway) --");
    let result = chain.execute(&-5);
    assert_eq!(result, Err("invalid amount -5".to_string()));
    // The rejected charge never reached the gateway.
    assert_eq!(ATTEMPTS.load(Ordering::Relaxed), 3);

    registry.print_summary();
    assert_eq!(registry.get("payments").unwrap().executions, 2);

    println!("Done.");
}
