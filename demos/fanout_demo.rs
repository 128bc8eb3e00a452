/// Fan-out and chain basics: subscribe observers, layer handlers,
/// short-circuit on invalid input.
///
/// Run with: cargo run --example fanout_demo
use eventkit::{Chain, Notifier};

fn main() {
    println!("=== Notifier: fan-out ===\n");

    let mut notifier = Notifier::new();
    notifier.subscribe(|event: &String| println!("Observer 1 received: {event}"));
    notifier.subscribe(|event: &String| println!("Observer 2 received: {event}"));
    notifier.notify(&"Hello!".to_string());

    println!("\n=== Chain: LIFO handlers ===\n");

    let mut chain = Chain::new(|n: &i32| {
        println!("Default processing of {n}");
        true
    });

    // Added first, runs last: post-processing around the default processor.
    chain.add_handler(|event, next| {
        if !next(event) {
            return false;
        }
        println!("Further processing of {event}");
        true
    });

    // Added last, runs first: validation short-circuits negative events.
    chain.add_handler(|event: &i32, next| {
        if *event < 0 {
            println!("Invalid event {event}");
            return false;
        }
        next(event)
    });

    let accepted = chain.execute(&1);
    println!("Event 1 -> {accepted}");
    println!();
    let rejected = chain.execute(&-1);
    println!("Event -1 -> {rejected}");

    assert!(accepted);
    assert!(!rejected);
    println!("\nDone.");
}
