//! End-to-end coverage of the two primitives composed: a chain that
//! validates and processes events, fanning results out to observers.

use eventkit::{Chain, Notifier};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    quantity: i32,
}

#[test]
fn chain_results_fan_out_to_observers() {
    let chain: Chain<Order, Result<String, String>> =
        Chain::new(|order: &Order| Ok(format!("order {} accepted", order.id)))
            // Runs first: rejects invalid quantities before any processing.
            .with_handler(|order: &Order, next| {
                if order.quantity <= 0 {
                    Err(format!("order {} has invalid quantity", order.id))
                } else {
                    next(order)
                }
            });

    let audit_log = Rc::new(RefCell::new(Vec::new()));
    let alerts = Rc::new(RefCell::new(Vec::new()));
    let mut notifier = Notifier::new();

    let sink = Rc::clone(&audit_log);
    notifier.subscribe(move |outcome: &Result<String, String>| {
        sink.borrow_mut().push(outcome.clone());
    });
    let sink = Rc::clone(&alerts);
    notifier.subscribe(move |outcome: &Result<String, String>| {
        if let Err(reason) = outcome {
            sink.borrow_mut().push(reason.clone());
        }
    });

    for order in [
        Order { id: 1, quantity: 3 },
        Order { id: 2, quantity: 0 },
        Order { id: 3, quantity: 7 },
    ] {
        notifier.notify(&chain.execute(&order));
    }

    assert_eq!(
        *audit_log.borrow(),
        vec![
            Ok("order 1 accepted".to_string()),
            Err("order 2 has invalid quantity".to_string()),
            Ok("order 3 accepted".to_string()),
        ]
    );
    assert_eq!(
        *alerts.borrow(),
        vec!["order 2 has invalid quantity".to_string()]
    );
}

#[test]
fn wrapping_handlers_stack_newest_outermost() {
    let invocations = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&invocations);
    let mut chain = Chain::new(move |_: &i32| {
        log.borrow_mut().push("default");
        "default".to_string()
    });

    for (name, prefix) in [("h1", "handler1-"), ("h2", "handler2-"), ("h3", "handler3-")] {
        let log = Rc::clone(&invocations);
        chain.add_handler(move |event, next| {
            log.borrow_mut().push(name);
            format!("{prefix}{}", next(event))
        });
    }

    assert_eq!(chain.execute(&1), "handler3-handler2-handler1-default");
    assert_eq!(*invocations.borrow(), vec!["h3", "h2", "h1", "default"]);
    assert_eq!(chain.handler_count(), 3);
}
