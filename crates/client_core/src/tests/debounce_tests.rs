use super::*;

#[tokio::test]
async fn only_the_latest_scheduled_check_runs() {
    let validator = DebouncedValidator::new(Duration::from_millis(20));
    let mut outcomes = validator.subscribe();

    // the first schedule would fail validation; the second supersedes it
    validator.schedule(InputMode::LinearOrders, 4, "12");
    validator.schedule(InputMode::LinearOrders, 4, "1234");

    outcomes.changed().await.expect("outcome published");
    assert!(outcomes.borrow().is_valid());

    // the superseded check never publishes
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!outcomes.has_changed().expect("channel open"));
}

#[tokio::test]
async fn nothing_is_published_before_the_quiescence_delay() {
    let validator = DebouncedValidator::new(Duration::from_millis(50));
    let outcomes = validator.subscribe();

    validator.schedule(InputMode::LinearOrders, 4, "12");

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!outcomes.has_changed().expect("channel open"));

    tokio::time::sleep(Duration::from_millis(90)).await;
    assert!(outcomes.has_changed().expect("channel open"));
}

#[tokio::test]
async fn failing_outcome_carries_the_inline_message() {
    let validator = DebouncedValidator::new(Duration::from_millis(10));
    let mut outcomes = validator.subscribe();

    validator.schedule(InputMode::Poset, 4, "1,a");

    outcomes.changed().await.expect("outcome published");
    let outcome = outcomes.borrow().clone();
    assert!(outcome.message().expect("message").contains("'1,a'"));
}
