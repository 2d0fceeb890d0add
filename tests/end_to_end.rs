//! Full-suite runs against the mock API.

use api_smoke::{CheckContext, Runner};

mod common;

use common::{config_for, spawn_mock_api, Behavior};

#[tokio::test]
async fn test_healthy_backend_passes_every_check() {
    let addr = spawn_mock_api(Behavior::healthy()).await;
    let ctx = CheckContext::new(config_for(addr)).unwrap();

    let runner = Runner::standard();
    assert_eq!(runner.len(), 13);

    let tally = runner.run(&ctx).await;

    assert_eq!(tally.failures, Vec::<String>::new());
    assert_eq!(tally.total, 13);
    assert_eq!(tally.passed, 13);
    assert_eq!(tally.failed, 0);
    assert!(tally.is_balanced());
    assert_eq!(tally.status_code(), 0);
}

#[tokio::test]
async fn test_open_protected_resource_fails_run() {
    let behavior = Behavior {
        groups_status: 200,
        ..Behavior::healthy()
    };
    let addr = spawn_mock_api(behavior).await;
    let ctx = CheckContext::new(config_for(addr)).unwrap();

    let tally = Runner::standard().run(&ctx).await;

    assert_eq!(tally.total, 13);
    assert_eq!(tally.failed, 1);
    assert_eq!(tally.passed, 12);
    assert_eq!(tally.failures.len(), 1);
    assert!(
        tally.failures[0].contains("Groups endpoint"),
        "unexpected failure entry: {}",
        tally.failures[0]
    );
    assert_eq!(tally.status_code(), 1);
}

#[tokio::test]
async fn test_unreachable_backend_runs_every_check() {
    let addr = common::closed_addr().await;
    let ctx = CheckContext::new(config_for(addr)).unwrap();

    let tally = Runner::standard().run(&ctx).await;

    // No short-circuiting: every check is attempted and recorded.
    assert_eq!(tally.total, 13);
    assert_eq!(tally.failed, 13);
    assert!(tally.is_balanced());
    assert!(tally.failures[0].starts_with("Backend Health Check - Connection error"));
    assert_eq!(tally.status_code(), 1);
}
