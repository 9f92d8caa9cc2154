use assert_fs::prelude::*;
use cardfetch_e2e_tests::{
    ImageServer, create_test_http_settings, create_test_tables, spawn_image_server,
};
use cardfetch_lib::cli::{FetchParams, run_fetch_until};
use cardfetch_lib::download::{EntryOutcome, PacingPolicy};
use cardfetch_lib::error::{CardFetchError, EntryError};
use predicates::prelude::*;
use std::time::Duration;

const ALL_IMAGES: &[(&str, &str)] = &[
    ("/1.png", "card one"),
    ("/2.png", "card two"),
    ("/logo.png", "logo"),
];

fn build_params(server: &ImageServer, root: &assert_fs::TempDir, timeout_secs: u64) -> FetchParams {
    FetchParams {
        tables: create_test_tables(server, root.path()),
        pacing: PacingPolicy::cards(Duration::from_millis(10)),
        http: create_test_http_settings(timeout_secs),
    }
}

fn never() -> std::future::Pending<()> {
    std::future::pending()
}

#[tokio::test]
async fn test_all_downloads_succeed() {
    init_tracing();

    let server = spawn_image_server(ALL_IMAGES, &[])
        .await
        .expect("Failed to start image server");
    let root = assert_fs::TempDir::new().unwrap();

    let report = run_fetch_until(build_params(&server, &root, 5), never())
        .await
        .expect("Batch should complete");

    assert_eq!(report.to_string(), "success=3, failed=0");
    root.child("public/images/cards/card-1.png").assert("card one");
    root.child("public/images/cards/card-2.png").assert("card two");
    root.child("public/images/logo.png").assert("logo");
    assert_eq!(
        server.requests(),
        vec!["/1.png", "/2.png", "/logo.png"],
        "Entries should be fetched in table order, cards first"
    );
}

#[tokio::test]
async fn test_missing_image_is_counted_and_skipped() {
    init_tracing();

    let server = spawn_image_server(&[("/1.png", "card one"), ("/logo.png", "logo")], &[])
        .await
        .expect("Failed to start image server");
    let root = assert_fs::TempDir::new().unwrap();

    let report = run_fetch_until(build_params(&server, &root, 5), never())
        .await
        .expect("Partial failure should not be fatal");

    assert_eq!(report.to_string(), "success=2, failed=1");
    root.child("public/images/cards/card-2.png")
        .assert(predicate::path::missing());
    root.child("public/images/cards/card-2.png.part")
        .assert(predicate::path::missing());
    root.child("public/images/logo.png").assert("logo");

    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].filename(), "card-2.png");
    assert!(
        matches!(
            failed[0],
            EntryOutcome::Failed {
                reason: EntryError::Status { status: 404, .. },
                ..
            }
        ),
        "Unexpected outcome: {:?}",
        failed[0]
    );
}

#[tokio::test]
async fn test_second_run_overwrites_with_same_result() {
    init_tracing();

    let server = spawn_image_server(ALL_IMAGES, &[])
        .await
        .expect("Failed to start image server");
    let root = assert_fs::TempDir::new().unwrap();
    root.child("public/images/logo.png")
        .write_str("outdated logo")
        .unwrap();

    let first = run_fetch_until(build_params(&server, &root, 5), never())
        .await
        .expect("First run should complete");
    let second = run_fetch_until(build_params(&server, &root, 5), never())
        .await
        .expect("Second run should complete");

    assert_eq!(first.to_string(), second.to_string());
    root.child("public/images/logo.png").assert("logo");
    root.child("public/images/cards/card-1.png").assert("card one");
    assert_eq!(server.requests().len(), 6);
}

#[tokio::test]
async fn test_cancellation_after_first_download() {
    init_tracing();

    let server = spawn_image_server(ALL_IMAGES, &["/2.png"])
        .await
        .expect("Failed to start image server");
    let root = assert_fs::TempDir::new().unwrap();

    let result = run_fetch_until(
        build_params(&server, &root, 30),
        server.wait_for_requests(2),
    )
    .await;

    assert!(
        matches!(result, Err(CardFetchError::Cancelled)),
        "Expected cancellation, got {:?}",
        result
    );
    assert_eq!(
        CardFetchError::Cancelled.to_string(),
        "Download cancelled by user"
    );
    root.child("public/images/cards/card-1.png").assert("card one");
    root.child("public/images/cards/card-2.png")
        .assert(predicate::path::missing());
    root.child("public/images/logo.png")
        .assert(predicate::path::missing());
    assert_eq!(server.requests(), vec!["/1.png", "/2.png"]);
}

#[tokio::test]
async fn test_hanging_request_times_out_without_blocking_batch() {
    init_tracing();

    let server = spawn_image_server(ALL_IMAGES, &["/2.png"])
        .await
        .expect("Failed to start image server");
    let root = assert_fs::TempDir::new().unwrap();

    let report = run_fetch_until(build_params(&server, &root, 1), never())
        .await
        .expect("A timed out entry should not be fatal");

    assert_eq!(report.to_string(), "success=2, failed=1");
    assert!(matches!(
        report.outcomes()[1],
        EntryOutcome::Failed {
            reason: EntryError::Request(_),
            ..
        }
    ));
    root.child("public/images/logo.png").assert("logo");
}

#[tokio::test]
async fn test_unwritable_destination_is_fatal() {
    init_tracing();

    let server = spawn_image_server(ALL_IMAGES, &[])
        .await
        .expect("Failed to start image server");
    let root = assert_fs::TempDir::new().unwrap();
    root.child("public/images").write_str("a file, not a directory").unwrap();

    let result = run_fetch_until(build_params(&server, &root, 5), never()).await;

    assert!(
        matches!(result, Err(CardFetchError::DirectoryCreation { .. })),
        "Expected directory creation failure, got {:?}",
        result
    );
    assert!(server.requests().is_empty(), "Nothing should be fetched");
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("cardfetch_lib=debug,cardfetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
