//! tests/api/word_frequency.rs
use crate::helpers::{refused_url, serve_one_response, CapturedLogs};
use claims::{assert_matches, assert_none, assert_some};
use std::time::Duration;
use tracing::instrument::WithSubscriber;
use tracing_subscriber::prelude::*;
use wordstat::configuration::{LogSettings, PoolSettings, ReportSettings, Settings, SourceSettings};
use wordstat::error::FetchError;
use wordstat::fetcher::TextFetcher;
use wordstat::startup::run_word_frequency;

const SCENARIO: &str = "the cat sat on the mat. The cat ran.";

fn settings_for(url: String) -> Settings {
    Settings {
        source: SourceSettings {
            url,
            timeout_seconds: 5,
        },
        report: ReportSettings { top_words: 10 },
        pool: PoolSettings { workers: 1 },
        log: LogSettings {
            directory: "/tmp/wordstat".to_string(),
            file_name_prefix: "test.log".to_string(),
        },
    }
}

fn fetcher() -> TextFetcher {
    TextFetcher::new(Duration::from_secs(5)).expect("Failed to build fetcher")
}

#[tokio::test]
async fn fetch_returns_the_body_on_success() {
    let url = serve_one_response("HTTP/1.1 200 OK", SCENARIO).await;

    let text = fetcher().fetch(&url).await.expect("Failed to fetch");

    assert_eq!(text, SCENARIO);
}

#[tokio::test]
async fn fetch_fails_on_a_non_success_status() {
    let url = serve_one_response("HTTP/1.1 500 Internal Server Error", "").await;

    let error = fetcher().fetch(&url).await.expect_err("Fetch should fail");

    assert_matches!(error, FetchError::Status { .. });
    if let FetchError::Status { status, .. } = error {
        assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[tokio::test]
async fn fetch_surfaces_an_unreachable_locator_as_absent_content() {
    let url = refused_url().await;

    assert_none!(fetcher().fetch_or_none(&url).await);
}

#[tokio::test]
async fn a_fetch_failure_emits_exactly_one_error_record() {
    let url = refused_url().await;
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(logs.clone()),
    );

    let result = fetcher()
        .fetch_or_none(&url)
        .with_subscriber(subscriber)
        .await;

    assert_none!(result);
    let output = logs.contents();
    let error_records = output.lines().filter(|line| line.contains("ERROR")).count();
    assert_eq!(error_records, 1, "captured logs:\n{output}");
    assert!(output.contains("Failed to fetch the source text"));
}

#[tokio::test]
async fn the_pipeline_halts_before_tokenization_on_fetch_failure() {
    let settings = settings_for(refused_url().await);

    let report = run_word_frequency(&settings)
        .await
        .expect("Startup should not error on a fetch failure");

    assert_none!(report);
}

#[tokio::test]
async fn the_full_run_reports_top_words_in_deterministic_order() {
    let settings = settings_for(serve_one_response("HTTP/1.1 200 OK", SCENARIO).await);

    let report = run_word_frequency(&settings)
        .await
        .expect("Failed to run word frequency");
    let report = assert_some!(report);

    // Count descending, ties lexicographic ascending; ASCII uppercase sorts
    // before lowercase, so "The" leads the count-1 group.
    let expected: Vec<(String, u64)> = [
        ("cat", 2),
        ("the", 2),
        ("The", 1),
        ("mat", 1),
        ("on", 1),
        ("ran", 1),
        ("sat", 1),
    ]
    .into_iter()
    .map(|(word, count)| (word.to_string(), count))
    .collect();
    assert_eq!(report, expected);
}

#[tokio::test]
async fn an_empty_source_text_yields_an_empty_report() {
    let settings = settings_for(serve_one_response("HTTP/1.1 200 OK", "").await);

    let report = run_word_frequency(&settings)
        .await
        .expect("Failed to run word frequency");

    assert_eq!(assert_some!(report), vec![]);
}
