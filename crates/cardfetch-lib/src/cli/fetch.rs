use crate::cli::FetchParams;
use crate::download::{BatchReport, HttpFetcher, download_all, ensure_directories};
use crate::error::CardFetchError;
use std::future::Future;
use tracing;

const RULE_WIDTH: usize = 50;

pub async fn run_fetch(params: FetchParams) -> Result<BatchReport, CardFetchError> {
    run_fetch_until(params, interrupted()).await
}

/// Like [`run_fetch`], stopping as soon as `cancel` resolves.
///
/// Fatal errors are logged with their operator-facing message before being
/// returned.
pub async fn run_fetch_until(
    params: FetchParams,
    cancel: impl Future<Output = ()>,
) -> Result<BatchReport, CardFetchError> {
    tracing::info!("JW Timeline - image downloader");
    tracing::info!("{}", "=".repeat(RULE_WIDTH));

    let report = fetch_batch(params, cancel)
        .await
        .inspect_err(|e| tracing::error!("{}", e.fatal_message()))?;

    tracing::info!("{}", "=".repeat(RULE_WIDTH));
    tracing::info!("Download completed: {}", report);
    tracing::info!("Succeeded: {}", report.succeeded());
    tracing::info!("Failed: {}", report.failed());
    for failure in report.failures() {
        tracing::debug!(file = failure.filename(), "Not downloaded");
    }
    tracing::warn!(
        "Card paths in data/cards.ts must now be updated. Run: python3 update_card_paths.py"
    );

    Ok(report)
}

async fn fetch_batch(
    params: FetchParams,
    cancel: impl Future<Output = ()>,
) -> Result<BatchReport, CardFetchError> {
    let FetchParams {
        tables,
        pacing,
        http,
    } = params;

    ensure_directories(&tables).await?;
    let fetcher = HttpFetcher::new(&http)?;
    download_all(&fetcher, &tables, &pacing, cancel).await
}

/// Resolves on Ctrl-C. If the handler cannot be installed it never resolves.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Unable to listen for Ctrl-C, cancellation disabled: {}", e);
        std::future::pending::<()>().await;
    }
}
