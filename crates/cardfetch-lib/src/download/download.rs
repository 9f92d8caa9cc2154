use super::fetcher::Fetcher;
use super::types::{BatchReport, EntryOutcome, EntryTable, PacingPolicy, TableKind};
use crate::catalog::{card_number, validate_entries};
use crate::error::{CardFetchError, EntryError};
use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tracing::{info, warn};

pub fn validate_tables(tables: &[EntryTable]) -> Result<(), CardFetchError> {
    for table in tables {
        validate_entries(&table.entries).map_err(|details| CardFetchError::CatalogValidation {
            details: format!("{} table: {}", table.kind.describe(), details),
        })?;
    }
    Ok(())
}

/// Creates every destination directory. Existing directories are left alone.
pub async fn ensure_directories(tables: &[EntryTable]) -> Result<(), CardFetchError> {
    for table in tables {
        tracing::debug!(path = %table.destination.display(), "Ensuring directory exists");
        tokio::fs::create_dir_all(&table.destination)
            .await
            .map_err(|e| CardFetchError::DirectoryCreation {
                path: table.destination.clone(),
                reason: e.to_string(),
            })?;
    }
    Ok(())
}

/// Downloads every entry of every table, strictly in order.
///
/// Per-entry failures are recorded in the returned report and never abort the
/// batch. When `cancel` resolves, the in-flight request or pacing sleep is
/// abandoned and [`CardFetchError::Cancelled`] is returned. A signal arriving
/// while a body is being written is noticed once the write completes, so the
/// last entry cannot swallow it. Files already written stay on disk.
pub async fn download_all<F: Fetcher>(
    fetcher: &F,
    tables: &[EntryTable],
    pacing: &PacingPolicy,
    cancel: impl Future<Output = ()>,
) -> Result<BatchReport, CardFetchError> {
    tokio::pin!(cancel);
    let mut report = BatchReport::default();

    for table in tables {
        info!("Downloading {} {}...", table.entries.len(), table.kind.describe());

        for entry in &table.entries {
            let output_path = table.destination.join(&*entry.filename);
            tracing::debug!(
                file = %entry.filename,
                url = %entry.source_url,
                output = %output_path.display(),
                "Downloading"
            );

            let fetched = tokio::select! {
                biased;
                _ = &mut cancel => return Err(CardFetchError::Cancelled),
                fetched = fetcher.fetch(&entry.source_url) => fetched,
            };

            let saved = match fetched {
                Ok(body) => save_body(&output_path, &body).await.map(|()| body.len()),
                Err(e) => Err(e),
            };

            if is_resolved(cancel.as_mut()).await {
                return Err(CardFetchError::Cancelled);
            }

            let outcome = match saved {
                Ok(bytes) => {
                    match table.kind {
                        TableKind::Cards => info!("Card {} downloaded", card_number(&entry.filename)),
                        TableKind::Extras => info!("{} downloaded", entry.filename),
                    }
                    EntryOutcome::Downloaded {
                        kind: table.kind,
                        filename: entry.filename.to_string(),
                        path: output_path,
                        bytes,
                    }
                }
                Err(reason) => {
                    warn!("Error downloading {}: {}", entry.filename, reason);
                    EntryOutcome::Failed {
                        kind: table.kind,
                        filename: entry.filename.to_string(),
                        reason,
                    }
                }
            };

            let delay = pacing.delay_after(&outcome);
            report.push(outcome);

            if let Some(delay) = delay {
                tokio::select! {
                    biased;
                    _ = &mut cancel => return Err(CardFetchError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        }
    }

    Ok(report)
}

/// Polls `future` once without waiting for it.
async fn is_resolved(future: Pin<&mut impl Future<Output = ()>>) -> bool {
    tokio::select! {
        biased;
        _ = future => true,
        _ = std::future::ready(()) => false,
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

/// Writes next to the destination first and renames over it, so a failed write
/// never leaves a truncated file at `path`.
async fn save_body(path: &Path, body: &[u8]) -> Result<(), EntryError> {
    let write_error = |source| EntryError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }

    let partial = partial_path(path);
    let result = match tokio::fs::write(&partial, body).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
            tracing::trace!(path = %partial.display(), "No partial file to remove: {}", cleanup);
        }
        return Err(write_error(e));
    }
    Ok(())
}
