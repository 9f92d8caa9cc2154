#[allow(clippy::module_inception)]
mod download;
mod fetcher;
mod types;

pub use download::{download_all, ensure_directories, validate_tables};
pub use fetcher::{Fetcher, HttpFetcher};
pub use types::{BatchReport, EntryOutcome, EntryTable, PacingPolicy, TableKind};
