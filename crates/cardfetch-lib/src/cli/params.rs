use crate::config::HttpSettings;
use crate::download::{EntryTable, PacingPolicy};

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub tables: Vec<EntryTable>,
    pub pacing: PacingPolicy,
    pub http: HttpSettings,
}
