use crate::catalog::{CARD_IMAGES, CARDS_DIR, DownloadEntry, EXTRA_IMAGES, IMAGES_DIR};
use crate::error::EntryError;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    Cards,
    Extras,
}

impl TableKind {
    pub fn describe(self) -> &'static str {
        match self {
            TableKind::Cards => "card images",
            TableKind::Extras => "additional images",
        }
    }
}

/// An ordered list of entries sharing one destination directory.
#[derive(Clone, Debug)]
pub struct EntryTable {
    pub kind: TableKind,
    pub destination: PathBuf,
    pub entries: Vec<DownloadEntry>,
}

impl EntryTable {
    pub fn new(kind: TableKind, destination: impl Into<PathBuf>, entries: Vec<DownloadEntry>) -> Self {
        Self {
            kind,
            destination: destination.into(),
            entries,
        }
    }

    /// The built-in batch: every card, then the extras.
    pub fn builtin() -> Vec<EntryTable> {
        vec![
            EntryTable::new(TableKind::Cards, CARDS_DIR, CARD_IMAGES.to_vec()),
            EntryTable::new(TableKind::Extras, IMAGES_DIR, EXTRA_IMAGES.to_vec()),
        ]
    }
}

/// Fixed wait inserted after each successful download of one table kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingPolicy {
    pub delay: Duration,
    pub applies_to: TableKind,
}

impl PacingPolicy {
    pub fn cards(delay: Duration) -> Self {
        Self {
            delay,
            applies_to: TableKind::Cards,
        }
    }

    pub fn none() -> Self {
        Self::cards(Duration::ZERO)
    }

    pub fn delay_after(&self, outcome: &EntryOutcome) -> Option<Duration> {
        match outcome {
            EntryOutcome::Downloaded { kind, .. }
                if *kind == self.applies_to && !self.delay.is_zero() =>
            {
                Some(self.delay)
            }
            _ => None,
        }
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self::cards(Duration::from_millis(300))
    }
}

#[derive(Debug)]
pub enum EntryOutcome {
    Downloaded {
        kind: TableKind,
        filename: String,
        path: PathBuf,
        bytes: usize,
    },
    Failed {
        kind: TableKind,
        filename: String,
        reason: EntryError,
    },
}

impl EntryOutcome {
    pub fn filename(&self) -> &str {
        match self {
            EntryOutcome::Downloaded { filename, .. } | EntryOutcome::Failed { filename, .. } => {
                filename
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EntryOutcome::Downloaded { .. })
    }
}

/// Outcomes of one run, in the order the entries were attempted.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<EntryOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "success={}, failed={}", self.succeeded(), self.failed())
    }
}
