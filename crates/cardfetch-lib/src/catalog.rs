//! Static tables of every image the game ships with.

use itertools::Itertools;
use std::borrow::Cow;
use std::path::{Component, Path};

/// Directory the card faces are written to.
pub const CARDS_DIR: &str = "public/images/cards";
/// Directory the remaining images are written to.
pub const IMAGES_DIR: &str = "public/images";

/// A single file to fetch: where it lives remotely and its name on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadEntry {
    /// Path relative to the destination directory
    pub filename: Cow<'static, str>,
    /// Absolute HTTP(S) URL
    pub source_url: Cow<'static, str>,
}

impl DownloadEntry {
    pub const fn new(filename: &'static str, source_url: &'static str) -> Self {
        Self {
            filename: Cow::Borrowed(filename),
            source_url: Cow::Borrowed(source_url),
        }
    }

    /// Entry built at runtime, e.g. pointing at a local test server.
    pub fn owned(filename: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            filename: Cow::Owned(filename.into()),
            source_url: Cow::Owned(source_url.into()),
        }
    }
}

pub static CARD_IMAGES: &[DownloadEntry] = &[
    DownloadEntry::new("card-1.png", "https://i.postimg.cc/dkGHH03k/JW-Timeline-1.png"),
    DownloadEntry::new("card-2.png", "https://i.postimg.cc/rRchvLRQ/JW-Timeline-2.png"),
    DownloadEntry::new("card-3.png", "https://i.postimg.cc/T5GkZX50/JW-Timeline-3.png"),
    DownloadEntry::new("card-4.png", "https://i.postimg.cc/8fHyGnLn/JW-Timeline-4.png"),
    DownloadEntry::new("card-5.png", "https://i.postimg.cc/JHqT8djf/JW-Timeline-5.png"),
    DownloadEntry::new("card-6.png", "https://i.postimg.cc/NLcBg91F/JW-Timeline-6.png"),
    DownloadEntry::new("card-7.png", "https://i.postimg.cc/Z0S4TBrr/JW-Timeline-7.png"),
    DownloadEntry::new("card-8.png", "https://i.postimg.cc/HjgdpcQN/JW-Timeline-8.png"),
    DownloadEntry::new("card-9.png", "https://i.postimg.cc/8smDspH4/JW-Timeline-9.png"),
    DownloadEntry::new("card-10.png", "https://i.postimg.cc/Yjzkjr3y/JW-Timeline-10.png"),
    DownloadEntry::new("card-11.png", "https://i.postimg.cc/QVJsV8mj/JW-Timeline-11.png"),
    DownloadEntry::new("card-12.png", "https://i.postimg.cc/w3QH3q2B/JW-Timeline-12.png"),
    DownloadEntry::new("card-13.png", "https://i.postimg.cc/HVWmyqvV/JW-Timeline-13.png"),
    DownloadEntry::new("card-14.png", "https://i.postimg.cc/tYRbxKvP/JW-Timeline-14.png"),
    DownloadEntry::new("card-15.png", "https://i.postimg.cc/kBMCb0YF/JW-Timeline-15.png"),
    DownloadEntry::new("card-16.png", "https://i.postimg.cc/PP6jzS0S/JW-Timeline-16.png"),
    DownloadEntry::new("card-17.png", "https://i.postimg.cc/jL8bQMB3/JW-Timeline-17.png"),
    DownloadEntry::new("card-18.png", "https://i.postimg.cc/3kdHLgHb/JW-Timeline-18.png"),
    DownloadEntry::new("card-19.png", "https://i.postimg.cc/dhLKW8KX/JW-Timeline-19.png"),
    DownloadEntry::new("card-20.png", "https://i.postimg.cc/Xrp02wbV/JW-Timeline-20.png"),
    DownloadEntry::new("card-21.png", "https://i.postimg.cc/ZWChfrSn/JW-Timeline-21.png"),
    DownloadEntry::new("card-22.png", "https://i.postimg.cc/ZW2zXCbn/JW-Timeline-22.png"),
    DownloadEntry::new("card-23.png", "https://i.postimg.cc/xXhVBcft/JW-Timeline-23.png"),
    DownloadEntry::new("card-24.png", "https://i.postimg.cc/B8Ff34bH/JW-Timeline-24.png"),
    DownloadEntry::new("card-25.png", "https://i.postimg.cc/sBWCzsxw/JW-Timeline-25.png"),
    DownloadEntry::new("card-26.png", "https://i.postimg.cc/SX9b4kRT/JW-Timeline-26.png"),
    DownloadEntry::new("card-27.png", "https://i.postimg.cc/WFPLbCqC/JW-Timeline-27.png"),
    DownloadEntry::new("card-28.png", "https://i.postimg.cc/mzGf2JFG/JW-Timeline-28.png"),
    DownloadEntry::new("card-29.png", "https://i.postimg.cc/xJSDThbq/JW-Timeline-29.png"),
    DownloadEntry::new("card-30.png", "https://i.postimg.cc/7GMvC9gZ/JW-Timeline-30.png"),
    DownloadEntry::new("card-31.png", "https://i.postimg.cc/ygXqJjFW/JW-Timeline-31.png"),
    DownloadEntry::new("card-32.png", "https://i.postimg.cc/KkrXKfn7/JW-Timeline-32.png"),
    DownloadEntry::new("card-33.png", "https://i.postimg.cc/k6FrVsxf/JW-Timeline-33.png"),
    DownloadEntry::new("card-34.png", "https://i.postimg.cc/mzNxcjQ6/JW-Timeline-34.png"),
    DownloadEntry::new("card-35.png", "https://i.postimg.cc/XBVR9582/JW-Timeline-35.png"),
    DownloadEntry::new("card-36.png", "https://i.postimg.cc/RJMkwtR8/JW-Timeline-36.png"),
    DownloadEntry::new("card-37.png", "https://i.postimg.cc/bSz71ngq/JW-Timeline-37.png"),
    DownloadEntry::new("card-38.png", "https://i.postimg.cc/N2g3RXDj/JW-Timeline-38.png"),
    DownloadEntry::new("card-39.png", "https://i.postimg.cc/9zCH33hT/JW-Timeline-39.png"),
    DownloadEntry::new("card-40.png", "https://i.postimg.cc/0rP1ggsH/JW-Timeline-40.png"),
    DownloadEntry::new("card-41.png", "https://i.postimg.cc/6TcJtHWj/JW-Timeline-41.png"),
];

pub static EXTRA_IMAGES: &[DownloadEntry] = &[
    DownloadEntry::new("card-back.png", "https://i.postimg.cc/XY2cmTSG/JW-Timeline.png"),
    DownloadEntry::new("logo.png", "https://i.postimg.cc/xjZN5gRX/JW-Timeline-logo.png"),
];

/// Numeric identifier of a card, `card-17.png` -> `17`.
///
/// Names that do not follow the `card-<N>.png` pattern are returned with
/// whichever of the affixes they do carry stripped.
pub fn card_number(filename: &str) -> &str {
    let name = filename.strip_prefix("card-").unwrap_or(filename);
    name.strip_suffix(".png").unwrap_or(name)
}

/// Checks that a table can be written safely: no duplicate filenames, and no
/// filename that is absolute or climbs out of its destination directory.
pub fn validate_entries(entries: &[DownloadEntry]) -> Result<(), String> {
    let duplicates = entries
        .iter()
        .map(|e| &*e.filename)
        .duplicates()
        .join(", ");
    if !duplicates.is_empty() {
        return Err(format!("duplicate filenames: {duplicates}"));
    }

    for entry in entries {
        let path = Path::new(&*entry.filename);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if entry.filename.is_empty() || escapes {
            return Err(format!(
                "filename {:?} must be a relative path inside the destination directory",
                entry.filename
            ));
        }
        let is_http = url::Url::parse(&entry.source_url)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if !is_http {
            return Err(format!(
                "{} needs an absolute HTTP(S) source URL, got {}",
                entry.filename, entry.source_url
            ));
        }
    }

    Ok(())
}
