//! Conflict-safe persistence of the generated document.
//!
//! State machine over target-file existence: absent → write; present →
//! require an explicit decision (overwrite, backup then write, or cancel).
//! The decision always comes from the caller-supplied [`ConflictDecider`];
//! it is never skipped and never defaulted here.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::contract::{ConflictChoice, ConflictDecider};
use crate::error::{Error, Result};

pub const README_FILE_NAME: &str = "README.md";

/// Where the document landed, plus the backup path when one was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistOutcome {
    pub readme_path: PathBuf,
    pub backup_path: Option<PathBuf>,
}

/// Write `content` to `<target_dir>/README.md`, resolving a pre-existing
/// file through `decider`. Cancellation leaves the filesystem untouched.
pub fn save(
    content: &str,
    target_dir: &Path,
    decider: &dyn ConflictDecider,
) -> Result<PersistOutcome> {
    let readme_path = target_dir.join(README_FILE_NAME);
    let mut backup_path = None;

    if readme_path.exists() {
        match decider.decide(&readme_path) {
            ConflictChoice::Cancel => {
                info!(path = %readme_path.display(), "User declined to replace existing README");
                return Err(Error::PersistenceCancelled);
            }
            ConflictChoice::Backup => {
                let backup = target_dir.join(backup_file_name(Utc::now()));
                fs::copy(&readme_path, &backup).map_err(|source| Error::FileSystem {
                    path: backup.clone(),
                    source,
                })?;
                info!(backup = %backup.display(), "Backed up existing README");
                backup_path = Some(backup);
            }
            ConflictChoice::Overwrite => {
                info!(path = %readme_path.display(), "Overwriting existing README");
            }
        }
    }

    fs::write(&readme_path, content).map_err(|source| Error::FileSystem {
        path: readme_path.clone(),
        source,
    })?;
    info!(path = %readme_path.display(), bytes = content.len(), "Wrote README");
    Ok(PersistOutcome {
        readme_path,
        backup_path,
    })
}

/// `README.backup.<timestamp>.md`, with the ISO-8601 timestamp's ':' and
/// '.' normalized to '-' so the name is filesystem-safe everywhere.
fn backup_file_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("README.backup.{stamp}.md")
}
