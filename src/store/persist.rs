//! JSON persistence for the session list.
//!
//! Save sequence:
//!  1. remove a stale `<stem>.backup` left by an interrupted save
//!  2. rename the current file to `<stem>.backup`
//!  3. write the new content, restoring the backup if the write fails
//!  4. delete the backup (only once the write succeeded)
//!
//! When the data file is missing but a backup exists, the backup is the only
//! copy on disk: it is kept through step 3 and never treated as stale.

use crate::errors::{AppError, AppResult};
use crate::models::session::{SessionRecord, StoredRecord, UNKNOWN_ACTIVITY};
use crate::ui::messages::warning;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path holding the previous file during a save.
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("backup")
}

/// Read and normalize the stored records.
pub fn read_records(path: &Path) -> AppResult<Vec<SessionRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Load(format!("{}: {e}", path.display())))?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let stored: Vec<StoredRecord> = serde_json::from_str(&content)
        .map_err(|e| AppError::Load(format!("{}: {e}", path.display())))?;

    Ok(backfill(stored))
}

/// Fill the fields older files may lack.
///
/// Missing ids take the 1-based position when that id is free, otherwise the
/// next id above every id seen so far.
fn backfill(stored: Vec<StoredRecord>) -> Vec<SessionRecord> {
    let mut taken: HashSet<u64> = stored.iter().filter_map(|r| r.id).collect();
    let mut max_id = taken.iter().copied().max().unwrap_or(0);

    stored
        .into_iter()
        .enumerate()
        .map(|(pos, r)| {
            let id = match r.id {
                Some(id) => id,
                None => {
                    let positional = pos as u64 + 1;
                    let id = if taken.contains(&positional) {
                        max_id + 1
                    } else {
                        positional
                    };
                    taken.insert(id);
                    max_id = max_id.max(id);
                    id
                }
            };

            SessionRecord {
                id,
                activity: r.activity.unwrap_or_else(|| UNKNOWN_ACTIVITY.to_string()),
                start: r.start,
                end: r.end,
                duration: r.duration,
                comments: r.comments.unwrap_or_default(),
            }
        })
        .collect()
}

/// Persist the full list, pretty-printed, with the backup-on-write step.
pub fn write_records(path: &Path, records: &[SessionRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Save(format!("serialization failed: {e}")))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::Save(format!("{}: {e}", parent.display())))?;
    }

    let backup = backup_path(path);

    // `had_previous`: the backup holds the last good content for this save
    let had_previous = if path.exists() {
        if backup.exists() {
            fs::remove_file(&backup).map_err(|e| {
                AppError::Save(format!("stale backup {}: {e}", backup.display()))
            })?;
        }
        fs::rename(path, &backup)
            .map_err(|e| AppError::Save(format!("backup {}: {e}", backup.display())))?;
        true
    } else {
        // a backup without its data file is what `load` recovered from
        backup.exists()
    };

    if let Err(e) = fs::write(path, json) {
        let mut msg = format!("{}: {e}", path.display());
        if had_previous && let Err(re) = fs::rename(&backup, path) {
            warning(format!(
                "Could not restore {}: {re}. Previous sessions are kept in {}",
                path.display(),
                backup.display()
            ));
            msg.push_str(&format!(" (previous sessions left in {})", backup.display()));
        }
        return Err(AppError::Save(msg));
    }

    // the new content is on disk; a leftover backup is replaced by the next save
    if had_previous && let Err(e) = fs::remove_file(&backup) {
        warning(format!("Could not remove backup {}: {e}", backup.display()));
    }

    Ok(())
}
