//! Session store: the in-memory list of completed sessions, the transient
//! in-progress slot, JSON persistence and statistics.

pub mod log;
pub mod persist;

use crate::errors::{AppError, AppResult};
use crate::models::{SessionRecord, Statistics, Updates};
use crate::ui::messages::warning;
use chrono::{Local, NaiveDateTime};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Outcome of a batch removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub removed: Vec<u64>,
    pub missing: Vec<u64>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub struct SessionStore {
    path: PathBuf,
    sessions: Vec<SessionRecord>,
    current: Option<SessionRecord>,
    next_id: u64,
}

impl SessionStore {
    /// Load the store from `path`.
    ///
    /// Unreadable or malformed files are reported as a warning and the store
    /// starts empty. When only the `.backup` sibling exists (a save was
    /// interrupted after the rename) the backup is loaded instead.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let backup = persist::backup_path(&path);

        let source = if path.exists() {
            Some(path.clone())
        } else if backup.exists() {
            warning(format!(
                "Sessions file missing, recovering from backup {}",
                backup.display()
            ));
            Some(backup)
        } else {
            None
        };

        let sessions = match source {
            Some(src) => persist::read_records(&src).unwrap_or_else(|e| {
                warning(format!("{e}"));
                Vec::new()
            }),
            None => Vec::new(),
        };

        Self::with_sessions(path, sessions)
    }

    /// Build a store over an already-loaded list (nothing is written).
    pub fn with_sessions(path: impl Into<PathBuf>, sessions: Vec<SessionRecord>) -> Self {
        let max_id = sessions.iter().map(|s| s.id).max().unwrap_or(0);
        let next_id = max_id.max(sessions.len() as u64) + 1;

        Self {
            path: path.into(),
            sessions,
            current: None,
            next_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Completed sessions in completion order.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn get(&self, id: u64) -> Option<&SessionRecord> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn current_session(&self) -> Option<&SessionRecord> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Seconds elapsed since the in-progress session started.
    pub fn elapsed(&self, now: NaiveDateTime) -> Option<i64> {
        self.current
            .as_ref()
            .map(|c| crate::utils::time::seconds_between(c.start, now))
    }

    /// Write the whole list back to disk.
    pub fn save(&self) -> AppResult<()> {
        persist::write_records(&self.path, &self.sessions)
    }

    /// Start a session now. A session already in progress is replaced.
    pub fn start_session(&mut self, activity: &str) -> &SessionRecord {
        self.start_session_at(activity, now())
    }

    pub fn start_session_at(&mut self, activity: &str, at: NaiveDateTime) -> &SessionRecord {
        self.current.insert(SessionRecord::begin(activity, at))
    }

    /// Stop the in-progress session now; `Ok(None)` when none is running.
    pub fn end_session(&mut self) -> AppResult<Option<SessionRecord>> {
        self.end_session_at(now())
    }

    pub fn end_session_at(&mut self, at: NaiveDateTime) -> AppResult<Option<SessionRecord>> {
        let Some(mut record) = self.current.take() else {
            return Ok(None);
        };

        record.finish(self.next_id, at);
        self.next_id += 1;
        self.sessions.push(record.clone());
        self.save()?;

        Ok(Some(record))
    }

    /// Remove every record whose id is in `ids` and report what was found.
    ///
    /// Persists once when at least one record was removed.
    pub fn remove_entries(&mut self, ids: &BTreeSet<u64>) -> AppResult<DeleteReport> {
        if ids.is_empty() {
            return Err(AppError::NothingDeleted);
        }

        let mut report = DeleteReport::default();
        for &id in ids {
            match self.sessions.iter().position(|s| s.id == id) {
                Some(idx) => {
                    self.sessions.remove(idx);
                    report.removed.push(id);
                }
                None => report.missing.push(id),
            }
        }

        if !report.removed.is_empty() {
            self.save()?;
        }

        Ok(report)
    }

    /// Delete records by id.
    ///
    /// Ids that are found are removed and persisted even when others are
    /// missing; the missing ones are then returned as `NotFound`.
    pub fn delete_entries(&mut self, ids: &BTreeSet<u64>) -> AppResult<()> {
        let report = self.remove_entries(ids)?;

        if !report.missing.is_empty() {
            return Err(AppError::NotFound(report.missing));
        }
        if report.removed.is_empty() {
            return Err(AppError::NothingDeleted);
        }

        Ok(())
    }

    /// Apply field updates to one record and persist.
    pub fn edit_entry(&mut self, id: u64, updates: &Updates) -> AppResult<&SessionRecord> {
        let idx = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(vec![id]))?;

        for (field, value) in updates {
            field.apply(&mut self.sessions[idx], value);
        }

        self.save()?;
        Ok(&self.sessions[idx])
    }

    pub fn get_statistics(&self) -> Statistics {
        Statistics::from_sessions(&self.sessions)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
