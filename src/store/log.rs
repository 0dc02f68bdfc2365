//! Internal operation log: one JSON object per line, next to the sessions file.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub message: String,
}

/// `sessions.json` → `sessions.log`
pub fn log_path(data_file: &Path) -> PathBuf {
    data_file.with_extension("log")
}

/// Append an internal log line.
pub fn ttlog(data_file: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = log_path(data_file);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// Read all entries; lines that do not parse are skipped.
pub fn read_log(data_file: &Path) -> AppResult<Vec<LogEntry>> {
    let path = log_path(data_file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
