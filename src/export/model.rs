// src/export/model.rs

use crate::models::SessionRecord;
use crate::utils::time::format_iso;
use serde::Serialize;

/// Flat row written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionExport {
    pub id: u64,
    pub activity: String,
    pub start: String,
    pub end: String,
    pub duration: i64,
    pub comments: String,
}

impl From<&SessionRecord> for SessionExport {
    fn from(s: &SessionRecord) -> Self {
        Self {
            id: s.id,
            activity: s.activity.clone(),
            start: format_iso(&s.start),
            end: s.end.as_ref().map(format_iso).unwrap_or_default(),
            duration: s.duration,
            comments: s.comments.clone(),
        }
    }
}

/// Column order shared by every export format.
pub fn get_headers() -> Vec<&'static str> {
    vec!["id", "activity", "start", "end", "duration", "comments"]
}
