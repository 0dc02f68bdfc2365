use crate::utils::time::{self, iso, iso_opt};
use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label used when a session is started without an activity.
pub const DEFAULT_ACTIVITY: &str = "Work";

/// Label given to records read from disk without an activity.
pub const UNKNOWN_ACTIVITY: &str = "Unknown";

/// Fractional digits kept in stored timestamps.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// One completed (or in-progress) tracked interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: u64,
    pub activity: String,
    #[serde(with = "iso")]
    pub start: NaiveDateTime,
    #[serde(
        with = "iso_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<NaiveDateTime>,
    pub duration: i64,
    pub comments: String,
}

impl SessionRecord {
    /// In-progress record: no id yet, no end, zero duration.
    ///
    /// Timestamps are truncated to microseconds, the precision of the file.
    pub fn begin(activity: &str, start: NaiveDateTime) -> Self {
        let activity = activity.trim();
        Self {
            id: 0,
            activity: if activity.is_empty() {
                DEFAULT_ACTIVITY.to_string()
            } else {
                activity.to_string()
            },
            start: start.trunc_subsecs(STORED_SUBSEC_DIGITS),
            end: None,
            duration: 0,
            comments: String::new(),
        }
    }

    /// Stamp the end time and compute the duration in whole seconds.
    pub fn finish(&mut self, id: u64, end: NaiveDateTime) {
        let end = end.trunc_subsecs(STORED_SUBSEC_DIGITS);
        self.id = id;
        self.duration = time::seconds_between(self.start, end);
        self.end = Some(end);
    }

    pub fn start_date(&self) -> chrono::NaiveDate {
        self.start.date()
    }
}

/// On-disk shape used when reading: older files may lack `id`, `comments`
/// (and in hand-edited files `activity` or `duration`).
#[derive(Debug, Deserialize)]
pub(crate) struct StoredRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(with = "iso")]
    pub start: NaiveDateTime,
    #[serde(with = "iso_opt", default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Fields a caller may change on a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditableField {
    Activity,
    Comments,
}

impl EditableField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditableField::Activity => "activity",
            EditableField::Comments => "comments",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "activity" => Some(EditableField::Activity),
            "comments" => Some(EditableField::Comments),
            _ => None,
        }
    }

    pub(crate) fn apply(&self, record: &mut SessionRecord, value: &str) {
        match self {
            EditableField::Activity => record.activity = value.to_string(),
            EditableField::Comments => record.comments = value.to_string(),
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Updates = BTreeMap<EditableField, String>;

/// Split raw `key → value` pairs into recognised updates and ignored keys.
pub fn parse_updates<I, K, V>(raw: I) -> (Updates, Vec<String>)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut updates = Updates::new();
    let mut ignored = Vec::new();

    for (k, v) in raw {
        let key: String = k.into();
        match EditableField::from_key(&key) {
            Some(field) => {
                updates.insert(field, v.into());
            }
            None => ignored.push(key),
        }
    }

    (updates, ignored)
}
