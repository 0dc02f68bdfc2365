use crate::errors::{AppError, AppResult};
use crate::models::{SessionRecord, parse_updates};
use crate::store::SessionStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;

/// High-level logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Parse `KEY=VALUE` pairs and apply them to record `id`.
    /// Keys that are not editable are reported and skipped.
    pub fn apply(
        store: &mut SessionStore,
        id: u64,
        pairs: &[(String, String)],
    ) -> AppResult<SessionRecord> {
        let (updates, ignored) = parse_updates(pairs.iter().cloned());

        for key in &ignored {
            warning(format!("Ignoring unknown field '{key}'"));
        }

        let record = store.edit_entry(id, &updates)?.clone();

        let changed = updates
            .keys()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if let Err(e) = ttlog(
            store.path(),
            "edit",
            &id.to_string(),
            &format!("Updated fields: {}", if changed.is_empty() { "-" } else { changed.as_str() }),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(record)
    }
}

/// Split a `KEY=VALUE` argument.
pub fn parse_assignment(raw: &str) -> AppResult<(String, String)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| AppError::InvalidUpdate(format!("expected KEY=VALUE, got '{raw}'")))
}
