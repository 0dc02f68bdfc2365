use crate::errors::AppResult;
use crate::store::{DeleteReport, SessionStore};
use crate::store::log::ttlog;
use crate::ui::messages::warning;
use std::collections::BTreeSet;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the given ids, keeping whatever could be removed.
    pub fn apply(store: &mut SessionStore, ids: &BTreeSet<u64>) -> AppResult<DeleteReport> {
        let report = store.remove_entries(ids)?;

        if !report.removed.is_empty() {
            let target = join_ids(&report.removed);
            if let Err(e) = ttlog(
                store.path(),
                "del",
                &target,
                &format!("Deleted {} session(s)", report.removed.len()),
            ) {
                warning(format!("Failed to write internal log: {e}"));
            }
        }

        Ok(report)
    }
}

pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
