// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::export::range::parse_range;
use crate::export::ExportFormat;
use crate::store::SessionStore;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored sessions.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (see `parse_range`)
    ///
    /// Returns the number of exported sessions.
    pub fn export(
        store: &SessionStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        ensure_writable(&path, force)?;

        let rows: Vec<SessionExport> = store
            .sessions()
            .iter()
            .filter(|s| bounds.is_none_or(|b| b.contains(s.start_date())))
            .map(SessionExport::from)
            .collect();

        if rows.is_empty() {
            warning("No sessions found for the selected range.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
