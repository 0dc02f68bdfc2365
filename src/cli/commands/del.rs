use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, join_ids};
use crate::errors::{AppError, AppResult};
use crate::store::SessionStore;
use crate::ui::messages::{info, success, warning};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        let ids: BTreeSet<u64> = ids.iter().copied().collect();

        //
        // Confirmation prompt
        //
        let prompt = if ids.len() == 1 {
            "Are you sure you want to delete this entry?".to_string()
        } else {
            format!(
                "Are you sure you want to delete {} selected entries?",
                ids.len()
            )
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut store = SessionStore::load(cfg.data_path());
        let report = DeleteLogic::apply(&mut store, &ids)?;

        match report.removed.len() {
            0 => {}
            1 => success("Entry deleted successfully."),
            n => success(format!("{n} entries deleted successfully.")),
        }

        if !report.missing.is_empty() {
            if !report.removed.is_empty() {
                warning(format!("Deleted: {}", join_ids(&report.removed)));
            }
            return Err(AppError::NotFound(report.missing));
        }
    }

    Ok(())
}
