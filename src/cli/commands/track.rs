use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::store::log::ttlog;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_hms;
use std::io::{self, IsTerminal};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { activity, no_timer } = cmd {
        let mut store = SessionStore::load(cfg.data_path());
        let activity = activity.as_deref().unwrap_or(&cfg.default_activity);
        let show_timer = !*no_timer && io::stdout().is_terminal() && io::stdin().is_terminal();

        let stdin = io::stdin();
        let mut input = stdin.lock();

        if let Some(record) = TrackLogic::run(&mut store, activity, &mut input, show_timer)? {
            success(format!(
                "Session #{} '{}' saved ({}).",
                record.id,
                record.activity,
                format_hms(record.duration)
            ));

            if let Err(e) = ttlog(
                store.path(),
                "track",
                &record.id.to_string(),
                &format!("{} for {}s", record.activity, record.duration),
            ) {
                warning(format!("Failed to write internal log: {e}"));
            }
        }
    }

    Ok(())
}
