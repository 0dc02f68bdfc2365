use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::SessionStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = SessionStore::load(cfg.data_path());
        let count = ExportLogic::export(&store, *format, file, range.as_deref(), *force)?;

        if let Err(e) = ttlog(
            store.path(),
            "export",
            file,
            &format!("{} sessions exported as {}", count, format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
    Ok(())
}
