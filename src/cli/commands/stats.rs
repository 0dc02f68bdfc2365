use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { chart, json } = cmd {
        let store = SessionStore::load(cfg.data_path());
        let stats = store.get_statistics();

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        header("Session Statistics");
        print!("{}", StatsLogic::summary(&stats));

        if *chart {
            println!();
            print!("{}", StatsLogic::chart(&stats));
        }
    }

    Ok(())
}
