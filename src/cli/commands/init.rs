use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the application directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty sessions file (if missing)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing sessiontracker…");

    let data_path = Config::init_all(cli.data.clone(), cli.test)?;

    // existing data is kept: report how many sessions were found
    let store = SessionStore::load(&data_path);
    println!("📄 Sessions    : {}", store.sessions().len());

    if let Err(e) = ttlog(
        &data_path,
        "init",
        "",
        &format!("Sessions file initialized at {}", data_path.display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 sessiontracker initialization completed!");
    Ok(())
}
