use crate::config::{Config, STORE_KEY_VAR, STORE_URL_VAR};
use crate::errors::AppResult;
use crate::ui::messages;

use crate::cli::parser::Cli;
use std::env;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
/// and reports whether the store environment is usable.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing habitrack…");

    Config::init_all(cli.test)?;

    let path = Config::config_file();
    println!("📄 Config file : {}", path.display());

    // The endpoint and credential live in the environment, never in the
    // config file. Missing values are reported here but only abort the
    // commands that actually touch the store.
    if env::var(STORE_URL_VAR).is_ok() || cli.store_url.is_some() {
        messages::info(format!("{} is set", STORE_URL_VAR));
    } else {
        messages::warning(format!("{} is not set", STORE_URL_VAR));
    }

    if env::var(STORE_KEY_VAR).is_ok() {
        messages::info(format!("{} is set", STORE_KEY_VAR));
    } else {
        messages::warning(format!("{} is not set", STORE_KEY_VAR));
    }

    println!("🎉 habitrack initialization completed!");
    Ok(())
}
