use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;

/// Handle the `config` command (view or check).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{}", content);
            } else {
                messages::warning(format!(
                    "No config file at {} (run `habitrack init`)",
                    path.display()
                ));
            }
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                messages::success("Configuration OK");
            } else {
                for p in &problems {
                    messages::warning(p);
                }
            }
        }
    }
    Ok(())
}
