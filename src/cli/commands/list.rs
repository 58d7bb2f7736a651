use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::client::StoreClient;
use crate::store::gateway::StoreGateway;
use crate::ui::messages;

use super::show::render_table;

/// Handle the `list` command: full table of dates and counts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let client = StoreClient::new(cfg)?;
        let gateway = StoreGateway::new(&client, &cfg.table);
        let mut session = Session::new(&gateway);

        let records = session.records()?;

        match aggregate(records)? {
            None => {
                messages::success("You haven't tracked any events yet.");
            }
            Some(rows) => {
                let total: u32 = rows.iter().map(|r| r.count).sum();
                print!("{}", render_table(&rows, &cfg.separator_char));
                println!("\nTotal: {} events over {} days", total, rows.len());
            }
        }
    }
    Ok(())
}
