use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::client::StoreClient;
use crate::store::gateway::StoreGateway;
use crate::ui::messages;

use super::show::render_dashboard;

/// Record one habit event now, then re-render the dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track = cmd {
        //
        // 1. Open the store
        //
        let client = StoreClient::new(cfg)?;
        let gateway = StoreGateway::new(&client, &cfg.table);
        let mut session = Session::new(&gateway);

        //
        // 2. Load the current record list (the session cache)
        //
        session.records()?;

        //
        // 3. Append one event; the server assigns id and timestamp
        //
        let created = session.track()?;
        messages::success(format!(
            "Tracked event {} at {}",
            created.id, created.timestamp
        ));
        println!();

        //
        // 4. Re-render from the updated cache (no re-fetch)
        //
        render_dashboard(session.records()?, cfg, cfg.days_to_show, false)?;
    }
    Ok(())
}
