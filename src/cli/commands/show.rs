use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{aggregate, select_recent_window, DailyCount};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::record::EventRecord;
use crate::store::client::StoreClient;
use crate::store::gateway::StoreGateway;
use crate::ui::messages;
use crate::utils::chart::render_bar_chart;
use crate::utils::table::{Column, Table};

/// Handle the `show` command: fetch, aggregate, render.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { days, table } = cmd {
        let client = StoreClient::new(cfg)?;
        let gateway = StoreGateway::new(&client, &cfg.table);
        let mut session = Session::new(&gateway);

        let records = session.records()?;
        let days = days.unwrap_or(cfg.days_to_show);

        render_dashboard(records, cfg, days, *table)?;
    }
    Ok(())
}

/// Shared render path: title, then empty state, chart, or table.
/// Also re-invoked by `track` after a successful append so the display
/// reflects the new state.
pub fn render_dashboard(
    records: &[EventRecord],
    cfg: &Config,
    days: usize,
    as_table: bool,
) -> AppResult<()> {
    messages::title("Habit Tracker");

    match aggregate(records)? {
        None => {
            messages::success("You haven't tracked any events yet.");
        }
        Some(rows) => {
            if as_table {
                print!("{}", render_table(&rows, &cfg.separator_char));
            } else {
                let window = select_recent_window(&rows, days);
                print!("{}", render_bar_chart(window, cfg.chart_width));
            }
        }
    }

    Ok(())
}

pub fn render_table(rows: &[DailyCount], separator_char: &str) -> String {
    let mut table = Table::new(
        vec![
            Column {
                header: "Date".to_string(),
                right_align: false,
            },
            Column {
                header: "Events".to_string(),
                right_align: true,
            },
        ],
        separator_char,
    );

    for row in rows {
        table.add_row(vec![
            row.date.format("%Y-%m-%d").to_string(),
            row.count.to_string(),
        ]);
    }

    table.render()
}
