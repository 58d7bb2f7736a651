use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use chrono::{DateTime, NaiveDate};
use std::collections::BTreeMap;

/// Timestamp format the store writes: ISO-8601 with fractional seconds
/// and a UTC-offset suffix, e.g. `2024-03-01T08:15:30.123456+00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Group records by calendar date and count per-day occurrences.
///
/// - Empty input yields `Ok(None)`: an explicit no-data signal, distinct
///   from an empty series, so callers can render a friendly message.
/// - Any timestamp that does not match [`TIMESTAMP_FORMAT`] fails the
///   whole batch; no partial series is ever returned.
/// - Each instant is projected to the calendar date of the offset it
///   already carries; no further time-zone conversion happens.
/// - Rows come back ascending by date. Days without events are absent,
///   not zero.
pub fn aggregate(records: &[EventRecord]) -> AppResult<Option<Vec<DailyCount>>> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for rec in records {
        let instant = DateTime::parse_from_str(&rec.timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| AppError::MalformedTimestamp(rec.timestamp.clone()))?;
        *per_day.entry(instant.date_naive()).or_insert(0) += 1;
    }

    let rows = per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();

    Ok(Some(rows))
}

/// Last `n` rows of the ascending series, or all of them when fewer
/// exist. The window counts data points, not calendar days: when some
/// days have no events the window may span more than `n` days.
pub fn select_recent_window(rows: &[DailyCount], n: usize) -> &[DailyCount] {
    if rows.len() <= n {
        rows
    } else {
        &rows[rows.len() - n..]
    }
}
