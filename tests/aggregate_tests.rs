use chrono::NaiveDate;
use habitrack::core::aggregate::{DailyCount, aggregate, select_recent_window};
use habitrack::errors::AppError;
use habitrack::models::record::{EventRecord, RecordId};

fn rec(id: i64, timestamp: &str) -> EventRecord {
    EventRecord::new(RecordId::Int(id), timestamp)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_input_is_explicit_no_data() {
    let result = aggregate(&[]).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_two_day_scenario() {
    let records = vec![
        rec(1, "2024-03-01T08:00:00.000000+00:00"),
        rec(2, "2024-03-01T20:00:00.000000+00:00"),
        rec(3, "2024-03-02T09:00:00.000000+00:00"),
    ];

    let rows = aggregate(&records).unwrap().unwrap();

    assert_eq!(
        rows,
        vec![
            DailyCount {
                date: day(2024, 3, 1),
                count: 2
            },
            DailyCount {
                date: day(2024, 3, 2),
                count: 1
            },
        ]
    );
}

#[test]
fn test_counts_sum_to_record_count() {
    let records = vec![
        rec(1, "2024-02-28T23:59:59.000001+00:00"),
        rec(2, "2024-03-05T11:00:00.000000+00:00"),
        rec(3, "2024-03-05T11:00:00.000000+00:00"),
        rec(4, "2024-03-01T00:00:00.000000+00:00"),
        rec(5, "2024-03-05T23:00:00.000000+00:00"),
    ];

    let rows = aggregate(&records).unwrap().unwrap();
    let total: u32 = rows.iter().map(|r| r.count).sum();

    assert_eq!(total as usize, records.len());
}

#[test]
fn test_rows_strictly_ascending_unique_dates() {
    // Deliberately unordered input; the store returns rows unordered.
    let records = vec![
        rec(1, "2024-03-09T10:00:00.000000+00:00"),
        rec(2, "2024-03-01T10:00:00.000000+00:00"),
        rec(3, "2024-03-05T10:00:00.000000+00:00"),
        rec(4, "2024-03-01T12:00:00.000000+00:00"),
    ];

    let rows = aggregate(&records).unwrap().unwrap();

    for pair in rows.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn test_date_taken_from_carried_offset() {
    // 23:30 at +02:00 stays on the 1st; no conversion to UTC.
    let records = vec![rec(1, "2024-03-01T23:30:00.000000+02:00")];

    let rows = aggregate(&records).unwrap().unwrap();

    assert_eq!(rows[0].date, day(2024, 3, 1));
}

#[test]
fn test_malformed_timestamp_fails_whole_batch() {
    let records = vec![
        rec(1, "2024-03-01T08:00:00.000000+00:00"),
        rec(2, "not-a-date"),
    ];

    let err = aggregate(&records).unwrap_err();

    match err {
        AppError::MalformedTimestamp(ts) => assert_eq!(ts, "not-a-date"),
        other => panic!("expected MalformedTimestamp, got {:?}", other),
    }
}

#[test]
fn test_missing_offset_is_malformed() {
    // The expected format carries an offset; a bare local timestamp fails.
    let records = vec![rec(1, "2024-03-01T08:00:00.000000")];

    assert!(matches!(
        aggregate(&records),
        Err(AppError::MalformedTimestamp(_))
    ));
}

#[test]
fn test_recent_window_identity_when_short() {
    let rows: Vec<DailyCount> = (1..=10)
        .map(|d| DailyCount {
            date: day(2024, 3, d),
            count: d,
        })
        .collect();

    assert_eq!(select_recent_window(&rows, 14), &rows[..]);
    assert_eq!(select_recent_window(&rows, 10), &rows[..]);
}

#[test]
fn test_recent_window_takes_last_n() {
    let rows: Vec<DailyCount> = (1..=20)
        .map(|d| DailyCount {
            date: day(2024, 3, d),
            count: d,
        })
        .collect();

    let window = select_recent_window(&rows, 14);

    assert_eq!(window.len(), 14);
    assert_eq!(window.first().unwrap().date, day(2024, 3, 7));
    assert_eq!(window.last().unwrap().date, day(2024, 3, 20));
}

#[test]
fn test_aggregate_is_pure() {
    let records = vec![
        rec(1, "2024-03-01T08:00:00.000000+00:00"),
        rec(2, "2024-03-02T09:00:00.000000+00:00"),
    ];

    let first = aggregate(&records).unwrap();
    let second = aggregate(&records).unwrap();

    assert_eq!(first, second);
}
