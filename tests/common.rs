#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command with the credential preset; tests that exercise the
/// missing-credential path use `habit_bare()` instead.
pub fn habit() -> Command {
    let mut cmd = cargo_bin_cmd!("habitrack");
    cmd.env("HABITRACK_STORE_KEY", "test-key");
    cmd
}

pub fn habit_bare() -> Command {
    let mut cmd = cargo_bin_cmd!("habitrack");
    cmd.env_remove("HABITRACK_STORE_URL");
    cmd.env_remove("HABITRACK_STORE_KEY");
    cmd
}

pub fn record(id: i64, timestamp: &str) -> Value {
    json!({ "id": id, "timestamp": timestamp })
}

/// Three events across two days: the fixture scenario used throughout.
pub fn two_day_fixture() -> Value {
    json!([
        record(1, "2024-03-01T08:00:00.000000+00:00"),
        record(2, "2024-03-01T20:00:00.000000+00:00"),
        record(3, "2024-03-02T09:00:00.000000+00:00"),
    ])
}

pub async fn start_store() -> MockServer {
    MockServer::start().await
}

/// Mount the `SELECT *` endpoint of the mock store.
pub async fn mount_fetch_all(server: &MockServer, records: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

/// Mount the `INSERT` endpoint; expects exactly one call.
pub async fn mount_append(server: &MockServer, created: Value) {
    Mock::given(method("POST"))
        .and(path("/rest/v1/events"))
        .respond_with(ResponseTemplate::new(201).set_body_json(created))
        .expect(1)
        .mount(server)
        .await;
}
