//! End-to-end tests of the `degrees` binary against a mock record server.

use assert_cmd::assert::{Assert, OutputAssertExt};
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command isolated from the caller's environment and working directory.
fn degrees(workdir: &TempDir) -> Command {
    degrees_in(workdir.path())
}

fn degrees_in(workdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("degrees").expect("binary built");
    cmd.current_dir(workdir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DEGREES_CONFIG")
        .env_remove("DEGREES_BASE_URL");
    cmd
}

fn entries(list: &[(&str, &str, &str)]) -> Vec<serde_json::Value> {
    list.iter()
        .map(|(url, name, role)| json!({"url": url, "name": name, "role": role}))
        .collect()
}

async fn mount(server: &MockServer, record: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{record}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// alice —First— bob —Second— carol, and a loner with no credits.
async fn chain_server() -> MockServer {
    let server = MockServer::start().await;
    mount(
        &server,
        "alice",
        json!({"name": "Alice", "movies": entries(&[("first", "First", "Lead")])}),
    )
    .await;
    mount(
        &server,
        "bob",
        json!({"name": "Bob", "movies": entries(&[("first", "First", "Friend"), ("second", "Second", "Hero")])}),
    )
    .await;
    mount(
        &server,
        "carol",
        json!({"name": "Carol", "movies": entries(&[("second", "Second", "Sidekick")])}),
    )
    .await;
    mount(&server, "loner", json!({"name": "Loner", "movies": []})).await;
    mount(
        &server,
        "first",
        json!({"name": "First", "cast": entries(&[("alice", "Alice", "Lead"), ("bob", "Bob", "Friend")])}),
    )
    .await;
    mount(
        &server,
        "second",
        json!({"name": "Second", "cast": entries(&[("bob", "Bob", "Hero"), ("carol", "Carol", "Sidekick")])}),
    )
    .await;
    server
}

/// Runs the binary off the async runtime so the mock server keeps serving.
async fn run(dir: &TempDir, args: Vec<String>) -> Assert {
    let workdir = dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        let mut cmd = degrees_in(&workdir);
        cmd.args(&args).output().expect("run degrees")
    })
    .await
    .expect("command thread");
    output.assert()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_missing_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    degrees(&dir)
        .arg("alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    degrees(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connected_text_output() {
    let server = chain_server().await;
    let dir = TempDir::new().unwrap();
    let assert = run(
        &dir,
        args(&["alice", "carol", "--quiet", "--base-url", &server.uri()]),
    )
    .await;

    assert
        .success()
        .stdout(predicate::str::contains("Degrees of Separation: 2"))
        .stdout(predicate::str::contains("1. Movie: First"))
        .stdout(predicate::str::contains("   Lead: alice"))
        .stdout(predicate::str::contains("   Sidekick: carol"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_connected_exits_non_zero() {
    let server = chain_server().await;
    let dir = TempDir::new().unwrap();
    let assert = run(
        &dir,
        args(&["loner", "carol", "--quiet", "--base-url", &server.uri()]),
    )
    .await;

    assert
        .code(1)
        .stdout(predicate::str::contains("No connection found between loner and carol."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_actor_fetch_error_reported() {
    let server = chain_server().await;
    let dir = TempDir::new().unwrap();
    let assert = run(
        &dir,
        args(&["nobody", "carol", "--quiet", "--base-url", &server.uri()]),
    )
    .await;

    assert
        .failure()
        .stderr(predicate::str::contains("Fetching actor 'nobody' failed with status 404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_with_depth_limit() {
    let server = chain_server().await;
    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let assert = run(
        &dir,
        args(&["alice", "carol", "--format", "json", "--max-degrees", "1", "--base-url", &uri]),
    )
    .await
    .code(1);
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json output");
    assert_eq!(value["status"], "depth_limit_reached");
    assert_eq!(value["stats"]["levels"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_file_and_stats() {
    let server = chain_server().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("degrees.toml"),
        format!(
            "[source]\nbase_url = \"{}/\"\ntimeout_secs = 5\n\n[search]\nfrontier_policy = \"deduplicate\"\n",
            server.uri()
        ),
    )
    .unwrap();

    let assert = run(&dir, args(&["alice", "bob", "--quiet", "--stats"])).await;

    assert
        .success()
        .stdout(predicate::str::contains("Degrees of Separation: 1"))
        .stdout(predicate::str::contains("Stats: 1 levels, 1 actors expanded"));
}

#[test]
fn test_invalid_base_url_rejected() {
    let dir = TempDir::new().unwrap();
    degrees(&dir)
        .args(["alice", "bob", "--base-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source.base_url"));
}
