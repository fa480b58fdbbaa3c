//! Clear-control specs

use crate::prelude::*;

#[test]
fn first_run_stamps_a_marker() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["markers"])
        .passes()
        .stdout_has("#1")
        .stdout_has("v1");
}

#[test]
fn clear_wipes_log_and_records_marker() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();

    temp.pgr()
        .args(&["clear"])
        .passes()
        .stdout_has("#2")
        .stdout_has("[actions]");

    temp.pgr()
        .args(&["snapshot", "7"])
        .passes()
        .stdout_eq("No actions recorded for playground 7\n");

    // Sequence numbering restarts after a clear
    temp.pgr()
        .args(&["account", "create", "7", ALICE])
        .passes()
        .stdout_has("#1 in playground 7");
}

#[test]
fn clear_reports_only_tables_actually_cleared() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();

    let run = temp
        .pgr()
        .args(&[
            "--format", "json", "clear", "--table", "actions", "--table", "balances",
        ])
        .passes();
    let marker = run.stdout_json();

    assert_eq!(marker["tables_cleared"], serde_json::json!(["actions"]));
}

#[test]
fn markers_are_listed_oldest_first() {
    let temp = Project::empty();
    temp.pgr().args(&["clear"]).passes();
    temp.pgr().args(&["clear"]).passes();

    let run = temp.pgr().args(&["--format", "json", "markers"]).passes();
    let markers = run.stdout_json();
    let ids: Vec<_> = markers
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn newer_schema_version_resets_stale_log() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();
    temp.file("pgr.toml", "schema_version = 2\n");

    temp.pgr()
        .args(&["snapshot", "7"])
        .passes()
        .stderr_has("predates schema version 2")
        .stdout_eq("No actions recorded for playground 7\n");

    temp.pgr()
        .args(&["markers"])
        .passes()
        .stdout_has("v2")
        .stdout_has("[actions]");
}

#[test]
fn log_file_receives_tracing_output() {
    let temp = Project::empty();
    temp.file("pgr.toml", "log_file = \"logs/pgr.log\"\n");
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();

    let log = temp.read("logs/pgr.log");
    assert!(log.contains("evm.create_account"), "log:\n{}", log);
}
