//! Single-playground replay specs

use crate::prelude::*;

#[test]
fn replay_rebuilds_balance_from_log() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();
    temp.pgr()
        .args(&["account", "fund", "7", ALICE, "1000"])
        .passes();

    temp.pgr()
        .args(&["replay", "7"])
        .passes()
        .stdout_has("Replayed playground 7: 2 of 2 actions applied")
        .stdout_has(&format!("{}  balance 1000", ALICE));
}

#[test]
fn replay_of_empty_playground_is_done() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["replay", "999"])
        .passes()
        .stdout_has("Replayed playground 999: 0 of 0 actions applied")
        .stdout_has("(none)");
}

#[test]
fn replay_json_reports_scope_and_accounts() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();
    temp.pgr()
        .args(&["account", "fund", "7", ALICE, "1000"])
        .passes();

    let run = temp.pgr().args(&["--format", "json", "replay", "7"]).passes();
    let view = run.stdout_json();

    assert_eq!(view["report"]["scope"]["playground"], 7);
    assert_eq!(view["report"]["applied"], 2);
    assert_eq!(view["report"]["failures"], Value::Array(vec![]));
    assert_eq!(view["accounts"][0]["address"], ALICE);
    assert_eq!(view["accounts"][0]["balance"], "1000");
}

#[test]
fn funding_accumulates_across_invocations() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();
    temp.pgr().args(&["account", "fund", "7", ALICE, "1"]).passes();
    temp.pgr().args(&["account", "fund", "7", ALICE, "2"]).passes();

    temp.pgr()
        .args(&["replay", "7"])
        .passes()
        .stdout_has("balance 3");
}
