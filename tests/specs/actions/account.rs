//! Account action specs

use crate::prelude::*;

#[test]
fn create_records_first_action() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["account", "create", "7", ALICE, "--label", "alice"])
        .passes()
        .stdout_has("recorded CREATE_ACCOUNT #1 in playground 7");
}

#[test]
fn addresses_are_stored_lowercase() {
    let temp = Project::empty();
    temp.pgr()
        .args(&[
            "account",
            "create",
            "7",
            "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        ])
        .passes();

    temp.pgr()
        .args(&["snapshot", "7"])
        .passes()
        .stdout_has(ALICE)
        .stdout_lacks("0xAAAA");
}

#[test]
fn snapshot_lists_actions_in_recorded_order() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();
    temp.pgr()
        .args(&["account", "fund", "7", ALICE, "1000"])
        .passes()
        .stdout_has("#2");

    let run = temp.pgr().args(&["--format", "json", "snapshot", "7"]).passes();
    let records = run.stdout_json();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["type"], "CREATE_ACCOUNT");
    assert_eq!(records[0]["sequence"], 1);
    assert_eq!(records[1]["type"], "FUND_ACCOUNT");
    assert_eq!(records[1]["payload"]["amount"], "1000");
}

#[test]
fn playgrounds_have_separate_logs() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "1", ALICE]).passes();
    temp.pgr()
        .args(&["account", "create", "2", BOB])
        .passes()
        .stdout_has("#1 in playground 2");

    temp.pgr()
        .args(&["snapshot", "1"])
        .passes()
        .stdout_has(ALICE)
        .stdout_lacks(BOB);
}

#[test]
fn register_adds_account_to_another_playground() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "1", ALICE]).passes();
    temp.pgr()
        .args(&["account", "register", "2", ALICE, "--label", "shared"])
        .passes()
        .stdout_has("recorded REGISTER_ACCOUNT #1 in playground 2");

    temp.pgr()
        .args(&["replay", "2"])
        .passes()
        .stdout_has(ALICE)
        .stdout_has("(shared)");
}
