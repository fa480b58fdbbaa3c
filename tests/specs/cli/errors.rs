//! Error reporting specs

use crate::prelude::*;

#[test]
fn invalid_address_is_rejected_before_recording() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["account", "create", "7", "0x1234"])
        .fails()
        .stderr_has("invalid address");

    temp.pgr()
        .args(&["snapshot", "7"])
        .passes()
        .stdout_eq("No actions recorded for playground 7\n");
}

#[test]
fn rejected_action_is_not_recorded() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["account", "fund", "7", ALICE, "10"])
        .fails()
        .stderr_has("Action rejected in playground 7")
        .stderr_has("account not found")
        .stderr_has("Nothing was recorded");

    temp.pgr()
        .args(&["snapshot", "7"])
        .passes()
        .stdout_eq("No actions recorded for playground 7\n");
}

#[test]
fn replay_requires_playground_or_all() {
    let temp = Project::empty();
    temp.pgr().args(&["replay"]).fails();
}

#[test]
fn malformed_config_file_fails() {
    let temp = Project::empty();
    temp.file("pgr.toml", "schema_version = \"one\"\n");
    temp.pgr()
        .args(&["markers"])
        .fails()
        .stderr_has("invalid config file");
}
