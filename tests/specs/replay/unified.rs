//! Unified replay specs

use crate::prelude::*;

#[test]
fn replay_all_covers_every_playground() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "1", ALICE]).passes();
    temp.pgr().args(&["account", "fund", "1", ALICE, "5"]).passes();
    temp.pgr().args(&["account", "create", "2", BOB]).passes();
    temp.pgr().args(&["account", "fund", "2", BOB, "9"]).passes();

    temp.pgr()
        .args(&["replay", "--all"])
        .passes()
        .stdout_has("Replayed unified: 4 of 4 actions applied")
        .stdout_has(&format!("{}  balance 5", ALICE))
        .stdout_has(&format!("{}  balance 9", BOB));
}

#[test]
fn replay_all_json_scope_is_unified() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "1", ALICE]).passes();

    let run = temp
        .pgr()
        .args(&["--format", "json", "replay", "--all"])
        .passes();
    let view = run.stdout_json();

    assert_eq!(view["report"]["scope"], "unified");
    assert_eq!(view["report"]["total"], 1);
}

#[test]
fn replay_all_rejects_playground_argument() {
    let temp = Project::empty();
    temp.pgr().args(&["replay", "1", "--all"]).fails();
}

fn deploy_and_call(temp: &Project, playground: &str, name: &str, value: &str) -> String {
    temp.pgr()
        .args(&["account", "create", playground, ALICE])
        .passes();
    temp.pgr()
        .args(&["account", "fund", playground, ALICE, "100"])
        .passes();
    let run = temp
        .pgr()
        .args(&[
            "--format", "json", "contract", "deploy", playground, ALICE, "0x6080", "--name", name,
        ])
        .passes();
    let contract = run.stdout_json()["output"]["address"]
        .as_str()
        .unwrap()
        .to_string();
    temp.pgr()
        .args(&[
            "contract", "call", playground, ALICE, &contract, "mint", "--value", value,
        ])
        .passes();
    contract
}

#[test]
fn replay_all_keeps_each_playgrounds_contract_state() {
    let temp = Project::empty();
    let one = deploy_and_call(&temp, "1", "One", "10");
    let two = deploy_and_call(&temp, "2", "Two", "5");
    assert_ne!(one, two);

    let run = temp
        .pgr()
        .args(&["--format", "json", "replay", "--all"])
        .passes();
    let view = run.stdout_json();

    assert_eq!(view["report"]["applied"], 8);
    assert_eq!(view["report"]["failures"], Value::Array(vec![]));
    let contracts = view["contracts"].as_array().unwrap();
    assert_eq!(contracts.len(), 2);
    for (address, name, balance) in [(&one, "One", "10"), (&two, "Two", "5")] {
        let contract = contracts
            .iter()
            .find(|c| c["address"] == address.as_str())
            .unwrap();
        assert_eq!(contract["name"], name);
        assert_eq!(contract["balance"], balance);
        assert_eq!(contract["calls"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn replay_all_includes_cross_playground_registration() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "1", BOB]).passes();
    temp.pgr().args(&["account", "fund", "1", BOB, "7"]).passes();
    temp.pgr()
        .args(&["account", "register", "2", BOB, "--label", "shared"])
        .passes();

    temp.pgr()
        .args(&["replay", "--all"])
        .passes()
        .stdout_has("Replayed unified: 3 of 3 actions applied")
        .stdout_has(&format!("{}  balance 7  (shared)", BOB));
}
