//! Contract action specs

use crate::prelude::*;

fn deploy(temp: &Project) -> String {
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();
    temp.pgr()
        .args(&["account", "fund", "7", ALICE, "100"])
        .passes();

    let run = temp
        .pgr()
        .args(&[
            "--format", "json", "contract", "deploy", "7", ALICE, "0x6080", "--name", "Token",
        ])
        .passes();
    let out = run.stdout_json();
    assert_eq!(out["action_type"], "DEPLOY_CONTRACT");
    out["output"]["address"].as_str().unwrap().to_string()
}

#[test]
fn deploy_then_call_transfers_value() {
    let temp = Project::empty();
    let contract = deploy(&temp);

    temp.pgr()
        .args(&[
            "contract", "call", "7", ALICE, &contract, "mint", "--value", "40", "--arg", "5",
        ])
        .passes()
        .stdout_has("recorded CALL_FUNCTION #4 in playground 7");

    temp.pgr()
        .args(&["replay", "7"])
        .passes()
        .stdout_has("4 of 4 actions applied")
        .stdout_has("balance 60")
        .stdout_has("Token")
        .stdout_has("calls 1");
}

#[test]
fn replayed_deploy_reproduces_contract_address() {
    let temp = Project::empty();
    let contract = deploy(&temp);

    temp.pgr()
        .args(&["replay", "7"])
        .passes()
        .stdout_has(&contract);
}

#[test]
fn call_with_insufficient_balance_is_rejected() {
    let temp = Project::empty();
    let contract = deploy(&temp);

    temp.pgr()
        .args(&["contract", "call", "7", ALICE, &contract, "mint", "--value", "1000"])
        .fails()
        .stderr_has("insufficient balance");

    temp.pgr()
        .args(&["replay", "7"])
        .passes()
        .stdout_has("3 of 3 actions applied");
}

#[test]
fn deploy_rejects_non_hex_bytecode() {
    let temp = Project::empty();
    temp.pgr().args(&["account", "create", "7", ALICE]).passes();

    temp.pgr()
        .args(&["contract", "deploy", "7", ALICE, "0xzz"])
        .fails()
        .stderr_has("hex");
}
