// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use serde_json::json;
use yare::parameterized;

const ALICE: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const TOKEN: &str = "0xcccccccccccccccccccccccccccccccccccccccc";

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

#[parameterized(
    create = { ActionType::CreateAccount, "CREATE_ACCOUNT" },
    fund = { ActionType::FundAccount, "FUND_ACCOUNT" },
    deploy = { ActionType::DeployContract, "DEPLOY_CONTRACT" },
    call = { ActionType::CallFunction, "CALL_FUNCTION" },
    register = { ActionType::RegisterAccount, "REGISTER_ACCOUNT" },
)]
fn action_type_tags(ty: ActionType, tag: &str) {
    assert_eq!(ty.as_str(), tag);
    assert_eq!(tag.parse::<ActionType>().unwrap(), ty);
    assert_eq!(serde_json::to_value(ty).unwrap(), json!(tag));
}

#[test]
fn unknown_tag_is_rejected() {
    let err = "SELF_DESTRUCT".parse::<ActionType>().unwrap_err();
    assert_eq!(err.tag, "SELF_DESTRUCT");
    assert_eq!(err.to_string(), "unknown action type: SELF_DESTRUCT");
}

#[test]
fn fund_amount_is_encoded_as_string() {
    let action = Action::from(FundAccount {
        address: addr(ALICE),
        amount: 1000,
    });
    assert_eq!(action.encode(), json!({ "address": ALICE, "amount": "1000" }));
}

#[test]
fn fund_amount_accepts_numbers() {
    let action = Action::decode(
        ActionType::FundAccount,
        &json!({ "address": ALICE, "amount": 42 }),
    )
    .unwrap();
    assert_eq!(
        action,
        Action::FundAccount(FundAccount {
            address: addr(ALICE),
            amount: 42
        })
    );
}

#[test]
fn amounts_above_u64_survive() {
    let big = u128::from(u64::MAX) * 1000;
    let action = Action::from(FundAccount {
        address: addr(ALICE),
        amount: big,
    });
    let decoded = Action::decode(ActionType::FundAccount, &action.encode()).unwrap();
    assert_eq!(decoded, action);
}

#[test]
fn call_value_defaults_to_zero() {
    let action = Action::decode(
        ActionType::CallFunction,
        &json!({ "caller": ALICE, "contract": TOKEN, "function": "ping" }),
    )
    .unwrap();
    let Action::CallFunction(call) = action else {
        panic!("expected CallFunction");
    };
    assert_eq!(call.value, 0);
    assert!(call.args.is_empty());
}

#[parameterized(
    missing_field = { ActionType::FundAccount, json!({ "address": ALICE }) },
    wrong_shape = { ActionType::CreateAccount, json!("just a string") },
    bad_address = { ActionType::RegisterAccount, json!({ "address": "0x123" }) },
    unknown_field = { ActionType::CreateAccount, json!({ "address": ALICE, "nonce": 1 }) },
    odd_bytecode = { ActionType::DeployContract, json!({ "deployer": ALICE, "bytecode": "0x123" }) },
    bytecode_prefix = { ActionType::DeployContract, json!({ "deployer": ALICE, "bytecode": "6080" }) },
    negative_amount = { ActionType::FundAccount, json!({ "address": ALICE, "amount": "-5" }) },
)]
fn malformed_payloads_fail_to_decode(ty: ActionType, payload: Value) {
    let err = Action::decode(ty, &payload).unwrap_err();
    assert_eq!(err.action_type, ty);
}

#[test]
fn payload_of_other_type_fails_to_decode() {
    let create = Action::from(CreateAccount {
        address: addr(ALICE),
        label: None,
    });
    assert!(Action::decode(ActionType::FundAccount, &create.encode()).is_err());
}

#[test]
fn mixed_case_bytecode_round_trips() {
    let action = Action::from(DeployContract {
        deployer: addr(ALICE),
        bytecode: "0x60AB".parse().unwrap(),
        constructor_args: vec![],
        name: None,
    });
    let decoded = Action::decode(ActionType::DeployContract, &action.encode()).unwrap();
    assert_eq!(decoded, action);
    assert_eq!(action.encode()["bytecode"], json!("0x60ab"));
}

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; Address::LEN]>().prop_map(Address::from_bytes)
}

fn arb_json() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (arb_address(), proptest::option::of("[a-zA-Z ]{1,16}")).prop_map(|(address, label)| {
            Action::from(CreateAccount { address, label })
        }),
        (arb_address(), any::<u128>())
            .prop_map(|(address, amount)| Action::from(FundAccount { address, amount })),
        (
            arb_address(),
            "0[xX]([0-9a-fA-F]{2}){0,32}",
            proptest::collection::vec(arb_json(), 0..4),
            proptest::option::of("[A-Za-z]{1,12}"),
        )
            .prop_map(|(deployer, code, constructor_args, name)| {
                let bytecode: Bytecode = code.parse().unwrap();
                Action::from(DeployContract {
                    deployer,
                    bytecode,
                    constructor_args,
                    name,
                })
            }),
        (
            arb_address(),
            arb_address(),
            "[a-zA-Z_][a-zA-Z0-9_]{0,15}",
            proptest::collection::vec(arb_json(), 0..4),
            any::<u128>(),
        )
            .prop_map(|(caller, contract, function, args, value)| {
                Action::from(CallFunction {
                    caller,
                    contract,
                    function,
                    args,
                    value,
                })
            }),
        (arb_address(), proptest::option::of("[a-zA-Z ]{1,16}")).prop_map(|(address, label)| {
            Action::from(RegisterAccount { address, label })
        }),
    ]
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(action in arb_action()) {
        let decoded = Action::decode(action.action_type(), &action.encode()).unwrap();
        prop_assert_eq!(decoded, action);
    }
}
