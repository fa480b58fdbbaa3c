// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action types and their typed payloads
//!
//! Every mutating playground operation is one [`Action`]. The persisted form
//! is a type tag plus a JSON payload whose shape is fixed by the tag.

use crate::address::Address;
use crate::bytecode::Bytecode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of operation kinds that can appear in an action log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    CreateAccount,
    FundAccount,
    DeployContract,
    CallFunction,
    RegisterAccount,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        ActionType::CreateAccount,
        ActionType::FundAccount,
        ActionType::DeployContract,
        ActionType::CallFunction,
        ActionType::RegisterAccount,
    ];

    /// The tag written to the log
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::CreateAccount => "CREATE_ACCOUNT",
            ActionType::FundAccount => "FUND_ACCOUNT",
            ActionType::DeployContract => "DEPLOY_CONTRACT",
            ActionType::CallFunction => "CALL_FUNCTION",
            ActionType::RegisterAccount => "REGISTER_ACCOUNT",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A log tag with no matching [`ActionType`] or no registered executor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action type: {tag}")]
pub struct UnknownActionType {
    pub tag: String,
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownActionType { tag: s.to_string() })
    }
}

/// A payload that does not match the schema of its declared type
#[derive(Debug, Error)]
#[error("payload does not match {action_type} schema: {source}")]
pub struct PayloadDecodeError {
    pub action_type: ActionType,
    #[source]
    pub source: serde_json::Error,
}

/// Create a new account in the playground environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAccount {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Credit an existing account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FundAccount {
    pub address: Address,
    #[serde(with = "amount")]
    pub amount: u128,
}

/// Deploy contract bytecode from a deployer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployContract {
    pub deployer: Address,
    pub bytecode: Bytecode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructor_args: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Invoke a function on a deployed contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallFunction {
    pub caller: Address,
    pub contract: Address,
    pub function: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
    #[serde(with = "amount", default)]
    pub value: u128,
}

/// Associate an already-known account with a playground
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterAccount {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One mutating operation, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateAccount(CreateAccount),
    FundAccount(FundAccount),
    DeployContract(DeployContract),
    CallFunction(CallFunction),
    RegisterAccount(RegisterAccount),
}

impl Action {
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::CreateAccount(_) => ActionType::CreateAccount,
            Action::FundAccount(_) => ActionType::FundAccount,
            Action::DeployContract(_) => ActionType::DeployContract,
            Action::CallFunction(_) => ActionType::CallFunction,
            Action::RegisterAccount(_) => ActionType::RegisterAccount,
        }
    }

    /// Encode the payload (without the type tag)
    pub fn encode(&self) -> Value {
        // Payloads hold only strings, integers and JSON values, so
        // serialization cannot fail.
        let encoded = match self {
            Action::CreateAccount(p) => serde_json::to_value(p),
            Action::FundAccount(p) => serde_json::to_value(p),
            Action::DeployContract(p) => serde_json::to_value(p),
            Action::CallFunction(p) => serde_json::to_value(p),
            Action::RegisterAccount(p) => serde_json::to_value(p),
        };
        encoded.unwrap_or(Value::Null)
    }

    /// Decode a payload according to the schema of `action_type`
    pub fn decode(action_type: ActionType, payload: &Value) -> Result<Self, PayloadDecodeError> {
        let err = |source| PayloadDecodeError {
            action_type,
            source,
        };
        let action = match action_type {
            ActionType::CreateAccount => {
                Action::CreateAccount(CreateAccount::deserialize(payload).map_err(err)?)
            }
            ActionType::FundAccount => {
                Action::FundAccount(FundAccount::deserialize(payload).map_err(err)?)
            }
            ActionType::DeployContract => {
                Action::DeployContract(DeployContract::deserialize(payload).map_err(err)?)
            }
            ActionType::CallFunction => {
                Action::CallFunction(CallFunction::deserialize(payload).map_err(err)?)
            }
            ActionType::RegisterAccount => {
                Action::RegisterAccount(RegisterAccount::deserialize(payload).map_err(err)?)
            }
        };
        Ok(action)
    }
}

impl From<CreateAccount> for Action {
    fn from(p: CreateAccount) -> Self {
        Action::CreateAccount(p)
    }
}

impl From<FundAccount> for Action {
    fn from(p: FundAccount) -> Self {
        Action::FundAccount(p)
    }
}

impl From<DeployContract> for Action {
    fn from(p: DeployContract) -> Self {
        Action::DeployContract(p)
    }
}

impl From<CallFunction> for Action {
    fn from(p: CallFunction) -> Self {
        Action::CallFunction(p)
    }
}

impl From<RegisterAccount> for Action {
    fn from(p: RegisterAccount) -> Self {
        Action::RegisterAccount(p)
    }
}

/// Token amounts as decimal strings; JSON numbers lose precision above 2^53.
pub mod amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
            Raw::Number(n) => Ok(u128::from(n)),
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
