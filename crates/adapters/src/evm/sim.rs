// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory simulated environment
//!
//! Models balances and deployed contracts only; no bytecode is executed.
//! State lives behind a shared handle so callers (and tests) decide which
//! environment an adapter mutates.

use super::{AdapterError, AdapterOutput, EvmAdapter};
use async_trait::async_trait;
use pgr_core::{
    Address, Bytecode, CallFunction, CreateAccount, DeployContract, FundAccount, PlaygroundId,
    RegisterAccount,
};
use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub address: Address,
    #[serde(with = "pgr_core::action::amount")]
    pub balance: u128,
    pub label: Option<String>,
    /// Contracts deployed so far in each playground; feeds contract
    /// address derivation
    pub nonces: BTreeMap<PlaygroundId, u64>,
    pub playgrounds: BTreeSet<PlaygroundId>,
}

impl Account {
    fn new(address: Address, label: Option<String>, playground_id: PlaygroundId) -> Self {
        Self {
            address,
            balance: 0,
            label,
            nonces: BTreeMap::new(),
            playgrounds: BTreeSet::from([playground_id]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractCall {
    pub caller: Address,
    pub function: String,
    pub args: Vec<Value>,
    #[serde(with = "pgr_core::action::amount")]
    pub value: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    pub address: Address,
    pub deployer: Address,
    pub playground_id: PlaygroundId,
    pub name: Option<String>,
    pub bytecode: Bytecode,
    pub constructor_args: Vec<Value>,
    #[serde(with = "pgr_core::action::amount")]
    pub balance: u128,
    pub calls: Vec<ContractCall>,
}

/// Accounts and contracts of a simulated environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub accounts: BTreeMap<Address, Account>,
    pub contracts: BTreeMap<Address, Contract>,
}

impl Environment {
    pub fn balance(&self, address: &Address) -> Option<u128> {
        self.accounts.get(address).map(|a| a.balance)
    }

    /// Accounts created in or registered with a playground
    pub fn accounts_in(&self, playground_id: PlaygroundId) -> Vec<&Account> {
        self.accounts
            .values()
            .filter(|a| a.playgrounds.contains(&playground_id))
            .collect()
    }

    pub fn contracts_in(&self, playground_id: PlaygroundId) -> Vec<&Contract> {
        self.contracts
            .values()
            .filter(|c| c.playground_id == playground_id)
            .collect()
    }
}

pub type SharedEnvironment = Arc<Mutex<Environment>>;

/// Derive a contract address from the playground, its deployer and the
/// deployer's nonce within that playground
///
/// Only the playground's own log feeds the nonce, so a single-playground
/// replay and a unified replay derive the same address.
pub(crate) fn contract_address(
    playground_id: PlaygroundId,
    deployer: &Address,
    nonce: u64,
) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(playground_id.get().to_be_bytes());
    hasher.update(deployer.as_str().as_bytes());
    hasher.update(nonce.to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; Address::LEN];
    bytes.copy_from_slice(&digest[..Address::LEN]);
    Address::from_bytes(bytes)
}

/// Adapter backed by an in-memory [`Environment`]
#[derive(Clone, Default)]
pub struct SimAdapter {
    env: SharedEnvironment,
}

impl SimAdapter {
    /// Adapter over a fresh, empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter over an existing environment handle
    pub fn with_environment(env: SharedEnvironment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> SharedEnvironment {
        Arc::clone(&self.env)
    }

    /// Copy of the current environment state
    pub fn snapshot(&self) -> Environment {
        self.env.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl EvmAdapter for SimAdapter {
    async fn create_account(
        &self,
        playground_id: PlaygroundId,
        op: &CreateAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        let mut env = self.env.lock().unwrap_or_else(|e| e.into_inner());

        let created = match env.accounts.get_mut(&op.address) {
            Some(account) => {
                account.playgrounds.insert(playground_id);
                false
            }
            None => {
                env.accounts.insert(
                    op.address.clone(),
                    Account::new(op.address.clone(), op.label.clone(), playground_id),
                );
                true
            }
        };

        Ok(AdapterOutput::with_data(
            json!({ "address": op.address, "created": created }),
        ))
    }

    async fn fund_account(
        &self,
        _playground_id: PlaygroundId,
        op: &FundAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        let mut env = self.env.lock().unwrap_or_else(|e| e.into_inner());
        let account = env
            .accounts
            .get_mut(&op.address)
            .ok_or_else(|| AdapterError::AccountNotFound(op.address.clone()))?;

        account.balance = account
            .balance
            .checked_add(op.amount)
            .ok_or_else(|| AdapterError::BalanceOverflow(op.address.clone()))?;

        Ok(AdapterOutput::with_data(
            json!({ "address": op.address, "balance": account.balance.to_string() }),
        ))
    }

    async fn deploy_contract(
        &self,
        playground_id: PlaygroundId,
        op: &DeployContract,
    ) -> Result<AdapterOutput, AdapterError> {
        let mut env = self.env.lock().unwrap_or_else(|e| e.into_inner());
        let deployer = env
            .accounts
            .get_mut(&op.deployer)
            .ok_or_else(|| AdapterError::AccountNotFound(op.deployer.clone()))?;

        let nonce = deployer.nonces.entry(playground_id).or_insert(0);
        let address = contract_address(playground_id, &op.deployer, *nonce);
        *nonce += 1;

        env.contracts.insert(
            address.clone(),
            Contract {
                address: address.clone(),
                deployer: op.deployer.clone(),
                playground_id,
                name: op.name.clone(),
                bytecode: op.bytecode.clone(),
                constructor_args: op.constructor_args.clone(),
                balance: 0,
                calls: Vec::new(),
            },
        );

        Ok(AdapterOutput::with_data(json!({ "address": address })))
    }

    async fn call_function(
        &self,
        _playground_id: PlaygroundId,
        op: &CallFunction,
    ) -> Result<AdapterOutput, AdapterError> {
        let mut env = self.env.lock().unwrap_or_else(|e| e.into_inner());

        let contract_balance = env
            .contracts
            .get(&op.contract)
            .map(|c| c.balance)
            .ok_or_else(|| AdapterError::ContractNotFound(op.contract.clone()))?;
        let credited = contract_balance
            .checked_add(op.value)
            .ok_or_else(|| AdapterError::BalanceOverflow(op.contract.clone()))?;

        let caller = env
            .accounts
            .get_mut(&op.caller)
            .ok_or_else(|| AdapterError::AccountNotFound(op.caller.clone()))?;
        if caller.balance < op.value {
            return Err(AdapterError::InsufficientBalance {
                address: op.caller.clone(),
                available: caller.balance,
                required: op.value,
            });
        }
        caller.balance -= op.value;

        let contract = env
            .contracts
            .get_mut(&op.contract)
            .ok_or_else(|| AdapterError::ContractNotFound(op.contract.clone()))?;
        contract.balance = credited;
        contract.calls.push(ContractCall {
            caller: op.caller.clone(),
            function: op.function.clone(),
            args: op.args.clone(),
            value: op.value,
        });

        Ok(AdapterOutput::with_data(json!({
            "contract": op.contract,
            "function": op.function,
            "call_index": contract.calls.len() - 1,
        })))
    }

    async fn register_account(
        &self,
        playground_id: PlaygroundId,
        op: &RegisterAccount,
    ) -> Result<AdapterOutput, AdapterError> {
        let mut env = self.env.lock().unwrap_or_else(|e| e.into_inner());
        let account = env
            .accounts
            .entry(op.address.clone())
            .or_insert_with(|| Account::new(op.address.clone(), None, playground_id));

        account.playgrounds.insert(playground_id);
        if account.label.is_none() {
            account.label = op.label.clone();
        }

        Ok(AdapterOutput::with_data(json!({ "address": op.address })))
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
