// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Contract commands

use super::{parse_arg, Context};
use clap::{Args, Subcommand};
use pgr_core::{Action, ActionType, Address, CallFunction, PlaygroundId};
use serde_json::json;

#[derive(Args)]
pub struct ContractArgs {
    #[command(subcommand)]
    pub command: ContractCommand,
}

#[derive(Subcommand)]
pub enum ContractCommand {
    /// Deploy contract bytecode
    Deploy {
        playground: PlaygroundId,
        deployer: Address,
        /// 0x-prefixed hex bytecode
        bytecode: String,
        #[arg(long)]
        name: Option<String>,
        /// Constructor argument (JSON, or a plain string); repeatable
        #[arg(long = "arg")]
        args: Vec<String>,
    },
    /// Call a function on a deployed contract
    Call {
        playground: PlaygroundId,
        caller: Address,
        contract: Address,
        function: String,
        /// Value transferred to the contract
        #[arg(long, default_value_t = 0)]
        value: u128,
        /// Function argument (JSON, or a plain string); repeatable
        #[arg(long = "arg")]
        args: Vec<String>,
    },
}

pub async fn handle(ctx: &Context, args: ContractArgs) -> anyhow::Result<()> {
    match args.command {
        ContractCommand::Deploy {
            playground,
            deployer,
            bytecode,
            name,
            args,
        } => {
            // Bytecode is checked by the payload schema
            let payload = json!({
                "deployer": deployer,
                "bytecode": bytecode,
                "constructor_args": args.iter().map(|a| parse_arg(a)).collect::<Vec<_>>(),
                "name": name,
            });
            let action = Action::decode(ActionType::DeployContract, &payload)?;
            ctx.perform(playground, action).await
        }
        ContractCommand::Call {
            playground,
            caller,
            contract,
            function,
            value,
            args,
        } => {
            let op = CallFunction {
                caller,
                contract,
                function,
                args: args.iter().map(|a| parse_arg(a)).collect(),
                value,
            };
            ctx.perform(playground, op.into()).await
        }
    }
}
