// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account commands

use super::Context;
use clap::{Args, Subcommand};
use pgr_core::{Address, CreateAccount, FundAccount, PlaygroundId, RegisterAccount};

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Create an account in a playground
    Create {
        playground: PlaygroundId,
        address: Address,
        #[arg(long)]
        label: Option<String>,
    },
    /// Credit an existing account
    Fund {
        playground: PlaygroundId,
        address: Address,
        /// Amount in the smallest unit
        amount: u128,
    },
    /// Register a known account with a playground
    Register {
        playground: PlaygroundId,
        address: Address,
        #[arg(long)]
        label: Option<String>,
    },
}

pub async fn handle(ctx: &Context, args: AccountArgs) -> anyhow::Result<()> {
    match args.command {
        AccountCommand::Create {
            playground,
            address,
            label,
        } => {
            ctx.perform(playground, CreateAccount { address, label }.into())
                .await
        }
        AccountCommand::Fund {
            playground,
            address,
            amount,
        } => {
            ctx.perform(playground, FundAccount { address, amount }.into())
                .await
        }
        AccountCommand::Register {
            playground,
            address,
            label,
        } => {
            ctx.perform(playground, RegisterAccount { address, label }.into())
                .await
        }
    }
}
