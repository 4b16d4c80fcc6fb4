/*
[INPUT]:  Parsed CLI subcommand and a configured FtxClient
[OUTPUT]: JSON value of the wallet endpoint result
[POS]:    Command layer - maps subcommands onto wallet endpoints
[UPDATE]: When adding new wallet commands
*/

use anyhow::Context;
use clap::Subcommand;
use ftx_adapter::{FtxClient, TimeRange, WithdrawalRequest};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List wallet balances
    Balances,
    /// List coin metadata
    Coins,
    /// Deposit history, optionally bounded in Unix seconds
    Deposits {
        #[arg(long = "start-time")]
        start_time: Option<i64>,
        #[arg(long = "end-time")]
        end_time: Option<i64>,
    },
    /// Withdrawal history, optionally bounded in Unix seconds
    Withdrawals {
        #[arg(long = "start-time")]
        start_time: Option<i64>,
        #[arg(long = "end-time")]
        end_time: Option<i64>,
    },
    /// Request a withdrawal
    Withdraw {
        #[arg(long)]
        coin: String,
        #[arg(long)]
        size: Decimal,
        #[arg(long)]
        address: String,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        code: Option<String>,
    },
}

pub async fn run(client: &FtxClient, command: Command) -> anyhow::Result<Value> {
    let wallet = client.wallet();
    let value = match command {
        Command::Balances => {
            let balances = wallet.get_balances().await.context("get balances")?;
            info!(count = balances.len(), "balances fetched");
            serde_json::to_value(balances)?
        }
        Command::Coins => {
            let coins = wallet.get_coins().await.context("get coins")?;
            info!(count = coins.len(), "coins fetched");
            serde_json::to_value(coins)?
        }
        Command::Deposits {
            start_time,
            end_time,
        } => {
            let range = TimeRange {
                start_time,
                end_time,
            };
            let deposits = wallet
                .get_deposit_history(Some(&range))
                .await
                .context("get deposit history")?;
            info!(count = deposits.len(), "deposits fetched");
            serde_json::to_value(deposits)?
        }
        Command::Withdrawals {
            start_time,
            end_time,
        } => {
            let range = TimeRange {
                start_time,
                end_time,
            };
            let withdrawals = wallet
                .get_withdrawal_history(Some(&range))
                .await
                .context("get withdrawal history")?;
            info!(count = withdrawals.len(), "withdrawals fetched");
            serde_json::to_value(withdrawals)?
        }
        Command::Withdraw {
            coin,
            size,
            address,
            tag,
            method,
            password,
            code,
        } => {
            let request = WithdrawalRequest {
                coin,
                size,
                address,
                tag,
                method,
                password,
                code,
            };
            let withdrawal = wallet
                .request_withdrawal(&request)
                .await
                .context("request withdrawal")?;
            info!(id = withdrawal.id, coin = %withdrawal.coin, "withdrawal requested");
            serde_json::to_value(withdrawal)?
        }
    };
    Ok(value)
}
