/*
[INPUT]:  API key and secret from the environment
[OUTPUT]: Wallet balances and recent deposits
[POS]:    Examples - wallet queries
[UPDATE]: When wallet API changes
*/

use ftx_adapter::*;

/// Example: signed wallet queries
///
/// Requires FTX_API_KEY and FTX_API_SECRET, optionally FTX_SUBACCOUNT.
#[tokio::main]
async fn main() {
    println!("=== FTX Wallet Example ===\n");

    let mut client = match FtxClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let (Ok(key), Ok(secret)) = (std::env::var("FTX_API_KEY"), std::env::var("FTX_API_SECRET")) else {
        eprintln!("Set FTX_API_KEY and FTX_API_SECRET to run this example");
        return;
    };
    client.set_auth(key, secret);
    if let Ok(sub_account) = std::env::var("FTX_SUBACCOUNT") {
        client.set_sub_account(&sub_account);
    }

    match client.wallet().get_balances().await {
        Ok(balances) => {
            for balance in balances {
                println!("{:>10} total={} free={}", balance.coin, balance.total, balance.free);
            }
        }
        Err(e) => eprintln!("Failed to fetch balances: {}", e),
    }

    let last_day = TimeRange {
        start_time: Some(chrono::Utc::now().timestamp() - 24 * 60 * 60),
        end_time: None,
    };
    match client.wallet().get_deposit_history(Some(&last_day)).await {
        Ok(deposits) => println!("\n{} deposits in the last 24h", deposits.len()),
        Err(e) => eprintln!("Failed to fetch deposits: {}", e),
    }
}
