/*
[INPUT]:  Optional time-range filters, withdrawal requests, API credentials
[OUTPUT]: Wallet data (balances, deposits, withdrawals, coin metadata)
[POS]:    HTTP layer - wallet endpoints (require API key signature)
[UPDATE]: When adding new wallet endpoints or changing query parameters
*/

// ### Wallet Endpoints

use reqwest::Method;

use crate::http::query::add_options;
use crate::http::{Access, FtxClient, Result};
use crate::types::{
    ApiResponse, Balance, Coin, Deposit, DepositHistoryOptions, Withdrawal,
    WithdrawalHistoryOptions, WithdrawalRequest,
};

const PATH_BALANCES: &str = "/wallet/balances";
const PATH_WITHDRAWALS: &str = "/wallet/withdrawals";
const PATH_DEPOSITS: &str = "/wallet/deposits";
const PATH_COINS: &str = "/wallet/coins";

/// Wallet endpoints bound to a client
#[derive(Debug, Clone, Copy)]
pub struct WalletService<'a> {
    client: &'a FtxClient,
}

impl<'a> WalletService<'a> {
    pub fn new(client: &'a FtxClient) -> Self {
        Self { client }
    }

    /// GET /wallet/balances
    pub async fn get_balances(&self) -> Result<Vec<Balance>> {
        let url = self.client.endpoint(PATH_BALANCES)?;
        let response: ApiResponse<Vec<Balance>> = self
            .client
            .execute::<(), _>(Method::GET, url, None, Access::Private)
            .await?;
        Ok(response.into_result())
    }

    /// GET /wallet/withdrawals?start_time={start}&end_time={end}
    pub async fn get_withdrawal_history(
        &self,
        opts: Option<&WithdrawalHistoryOptions>,
    ) -> Result<Vec<Withdrawal>> {
        let url = add_options(self.client.endpoint(PATH_WITHDRAWALS)?, &opts.copied())?;
        let response: ApiResponse<Vec<Withdrawal>> = self
            .client
            .execute::<(), _>(Method::GET, url, None, Access::Private)
            .await?;
        Ok(response.into_result())
    }

    /// POST /wallet/withdrawals
    pub async fn request_withdrawal(&self, request: &WithdrawalRequest) -> Result<Withdrawal> {
        let url = self.client.endpoint(PATH_WITHDRAWALS)?;
        let response: ApiResponse<Withdrawal> = self
            .client
            .execute(Method::POST, url, Some(request), Access::Private)
            .await?;
        Ok(response.into_result())
    }

    /// GET /wallet/deposits?start_time={start}&end_time={end}
    pub async fn get_deposit_history(
        &self,
        opts: Option<&DepositHistoryOptions>,
    ) -> Result<Vec<Deposit>> {
        let url = add_options(self.client.endpoint(PATH_DEPOSITS)?, &opts.copied())?;
        let response: ApiResponse<Vec<Deposit>> = self
            .client
            .execute::<(), _>(Method::GET, url, None, Access::Private)
            .await?;
        Ok(response.into_result())
    }

    /// GET /wallet/coins
    pub async fn get_coins(&self) -> Result<Vec<Coin>> {
        let url = self.client.endpoint(PATH_COINS)?;
        let response: ApiResponse<Vec<Coin>> = self
            .client
            .execute::<(), _>(Method::GET, url, None, Access::Private)
            .await?;
        Ok(response.into_result())
    }
}
