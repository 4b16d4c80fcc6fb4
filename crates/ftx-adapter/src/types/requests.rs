/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request bodies and query filter records
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::http::query::{QueryBuilder, QueryOptions};
use crate::http::Result;

/// Body of `POST /wallet/withdrawals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub coin: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl WithdrawalRequest {
    pub fn new(coin: impl Into<String>, size: Decimal, address: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            size,
            address: address.into(),
            tag: None,
            method: None,
            password: None,
            code: None,
        }
    }
}

/// Time-range filter in Unix seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

impl QueryOptions for TimeRange {
    fn write_query(&self, query: &mut QueryBuilder) -> Result<()> {
        query
            .push("start_time", &self.start_time)?
            .push("end_time", &self.end_time)?;
        Ok(())
    }
}

pub type DepositHistoryOptions = TimeRange;
pub type WithdrawalHistoryOptions = TimeRange;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::query::add_options;
    use url::Url;

    #[test]
    fn test_withdrawal_request_body() {
        let mut request =
            WithdrawalRequest::new("USDTBEAR", "20.9".parse().unwrap(), "0x83a127952d266A6eA306c40Ac62A4a70668FE3BE");
        request.password = Some("my_withdrawal_password".to_string());

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "coin": "USDTBEAR",
                "size": 20.9,
                "address": "0x83a127952d266A6eA306c40Ac62A4a70668FE3BE",
                "password": "my_withdrawal_password",
            })
        );
    }

    #[test]
    fn test_time_range_query() {
        let base = Url::parse("https://ftx.com/api/wallet/withdrawals").unwrap();
        let range = TimeRange {
            start_time: Some(1_564_146_934),
            end_time: None,
        };
        let url = add_options(base.clone(), &range).unwrap();
        assert_eq!(url.query(), Some("start_time=1564146934"));

        let url = add_options(base.clone(), &TimeRange::default()).unwrap();
        assert_eq!(url, base);
    }
}
