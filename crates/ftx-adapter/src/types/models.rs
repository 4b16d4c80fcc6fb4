/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed wallet records (balances, deposits, withdrawals, coins)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{DepositStatus, WithdrawalStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin: String,
    pub free: Decimal,
    #[serde(default)]
    pub spot_borrow: Decimal,
    pub total: Decimal,
    pub usd_value: Decimal,
    #[serde(default)]
    pub available_without_borrow: Decimal,
}

/// Withdrawal record; `size` accepts either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(deserialize_with = "serde_helpers::integral")]
    pub id: i64,
    pub coin: String,
    pub size: Decimal,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    pub status: WithdrawalStatus,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    #[serde(deserialize_with = "serde_helpers::integral")]
    pub id: i64,
    pub coin: String,
    pub size: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::integral_option")]
    pub confirmations: Option<i64>,
    #[serde(default)]
    pub confirmed_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub sent_time: Option<DateTime<Utc>>,
    pub status: DepositStatus,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub can_deposit: bool,
    #[serde(default)]
    pub can_withdraw: bool,
    #[serde(default)]
    pub can_convert: bool,
    #[serde(default)]
    pub has_tag: bool,
    #[serde(default)]
    pub collateral: bool,
    #[serde(default)]
    pub collateral_weight: Decimal,
    #[serde(default)]
    pub credit_to: Option<String>,
    #[serde(default)]
    pub fiat: bool,
    #[serde(default)]
    pub is_token: bool,
    #[serde(default)]
    pub usd_fungible: bool,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub bep2_asset: Option<String>,
    #[serde(default)]
    pub erc20_contract: Option<String>,
    #[serde(default)]
    pub spl_mint: Option<String>,
    #[serde(default)]
    pub trc20_contract: Option<String>,
}

mod serde_helpers {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    // Counters and ids arrive as either `64` or `64.0`
    fn to_i64(number: &Number) -> Option<i64> {
        number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
                .map(|value| value as i64)
        })
    }

    pub fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = Number::deserialize(deserializer)?;
        to_i64(&number)
            .ok_or_else(|| D::Error::custom(format!("expected an integral number, got {number}")))
    }

    pub fn integral_option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Number>::deserialize(deserializer)?
            .map(|number| {
                to_i64(&number).ok_or_else(|| {
                    D::Error::custom(format!("expected an integral number, got {number}"))
                })
            })
            .transpose()
    }
}
