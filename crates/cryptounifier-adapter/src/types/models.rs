/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Merchant invoice. The server returns partial views of this record
/// depending on the endpoint, so most fields tolerate absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub invoice_hash: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: i64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub target_value: Option<Decimal>,
    #[serde(default)]
    pub cryptocurrencies: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-cryptocurrency price quotation for an invoice target value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePriceEstimate {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quotation: Decimal,
}

/// Node-side view of the cryptocurrency blockchain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: u64,
    pub difficulty: f64,
    pub sync_percentage: f64,
}

/// Confirmed and unconfirmed wallet balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(with = "rust_decimal::serde::str")]
    pub confirmed: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub unconfirmed: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// Estimated transaction fee and its per-byte cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    #[serde(rename = "final", with = "rust_decimal::serde::str")]
    pub final_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_byte: Decimal,
}

/// Broadcast result for a sent transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastedTransaction {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    pub txid: String,
    #[serde(with = "serde_helpers::decimal_str_map")]
    pub destinations: HashMap<String, Decimal>,
    pub created_at: DateTime<Utc>,
}

pub(crate) mod serde_helpers {
    /// Maps of address -> amount where the server encodes amounts as
    /// fixed-precision strings ("0.00100000").
    pub mod decimal_str_map {
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};
        use std::collections::HashMap;
        use std::str::FromStr;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Decimal>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw: HashMap<String, String> = HashMap::deserialize(deserializer)?;
            raw.into_iter()
                .map(|(address, amount)| {
                    Decimal::from_str(&amount)
                        .map(|amount| (address, amount))
                        .map_err(serde::de::Error::custom)
                })
                .collect()
        }

        pub fn serialize<S>(
            values: &HashMap<String, Decimal>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let strings: HashMap<&String, String> = values
                .iter()
                .map(|(address, amount)| (address, amount.to_string()))
                .collect();
            strings.serialize(serializer)
        }
    }
}
