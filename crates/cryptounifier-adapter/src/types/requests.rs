/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query parameters for invoice lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInfoQuery {
    pub invoice_hash: String,
}

/// Query parameters for transaction lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfoQuery {
    pub txid: String,
}

/// Body for batch invoice operations (process, forward)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHashesRequest {
    pub invoice_hashes: Vec<String>,
}

/// Body for per-cryptocurrency invoice operations (generate address,
/// recover private key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCryptoRequest {
    pub invoice_hash: String,
    pub cryptocurrency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub cryptocurrencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInvoicePriceRequest {
    pub cryptocurrencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateAddressesRequest {
    pub addresses: Vec<String>,
}

/// Body shared by fee estimation and transaction broadcast, on both the
/// wallet and wallet-token resources. Destination amounts travel as plain
/// JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(with = "serde_helpers::decimal_number_map")]
    pub destinations: HashMap<String, Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_per_byte: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_field: Option<String>,
}

impl TransferRequest {
    /// Transfer to the given destinations with server-chosen fee
    pub fn new(destinations: HashMap<String, Decimal>) -> Self {
        Self {
            destinations,
            fee_per_byte: None,
            extra_field: None,
        }
    }
}

pub(crate) mod serde_helpers {
    /// Maps of address -> amount where amounts are encoded as JSON numbers
    /// ({"addr": 0.001}), unlike the string encoding used in responses.
    pub mod decimal_number_map {
        use rust_decimal::Decimal;
        use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
        use serde::{Deserialize, Deserializer, Serialize, Serializer};
        use std::collections::HashMap;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Decimal>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw: HashMap<String, f64> = HashMap::deserialize(deserializer)?;
            raw.into_iter()
                .map(|(address, amount)| {
                    Decimal::from_f64(amount)
                        .map(|amount| (address, amount.normalize()))
                        .ok_or_else(|| {
                            serde::de::Error::custom(format!("invalid amount for {address}"))
                        })
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
            let numbers: Result<HashMap<&String, f64>, S::Error> = values
                .iter()
                .map(|(address, amount)| {
                    amount
                        .to_f64()
                        .map(|amount| (address, amount))
                        .ok_or_else(|| {
                            serde::ser::Error::custom(format!("invalid amount for {address}"))
                        })
                })
                .collect();
            numbers?.serialize(serializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_invoice_request_omits_unset_fields() {
        let req = CreateInvoiceRequest {
            cryptocurrencies: vec!["btc".to_string(), "ltc".to_string()],
            currency: None,
            target_value: None,
            title: None,
            description: None,
        };

        let value = serde_json::to_value(&req).expect("request should serialize");

        assert_eq!(value, json!({ "cryptocurrencies": ["btc", "ltc"] }));
    }

    #[test]
    fn create_invoice_request_serializes_target_value_as_string() {
        let req = CreateInvoiceRequest {
            cryptocurrencies: vec!["btc".to_string()],
            currency: Some("usd".to_string()),
            target_value: Some("15.00".parse().expect("target value")),
            title: Some("title".to_string()),
            description: Some("description".to_string()),
        };

        let value = serde_json::to_value(&req).expect("request should serialize");

        assert_eq!(
            value,
            json!({
                "cryptocurrencies": ["btc"],
                "currency": "usd",
                "target_value": "15.00",
                "title": "title",
                "description": "description"
            })
        );
    }

    #[test]
    fn transfer_request_serializes_amounts_as_numbers() {
        let mut destinations = HashMap::new();
        destinations.insert("addr".to_string(), "0.001".parse().expect("amount"));
        destinations.insert("addr2".to_string(), "0.001".parse().expect("amount"));

        let req = TransferRequest {
            fee_per_byte: Some("1".parse().expect("fee per byte")),
            extra_field: Some("extraField".to_string()),
            ..TransferRequest::new(destinations)
        };

        let value = serde_json::to_value(&req).expect("request should serialize");

        assert_eq!(
            value,
            json!({
                "destinations": { "addr": 0.001, "addr2": 0.001 },
                "fee_per_byte": 1.0,
                "extra_field": "extraField"
            })
        );
    }

    #[test]
    fn transfer_request_round_trips_destinations() {
        let value = json!({
            "destinations": { "addr": 0.001 }
        });

        let req: TransferRequest =
            serde_json::from_value(value).expect("request should deserialize");

        assert_eq!(
            req.destinations.get("addr"),
            Some(&"0.001".parse().expect("amount"))
        );
        assert_eq!(req.fee_per_byte, None);
        assert_eq!(req.extra_field, None);
    }
}
