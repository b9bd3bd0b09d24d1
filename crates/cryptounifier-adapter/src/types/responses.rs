/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Envelope shared by every API response: the endpoint payload plus the
/// credit accounting for the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: T,
    pub credits: CreditUsage,
}

/// Credit accounting attached to every response. The wire encodes both
/// values as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditUsage {
    #[serde(with = "rust_decimal::serde::float")]
    pub consumed: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_balance: Decimal,
}
