/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CryptoUnifier adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client adapter for the hosted CryptoUnifier payment-processing API.
//!
//! Three facades cover the API surface: [`MerchantApi`] for invoicing,
//! [`WalletApi`] for wallet operations on one cryptocurrency, and
//! [`WalletTokenApi`] for tokens held on a host blockchain.
//!
//! ```rust,ignore
//! use cryptounifier_adapter::{MerchantCredentials, MerchantApi};
//!
//! let merchant = MerchantApi::new(MerchantCredentials::new(merchant_key, secret_key))?;
//! let info = merchant.invoice_info("invoiceHash").await?;
//! println!("status: {}, credits left: {}", info.message.status, info.credits.remaining_balance);
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CryptoUnifierError,
    MerchantApi,
    MerchantCredentials,
    Result,
    WalletApi,
    WalletCredentials,
    WalletTokenApi,
};

// Re-export all types
pub use types::*;
