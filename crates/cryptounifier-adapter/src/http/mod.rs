/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod merchant;
pub mod wallet;
pub mod wallet_token;

pub use error::{CryptoUnifierError, Result};

pub use client::{ClientConfig, MerchantCredentials, WalletCredentials};
pub use merchant::MerchantApi;
pub use wallet::WalletApi;
pub use wallet_token::WalletTokenApi;
