/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cryptounifier-adapter tests

use cryptounifier_adapter::{
    ClientConfig, MerchantApi, MerchantCredentials, WalletApi, WalletCredentials, WalletTokenApi,
};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Merchant facade pointed at the mock server
#[allow(dead_code)]
pub fn merchant_api(server: &MockServer) -> MerchantApi {
    MerchantApi::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri(),
        MerchantCredentials::new("merchantKey", "secretKey"),
    )
    .expect("merchant client init")
}

/// Wallet facade pointed at the mock server
#[allow(dead_code)]
pub fn wallet_api(server: &MockServer, crypto_symbol: &str) -> WalletApi {
    WalletApi::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri(),
        WalletCredentials::new("walletKey", "secretKey"),
        crypto_symbol,
    )
    .expect("wallet client init")
}

/// Wallet-token facade pointed at the mock server
#[allow(dead_code)]
pub fn token_api(server: &MockServer, crypto_symbol: &str, token_symbol: &str) -> WalletTokenApi {
    WalletTokenApi::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri(),
        WalletCredentials::new("walletKey", "secretKey"),
        crypto_symbol,
        token_symbol,
    )
    .expect("wallet token client init")
}

/// Credit accounting block shared by every response fixture
#[allow(dead_code)]
pub fn credits_json(consumed: f64, remaining_balance: f64) -> serde_json::Value {
    serde_json::json!({
        "consumed": consumed,
        "remaining_balance": remaining_balance
    })
}
