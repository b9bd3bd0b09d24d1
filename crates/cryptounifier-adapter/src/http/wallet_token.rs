/*
[INPUT]:  Wallet API credentials, a cryptocurrency symbol and a token symbol
[OUTPUT]: Token balances, fee estimates and broadcasts
[POS]:    HTTP layer - wallet-token endpoints (tokens on a host blockchain)
[UPDATE]: When adding new token endpoints or changing response format
*/

use crate::http::client::ApiClient;
use crate::http::wallet::{BALANCE, ESTIMATE_FEE, SEND_TRANSACTION};
use crate::http::{ClientConfig, Result, WalletCredentials};
use crate::types::{
    ApiResponse, BroadcastedTransaction, FeeEstimate, TransferRequest, WalletBalance,
};
use reqwest::Method;

/// Facade over the wallet API for a token (e.g. usdt) held on a host
/// blockchain (e.g. trx). Shares the wallet endpoint table under the
/// token-scoped resource prefix.
#[derive(Debug)]
pub struct WalletTokenApi {
    client: ApiClient,
}

impl WalletTokenApi {
    pub fn new(
        credentials: WalletCredentials,
        crypto_symbol: &str,
        token_symbol: &str,
    ) -> Result<Self> {
        Self::with_config(
            ClientConfig::default(),
            credentials,
            crypto_symbol,
            token_symbol,
        )
    }

    pub fn with_config(
        config: ClientConfig,
        credentials: WalletCredentials,
        crypto_symbol: &str,
        token_symbol: &str,
    ) -> Result<Self> {
        let suffix = format!("wallet/{crypto_symbol}/token/{token_symbol}");
        let client = ApiClient::with_config(config, &suffix, credentials.headers()?)?;
        Ok(Self { client })
    }

    /// Point the facade at a different API root (staging, mock server)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        credentials: WalletCredentials,
        crypto_symbol: &str,
        token_symbol: &str,
    ) -> Result<Self> {
        let suffix = format!("wallet/{crypto_symbol}/token/{token_symbol}");
        let client =
            ApiClient::with_config_and_base_url(config, base_url, &suffix, credentials.headers()?)?;
        Ok(Self { client })
    }

    /// Get the confirmed and unconfirmed token balance.
    ///
    /// GET /wallet/{symbol}/token/{token}/balance
    pub async fn balance(&self) -> Result<ApiResponse<WalletBalance>> {
        self.client.request(Method::GET, BALANCE, None::<&()>).await
    }

    /// Estimate the final transaction fee and its per-byte cost.
    ///
    /// POST /wallet/{symbol}/token/{token}/estimate-fee
    pub async fn estimate_fee(&self, req: TransferRequest) -> Result<ApiResponse<FeeEstimate>> {
        self.client
            .request(Method::POST, ESTIMATE_FEE, Some(&req))
            .await
    }

    /// Create and broadcast a token transaction.
    ///
    /// POST /wallet/{symbol}/token/{token}/send-transaction
    pub async fn send_transaction(
        &self,
        req: TransferRequest,
    ) -> Result<ApiResponse<BroadcastedTransaction>> {
        self.client
            .request(Method::POST, SEND_TRANSACTION, Some(&req))
            .await
    }
}
