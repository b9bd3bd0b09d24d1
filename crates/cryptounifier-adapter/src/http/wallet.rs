/*
[INPUT]:  Wallet API credentials and a cryptocurrency symbol
[OUTPUT]: Blockchain state, balances, addresses, fee estimates, broadcasts
[POS]:    HTTP layer - wallet endpoints for one cryptocurrency
[UPDATE]: When adding new wallet endpoints or changing response format
*/

use crate::http::client::ApiClient;
use crate::http::{ClientConfig, Result, WalletCredentials};
use crate::types::{
    ApiResponse, BlockchainInfo, BroadcastedTransaction, FeeEstimate, TransactionInfoQuery,
    TransferRequest, ValidateAddressesRequest, WalletBalance,
};
use reqwest::Method;
use std::collections::HashMap;

pub(crate) const BLOCKCHAIN_INFO: &str = "blockchain-info";
pub(crate) const TRANSACTION_INFO: &str = "transaction-info";
pub(crate) const DEPOSIT_ADDRESSES: &str = "deposit-addresses";
pub(crate) const BALANCE: &str = "balance";
pub(crate) const VALIDATE_ADDRESSES: &str = "validate-addresses";
pub(crate) const ESTIMATE_FEE: &str = "estimate-fee";
pub(crate) const SEND_TRANSACTION: &str = "send-transaction";

/// Facade over the wallet API for a single cryptocurrency
#[derive(Debug)]
pub struct WalletApi {
    client: ApiClient,
}

impl WalletApi {
    /// Create a wallet facade for the given cryptocurrency symbol (e.g. "btc")
    pub fn new(credentials: WalletCredentials, crypto_symbol: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials, crypto_symbol)
    }

    pub fn with_config(
        config: ClientConfig,
        credentials: WalletCredentials,
        crypto_symbol: &str,
    ) -> Result<Self> {
        let suffix = format!("wallet/{crypto_symbol}");
        let client = ApiClient::with_config(config, &suffix, credentials.headers()?)?;
        Ok(Self { client })
    }

    /// Point the facade at a different API root (staging, mock server)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        credentials: WalletCredentials,
        crypto_symbol: &str,
    ) -> Result<Self> {
        let suffix = format!("wallet/{crypto_symbol}");
        let client =
            ApiClient::with_config_and_base_url(config, base_url, &suffix, credentials.headers()?)?;
        Ok(Self { client })
    }

    /// Get the current state of the cryptocurrency blockchain and the sync
    /// percentage of the connected node.
    ///
    /// GET /wallet/{symbol}/blockchain-info
    pub async fn blockchain_info(&self) -> Result<ApiResponse<BlockchainInfo>> {
        self.client
            .request(Method::GET, BLOCKCHAIN_INFO, None::<&()>)
            .await
    }

    /// Look up a transaction by its id. The payload shape depends on the
    /// blockchain, so it surfaces as raw JSON.
    ///
    /// GET /wallet/{symbol}/transaction-info
    pub async fn transaction_info(&self, txid: &str) -> Result<ApiResponse<serde_json::Value>> {
        let query = TransactionInfoQuery {
            txid: txid.to_string(),
        };
        self.client
            .request(Method::GET, TRANSACTION_INFO, Some(&query))
            .await
    }

    /// Get the list of cryptocurrency deposit addresses.
    ///
    /// GET /wallet/{symbol}/deposit-addresses
    pub async fn deposit_addresses(&self) -> Result<ApiResponse<Vec<String>>> {
        self.client
            .request(Method::GET, DEPOSIT_ADDRESSES, None::<&()>)
            .await
    }

    /// Get the confirmed and unconfirmed cryptocurrency balance. Consumes
    /// 0.2 credits on success.
    ///
    /// GET /wallet/{symbol}/balance
    pub async fn balance(&self) -> Result<ApiResponse<WalletBalance>> {
        self.client.request(Method::GET, BALANCE, None::<&()>).await
    }

    /// Check whether each address in the list is valid for this
    /// cryptocurrency. Consumes 0.1 credits per address on success.
    ///
    /// POST /wallet/{symbol}/validate-addresses
    pub async fn validate_addresses(
        &self,
        addresses: Vec<String>,
    ) -> Result<ApiResponse<HashMap<String, bool>>> {
        let body = ValidateAddressesRequest { addresses };
        self.client
            .request(Method::POST, VALIDATE_ADDRESSES, Some(&body))
            .await
    }

    /// Estimate the final transaction fee and its per-byte cost. Consumes
    /// 0.1 credits per destination on success.
    ///
    /// POST /wallet/{symbol}/estimate-fee
    pub async fn estimate_fee(&self, req: TransferRequest) -> Result<ApiResponse<FeeEstimate>> {
        self.client
            .request(Method::POST, ESTIMATE_FEE, Some(&req))
            .await
    }

    /// Create and broadcast a transaction. Consumes 1.0 credits per
    /// destination on success.
    ///
    /// POST /wallet/{symbol}/send-transaction
    pub async fn send_transaction(
        &self,
        req: TransferRequest,
    ) -> Result<ApiResponse<BroadcastedTransaction>> {
        self.client
            .request(Method::POST, SEND_TRANSACTION, Some(&req))
            .await
    }
}
