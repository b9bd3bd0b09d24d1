/*
[INPUT]:  HTTP configuration (base URL, resource suffix, timeouts, credentials)
[OUTPUT]: Configured reqwest client dispatching resource API calls
[POS]:    HTTP layer - shared request dispatch core behind every facade
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use crate::http::{CryptoUnifierError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Base URL for the hosted CryptoUnifier API
const BASE_URL: &str = "https://cryptounifier.io/api/v1";

/// Authentication header names (one key header per resource kind)
const MERCHANT_KEY_HEADER: &str = "x-merchant-key";
const WALLET_KEY_HEADER: &str = "x-wallet-key";
const SECRET_KEY_HEADER: &str = "x-secret-key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(3),
        }
    }
}

/// Credentials for merchant invoicing endpoints
#[derive(Debug, Clone)]
pub struct MerchantCredentials {
    pub merchant_key: String,
    pub secret_key: String,
}

impl MerchantCredentials {
    pub fn new(merchant_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            merchant_key: merchant_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        auth_headers(&[
            (MERCHANT_KEY_HEADER, &self.merchant_key),
            (SECRET_KEY_HEADER, &self.secret_key),
        ])
    }
}

/// Credentials for wallet and wallet-token endpoints
#[derive(Debug, Clone)]
pub struct WalletCredentials {
    pub wallet_key: String,
    pub secret_key: String,
}

impl WalletCredentials {
    pub fn new(wallet_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            wallet_key: wallet_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        auth_headers(&[
            (WALLET_KEY_HEADER, &self.wallet_key),
            (SECRET_KEY_HEADER, &self.secret_key),
        ])
    }
}

/// Assemble authentication headers, marking key material as sensitive so it
/// stays out of request logs.
fn auth_headers(pairs: &[(&'static str, &str)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for &(name, value) in pairs {
        let mut value = HeaderValue::from_str(value).map_err(|_| {
            CryptoUnifierError::Config(format!("invalid {name} header value"))
        })?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}

/// Shared dispatch core behind the API facades.
///
/// Each facade owns one `ApiClient` bound to its resource prefix, with the
/// resource credentials installed as default headers on a dedicated
/// `reqwest::Client`.
#[derive(Debug)]
pub(crate) struct ApiClient {
    http_client: Client,
    base_url: Url,
}

impl ApiClient {
    pub(crate) fn with_config(config: ClientConfig, suffix: &str, headers: HeaderMap) -> Result<Self> {
        Self::with_config_and_base_url(config, BASE_URL, suffix, headers)
    }

    /// Build a resource client against an alternative API root (staging or a
    /// mock server in tests).
    pub(crate) fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        suffix: &str,
        headers: HeaderMap,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()?;

        // The trailing slash keeps `Url::join` relative to the resource root.
        let base_url = Url::parse(&format!("{}/{}/", base_url.trim_end_matches('/'), suffix))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Dispatch one API call. POST payloads travel as a JSON body, everything
    /// else as query parameters.
    pub(crate) async fn request<P, T>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&P>,
    ) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let as_body = method == Method::POST;
        debug!(method = %method, %url, "dispatching API request");

        let mut builder = self.http_client.request(method, url);
        if let Some(payload) = payload {
            builder = if as_body {
                builder.json(payload)
            } else {
                builder.query(payload)
            };
        }
        self.send_json(builder).await
    }

    /// Send a prepared request and decode the JSON body, mapping non-2xx
    /// statuses onto [`CryptoUnifierError::Api`].
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "API request rejected");
            // The server wraps errors in the same {"message": ...} envelope
            // as successful calls; fall back to the raw body text.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|message| message.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or(body);
            return Err(CryptoUnifierError::api_error(status, message));
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_endpoint_url_joins_on_resource_root() {
        let headers = MerchantCredentials::new("merchantKey", "secretKey")
            .headers()
            .expect("headers");
        let client =
            ApiClient::with_config(ClientConfig::default(), "merchant", headers).expect("client init");

        assert_eq!(
            client.base_url.as_str(),
            "https://cryptounifier.io/api/v1/merchant/"
        );
        assert_eq!(
            client.endpoint_url("invoice-info").expect("join").as_str(),
            "https://cryptounifier.io/api/v1/merchant/invoice-info"
        );
    }

    #[test]
    fn test_nested_suffix_url() {
        let headers = WalletCredentials::new("walletKey", "secretKey")
            .headers()
            .expect("headers");
        let client = ApiClient::with_config_and_base_url(
            ClientConfig::default(),
            "http://localhost:8080/",
            "wallet/trx/token/usdt",
            headers,
        )
        .expect("client init");

        assert_eq!(
            client.endpoint_url("balance").expect("join").as_str(),
            "http://localhost:8080/wallet/trx/token/usdt/balance"
        );
    }

    #[test]
    fn test_auth_headers_reject_invalid_key() {
        let err = MerchantCredentials::new("key\nwith newline", "secretKey")
            .headers()
            .unwrap_err();
        match err {
            CryptoUnifierError::Config(message) => {
                assert!(message.contains("x-merchant-key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wallet_headers_contain_both_keys() {
        let headers = WalletCredentials::new("walletKey", "secretKey")
            .headers()
            .expect("headers");
        assert_eq!(headers.len(), 2);
        assert!(headers.get(WALLET_KEY_HEADER).is_some());
        assert!(headers.get(SECRET_KEY_HEADER).is_some());
    }
}
