/*
[INPUT]:  Invoice identifiers and merchant API credentials
[OUTPUT]: Invoice lifecycle data (creation, status, addresses, price quotes)
[POS]:    HTTP layer - merchant invoicing endpoints
[UPDATE]: When adding new merchant endpoints or changing response format
*/

use crate::http::client::ApiClient;
use crate::http::{ClientConfig, MerchantCredentials, Result};
use crate::types::{
    ApiResponse, CreateInvoiceRequest, EstimateInvoicePriceRequest, Invoice, InvoiceCryptoRequest,
    InvoiceHashesRequest, InvoiceInfoQuery, InvoicePriceEstimate,
};
use reqwest::Method;

/// Resource prefix for merchant endpoints
const SUFFIX: &str = "merchant";

const INVOICE_INFO: &str = "invoice-info";
const PROCESS_INVOICES: &str = "process-invoices";
const FORWARD_INVOICES: &str = "forward-invoices";
const GENERATE_INVOICE_ADDRESS: &str = "generate-invoice-address";
const CREATE_INVOICE: &str = "create-invoice";
const ESTIMATE_INVOICE_PRICE: &str = "estimate-invoice-price";
const RECOVER_INVOICE_PRIVATE_KEY: &str = "recover-invoice-private-key";

/// Facade over the merchant invoicing API
#[derive(Debug)]
pub struct MerchantApi {
    client: ApiClient,
}

impl MerchantApi {
    /// Create a merchant facade authenticating with the given keys
    pub fn new(credentials: MerchantCredentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    pub fn with_config(config: ClientConfig, credentials: MerchantCredentials) -> Result<Self> {
        let client = ApiClient::with_config(config, SUFFIX, credentials.headers()?)?;
        Ok(Self { client })
    }

    /// Point the facade at a different API root (staging, mock server)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        credentials: MerchantCredentials,
    ) -> Result<Self> {
        let client =
            ApiClient::with_config_and_base_url(config, base_url, SUFFIX, credentials.headers()?)?;
        Ok(Self { client })
    }

    /// Get invoice information and its current status. Consumes 0.1 credits
    /// on success and 0.0 on failure.
    ///
    /// GET /merchant/invoice-info
    pub async fn invoice_info(&self, invoice_hash: &str) -> Result<ApiResponse<Invoice>> {
        let query = InvoiceInfoQuery {
            invoice_hash: invoice_hash.to_string(),
        };
        self.client
            .request(Method::GET, INVOICE_INFO, Some(&query))
            .await
    }

    /// Manually process expired invoices in order to update the received
    /// amount. Consumes 0.2 credits on success and 0.1 on failure.
    ///
    /// POST /merchant/process-invoices
    pub async fn process_invoices(
        &self,
        invoice_hashes: Vec<String>,
    ) -> Result<ApiResponse<Vec<Invoice>>> {
        let body = InvoiceHashesRequest { invoice_hashes };
        self.client
            .request(Method::POST, PROCESS_INVOICES, Some(&body))
            .await
    }

    /// Manually forward invoice funds. Consumes 0.2 credits on success and
    /// 0.1 on failure.
    ///
    /// POST /merchant/forward-invoices
    pub async fn forward_invoices(
        &self,
        invoice_hashes: Vec<String>,
    ) -> Result<ApiResponse<Vec<Invoice>>> {
        let body = InvoiceHashesRequest { invoice_hashes };
        self.client
            .request(Method::POST, FORWARD_INVOICES, Some(&body))
            .await
    }

    /// Generate an invoice address for a specific cryptocurrency. The payload
    /// shape is server-defined, so it surfaces as raw JSON.
    ///
    /// POST /merchant/generate-invoice-address
    pub async fn generate_invoice_address(
        &self,
        invoice_hash: &str,
        cryptocurrency: &str,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let body = InvoiceCryptoRequest {
            invoice_hash: invoice_hash.to_string(),
            cryptocurrency: cryptocurrency.to_string(),
        };
        self.client
            .request(Method::POST, GENERATE_INVOICE_ADDRESS, Some(&body))
            .await
    }

    /// Create an invoice to charge for a product or service. Consumes 1.0
    /// credits on success and 0.1 on failure.
    ///
    /// POST /merchant/create-invoice
    pub async fn create_invoice(&self, req: CreateInvoiceRequest) -> Result<ApiResponse<Invoice>> {
        self.client
            .request(Method::POST, CREATE_INVOICE, Some(&req))
            .await
    }

    /// Estimate the invoice price for multiple cryptocurrencies.
    ///
    /// POST /merchant/estimate-invoice-price
    pub async fn estimate_invoice_price(
        &self,
        req: EstimateInvoicePriceRequest,
    ) -> Result<ApiResponse<Vec<InvoicePriceEstimate>>> {
        self.client
            .request(Method::POST, ESTIMATE_INVOICE_PRICE, Some(&req))
            .await
    }

    /// Recover the invoice private key for a specific cryptocurrency.
    ///
    /// POST /merchant/recover-invoice-private-key
    pub async fn recover_invoice_private_key(
        &self,
        invoice_hash: &str,
        cryptocurrency: &str,
    ) -> Result<ApiResponse<String>> {
        let body = InvoiceCryptoRequest {
            invoice_hash: invoice_hash.to_string(),
            cryptocurrency: cryptocurrency.to_string(),
        };
        self.client
            .request(Method::POST, RECOVER_INVOICE_PRIVATE_KEY, Some(&body))
            .await
    }
}
