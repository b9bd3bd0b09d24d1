/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for client construction and dispatch behavior
[POS]:    Integration tests - shared dispatch core
[UPDATE]: When client construction or error mapping changes
*/

mod common;

use common::{credits_json, setup_mock_server};
use cryptounifier_adapter::{
    ClientConfig, CryptoUnifierError, MerchantApi, MerchantCredentials, WalletApi,
    WalletCredentials,
};
use rstest::rstest;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_facade_creation() {
    let _merchant = assert_ok!(MerchantApi::new(MerchantCredentials::new(
        "merchantKey",
        "secretKey"
    )));
    let _wallet = assert_ok!(WalletApi::new(
        WalletCredentials::new("walletKey", "secretKey"),
        "btc"
    ));
}

#[test]
fn test_facade_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(10),
        connect_timeout: Duration::from_secs(2),
    };
    let _wallet = assert_ok!(WalletApi::with_config(
        config,
        WalletCredentials::new("walletKey", "secretKey"),
        "btc"
    ));
}

#[test]
fn test_invalid_key_is_config_error() {
    let err = MerchantApi::new(MerchantCredentials::new("bad\nkey", "secretKey")).unwrap_err();
    match err {
        CryptoUnifierError::Config(message) => assert!(message.contains("x-merchant-key")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case("btc")]
#[case("ltc")]
#[case("doge")]
#[tokio::test]
async fn test_wallet_requests_route_through_symbol_prefix(#[case] symbol: &str) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallet/{symbol}/balance")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "confirmed": "0.00000000",
                "unconfirmed": "0.00000000",
                "total": "0.00000000"
            },
            "credits": credits_json(0.2, 129.8)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = assert_ok!(common::wallet_api(&server, symbol).balance().await);
    assert_eq!(response.credits.consumed, "0.2".parse().expect("consumed"));
}

#[tokio::test]
async fn test_auth_headers_are_injected_on_every_request() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/merchant/invoice-info"))
        .and(header("x-merchant-key", "merchantKey"))
        .and(header("x-secret-key", "secretKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": { "title": "New Invoice", "status": 0 },
            "credits": credits_json(0.1, 129.9)
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(common::merchant_api(&server).invoice_info("hash").await);
}

#[tokio::test]
async fn test_error_envelope_maps_to_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/merchant/invoice-info"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "message": "Insufficient credits"
        })))
        .mount(&server)
        .await;

    let err = common::merchant_api(&server)
        .invoice_info("hash")
        .await
        .unwrap_err();

    match err {
        CryptoUnifierError::Api { code, ref message } => {
            assert_eq!(code, 402);
            assert_eq!(message, "Insufficient credits");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_credit_error());
    assert!(!err.is_auth_error());
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/wallet/btc/balance"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Invalid wallet key"
        })))
        .mount(&server)
        .await;

    let err = common::wallet_api(&server, "btc").balance().await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_non_json_error_body_is_passed_through() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/wallet/btc/balance"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
        .mount(&server)
        .await;

    let err = common::wallet_api(&server, "btc").balance().await.unwrap_err();
    match err {
        CryptoUnifierError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
