/*
[INPUT]:  WALLET_KEY / SECRET_KEY environment variables, optional CRYPTO_SYMBOL
[OUTPUT]: Wallet state plus a fee estimate for a one-destination transfer
[POS]:    Examples - wallet queries and fee estimation
[UPDATE]: When wallet endpoints change
*/

use cryptounifier_adapter::*;
use std::collections::HashMap;

/// Example: Inspect a wallet and estimate a transfer fee
///
/// Uses CRYPTO_SYMBOL (default "btc") and a destination address from
/// DESTINATION_ADDRESS. Only estimates; nothing is broadcast.
#[tokio::main]
async fn main() {
    println!("=== CryptoUnifier Wallet Example ===\n");

    let wallet_key = match std::env::var("WALLET_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("WALLET_KEY not set");
            return;
        }
    };
    let secret_key = match std::env::var("SECRET_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("SECRET_KEY not set");
            return;
        }
    };
    let symbol = std::env::var("CRYPTO_SYMBOL").unwrap_or_else(|_| "btc".to_string());

    let wallet = match WalletApi::new(WalletCredentials::new(wallet_key, secret_key), &symbol) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Wallet client created for {}\n", symbol);

    println!("Querying blockchain info...");
    match wallet.blockchain_info().await {
        Ok(response) => println!(
            "✓ chain {} at block {} ({}% synced)",
            response.message.chain, response.message.blocks, response.message.sync_percentage
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying balance...");
    match wallet.balance().await {
        Ok(response) => println!(
            "✓ confirmed {} / unconfirmed {}",
            response.message.confirmed, response.message.unconfirmed
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    let destination = match std::env::var("DESTINATION_ADDRESS") {
        Ok(address) => address,
        Err(_) => {
            println!("\nDESTINATION_ADDRESS not set, skipping fee estimate");
            return;
        }
    };

    println!("\nEstimating fee for 0.001 {} to {}...", symbol, destination);
    let mut destinations = HashMap::new();
    destinations.insert(destination, "0.001".parse().expect("amount"));
    match wallet.estimate_fee(TransferRequest::new(destinations)).await {
        Ok(response) => println!(
            "✓ final fee {} ({} per byte)",
            response.message.final_fee, response.message.per_byte
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Wallet example complete");
}
