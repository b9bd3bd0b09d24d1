/*
[INPUT]:  WALLET_KEY / SECRET_KEY environment variables
[OUTPUT]: Token balance on a host blockchain
[POS]:    Examples - wallet-token queries
[UPDATE]: When wallet-token endpoints change
*/

use cryptounifier_adapter::*;

/// Example: Query a token balance (defaults to usdt on trx)
#[tokio::main]
async fn main() {
    println!("=== CryptoUnifier Token Example ===\n");

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
    let symbol = std::env::var("CRYPTO_SYMBOL").unwrap_or_else(|_| "trx".to_string());
    let token = std::env::var("TOKEN_SYMBOL").unwrap_or_else(|_| "usdt".to_string());

    let wallet = match WalletTokenApi::new(
        WalletCredentials::new(wallet_key, secret_key),
        &symbol,
        &token,
    ) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Token client created for {} on {}\n", token, symbol);

    println!("Querying token balance...");
    match wallet.balance().await {
        Ok(response) => {
            println!(
                "✓ confirmed {} / unconfirmed {} (total {})",
                response.message.confirmed, response.message.unconfirmed, response.message.total
            );
            println!("  Credits remaining: {}", response.credits.remaining_balance);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Token example complete");
}
