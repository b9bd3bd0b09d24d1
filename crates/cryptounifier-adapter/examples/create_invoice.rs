/*
[INPUT]:  MERCHANT_KEY / SECRET_KEY environment variables
[OUTPUT]: A freshly created invoice and its price quotations
[POS]:    Examples - merchant invoicing flow
[UPDATE]: When merchant endpoints change
*/

use cryptounifier_adapter::*;

/// Example: Create an invoice and estimate its price per cryptocurrency
///
/// Requires a merchant key pair from the CryptoUnifier dashboard.
#[tokio::main]
async fn main() {
    println!("=== CryptoUnifier Invoice Example ===\n");

    let merchant_key = match std::env::var("MERCHANT_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("MERCHANT_KEY not set");
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

    let merchant = match MerchantApi::new(MerchantCredentials::new(merchant_key, secret_key)) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Merchant client created\n");

    let cryptocurrencies = vec!["btc".to_string(), "ltc".to_string(), "eth".to_string()];

    // Quote the invoice before creating it
    println!("Estimating invoice price for 15.00 usd...");
    let estimate = EstimateInvoicePriceRequest {
        cryptocurrencies: cryptocurrencies.clone(),
        currency: Some("usd".to_string()),
        target_value: Some("15.00".parse().expect("target value")),
    };
    match merchant.estimate_invoice_price(estimate).await {
        Ok(response) => {
            for quote in &response.message {
                println!(
                    "✓ {}: {} (quotation {})",
                    quote.symbol, quote.target_amount, quote.quotation
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Create the invoice
    println!("\nCreating invoice...");
    let request = CreateInvoiceRequest {
        cryptocurrencies,
        currency: Some("usd".to_string()),
        target_value: Some("15.00".parse().expect("target value")),
        title: Some("Example invoice".to_string()),
        description: Some("Created by the create_invoice example".to_string()),
    };
    match merchant.create_invoice(request).await {
        Ok(response) => {
            println!("✓ Invoice created: {:?}", response.message);
            println!("  Credits remaining: {}", response.credits.remaining_balance);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Invoice example complete");
}
