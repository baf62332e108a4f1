//! Preview and place a limit order.
//!
//! The order is only dry-run unless `TASTYTRADE_PLACE=1` is set.
//!
//! Run with: cargo run --example place_order

use rust_decimal_macros::dec;
use tastytrade::models::{
    InstrumentType, NewOrderBuilder, OrderAction, OrderType, PriceEffect, TimeInForce,
};
use tastytrade::{AccountNumber, Environment, TastytradeClient};

#[tokio::main]
async fn main() -> tastytrade::Result<()> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("TASTYTRADE_USERNAME")
        .expect("TASTYTRADE_USERNAME environment variable required");
    let password = std::env::var("TASTYTRADE_PASSWORD")
        .expect("TASTYTRADE_PASSWORD environment variable required");
    let account_num = std::env::var("TASTYTRADE_ACCOUNT")
        .expect("TASTYTRADE_ACCOUNT environment variable required");
    let place = std::env::var("TASTYTRADE_PLACE").is_ok_and(|v| v == "1");

    // Sandbox only; never run this against production.
    let client = TastytradeClient::login(&username, &password, Environment::Sandbox).await?;
    let account = AccountNumber::new(account_num);

    let order = NewOrderBuilder::new()
        .time_in_force(TimeInForce::Day)
        .order_type(OrderType::Limit)
        .price(dec!(400.00))
        .price_effect(PriceEffect::Debit)
        .leg(InstrumentType::Equity, "SPY", OrderAction::BuyToOpen, dec!(1))
        .build()?;

    println!("Validating order with dry run...");
    let preview = client.orders().dry_run(&account, &order).await?;

    if let Some(effect) = &preview.buying_power_effect {
        println!("  Buying power change: {:?}", effect.buying_power_change());
        println!("  Sufficient buying power: {}", effect.has_sufficient_buying_power());
    }
    if let Some(fees) = &preview.fee_calculation {
        println!("  Fees: {}", fees.total_fees_amount());
    }
    for warning in &preview.warnings {
        println!("  Warning: {}", warning.message);
    }

    if !preview.is_valid() {
        for error in &preview.errors {
            println!("  Error: {}", error.message);
        }
        return Ok(());
    }

    if !place {
        println!("\nNot placed; set TASTYTRADE_PLACE=1 to submit.");
        return Ok(());
    }

    let response = client.orders().place(&account, &order).await?;
    println!("Order placed! ID: {:?}", response.order.id);
    println!("Status: {:?}", response.order.status);

    if let Some(id) = response.order.order_id() {
        let cancelled = client.orders().cancel(&account, &id).await?;
        println!("Cancel requested: {:?}", cancelled.status);
    }
    Ok(())
}
