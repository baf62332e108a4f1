//! Look up an option chain and the market metrics of its underlying.
//!
//! Run with: cargo run --example option_chain -- AAPL

use tastytrade::models::{EquityOptionsSymbology, OptionType};
use tastytrade::{Environment, TastytradeClient};

#[tokio::main]
async fn main() -> tastytrade::Result<()> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("TASTYTRADE_USERNAME")
        .expect("TASTYTRADE_USERNAME environment variable required");
    let password = std::env::var("TASTYTRADE_PASSWORD")
        .expect("TASTYTRADE_PASSWORD environment variable required");
    let underlying = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());

    let client = TastytradeClient::login(&username, &password, Environment::Sandbox).await?;

    println!("=== {} Market Metrics ===", underlying);
    for metric in client.metrics().get(&[underlying.as_str()]).await? {
        println!("IV Index:     {:?}", metric.implied_volatility_index);
        println!("IV Rank:      {:?}", metric.implied_volatility_index_rank);
        println!("Beta:         {:?}", metric.beta);
        println!("High IV rank: {}", metric.is_high_iv_rank());
    }
    println!();

    let chains = client.instruments().nested_option_chain(&underlying).await?;
    let Some(chain) = chains.first() else {
        println!("No option chain for {}", underlying);
        return Ok(());
    };

    println!("=== {} Option Chain ===", chain.underlying_symbol);
    for expiration in chain.expirations.iter().take(3) {
        println!(
            "{} ({:?} days, {} strikes)",
            expiration.expiration_date,
            expiration.days_to_expiration,
            expiration.strikes.len()
        );

        let Some(strike) = expiration.strikes.get(expiration.strikes.len() / 2) else {
            continue;
        };
        let built = EquityOptionsSymbology {
            symbol: chain.underlying_symbol.clone(),
            strike: strike.strike_price,
            option_type: OptionType::Call,
            expiration: expiration.expiration_date,
        }
        .build();
        println!("  middle strike {}: call {}", strike.strike_price, built);

        let option = client.instruments().equity_option(&built).await?;
        println!("  streamer symbol: {:?}", option.streamer_symbol);
    }

    Ok(())
}
