//! Log in and print every account with its balances.
//!
//! Run with: cargo run --example basic_auth

use tastytrade::{Environment, TastytradeClient};

#[tokio::main]
async fn main() -> tastytrade::Result<()> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("TASTYTRADE_USERNAME")
        .expect("TASTYTRADE_USERNAME environment variable required");
    let password = std::env::var("TASTYTRADE_PASSWORD")
        .expect("TASTYTRADE_PASSWORD environment variable required");

    println!("Connecting to tastytrade sandbox...");
    let client = TastytradeClient::login(&username, &password, Environment::Sandbox).await?;

    let customer = client.accounts().me().await?;
    println!(
        "Logged in as {}",
        customer.username.as_deref().unwrap_or("unknown")
    );

    let accounts = client.accounts().list().await?;
    println!("\nFound {} account(s):", accounts.len());

    for item in &accounts {
        let account = &item.account;
        println!(
            "  - {} ({})",
            account.account_number,
            account.nickname.as_deref().unwrap_or("No nickname")
        );

        let balance = client.balances().get(&account.account_number).await?;
        println!("    Net Liquidating Value: {:?}", balance.net_liquidating_value);
        println!("    Cash Balance: {:?}", balance.cash_balance);
        println!("    Equity Buying Power: {:?}", balance.equity_buying_power);

        let status = client.accounts().trading_status(&account.account_number).await?;
        println!("    Options Level: {:?}", status.options_level);
    }

    client.sessions().destroy().await?;
    println!("\nLogged out.");
    Ok(())
}
