//! # tastytrade
//!
//! An async Rust client for the tastytrade brokerage REST API.
//!
//! The crate covers the account side of the API: sessions, customers and
//! accounts, balances and positions, orders (including complex orders and
//! dry runs), instruments and option chains, margin, transactions,
//! watchlists, and market metrics. It also builds OCC and futures symbols.
//!
//! ## Features
//!
//! - **Sessions**: log in with a password or remember token, two-factor
//!   one-time passwords, validation, and logout
//! - **Orders**: typed builder with local validation, dry runs, replace,
//!   edit, cancel, and OCO/OTOCO complex orders
//! - **Pagination**: single pages with their metadata, or a stream over
//!   every page
//! - **Typed errors**: the API error envelope is decoded into [`ApiError`]
//! - **Money as decimals**: prices and balances are `rust_decimal::Decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tastytrade::{TastytradeClient, Environment};
//!
//! #[tokio::main]
//! async fn main() -> tastytrade::Result<()> {
//!     let client = TastytradeClient::login(
//!         "username",
//!         "password",
//!         Environment::Sandbox,
//!     ).await?;
//!
//!     let accounts = client.accounts().list().await?;
//!     println!("Found {} accounts", accounts.len());
//!
//!     if let Some(item) = accounts.first() {
//!         let balance = client.balances()
//!             .get(&item.account.account_number)
//!             .await?;
//!         println!("Net liquidating value: {:?}", balance.net_liquidating_value);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Order Placement
//!
//! ```rust,no_run
//! use tastytrade::{TastytradeClient, Environment, AccountNumber};
//! use tastytrade::models::{NewOrderBuilder, OrderType, TimeInForce, OrderAction, InstrumentType, PriceEffect};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> tastytrade::Result<()> {
//!     let client = TastytradeClient::login("user", "pass", Environment::Sandbox).await?;
//!     let account = AccountNumber::new("5WV12345");
//!
//!     let order = NewOrderBuilder::new()
//!         .time_in_force(TimeInForce::Day)
//!         .order_type(OrderType::Limit)
//!         .price(dec!(150.00))
//!         .price_effect(PriceEffect::Debit)
//!         .leg(InstrumentType::Equity, "AAPL", OrderAction::BuyToOpen, dec!(10))
//!         .build()?;
//!
//!     // Dry run first to check buying power
//!     let preview = client.orders().dry_run(&account, &order).await?;
//!     println!("Buying power effect: {:?}", preview.buying_power_effect);
//!
//!     let response = client.orders().place(&account, &order).await?;
//!     println!("Order placed: {:?}", response.order.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Symbology
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tastytrade::models::{EquityOptionsSymbology, OptionType};
//!
//! let symbol = EquityOptionsSymbology {
//!     symbol: "AAPL".into(),
//!     strike: dec!(185),
//!     option_type: OptionType::Call,
//!     expiration: NaiveDate::from_ymd_opt(2023, 6, 16).unwrap(),
//! };
//! assert_eq!(symbol.build(), "AAPL  230616C00185000");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::{ClientConfig, TastytradeClient};
pub use error::{ApiError, Error, Result};
pub use models::{AccountNumber, ApiVersion, Environment, OrderId, Symbol};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tastytrade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{OrdersQuery, PositionsQuery, TransactionsQuery};
    pub use crate::auth::{LoginCredentials, Session};
    pub use crate::client::{ClientConfig, TastytradeClient};
    pub use crate::error::{ApiError, Error, Result};
    pub use crate::models::{
        // Primitives
        AccountNumber, ApiVersion, Environment, OrderId, Symbol,
        // Enums
        InstrumentType, OptionType, OrderAction, OrderStatus, OrderType, PriceEffect,
        TimeInForce, TransactionType,
        // Account models
        Account, AccountBalance, AccountItem, Customer, Position,
        // Order models
        NewOrder, NewOrderBuilder, Order, OrderLeg, OrderResponse,
        // Instrument models
        Cryptocurrency, Equity, EquityOption, Future, FutureOption, NestedOptionChain,
        // Symbology
        EquityOptionsSymbology, FutureOptionsSymbology, FutureSymbology,
        // Scalars
        StringF32,
    };
}
