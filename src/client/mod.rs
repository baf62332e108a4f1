//! HTTP client and service layer for the tastytrade API.
//!
//! [`TastytradeClient`] is the entry point. Every endpoint group is a
//! service borrowed from it, and all of them share one transport.
//!
//! # Example
//!
//! ```no_run
//! use tastytrade::{TastytradeClient, Environment};
//!
//! # async fn example() -> tastytrade::Result<()> {
//! let client = TastytradeClient::login("username", "password", Environment::Sandbox).await?;
//!
//! let accounts = client.accounts().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
pub mod query;

pub use config::ClientConfig;
pub use http::TastytradeClient;
pub use paginated::PaginatedStream;
pub(crate) use http::{ApiRequest, ClientInner};
pub(crate) use paginated::PaginatedStreamBuilder;
