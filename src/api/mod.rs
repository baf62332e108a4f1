//! API service modules for tastytrade endpoints.
//!
//! Each service covers one endpoint group and is obtained from
//! [`TastytradeClient`](crate::TastytradeClient). Query structs for list
//! endpoints live next to the service that takes them.

mod accounts;
mod balances;
mod instruments;
mod margin;
mod metrics;
mod orders;
mod quote_tokens;
mod risk;
mod search;
mod transactions;
mod watchlists;

pub use accounts::AccountsService;
pub use balances::{BalancesService, NetLiqHistoryQuery, PositionsQuery, SnapshotsQuery};
pub use instruments::{
    ActiveEquitiesQuery, EquitiesQuery, EquityOptionsQuery, FutureOptionsQuery, FuturesQuery,
    InstrumentsService,
};
pub use margin::MarginService;
pub use metrics::MetricsService;
pub use orders::{OrdersQuery, OrdersService};
pub use quote_tokens::QuoteTokensService;
pub use risk::RiskService;
pub use search::SearchService;
pub use transactions::{TransactionsQuery, TransactionsService};
pub use watchlists::WatchlistsService;
