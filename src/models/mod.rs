//! Wire types of the tastytrade API.
//!
//! Models are grouped by endpoint family:
//!
//! - [`primitives`] - identifiers, API version, environment
//! - [`enums`] - closed sets of wire strings (order types, statuses, ...)
//! - [`numeric`] - [`StringF32`] for quoted analytics values
//! - [`symbology`] - OCC and futures symbol builders
//! - [`pagination`] - page metadata of list endpoints
//! - [`account`] - customers, accounts, trading status
//! - [`balance`] - balances, positions, net liquidating value history
//! - [`order`] - new orders, edits, complex orders, order records
//! - [`trading`] - buying power effects, fees, order responses
//! - [`instrument`] - instruments and option chains
//! - [`margin`] - margin reports and risk parameters
//! - [`metrics`] - market metrics and corporate events
//! - [`transaction`] - transactions and fee totals
//! - [`watchlist`] - user, public, and pairs watchlists
//! - [`quote_token`] - quote streamer credentials

pub mod account;
pub mod balance;
pub mod enums;
pub mod instrument;
pub mod margin;
pub mod metrics;
pub mod numeric;
pub mod order;
pub mod pagination;
pub mod primitives;
pub mod quote_token;
pub mod symbology;
pub mod trading;
pub mod transaction;
pub mod watchlist;

pub use account::*;
pub use balance::*;
pub use enums::*;
pub use instrument::*;
pub use margin::*;
pub use metrics::*;
pub use numeric::StringF32;
pub use order::*;
pub use pagination::*;
pub use primitives::*;
pub use quote_token::QuoteStreamerToken;
pub use symbology::*;
pub use trading::*;
pub use transaction::*;
pub use watchlist::*;
