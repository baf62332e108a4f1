//! Watchlists: user, public, and pairs.

use serde::{Deserialize, Serialize};

use super::enums::InstrumentType;

/// A named list of symbols.
///
/// User watchlists and public watchlists share this shape; public ones
/// requested with `counts-only` carry no entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Watchlist {
    /// Name; unique per user
    pub name: String,
    /// Entries
    #[serde(default)]
    pub watchlist_entries: Vec<WatchlistEntry>,
    /// Group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Sort position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl Watchlist {
    /// Create an empty watchlist.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            watchlist_entries: Vec::new(),
            group_name: None,
            order_index: None,
        }
    }

    /// Append an entry.
    pub fn with_entry(mut self, entry: WatchlistEntry) -> Self {
        self.watchlist_entries.push(entry);
        self
    }

    /// Symbols in list order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.watchlist_entries.iter().map(|e| e.symbol.as_str())
    }
}

/// One symbol of a watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WatchlistEntry {
    /// Symbol
    pub symbol: String,
    /// Instrument type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<InstrumentType>,
}

impl WatchlistEntry {
    /// Create an entry.
    pub fn new(symbol: impl Into<String>, instrument_type: Option<InstrumentType>) -> Self {
        Self {
            symbol: symbol.into(),
            instrument_type,
        }
    }

    /// Equity entry.
    pub fn equity(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Some(InstrumentType::Equity))
    }

    /// Future entry.
    pub fn future(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Some(InstrumentType::Future))
    }

    /// Cryptocurrency entry.
    pub fn cryptocurrency(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Some(InstrumentType::Cryptocurrency))
    }
}

/// A curated list of symbol pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PairsWatchlist {
    /// Name
    pub name: String,
    /// Sort position
    #[serde(default)]
    pub order_index: Option<i32>,
    /// Pairs
    #[serde(default)]
    pub pairs_equations: Vec<PairsEquation>,
}

/// Two weighted legs compared as a pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PairsEquation {
    /// Left side action
    #[serde(default)]
    pub left_action: Option<String>,
    /// Left side symbol
    pub left_symbol: String,
    /// Left side quantity
    #[serde(default)]
    pub left_quantity: Option<i32>,
    /// Right side action
    #[serde(default)]
    pub right_action: Option<String>,
    /// Right side symbol
    pub right_symbol: String,
    /// Right side quantity
    #[serde(default)]
    pub right_quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchlist_body() {
        let list = Watchlist::new("Tech")
            .with_entry(WatchlistEntry::equity("AAPL"))
            .with_entry(WatchlistEntry::new("/ESZ4", None));

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!({
                "name": "Tech",
                "watchlist-entries": [
                    {"symbol": "AAPL", "instrument-type": "Equity"},
                    {"symbol": "/ESZ4"}
                ]
            })
        );
        assert_eq!(list.symbols().collect::<Vec<_>>(), ["AAPL", "/ESZ4"]);
    }

    #[test]
    fn test_pairs_watchlist() {
        let json = r#"{
            "name": "Index Pairs",
            "order-index": 1,
            "pairs-equations": [{
                "left-action": "Buy", "left-symbol": "SPY", "left-quantity": 1,
                "right-action": "Sell", "right-symbol": "QQQ", "right-quantity": 1
            }]
        }"#;
        let pairs: PairsWatchlist = serde_json::from_str(json).unwrap();
        assert_eq!(pairs.pairs_equations[0].right_symbol, "QQQ");
    }
}
