//! Credentials for the quote streamer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token and endpoint for connecting to the DXLink quote streamer.
///
/// The streamer itself is a separate WebSocket protocol; this crate only
/// issues the token.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuoteStreamerToken {
    /// Streamer token
    pub token: String,
    /// WebSocket URL
    #[serde(rename = "dxlink-url")]
    pub dxlink_url: String,
    /// Data level (e.g. `api` or `demo`)
    #[serde(default)]
    pub level: Option<String>,
    /// Token expiry
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Issued
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for QuoteStreamerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteStreamerToken")
            .field("token", &"[redacted]")
            .field("dxlink_url", &self.dxlink_url)
            .field("level", &self.level)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_and_redact() {
        let json = r#"{
            "token": "dGVzdC10b2tlbg==",
            "dxlink-url": "wss://tasty-openapi-ws.dxfeed.com/realtime",
            "level": "api"
        }"#;
        let token: QuoteStreamerToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.level.as_deref(), Some("api"));

        let debug = format!("{token:?}");
        assert!(!debug.contains("dGVzdC10b2tlbg=="));
        assert!(debug.contains("dxfeed.com"));
    }
}
