//! Identifier newtypes and environment selection.
//!
//! Identifiers are wrapped so an account number cannot be passed where an
//! order ID is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// A tastytrade account number (e.g. `5WV12345`).
    ///
    /// ```
    /// use tastytrade::AccountNumber;
    ///
    /// let account = AccountNumber::new("5WV12345");
    /// assert_eq!(account.to_string(), "5WV12345");
    /// ```
    AccountNumber
}

string_id! {
    /// An order or complex-order identifier.
    ///
    /// The API returns numeric IDs; they are kept as text because they only
    /// ever appear in paths.
    OrderId
}

string_id! {
    /// A trading symbol (e.g. `AAPL`, `BRK/B`, `/ESZ9`).
    Symbol
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// API version pin in `YYYYMMDD` form, sent as the `Api-Version` header.
///
/// ```
/// use tastytrade::ApiVersion;
///
/// assert!(ApiVersion::new("20240101").is_ok());
/// assert!(ApiVersion::new("2024-01-01").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Validate and wrap a version string.
    pub fn new(version: &str) -> crate::Result<Self> {
        let invalid = || {
            crate::Error::InvalidInput(format!(
                "invalid API version {:?}; expected YYYYMMDD",
                version
            ))
        };

        if version.len() != 8 || !version.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        chrono::NaiveDate::parse_from_str(version, "%Y%m%d").map_err(|_| invalid())?;

        Ok(ApiVersion(version.to_string()))
    }

    /// The version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which tastytrade deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Live trading.
    #[default]
    Production,
    /// Certification environment; quotes are delayed and money is not real.
    Sandbox,
}

impl Environment {
    /// Base URL for REST requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.tastyworks.com",
            Environment::Sandbox => "https://api.cert.tastyworks.com",
        }
    }

    /// Host name of the REST API.
    pub fn api_host(&self) -> &'static str {
        match self {
            Environment::Production => "api.tastyworks.com",
            Environment::Sandbox => "api.cert.tastyworks.com",
        }
    }

    /// Returns `true` for the live environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` for the certification environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Sandbox => f.write_str("sandbox"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" | "live" => Ok(Environment::Production),
            "sandbox" | "cert" | "certification" => Ok(Environment::Sandbox),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown environment {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number() {
        let account = AccountNumber::new("5WV12345");
        assert_eq!(account.as_str(), "5WV12345");
        assert_eq!(account.to_string(), "5WV12345");
    }

    #[test]
    fn test_order_id_from_number() {
        let id = OrderId::from(12345u64);
        assert_eq!(id.as_str(), "12345");
    }

    #[test]
    fn test_api_version() {
        assert_eq!(ApiVersion::new("20241201").unwrap().as_str(), "20241201");
        assert!(ApiVersion::new("2024").is_err());
        assert!(ApiVersion::new("20241301").is_err());
        assert!(ApiVersion::new("abcdefgh").is_err());
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.tastyworks.com"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api.cert.tastyworks.com"
        );
        assert_eq!(Environment::Sandbox.api_host(), "api.cert.tastyworks.com");
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("Sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("cert".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }
}
