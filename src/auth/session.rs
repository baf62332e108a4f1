//! Session values issued by the API.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// An authenticated session.
///
/// A `Session` is an immutable value. Creating, validating, or destroying a
/// session replaces the value held by the client rather than mutating it.
///
/// The token and remember token are redacted from `Debug` output.
#[derive(Clone)]
pub struct Session {
    token: SecretString,
    user: Option<User>,
    remember_token: Option<SecretString>,
    session_expiration: Option<DateTime<Utc>>,
}

impl Session {
    /// Wrap a session token issued earlier.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            user: None,
            remember_token: None,
            session_expiration: None,
        }
    }

    /// The token sent in the `Authorization` header.
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// The user the session belongs to, when known.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Token for logging in again without a password.
    ///
    /// Only present when the login asked for `remember-me`.
    pub fn remember_token(&self) -> Option<&SecretString> {
        self.remember_token.as_ref()
    }

    /// When the API will stop accepting the token.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.session_expiration
    }

    /// Check whether the session has passed its expiration time.
    ///
    /// A session without a known expiration never reports as expired.
    pub fn is_expired(&self) -> bool {
        self.session_expiration
            .is_some_and(|expires_at| Utc::now() >= expires_at)
    }

    /// A copy of this session with `user` attached.
    pub fn with_user(self, user: User) -> Self {
        Self {
            user: Some(user),
            ..self
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .field(
                "remember_token",
                &self.remember_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("session_expiration", &self.session_expiration)
            .finish()
    }
}

/// The customer a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// Username
    #[serde(default)]
    pub username: String,
    /// External ID
    #[serde(default)]
    pub external_id: Option<String>,
    /// Numeric user ID, returned by session validation
    #[serde(default)]
    pub id: Option<u64>,
    /// Whether the user has confirmed their email
    #[serde(default)]
    pub is_confirmed: Option<bool>,
}

/// Credentials for `POST /sessions`.
///
/// Either a password or a remember token must be supplied.
///
/// ```
/// use tastytrade::auth::LoginCredentials;
///
/// let credentials = LoginCredentials::new("user", "hunter2").remember_me(true);
/// ```
#[derive(Clone)]
pub struct LoginCredentials {
    login: String,
    password: Option<SecretString>,
    remember_token: Option<SecretString>,
    remember_me: bool,
}

impl LoginCredentials {
    /// Username (or email) and password.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: Some(SecretString::from(password.into())),
            remember_token: None,
            remember_me: false,
        }
    }

    /// Username and a remember token from an earlier session.
    pub fn with_remember_token(login: impl Into<String>, remember_token: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: None,
            remember_token: Some(SecretString::from(remember_token.into())),
            remember_me: false,
        }
    }

    /// Ask the API for a remember token.
    pub fn remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }

    /// The login name.
    pub fn login(&self) -> &str {
        &self.login
    }

    pub(crate) fn body(&self) -> LoginBody<'_> {
        LoginBody {
            login: &self.login,
            password: self.password.as_ref().map(|p| p.expose_secret()),
            remember_token: self.remember_token.as_ref().map(|t| t.expose_secret()),
            remember_me: self.remember_me,
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct LoginBody<'a> {
    login: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remember_token: Option<&'a str>,
    remember_me: bool,
}

/// Wire shape of a created session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct SessionResponse {
    session_token: String,
    #[serde(default)]
    session_expiration: Option<DateTime<Utc>>,
    #[serde(default)]
    remember_token: Option<String>,
    user: User,
}

impl From<SessionResponse> for Session {
    fn from(response: SessionResponse) -> Self {
        Self {
            token: SecretString::from(response.session_token),
            user: Some(response.user),
            remember_token: response.remember_token.map(SecretString::from),
            session_expiration: response.session_expiration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_debug_redacts_token() {
        let session: Session = serde_json::from_str::<SessionResponse>(
            r#"{
                "session-token": "super-secret-token",
                "remember-token": "remember-secret",
                "session-expiration": "2024-09-12T20:25:32.440Z",
                "user": {"email": "a@b.c", "username": "abc", "external-id": "U1"}
            }"#,
        )
        .unwrap()
        .into();

        let debug_str = format!("{:?}", session);
        assert!(!debug_str.contains("super-secret-token"));
        assert!(!debug_str.contains("remember-secret"));
        assert!(debug_str.contains("REDACTED"));
        assert_eq!(session.token().expose_secret(), "super-secret-token");
        assert_eq!(session.user().unwrap().username, "abc");
        assert!(session.is_expired());
    }

    #[test]
    fn test_login_body() {
        let credentials = LoginCredentials::new("user", "pw").remember_me(true);
        let json = serde_json::to_value(credentials.body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"login": "user", "password": "pw", "remember-me": true})
        );

        let credentials = LoginCredentials::with_remember_token("user", "rt");
        let json = serde_json::to_value(credentials.body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"login": "user", "remember-token": "rt", "remember-me": false})
        );
        assert!(!format!("{:?}", credentials).contains("rt\""));
    }

    #[test]
    fn test_with_user_keeps_token() {
        let user = User {
            email: "a@b.c".into(),
            username: "abc".into(),
            external_id: None,
            id: Some(7),
            is_confirmed: Some(true),
        };
        let session = Session::new("tok").with_user(user.clone());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(session.token().expose_secret(), "tok");
        assert!(!session.is_expired());
    }
}
