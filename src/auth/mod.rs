//! Session creation, validation, and logout.
//!
//! The API authenticates with an opaque session token obtained by logging
//! in. The client keeps the current [`Session`] behind a lock; the calls in
//! [`SessionsService`] replace or clear it.
//!
//! ```no_run
//! use tastytrade::{Environment, TastytradeClient};
//! use tastytrade::auth::LoginCredentials;
//!
//! # async fn example() -> tastytrade::Result<()> {
//! let client = TastytradeClient::new(Environment::Sandbox)?;
//! let credentials = LoginCredentials::new("username", "password").remember_me(true);
//!
//! // Accounts with two-factor auth enabled need a one-time password.
//! let session = client.sessions().create_with_otp(&credentials, "123456").await?;
//! println!("logged in as {:?}", session.user());
//!
//! client.sessions().destroy().await?;
//! # Ok(())
//! # }
//! ```

mod session;

use std::sync::Arc;

use reqwest::Method;
use secrecy::ExposeSecret;

use crate::client::{ApiRequest, ClientInner};
use crate::Result;

pub use session::{LoginCredentials, Session, User};
use session::SessionResponse;

/// Header carrying a one-time password during login.
pub const OTP_HEADER: &str = "X-Tastyworks-OTP";

/// Service for the `/sessions` endpoints.
pub struct SessionsService {
    inner: Arc<ClientInner>,
}

impl SessionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Log in and store the new session on the client.
    pub async fn create(&self, credentials: &LoginCredentials) -> Result<Session> {
        let request = self
            .inner
            .request(Method::POST, &["sessions"])
            .without_auth()
            .json(&credentials.body());
        self.store(request).await
    }

    /// Log in with a one-time password for two-factor accounts.
    pub async fn create_with_otp(
        &self,
        credentials: &LoginCredentials,
        otp: &str,
    ) -> Result<Session> {
        let request = self
            .inner
            .request(Method::POST, &["sessions"])
            .without_auth()
            .header(OTP_HEADER, otp)
            .json(&credentials.body());
        self.store(request).await
    }

    /// Check the current token with the API.
    ///
    /// On success the stored session is replaced by one carrying the
    /// returned user, unless another session was stored in the meantime.
    pub async fn validate(&self) -> Result<User> {
        let validated_token = self
            .inner
            .session
            .read()
            .await
            .as_ref()
            .map(|session| session.token().expose_secret().to_owned());
        let request = self.inner.request(Method::POST, &["sessions", "validate"]);
        let user: User = self.inner.data(request).await?;

        let mut current = self.inner.session.write().await;
        let unchanged = current.as_ref().is_some_and(|session| {
            Some(session.token().expose_secret()) == validated_token.as_deref()
        });
        if unchanged {
            if let Some(session) = current.take() {
                *current = Some(session.with_user(user.clone()));
            }
        } else {
            tracing::debug!("session replaced during validation, keeping the newer one");
        }
        Ok(user)
    }

    /// Log out and clear the stored session.
    pub async fn destroy(&self) -> Result<()> {
        let request = self.inner.request(Method::DELETE, &["sessions"]);
        self.inner.execute(request).await?;

        *self.inner.session.write().await = None;
        tracing::debug!("session destroyed");
        Ok(())
    }

    async fn store(&self, request: ApiRequest<'_>) -> Result<Session> {
        let response: SessionResponse = self.inner.data(request).await?;
        let session = Session::from(response);

        tracing::debug!(
            user = session.user().map(|u| u.username.as_str()).unwrap_or_default(),
            "session created"
        );
        *self.inner.session.write().await = Some(session.clone());
        Ok(session)
    }
}
