//! HTTP transport shared by every endpoint group.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use url::Url;

use crate::api::{
    AccountsService, BalancesService, InstrumentsService, MarginService, MetricsService,
    OrdersService, QuoteTokensService, RiskService, SearchService, TransactionsService,
    WatchlistsService,
};
use crate::auth::{LoginCredentials, Session, SessionsService};
use crate::error::{is_known_error_status, ApiError};
use crate::models::{Paginated, Pagination};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::query;

/// The main client for the tastytrade API.
///
/// The client owns the HTTP connection pool and the current session.
/// Cloning is cheap; clones share both.
///
/// # Example
///
/// ```no_run
/// use tastytrade::{TastytradeClient, Environment};
///
/// # async fn example() -> tastytrade::Result<()> {
/// let client = TastytradeClient::login("username", "password", Environment::Sandbox).await?;
///
/// for item in client.accounts().list().await? {
///     let account = &item.account.account_number;
///     let orders = client.orders().live(account).await?;
///     println!("{}: {} live orders", account, orders.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TastytradeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) session: RwLock<Option<Session>>,
}

impl TastytradeClient {
    /// Create an unauthenticated client for `env`.
    pub fn new(env: Environment) -> Result<Self> {
        Self::with_config(ClientConfig::new(env))
    }

    /// Create an unauthenticated client from a configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::from_parts(http, config, None))
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The configuration's timeout and user agent are ignored; whatever the
    /// given client enforces applies.
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self::from_parts(http, config, None)
    }

    /// Create a client that reuses a session token issued earlier.
    pub fn with_session_token(token: impl Into<String>, env: Environment) -> Result<Self> {
        let config = ClientConfig::new(env);
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::from_parts(http, config, Some(Session::new(token))))
    }

    fn from_parts(http: reqwest::Client, config: ClientConfig, session: Option<Session>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                session: RwLock::new(session),
            }),
        }
    }

    /// Log in with username and password.
    pub async fn login(
        username: impl Into<String>,
        password: impl Into<String>,
        env: Environment,
    ) -> Result<Self> {
        Self::login_with_config(username, password, ClientConfig::new(env)).await
    }

    /// Log in with username and password using a custom configuration.
    pub async fn login_with_config(
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = Self::with_config(config)?;
        let credentials = LoginCredentials::new(username, password);
        client.sessions().create(&credentials).await?;
        Ok(client)
    }

    /// A copy of the current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.inner.session.read().await.clone()
    }

    /// Replace the current session.
    pub async fn set_session(&self, session: Session) {
        *self.inner.session.write().await = Some(session);
    }

    /// Drop the current session without contacting the API.
    pub async fn clear_session(&self) {
        *self.inner.session.write().await = None;
    }

    /// The environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.inner.config.environment
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Fetch the page behind a pagination link.
    ///
    /// Accepts an absolute URL or a path relative to the base URL, as found
    /// in [`Pagination::next_link`] and [`Pagination::previous_link`].
    pub async fn follow_link<T: DeserializeOwned>(&self, link: &str) -> Result<Paginated<T>> {
        let request = self.inner.request_url(Method::GET, link);
        self.inner.paginated_request(request).await
    }

    /// Session creation, validation, and logout.
    pub fn sessions(&self) -> SessionsService {
        SessionsService::new(self.inner.clone())
    }

    /// Customer and account lookup.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Balances, positions, and balance history.
    pub fn balances(&self) -> BalancesService {
        BalancesService::new(self.inner.clone())
    }

    /// Order entry and order history.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Instrument definitions and option chains.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// Margin requirements.
    pub fn margin(&self) -> MarginService {
        MarginService::new(self.inner.clone())
    }

    /// Account risk parameters.
    pub fn risk(&self) -> RiskService {
        RiskService::new(self.inner.clone())
    }

    /// Transaction history.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// User, public, and pairs watchlists.
    pub fn watchlists(&self) -> WatchlistsService {
        WatchlistsService::new(self.inner.clone())
    }

    /// Market metrics and corporate events.
    pub fn metrics(&self) -> MetricsService {
        MetricsService::new(self.inner.clone())
    }

    /// Symbol search.
    pub fn search(&self) -> SearchService {
        SearchService::new(self.inner.clone())
    }

    /// Quote streamer tokens.
    pub fn quote_tokens(&self) -> QuoteTokensService {
        QuoteTokensService::new(self.inner.clone())
    }
}

impl std::fmt::Debug for TastytradeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TastytradeClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

/// `{"data": ...}` envelope around every payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    #[allow(dead_code)]
    pub context: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `{"items": [...]}` body of list endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub(crate) struct Items<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

impl ClientInner {
    /// Start a request whose path is built from individually escaped
    /// segments. A `/` inside a segment is sent as `%2F`.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> ApiRequest<'_> {
        let url = Url::parse(self.config.base_url())
            .map_err(Error::from)
            .and_then(|mut url| {
                {
                    let mut path = url.path_segments_mut().map_err(|()| {
                        Error::InvalidInput(format!(
                            "base URL {} cannot carry a path",
                            self.config.base_url()
                        ))
                    })?;
                    path.pop_if_empty().extend(segments);
                }
                Ok(url)
            });

        ApiRequest::new(self, method, url)
    }

    /// Start a request from a pre-built URL or base-relative path.
    pub(crate) fn request_url(&self, method: Method, url: &str) -> ApiRequest<'_> {
        let url = if url.starts_with('/') {
            Url::parse(&format!("{}{}", self.config.base_url(), url))
        } else {
            Url::parse(url)
        };

        ApiRequest::new(self, method, url.map_err(Error::from))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.data(self.request(Method::GET, segments)).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T> {
        self.data(self.request(Method::GET, segments).query(query))
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        self.data(self.request(Method::POST, segments).json(body))
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        self.data(self.request(Method::PUT, segments).json(body))
            .await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        self.data(self.request(Method::PATCH, segments).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.data(self.request(Method::DELETE, segments)).await
    }

    pub(crate) async fn list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>> {
        let items: Items<T> = self.get(segments).await?;
        Ok(items.items)
    }

    pub(crate) async fn list_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<Vec<T>> {
        let items: Items<T> = self.get_with_query(segments, query).await?;
        Ok(items.items)
    }

    pub(crate) async fn paginated<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<Paginated<T>> {
        self.paginated_request(self.request(Method::GET, segments).query(query))
            .await
    }

    /// Perform a request and drop whatever body comes back, including none.
    pub(crate) async fn execute(&self, request: ApiRequest<'_>) -> Result<()> {
        match request.send::<IgnoredAny>().await {
            Ok(_) => Ok(()),
            Err(Error::Json(err)) if err.is_eof() => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Perform a request and unwrap the `data` envelope.
    pub(crate) async fn data<T: DeserializeOwned>(&self, request: ApiRequest<'_>) -> Result<T> {
        let what = request.describe();
        request
            .send::<ApiResponse<T>>()
            .await?
            .and_then(|envelope| envelope.data)
            .ok_or(Error::EmptyResponse(what))
    }

    async fn paginated_request<T: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
    ) -> Result<Paginated<T>> {
        let what = request.describe();
        let envelope = request
            .send::<ApiResponse<Items<T>>>()
            .await?
            .ok_or(Error::EmptyResponse(what))?;

        Ok(Paginated {
            items: envelope.data.map(|d| d.items).unwrap_or_default(),
            pagination: envelope.pagination,
        })
    }
}

/// A single API round trip under construction.
///
/// Encoding failures are kept until [`ApiRequest::send`], which reports
/// them before touching the network.
pub(crate) struct ApiRequest<'a> {
    inner: &'a ClientInner,
    method: Method,
    url: Result<Url>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    headers: HeaderMap,
    authenticated: bool,
    error: Option<Error>,
}

impl<'a> ApiRequest<'a> {
    fn new(inner: &'a ClientInner, method: Method, url: Result<Url>) -> Self {
        Self {
            inner,
            method,
            url,
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
            authenticated: true,
            error: None,
        }
    }

    /// Skip the session token. Used by endpoints that create sessions.
    pub(crate) fn without_auth(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Append query parameters encoded from `query`.
    pub(crate) fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Self {
        if self.error.is_none() {
            match query::to_pairs(query) {
                Ok(pairs) => self.query.extend(pairs),
                Err(err) => self.error = Some(Error::Query(err)),
            }
        }
        self
    }

    /// Set a JSON body.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        if self.error.is_none() {
            match serde_json::to_vec(body) {
                Ok(bytes) => self.body = Some(bytes),
                Err(err) => self.error = Some(Error::Json(err)),
            }
        }
        self
    }

    /// Add an extra header.
    pub(crate) fn header(mut self, name: &str, value: &str) -> Self {
        if self.error.is_none() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    self.headers.insert(name, value);
                }
                _ => self.error = Some(Error::InvalidHeader(name.to_string())),
            }
        }
        self
    }

    fn describe(&self) -> String {
        match &self.url {
            Ok(url) => format!("{} {}", self.method, url.path()),
            Err(_) => self.method.to_string(),
        }
    }

    /// Perform the round trip.
    ///
    /// Returns `Ok(None)` on `204 No Content`. Statuses in the known error
    /// set decode the error envelope; any other status decodes the body as
    /// `T`.
    pub(crate) async fn send<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let mut url = self.url?;
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut headers = self.headers;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if self.authenticated {
            let session = self.inner.session.read().await;
            let session = session.as_ref().ok_or(Error::InvalidSession)?;
            let token = HeaderValue::from_str(session.token().expose_secret())
                .map_err(|_| Error::InvalidHeader("Authorization".to_string()))?;
            headers.insert(AUTHORIZATION, token);
        }

        if let Some(version) = &self.inner.config.api_version {
            let version = HeaderValue::from_str(version.as_str())
                .map_err(|_| Error::InvalidHeader("Api-Version".to_string()))?;
            headers.insert("Api-Version", version);
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        tracing::debug!(method = %self.method, url = %url, "sending request");

        let mut builder = self.inner.http.request(self.method.clone(), url.clone()).headers(headers);
        if let Some(body) = self.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %self.method,
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if is_known_error_status(status.as_u16()) {
            let err = ApiError::from_body(status.as_u16(), &body);
            tracing::warn!(
                method = %self.method,
                path = url.path(),
                status = err.status_code,
                code = %err.code,
                message = %err.message,
                "API returned an error"
            );
            return Err(Error::Api(err));
        }

        Ok(Some(serde_json::from_slice(&body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> TastytradeClient {
        let config = ClientConfig::new(Environment::Sandbox).with_base_url(server.uri());
        TastytradeClient::with_config(config).unwrap()
    }

    async fn authed_client_for(server: &MockServer) -> TastytradeClient {
        let client = client_for(server).await;
        client.set_session(Session::new("token-123")).await;
        client
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        name: String,
    }

    #[tokio::test]
    async fn test_unauthorized_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"code": "unauthorized", "message": "Unauthorized: no session"}
            })))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let result: Result<Thing> = client.inner.get(&["customers", "me"]).await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), "unauthorized");
        assert_eq!(err.status_code(), 401);
        assert!(err.is_auth_error());
        assert_eq!(
            err.to_string(),
            "\nError in request 401;\nCode: unauthorized\nMessage: Unauthorized: no session"
        );
    }

    #[tokio::test]
    async fn test_no_content_is_success_without_payload() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let out = client
            .inner
            .request(Method::DELETE, &["sessions"])
            .send::<Thing>()
            .await
            .unwrap();
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn test_unencodable_query_fails_before_io() {
        #[derive(Serialize)]
        struct Bad {
            price: f64,
        }

        let server = MockServer::start().await;
        let client = authed_client_for(&server).await;
        let result: Result<Thing> = client
            .inner
            .get_with_query(&["things"], &Bad { price: f64::INFINITY })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Query(_)));
        assert_eq!(err.status_code(), 0);
        assert!(err.to_string().contains("failed to marshal query"));
        assert!(err.to_string().contains("+Inf"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_session_fails_before_io() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let result: Result<Thing> = client.inner.get(&["customers", "me"]).await;
        assert!(matches!(result, Err(Error::InvalidSession)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_headers_and_escaped_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/instruments/equities/BRK%2FB"))
            .and(header("Authorization", "token-123"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "BRK/B"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let thing: Thing = client
            .inner
            .get(&["instruments", "equities", "BRK/B"])
            .await
            .unwrap();
        assert_eq!(thing.name, "BRK/B");
    }

    #[tokio::test]
    async fn test_api_version_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("Api-Version", "20240101"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "x"}})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new(Environment::Sandbox)
            .with_base_url(server.uri())
            .with_api_version(crate::ApiVersion::new("20240101").unwrap());
        let client = TastytradeClient::with_config(config).unwrap();
        client.set_session(Session::new("t")).await;

        let _: Thing = client.inner.get(&["x"]).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_auth_request_omits_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "ok"}})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = client
            .inner
            .request(Method::POST, &["sessions"])
            .without_auth()
            .json(&json!({"login": "u"}));
        let thing: Thing = client.inner.data(request).await.unwrap();
        assert_eq!(thing.name, "ok");

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_undecodable_error_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>down</html>"))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let err = client.inner.get::<Thing>(&["x"]).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.code(), "unknown_error");
        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn test_unlisted_status_is_decoded_as_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let err = client.inner.get::<Thing>(&["x"]).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.status_code(), 0);
    }

    #[tokio::test]
    async fn test_repeated_query_params() {
        #[derive(Serialize)]
        struct Filter {
            symbol: Vec<&'static str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            lendability: Option<&'static str>,
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/instruments/equities"))
            .and(query_param("symbol[]", "AAPL"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"items": [{"name": "AAPL"}, {"name": "MSFT"}]}})),
            )
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let things: Vec<Thing> = client
            .inner
            .list_with_query(
                &["instruments", "equities"],
                &Filter {
                    symbol: vec!["AAPL", "MSFT"],
                    lendability: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(things.len(), 2);

        let received = server.received_requests().await.unwrap();
        let query = received[0].url.query().unwrap_or_default().to_string();
        assert_eq!(query, "symbol%5B%5D=AAPL&symbol%5B%5D=MSFT");
    }

    #[tokio::test]
    async fn test_list_without_items_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let things: Vec<Thing> = client.inner.list(&["x"]).await.unwrap();
        assert!(things.is_empty());
    }

    #[tokio::test]
    async fn test_data_endpoint_without_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let err = client.inner.get::<Thing>(&["x"]).await.unwrap_err();
        assert!(matches!(err, Error::EmptyResponse(_)));
    }

    #[tokio::test]
    async fn test_follow_pagination_link() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts/5WV1/transactions"))
            .and(query_param("page-offset", "1"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"items": [{"name": "t2"}]},
                "pagination": {
                    "per-page": 1, "page-offset": 1, "item-offset": 1,
                    "total-items": 2, "total-pages": 2, "current-item-count": 1
                }
            })))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let page: Paginated<Thing> = client
            .follow_link("/accounts/5WV1/transactions?per-page=1&page-offset=1")
            .await
            .unwrap();
        assert_eq!(page.items, vec![Thing { name: "t2".into() }]);
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_more());
    }

    #[tokio::test]
    async fn test_execute_accepts_empty_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/watchlists/old"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = authed_client_for(&server).await;
        let request = client.inner.request(Method::DELETE, &["watchlists", "old"]);
        client.inner.execute(request).await.unwrap();
    }
}
