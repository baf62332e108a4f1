//! End-to-end tests of the client against a mock tastytrade server.

use std::sync::Once;
use std::time::Duration;

use futures_util::StreamExt;
use rust_decimal_macros::dec;
use secrecy::ExposeSecret;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tastytrade::api::{FuturesQuery, OrdersQuery, TransactionsQuery};
use tastytrade::auth::LoginCredentials;
use tastytrade::models::{
    InstrumentType, NewOrderBuilder, OrderAction, OrderStatus, OrderType, PriceEffect,
    TimeInForce,
};
use tastytrade::{AccountNumber, ClientConfig, Environment, Error, Session, TastytradeClient};

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn client_for(server: &MockServer) -> TastytradeClient {
    init_logging();
    let config = ClientConfig::new(Environment::Sandbox).with_base_url(server.uri());
    TastytradeClient::with_config(config).unwrap()
}

async fn authed_client_for(server: &MockServer) -> TastytradeClient {
    let client = client_for(server);
    client.set_session(Session::new("session-abc")).await;
    client
}

fn order_json(id: u64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "account-number": "5WV12345",
        "time-in-force": "Day",
        "order-type": "Limit",
        "price": "150.0",
        "price-effect": "Debit",
        "status": status,
        "cancellable": true,
        "editable": true,
        "legs": [{
            "instrument-type": "Equity",
            "symbol": "AAPL",
            "quantity": "10",
            "remaining-quantity": "10",
            "action": "Buy to Open",
            "fills": []
        }]
    })
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_login_stores_session_for_later_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_partial_json(json!({"login": "trader", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "session-token": "session-abc",
                "remember-token": "remember-xyz",
                "user": {"email": "t@example.com", "username": "trader", "external-id": "U1"}
            },
            "context": "/sessions"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers/me/accounts"))
        .and(header("Authorization", "session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"account": {"account-number": "5WV12345", "nickname": "Main"}, "authority-level": "owner"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = client
        .sessions()
        .create(&LoginCredentials::new("trader", "hunter2").remember_me(true))
        .await
        .unwrap();
    assert_eq!(session.user().unwrap().username, "trader");
    assert!(session.remember_token().is_some());

    let accounts = client.accounts().list().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account.account_number.as_str(), "5WV12345");
    assert_eq!(accounts[0].account.nickname.as_deref(), Some("Main"));
}

#[tokio::test]
async fn test_login_with_one_time_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(header("X-Tastyworks-OTP", "123456"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"session-token": "otp-session", "user": {"username": "trader"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .sessions()
        .create_with_otp(&LoginCredentials::new("trader", "hunter2"), "123456")
        .await
        .unwrap();
    assert!(client.session().await.is_some());
}

#[tokio::test]
async fn test_failed_login_leaves_client_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": "invalid_credentials", "message": "Invalid login, please check your username and password"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .sessions()
        .create(&LoginCredentials::new("trader", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.code(), "invalid_credentials");
    assert!(err.is_auth_error());
    assert!(client.session().await.is_none());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/sessions"))
        .and(header("Authorization", "session-abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    client.sessions().destroy().await.unwrap();
    assert!(client.session().await.is_none());

    let err = client.accounts().me().await.unwrap_err();
    assert!(matches!(err, Error::InvalidSession));
}

#[tokio::test]
async fn test_validate_keeps_session_stored_during_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/validate"))
        .and(header("Authorization", "session-abc"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({
                    "data": {"email": "t@example.com", "username": "trader", "external-id": "U1"}
                }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let sessions = client.sessions();
    let (user, ()) = tokio::join!(sessions.validate(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        client.set_session(Session::new("session-newer")).await;
    });
    assert_eq!(user.unwrap().username, "trader");

    let session = client.session().await.unwrap();
    assert_eq!(session.token().expose_secret(), "session-newer");
    assert!(session.user().is_none());
}

#[tokio::test]
async fn test_validate_attaches_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/validate"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"email": "t@example.com", "username": "trader", "external-id": "U1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    client.sessions().validate().await.unwrap();

    let session = client.session().await.unwrap();
    assert_eq!(session.token().expose_secret(), "session-abc");
    assert_eq!(session.user().unwrap().username, "trader");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_validation_error_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/5WV12345/orders"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {
                "code": "validation_error",
                "message": "Request validation failed",
                "errors": [{"domain": "price", "reason": "must be greater than 0"}]
            }
        })))
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let order = NewOrderBuilder::new()
        .time_in_force(TimeInForce::Day)
        .order_type(OrderType::Limit)
        .price(dec!(0.01))
        .price_effect(PriceEffect::Debit)
        .leg(InstrumentType::Equity, "AAPL", OrderAction::BuyToOpen, dec!(1))
        .build()
        .unwrap();

    let err = client
        .orders()
        .place(&AccountNumber::new("5WV12345"), &order)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 422);
    assert!(err.is_client_error());
    assert_eq!(err.details().len(), 1);
    assert_eq!(err.details()[0].domain, "price");
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/5WV12345/balances"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": "internal_error", "message": "boom"}
        })))
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let err = client
        .balances()
        .get(&AccountNumber::new("5WV12345"))
        .await
        .unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.message(), "boom");
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_dry_run_sends_order_and_reads_effects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/5WV12345/orders/dry-run"))
        .and(body_partial_json(json!({
            "time-in-force": "Day",
            "order-type": "Limit",
            "price": "150.00",
            "price-effect": "Debit",
            "legs": [{"instrument-type": "Equity", "symbol": "AAPL", "action": "Buy to Open"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "order": order_json(0, "Received"),
                "buying-power-effect": {
                    "change-in-buying-power": "1500.00",
                    "change-in-buying-power-effect": "Debit",
                    "new-buying-power": "8500.00",
                    "new-buying-power-effect": "Credit",
                    "is-spread": false
                },
                "fee-calculation": {
                    "total-fees": "0.02",
                    "total-fees-effect": "Debit"
                },
                "warnings": [{"code": "market_closed", "message": "Market is closed"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let order = NewOrderBuilder::new()
        .time_in_force(TimeInForce::Day)
        .order_type(OrderType::Limit)
        .price(dec!(150.00))
        .price_effect(PriceEffect::Debit)
        .leg(InstrumentType::Equity, "AAPL", OrderAction::BuyToOpen, dec!(10))
        .build()
        .unwrap();

    let preview = client
        .orders()
        .dry_run(&AccountNumber::new("5WV12345"), &order)
        .await
        .unwrap();
    assert!(preview.is_valid());
    assert_eq!(preview.warnings.len(), 1);

    let effect = preview.buying_power_effect.unwrap();
    assert!(effect.has_sufficient_buying_power());
    assert_eq!(effect.buying_power_change(), Some(dec!(-1500.00)));
}

#[tokio::test]
async fn test_cancel_returns_order() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/accounts/5WV12345/orders/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": order_json(42, "Cancel Requested")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let order = client
        .orders()
        .cancel(&AccountNumber::new("5WV12345"), &42u64.into())
        .await
        .unwrap();
    assert_eq!(order.id, Some(42));
    assert_eq!(order.status, OrderStatus::CancelRequested);
}

#[tokio::test]
async fn test_order_list_stream_walks_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/5WV12345/orders"))
        .and(query_param("status[]", "Filled"))
        .and(query_param("per-page", "2"))
        .and(query_param("page-offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [order_json(1, "Filled"), order_json(2, "Filled")]},
            "pagination": {"per-page": 2, "page-offset": 0, "total-items": 3, "total-pages": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/5WV12345/orders"))
        .and(query_param("page-offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [order_json(3, "Filled")]},
            "pagination": {"per-page": 2, "page-offset": 1, "total-items": 3, "total-pages": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let query = OrdersQuery {
        status: vec![OrderStatus::Filled],
        per_page: Some(2),
        page_offset: Some(5),
        ..Default::default()
    };
    let ids: Vec<Option<u64>> = client
        .orders()
        .list_stream(&AccountNumber::new("5WV12345"), query)
        .map(|order| order.unwrap().id)
        .collect()
        .await;
    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
}

#[tokio::test]
async fn test_single_page_keeps_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/5WV12345/transactions"))
        .and(query_param("page-offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"id": 7, "transaction-type": "Trade", "value": "100.00", "value-effect": "Credit"}
            ]},
            "pagination": {
                "per-page": 1,
                "page-offset": 1,
                "total-items": 3,
                "total-pages": 3,
                "next-link": "/accounts/5WV12345/transactions?page-offset=2"
            }
        })))
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let query = TransactionsQuery {
        per_page: Some(1),
        page_offset: Some(1),
        ..Default::default()
    };
    let page = client
        .transactions()
        .list(&AccountNumber::new("5WV12345"), &query)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, Some(7));

    let pagination = page.pagination.unwrap();
    assert_eq!(pagination.next_page(), Some(2));
    assert!(pagination.next_link.is_some());
}

// =============================================================================
// Other endpoint groups
// =============================================================================

#[tokio::test]
async fn test_future_symbol_is_escaped_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/instruments/futures/%2FESZ4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"symbol": "/ESZ4", "product-code": "ES", "active": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let future = client.instruments().future("/ESZ4").await.unwrap();
    assert_eq!(future.symbol, "/ESZ4");
}

#[tokio::test]
async fn test_futures_query_repeats_product_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/instruments/futures"))
        .and(query_param("product-code[]", "ES"))
        .and(query_param("product-code[]", "NQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let query = FuturesQuery {
        product_code: vec!["ES".into(), "NQ".into()],
        ..Default::default()
    };
    let futures = client.instruments().futures(&query).await.unwrap();
    assert!(futures.is_empty());
}

#[tokio::test]
async fn test_market_metrics_comma_joined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/market-metrics"))
        .and(query_param("symbols", "AAPL,SPY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"symbol": "AAPL", "implied-volatility-index-rank": "0.62"},
                {"symbol": "SPY", "implied-volatility-index-rank": ""}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let metrics = client.metrics().get(&["AAPL", "SPY"]).await.unwrap();
    assert_eq!(metrics.len(), 2);
    assert!(metrics[0].is_high_iv_rank());
    assert!(!metrics[1].is_high_iv_rank());
}

#[tokio::test]
async fn test_watchlist_delete_and_public_counts() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/watchlists/My%20List"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public-watchlists"))
        .and(query_param("counts-only", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [{"name": "tasty default", "group-name": "Main"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    client.watchlists().delete("My List").await.unwrap();

    let public = client.watchlists().public(true).await.unwrap();
    assert_eq!(public[0].name, "tasty default");
    assert!(public[0].watchlist_entries.is_empty());
}

#[tokio::test]
async fn test_total_fees_for_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/5WV12345/transactions/total-fees"))
        .and(query_param("date", "2024-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"total-fees": "1.25", "total-fees-effect": "Debit"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server).await;
    let fees = client
        .transactions()
        .total_fees(
            &AccountNumber::new("5WV12345"),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
        )
        .await
        .unwrap();
    assert_eq!(fees.total_fees, Some(dec!(1.25)));
}
