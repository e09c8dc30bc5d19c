//! Polygon REST client integration tests.
//!
//! Run the client against a local wiremock server: URL construction,
//! API key placement, envelope handling, and error mapping.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use polygon_gateway::{
    AggregateWindow, ApiKey, CurrencyPair, MarketDate, OptionContract, OptionKind, PolygonClient,
    PolygonError, SortOrder, Ticker, Timespan,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PolygonClient {
    PolygonClient::new(
        server.uri(),
        ApiKey::new("test-key".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn date(s: &str) -> MarketDate {
    s.parse().unwrap()
}

fn day_window(from: &str, to: &str) -> AggregateWindow {
    AggregateWindow::new(1, Timespan::Day, date(from), date(to), 5000).unwrap()
}

fn aggregates_body(ticker: &str, count: u64) -> serde_json::Value {
    let bar = json!({
        "o": 1.0, "h": 2.0, "l": 0.5, "c": 1.5,
        "v": 100.0, "vw": 1.2, "t": 1_672_722_000_000_i64, "n": 10.0
    });
    json!({
        "ticker": ticker,
        "queryCount": count,
        "resultsCount": count,
        "adjusted": true,
        "results": (0..count).map(|_| bar.clone()).collect::<Vec<_>>(),
        "status": "OK",
        "request_id": "req-1"
    })
}

#[tokio::test]
async fn stock_aggregates_builds_documented_url_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/aggs/ticker/AAPL/range/1/day/2023-01-01/2023-01-31"))
        .and(query_param("adjusted", "true"))
        .and(query_param("sort", "asc"))
        .and(query_param("limit", "5000"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(aggregates_body("AAPL", 1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .stock_aggregates(
            Ticker::new("AAPL").unwrap(),
            day_window("2023-01-01", "2023-01-31"),
            true,
            SortOrder::Ascending,
        )
        .await
        .unwrap();

    assert_eq!(resp.ticker.as_deref(), Some("AAPL"));
    assert_eq!(resp.results.len(), 1);
}

#[tokio::test]
async fn option_aggregates_uses_occ_ticker_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/v2/aggs/ticker/O:AAPL230616C00150000/range/1/day/2023-01-01/2023-01-31",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(aggregates_body("O:AAPL230616C00150000", 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let contract = OptionContract::new(
        Ticker::new("AAPL").unwrap(),
        date("2023-06-16"),
        OptionKind::Call,
        150.0,
    )
    .unwrap();

    let client = client_for(&server);
    let resp = client
        .option_aggregates(
            contract,
            day_window("2023-01-01", "2023-01-31"),
            true,
            SortOrder::Ascending,
        )
        .await
        .unwrap();
    assert_eq!(resp.results_count, 1);
}

#[tokio::test]
async fn forex_grouped_daily_uses_global_fx_locale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/aggs/grouped/locale/global/market/fx/2023-01-09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queryCount": 1,
            "resultsCount": 1,
            "adjusted": true,
            "results": [{
                "T": "C:EURUSD", "o": 1.07, "h": 1.08, "l": 1.06, "c": 1.075,
                "v": 250_000.0, "t": 1_673_222_400_000_i64
            }],
            "status": "OK",
            "request_id": "req-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .forex_grouped_daily(date("2023-01-09"), true)
        .await
        .unwrap();
    assert_eq!(resp.results[0].ticker, "C:EURUSD");
}

#[tokio::test]
async fn crypto_open_close_path_carries_pair_legs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/open-close/crypto/BTC/USD/2023-01-09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "BTC-USD",
            "isUTC": true,
            "day": "2023-01-09",
            "open": 17178.0,
            "close": 17192.9,
            "openTrades": [],
            "closingTrades": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .crypto_daily_open_close(
            CurrencyPair::new("BTC", "USD").unwrap(),
            date("2023-01-09"),
            true,
        )
        .await
        .unwrap();
    assert_eq!(resp.symbol, "BTC-USD");
    assert!(resp.is_utc);
}

#[tokio::test]
async fn error_envelope_maps_to_api_error_with_upstream_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ERROR",
            "error": "Could not parse the time parameter: 'to'."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .stock_previous_close(Ticker::new("AAPL").unwrap(), true)
        .await
        .unwrap_err();

    match err {
        PolygonError::Api { message, .. } => {
            assert!(message.contains("Could not parse the time parameter"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_text_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "status": "ERROR",
            "error": "You've exceeded the maximum requests per minute, please wait."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .crypto_previous_close(CurrencyPair::new("BTC", "USD").unwrap(), true)
        .await
        .unwrap_err();
    assert!(matches!(err, PolygonError::RateLimited { .. }));
}

#[tokio::test]
async fn non_json_error_body_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .stock_previous_close(Ticker::new("AAPL").unwrap(), true)
        .await
        .unwrap_err();

    match err {
        PolygonError::Http { status, .. } => assert_eq!(status, 502),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .stock_previous_close(Ticker::new("AAPL").unwrap(), true)
        .await
        .unwrap_err();
    assert!(matches!(err, PolygonError::Decode { .. }));
}

#[tokio::test]
async fn zero_results_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticker": "X:BTCUSD",
            "queryCount": 0,
            "resultsCount": 0,
            "adjusted": true,
            "results": [],
            "status": "OK",
            "request_id": "req-3"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .crypto_aggregates(
            CurrencyPair::new("BTC", "USD").unwrap(),
            day_window("2023-01-01", "2023-01-02"),
            true,
            SortOrder::Ascending,
        )
        .await
        .unwrap_err();

    match err {
        PolygonError::NotFound { message } => assert!(message.contains("X:BTCUSD")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn grouped_daily_empty_results_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/aggs/grouped/locale/us/market/stocks/2023-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queryCount": 0,
            "resultsCount": 0,
            "adjusted": true,
            "results": [],
            "status": "OK",
            "request_id": "req-4"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .stock_grouped_daily(date("2023-01-01"), true)
        .await
        .unwrap();
    assert!(resp.results.is_empty());
}

#[tokio::test]
async fn not_found_envelope_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/open-close/AAPL/2023-01-01"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "NOT_FOUND",
            "message": "Data not found."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .stock_daily_open_close(Ticker::new("AAPL").unwrap(), date("2023-01-01"), true)
        .await
        .unwrap_err();

    match err {
        PolygonError::NotFound { message } => {
            assert!(message.contains("Data not found."));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}
