//! GraphQL Output Types
//!
//! Output objects returned by the resolvers, converted from the Polygon
//! wire types. Bar timestamps are surfaced as RFC 3339 datetimes rather
//! than raw epoch milliseconds.

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

use crate::infrastructure::polygon::models;

/// Convert Polygon's epoch-millisecond timestamps to UTC datetimes.
fn utc_from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Aggregate bars for one instrument over a requested window.
#[derive(Debug, Clone, SimpleObject)]
pub struct AggregateSeries {
    /// Ticker the bars were computed for.
    pub ticker: Option<String>,
    /// Number of base aggregates queried upstream.
    pub query_count: Option<u64>,
    /// Number of bars returned.
    pub results_count: u64,
    /// Whether the bars are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Upstream request identifier, useful when raising support issues.
    pub request_id: Option<String>,
    /// The aggregate bars, ordered as requested.
    pub bars: Vec<OhlcBar>,
}

/// One OHLCV bar.
#[derive(Debug, Clone, SimpleObject)]
pub struct OhlcBar {
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Trading volume.
    pub volume: f64,
    /// Volume-weighted average price.
    pub vw_price: Option<f64>,
    /// Start of the bar window, UTC.
    pub timestamp: DateTime<Utc>,
    /// Number of transactions in the window.
    pub transactions: Option<f64>,
}

/// Daily bars for every instrument that traded on one date.
#[derive(Debug, Clone, SimpleObject)]
pub struct GroupedDailySeries {
    /// Number of base aggregates queried upstream.
    pub query_count: Option<u64>,
    /// Number of bars returned.
    pub results_count: u64,
    /// Whether the bars are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Upstream request identifier, useful when raising support issues.
    pub request_id: Option<String>,
    /// One daily bar per ticker.
    pub bars: Vec<MarketDayBar>,
}

/// One per-ticker daily bar from a grouped daily response.
#[derive(Debug, Clone, SimpleObject)]
pub struct MarketDayBar {
    /// Ticker this bar belongs to.
    pub ticker: String,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Trading volume.
    pub volume: f64,
    /// Volume-weighted average price.
    pub vw_price: Option<f64>,
    /// Start of the bar window, UTC.
    pub timestamp: DateTime<Utc>,
    /// Number of transactions in the window.
    pub transactions: Option<f64>,
}

/// Official open and close for one instrument on one date.
#[derive(Debug, Clone, SimpleObject)]
pub struct DailyOpenClose {
    /// Requested date, `YYYY-MM-DD`.
    pub from: String,
    /// Requested ticker.
    pub symbol: String,
    /// Official open price.
    pub open: f64,
    /// Session high price.
    pub high: f64,
    /// Session low price.
    pub low: f64,
    /// Official close price.
    pub close: f64,
    /// Session trading volume.
    pub volume: f64,
    /// Price of the last after-hours trade.
    pub after_hours: Option<f64>,
    /// Price of the first pre-market trade.
    pub pre_market: Option<f64>,
}

/// Open and close trades for a crypto pair on one date.
#[derive(Debug, Clone, SimpleObject)]
pub struct CryptoDailyOpenClose {
    /// Requested pair symbol, e.g. `BTC-USD`.
    pub symbol: String,
    /// Whether trade timestamps are UTC.
    pub is_utc: bool,
    /// Requested date, `YYYY-MM-DD`.
    pub day: String,
    /// Open price for the day.
    pub open: f64,
    /// Close price for the day.
    pub close: f64,
    /// Trades at the open.
    pub open_trades: Vec<CryptoTradeEntry>,
    /// Trades at the close.
    pub closing_trades: Vec<CryptoTradeEntry>,
}

/// One crypto trade.
#[derive(Debug, Clone, SimpleObject)]
pub struct CryptoTradeEntry {
    /// Exchange identifier.
    pub exchange: i64,
    /// Trade price.
    pub price: f64,
    /// Trade size.
    pub size: f64,
    /// Condition codes.
    pub conditions: Vec<i32>,
    /// Trade timestamp, UTC.
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Wire conversions
// =============================================================================

impl From<models::AggregatesResponse> for AggregateSeries {
    fn from(resp: models::AggregatesResponse) -> Self {
        Self {
            ticker: resp.ticker,
            query_count: resp.query_count,
            results_count: resp.results_count,
            adjusted: resp.adjusted,
            request_id: resp.request_id,
            bars: resp.results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<models::AggregateBar> for OhlcBar {
    fn from(bar: models::AggregateBar) -> Self {
        Self {
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            vw_price: bar.vw_price,
            timestamp: utc_from_millis(bar.timestamp_ms),
            transactions: bar.transactions,
        }
    }
}

impl From<models::GroupedDailyResponse> for GroupedDailySeries {
    fn from(resp: models::GroupedDailyResponse) -> Self {
        Self {
            query_count: resp.query_count,
            results_count: resp.results_count,
            adjusted: resp.adjusted,
            request_id: resp.request_id,
            bars: resp.results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<models::GroupedDailyBar> for MarketDayBar {
    fn from(bar: models::GroupedDailyBar) -> Self {
        Self {
            ticker: bar.ticker,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            vw_price: bar.vw_price,
            timestamp: utc_from_millis(bar.timestamp_ms),
            transactions: bar.transactions,
        }
    }
}

impl From<models::DailyOpenCloseResponse> for DailyOpenClose {
    fn from(resp: models::DailyOpenCloseResponse) -> Self {
        Self {
            from: resp.from,
            symbol: resp.symbol,
            open: resp.open,
            high: resp.high,
            low: resp.low,
            close: resp.close,
            volume: resp.volume,
            after_hours: resp.after_hours,
            pre_market: resp.pre_market,
        }
    }
}

impl From<models::CryptoOpenCloseResponse> for CryptoDailyOpenClose {
    fn from(resp: models::CryptoOpenCloseResponse) -> Self {
        Self {
            symbol: resp.symbol,
            is_utc: resp.is_utc,
            day: resp.day,
            open: resp.open,
            close: resp.close,
            open_trades: resp.open_trades.into_iter().map(Into::into).collect(),
            closing_trades: resp.closing_trades.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<models::CryptoTrade> for CryptoTradeEntry {
    fn from(trade: models::CryptoTrade) -> Self {
        Self {
            exchange: trade.exchange,
            price: trade.price,
            size: trade.size,
            conditions: trade.conditions,
            timestamp: utc_from_millis(trade.timestamp_ms),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
