//! Port Interfaces
//!
//! Defines the interface (port) the GraphQL schema resolves against,
//! following the Hexagonal Architecture pattern. The REST client is the
//! production adapter; tests substitute a mock so schema behavior can be
//! verified without a network.
//!
//! One method per supported upstream endpoint, 14 in total across the
//! four market sections Polygon's free tier covers. Each call performs
//! exactly one HTTP GET: no retries, no pagination traversal.

use async_trait::async_trait;

use crate::domain::{AggregateWindow, CurrencyPair, MarketDate, OptionContract, SortOrder, Ticker};
use crate::infrastructure::polygon::error::PolygonError;
use crate::infrastructure::polygon::models::{
    AggregatesResponse, CryptoOpenCloseResponse, DailyOpenCloseResponse, GroupedDailyResponse,
};

/// Outbound port to the market data provider.
///
/// Implemented by `PolygonClient` for production and mocked in tests.
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    /// Aggregate bars for a stock over a date range.
    async fn stock_aggregates(
        &self,
        ticker: Ticker,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Open, high, low, and close for a stock on a single date.
    async fn stock_daily_open_close(
        &self,
        ticker: Ticker,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<DailyOpenCloseResponse, PolygonError>;

    /// Daily bars for the entire US stock market on a single date.
    async fn stock_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError>;

    /// Previous trading day's bar for a stock.
    async fn stock_previous_close(
        &self,
        ticker: Ticker,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Aggregate bars for an option contract over a date range.
    async fn option_aggregates(
        &self,
        contract: OptionContract,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Open, high, low, and close for an option contract on a single date.
    async fn option_daily_open_close(
        &self,
        contract: OptionContract,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<DailyOpenCloseResponse, PolygonError>;

    /// Previous trading day's bar for an option contract.
    async fn option_previous_close(
        &self,
        contract: OptionContract,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Aggregate bars for a currency pair over a date range.
    async fn forex_aggregates(
        &self,
        pair: CurrencyPair,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Daily bars for the entire forex market on a single date.
    async fn forex_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError>;

    /// Previous trading day's bar for a currency pair.
    async fn forex_previous_close(
        &self,
        pair: CurrencyPair,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Aggregate bars for a crypto pair over a date range.
    async fn crypto_aggregates(
        &self,
        pair: CurrencyPair,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError>;

    /// Open and close trades for a crypto pair on a single date.
    async fn crypto_daily_open_close(
        &self,
        pair: CurrencyPair,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<CryptoOpenCloseResponse, PolygonError>;

    /// Daily bars for the entire crypto market on a single date.
    async fn crypto_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError>;

    /// Previous trading day's bar for a crypto pair.
    async fn crypto_previous_close(
        &self,
        pair: CurrencyPair,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError>;
}
