//! Stocks Endpoints
//!
//! The four free-tier stock endpoints: ranged aggregates, daily
//! open/close, whole-market grouped daily, and previous close.
//!
//! # References
//!
//! - [Stocks API](https://polygon.io/docs/stocks/getting-started)

use crate::domain::{AggregateWindow, MarketDate, SortOrder, Ticker};

use super::client::{aggregates_query, ensure_results, PolygonClient};
use super::error::PolygonError;
use super::models::{AggregatesResponse, DailyOpenCloseResponse, GroupedDailyResponse};

impl PolygonClient {
    /// Fetch aggregate bars for a stock over a date range.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the window matched no bars.
    pub async fn stock_aggregates(
        &self,
        ticker: Ticker,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        let path = format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            ticker,
            window.multiplier(),
            window.timespan().as_str(),
            window.from(),
            window.to(),
        );
        let body = self
            .get_json(&path, &aggregates_query(adjusted, sort, window.limit()))
            .await?;
        let resp: AggregatesResponse = Self::decode(body, &path)?;
        ensure_results(resp.results_count, || {
            format!(
                "data not found for {ticker} from {} to {}",
                window.from(),
                window.to(),
            )
        })?;
        Ok(resp)
    }

    /// Fetch the official open and close for a stock on one date.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the date has no session data for the ticker.
    pub async fn stock_daily_open_close(
        &self,
        ticker: Ticker,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<DailyOpenCloseResponse, PolygonError> {
        let path = format!("/v1/open-close/{ticker}/{date}");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        Self::decode(body, &path)
    }

    /// Fetch daily bars for the entire US stock market on one date.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure. An empty
    /// result set is returned as-is: the whole market being closed on
    /// the requested date is an answer, not an error.
    pub async fn stock_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError> {
        let path = format!("/v2/aggs/grouped/locale/us/market/stocks/{date}");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        Self::decode(body, &path)
    }

    /// Fetch the previous trading day's bar for a stock.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the ticker has no previous session.
    pub async fn stock_previous_close(
        &self,
        ticker: Ticker,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        let path = format!("/v2/aggs/ticker/{ticker}/prev");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        let resp: AggregatesResponse = Self::decode(body, &path)?;
        ensure_results(resp.results_count, || {
            format!("data not found for {ticker} (previous close)")
        })?;
        Ok(resp)
    }
}
