//! Crypto Endpoints
//!
//! The four free-tier crypto endpoints. Aggregates, grouped daily, and
//! previous close use `X:`-prefixed pair tickers; daily open/close has
//! its own URL family with the pair legs as separate path segments.
//!
//! # References
//!
//! - [Crypto API](https://polygon.io/docs/crypto/getting-started)

use crate::domain::{AggregateWindow, CurrencyPair, MarketDate, SortOrder};

use super::client::{aggregates_query, ensure_results, PolygonClient};
use super::error::PolygonError;
use super::models::{AggregatesResponse, CryptoOpenCloseResponse, GroupedDailyResponse};

impl PolygonClient {
    /// Fetch aggregate bars for a crypto pair over a date range.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the window matched no bars.
    pub async fn crypto_aggregates(
        &self,
        pair: CurrencyPair,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        let pair_ticker = pair.crypto_ticker();
        let path = format!(
            "/v2/aggs/ticker/{pair_ticker}/range/{}/{}/{}/{}",
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
                "data not found for {pair_ticker} from {} to {}",
                window.from(),
                window.to(),
            )
        })?;
        Ok(resp)
    }

    /// Fetch open and close trades for a crypto pair on one date.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the pair has no data for the date.
    pub async fn crypto_daily_open_close(
        &self,
        pair: CurrencyPair,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<CryptoOpenCloseResponse, PolygonError> {
        let path = format!("/v1/open-close/crypto/{}/{}/{date}", pair.to(), pair.from());
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        Self::decode(body, &path)
    }

    /// Fetch daily bars for the entire crypto market on one date.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure.
    pub async fn crypto_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError> {
        let path = format!("/v2/aggs/grouped/locale/global/market/crypto/{date}");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        Self::decode(body, &path)
    }

    /// Fetch the previous trading day's bar for a crypto pair.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the pair has no previous session.
    pub async fn crypto_previous_close(
        &self,
        pair: CurrencyPair,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        let pair_ticker = pair.crypto_ticker();
        let path = format!("/v2/aggs/ticker/{pair_ticker}/prev");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        let resp: AggregatesResponse = Self::decode(body, &path)?;
        ensure_results(resp.results_count, || {
            format!("data not found for {pair_ticker} (previous close)")
        })?;
        Ok(resp)
    }
}
