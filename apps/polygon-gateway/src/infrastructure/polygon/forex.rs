//! Forex Endpoints
//!
//! The three free-tier forex endpoints, addressed with `C:`-prefixed
//! pair tickers. Forex has no daily open/close endpoint; the market
//! trades around the clock.
//!
//! # References
//!
//! - [Forex API](https://polygon.io/docs/forex/getting-started)

use crate::domain::{AggregateWindow, CurrencyPair, MarketDate, SortOrder};

use super::client::{aggregates_query, ensure_results, PolygonClient};
use super::error::PolygonError;
use super::models::{AggregatesResponse, GroupedDailyResponse};

impl PolygonClient {
    /// Fetch aggregate bars for a currency pair over a date range.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the window matched no bars.
    pub async fn forex_aggregates(
        &self,
        pair: CurrencyPair,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        let pair_ticker = pair.forex_ticker();
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

    /// Fetch daily bars for the entire forex market on one date.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure.
    pub async fn forex_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError> {
        let path = format!("/v2/aggs/grouped/locale/global/market/fx/{date}");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        Self::decode(body, &path)
    }

    /// Fetch the previous trading day's bar for a currency pair.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the pair has no previous session.
    pub async fn forex_previous_close(
        &self,
        pair: CurrencyPair,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        let pair_ticker = pair.forex_ticker();
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
