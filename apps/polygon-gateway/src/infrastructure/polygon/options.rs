//! Options Endpoints
//!
//! The three free-tier option endpoints. Polygon has no separate option
//! URL family for these; contracts are addressed through the stock
//! endpoints with an `O:`-prefixed OCC ticker built by
//! [`OptionContract::occ_ticker`].
//!
//! # References
//!
//! - [Options API](https://polygon.io/docs/options/getting-started)

use crate::domain::{AggregateWindow, MarketDate, OptionContract, SortOrder};

use super::client::{aggregates_query, ensure_results, PolygonClient};
use super::error::PolygonError;
use super::models::{AggregatesResponse, DailyOpenCloseResponse};

impl PolygonClient {
    /// Fetch aggregate bars for an option contract over a date range.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the window matched no bars.
    pub async fn option_aggregates(
        &self,
        contract: OptionContract,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        let occ = contract.occ_ticker();
        let path = format!(
            "/v2/aggs/ticker/{occ}/range/{}/{}/{}/{}",
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
                "data not found for {occ} from {} to {}",
                window.from(),
                window.to(),
            )
        })?;
        Ok(resp)
    }

    /// Fetch the official open and close for an option contract on one date.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the contract did not trade on the date.
    pub async fn option_daily_open_close(
        &self,
        contract: OptionContract,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<DailyOpenCloseResponse, PolygonError> {
        let path = format!("/v1/open-close/{}/{date}", contract.occ_ticker());
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        Self::decode(body, &path)
    }

    /// Fetch the previous trading day's bar for an option contract.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError` on transport or upstream failure, or
    /// `NotFound` when the contract has no previous session.
    pub async fn option_previous_close(
        &self,
        contract: OptionContract,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        let occ = contract.occ_ticker();
        let path = format!("/v2/aggs/ticker/{occ}/prev");
        let body = self
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await?;
        let resp: AggregatesResponse = Self::decode(body, &path)?;
        ensure_results(resp.results_count, || {
            format!("data not found for {occ} (previous close)")
        })?;
        Ok(resp)
    }
}
