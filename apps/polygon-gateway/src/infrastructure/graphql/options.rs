//! Options Resolvers
//!
//! Contracts are specified by their parts (underlying, expiration, side,
//! strike); the OCC ticker Polygon expects is assembled server-side so
//! clients never hand-build symbols like `O:AAPL230616C00150000`.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::domain::{
    AggregateWindow, MarketDate, OptionContract, OptionKind, SortOrder, Ticker, Timespan,
};

use super::market_data;
use super::types::{AggregateSeries, DailyOpenClose};

/// Options market queries.
#[derive(Debug, Default)]
pub struct OptionsQuery;

fn contract(
    underlying: String,
    expiration: MarketDate,
    option_type: OptionKind,
    strike: f64,
) -> Result<OptionContract> {
    let underlying = Ticker::new(underlying).map_err(|e| e.extend())?;
    OptionContract::new(underlying, expiration, option_type, strike).map_err(|e| e.extend())
}

#[Object]
impl OptionsQuery {
    /// Aggregate bars for an option contract over a date range.
    #[allow(clippy::too_many_arguments)]
    async fn aggregates(
        &self,
        ctx: &Context<'_>,
        underlying: String,
        expiration: MarketDate,
        option_type: OptionKind,
        strike: f64,
        multiplier: u32,
        timespan: Timespan,
        from: MarketDate,
        to: MarketDate,
        #[graphql(default = true)] adjusted: bool,
        #[graphql(default_with = "SortOrder::Ascending")] sort: SortOrder,
        #[graphql(default = 5000)] limit: u32,
    ) -> Result<Option<AggregateSeries>> {
        let contract = contract(underlying, expiration, option_type, strike)?;
        let window = AggregateWindow::new(multiplier, timespan, from, to, limit)
            .map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .option_aggregates(contract, window, adjusted, sort)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Official open and close for an option contract on a single date.
    async fn daily_open_close(
        &self,
        ctx: &Context<'_>,
        underlying: String,
        expiration: MarketDate,
        option_type: OptionKind,
        strike: f64,
        date: MarketDate,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<DailyOpenClose>> {
        let contract = contract(underlying, expiration, option_type, strike)?;
        let api = market_data(ctx)?;
        let resp = api
            .option_daily_open_close(contract, date, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Previous trading day's bar for an option contract.
    async fn previous_close(
        &self,
        ctx: &Context<'_>,
        underlying: String,
        expiration: MarketDate,
        option_type: OptionKind,
        strike: f64,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<AggregateSeries>> {
        let contract = contract(underlying, expiration, option_type, strike)?;
        let api = market_data(ctx)?;
        let resp = api
            .option_previous_close(contract, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }
}
