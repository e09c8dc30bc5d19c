//! Stocks Resolvers

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::domain::{AggregateWindow, MarketDate, SortOrder, Ticker, Timespan};

use super::market_data;
use super::types::{AggregateSeries, DailyOpenClose, GroupedDailySeries};

/// Stock market queries.
#[derive(Debug, Default)]
pub struct StocksQuery;

#[Object]
impl StocksQuery {
    /// Aggregate bars for a stock over a date range.
    async fn aggregates(
        &self,
        ctx: &Context<'_>,
        ticker: String,
        multiplier: u32,
        timespan: Timespan,
        from: MarketDate,
        to: MarketDate,
        #[graphql(default = true)] adjusted: bool,
        #[graphql(default_with = "SortOrder::Ascending")] sort: SortOrder,
        #[graphql(default = 5000)] limit: u32,
    ) -> Result<Option<AggregateSeries>> {
        let ticker = Ticker::new(ticker).map_err(|e| e.extend())?;
        let window = AggregateWindow::new(multiplier, timespan, from, to, limit)
            .map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .stock_aggregates(ticker, window, adjusted, sort)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Official open and close for a stock on a single date.
    async fn daily_open_close(
        &self,
        ctx: &Context<'_>,
        ticker: String,
        date: MarketDate,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<DailyOpenClose>> {
        let ticker = Ticker::new(ticker).map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .stock_daily_open_close(ticker, date, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Daily bars for the entire US stock market on a single date.
    async fn grouped_daily(
        &self,
        ctx: &Context<'_>,
        date: MarketDate,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<GroupedDailySeries>> {
        let api = market_data(ctx)?;
        let resp = api
            .stock_grouped_daily(date, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Previous trading day's bar for a stock.
    async fn previous_close(
        &self,
        ctx: &Context<'_>,
        ticker: String,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<AggregateSeries>> {
        let ticker = Ticker::new(ticker).map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .stock_previous_close(ticker, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }
}
