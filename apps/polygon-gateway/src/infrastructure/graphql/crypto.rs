//! Crypto Resolvers
//!
//! Pairs are specified as `currencyTo`/`currencyFrom`: BTC priced in USD
//! is `currencyTo: "BTC", currencyFrom: "USD"`.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::domain::{AggregateWindow, CurrencyPair, MarketDate, SortOrder, Timespan};

use super::market_data;
use super::types::{AggregateSeries, CryptoDailyOpenClose, GroupedDailySeries};

/// Crypto market queries.
#[derive(Debug, Default)]
pub struct CryptoQuery;

#[Object]
impl CryptoQuery {
    /// Aggregate bars for a crypto pair over a date range.
    #[allow(clippy::too_many_arguments)]
    async fn aggregates(
        &self,
        ctx: &Context<'_>,
        currency_to: String,
        currency_from: String,
        multiplier: u32,
        timespan: Timespan,
        from: MarketDate,
        to: MarketDate,
        #[graphql(default = true)] adjusted: bool,
        #[graphql(default_with = "SortOrder::Ascending")] sort: SortOrder,
        #[graphql(default = 5000)] limit: u32,
    ) -> Result<Option<AggregateSeries>> {
        let pair = CurrencyPair::new(currency_to, currency_from).map_err(|e| e.extend())?;
        let window = AggregateWindow::new(multiplier, timespan, from, to, limit)
            .map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .crypto_aggregates(pair, window, adjusted, sort)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Open and close trades for a crypto pair on a single date.
    async fn daily_open_close(
        &self,
        ctx: &Context<'_>,
        currency_to: String,
        currency_from: String,
        date: MarketDate,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<CryptoDailyOpenClose>> {
        let pair = CurrencyPair::new(currency_to, currency_from).map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .crypto_daily_open_close(pair, date, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Daily bars for the entire crypto market on a single date.
    async fn grouped_daily(
        &self,
        ctx: &Context<'_>,
        date: MarketDate,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<GroupedDailySeries>> {
        let api = market_data(ctx)?;
        let resp = api
            .crypto_grouped_daily(date, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }

    /// Previous trading day's bar for a crypto pair.
    async fn previous_close(
        &self,
        ctx: &Context<'_>,
        currency_to: String,
        currency_from: String,
        #[graphql(default = true)] adjusted: bool,
    ) -> Result<Option<AggregateSeries>> {
        let pair = CurrencyPair::new(currency_to, currency_from).map_err(|e| e.extend())?;
        let api = market_data(ctx)?;
        let resp = api
            .crypto_previous_close(pair, adjusted)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(resp.into()))
    }
}
