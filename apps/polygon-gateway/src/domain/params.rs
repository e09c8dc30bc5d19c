//! Request Parameter Types
//!
//! Validated forms of every non-date parameter the gateway accepts:
//! tickers, currency pairs, option contracts, and aggregate windows.
//! Constructors enforce the same bounds Polygon documents, so malformed
//! input fails before a URL is ever built.
//!
//! # Ticker Derivation
//!
//! Polygon addresses every asset class through the stock aggregates
//! endpoints by prefixing the ticker:
//!
//! - Options: `O:` + OCC symbol, e.g. `O:AAPL230616C00150000`
//! - Forex:   `C:` + pair, e.g. `C:EURUSD`
//! - Crypto:  `X:` + pair, e.g. `X:BTCUSD`

use std::fmt;

use async_graphql::Enum;
use chrono::Datelike;

use super::date::MarketDate;
use super::error::InvalidParameter;

// =============================================================================
// Enums
// =============================================================================

/// Size of the time window for aggregate bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Timespan {
    /// One-minute bars.
    Minute,
    /// One-hour bars.
    Hour,
    /// Daily bars.
    Day,
    /// Weekly bars.
    Week,
    /// Monthly bars.
    Month,
    /// Quarterly bars.
    Quarter,
    /// Yearly bars.
    Year,
}

impl Timespan {
    /// Get the path segment Polygon expects for this timespan.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

/// Timestamp ordering of aggregate results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum SortOrder {
    /// Oldest bar first.
    Ascending,
    /// Newest bar first.
    Descending,
}

impl SortOrder {
    /// Get the query parameter value Polygon expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum OptionKind {
    /// Right to buy the underlying.
    Call,
    /// Right to sell the underlying.
    Put,
}

impl OptionKind {
    /// Get the single-letter OCC code for this side.
    #[must_use]
    pub const fn occ_code(self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }
}

// =============================================================================
// Ticker
// =============================================================================

/// A non-empty ticker symbol, safe to splice into a URL path.
///
/// Case is preserved: Polygon treats tickers as case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Validate a ticker symbol.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the symbol is empty or contains `/`.
    pub fn new(symbol: impl Into<String>) -> Result<Self, InvalidParameter> {
        let symbol = symbol.into();
        validate_symbol(&symbol, "ticker")?;
        Ok(Self(symbol))
    }

    /// Get the raw symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Currency Pair
// =============================================================================

/// A currency pair for forex and crypto requests.
///
/// Argument order follows Polygon's crypto open/close path: `to` is the
/// currency being priced, `from` is the currency it is priced in, so
/// BTC-in-USD is `to = "BTC"`, `from = "USD"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    to: String,
    from: String,
}

impl CurrencyPair {
    /// Validate a currency pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either leg is empty or contains `/`.
    pub fn new(
        currency_to: impl Into<String>,
        currency_from: impl Into<String>,
    ) -> Result<Self, InvalidParameter> {
        let to = currency_to.into();
        let from = currency_from.into();
        validate_symbol(&to, "currency_to")?;
        validate_symbol(&from, "currency_from")?;
        Ok(Self { to, from })
    }

    /// Get the currency being priced.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Get the currency it is priced in.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Get the Polygon forex ticker, e.g. `C:EURUSD`.
    #[must_use]
    pub fn forex_ticker(&self) -> String {
        format!("C:{}{}", self.to, self.from)
    }

    /// Get the Polygon crypto ticker, e.g. `X:BTCUSD`.
    #[must_use]
    pub fn crypto_ticker(&self) -> String {
        format!("X:{}{}", self.to, self.from)
    }
}

// =============================================================================
// Option Contract
// =============================================================================

/// Maximum strike price encodable in the eight-digit OCC field.
const MAX_STRIKE: f64 = 99_999.999;

/// An option contract identified by underlying, expiration, side, and strike.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    underlying: Ticker,
    expiration: MarketDate,
    kind: OptionKind,
    strike: f64,
}

impl OptionContract {
    /// Validate an option contract.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the strike is outside the encodable
    /// OCC range or the expiration year is outside 2000-2099 (the OCC
    /// symbol carries only a two-digit year).
    pub fn new(
        underlying: Ticker,
        expiration: MarketDate,
        kind: OptionKind,
        strike: f64,
    ) -> Result<Self, InvalidParameter> {
        if !(0.0..=MAX_STRIKE).contains(&strike) {
            return Err(InvalidParameter::StrikeOutOfRange);
        }
        if !(2000..=2099).contains(&expiration.year()) {
            return Err(InvalidParameter::ExpirationCentury);
        }
        Ok(Self {
            underlying,
            expiration,
            kind,
            strike,
        })
    }

    /// Get the underlying ticker.
    #[must_use]
    pub const fn underlying(&self) -> &Ticker {
        &self.underlying
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> MarketDate {
        self.expiration
    }

    /// Get the contract side.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Get the strike price in dollars.
    #[must_use]
    pub const fn strike(&self) -> f64 {
        self.strike
    }

    /// Build the prefixed OCC ticker Polygon expects.
    ///
    /// Format: `O:{underlying}{YYMMDD}{C|P}{strike}` where the strike is
    /// expressed in thousandths of a dollar, zero-padded to eight digits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn occ_ticker(&self) -> String {
        let exp = self.expiration.as_naive();
        let strike_thousandths = (self.strike * 1000.0) as u64;
        format!(
            "O:{}{:02}{:02}{:02}{}{:08}",
            self.underlying,
            exp.year() % 100,
            exp.month(),
            exp.day(),
            self.kind.occ_code(),
            strike_thousandths,
        )
    }
}

// =============================================================================
// Aggregate Window
// =============================================================================

/// Maximum number of base aggregates Polygon will query per request.
const MAX_AGGREGATE_LIMIT: u32 = 50_000;

/// A validated date range and resolution for aggregate bar requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateWindow {
    multiplier: u32,
    timespan: Timespan,
    from: MarketDate,
    to: MarketDate,
    limit: u32,
}

impl AggregateWindow {
    /// Validate an aggregate window.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the multiplier is zero, the limit is
    /// outside 1-50000, or the range ends before it starts.
    pub fn new(
        multiplier: u32,
        timespan: Timespan,
        from: MarketDate,
        to: MarketDate,
        limit: u32,
    ) -> Result<Self, InvalidParameter> {
        if multiplier < 1 {
            return Err(InvalidParameter::MultiplierTooSmall);
        }
        if !(1..=MAX_AGGREGATE_LIMIT).contains(&limit) {
            return Err(InvalidParameter::LimitOutOfRange(limit));
        }
        if to < from {
            return Err(InvalidParameter::WindowInverted);
        }
        Ok(Self {
            multiplier,
            timespan,
            from,
            to,
            limit,
        })
    }

    /// Get the timespan multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Get the bar timespan.
    #[must_use]
    pub const fn timespan(&self) -> Timespan {
        self.timespan
    }

    /// Get the start of the range.
    #[must_use]
    pub const fn from(&self) -> MarketDate {
        self.from
    }

    /// Get the end of the range.
    #[must_use]
    pub const fn to(&self) -> MarketDate {
        self.to
    }

    /// Get the maximum number of base aggregates to query.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Shared symbol checks: non-empty and no path-breaking slash.
fn validate_symbol(symbol: &str, field: &'static str) -> Result<(), InvalidParameter> {
    if symbol.is_empty() {
        return Err(InvalidParameter::Empty(field));
    }
    if symbol.contains('/') {
        return Err(InvalidParameter::ContainsSlash(field));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> MarketDate {
        s.parse().unwrap()
    }

    #[test]
    fn ticker_validation() {
        assert_eq!(Ticker::new("AAPL").unwrap().as_str(), "AAPL");
        assert_eq!(Ticker::new("").unwrap_err(), InvalidParameter::Empty("ticker"));
        assert_eq!(
            Ticker::new("BRK/A").unwrap_err(),
            InvalidParameter::ContainsSlash("ticker")
        );
    }

    #[test]
    fn currency_pair_tickers() {
        let pair = CurrencyPair::new("BTC", "USD").unwrap();
        assert_eq!(pair.crypto_ticker(), "X:BTCUSD");
        assert_eq!(pair.forex_ticker(), "C:BTCUSD");
    }

    #[test]
    fn currency_pair_validation() {
        assert_eq!(
            CurrencyPair::new("", "USD").unwrap_err(),
            InvalidParameter::Empty("currency_to")
        );
        assert_eq!(
            CurrencyPair::new("BTC", "US/D").unwrap_err(),
            InvalidParameter::ContainsSlash("currency_from")
        );
    }

    #[test]
    fn occ_ticker_formatting() {
        let contract = OptionContract::new(
            Ticker::new("AAPL").unwrap(),
            date("2023-06-16"),
            OptionKind::Call,
            150.0,
        )
        .unwrap();
        assert_eq!(contract.occ_ticker(), "O:AAPL230616C00150000");

        let put = OptionContract::new(
            Ticker::new("SPY").unwrap(),
            date("2024-12-20"),
            OptionKind::Put,
            447.5,
        )
        .unwrap();
        assert_eq!(put.occ_ticker(), "O:SPY241220P00447500");
    }

    #[test]
    fn occ_ticker_pads_small_strikes() {
        let contract = OptionContract::new(
            Ticker::new("F").unwrap(),
            date("2025-01-17"),
            OptionKind::Call,
            9.5,
        )
        .unwrap();
        assert_eq!(contract.occ_ticker(), "O:F250117C00009500");
    }

    #[test]
    fn option_contract_rejects_bad_strike() {
        let ticker = Ticker::new("AAPL").unwrap();
        let exp = date("2024-06-21");
        assert_eq!(
            OptionContract::new(ticker.clone(), exp, OptionKind::Call, -1.0).unwrap_err(),
            InvalidParameter::StrikeOutOfRange
        );
        assert_eq!(
            OptionContract::new(ticker, exp, OptionKind::Call, 100_000.0).unwrap_err(),
            InvalidParameter::StrikeOutOfRange
        );
    }

    #[test]
    fn option_contract_rejects_out_of_century_expiration() {
        let ticker = Ticker::new("AAPL").unwrap();
        assert_eq!(
            OptionContract::new(ticker, date("1999-12-17"), OptionKind::Put, 50.0).unwrap_err(),
            InvalidParameter::ExpirationCentury
        );
    }

    #[test]
    fn aggregate_window_validation() {
        let from = date("2023-01-01");
        let to = date("2023-06-30");

        let window = AggregateWindow::new(1, Timespan::Day, from, to, 5000).unwrap();
        assert_eq!(window.multiplier(), 1);
        assert_eq!(window.limit(), 5000);

        assert_eq!(
            AggregateWindow::new(0, Timespan::Day, from, to, 5000).unwrap_err(),
            InvalidParameter::MultiplierTooSmall
        );
        assert_eq!(
            AggregateWindow::new(1, Timespan::Day, from, to, 0).unwrap_err(),
            InvalidParameter::LimitOutOfRange(0)
        );
        assert_eq!(
            AggregateWindow::new(1, Timespan::Day, from, to, 50_001).unwrap_err(),
            InvalidParameter::LimitOutOfRange(50_001)
        );
        assert_eq!(
            AggregateWindow::new(1, Timespan::Day, to, from, 5000).unwrap_err(),
            InvalidParameter::WindowInverted
        );
    }

    #[test]
    fn timespan_path_segments() {
        assert_eq!(Timespan::Minute.as_str(), "minute");
        assert_eq!(Timespan::Quarter.as_str(), "quarter");
        assert_eq!(SortOrder::Ascending.as_str(), "asc");
        assert_eq!(SortOrder::Descending.as_str(), "desc");
    }
}
