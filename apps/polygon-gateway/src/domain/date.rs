//! Market Date Type
//!
//! Polygon's date-valued path and query parameters accept `YYYY-MM-DD`
//! only. `MarketDate` parses exactly that form and nothing else, so a
//! malformed date is rejected before any request is built. The type is
//! exposed to GraphQL as a `Date` scalar.

use std::fmt;
use std::str::FromStr;

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{Datelike, NaiveDate};

use super::error::InvalidParameter;

/// Date format accepted by every Polygon date parameter.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date in strict `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarketDate(NaiveDate);

impl MarketDate {
    /// Wrap an already-validated calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Get the four-digit year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl FromStr for MarketDate {
    type Err = InvalidParameter;

    /// Parse a strict `YYYY-MM-DD` date.
    ///
    /// chrono accepts unpadded months and days for `%m`/`%d`, so the
    /// parsed date is rendered back and compared against the input to
    /// reject forms like `2023-1-2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| InvalidParameter::DateFormat(s.to_string()))?;

        if date.format(DATE_FORMAT).to_string() != s {
            return Err(InvalidParameter::DateFormat(s.to_string()));
        }

        Ok(Self(date))
    }
}

impl fmt::Display for MarketDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// A calendar date in `YYYY-MM-DD` form.
#[Scalar(name = "Date")]
impl ScalarType for MarketDate {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => s.parse().map_err(InputValueError::custom),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_iso_date() {
        let date: MarketDate = "2023-06-16".parse().unwrap();
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2023, 6, 16).unwrap());
        assert_eq!(date.to_string(), "2023-06-16");
    }

    #[test]
    fn rejects_unpadded_components() {
        assert!("2023-6-16".parse::<MarketDate>().is_err());
        assert!("2023-06-1".parse::<MarketDate>().is_err());
    }

    #[test]
    fn rejects_other_formats() {
        for input in ["06/16/2023", "2023/06/16", "20230616", "June 16 2023", ""] {
            let err = input.parse::<MarketDate>().unwrap_err();
            assert_eq!(err, InvalidParameter::DateFormat(input.to_string()));
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!("2023-02-30".parse::<MarketDate>().is_err());
        assert!("2023-13-01".parse::<MarketDate>().is_err());
    }

    #[test]
    fn scalar_round_trip() {
        let date: MarketDate = "2024-01-31".parse().unwrap();
        assert_eq!(
            ScalarType::to_value(&date),
            Value::String("2024-01-31".to_string())
        );
    }

    #[test]
    fn scalar_rejects_non_string() {
        let result = <MarketDate as ScalarType>::parse(Value::Number(20230616.into()));
        assert!(result.is_err());
    }
}
