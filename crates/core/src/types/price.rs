//! Exact price arithmetic and price brackets.
//!
//! Prices are stored as [`Decimal`] so that cart totals are exact to the cent
//! (`24.90 × 15 == 373.50`, never `373.49999`). The storefront sells in euros
//! only; the currency is a display concern handled by [`Price`]'s `Display`.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative unit price in euros.
///
/// Deserializing a negative amount fails; [`Price::new`] clamps instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

/// Error returned when converting a negative amount into a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("price cannot be negative: {0}")]
pub struct NegativePriceError(pub Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from an amount, clamping negative amounts to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Create a price from a number of cents.
    ///
    /// ```
    /// use payetonkawa_core::Price;
    ///
    /// assert_eq!(Price::from_cents(2490).to_string(), "24.90€");
    /// ```
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = NegativePriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(NegativePriceError(amount));
        }
        Ok(Self(amount))
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}€", self.0)
    }
}

/// Errors that can occur when parsing a [`PriceBracket`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceBracketError {
    /// The input has no `-` separator.
    #[error("price bracket must look like `min-max` or `min-`")]
    MissingSeparator,
    /// A bound is not a valid decimal number.
    #[error("invalid price bound: {0}")]
    InvalidBound(String),
    /// The maximum is below the minimum.
    #[error("price bracket maximum is below its minimum")]
    Inverted,
}

/// A price interval used to filter the catalog.
///
/// Both bounds are inclusive; a bracket without a maximum is open-ended.
/// The textual form is `"<min>-<max>"` or `"<min>-"`:
///
/// ```
/// use payetonkawa_core::{Price, PriceBracket};
///
/// let bracket: PriceBracket = "25-30".parse().unwrap();
/// assert!(!bracket.contains(Price::from_cents(2490)));
/// assert!(bracket.contains(Price::from_cents(2650)));
///
/// let open: PriceBracket = "30-".parse().unwrap();
/// assert!(open.contains(Price::from_cents(9900)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBracket {
    min: Decimal,
    max: Option<Decimal>,
}

impl PriceBracket {
    /// Brackets offered by the catalog filter, as `(query value, label)`.
    pub const PRESETS: [(&'static str, &'static str); 3] = [
        ("0-25", "Moins de 25€"),
        ("25-30", "25€ - 30€"),
        ("30-", "Plus de 30€"),
    ];

    /// Create a bracket.
    ///
    /// # Errors
    ///
    /// Returns [`PriceBracketError::Inverted`] if `max < min`.
    pub fn new(min: Decimal, max: Option<Decimal>) -> Result<Self, PriceBracketError> {
        if max.is_some_and(|max| max < min) {
            return Err(PriceBracketError::Inverted);
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Inclusive upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<Decimal> {
        self.max
    }

    /// Whether `price` falls inside the bracket.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        let amount = price.amount();
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

impl FromStr for PriceBracket {
    type Err = PriceBracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .trim()
            .split_once('-')
            .ok_or(PriceBracketError::MissingSeparator)?;

        let parse_bound = |raw: &str| {
            Decimal::from_str(raw.trim())
                .map_err(|_| PriceBracketError::InvalidBound(raw.trim().to_owned()))
        };

        let min = if min.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_bound(min)?
        };
        let max = if max.trim().is_empty() {
            None
        } else {
            Some(parse_bound(max)?)
        };

        Self::new(min, max)
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}-", self.min),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times_is_exact() {
        assert_eq!(
            Price::from_cents(2490).times(15).amount(),
            Decimal::new(37350, 2)
        );
    }

    #[test]
    fn test_display_has_two_decimals() {
        assert_eq!(Price::new(Decimal::new(265, 1)).to_string(), "26.50€");
        assert_eq!(Price::ZERO.to_string(), "0.00€");
    }

    #[test]
    fn test_negative_amount_clamps_to_zero() {
        assert_eq!(Price::new(Decimal::new(-5, 0)), Price::ZERO);
    }

    #[test]
    fn test_deserialize_rejects_negative_amount() {
        let price: Price = serde_json::from_str("\"26.50\"").unwrap();
        assert_eq!(price, Price::from_cents(2650));
        assert_eq!(serde_json::from_str::<Price>("0").unwrap(), Price::ZERO);
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert!(serde_json::from_str::<Price>("\"-0.01\"").is_err());
    }

    #[test]
    fn test_bracket_bounds_are_inclusive() {
        let bracket: PriceBracket = "0-25".parse().unwrap();
        assert!(bracket.contains(Price::from_cents(0)));
        assert!(bracket.contains(Price::from_cents(2500)));
        assert!(!bracket.contains(Price::from_cents(2501)));
    }

    #[test]
    fn test_bracket_open_ended() {
        let bracket: PriceBracket = "30-".parse().unwrap();
        assert_eq!(bracket.max(), None);
        assert!(!bracket.contains(Price::from_cents(2890)));
        assert!(bracket.contains(Price::from_cents(3000)));
    }

    #[test]
    fn test_bracket_parse_errors() {
        assert_eq!(
            "25".parse::<PriceBracket>(),
            Err(PriceBracketError::MissingSeparator)
        );
        assert_eq!(
            "abc-30".parse::<PriceBracket>(),
            Err(PriceBracketError::InvalidBound("abc".to_owned()))
        );
        assert_eq!(
            "30-25".parse::<PriceBracket>(),
            Err(PriceBracketError::Inverted)
        );
    }

    #[test]
    fn test_presets_all_parse() {
        for (value, _) in PriceBracket::PRESETS {
            let bracket: PriceBracket = value.parse().unwrap();
            assert_eq!(bracket.to_string(), value);
        }
    }
}
