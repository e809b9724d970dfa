//! Enumerations shared by products and orders.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coffee-bean roast classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

/// Error returned when a roast level string is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid roast level: {0}")]
pub struct RoastLevelError(pub String);

impl RoastLevel {
    /// All roast levels, lightest first.
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Dark];

    /// Lowercase identifier used in query strings and catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Torréfaction claire",
            Self::Medium => "Torréfaction moyenne",
            Self::Dark => "Torréfaction foncée",
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoastLevel {
    type Err = RoastLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "dark" => Ok(Self::Dark),
            _ => Err(RoastLevelError(s.to_owned())),
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Confirmed => "Confirmée",
            Self::Shipped => "Expédiée",
            Self::Delivered => "Livrée",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roast_level_round_trips_through_str() {
        for level in RoastLevel::ALL {
            assert_eq!(level.as_str().parse::<RoastLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_roast_level_is_case_sensitive() {
        assert_eq!(
            "Dark".parse::<RoastLevel>(),
            Err(RoastLevelError("Dark".to_owned()))
        );
    }

    #[test]
    fn test_roast_level_serde_lowercase() {
        assert_eq!(serde_json::to_string(&RoastLevel::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(OrderStatus::Shipped.to_string(), "shipped");
    }
}
