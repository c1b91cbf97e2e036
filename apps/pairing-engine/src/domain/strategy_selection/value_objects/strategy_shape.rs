//! Strategy Shape Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-leg option strategy shape.
///
/// Picks which selection policy runs against a chain snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyShape {
    /// Straddle (call + put, same strike and expiry).
    #[default]
    Straddle,
    /// Strangle (call above put, same expiry).
    Strangle,
}

impl fmt::Display for StrategyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straddle => write!(f, "Straddle"),
            Self::Strangle => write!(f, "Strangle"),
        }
    }
}

impl StrategyShape {
    /// Label used in metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Straddle => "straddle",
            Self::Strangle => "strangle",
        }
    }

    /// Check if both legs must share a strike.
    #[must_use]
    pub const fn requires_common_strike(&self) -> bool {
        matches!(self, Self::Straddle)
    }
}

/// How the strangle policy picks strikes inside an expiry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StranglePreference {
    /// Highest-strike call and lowest-strike put in the expiry.
    #[default]
    Widest,
    /// Lowest-strike call above spot and highest-strike put below spot.
    NearestOutOfTheMoney,
}

impl fmt::Display for StranglePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Widest => write!(f, "widest"),
            Self::NearestOutOfTheMoney => write!(f, "nearest_out_of_the_money"),
        }
    }
}
