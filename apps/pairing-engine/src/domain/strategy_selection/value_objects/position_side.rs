//! Position Side Value Object

use serde::{Deserialize, Serialize};

/// Strategy direction (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl PositionSide {
    /// Get the sign multiplier for this side.
    #[must_use]
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Long => 1,
            Self::Short => -1,
        }
    }

    /// The opposite side.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        match self {
            Self::Long => Self::Short,
            Self::Short => Self::Long,
        }
    }
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}
