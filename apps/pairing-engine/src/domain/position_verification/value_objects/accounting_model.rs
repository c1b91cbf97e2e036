//! Accounting Model Tag Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the buying-power model a runtime applied to a position group.
///
/// Opaque to this crate apart from one well-known value: the model used when
/// the runtime recognized the legs as a combined option strategy. Any other
/// tag means the legs are margined independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountingModelTag(String);

impl AccountingModelTag {
    /// Tag of a recognized combined option strategy group.
    pub const OPTION_STRATEGY: &'static str = "OptionStrategyPositionGroupBuyingPowerModel";

    /// Tag of legs margined one security at a time.
    pub const SECURITY: &'static str = "SecurityPositionGroupBuyingPowerModel";

    /// Create a tag from any identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The combined option strategy tag.
    #[must_use]
    pub fn option_strategy() -> Self {
        Self::new(Self::OPTION_STRATEGY)
    }

    /// The per-security tag.
    #[must_use]
    pub fn security() -> Self {
        Self::new(Self::SECURITY)
    }

    /// Get the tag string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountingModelTag {
    fn default() -> Self {
        Self::option_strategy()
    }
}

impl fmt::Display for AccountingModelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
