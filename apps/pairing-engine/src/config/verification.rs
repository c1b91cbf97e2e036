//! Verification configuration.

use serde::{Deserialize, Serialize};

use crate::domain::position_verification::AccountingModelTag;

/// Position verification configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VerificationConfig {
    /// Accounting model the opened group must carry.
    #[serde(default)]
    pub accounting_model: AccountingModelTag,
}
