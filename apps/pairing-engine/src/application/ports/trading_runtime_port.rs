//! Trading Runtime Port (Driven Port)
//!
//! Interface to the runtime that executes strategy orders and accounts for
//! the resulting positions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::position_verification::PositionGroup;
use crate::domain::strategy_selection::StrategyOrder;

/// Acknowledgment from the runtime after a strategy submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Runtime-assigned order ID.
    pub order_id: String,
    /// Strategy name, e.g. "Long Straddle".
    pub strategy: String,
    /// Strategy quantity submitted.
    pub quantity: u32,
    /// Leg orders filled for this submission.
    pub filled_legs: usize,
}

/// Runtime port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// Strategy order rejected by the runtime.
    #[error("Order rejected: {reason}")]
    OrderRejected {
        /// Rejection reason.
        reason: String,
    },

    /// Runtime state could not be read.
    #[error("Runtime unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for trading runtime interactions.
#[async_trait]
pub trait TradingRuntimePort: Send + Sync {
    /// Submit a two-leg strategy order at `quantity`.
    async fn submit_strategy(
        &self,
        order: &StrategyOrder,
        quantity: u32,
    ) -> Result<OrderAck, RuntimeError>;

    /// Current position groups.
    async fn position_groups(&self) -> Result<Vec<PositionGroup>, RuntimeError>;

    /// Orders filled since the run started, one per leg.
    async fn filled_order_count(&self) -> Result<usize, RuntimeError>;
}
