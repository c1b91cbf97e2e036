//! In-memory paper trading runtime.
//!
//! Fills every leg of every submitted strategy immediately and books it into
//! a single position group. Legs netting to zero are dropped, so a closed
//! round trip leaves no group at all.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::ports::{OrderAck, RuntimeError, TradingRuntimePort};
use crate::domain::option_chain::OptionRight;
use crate::domain::position_verification::{AccountingModelTag, PositionGroup, PositionLeg};
use crate::domain::strategy_selection::StrategyOrder;

type LegKey = (OptionRight, Decimal, NaiveDate);

#[derive(Debug, Default)]
struct Book {
    positions: BTreeMap<LegKey, i64>,
    filled_orders: usize,
}

/// Paper implementation of `TradingRuntimePort`.
///
/// Suitable for testing and local runs. Not connected to any venue.
#[derive(Debug)]
pub struct PaperTradingRuntime {
    accounting_model: AccountingModelTag,
    book: RwLock<Book>,
}

impl Default for PaperTradingRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl PaperTradingRuntime {
    /// Create a runtime that groups legs as a combined option strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_accounting_model(AccountingModelTag::option_strategy())
    }

    /// Create a runtime that tags its position group with `accounting_model`.
    #[must_use]
    pub fn with_accounting_model(accounting_model: AccountingModelTag) -> Self {
        Self {
            accounting_model,
            book: RwLock::new(Book::default()),
        }
    }

    /// Get the accounting model applied to position groups.
    #[must_use]
    pub const fn accounting_model(&self) -> &AccountingModelTag {
        &self.accounting_model
    }

    fn poisoned() -> RuntimeError {
        RuntimeError::Unavailable {
            message: "paper book lock poisoned".to_string(),
        }
    }
}

#[async_trait]
impl TradingRuntimePort for PaperTradingRuntime {
    async fn submit_strategy(
        &self,
        order: &StrategyOrder,
        quantity: u32,
    ) -> Result<OrderAck, RuntimeError> {
        let legs = order
            .legs(quantity)
            .map_err(|e| RuntimeError::OrderRejected {
                reason: e.to_string(),
            })?;

        let mut book = self.book.write().map_err(|_| Self::poisoned())?;
        for leg in &legs {
            let key = (leg.right, leg.strike, leg.expiration);
            let held = book.positions.entry(key).or_insert(0);
            *held += leg.signed_quantity;
            if *held == 0 {
                book.positions.remove(&key);
            }
        }
        book.filled_orders += legs.len();

        let ack = OrderAck {
            order_id: Uuid::new_v4().to_string(),
            strategy: order.name(),
            quantity,
            filled_legs: legs.len(),
        };
        tracing::debug!(
            order_id = %ack.order_id,
            open_legs = book.positions.len(),
            filled_orders = book.filled_orders,
            "Paper fill"
        );
        Ok(ack)
    }

    async fn position_groups(&self) -> Result<Vec<PositionGroup>, RuntimeError> {
        let book = self.book.read().map_err(|_| Self::poisoned())?;
        if book.positions.is_empty() {
            return Ok(Vec::new());
        }

        let legs = book
            .positions
            .iter()
            .map(|(&(right, strike, expiration), &quantity)| {
                PositionLeg::new(right, strike, expiration, quantity)
            })
            .collect();
        Ok(vec![PositionGroup::new(legs, self.accounting_model.clone())])
    }

    async fn filled_order_count(&self) -> Result<usize, RuntimeError> {
        let book = self.book.read().map_err(|_| Self::poisoned())?;
        Ok(book.filled_orders)
    }
}
