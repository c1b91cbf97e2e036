//! Round Trip Scenario Use Case
//!
//! Drives one open → verify → close cycle of a two-leg strategy against a
//! trading runtime, one snapshot at a time:
//!
//! 1. `Idle`: narrow the chain with the configured filter and select a pair;
//!    when found, open the long strategy.
//! 2. `Open`: once the runtime reports a position group, verify it and
//!    submit the inverse strategy to close it. A failed verification halts
//!    the scenario.
//! 3. `Done` / `Halted`: further snapshots are ignored.
//!
//! [`RoundTripScenario::finish`] runs the end-of-run invariant check.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::application::ports::{OrderAck, RuntimeError, TradingRuntimePort};
use crate::domain::option_chain::{ChainFilter, ChainSnapshot};
use crate::domain::position_verification::{
    EndOfRunCheck, ExpectedShape, PositionVerifier, RunInvariantReport, VerificationReport,
};
use crate::domain::strategy_selection::{
    ContractSelector, StrategyError, StrategyOrder, StrategyShape,
};
use crate::observability;

/// Sizing and shape of the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioSettings {
    /// Strategy to trade.
    pub shape: StrategyShape,
    /// Base strategy quantity.
    pub base_quantity: u32,
    /// Multiplier applied to the base quantity for both orders.
    pub quantity_multiplier: u32,
    /// Strike and expiry window applied before selection.
    pub chain_filter: ChainFilter,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            shape: StrategyShape::Straddle,
            base_quantity: 1,
            quantity_multiplier: 2,
            chain_filter: ChainFilter::default(),
        }
    }
}

impl ScenarioSettings {
    /// Strategy quantity submitted for opening and closing.
    #[must_use]
    pub const fn order_quantity(&self) -> u32 {
        self.base_quantity.saturating_mul(self.quantity_multiplier)
    }
}

/// Where the scenario stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioState {
    /// No position requested yet.
    Idle,
    /// Strategy opened, waiting to verify and close it.
    Open(StrategyOrder),
    /// Position verified and closing order submitted.
    Done,
    /// Verification failed; nothing else will be submitted.
    Halted,
}

/// Result of one snapshot cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No qualifying pair in this snapshot; retry on the next one.
    AwaitingPair,
    /// Opening order submitted.
    Opened {
        /// The opened strategy.
        order: StrategyOrder,
        /// Runtime acknowledgment.
        ack: OrderAck,
    },
    /// Opening order submitted but no position group reported yet.
    AwaitingFill,
    /// Position verified and closing order submitted.
    Closed {
        /// The closing (inverse) strategy.
        order: StrategyOrder,
        /// Runtime acknowledgment.
        ack: OrderAck,
    },
    /// Scenario already completed or halted.
    Finished,
}

/// Scenario failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Runtime call failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Strategy order could not be built.
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    /// Opened position did not match the expected shape.
    #[error(transparent)]
    Verification(#[from] VerificationReport),

    /// End-of-run invariants were violated.
    #[error(transparent)]
    Invariant(#[from] RunInvariantReport),
}

/// Use case driving a two-leg strategy round trip.
pub struct RoundTripScenario<R>
where
    R: TradingRuntimePort,
{
    runtime: Arc<R>,
    selector: ContractSelector,
    verifier: PositionVerifier,
    end_of_run: EndOfRunCheck,
    settings: ScenarioSettings,
    state: ScenarioState,
}

impl<R> RoundTripScenario<R>
where
    R: TradingRuntimePort,
{
    /// Create a new scenario in the `Idle` state.
    pub const fn new(
        runtime: Arc<R>,
        selector: ContractSelector,
        verifier: PositionVerifier,
        end_of_run: EndOfRunCheck,
        settings: ScenarioSettings,
    ) -> Self {
        Self {
            runtime,
            selector,
            verifier,
            end_of_run,
            settings,
            state: ScenarioState::Idle,
        }
    }

    /// Get the current state.
    pub const fn state(&self) -> &ScenarioState {
        &self.state
    }

    /// Get the settings.
    pub const fn settings(&self) -> &ScenarioSettings {
        &self.settings
    }

    /// Handle one chain snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::Verification` when the opened position does
    /// not match (the scenario is then halted), or runtime/strategy errors.
    pub async fn on_snapshot(
        &mut self,
        snapshot: &ChainSnapshot,
    ) -> Result<CycleOutcome, ScenarioError> {
        match &self.state {
            ScenarioState::Idle => self.open(snapshot).await,
            ScenarioState::Open(order) => {
                let order = order.clone();
                self.verify_and_close(&order).await
            }
            ScenarioState::Done | ScenarioState::Halted => Ok(CycleOutcome::Finished),
        }
    }

    /// Run the end-of-run invariant check against the runtime.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::Invariant` listing every violation, or a
    /// runtime error if the final state could not be read.
    pub async fn finish(&self) -> Result<(), ScenarioError> {
        let groups = self.runtime.position_groups().await?;
        let filled_orders = self.runtime.filled_order_count().await?;

        self.end_of_run
            .check(&groups, filled_orders)
            .inspect_err(|report| {
                observability::record_run_invariant_violations(report);
                tracing::error!(error = %report, "End-of-run check failed");
            })?;

        tracing::info!(filled_orders, "End-of-run check passed");
        Ok(())
    }

    async fn open(&mut self, snapshot: &ChainSnapshot) -> Result<CycleOutcome, ScenarioError> {
        let shape = self.settings.shape;
        let candidates = self.settings.chain_filter.apply(snapshot);
        let Some(pair) = self.selector.select(shape, &candidates) else {
            observability::record_selection(shape, false);
            return Ok(CycleOutcome::AwaitingPair);
        };
        observability::record_selection(shape, true);

        let order = StrategyOrder::open(shape, snapshot.underlying().clone(), &pair)?;
        let ack = self.submit(&order).await?;

        self.state = ScenarioState::Open(order.clone());
        Ok(CycleOutcome::Opened { order, ack })
    }

    async fn verify_and_close(
        &mut self,
        order: &StrategyOrder,
    ) -> Result<CycleOutcome, ScenarioError> {
        let groups = self.runtime.position_groups().await?;
        let Some(group) = groups.first() else {
            tracing::debug!(strategy = %order.name(), "No position group yet");
            return Ok(CycleOutcome::AwaitingFill);
        };
        if groups.len() > 1 {
            tracing::warn!(groups = groups.len(), "Several position groups open, verifying the first");
        }

        let held = i64::from(self.settings.order_quantity()) * order.side().sign();
        if let Err(report) = self.verifier.verify(group, ExpectedShape::new(held, held)) {
            observability::record_verification_failures(&report);
            tracing::error!(strategy = %order.name(), error = %report, "Halting scenario");
            self.state = ScenarioState::Halted;
            return Err(report.into());
        }

        let closing = order.inverse();
        let ack = self.submit(&closing).await?;

        self.state = ScenarioState::Done;
        Ok(CycleOutcome::Closed {
            order: closing,
            ack,
        })
    }

    async fn submit(&self, order: &StrategyOrder) -> Result<OrderAck, ScenarioError> {
        let quantity = self.settings.order_quantity();
        // Reject a zero quantity before it reaches the runtime.
        order.legs(quantity)?;

        let ack = self.runtime.submit_strategy(order, quantity).await?;
        observability::record_order_submission(order);
        tracing::info!(
            order_id = %ack.order_id,
            strategy = %order.name(),
            underlying = %order.underlying(),
            call_strike = %order.call_strike(),
            put_strike = %order.put_strike(),
            expiration = %order.expiration(),
            quantity,
            "Submitted strategy order"
        );
        Ok(ack)
    }
}
