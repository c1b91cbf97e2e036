//! Scenario configuration.

use serde::{Deserialize, Serialize};

use crate::application::use_cases::ScenarioSettings;
use crate::domain::option_chain::ChainFilter;
use crate::domain::position_verification::ROUND_TRIP_FILLED_ORDERS;
use crate::domain::strategy_selection::{StranglePreference, StrategyShape};

/// Round trip scenario configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Strategy to trade.
    #[serde(default)]
    pub shape: StrategyShape,
    /// Strike rule for strangles.
    #[serde(default)]
    pub strangle_preference: StranglePreference,
    /// Base strategy quantity.
    #[serde(default = "default_base_quantity")]
    pub base_quantity: u32,
    /// Multiplier applied to the base quantity.
    #[serde(default = "default_quantity_multiplier")]
    pub quantity_multiplier: u32,
    /// Leg fills expected by the end-of-run check.
    #[serde(default = "default_expected_filled_orders")]
    pub expected_filled_orders: usize,
    /// Strike and expiry window applied to each snapshot.
    #[serde(default)]
    pub chain_filter: ChainFilter,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            shape: StrategyShape::default(),
            strangle_preference: StranglePreference::default(),
            base_quantity: default_base_quantity(),
            quantity_multiplier: default_quantity_multiplier(),
            expected_filled_orders: default_expected_filled_orders(),
            chain_filter: ChainFilter::default(),
        }
    }
}

impl ScenarioConfig {
    /// Settings for the round trip use case.
    #[must_use]
    pub const fn settings(&self) -> ScenarioSettings {
        ScenarioSettings {
            shape: self.shape,
            base_quantity: self.base_quantity,
            quantity_multiplier: self.quantity_multiplier,
            chain_filter: self.chain_filter,
        }
    }
}

const fn default_base_quantity() -> u32 {
    1
}

const fn default_quantity_multiplier() -> u32 {
    2
}

const fn default_expected_filled_orders() -> usize {
    ROUND_TRIP_FILLED_ORDERS
}
