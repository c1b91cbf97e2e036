//! Application Use Cases

mod round_trip_scenario;

pub use round_trip_scenario::{
    CycleOutcome, RoundTripScenario, ScenarioError, ScenarioSettings, ScenarioState,
};
