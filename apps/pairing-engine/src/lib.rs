// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Pairing Engine - Rust Core Library
//!
//! Deterministic pairing of option contracts into two-leg strategies, plus
//! verification of the positions a trading runtime reports for them.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `option_chain`: Contracts and chain snapshots
//!   - `strategy_selection`: Straddle/strangle selection, strategy orders
//!   - `position_verification`: Position group checks, end-of-run invariants
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `TradingRuntimePort`
//!   - `use_cases`: `RoundTripScenario`
//!
//! - **Infrastructure**: Adapters
//!   - `paper`: In-memory paper trading runtime

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Metrics recording.
pub mod observability;

/// Tracing subscriber setup.
pub mod telemetry;

// Domain re-exports
pub use domain::option_chain::{
    ChainError, ChainFilter, ChainSnapshot, OptionContract, OptionRight,
};
pub use domain::position_verification::{
    AccountingModelTag, EndOfRunCheck, ExpectedShape, PositionGroup, PositionLeg,
    PositionVerifier, RunInvariantReport, RunInvariantViolation, VerificationFailure,
    VerificationReport,
};
pub use domain::shared::Symbol;
pub use domain::strategy_selection::{
    ContractPair, ContractSelector, PositionSide, StranglePreference, StrategyError,
    StrategyOrder, StrategyShape,
};

// Application re-exports
pub use application::ports::{OrderAck, RuntimeError, TradingRuntimePort};
pub use application::use_cases::{
    CycleOutcome, RoundTripScenario, ScenarioError, ScenarioSettings, ScenarioState,
};

// Infrastructure re-exports
pub use infrastructure::PaperTradingRuntime;
