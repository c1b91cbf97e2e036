//! Pairing Engine Binary
//!
//! Runs one straddle or strangle round trip against the paper runtime.
//!
//! # Environment Variables
//!
//! - `PAIRING_CONFIG`: Path to the YAML config file (defaults apply when unset)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pairing_engine::config::{Config, load_config};
use pairing_engine::telemetry::init_tracing;
use pairing_engine::{
    ChainSnapshot, ContractSelector, CycleOutcome, EndOfRunCheck, OptionContract,
    PaperTradingRuntime, PositionVerifier, RoundTripScenario, Symbol, TradingRuntimePort,
};

/// Snapshots fed before giving up on the round trip.
const MAX_CYCLES: usize = 8;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("PAIRING_CONFIG") {
        Ok(path) => load_config(Some(&path)).with_context(|| format!("loading {path}"))?,
        Err(_) => Config::default(),
    };

    init_tracing(&config.observability.logging).context("initializing tracing")?;

    tracing::info!(
        shape = %config.scenario.shape,
        strangle_preference = %config.scenario.strangle_preference,
        quantity = config.scenario.settings().order_quantity(),
        "Starting pairing engine"
    );

    let runtime = Arc::new(PaperTradingRuntime::new());
    let mut scenario = RoundTripScenario::new(
        Arc::clone(&runtime),
        ContractSelector::new(config.scenario.strangle_preference),
        PositionVerifier::new(config.verification.accounting_model.clone()),
        EndOfRunCheck::new(config.scenario.expected_filled_orders),
        config.scenario.settings(),
    );

    let snapshot = demo_chain().context("building demo chain")?;
    for cycle in 1..=MAX_CYCLES {
        let outcome = scenario.on_snapshot(&snapshot).await?;
        tracing::debug!(cycle, ?outcome, "Cycle complete");
        if outcome == CycleOutcome::Finished {
            break;
        }
    }

    scenario.finish().await?;

    let filled_orders = runtime.filled_order_count().await?;
    let summary = serde_json::json!({
        "shape": config.scenario.shape,
        "settings": scenario.settings(),
        "filled_orders": filled_orders,
    });
    tracing::info!(summary = %summary, "Round trip complete");
    Ok(())
}

/// GOOG chain around 2015-12-24: strikes 740..=760 on two expirations.
fn demo_chain() -> anyhow::Result<ChainSnapshot> {
    let expirations = [
        NaiveDate::from_ymd_opt(2016, 1, 15).context("invalid date")?,
        NaiveDate::from_ymd_opt(2016, 2, 19).context("invalid date")?,
    ];

    let mut contracts = Vec::new();
    for expiration in expirations {
        for step in 0..=4 {
            let strike = dec!(740) + Decimal::from(step * 5);
            contracts.push(OptionContract::call(strike, expiration));
            contracts.push(OptionContract::put(strike, expiration));
        }
    }

    let as_of = NaiveDate::from_ymd_opt(2015, 12, 24).context("invalid date")?;
    Ok(ChainSnapshot::new(Symbol::new("GOOG"), dec!(748.40), contracts)?.with_as_of(as_of))
}
