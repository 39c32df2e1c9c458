//! Capital-committed and worst-case metrics for a sampled strategy.
//!
//! Investment counts premium actually paid: long legs only. Short-leg margin
//! requirements are out of scope, so an all-short strategy commits zero
//! capital here. Max loss is the most negative point observed on the sampled
//! curve, not a closed-form bound, and inherits the sampler's resolution.

use crate::instruments::{OptionLeg, SHARES_PER_CONTRACT};
use crate::pricing::SamplePoint;

/// Premium committed and worst sampled loss for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    /// Total premium paid across long legs. Never negative.
    pub total_investment: f64,
    /// Minimum of zero and the lowest sampled aggregate P&L. Never positive.
    pub max_loss: f64,
}

/// Capital committed to the strategy: `premium * contracts * 100` summed
/// over the `Buy*` legs. Short legs contribute nothing.
pub fn total_investment(legs: &[OptionLeg]) -> f64 {
    legs.iter()
        .filter(|leg| leg.leg_type.is_long())
        .map(|leg| leg.premium * leg.contracts as f64 * SHARES_PER_CONTRACT)
        .sum()
}

/// Worst aggregate P&L observed across the samples, clamped to at most zero.
pub fn max_loss(samples: &[SamplePoint]) -> f64 {
    samples
        .iter()
        .map(|sample| sample.total_profit)
        .fold(0.0, f64::min)
}

/// Computes both risk metrics for one input's legs and sampled curve.
pub fn summarize_risk(legs: &[OptionLeg], samples: &[SamplePoint]) -> RiskSummary {
    RiskSummary {
        total_investment: total_investment(legs),
        max_loss: max_loss(samples),
    }
}
