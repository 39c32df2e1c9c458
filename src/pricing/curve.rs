//! Dense expiry P&L curve sampling over an automatically derived price range.
//!
//! The range always straddles both the current price and every strike with a
//! 30% margin, so break-evens near the edges of the position set are not
//! missed. Sample prices are computed by direct indexing
//! (`lower + i * step`) rather than repeated accumulation, which keeps the
//! floating-point error of the 51st point bounded by one rounding step.

use std::collections::BTreeMap;

use crate::instruments::StrategyInput;
use crate::pricing::payoff::leg_expiry_pnl;

/// Number of points sampled across a non-degenerate price range.
pub const CURVE_POINTS: usize = 51;

const RANGE_LOWER_SCALE: f64 = 0.7;
const RANGE_UPPER_SCALE: f64 = 1.3;

/// One sampled point on the aggregate expiry P&L curve.
///
/// `per_position_profit` keys each leg's P&L by its id; `total_profit` is
/// always the sum of those entries. `BTreeMap` keeps the serialized order
/// deterministic, so identical inputs serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePoint {
    pub price: f64,
    pub total_profit: f64,
    pub per_position_profit: BTreeMap<String, f64>,
}

/// Derives the `[lower, upper]` price range for one input.
///
/// `lower = min(stock_price, min_strike) * 0.7`,
/// `upper = max(stock_price, max_strike) * 1.3`.
pub fn sample_range(input: &StrategyInput) -> (f64, f64) {
    let mut min_strike = f64::INFINITY;
    let mut max_strike = f64::NEG_INFINITY;
    for leg in &input.legs {
        min_strike = min_strike.min(leg.strike);
        max_strike = max_strike.max(leg.strike);
    }

    let lower = input.stock_price.min(min_strike) * RANGE_LOWER_SCALE;
    let upper = input.stock_price.max(max_strike) * RANGE_UPPER_SCALE;
    (lower, upper)
}

/// Samples the aggregate curve at [`CURVE_POINTS`] evenly spaced prices.
///
/// A collapsed range (`upper == lower`) yields exactly one sample at that
/// price instead of dividing by zero.
///
/// # Examples
/// ```
/// use payoffkit::instruments::{OptionLeg, StrategyInput};
/// use payoffkit::pricing::sample_curve;
///
/// let input = StrategyInput::new(100.0, vec![OptionLeg::long_call("1", 1, 100.0, 5.0)]);
/// let samples = sample_curve(&input);
/// assert_eq!(samples.len(), 51);
/// assert_eq!(samples[0].price, 70.0);
/// ```
pub fn sample_curve(input: &StrategyInput) -> Vec<SamplePoint> {
    let (lower, upper) = sample_range(input);
    if upper - lower == 0.0 {
        return vec![sample_at(input, lower)];
    }

    let step = (upper - lower) / (CURVE_POINTS - 1) as f64;
    (0..CURVE_POINTS)
        .map(|i| sample_at(input, lower + i as f64 * step))
        .collect()
}

fn sample_at(input: &StrategyInput, price: f64) -> SamplePoint {
    let mut per_position_profit = BTreeMap::new();
    let mut total_profit = 0.0;
    for leg in &input.legs {
        let pnl = leg_expiry_pnl(leg, price);
        per_position_profit.insert(leg.id.clone(), pnl);
        total_profit += pnl;
    }

    SamplePoint {
        price,
        total_profit,
        per_position_profit,
    }
}
