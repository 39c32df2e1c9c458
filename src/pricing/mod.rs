//! Valuation kernels: leg-level expiry P&L and dense curve sampling.

pub mod curve;
pub mod payoff;

pub use curve::{sample_curve, sample_range, SamplePoint, CURVE_POINTS};
pub use payoff::{leg_expiry_pnl, strategy_expiry_pnl};
