//! Risk namespace: break-even detection, scenario tables, and summary metrics.
//!
//! This module wires and re-exports:
//! - `breakeven`: sign-transition scan over the sampled curve,
//! - `scenarios`: fixed relative-price table with formatted rows,
//! - `summary`: premium outlay and worst sampled loss.
//!
//! Domain logic lives in the submodules; this file defines the public import
//! surface (`payoffkit::risk::*`) for downstream code.

pub mod breakeven;
pub mod scenarios;
pub mod summary;

pub use breakeven::find_break_evens;
pub use scenarios::{analyze_scenarios, AnalysisPoint, RETURN_UNDEFINED, SCENARIO_MULTIPLIERS};
pub use summary::{max_loss, summarize_risk, total_investment, RiskSummary};
