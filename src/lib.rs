//! Payoffkit is a multi-leg option strategy analysis library: expiration
//! P&L curves, break-even detection, fixed-scenario tables, and capital/loss
//! summaries under one namespace.
//!
//! The engine is static and expiration-only: given a current underlying
//! price and a set of option legs (calls/puts, long/short, arbitrary strikes
//! and premiums) it superposes the piecewise-linear leg payoffs into a dense
//! 51-point curve over an automatically derived price range, scans the curve
//! for profit-sign transitions, and reports premium committed, worst sampled
//! loss, and a five-row relative-price scenario table. It does not model
//! early exercise, implied volatility, time decay, or Greek sensitivities.
//!
//! References: Hull, *Options, Futures, and Other Derivatives* (11th ed.),
//! Ch. 12, for payoff identities and multi-leg strategy conventions.
//!
//! Numerical considerations:
//! - The sampled range straddles the current price and every strike with a
//!   30% margin; break-evens are reported at sample resolution (within one
//!   step of the true crossing) and are not refined.
//! - Sample prices are computed by direct indexing from the range bounds, so
//!   floating-point error does not accumulate across the sweep.
//! - Degenerate-but-valid inputs (all-short strategies, collapsed ranges)
//!   resolve to documented sentinel results, never to panics or NaN sums.
//!
//! Every invocation is a pure, synchronous function over an immutable input
//! snapshot; concurrent invocations share no state.
//!
//! # Quick Start
//! Analyze a single long call:
//! ```rust
//! use payoffkit::engine::analyze;
//! use payoffkit::instruments::{OptionLeg, StrategyInput};
//!
//! let input = StrategyInput::new(100.0, vec![OptionLeg::long_call("1", 1, 100.0, 5.0)]);
//! let report = analyze(&input).unwrap();
//!
//! assert_eq!(report.chart_data.len(), 51);
//! assert_eq!(report.total_investment, 500.0);
//! assert_eq!(report.max_loss, -500.0);
//! // Break-even at strike + premium, at sample resolution.
//! assert_eq!(report.break_even_prices.len(), 1);
//! assert!((report.break_even_prices[0] - 105.0).abs() <= 1.2);
//! ```
//!
//! Read the scenario table:
//! ```rust
//! use payoffkit::engine::analyze;
//! use payoffkit::instruments::{OptionLeg, StrategyInput};
//!
//! let input = StrategyInput::new(100.0, vec![OptionLeg::long_call("1", 1, 100.0, 5.0)]);
//! let report = analyze(&input).unwrap();
//!
//! let upside = &report.analysis_points[4];
//! assert_eq!(upside.price, "150.00");
//! assert_eq!(upside.total_profit, "4500.00");
//! assert_eq!(upside.return_percentage, "900.00");
//! ```
//!
//! Run straight from raw form fields:
//! ```rust
//! use payoffkit::engine::analyze_form;
//! use payoffkit::instruments::{CalculationForm, PositionForm};
//!
//! let form = CalculationForm {
//!     stock_price: "100".to_string(),
//!     positions: vec![PositionForm {
//!         id: "1".to_string(),
//!         option_type: "sellPut".to_string(),
//!         contracts: "2".to_string(),
//!         strike_price: "95".to_string(),
//!         option_price: "3.50".to_string(),
//!     }],
//! };
//! let report = analyze_form(&form).unwrap();
//! assert_eq!(report.total_investment, 0.0);
//! ```

pub mod core;
pub mod engine;
pub mod instruments;
pub mod pricing;
pub mod risk;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engine::*;
    pub use crate::instruments::*;
    pub use crate::pricing::*;
    pub use crate::risk::*;
}
