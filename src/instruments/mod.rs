//! Instrument definitions.

pub mod leg;

pub use leg::{CalculationForm, OptionLeg, PositionForm, StrategyInput, SHARES_PER_CONTRACT};
