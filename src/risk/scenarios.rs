//! Fixed relative-price scenario table for tabular display.
//!
//! Distinct from the dense sampled curve: the table evaluates the strategy
//! at five fixed multiples of the current price and renders each row as
//! 2-decimal display strings, ready for a table renderer or verbatim
//! persistence.

use crate::instruments::StrategyInput;
use crate::pricing::strategy_expiry_pnl;

/// Relative price multipliers applied to the current stock price, in row order.
pub const SCENARIO_MULTIPLIERS: [f64; 5] = [0.5, 0.8, 1.0, 1.2, 1.5];

/// Rendered return cell when no premium was paid (all-short strategies).
///
/// A zero total investment makes the return ratio undefined; the table emits
/// this sentinel instead of an incidental `inf`/`NaN` rendering.
pub const RETURN_UNDEFINED: &str = "n/a";

/// One row of the scenario table, decimal-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPoint {
    /// Scenario underlying price, formatted to 2 decimals.
    pub price: String,
    /// Aggregate P&L at that price, formatted to 2 decimals.
    pub total_profit: String,
    /// `total_profit / total_investment * 100` to 2 decimals, or
    /// [`RETURN_UNDEFINED`] when the investment is zero.
    pub return_percentage: String,
}

/// Evaluates the strategy at the five fixed scenarios.
///
/// Always returns exactly five rows, in [`SCENARIO_MULTIPLIERS`] order.
/// Never fails: the zero-investment division is the only degenerate case
/// and resolves to [`RETURN_UNDEFINED`].
pub fn analyze_scenarios(input: &StrategyInput, total_investment: f64) -> Vec<AnalysisPoint> {
    SCENARIO_MULTIPLIERS
        .iter()
        .map(|multiplier| {
            let price = input.stock_price * multiplier;
            let total_profit = strategy_expiry_pnl(&input.legs, price);
            let return_percentage = if total_investment == 0.0 {
                RETURN_UNDEFINED.to_string()
            } else {
                format!("{:.2}", total_profit / total_investment * 100.0)
            };

            AnalysisPoint {
                price: format!("{price:.2}"),
                total_profit: format!("{total_profit:.2}"),
                return_percentage,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::instruments::OptionLeg;

    use super::*;

    #[test]
    fn single_long_call_rows_are_exact() {
        let input = StrategyInput::new(100.0, vec![OptionLeg::long_call("1", 1, 100.0, 5.0)]);
        let rows = analyze_scenarios(&input, 500.0);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].price, "50.00");
        assert_eq!(rows[0].total_profit, "-500.00");
        assert_eq!(rows[0].return_percentage, "-100.00");

        assert_eq!(rows[2].price, "100.00");
        assert_eq!(rows[2].total_profit, "-500.00");

        assert_eq!(rows[4].price, "150.00");
        assert_eq!(rows[4].total_profit, "4500.00");
        assert_eq!(rows[4].return_percentage, "900.00");
    }

    #[test]
    fn straddle_downside_row_matches_hand_calculation() {
        let input = StrategyInput::new(
            100.0,
            vec![
                OptionLeg::long_call("1", 1, 100.0, 5.0),
                OptionLeg::long_put("2", 1, 100.0, 5.0),
            ],
        );
        let rows = analyze_scenarios(&input, 1000.0);

        // At 50: put pays (100-50-5)*100 = 4500, call loses 500.
        assert_eq!(rows[0].price, "50.00");
        assert_eq!(rows[0].total_profit, "4000.00");
        assert_eq!(rows[0].return_percentage, "400.00");
    }

    #[test]
    fn zero_investment_emits_the_sentinel_in_every_row() {
        let input = StrategyInput::new(
            100.0,
            vec![
                OptionLeg::short_call("1", 1, 100.0, 5.0),
                OptionLeg::short_put("2", 1, 100.0, 5.0),
            ],
        );
        let rows = analyze_scenarios(&input, 0.0);

        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert_eq!(row.return_percentage, RETURN_UNDEFINED);
        }
        // Profits themselves are still computed normally.
        assert_eq!(rows[2].total_profit, "1000.00");
    }
}
