//! Full-report assembly: the single entry point callers invoke per edit.
//!
//! `analyze` is a pure, stateless function over an immutable input snapshot:
//! no I/O, no clock, no shared state. The caller owns state transitions and
//! re-invokes it on every change; a previously returned report is simply
//! discarded, never mutated.

use crate::core::AnalysisError;
use crate::instruments::{CalculationForm, StrategyInput};
use crate::pricing::{sample_curve, SamplePoint};
use crate::risk::{analyze_scenarios, find_break_evens, summarize_risk, AnalysisPoint};

/// Complete analysis output for one input snapshot.
///
/// Plain serializable data with no references into the input: summary
/// metrics, the formatted scenario table, and the dense curve consumed by
/// chart renderers and the persistence collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyReport {
    /// Prices where the sampled curve crosses zero, ascending by sample
    /// order. Resolution-limited: each lies within one step of the true
    /// crossing.
    pub break_even_prices: Vec<f64>,
    /// Premium paid across long legs. Never negative.
    pub total_investment: f64,
    /// Most negative sampled aggregate P&L, clamped to at most zero.
    pub max_loss: f64,
    /// Exactly five formatted rows, one per fixed relative-price scenario.
    pub analysis_points: Vec<AnalysisPoint>,
    /// The full sampled curve.
    pub chart_data: Vec<SamplePoint>,
}

/// Runs the full analysis on a typed input.
///
/// Validates first and refuses to run on out-of-domain input; a returned
/// report is always fully computed. Identical inputs produce identical
/// reports.
///
/// # Errors
/// Propagates [`StrategyInput::validate`] failures.
///
/// # Examples
/// ```
/// use payoffkit::engine::analyze;
/// use payoffkit::instruments::{OptionLeg, StrategyInput};
///
/// let input = StrategyInput::new(100.0, vec![OptionLeg::long_call("1", 1, 100.0, 5.0)]);
/// let report = analyze(&input).unwrap();
///
/// assert_eq!(report.chart_data.len(), 51);
/// assert_eq!(report.total_investment, 500.0);
/// assert_eq!(report.max_loss, -500.0);
/// assert_eq!(report.analysis_points[4].total_profit, "4500.00");
/// ```
pub fn analyze(input: &StrategyInput) -> Result<StrategyReport, AnalysisError> {
    input.validate()?;

    let chart_data = sample_curve(input);
    let break_even_prices = find_break_evens(&chart_data);
    let summary = summarize_risk(&input.legs, &chart_data);
    let analysis_points = analyze_scenarios(input, summary.total_investment);

    Ok(StrategyReport {
        break_even_prices,
        total_investment: summary.total_investment,
        max_loss: summary.max_loss,
        analysis_points,
        chart_data,
    })
}

/// Parses raw form fields, then runs the full analysis.
///
/// # Errors
/// Propagates [`CalculationForm::parse`] failures.
pub fn analyze_form(form: &CalculationForm) -> Result<StrategyReport, AnalysisError> {
    analyze(&form.parse()?)
}

#[cfg(test)]
mod tests {
    use crate::instruments::OptionLeg;

    use super::*;

    #[test]
    fn analyze_refuses_invalid_input_without_partial_results() {
        let empty = StrategyInput::new(100.0, vec![]);
        assert!(matches!(
            analyze(&empty).unwrap_err(),
            AnalysisError::IncompleteInput(_)
        ));

        let bad_leg = StrategyInput::new(100.0, vec![OptionLeg::long_call("1", 0, 100.0, 5.0)]);
        assert!(matches!(
            analyze(&bad_leg).unwrap_err(),
            AnalysisError::InvalidInput(_)
        ));
    }

    #[test]
    fn report_sections_are_mutually_consistent() {
        let input = StrategyInput::new(
            100.0,
            vec![
                OptionLeg::long_call("1", 1, 100.0, 5.0),
                OptionLeg::long_put("2", 1, 100.0, 5.0),
            ],
        );
        let report = analyze(&input).unwrap();

        assert_eq!(report.analysis_points.len(), 5);
        assert_eq!(report.chart_data.len(), 51);
        assert!(report.max_loss <= 0.0);
        assert_eq!(report.total_investment, 1000.0);

        let curve_min = report
            .chart_data
            .iter()
            .map(|p| p.total_profit)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(report.max_loss, curve_min.min(0.0));
    }
}
