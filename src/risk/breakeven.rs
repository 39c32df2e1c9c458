//! Break-even detection on a sampled P&L curve.

use crate::pricing::SamplePoint;

/// Prices where the aggregate P&L changes sign between consecutive samples.
///
/// The scan walks the samples pairwise and flags a transition whenever
/// `(prev <= 0 && cur >= 0) || (prev >= 0 && cur <= 0)`, so a sample landing
/// exactly on zero is reported regardless of which side it is approached
/// from. Each break-even is recorded at the **current** sample's price: the
/// true crossing lies within one step of the reported value and is not
/// refined further. Results are ascending by sample order, one entry per
/// transition; adjacent duplicates from a flat zero plateau are not merged.
pub fn find_break_evens(samples: &[SamplePoint]) -> Vec<f64> {
    let mut break_evens = Vec::new();
    for pair in samples.windows(2) {
        let prev = pair[0].total_profit;
        let cur = pair[1].total_profit;
        if (prev <= 0.0 && cur >= 0.0) || (prev >= 0.0 && cur <= 0.0) {
            break_evens.push(pair[1].price);
        }
    }
    break_evens
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn point(price: f64, total_profit: f64) -> SamplePoint {
        SamplePoint {
            price,
            total_profit,
            per_position_profit: BTreeMap::new(),
        }
    }

    #[test]
    fn records_the_current_price_of_each_transition() {
        let samples = vec![
            point(90.0, -100.0),
            point(95.0, -20.0),
            point(100.0, 60.0),
            point(105.0, 120.0),
        ];
        assert_eq!(find_break_evens(&samples), vec![100.0]);
    }

    #[test]
    fn detects_transitions_in_both_directions() {
        let samples = vec![
            point(90.0, -50.0),
            point(95.0, 50.0),
            point(100.0, 150.0),
            point(105.0, 50.0),
            point(110.0, -50.0),
        ];
        assert_eq!(find_break_evens(&samples), vec![95.0, 110.0]);
    }

    #[test]
    fn exact_zero_counts_from_either_side() {
        let samples = vec![point(90.0, -50.0), point(95.0, 0.0), point(100.0, 50.0)];
        // Both pairs match: (-50, 0) and (0, 50).
        assert_eq!(find_break_evens(&samples), vec![95.0, 100.0]);
    }

    #[test]
    fn flat_zero_plateau_reports_one_entry_per_pair() {
        let samples = vec![
            point(90.0, 0.0),
            point(95.0, 0.0),
            point(100.0, 0.0),
        ];
        assert_eq!(find_break_evens(&samples), vec![95.0, 100.0]);
    }

    #[test]
    fn no_transitions_means_no_break_evens() {
        let samples = vec![point(90.0, 10.0), point(95.0, 20.0), point(100.0, 30.0)];
        assert!(find_break_evens(&samples).is_empty());

        assert!(find_break_evens(&[point(90.0, -10.0)]).is_empty());
        assert!(find_break_evens(&[]).is_empty());
    }
}
