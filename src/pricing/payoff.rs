//! Module `pricing::payoff`.
//!
//! Expiration P&L for option strategy legs: the leaf valuation every other
//! component builds on.
//!
//! References: Hull (11th ed.), Ch. 12, for payoff identities and trading
//! strategies involving options.
//!
//! Primary API surface: free functions `leg_expiry_pnl` and
//! `strategy_expiry_pnl`.
//!
//! The model is static and expiration-only: no early exercise, no implied
//! volatility, no time decay. Given validated legs every result is finite.

use crate::instruments::{OptionLeg, SHARES_PER_CONTRACT};

/// Expiry P&L of a single leg at one underlying price.
///
/// Per-share profit is `side * (intrinsic - premium)`, so a written leg is
/// the exact negation of the bought leg with the same terms. The result is
/// scaled by `contracts * SHARES_PER_CONTRACT`.
///
/// # Examples
/// ```
/// use payoffkit::instruments::OptionLeg;
/// use payoffkit::pricing::leg_expiry_pnl;
///
/// let long = OptionLeg::long_call("1", 1, 100.0, 5.0);
/// assert_eq!(leg_expiry_pnl(&long, 110.0), 500.0);
/// assert_eq!(leg_expiry_pnl(&long, 90.0), -500.0);
/// ```
pub fn leg_expiry_pnl(leg: &OptionLeg, price: f64) -> f64 {
    let intrinsic = leg.leg_type.option_type().intrinsic(price, leg.strike);
    let per_share = leg.leg_type.side().sign() * (intrinsic - leg.premium);
    per_share * leg.contracts as f64 * SHARES_PER_CONTRACT
}

/// Aggregate expiry P&L of a full strategy at one underlying price.
pub fn strategy_expiry_pnl(legs: &[OptionLeg], price: f64) -> f64 {
    legs.iter().map(|leg| leg_expiry_pnl(leg, price)).sum()
}
