//! Option strategy legs and the validated input snapshot for one analysis run.
//!
//! [`OptionLeg`] is the canonical, typed description of one contract entry;
//! [`StrategyInput`] bundles the current underlying price with an ordered set
//! of legs. Both carry `validate()` so the engine can refuse out-of-domain
//! values before any arithmetic runs.
//!
//! The raw counterparts [`PositionForm`] and [`CalculationForm`] model the
//! text-field payloads a surrounding form layer produces. Their `parse()`
//! methods are the only path from untrusted strings into the typed model:
//! empty fields surface as [`AnalysisError::IncompleteInput`] and malformed
//! numbers as [`AnalysisError::InvalidInput`], so a value that would silently
//! become NaN can never poison a downstream sum.

use crate::core::{AnalysisError, LegType};

/// Underlying shares controlled by one option contract.
pub const SHARES_PER_CONTRACT: f64 = 100.0;

/// One option leg of a multi-leg strategy.
///
/// # Examples
/// ```
/// use payoffkit::instruments::OptionLeg;
///
/// let leg = OptionLeg::long_call("1", 1, 100.0, 5.0);
/// assert!(leg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLeg {
    /// Caller-assigned identifier, unique within a strategy.
    ///
    /// Stable across edits; keys the per-leg column of the sampled curve.
    pub id: String,
    /// Side/type tag.
    pub leg_type: LegType,
    /// Number of contracts, each controlling [`SHARES_PER_CONTRACT`] shares.
    pub contracts: u32,
    /// Strike level in underlying units.
    pub strike: f64,
    /// Premium paid (long) or received (short) per share.
    pub premium: f64,
}

impl OptionLeg {
    pub fn new(
        id: impl Into<String>,
        leg_type: LegType,
        contracts: u32,
        strike: f64,
        premium: f64,
    ) -> Self {
        Self {
            id: id.into(),
            leg_type,
            contracts,
            strike,
            premium,
        }
    }

    /// Builds a bought call leg.
    pub fn long_call(id: impl Into<String>, contracts: u32, strike: f64, premium: f64) -> Self {
        Self::new(id, LegType::BuyCall, contracts, strike, premium)
    }

    /// Builds a bought put leg.
    pub fn long_put(id: impl Into<String>, contracts: u32, strike: f64, premium: f64) -> Self {
        Self::new(id, LegType::BuyPut, contracts, strike, premium)
    }

    /// Builds a written call leg.
    pub fn short_call(id: impl Into<String>, contracts: u32, strike: f64, premium: f64) -> Self {
        Self::new(id, LegType::SellCall, contracts, strike, premium)
    }

    /// Builds a written put leg.
    pub fn short_put(id: impl Into<String>, contracts: u32, strike: f64, premium: f64) -> Self {
        Self::new(id, LegType::SellPut, contracts, strike, premium)
    }

    /// Validates leg fields.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidInput`] when:
    /// - `id` is empty
    /// - `contracts == 0`
    /// - `strike` is non-finite or `<= 0`
    /// - `premium` is non-finite or `< 0`
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.id.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "leg id must not be empty".to_string(),
            ));
        }
        if self.contracts == 0 {
            return Err(AnalysisError::InvalidInput(format!(
                "leg `{}` contracts must be >= 1",
                self.id
            )));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "leg `{}` strike must be finite and > 0",
                self.id
            )));
        }
        if !self.premium.is_finite() || self.premium < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "leg `{}` premium must be finite and >= 0",
                self.id
            )));
        }
        Ok(())
    }
}

/// Validated input snapshot for one analysis run.
///
/// Leg order is irrelevant to the math (payoffs are summed) but preserved
/// for stable display and editing downstream.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyInput {
    /// Current underlying price.
    pub stock_price: f64,
    /// Ordered strategy legs.
    pub legs: Vec<OptionLeg>,
}

impl StrategyInput {
    pub fn new(stock_price: f64, legs: Vec<OptionLeg>) -> Self {
        Self { stock_price, legs }
    }

    /// Validates the snapshot.
    ///
    /// # Errors
    /// - [`AnalysisError::IncompleteInput`] when the leg list is empty
    /// - [`AnalysisError::InvalidInput`] when the stock price is non-finite
    ///   or `<= 0`, any leg fails [`OptionLeg::validate`], or two legs share
    ///   an id (ids key the per-leg curve output)
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.stock_price.is_finite() || self.stock_price <= 0.0 {
            return Err(AnalysisError::InvalidInput(
                "stock price must be finite and > 0".to_string(),
            ));
        }
        if self.legs.is_empty() {
            return Err(AnalysisError::IncompleteInput(
                "at least one position is required".to_string(),
            ));
        }
        for leg in &self.legs {
            leg.validate()?;
        }
        for (index, leg) in self.legs.iter().enumerate() {
            if self.legs[..index].iter().any(|other| other.id == leg.id) {
                return Err(AnalysisError::InvalidInput(format!(
                    "duplicate leg id `{}`",
                    leg.id
                )));
            }
        }
        Ok(())
    }
}

/// Raw text-field payload for one position row, as entered in a form.
///
/// Field names mirror the persisted document format (`optionType`,
/// `strikePrice`, `optionPrice`).
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionForm {
    pub id: String,
    pub option_type: String,
    pub contracts: String,
    pub strike_price: String,
    pub option_price: String,
}

impl PositionForm {
    /// Parses and validates the raw fields into a typed [`OptionLeg`].
    ///
    /// # Errors
    /// - [`AnalysisError::IncompleteInput`] when any field is empty
    /// - [`AnalysisError::InvalidInput`] when a field does not parse or the
    ///   parsed leg fails [`OptionLeg::validate`]
    pub fn parse(&self) -> Result<OptionLeg, AnalysisError> {
        let leg_type: LegType = require(&self.option_type, &self.id, "option type")?
            .parse()
            .map_err(|()| {
                AnalysisError::InvalidInput(format!(
                    "position `{}` has unknown option type `{}`",
                    self.id, self.option_type
                ))
            })?;
        let contracts = parse_field::<u32>(&self.contracts, &self.id, "contracts")?;
        let strike = parse_field::<f64>(&self.strike_price, &self.id, "strike price")?;
        let premium = parse_field::<f64>(&self.option_price, &self.id, "option price")?;

        let leg = OptionLeg::new(self.id.clone(), leg_type, contracts, strike, premium);
        leg.validate()?;
        Ok(leg)
    }
}

/// Raw calculator form: current stock price plus position rows.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationForm {
    pub stock_price: String,
    pub positions: Vec<PositionForm>,
}

impl CalculationForm {
    /// Parses and validates every field into a typed [`StrategyInput`].
    ///
    /// # Errors
    /// Propagates [`PositionForm::parse`] failures; additionally rejects a
    /// missing stock price as [`AnalysisError::IncompleteInput`] and a
    /// malformed one as [`AnalysisError::InvalidInput`].
    ///
    /// # Examples
    /// ```
    /// use payoffkit::instruments::{CalculationForm, PositionForm};
    ///
    /// let form = CalculationForm {
    ///     stock_price: "100".to_string(),
    ///     positions: vec![PositionForm {
    ///         id: "1".to_string(),
    ///         option_type: "buyCall".to_string(),
    ///         contracts: "1".to_string(),
    ///         strike_price: "100".to_string(),
    ///         option_price: "5".to_string(),
    ///     }],
    /// };
    /// let input = form.parse().unwrap();
    /// assert_eq!(input.stock_price, 100.0);
    /// assert_eq!(input.legs.len(), 1);
    /// ```
    pub fn parse(&self) -> Result<StrategyInput, AnalysisError> {
        let raw = self.stock_price.trim();
        if raw.is_empty() {
            return Err(AnalysisError::IncompleteInput(
                "stock price is required".to_string(),
            ));
        }
        let stock_price: f64 = raw.parse().map_err(|_| {
            AnalysisError::InvalidInput(format!("stock price `{}` is not a number", raw))
        })?;

        let legs = self
            .positions
            .iter()
            .map(PositionForm::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let input = StrategyInput::new(stock_price, legs);
        input.validate()?;
        Ok(input)
    }
}

fn require<'a>(raw: &'a str, id: &str, field: &str) -> Result<&'a str, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(AnalysisError::IncompleteInput(format!(
            "position `{id}` is missing {field}"
        )))
    } else {
        Ok(trimmed)
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, id: &str, field: &str) -> Result<T, AnalysisError> {
    require(raw, id, field)?.parse().map_err(|_| {
        AnalysisError::InvalidInput(format!(
            "position `{id}` {field} `{}` is not a valid number",
            raw.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_form(strike: &str, premium: &str) -> PositionForm {
        PositionForm {
            id: "1".to_string(),
            option_type: "buyCall".to_string(),
            contracts: "1".to_string(),
            strike_price: strike.to_string(),
            option_price: premium.to_string(),
        }
    }

    #[test]
    fn parses_a_complete_row() {
        let leg = call_form("100", "5.25").parse().unwrap();
        assert_eq!(leg.leg_type, LegType::BuyCall);
        assert_eq!(leg.contracts, 1);
        assert_eq!(leg.strike, 100.0);
        assert_eq!(leg.premium, 5.25);
    }

    #[test]
    fn empty_fields_are_incomplete_not_invalid() {
        let err = call_form("", "5").parse().unwrap_err();
        assert!(matches!(err, AnalysisError::IncompleteInput(_)));

        let err = call_form("100", "  ").parse().unwrap_err();
        assert!(matches!(err, AnalysisError::IncompleteInput(_)));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = call_form("abc", "5").parse().unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));

        let mut form = call_form("100", "5");
        form.contracts = "1.5".to_string();
        assert!(matches!(
            form.parse().unwrap_err(),
            AnalysisError::InvalidInput(_)
        ));
    }

    #[test]
    fn unknown_option_type_is_rejected() {
        let mut form = call_form("100", "5");
        form.option_type = "straddle".to_string();
        assert!(matches!(
            form.parse().unwrap_err(),
            AnalysisError::InvalidInput(_)
        ));
    }

    #[test]
    fn domain_violations_are_rejected_after_parsing() {
        assert!(call_form("0", "5").parse().is_err());
        assert!(call_form("-100", "5").parse().is_err());
        assert!(call_form("100", "-5").parse().is_err());

        let mut form = call_form("100", "5");
        form.contracts = "0".to_string();
        assert!(form.parse().is_err());

        // f64::from_str accepts "inf"; the domain check must still refuse it.
        assert!(call_form("inf", "5").parse().is_err());
    }

    #[test]
    fn zero_premium_is_allowed() {
        assert!(call_form("100", "0").parse().is_ok());
    }

    #[test]
    fn strategy_requires_positive_spot_and_unique_ids() {
        let leg = OptionLeg::long_call("1", 1, 100.0, 5.0);

        let empty = StrategyInput::new(100.0, vec![]);
        assert!(matches!(
            empty.validate().unwrap_err(),
            AnalysisError::IncompleteInput(_)
        ));

        let bad_spot = StrategyInput::new(0.0, vec![leg.clone()]);
        assert!(bad_spot.validate().is_err());

        let duplicate = StrategyInput::new(
            100.0,
            vec![leg.clone(), OptionLeg::long_put("1", 1, 90.0, 2.0)],
        );
        assert!(matches!(
            duplicate.validate().unwrap_err(),
            AnalysisError::InvalidInput(_)
        ));

        let ok = StrategyInput::new(
            100.0,
            vec![leg, OptionLeg::long_put("2", 1, 90.0, 2.0)],
        );
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn form_parse_rejects_missing_stock_price() {
        let form = CalculationForm {
            stock_price: String::new(),
            positions: vec![call_form("100", "5")],
        };
        assert!(matches!(
            form.parse().unwrap_err(),
            AnalysisError::IncompleteInput(_)
        ));
    }
}
