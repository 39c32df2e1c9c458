/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Exercise value per share at the given underlying price.
    ///
    /// `max(0, price - strike)` for calls, `max(0, strike - price)` for puts.
    pub fn intrinsic(self, price: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (price - strike).max(0.0),
            Self::Put => (strike - price).max(0.0),
        }
    }
}

/// Whether a leg was bought or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSide {
    /// Premium paid, payoff received.
    Long,
    /// Premium received, payoff owed.
    Short,
}

impl LegSide {
    /// Returns +1.0 for long legs and -1.0 for short legs.
    pub fn sign(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }
}

/// Combined side/type tag for one strategy leg.
///
/// Serialized as the camelCase strings the form and persistence boundary
/// exchange: `"buyCall"`, `"buyPut"`, `"sellCall"`, `"sellPut"`. No other
/// variants are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegType {
    BuyCall,
    BuyPut,
    SellCall,
    SellPut,
}

impl LegType {
    /// Call/put component of the tag.
    pub fn option_type(self) -> OptionType {
        match self {
            Self::BuyCall | Self::SellCall => OptionType::Call,
            Self::BuyPut | Self::SellPut => OptionType::Put,
        }
    }

    /// Long/short component of the tag.
    pub fn side(self) -> LegSide {
        match self {
            Self::BuyCall | Self::BuyPut => LegSide::Long,
            Self::SellCall | Self::SellPut => LegSide::Short,
        }
    }

    /// True for the `Buy*` variants. Only long legs commit capital.
    pub fn is_long(self) -> bool {
        matches!(self.side(), LegSide::Long)
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BuyCall => "buyCall",
            Self::BuyPut => "buyPut",
            Self::SellCall => "sellCall",
            Self::SellPut => "sellPut",
        }
    }
}

impl std::str::FromStr for LegType {
    type Err = ();

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "buyCall" => Ok(Self::BuyCall),
            "buyPut" => Ok(Self::BuyPut),
            "sellCall" => Ok(Self::SellCall),
            "sellPut" => Ok(Self::SellPut),
            _ => Err(()),
        }
    }
}
