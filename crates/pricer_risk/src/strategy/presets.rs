//! Preset option strategies.
//!
//! Provides ready-to-use multi-leg strategies built around an at-the-money
//! strike K:
//! - Volatility plays (straddles, strangles)
//! - Vertical spreads (bull/bear, call/put)
//! - Range trades (iron condor, iron butterfly, jade lizard)
//! - Hedged positions (protective put, covered call, collar)
//!
//! Stock legs of the hedged positions are not modelled; only their option
//! legs are returned. The calendar spread uses one shared expiry for both
//! legs, so its two legs offset exactly.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::OptionType;

use super::error::StrategyError;
use super::leg::StrategyLeg;

/// Strike offset of the near wings.
const NEAR_WING: f64 = 5.0;

/// Strike offset of the far wings.
const FAR_WING: f64 = 10.0;

/// Types of preset strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PresetStrategy {
    /// Long call + long put at K
    LongStraddle,
    /// Short call + short put at K
    ShortStraddle,
    /// Long K+5 call + long K-5 put
    LongStrangle,
    /// Long K-5 call + short K+5 call
    BullCallSpread,
    /// Long K+5 put + short K-5 put
    BearPutSpread,
    /// Short K+5 put + long K-5 put
    BullPutSpread,
    /// Short K-5 call + long K+5 call
    BearCallSpread,
    /// Long K-10 put, short K-5 put, short K+5 call, long K+10 call
    IronCondor,
    /// Long K-10 put, short K put, short K call, long K+10 call
    IronButterfly,
    /// Long K-5 put
    ProtectivePut,
    /// Short K+5 call
    CoveredCall,
    /// Long K-5 put + short K+5 call
    Collar,
    /// Short K call + long K call
    CalendarSpread,
    /// Short K-10 put, short K+5 call, long K+15 call
    JadeLizard,
    /// Long 1 K call + short 2 K+10 calls
    RatioCallSpread,
}

impl PresetStrategy {
    /// All presets in display order.
    pub const ALL: [PresetStrategy; 15] = [
        Self::LongStraddle,
        Self::ShortStraddle,
        Self::LongStrangle,
        Self::BullCallSpread,
        Self::BearPutSpread,
        Self::BullPutSpread,
        Self::BearCallSpread,
        Self::IronCondor,
        Self::IronButterfly,
        Self::ProtectivePut,
        Self::CoveredCall,
        Self::Collar,
        Self::CalendarSpread,
        Self::JadeLizard,
        Self::RatioCallSpread,
    ];

    /// Get all presets.
    pub fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LongStraddle => "Long Straddle",
            Self::ShortStraddle => "Short Straddle",
            Self::LongStrangle => "Long Strangle",
            Self::BullCallSpread => "Bull Call Spread",
            Self::BearPutSpread => "Bear Put Spread",
            Self::BullPutSpread => "Bull Put Spread",
            Self::BearCallSpread => "Bear Call Spread",
            Self::IronCondor => "Iron Condor",
            Self::IronButterfly => "Iron Butterfly",
            Self::ProtectivePut => "Protective Put",
            Self::CoveredCall => "Covered Call",
            Self::Collar => "Collar",
            Self::CalendarSpread => "Calendar Spread",
            Self::JadeLizard => "Jade Lizard",
            Self::RatioCallSpread => "Ratio Call Spread",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::LongStraddle => "Buy call + Buy put at same strike (volatility play)",
            Self::ShortStraddle => "Sell call + Sell put at same strike (collect premium)",
            Self::LongStrangle => "Buy OTM call + Buy OTM put (cheaper volatility play)",
            Self::BullCallSpread => "Buy lower strike call + Sell higher strike call",
            Self::BearPutSpread => "Buy higher strike put + Sell lower strike put",
            Self::BullPutSpread => "Sell higher strike put + Buy lower strike put",
            Self::BearCallSpread => "Sell lower strike call + Buy higher strike call",
            Self::IronCondor => "Sell OTM put and call spreads around the strike",
            Self::IronButterfly => "Sell ATM straddle + Buy equidistant wings",
            Self::ProtectivePut => "Long stock + Long put (insurance strategy)",
            Self::CoveredCall => "Long stock + Short call (income strategy)",
            Self::Collar => "Long stock + Long put + Short call",
            Self::CalendarSpread => "Sell short-term + Buy long-term same strike",
            Self::JadeLizard => "Short put + Short call spread (high probability)",
            Self::RatioCallSpread => "Buy 1 call + Sell 2 higher strike calls",
        }
    }

    /// Kebab-case identifier, as accepted by [`FromStr`].
    pub fn slug(&self) -> &'static str {
        match self {
            Self::LongStraddle => "long-straddle",
            Self::ShortStraddle => "short-straddle",
            Self::LongStrangle => "long-strangle",
            Self::BullCallSpread => "bull-call-spread",
            Self::BearPutSpread => "bear-put-spread",
            Self::BullPutSpread => "bull-put-spread",
            Self::BearCallSpread => "bear-call-spread",
            Self::IronCondor => "iron-condor",
            Self::IronButterfly => "iron-butterfly",
            Self::ProtectivePut => "protective-put",
            Self::CoveredCall => "covered-call",
            Self::Collar => "collar",
            Self::CalendarSpread => "calendar-spread",
            Self::JadeLizard => "jade-lizard",
            Self::RatioCallSpread => "ratio-call-spread",
        }
    }

    /// Option legs of the preset around `atm_strike`.
    ///
    /// # Examples
    /// ```
    /// use pricer_risk::strategy::{Direction, PresetStrategy};
    ///
    /// let legs = PresetStrategy::BullCallSpread.legs(100.0);
    /// assert_eq!(legs.len(), 2);
    /// assert_eq!(legs[0].strike, 95.0);
    /// assert_eq!(legs[1].direction, Direction::Short);
    /// ```
    pub fn legs(&self, atm_strike: f64) -> Vec<StrategyLeg> {
        use OptionType::{Call, Put};

        let k = atm_strike;
        match self {
            Self::LongStraddle => vec![StrategyLeg::long(Call, k, 1), StrategyLeg::long(Put, k, 1)],
            Self::ShortStraddle => {
                vec![StrategyLeg::short(Call, k, 1), StrategyLeg::short(Put, k, 1)]
            }
            Self::LongStrangle => vec![
                StrategyLeg::long(Call, k + NEAR_WING, 1),
                StrategyLeg::long(Put, k - NEAR_WING, 1),
            ],
            Self::BullCallSpread => vec![
                StrategyLeg::long(Call, k - NEAR_WING, 1),
                StrategyLeg::short(Call, k + NEAR_WING, 1),
            ],
            Self::BearPutSpread => vec![
                StrategyLeg::long(Put, k + NEAR_WING, 1),
                StrategyLeg::short(Put, k - NEAR_WING, 1),
            ],
            Self::BullPutSpread => vec![
                StrategyLeg::short(Put, k + NEAR_WING, 1),
                StrategyLeg::long(Put, k - NEAR_WING, 1),
            ],
            Self::BearCallSpread => vec![
                StrategyLeg::short(Call, k - NEAR_WING, 1),
                StrategyLeg::long(Call, k + NEAR_WING, 1),
            ],
            Self::IronCondor => vec![
                StrategyLeg::long(Put, k - FAR_WING, 1),
                StrategyLeg::short(Put, k - NEAR_WING, 1),
                StrategyLeg::short(Call, k + NEAR_WING, 1),
                StrategyLeg::long(Call, k + FAR_WING, 1),
            ],
            Self::IronButterfly => vec![
                StrategyLeg::long(Put, k - FAR_WING, 1),
                StrategyLeg::short(Put, k, 1),
                StrategyLeg::short(Call, k, 1),
                StrategyLeg::long(Call, k + FAR_WING, 1),
            ],
            Self::ProtectivePut => vec![StrategyLeg::long(Put, k - NEAR_WING, 1)],
            Self::CoveredCall => vec![StrategyLeg::short(Call, k + NEAR_WING, 1)],
            Self::Collar => vec![
                StrategyLeg::long(Put, k - NEAR_WING, 1),
                StrategyLeg::short(Call, k + NEAR_WING, 1),
            ],
            Self::CalendarSpread => {
                vec![StrategyLeg::short(Call, k, 1), StrategyLeg::long(Call, k, 1)]
            }
            Self::JadeLizard => vec![
                StrategyLeg::short(Put, k - FAR_WING, 1),
                StrategyLeg::short(Call, k + NEAR_WING, 1),
                StrategyLeg::long(Call, k + FAR_WING + NEAR_WING, 1),
            ],
            Self::RatioCallSpread => vec![
                StrategyLeg::long(Call, k, 1),
                StrategyLeg::short(Call, k + FAR_WING, 2),
            ],
        }
    }
}

impl fmt::Display for PresetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the slug or the display name, case-insensitively, with spaces,
/// underscores and hyphens treated alike.
impl FromStr for PresetStrategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.slug() == normalised)
            .ok_or_else(|| StrategyError::UnknownPreset(s.to_string()))
    }
}
