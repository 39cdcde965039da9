//! Weighted scoring: indicator and pattern evidence into a directional call.
//!
//! Points are additive per side. Rule order is fixed (RSI, MACD, moving
//! averages, Bollinger %B, stochastic, ADX, CCI, Williams %R, MFI, then
//! patterns) so reason strings always come out in the same order for the
//! same input. Small nudges contribute points without a reason string;
//! only the loud findings are surfaced.

use crate::indicators::percent_b;
use crate::patterns::{PatternDirection, PatternMatch};

use super::snapshot::IndicatorSnapshot;
use super::SignalDirection;

/// Net score beyond which the call leaves HOLD.
pub const DECISION_MARGIN: f64 = 20.0;

pub const CONFIDENCE_FLOOR: f64 = 35.0;
pub const CONFIDENCE_CEILING: f64 = 95.0;

/// Emitted when no rule produced a reason string.
pub const NO_CONSENSUS: &str = "Mixed signals - waiting for clearer market direction";

/// Full strength (100) converts to this many points.
const PATTERN_POINT_SCALE: f64 = 15.0;

/// Accumulated evidence for each direction plus the reasons worth showing.
#[derive(Debug, Default)]
pub struct Tally {
    bullish: f64,
    bearish: f64,
    reasons: Vec<String>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bullish(&mut self, points: f64) {
        self.bullish += points;
    }

    pub fn add_bearish(&mut self, points: f64) {
        self.bearish += points;
    }

    pub fn add_bullish_reason(&mut self, points: f64, reason: String) {
        self.bullish += points;
        self.reasons.push(reason);
    }

    pub fn add_bearish_reason(&mut self, points: f64, reason: String) {
        self.bearish += points;
        self.reasons.push(reason);
    }

    pub fn bullish(&self) -> f64 {
        self.bullish
    }

    pub fn bearish(&self) -> f64 {
        self.bearish
    }

    /// Ties count as not leading.
    pub fn bullish_leads(&self) -> bool {
        self.bullish > self.bearish
    }

    pub fn net(&self) -> f64 {
        self.bullish - self.bearish
    }

    fn scored(&self) -> bool {
        self.bullish + self.bearish > 0.0
    }

    pub fn direction(&self) -> SignalDirection {
        let net = self.net();
        if net > DECISION_MARGIN {
            SignalDirection::Buy
        } else if net < -DECISION_MARGIN {
            SignalDirection::Sell
        } else {
            SignalDirection::Hold
        }
    }

    /// 50 plus the net score magnitude, clamped to [35, 95]; exactly 50
    /// when nothing scored at all.
    pub fn confidence(&self) -> f64 {
        if !self.scored() {
            return 50.0;
        }
        (50.0 + self.net().abs()).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
    }

    /// Consume the tally, substituting the no-consensus line when no rule
    /// spoke up.
    pub fn into_reasons(self) -> Vec<String> {
        if self.reasons.is_empty() {
            return vec![NO_CONSENSUS.to_string()];
        }
        self.reasons
    }
}

/// Apply the indicator rule table. Absent snapshot fields skip their rules;
/// the moving-average block needs both SMA20 and SMA50.
pub fn score_indicators(tally: &mut Tally, snapshot: &IndicatorSnapshot, price: f64) {
    if let Some(rsi) = snapshot.rsi {
        if rsi < 25.0 {
            tally.add_bullish_reason(15.0, format!("RSI extremely oversold ({rsi:.1})"));
        } else if rsi < 35.0 {
            tally.add_bullish_reason(10.0, format!("RSI oversold ({rsi:.1})"));
        } else if rsi > 75.0 {
            tally.add_bearish_reason(15.0, format!("RSI extremely overbought ({rsi:.1})"));
        } else if rsi > 65.0 {
            tally.add_bearish_reason(10.0, format!("RSI overbought ({rsi:.1})"));
        } else if rsi > 50.0 {
            tally.add_bullish(3.0);
        } else {
            tally.add_bearish(3.0);
        }
    }

    if let Some(macd) = snapshot.macd {
        if macd.histogram > 0.0 {
            tally.add_bullish(8.0);
            if macd.value > macd.signal {
                tally.add_bullish_reason(7.0, "MACD bullish crossover confirmed".to_string());
            }
        } else {
            tally.add_bearish(8.0);
            if macd.value < macd.signal {
                tally.add_bearish_reason(7.0, "MACD bearish crossover confirmed".to_string());
            }
        }
    }

    if let (Some(sma20), Some(sma50)) = (snapshot.sma20, snapshot.sma50) {
        if sma20 > sma50 {
            tally.add_bullish(10.0);
            if price > sma20 {
                tally.add_bullish_reason(10.0, "Golden cross with price above SMA20".to_string());
            }
        } else {
            tally.add_bearish(10.0);
            if price < sma20 {
                tally.add_bearish_reason(10.0, "Death cross with price below SMA20".to_string());
            }
        }
    }

    if let Some(bands) = &snapshot.bollinger {
        if let Some(pb) = percent_b(price, bands) {
            if pb < 0.1 {
                tally.add_bullish_reason(12.0, "Price at lower Bollinger Band".to_string());
            } else if pb > 0.9 {
                tally.add_bearish_reason(12.0, "Price at upper Bollinger Band".to_string());
            } else if pb < 0.3 {
                tally.add_bullish(6.0);
            } else if pb > 0.7 {
                tally.add_bearish(6.0);
            }
        }
    }

    if let Some(stoch) = snapshot.stochastic {
        if stoch.k < 20.0 && stoch.d < 20.0 {
            tally.add_bullish_reason(10.0, "Stochastic oversold".to_string());
        } else if stoch.k > 80.0 && stoch.d > 80.0 {
            tally.add_bearish_reason(10.0, "Stochastic overbought".to_string());
        } else if stoch.k > stoch.d && stoch.k < 30.0 {
            tally.add_bullish(5.0);
        } else if stoch.k < stoch.d && stoch.k > 70.0 {
            tally.add_bearish(5.0);
        }
    }

    // ADX measures trend strength, not direction: it amplifies whichever
    // side is already ahead at this point in the rule order.
    if let Some(adx) = snapshot.adx {
        if adx > 25.0 {
            let reason = format!("Strong trend (ADX: {adx:.1})");
            if tally.bullish_leads() {
                tally.add_bullish_reason(8.0, reason);
            } else {
                tally.add_bearish_reason(8.0, reason);
            }
        }
    }

    if let Some(cci) = snapshot.cci {
        if cci < -100.0 {
            tally.add_bullish(8.0);
        } else if cci > 100.0 {
            tally.add_bearish(8.0);
        }
    }

    if let Some(wr) = snapshot.williams_r {
        if wr < -80.0 {
            tally.add_bullish(5.0);
        } else if wr > -20.0 {
            tally.add_bearish(5.0);
        }
    }

    if let Some(mfi) = snapshot.mfi {
        if mfi < 20.0 {
            tally.add_bullish_reason(8.0, format!("MFI oversold ({mfi:.1})"));
        } else if mfi > 80.0 {
            tally.add_bearish_reason(8.0, format!("MFI overbought ({mfi:.1})"));
        }
    }
}

/// Apply pattern contributions: strength scales linearly to points, rounded
/// to the nearest whole point, on the pattern's side. Neutral formations
/// contribute nothing.
pub fn score_patterns(tally: &mut Tally, patterns: &[PatternMatch]) {
    for pattern in patterns {
        let points = (pattern.strength / 100.0 * PATTERN_POINT_SCALE).round();
        let reason = format!("{}: {}", pattern.kind.name(), pattern.description);
        match pattern.direction {
            PatternDirection::Bullish => tally.add_bullish_reason(points, reason),
            PatternDirection::Bearish => tally.add_bearish_reason(points, reason),
            PatternDirection::Neutral => {}
        }
    }
}
