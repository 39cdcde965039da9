//! Regime scores: trend strength and volatility on a 0..100 scale.
//!
//! Both are context for the signal, not inputs to the directional score.
//! Volatility does feed position geometry: the ATR multiplier behind the
//! target and stop widens with it.

use crate::domain::Bar;
use crate::indicators::{atr, sma};

/// Trend-strength score. Reads a neutral 50 below 20 bars. Above that,
/// starts at 50 and moves on four terms: price against SMA20 (±15), price
/// against SMA50 (±10; the longest available SMA stands in below 50 bars),
/// SMA20 against SMA50 (±10), and the percent change over the last 10 bars
/// times 3, clamped to ±15. Ties on the comparisons count negative.
pub fn trend_strength(bars: &[Bar]) -> f64 {
    if bars.len() < 20 {
        return 50.0;
    }
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let price = closes[closes.len() - 1];
    let mut score = 50.0;

    if let Some(sma20) = sma(&closes, 20) {
        score += if price > sma20 { 15.0 } else { -15.0 };

        if let Some(sma50) = sma(&closes, closes.len().min(50)) {
            score += if price > sma50 { 10.0 } else { -10.0 };
            score += if sma20 > sma50 { 10.0 } else { -10.0 };
        }
    }

    let base = closes[closes.len() - 11];
    let momentum = (price - base) / base * 100.0;
    score += (momentum * 3.0).clamp(-15.0, 15.0);

    score.clamp(0.0, 100.0)
}

/// Volatility score: ATR(14) as a percent of the last close, scaled so a 2%
/// ATR reads 50, clamped to [0, 100]. Neutral 50 below 14 bars of history
/// or whenever ATR is unavailable.
pub fn volatility_score(bars: &[Bar]) -> f64 {
    if bars.len() < 14 {
        return 50.0;
    }
    let close = bars[bars.len() - 1].close;
    match atr(bars, 14) {
        Some(atr) if close > 0.0 => (atr / close * 100.0 * 25.0).clamp(0.0, 100.0),
        _ => 50.0,
    }
}
