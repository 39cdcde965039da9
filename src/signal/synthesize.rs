//! Top-level synthesis: one bar series in, one trading signal out.
//!
//! Pure and total over any slice of sane bars: no I/O, no randomness, no
//! shared state, no panics on short or degenerate history. The same series
//! always yields the same signal.

use crate::domain::Bar;
use crate::patterns;

use super::regime::{trend_strength, volatility_score};
use super::score::{score_indicators, score_patterns, Tally};
use super::snapshot::IndicatorSnapshot;
use super::{SignalDirection, TradingSignal};

/// Stop distance when the series is too short for a real ATR: 2% of price.
const FALLBACK_ATR_FRACTION: f64 = 0.02;

/// Reward is asked to be 1.5x the risk distance.
const TARGET_STRETCH: f64 = 1.5;

/// Analyze a full bar series, oldest first, and synthesize the signal.
///
/// An empty series is answered with a neutral HOLD at price zero rather
/// than an error; upstreams treat "no data yet" as an ordinary state.
pub fn generate_signal(bars: &[Bar]) -> TradingSignal {
    let price = bars.last().map(|b| b.close).unwrap_or(0.0);
    let snapshot = IndicatorSnapshot::compute(bars);
    let patterns = patterns::detect(bars);

    let mut tally = Tally::new();
    score_indicators(&mut tally, &snapshot, price);
    score_patterns(&mut tally, &patterns);

    let direction = tally.direction();
    let confidence = tally.confidence();
    let trend = trend_strength(bars);
    let volatility = volatility_score(bars);

    let atr = snapshot.atr.unwrap_or(price * FALLBACK_ATR_FRACTION);
    let multiplier = if volatility > 60.0 {
        2.5
    } else if volatility > 40.0 {
        2.0
    } else {
        1.5
    };
    let (target_price, stop_loss) = match direction {
        SignalDirection::Buy => (price + atr * multiplier * TARGET_STRETCH, price - atr * multiplier),
        SignalDirection::Sell => (price - atr * multiplier * TARGET_STRETCH, price + atr * multiplier),
        SignalDirection::Hold => (price, price),
    };
    let risk = (price - stop_loss).abs();
    let risk_reward = if risk == 0.0 {
        0.0
    } else {
        (target_price - price).abs() / risk
    };

    TradingSignal {
        direction,
        confidence,
        reasons: tally.into_reasons(),
        target_price,
        stop_loss,
        risk_reward,
        indicators: snapshot,
        patterns,
        trend_strength: trend,
        volatility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::score::NO_CONSENSUS;

    #[test]
    fn empty_series_is_a_neutral_hold() {
        let signal = generate_signal(&[]);
        assert_eq!(signal.direction, SignalDirection::Hold);
        assert_eq!(signal.confidence, 50.0);
        assert_eq!(signal.reasons, vec![NO_CONSENSUS.to_string()]);
        assert_eq!(signal.target_price, 0.0);
        assert_eq!(signal.stop_loss, 0.0);
        assert_eq!(signal.risk_reward, 0.0);
        assert_eq!(signal.trend_strength, 50.0);
        assert_eq!(signal.volatility, 50.0);
        assert!(signal.patterns.is_empty());
        assert!(signal.indicators.rsi.is_none());
    }

    #[test]
    fn hold_pins_target_and_stop_to_price() {
        let bars = crate::indicators::make_bars(&[100.0, 101.0, 100.5, 101.5]);
        let signal = generate_signal(&bars);
        assert_eq!(signal.direction, SignalDirection::Hold);
        assert_eq!(signal.target_price, 101.5);
        assert_eq!(signal.stop_loss, 101.5);
        assert_eq!(signal.risk_reward, 0.0);
    }

    #[test]
    fn reward_is_one_and_a_half_times_risk_when_defined() {
        // a relentless slide reads as oversold on every oscillator, so the
        // scorer leans contrarian and calls a BUY
        let closes: Vec<f64> = (0..40).map(|i| 300.0 - 2.0 * i as f64).collect();
        let signal = generate_signal(&crate::indicators::make_bars(&closes));
        assert_eq!(signal.direction, SignalDirection::Buy);
        assert_eq!(signal.confidence, 95.0);
        assert!((signal.risk_reward - 1.5).abs() < 1e-9);
        // BUY geometry: target above price, stop below
        assert!(signal.target_price > closes[39]);
        assert!(signal.stop_loss < closes[39]);
    }
}
