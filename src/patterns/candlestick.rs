//! Rules for the recognized candlestick formations.
//!
//! The detector looks only at the trailing bars: one for the single-candle
//! shapes, two for the engulfings, three for the morning star. It reports
//! nothing below five bars of context, and one bar may satisfy several
//! rules at once, in which case every match is returned in rule order.

use crate::domain::Bar;

use super::{PatternDirection, PatternKind, PatternMatch};

const MIN_BARS: usize = 5;

/// Detect formations ending at the last bar of the series.
pub fn detect(bars: &[Bar]) -> Vec<PatternMatch> {
    if bars.len() < MIN_BARS {
        return Vec::new();
    }
    let last = &bars[bars.len() - 1];
    let prev = &bars[bars.len() - 2];
    let third = &bars[bars.len() - 3];

    let mut matches = Vec::new();
    let mut push = |kind: PatternKind, direction: PatternDirection, strength: f64, description: &str| {
        matches.push(PatternMatch {
            kind,
            direction,
            strength,
            description: description.to_string(),
        });
    };

    if is_doji(last) {
        push(
            PatternKind::Doji,
            PatternDirection::Neutral,
            70.0,
            "Open and close nearly equal - market indecision",
        );
    }
    if is_hammer(last) {
        push(
            PatternKind::Hammer,
            PatternDirection::Bullish,
            75.0,
            "Long lower shadow with a bullish close - buyers stepped in",
        );
    }
    if is_shooting_star(last) {
        push(
            PatternKind::ShootingStar,
            PatternDirection::Bearish,
            75.0,
            "Long upper shadow with a bearish close - sellers took control",
        );
    }
    if is_bullish_engulfing(prev, last) {
        push(
            PatternKind::BullishEngulfing,
            PatternDirection::Bullish,
            80.0,
            "Bullish body engulfs the prior bearish body",
        );
    }
    if is_bearish_engulfing(prev, last) {
        push(
            PatternKind::BearishEngulfing,
            PatternDirection::Bearish,
            80.0,
            "Bearish body engulfs the prior bullish body",
        );
    }
    if is_morning_star(third, prev, last) {
        push(
            PatternKind::MorningStar,
            PatternDirection::Bullish,
            85.0,
            "Bearish candle, small-bodied pause, then a bullish close above the first body's midpoint",
        );
    }
    matches
}

// A body under 10% of the bar range. A zero-range bar never qualifies.
fn is_doji(bar: &Bar) -> bool {
    bar.body() < bar.range() * 0.1
}

fn is_hammer(bar: &Bar) -> bool {
    bar.is_bullish() && bar.lower_wick() > bar.body() * 2.0 && bar.upper_wick() < bar.body() * 0.5
}

fn is_shooting_star(bar: &Bar) -> bool {
    bar.is_bearish() && bar.upper_wick() > bar.body() * 2.0 && bar.lower_wick() < bar.body() * 0.5
}

// Strict containment of the prior body on both ends.
fn is_bullish_engulfing(prev: &Bar, current: &Bar) -> bool {
    current.is_bullish() && prev.is_bearish() && current.open < prev.close && current.close > prev.open
}

fn is_bearish_engulfing(prev: &Bar, current: &Bar) -> bool {
    current.is_bearish() && prev.is_bullish() && current.open > prev.close && current.close < prev.open
}

fn is_morning_star(first: &Bar, middle: &Bar, last: &Bar) -> bool {
    first.is_bearish()
        && middle.body() < first.range() * 0.3
        && last.is_bullish()
        && last.close > (first.open + first.close) / 2.0
}
