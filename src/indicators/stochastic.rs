//! Stochastic oscillator (%K / %D).
//!
//! %K places the last close inside the trailing `period` high-low range,
//! reading 50 when the range is zero. %D is the mean of the last up-to-3
//! %K values, each recomputed with its window ending at that position.

use serde::{Deserialize, Serialize};

use crate::domain::Bar;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stochastic {
    pub k: f64,
    pub d: f64,
}

// Caller guarantees bars.len() >= period >= 1.
fn percent_k(bars: &[Bar], period: usize) -> f64 {
    let window = &bars[bars.len() - period..];
    let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    if highest == lowest {
        return 50.0;
    }
    let close = bars[bars.len() - 1].close;
    (close - lowest) / (highest - lowest) * 100.0
}

/// %K and %D at the last bar, `None` below `period` bars.
pub fn stochastic(bars: &[Bar], period: usize) -> Option<Stochastic> {
    if period == 0 || bars.len() < period {
        return None;
    }
    let k = percent_k(bars, period);
    let positions = (bars.len() - period + 1).min(3);
    let mut sum = 0.0;
    for back in 0..positions {
        sum += percent_k(&bars[..bars.len() - back], period);
    }
    Some(Stochastic {
        k,
        d: sum / positions as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_bars, DEFAULT_EPSILON};

    #[test]
    fn places_close_in_range() {
        let bars = make_ohlc_bars(&[
            (9.0, 10.0, 8.0, 9.0),
            (10.0, 11.0, 9.0, 10.0),
            (11.0, 12.0, 10.0, 11.0),
            (12.0, 13.0, 11.0, 12.0),
            (12.5, 14.0, 12.0, 12.5),
        ]);
        let s = stochastic(&bars, 3).unwrap();
        // window highs 12..14, lows 10..12: range [10, 14], close 12.5
        assert_approx(s.k, 62.5, DEFAULT_EPSILON);
        // previous two positions both read 75
        assert_approx(s.d, (62.5 + 75.0 + 75.0) / 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn zero_range_reads_midpoint() {
        let bars = make_ohlc_bars(&[(5.0, 5.0, 5.0, 5.0); 16]);
        let s = stochastic(&bars, 14).unwrap();
        assert_eq!(s.k, 50.0);
        assert_eq!(s.d, 50.0);
    }

    #[test]
    fn d_averages_what_exists() {
        // exactly period bars: a single window position, so %D == %K
        let bars = make_ohlc_bars(&[
            (9.0, 10.0, 8.0, 9.0),
            (10.0, 11.0, 9.0, 10.0),
            (11.0, 12.0, 10.0, 11.5),
        ]);
        let s = stochastic(&bars, 3).unwrap();
        assert_approx(s.k, (11.5 - 8.0) / (12.0 - 8.0) * 100.0, DEFAULT_EPSILON);
        assert_eq!(s.k, s.d);
    }

    #[test]
    fn bounded_for_sane_bars() {
        let bars = make_ohlc_bars(&[
            (10.0, 15.0, 9.0, 14.0),
            (14.0, 16.0, 12.0, 13.0),
            (13.0, 14.0, 10.0, 10.5),
            (10.5, 12.0, 10.0, 11.0),
        ]);
        let s = stochastic(&bars, 4).unwrap();
        assert!((0.0..=100.0).contains(&s.k));
        assert!((0.0..=100.0).contains(&s.d));
    }

    #[test]
    fn insufficient_history_is_none() {
        let bars = make_ohlc_bars(&[(5.0, 6.0, 4.0, 5.0); 3]);
        assert!(stochastic(&bars, 14).is_none());
        assert!(stochastic(&bars, 0).is_none());
        assert!(stochastic(&[], 14).is_none());
    }
}
