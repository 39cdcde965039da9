//! Williams %R.
//!
//! Distance of the last close from the trailing high, on an inverted
//! 0..-100 scale. Reads -50 on a zero-range window. On any non-degenerate
//! window it equals stochastic %K minus 100.

use crate::domain::Bar;

/// %R in [-100, 0], `None` below `period` bars.
pub fn williams_r(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period {
        return None;
    }
    let window = &bars[bars.len() - period..];
    let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    if highest == lowest {
        return Some(-50.0);
    }
    let close = bars[bars.len() - 1].close;
    Some((highest - close) / (highest - lowest) * -100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_bars, stochastic, DEFAULT_EPSILON};

    #[test]
    fn distance_from_trailing_high() {
        let bars = make_ohlc_bars(&[
            (9.0, 10.0, 8.0, 9.0),
            (10.0, 11.0, 9.0, 10.0),
            (11.0, 12.0, 10.0, 11.0),
            (12.0, 13.0, 11.0, 12.0),
            (12.5, 14.0, 12.0, 13.0),
        ]);
        // window range [10, 14], close 13
        assert_approx(williams_r(&bars, 3).unwrap(), -25.0, DEFAULT_EPSILON);
    }

    #[test]
    fn close_at_high_is_zero_at_low_is_minus_hundred() {
        let top = make_ohlc_bars(&[(9.0, 12.0, 8.0, 12.0), (10.0, 12.0, 9.0, 12.0)]);
        assert_approx(williams_r(&top, 2).unwrap(), 0.0, DEFAULT_EPSILON);

        let bottom = make_ohlc_bars(&[(9.0, 12.0, 8.0, 9.0), (10.0, 12.0, 8.0, 8.0)]);
        assert_approx(williams_r(&bottom, 2).unwrap(), -100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn zero_range_reads_midpoint() {
        let bars = make_ohlc_bars(&[(5.0, 5.0, 5.0, 5.0); 14]);
        assert_eq!(williams_r(&bars, 14), Some(-50.0));
    }

    #[test]
    fn mirrors_stochastic_k() {
        let bars = make_ohlc_bars(&[
            (10.0, 15.0, 9.0, 14.0),
            (14.0, 16.0, 12.0, 13.0),
            (13.0, 14.0, 10.0, 10.5),
            (10.5, 12.0, 10.0, 11.0),
        ]);
        let wr = williams_r(&bars, 4).unwrap();
        let k = stochastic(&bars, 4).unwrap().k;
        assert_approx(wr, k - 100.0, 1e-9);
    }

    #[test]
    fn insufficient_history_is_none() {
        let bars = make_ohlc_bars(&[(5.0, 6.0, 4.0, 5.0); 3]);
        assert!(williams_r(&bars, 14).is_none());
        assert!(williams_r(&bars, 0).is_none());
    }
}
