//! Money Flow Index (MFI).
//!
//! Volume-weighted RSI analogue. Raw money flow is typical price times
//! volume; each bar's flow counts as positive or negative by the sign of
//! its typical-price change, and an unchanged typical price feeds neither
//! side. Zero negative flow reads as 100. Needs `period + 1` bars (the
//! oldest bar only supplies the reference typical price).

use crate::domain::Bar;

/// MFI in [0, 100], `None` below `period + 1` bars.
pub fn mfi(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }
    let mut positive = 0.0;
    let mut negative = 0.0;
    for i in bars.len() - period..bars.len() {
        let tp = bars[i].typical_price();
        let prev_tp = bars[i - 1].typical_price();
        let flow = tp * bars[i].volume;
        if tp > prev_tp {
            positive += flow;
        } else if tp < prev_tp {
            negative += flow;
        }
    }
    if negative == 0.0 {
        return Some(100.0);
    }
    Some(100.0 - 100.0 / (1.0 + positive / negative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, make_ohlc_bars};

    #[test]
    fn all_inflow_pins_to_hundred() {
        let closes: Vec<f64> = (1..=20).map(|i| i as f64 * 10.0).collect();
        assert_eq!(mfi(&make_bars(&closes), 14), Some(100.0));
    }

    #[test]
    fn all_outflow_pins_to_zero() {
        let closes: Vec<f64> = (1..=20).rev().map(|i| i as f64 * 10.0).collect();
        assert_approx(mfi(&make_bars(&closes), 14).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn flat_series_reads_as_hundred() {
        // ties feed neither side, so negative flow stays zero
        let bars = make_ohlc_bars(&[(5.0, 5.0, 5.0, 5.0); 20]);
        assert_eq!(mfi(&bars, 14), Some(100.0));
    }

    #[test]
    fn mixed_flows_hand_computed() {
        // typical prices 10, 11, 9, 12 with volume 1000 everywhere:
        // positive flow 11000 + 12000, negative flow 9000
        // MFI = 100 - 100 / (1 + 23/9) = 71.875
        let bars = make_ohlc_bars(&[
            (10.0, 10.5, 9.5, 10.0),
            (11.0, 11.5, 10.5, 11.0),
            (9.0, 9.5, 8.5, 9.0),
            (12.0, 12.5, 11.5, 12.0),
        ]);
        assert_approx(mfi(&bars, 3).unwrap(), 71.875, 1e-9);
    }

    #[test]
    fn needs_period_plus_one() {
        let bars = make_ohlc_bars(&[(5.0, 6.0, 4.0, 5.0); 14]);
        assert!(mfi(&bars, 14).is_none());
        assert!(mfi(&bars, 0).is_none());
    }
}
