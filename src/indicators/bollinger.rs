//! Bollinger Bands.
//!
//! SMA core with an envelope of `multiplier` population standard deviations
//! computed over the same window. `width` expresses the band spread as a
//! percent of the middle band and doubles as a volatility proxy downstream.

use serde::{Deserialize, Serialize};

use super::sma::sma;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// `(upper - lower) / middle * 100`.
    pub width: f64,
}

/// Bands over the trailing `period` prices, `None` when fewer exist.
pub fn bollinger_bands(prices: &[f64], period: usize, multiplier: f64) -> Option<BollingerBands> {
    let middle = sma(prices, period)?;
    let window = &prices[prices.len() - period..];
    let variance = window
        .iter()
        .map(|price| {
            let d = price - middle;
            d * d
        })
        .sum::<f64>()
        / period as f64;
    let offset = multiplier * variance.sqrt();
    let upper = middle + offset;
    let lower = middle - offset;
    Some(BollingerBands {
        upper,
        middle,
        lower,
        width: (upper - lower) / middle * 100.0,
    })
}

/// Position of `price` inside the band on a 0..1 scale; `None` when the
/// band has collapsed to zero width (constant window).
pub fn percent_b(price: f64, bands: &BollingerBands) -> Option<f64> {
    let span = bands.upper - bands.lower;
    if span == 0.0 {
        return None;
    }
    Some((price - bands.lower) / span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn known_window() {
        // window [10, 11, 12, 13, 14]: mean 12, population variance 2
        let prices = [99.0, 42.0, 10.0, 11.0, 12.0, 13.0, 14.0];
        let bands = bollinger_bands(&prices, 5, 2.0).unwrap();
        let sigma = 2.0_f64.sqrt();
        assert_approx(bands.middle, 12.0, DEFAULT_EPSILON);
        assert_approx(bands.upper, 12.0 + 2.0 * sigma, DEFAULT_EPSILON);
        assert_approx(bands.lower, 12.0 - 2.0 * sigma, DEFAULT_EPSILON);
        assert_approx(bands.width, 4.0 * sigma / 12.0 * 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn constant_window_collapses() {
        let prices = [7.0; 20];
        let bands = bollinger_bands(&prices, 20, 2.0).unwrap();
        assert_eq!(bands.upper, 7.0);
        assert_eq!(bands.lower, 7.0);
        assert_eq!(bands.width, 0.0);
    }

    #[test]
    fn band_ordering() {
        let prices = [10.0, 14.0, 9.0, 13.0, 11.0, 12.0];
        let bands = bollinger_bands(&prices, 5, 2.0).unwrap();
        assert!(bands.lower < bands.middle);
        assert!(bands.middle < bands.upper);
    }

    #[test]
    fn percent_b_placement() {
        let bands = BollingerBands {
            upper: 110.0,
            middle: 100.0,
            lower: 90.0,
            width: 20.0,
        };
        assert_approx(percent_b(100.0, &bands).unwrap(), 0.5, DEFAULT_EPSILON);
        assert_approx(percent_b(90.0, &bands).unwrap(), 0.0, DEFAULT_EPSILON);
        assert_approx(percent_b(112.0, &bands).unwrap(), 1.1, DEFAULT_EPSILON);
    }

    #[test]
    fn percent_b_undefined_on_collapsed_band() {
        let bands = BollingerBands {
            upper: 100.0,
            middle: 100.0,
            lower: 100.0,
            width: 0.0,
        };
        assert_eq!(percent_b(100.0, &bands), None);
    }

    #[test]
    fn insufficient_history_is_none() {
        assert!(bollinger_bands(&[1.0, 2.0], 5, 2.0).is_none());
    }
}
