//! The per-bar indicator snapshot feeding scoring and callers alike.

use serde::{Deserialize, Serialize};

use crate::domain::Bar;
use crate::indicators::{
    adx, atr, bollinger_bands, cci, ema, macd, mfi, obv, rsi, sma, stochastic, vwap, williams_r,
    BollingerBands, Macd, Stochastic,
};

/// Every indicator the engine computes, evaluated as of the last bar of the
/// series. A field is `None` when the series is shorter than that
/// indicator's lookback; absence is never encoded as NaN or a sentinel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: Option<f64>,
    pub macd: Option<Macd>,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub ema9: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub bollinger: Option<BollingerBands>,
    pub atr: Option<f64>,
    pub vwap: Option<f64>,
    pub stochastic: Option<Stochastic>,
    pub obv: Option<f64>,
    pub adx: Option<f64>,
    pub cci: Option<f64>,
    pub williams_r: Option<f64>,
    pub mfi: Option<f64>,
}

impl IndicatorSnapshot {
    /// Compute the full snapshot. Standard periods throughout: 14 for the
    /// oscillators and ATR, 20 for Bollinger and CCI, 12/26/9 for MACD.
    pub fn compute(bars: &[Bar]) -> Self {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        Self {
            rsi: rsi(&closes, 14),
            macd: macd(&closes),
            sma20: sma(&closes, 20),
            sma50: sma(&closes, 50),
            sma200: sma(&closes, 200),
            ema9: ema(&closes, 9),
            ema12: ema(&closes, 12),
            ema26: ema(&closes, 26),
            bollinger: bollinger_bands(&closes, 20, 2.0),
            atr: atr(bars, 14),
            vwap: vwap(bars),
            stochastic: stochastic(bars, 14),
            obv: obv(bars),
            adx: adx(bars, 14),
            cci: cci(bars, 20),
            williams_r: williams_r(bars, 14),
            mfi: mfi(bars, 14),
        }
    }
}
