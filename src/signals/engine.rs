//! Indicator and signal engine: bars in, annotated frame out.

use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use crate::indicators::trend::{calculate_ema, ema_cross, EMA_FAST_PERIOD, EMA_SLOW_PERIOD};
use crate::indicators::volume::{calculate_vwap, VwapAnchor};
use crate::models::bar::Bar;
use crate::models::indicators::{AnnotatedBar, IndicatorFrame, IndicatorValues};
use crate::signals::rules::derive_signal;

/// Number of most recent bars handed to consumers.
pub const OUTPUT_BARS: usize = 200;

/// Stateless; a single engine can serve concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine {
    vwap_anchor: VwapAnchor,
}

impl SignalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vwap_anchor(mut self, anchor: VwapAnchor) -> Self {
        self.vwap_anchor = anchor;
        self
    }

    /// Compute every indicator over the full series and label each bar.
    pub fn annotate(&self, bars: &[Bar]) -> IndicatorFrame {
        if bars.is_empty() {
            return IndicatorFrame::default();
        }

        let rsi = calculate_rsi_default(bars);
        let ema_fast = calculate_ema(bars, EMA_FAST_PERIOD);
        let ema_slow = calculate_ema(bars, EMA_SLOW_PERIOD);
        let cross = ema_cross(&ema_fast, &ema_slow);
        let macd = calculate_macd_default(bars);
        let vwap = calculate_vwap(bars, self.vwap_anchor);

        let values: Vec<IndicatorValues> = (0..bars.len())
            .map(|i| IndicatorValues {
                rsi: rsi[i],
                ema_fast: ema_fast[i],
                ema_slow: ema_slow[i],
                macd: macd.macd[i],
                macd_signal: macd.signal[i],
                macd_hist: macd.histogram[i],
                vwap: vwap[i],
                cross: cross[i],
            })
            .collect();

        let annotated = bars
            .iter()
            .zip(&values)
            .enumerate()
            .map(|(i, (bar, current))| {
                let previous = i.checked_sub(1).map(|p| &values[p]);
                AnnotatedBar::new(bar, *current, derive_signal(current, previous))
            })
            .collect();

        IndicatorFrame::new(annotated)
    }

    /// Annotate, then keep the most recent [`OUTPUT_BARS`] bars.
    pub fn annotate_tail(&self, bars: &[Bar]) -> IndicatorFrame {
        self.annotate(bars).tail(OUTPUT_BARS)
    }
}

/// [`SignalEngine::annotate`] with the default session-anchored VWAP.
pub fn annotate(bars: &[Bar]) -> IndicatorFrame {
    SignalEngine::default().annotate(bars)
}
