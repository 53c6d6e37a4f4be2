//! The chart configuration model — base type, overlay list, color cursor.

use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;
use crate::functions::{Function, FunctionError, FunctionKind};
use crate::indicators::ValueSeries;

use super::colors::{ChartColors, Color};
use super::data_set::DataSet;

/// Errors raised by the chart model and its text codec.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unknown chart type: {0:?}")]
    UnknownChartType(String),
    #[error("indicator chart is missing its indicator field")]
    MissingIndicator,
    #[error("{0} is not overlay-capable")]
    InvalidOverlayCapability(FunctionKind),
    #[error("{0} is not indicator-capable")]
    NotAnIndicator(FunctionKind),
    #[error("overlay index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("unsupported result shape: {0} bands")]
    UnsupportedResultShape(usize),
    #[error(transparent)]
    Function(#[from] FunctionError),
}

/// What the chart draws as its base series, plus type-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartBase {
    Price { log_scale: bool, candle_data: bool },
    Volume { log_scale: bool },
    Indicator(Function),
}

impl ChartBase {
    /// Wire token for the `type` field.
    pub fn type_token(&self) -> &'static str {
        match self {
            ChartBase::Price { .. } => "price",
            ChartBase::Volume { .. } => "volume",
            ChartBase::Indicator(_) => "indicator",
        }
    }
}

/// A configurable chart: a base series decorated with ordered overlays.
///
/// The color cursor is deliberately not part of the persisted or cloned
/// state — colors are recomputed from scratch for a fresh chart, so both
/// `Clone` and serde restore it to zero.
#[derive(Debug, Serialize, Deserialize)]
pub struct StockChart {
    base: ChartBase,
    overlays: Vec<Function>,
    colors: ChartColors,
    #[serde(skip)]
    next_color: usize,
}

impl Clone for StockChart {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            overlays: self.overlays.clone(),
            colors: self.colors.clone(),
            next_color: 0,
        }
    }
}

impl StockChart {
    /// Price chart with default settings (linear scale, line rendering).
    pub fn price(colors: ChartColors) -> Self {
        Self {
            base: ChartBase::Price {
                log_scale: false,
                candle_data: false,
            },
            overlays: Vec::new(),
            colors,
            next_color: 0,
        }
    }

    /// Volume chart with default settings.
    pub fn volume(colors: ChartColors) -> Self {
        Self {
            base: ChartBase::Volume { log_scale: false },
            overlays: Vec::new(),
            colors,
            next_color: 0,
        }
    }

    /// Chart whose base series is a standalone indicator.
    pub fn indicator(function: Function, colors: ChartColors) -> Result<Self, ChartError> {
        if !function.kind().is_indicator() {
            return Err(ChartError::NotAnIndicator(function.kind()));
        }
        Ok(Self {
            base: ChartBase::Indicator(function),
            overlays: Vec::new(),
            colors,
            next_color: 0,
        })
    }

    pub fn base(&self) -> &ChartBase {
        &self.base
    }

    pub fn colors(&self) -> &ChartColors {
        &self.colors
    }

    /// Set the log-scale flag. No-op on indicator charts, which have no
    /// scale setting.
    pub fn set_log_scale(&mut self, value: bool) {
        match &mut self.base {
            ChartBase::Price { log_scale, .. } | ChartBase::Volume { log_scale } => {
                *log_scale = value;
            }
            ChartBase::Indicator(_) => {}
        }
    }

    /// Set candle rendering. Only meaningful on price charts.
    pub fn set_candle_data(&mut self, value: bool) {
        if let ChartBase::Price { candle_data, .. } = &mut self.base {
            *candle_data = value;
        }
    }

    // ── Overlay list ─────────────────────────────────────────────────

    /// Append an overlay. Duplicates of the same kind are allowed; order is
    /// insertion order and drives color assignment and serialization.
    ///
    /// Returns `&mut self` so additions chain.
    pub fn add_overlay(&mut self, overlay: Function) -> Result<&mut Self, ChartError> {
        if !overlay.kind().is_overlay() {
            return Err(ChartError::InvalidOverlayCapability(overlay.kind()));
        }
        self.overlays.push(overlay);
        Ok(self)
    }

    /// Empty the overlay list. The color cursor is left where it is.
    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    pub fn overlay(&self, index: usize) -> Result<&Function, ChartError> {
        self.overlays.get(index).ok_or(ChartError::IndexOutOfBounds {
            index,
            len: self.overlays.len(),
        })
    }

    pub fn overlay_mut(&mut self, index: usize) -> Result<&mut Function, ChartError> {
        let len = self.overlays.len();
        self.overlays
            .get_mut(index)
            .ok_or(ChartError::IndexOutOfBounds { index, len })
    }

    pub fn overlays(&self) -> &[Function] {
        &self.overlays
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    // ── Color assignment ─────────────────────────────────────────────

    /// Next overlay color from the palette walk.
    ///
    /// The cursor advances on every read, including skipped reads. Colors
    /// equal to `ignore` are skipped unless `ignore` is [`Color::UNSET`].
    /// On volume charts a teal pick is replaced with purple, which sits too
    /// close to the volume default otherwise.
    pub fn next_color(&mut self, ignore: Color) -> Color {
        loop {
            let color = self.colors.overlay_color(self.next_color);
            self.next_color += 1;

            if color == ignore && ignore != Color::UNSET {
                continue;
            }

            if matches!(self.base, ChartBase::Volume { .. }) && color == self.colors.teal {
                return self.colors.purple;
            }

            return color;
        }
    }

    /// Rewind the palette walk. The only way the cursor ever decreases.
    pub fn reset_colors(&mut self) {
        self.next_color = 0;
    }

    // ── Rendering hand-off ───────────────────────────────────────────

    /// Produce the drawable data sets: base series first, then one or more
    /// sets per overlay in insertion order.
    ///
    /// Overlays on a volume chart are computed over the volume track;
    /// everything else evaluates over closes. Each call continues the
    /// palette walk — call [`reset_colors`](Self::reset_colors) first when
    /// re-rendering from scratch.
    pub fn data_sets(&mut self, series: &PriceSeries) -> Result<Vec<DataSet>, ChartError> {
        let primary = self.colors.primary;
        let track = match self.base {
            ChartBase::Volume { .. } => series.volumes(),
            _ => series.closes(),
        };

        let mut out = Vec::new();
        match &self.base {
            ChartBase::Price { .. } => {
                out.push(DataSet::line("Price", primary, track.clone()));
            }
            ChartBase::Volume { .. } => {
                out.push(DataSet::bars("Volume", primary, track.clone()));
            }
            ChartBase::Indicator(function) => {
                let (label, kind) = (function.label(), function.kind());
                let computed = function.eval(&track);
                self.shape_data_sets(label, kind, computed, primary, &mut out)?;
            }
        }

        for i in 0..self.overlays.len() {
            let (label, kind, computed) = {
                let overlay = &self.overlays[i];
                (overlay.label(), overlay.kind(), overlay.eval(&track))
            };
            self.shape_data_sets(label, kind, computed, primary, &mut out)?;
        }

        Ok(out)
    }

    /// Turn one computed series into data sets, consuming color slots per
    /// shape: single and banded take one slot, paired takes none (both
    /// tracks render in the primary placeholder color).
    fn shape_data_sets(
        &mut self,
        label: String,
        kind: FunctionKind,
        computed: ValueSeries,
        ignore: Color,
        out: &mut Vec<DataSet>,
    ) -> Result<(), ChartError> {
        match computed {
            ValueSeries::Single(values) => {
                let color = self.next_color(ignore);
                if kind == FunctionKind::Psar {
                    out.push(DataSet::dotted(label, color, values));
                } else {
                    out.push(DataSet::line(label, color, values));
                }
            }
            ValueSeries::Paired { first, second } => {
                let primary = self.colors.primary;
                out.push(DataSet::line(label.clone(), primary, first));
                out.push(DataSet::line(label, primary, second));
            }
            ValueSeries::Banded { bands } => {
                if !(2..=3).contains(&bands.len()) {
                    return Err(ChartError::UnsupportedResultShape(bands.len()));
                }
                let color = self.next_color(ignore);
                for band in bands {
                    out.push(DataSet::line(label.clone(), color, band));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> PriceSeries {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000.0 + i as f64,
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    fn sma(period: f64) -> Function {
        let mut f = FunctionKind::Sma.create();
        f.set_params(vec![period]).unwrap();
        f
    }

    #[test]
    fn add_overlay_chains_and_preserves_order() {
        let mut chart = StockChart::price(ChartColors::default());
        chart
            .add_overlay(sma(10.0))
            .unwrap()
            .add_overlay(sma(50.0))
            .unwrap();
        assert_eq!(chart.overlay_count(), 2);
        assert_eq!(chart.overlay(0).unwrap().params(), &[10.0]);
        assert_eq!(chart.overlay(1).unwrap().params(), &[50.0]);
    }

    #[test]
    fn duplicate_kinds_are_allowed() {
        let mut chart = StockChart::price(ChartColors::default());
        chart.add_overlay(sma(10.0)).unwrap();
        chart.add_overlay(sma(10.0)).unwrap();
        assert_eq!(chart.overlay_count(), 2);
    }

    #[test]
    fn indicator_kind_is_rejected_as_overlay() {
        let mut chart = StockChart::price(ChartColors::default());
        let err = chart.add_overlay(FunctionKind::Rsi.create()).unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidOverlayCapability(FunctionKind::Rsi)
        ));
    }

    #[test]
    fn overlay_kind_is_rejected_as_chart_base() {
        let err = StockChart::indicator(FunctionKind::Sma.create(), ChartColors::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::NotAnIndicator(FunctionKind::Sma)));
    }

    #[test]
    fn out_of_bounds_overlay_access_fails() {
        let chart = StockChart::price(ChartColors::default());
        let err = chart.overlay(0).unwrap_err();
        assert!(matches!(
            err,
            ChartError::IndexOutOfBounds { index: 0, len: 0 }
        ));
    }

    #[test]
    fn clear_overlays_keeps_the_cursor() {
        let mut chart = StockChart::price(ChartColors::default());
        chart.next_color(Color::UNSET);
        chart.next_color(Color::UNSET);
        chart.clear_overlays();
        let colors = ChartColors::default();
        assert_eq!(chart.next_color(Color::UNSET), colors.overlay_color(2));
    }

    #[test]
    fn fresh_cursor_walks_the_palette_in_order() {
        let mut chart = StockChart::price(ChartColors::default());
        let colors = ChartColors::default();
        for i in 0..3 {
            assert_eq!(chart.next_color(Color::UNSET), colors.overlay_color(i));
        }
        chart.reset_colors();
        assert_eq!(chart.next_color(Color::UNSET), colors.overlay_color(0));
    }

    #[test]
    fn ignore_color_is_skipped_but_still_advances_the_cursor() {
        let colors = ChartColors::default();
        let mut chart = StockChart::price(colors.clone());
        let skipped = colors.overlay_color(0);
        assert_eq!(chart.next_color(skipped), colors.overlay_color(1));
        // Cursor advanced past both the skipped entry and the returned one
        assert_eq!(chart.next_color(Color::UNSET), colors.overlay_color(2));
    }

    #[test]
    fn unset_ignore_skips_nothing() {
        let colors = ChartColors::default();
        let mut chart = StockChart::price(colors.clone());
        assert_eq!(chart.next_color(Color::UNSET), colors.overlay_color(0));
    }

    #[test]
    fn volume_chart_substitutes_teal_with_purple() {
        let colors = ChartColors::default();
        let mut chart = StockChart::volume(colors.clone());
        let walk: Vec<Color> = (0..colors.overlay_count())
            .map(|_| chart.next_color(Color::UNSET))
            .collect();
        assert!(!walk.contains(&colors.teal));
        assert!(walk.contains(&colors.purple));
    }

    #[test]
    fn price_chart_keeps_teal() {
        let colors = ChartColors::default();
        let mut chart = StockChart::price(colors.clone());
        let walk: Vec<Color> = (0..colors.overlay_count())
            .map(|_| chart.next_color(Color::UNSET))
            .collect();
        assert!(walk.contains(&colors.teal));
    }

    #[test]
    fn clone_copies_overlays_deeply_and_resets_the_cursor() {
        let colors = ChartColors::default();
        let mut chart = StockChart::price(colors.clone());
        chart.add_overlay(sma(10.0)).unwrap();
        chart.add_overlay(sma(50.0)).unwrap();
        chart.next_color(Color::UNSET);

        let mut copy = chart.clone();
        assert_eq!(copy.overlay_count(), 2);
        assert_eq!(copy.overlay(0).unwrap().params(), &[10.0]);

        // Clone starts a fresh palette walk even though the source advanced
        assert_eq!(copy.next_color(Color::UNSET), colors.overlay_color(0));

        // Mutating the clone's overlay leaves the original untouched
        copy.overlay_mut(0).unwrap().set_params(vec![99.0]).unwrap();
        assert_eq!(chart.overlay(0).unwrap().params(), &[10.0]);
    }

    #[test]
    fn price_data_sets_put_the_base_series_first() {
        let mut chart = StockChart::price(ChartColors::default());
        chart.add_overlay(sma(3.0)).unwrap();
        let sets = chart.data_sets(&series(&[10.0, 11.0, 12.0, 13.0, 14.0])).unwrap();

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].label, "Price");
        assert_eq!(sets[0].color, ChartColors::default().primary);
        assert_eq!(sets[1].label, "SMA 3");
        assert_eq!(sets[1].color, ChartColors::default().overlay_color(0));
    }

    #[test]
    fn band_overlay_emits_two_sets_sharing_one_color_slot() {
        let mut chart = StockChart::price(ChartColors::default());
        let mut band = FunctionKind::Band.create();
        band.set_params(vec![3.0, 2.0]).unwrap();
        chart.add_overlay(band).unwrap();
        chart.add_overlay(sma(3.0)).unwrap();

        let sets = chart.data_sets(&series(&[10.0, 11.0, 12.0, 13.0, 14.0])).unwrap();
        let colors = ChartColors::default();

        assert_eq!(sets.len(), 4); // price + upper + lower + sma
        assert_eq!(sets[1].color, colors.overlay_color(0));
        assert_eq!(sets[2].color, colors.overlay_color(0));
        assert_eq!(sets[1].label, sets[2].label);
        // The band consumed exactly one slot, so the SMA gets the next one
        assert_eq!(sets[3].color, colors.overlay_color(1));
    }

    #[test]
    fn psar_overlay_renders_dotted() {
        let mut chart = StockChart::price(ChartColors::default());
        chart.add_overlay(FunctionKind::Psar.create()).unwrap();
        let sets = chart.data_sets(&series(&[10.0, 11.0, 12.0, 13.0])).unwrap();
        assert_eq!(sets[1].line_type, super::super::data_set::LineType::Dotted);
    }

    #[test]
    fn macd_base_renders_paired_in_primary_without_consuming_colors() {
        let colors = ChartColors::default();
        let mut chart = StockChart::indicator(FunctionKind::Macd.create(), colors.clone()).unwrap();
        chart.add_overlay(sma(3.0)).unwrap();

        let closes: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let sets = chart.data_sets(&series(&closes)).unwrap();

        assert_eq!(sets.len(), 3); // macd line + signal + sma
        assert_eq!(sets[0].color, colors.primary);
        assert_eq!(sets[1].color, colors.primary);
        // Paired base took no slot: the overlay starts the walk at zero
        assert_eq!(sets[2].color, colors.overlay_color(0));
    }

    #[test]
    fn volume_overlays_compute_over_the_volume_track() {
        let mut chart = StockChart::volume(ChartColors::default());
        chart.add_overlay(sma(2.0)).unwrap();
        let sets = chart.data_sets(&series(&[10.0, 11.0, 12.0])).unwrap();

        // Volumes are 1000, 1001, 1002 — the SMA must be in that range,
        // nowhere near the closes.
        let sma_set = &sets[1];
        assert!(sma_set.values[2] > 999.0);
    }

    #[test]
    fn repeated_renders_keep_consuming_the_palette() {
        let colors = ChartColors::default();
        let mut chart = StockChart::price(colors.clone());
        chart.add_overlay(sma(2.0)).unwrap();
        let s = series(&[10.0, 11.0, 12.0]);

        let first = chart.data_sets(&s).unwrap();
        let second = chart.data_sets(&s).unwrap();
        assert_eq!(first[1].color, colors.overlay_color(0));
        assert_eq!(second[1].color, colors.overlay_color(1));

        chart.reset_colors();
        let third = chart.data_sets(&s).unwrap();
        assert_eq!(third[1].color, colors.overlay_color(0));
    }

    #[test]
    fn serde_round_trip_restarts_the_cursor() {
        let colors = ChartColors::default();
        let mut chart = StockChart::price(colors.clone());
        chart.add_overlay(sma(10.0)).unwrap();
        chart.next_color(Color::UNSET);

        let json = serde_json::to_string(&chart).unwrap();
        let mut restored: StockChart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.overlay_count(), 1);
        assert_eq!(restored.next_color(Color::UNSET), colors.overlay_color(0));
    }
}
