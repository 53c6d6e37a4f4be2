//! Text codec for chart configurations.
//!
//! Wire format (the only persisted surface — byte-stable for old configs):
//!
//! ```text
//! type:price;logScale:true;overlays:[SMA(50),BAND(20,2)]
//! ```
//!
//! - Fields split by `;`, key/value split once on the first `:`.
//! - Pieces that don't split are silently skipped — deliberate leniency so
//!   configs persisted by newer/older versions still load.
//! - The overlay list is bracket-delimited; entries are recombined on the
//!   exact `"),"` boundary because entry parameter lists use commas too.
//!   A parameter value therefore must never contain the literal `"),"`.
//! - Emit order: `type`, the base type's own fields (only when they differ
//!   from defaults), then `overlays` last and only when non-empty.

use std::collections::HashMap;

use crate::functions::Function;

use super::chart::{ChartBase, ChartError, StockChart};
use super::colors::ChartColors;

impl StockChart {
    /// Encode to the compact wire string.
    pub fn serialize(&self) -> String {
        let mut result = format!("type:{}", self.base().type_token());

        for (key, value) in self.serialized_params() {
            result.push_str(&format!(";{key}:{value}"));
        }

        if self.overlay_count() > 0 {
            let entries: Vec<String> = self.overlays().iter().map(Function::serialize).collect();
            result.push_str(&format!(";overlays:[{}]", entries.join(",")));
        }

        result
    }

    /// Decode a wire string produced by [`serialize`](Self::serialize).
    pub fn deserialize(text: &str, colors: ChartColors) -> Result<StockChart, ChartError> {
        let mut fields: HashMap<&str, &str> = HashMap::new();
        for piece in text.split(';') {
            // Tolerant parse: pieces without a key/value shape are skipped
            if let Some((key, value)) = piece.split_once(':') {
                fields.insert(key, value);
            }
        }

        let type_token = fields.get("type").copied().unwrap_or("");
        let mut chart = match type_token {
            "price" => StockChart::price(colors),
            "volume" => StockChart::volume(colors),
            "indicator" => {
                let entry = fields
                    .get("indicator")
                    .copied()
                    .ok_or(ChartError::MissingIndicator)?;
                let function = Function::deserialize(entry)?;
                StockChart::indicator(function, colors)?
            }
            other => return Err(ChartError::UnknownChartType(other.to_string())),
        };

        if let Some(list) = fields.get("overlays") {
            let inner = list.trim_start_matches('[').trim_end_matches(']');
            for entry in split_overlay_entries(inner) {
                chart.add_overlay(Function::deserialize(&entry)?)?;
            }
        }

        chart.apply_serialized_params(&fields);
        Ok(chart)
    }

    /// Base-type-specific fields in their declared emit order. Defaults are
    /// omitted so canonical configs stay minimal.
    fn serialized_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        match self.base() {
            ChartBase::Price {
                log_scale,
                candle_data,
            } => {
                if *log_scale {
                    params.push(("logScale", "true".to_string()));
                }
                if *candle_data {
                    params.push(("candleData", "true".to_string()));
                }
            }
            ChartBase::Volume { log_scale } => {
                if *log_scale {
                    params.push(("logScale", "true".to_string()));
                }
            }
            ChartBase::Indicator(function) => {
                params.push(("indicator", function.serialize()));
            }
        }
        params
    }

    /// Apply decoded base-type fields. Unknown keys and unparseable values
    /// are ignored, mirroring the tolerant field split.
    fn apply_serialized_params(&mut self, fields: &HashMap<&str, &str>) {
        if let Some(value) = fields.get("logScale").and_then(|v| v.parse().ok()) {
            self.set_log_scale(value);
        }
        if let Some(value) = fields.get("candleData").and_then(|v| v.parse().ok()) {
            self.set_candle_data(value);
        }
    }
}

/// Split a bracket-stripped overlay list into entries.
///
/// Entries are joined with `,`, but parameter lists inside entries use `,`
/// too — the unambiguous boundary is a close paren directly followed by a
/// comma.
fn split_overlay_entries(inner: &str) -> Vec<String> {
    if inner.is_empty() {
        return Vec::new();
    }
    let mut entries: Vec<String> = inner.split("),").map(str::to_string).collect();
    let last = entries.len() - 1;
    for entry in &mut entries[..last] {
        entry.push(')');
    }
    entries
}
