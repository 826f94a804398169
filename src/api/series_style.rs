use serde::Serialize;

use crate::core::{FilterSelection, MpgMetric, series_key};
use crate::render::{Color, LineStrokeStyle};

/// One drawable line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub model: String,
    pub metric: MpgMetric,
    /// Column of [`crate::core::ChartRow`] holding this series' values.
    pub key: String,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

#[must_use]
pub fn stroke_style_for(metric: MpgMetric) -> LineStrokeStyle {
    match metric {
        MpgMetric::City => LineStrokeStyle::Solid,
        MpgMetric::Highway => LineStrokeStyle::Dashed,
        MpgMetric::Combined => LineStrokeStyle::Dotted,
    }
}

/// Resolves the series to draw for the current selection.
///
/// Only explicitly selected models get lines, so an empty selection draws
/// none even though the table then lists every record. A model's color is
/// picked by its position in `models`, so colors stay put while other models
/// are toggled.
#[must_use]
pub fn visible_series(
    models: &[String],
    selection: &FilterSelection,
    metrics: &[MpgMetric],
    palette: &[Color],
) -> Vec<ChartSeries> {
    if palette.is_empty() {
        return Vec::new();
    }

    models
        .iter()
        .enumerate()
        .filter(|(_, model)| selection.is_selected(model))
        .flat_map(|(index, model)| {
            let color = palette[index % palette.len()];
            metrics.iter().map(move |metric| ChartSeries {
                model: model.clone(),
                metric: *metric,
                key: series_key(model, *metric),
                color,
                stroke_style: stroke_style_for(*metric),
            })
        })
        .collect()
}
