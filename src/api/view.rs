use serde::Serialize;
use tracing::debug;

use crate::core::{
    ChartProjector, ChartRow, FilterSelection, FuelDataset, FuelRecord, filter_records,
};
use crate::render::Color;

use super::series_style::{ChartSeries, visible_series};

/// Views derived from the dataset and the current selection.
///
/// Rebuilt from scratch on every state change; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub filtered: Vec<FuelRecord>,
    pub chart_rows: Vec<ChartRow>,
    pub series: Vec<ChartSeries>,
}

impl DashboardView {
    #[must_use]
    pub fn derive(
        dataset: &FuelDataset,
        selection: &FilterSelection,
        projector: &ChartProjector,
        palette: &[Color],
    ) -> Self {
        let filtered = filter_records(dataset.records(), selection);
        let chart_rows = projector.project(filtered.iter().copied());
        let series = visible_series(
            projector.models(),
            selection,
            projector.metrics(),
            palette,
        );

        debug!(
            selected = selection.len(),
            filtered = filtered.len(),
            chart_rows = chart_rows.len(),
            series = series.len(),
            "recomputed dashboard view"
        );

        Self {
            selection: selection.clone(),
            filtered: filtered.into_iter().cloned().collect(),
            chart_rows,
            series,
        }
    }
}
