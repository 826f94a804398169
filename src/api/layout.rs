use crate::core::{Rect, Viewport};
use crate::error::{DashboardError, DashboardResult};

use super::DashboardLayoutConfig;
use super::table::DETAIL_COLUMNS;

/// Relative widths of the detail-table columns; sums to 1.
const COLUMN_WEIGHTS: [f64; DETAIL_COLUMNS.len()] = [0.12, 0.08, 0.11, 0.13, 0.14, 0.19, 0.23];

/// Resolved pixel geometry for one dashboard frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub chart_card: Rect,
    pub plot: Rect,
    /// Vertical center line of the chart header row.
    pub header_center_y: f64,
    pub legend_top: f64,
    pub table_card: Rect,
    pub table_header_top: f64,
    pub table_rows_top: f64,
    pub column_lefts: [f64; DETAIL_COLUMNS.len()],
}

impl DashboardLayout {
    /// Computes card and plot rectangles for `table_rows` detail rows.
    ///
    /// Fails with `InvalidViewport` when the viewport is too narrow to hold
    /// a plot area.
    pub fn compute(
        viewport: Viewport,
        config: &DashboardLayoutConfig,
        table_rows: usize,
    ) -> DashboardResult<Self> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let pad = config.card_padding_px;
        let card_width = width - 2.0 * config.margin_px;
        let plot_width = card_width - 2.0 * pad - config.y_axis_width_px;
        if plot_width <= 0.0 {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let chart_card = Rect::new(
            config.margin_px,
            config.margin_px,
            card_width,
            config.header_height_px + config.chart_height_px + 2.0 * pad,
        );
        let plot_top = chart_card.y + pad + config.header_height_px;
        let plot_height =
            config.chart_height_px - config.x_axis_height_px - config.legend_height_px;
        let plot = Rect::new(
            chart_card.x + pad + config.y_axis_width_px,
            plot_top,
            plot_width,
            plot_height,
        );

        let table_top = chart_card.bottom() + config.card_gap_px;
        let row_height = config.table_row_height_px;
        let table_card = Rect::new(
            config.margin_px,
            table_top,
            card_width,
            2.0 * pad + config.header_height_px + row_height * (table_rows + 1) as f64,
        );
        let table_header_top = table_top + pad + config.header_height_px;

        let inner_left = table_card.x + pad;
        let inner_width = card_width - 2.0 * pad;
        let mut column_lefts = [0.0; DETAIL_COLUMNS.len()];
        let mut cursor = inner_left;
        for (left, weight) in column_lefts.iter_mut().zip(COLUMN_WEIGHTS) {
            *left = cursor;
            cursor += weight * inner_width;
        }

        Ok(Self {
            header_center_y: chart_card.y + pad + config.header_height_px / 2.0,
            legend_top: plot.bottom() + config.x_axis_height_px,
            chart_card,
            plot,
            table_card,
            table_header_top,
            table_rows_top: table_header_top + row_height,
            column_lefts,
        })
    }

    /// Total height the dashboard needs, including the bottom margin.
    #[must_use]
    pub fn content_height(&self, config: &DashboardLayoutConfig) -> f64 {
        self.table_card.bottom() + config.margin_px
    }
}
