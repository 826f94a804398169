use tracing::trace;

use crate::core::{LinearScale, Rect};
use crate::error::DashboardResult;
use crate::interaction::ToggleButton;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::layout::DashboardLayout;
use super::series_style::ChartSeries;
use super::table::{DetailTable, format_mpg};
use super::view::DashboardView;
use super::DashboardConfig;

const CARD_FILL: Color = Color::rgb(1.0, 1.0, 1.0);
const CARD_BORDER: Color = Color::rgb(0.894, 0.894, 0.906);
const TEXT: Color = Color::rgb(0.035, 0.035, 0.043);
const MUTED_TEXT: Color = Color::rgb(0.443, 0.443, 0.478);
const GRID: Color = Color::rgb(0.8, 0.8, 0.8);
const AXIS: Color = Color::rgb(0.6, 0.6, 0.6);
const BUTTON_ACTIVE_FILL: Color = Color::rgb(0.094, 0.094, 0.106);
const BUTTON_ACTIVE_TEXT: Color = Color::rgb(0.98, 0.98, 0.98);

const SERIES_STROKE_WIDTH: f64 = 2.0;
const DOT_RADIUS: f64 = 3.0;
const LEGEND_SWATCH_PX: f64 = 24.0;
/// Rough glyph advance relative to font size, for legend spacing.
const GLYPH_ADVANCE_RATIO: f64 = 0.6;

/// Builds the full dashboard scene: chart card then detail-table card.
pub(super) fn build_dashboard_frame(
    config: &DashboardConfig,
    layout: &DashboardLayout,
    view: &DashboardView,
    buttons: &[ToggleButton],
) -> DashboardResult<RenderFrame> {
    let mut frame = RenderFrame::new(config.viewport);

    push_card(&mut frame, layout.chart_card, config);
    push_chart_header(&mut frame, layout, config, buttons);

    let y_scale = LinearScale::new(
        config.y_min,
        config.y_max,
        layout.plot.bottom(),
        layout.plot.y,
    )?;
    push_y_axis(&mut frame, layout, config, y_scale)?;

    let x_positions = category_positions(layout.plot, view.chart_rows.len())?;
    push_x_axis(&mut frame, layout, config, view, &x_positions);
    for series in &view.series {
        push_series(&mut frame, view, series, &x_positions, y_scale)?;
    }
    push_legend(&mut frame, layout, config, &view.series);

    push_card(&mut frame, layout.table_card, config);
    push_table(&mut frame, layout, config, &DetailTable::from_records(&view.filtered));

    trace!(
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "built dashboard frame"
    );
    Ok(frame)
}

/// Centers of the categorical x-axis bands, one per chart row.
fn category_positions(plot: Rect, count: usize) -> DashboardResult<Vec<f64>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let scale = LinearScale::new(-0.5, count as f64 - 0.5, plot.x, plot.right())?;
    (0..count).map(|index| scale.to_pixel(index as f64)).collect()
}

fn push_card(frame: &mut RenderFrame, bounds: Rect, config: &DashboardConfig) {
    frame.push_rect(
        RectPrimitive::new(bounds.x, bounds.y, bounds.width, bounds.height, CARD_FILL)
            .with_border(1.0, CARD_BORDER)
            .with_corner_radius(config.layout.card_corner_radius_px),
    );
}

fn push_chart_header(
    frame: &mut RenderFrame,
    layout: &DashboardLayout,
    config: &DashboardConfig,
    buttons: &[ToggleButton],
) {
    let title_size = config.layout.title_font_size_px;
    if !config.title.is_empty() {
        frame.push_text(
            TextPrimitive::new(
                config.title.clone(),
                layout.chart_card.x + config.layout.card_padding_px,
                layout.header_center_y - title_size * 0.6,
                title_size,
                TEXT,
                TextHAlign::Left,
            )
            .bold(),
        );
    }

    let font_size = config.layout.font_size_px;
    for button in buttons {
        let bounds = button.bounds;
        let (fill, border, label) = if button.active {
            (BUTTON_ACTIVE_FILL, BUTTON_ACTIVE_FILL, BUTTON_ACTIVE_TEXT)
        } else {
            (CARD_FILL, CARD_BORDER, TEXT)
        };
        frame.push_rect(
            RectPrimitive::new(bounds.x, bounds.y, bounds.width, bounds.height, fill)
                .with_border(1.0, border)
                .with_corner_radius(6.0),
        );
        if !button.model.is_empty() {
            frame.push_text(TextPrimitive::new(
                button.model.clone(),
                bounds.x + bounds.width / 2.0,
                bounds.y + bounds.height / 2.0 - font_size * 0.6,
                font_size,
                label,
                TextHAlign::Center,
            ));
        }
    }
}

fn push_y_axis(
    frame: &mut RenderFrame,
    layout: &DashboardLayout,
    config: &DashboardConfig,
    y_scale: LinearScale,
) -> DashboardResult<()> {
    let plot = layout.plot;
    let font_size = config.layout.font_size_px;
    let step = (config.y_max - config.y_min) / (config.y_tick_count - 1) as f64;

    for index in 0..config.y_tick_count {
        let value = config.y_min + step * index as f64;
        let y = y_scale.to_pixel(value)?;
        frame.push_line(
            LinePrimitive::new(plot.x, y, plot.right(), y, 1.0, GRID)
                .with_stroke_style(LineStrokeStyle::Dashed),
        );
        frame.push_text(TextPrimitive::new(
            format_mpg((value * 100.0).round() / 100.0),
            plot.x - 8.0,
            y - font_size * 0.6,
            font_size,
            MUTED_TEXT,
            TextHAlign::Right,
        ));
    }

    frame.push_line(LinePrimitive::new(
        plot.x,
        plot.y,
        plot.x,
        plot.bottom(),
        1.0,
        AXIS,
    ));

    if !config.y_axis_label.is_empty() {
        frame.push_text(TextPrimitive::new(
            config.y_axis_label.clone(),
            layout.chart_card.x + config.layout.card_padding_px,
            plot.y - font_size * 1.6,
            font_size,
            MUTED_TEXT,
            TextHAlign::Left,
        ));
    }
    Ok(())
}

fn push_x_axis(
    frame: &mut RenderFrame,
    layout: &DashboardLayout,
    config: &DashboardConfig,
    view: &DashboardView,
    x_positions: &[f64],
) {
    let plot = layout.plot;
    frame.push_line(LinePrimitive::new(
        plot.x,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        1.0,
        AXIS,
    ));

    for (row, x) in view.chart_rows.iter().zip(x_positions) {
        frame.push_line(
            LinePrimitive::new(*x, plot.y, *x, plot.bottom(), 1.0, GRID)
                .with_stroke_style(LineStrokeStyle::Dashed),
        );
        frame.push_text(TextPrimitive::new(
            row.year.to_string(),
            *x,
            plot.bottom() + 6.0,
            config.layout.font_size_px,
            MUTED_TEXT,
            TextHAlign::Center,
        ));
    }
}

/// Draws one series as a polyline broken at null values, with a dot per value.
fn push_series(
    frame: &mut RenderFrame,
    view: &DashboardView,
    series: &ChartSeries,
    x_positions: &[f64],
    y_scale: LinearScale,
) -> DashboardResult<()> {
    let mut points = Vec::with_capacity(view.chart_rows.len());
    for (row, x) in view.chart_rows.iter().zip(x_positions) {
        let point = match row.get(&series.key) {
            Some(value) => Some((*x, y_scale.to_pixel(value)?)),
            None => None,
        };
        points.push(point);
    }

    for pair in points.windows(2) {
        if let (Some((x1, y1)), Some((x2, y2))) = (pair[0], pair[1]) {
            frame.push_line(
                LinePrimitive::new(x1, y1, x2, y2, SERIES_STROKE_WIDTH, series.color)
                    .with_stroke_style(series.stroke_style),
            );
        }
    }

    for (x, y) in points.into_iter().flatten() {
        frame.push_rect(
            RectPrimitive::new(
                x - DOT_RADIUS,
                y - DOT_RADIUS,
                2.0 * DOT_RADIUS,
                2.0 * DOT_RADIUS,
                CARD_FILL,
            )
            .with_border(SERIES_STROKE_WIDTH, series.color)
            .with_corner_radius(DOT_RADIUS),
        );
    }
    Ok(())
}

fn push_legend(
    frame: &mut RenderFrame,
    layout: &DashboardLayout,
    config: &DashboardConfig,
    series: &[ChartSeries],
) {
    let font_size = config.layout.font_size_px;
    let center_y = layout.legend_top + config.layout.legend_height_px / 2.0;
    let mut x = layout.plot.x;

    for entry in series {
        frame.push_line(
            LinePrimitive::new(
                x,
                center_y,
                x + LEGEND_SWATCH_PX,
                center_y,
                SERIES_STROKE_WIDTH,
                entry.color,
            )
            .with_stroke_style(entry.stroke_style),
        );
        frame.push_text(TextPrimitive::new(
            entry.key.clone(),
            x + LEGEND_SWATCH_PX + 6.0,
            center_y - font_size * 0.6,
            font_size,
            entry.color,
            TextHAlign::Left,
        ));
        x += LEGEND_SWATCH_PX
            + 6.0
            + entry.key.chars().count() as f64 * font_size * GLYPH_ADVANCE_RATIO
            + 20.0;
    }
}

fn push_table(
    frame: &mut RenderFrame,
    layout: &DashboardLayout,
    config: &DashboardConfig,
    table: &DetailTable,
) {
    let card = layout.table_card;
    let pad = config.layout.card_padding_px;
    let font_size = config.layout.font_size_px;
    let row_height = config.layout.table_row_height_px;
    let title_size = config.layout.title_font_size_px;
    let text_offset = (row_height - font_size) / 2.0;

    if !config.table_title.is_empty() {
        frame.push_text(
            TextPrimitive::new(
                config.table_title.clone(),
                card.x + pad,
                card.y + pad + (config.layout.header_height_px - title_size) / 2.0,
                title_size,
                TEXT,
                TextHAlign::Left,
            )
            .bold(),
        );
    }

    push_table_row(
        frame,
        &layout.column_lefts,
        &table.columns,
        layout.table_header_top + text_offset,
        font_size,
        true,
    );
    let mut rule_y = layout.table_rows_top;
    frame.push_line(LinePrimitive::new(
        card.x + pad,
        rule_y,
        card.right() - pad,
        rule_y,
        1.0,
        CARD_BORDER,
    ));

    for row in &table.rows {
        push_table_row(
            frame,
            &layout.column_lefts,
            row,
            rule_y + text_offset,
            font_size,
            false,
        );
        rule_y += row_height;
        frame.push_line(LinePrimitive::new(
            card.x + pad,
            rule_y,
            card.right() - pad,
            rule_y,
            1.0,
            CARD_BORDER,
        ));
    }
}

fn push_table_row(
    frame: &mut RenderFrame,
    column_lefts: &[f64],
    cells: &[String],
    y: f64,
    font_size: f64,
    header: bool,
) {
    for (left, cell) in column_lefts.iter().zip(cells) {
        if cell.is_empty() {
            continue;
        }
        let text = TextPrimitive::new(cell.clone(), *left, y, font_size, TEXT, TextHAlign::Left);
        frame.push_text(if header { text.bold() } else { text });
    }
}
