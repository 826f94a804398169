use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_CHART_METRICS, MpgMetric, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::interaction::ButtonLayoutConfig;
use crate::render::Color;

/// Pixel sizes of the two dashboard cards and their contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayoutConfig {
    pub margin_px: f64,
    pub card_padding_px: f64,
    pub card_gap_px: f64,
    pub card_corner_radius_px: f64,
    pub header_height_px: f64,
    /// Height of the chart body: plot, x-axis labels and legend.
    pub chart_height_px: f64,
    pub y_axis_width_px: f64,
    pub x_axis_height_px: f64,
    pub legend_height_px: f64,
    pub table_row_height_px: f64,
    pub font_size_px: f64,
    pub title_font_size_px: f64,
}

impl Default for DashboardLayoutConfig {
    fn default() -> Self {
        Self {
            margin_px: 24.0,
            card_padding_px: 16.0,
            card_gap_px: 24.0,
            card_corner_radius_px: 8.0,
            header_height_px: 52.0,
            chart_height_px: 384.0,
            y_axis_width_px: 56.0,
            x_axis_height_px: 28.0,
            legend_height_px: 28.0,
            table_row_height_px: 32.0,
            font_size_px: 13.0,
            title_font_size_px: 18.0,
        }
    }
}

impl DashboardLayoutConfig {
    fn validate(self) -> DashboardResult<Self> {
        for (name, value) in [
            ("margin_px", self.margin_px),
            ("card_padding_px", self.card_padding_px),
            ("card_gap_px", self.card_gap_px),
            ("card_corner_radius_px", self.card_corner_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::InvalidConfig(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("header_height_px", self.header_height_px),
            ("chart_height_px", self.chart_height_px),
            ("y_axis_width_px", self.y_axis_width_px),
            ("x_axis_height_px", self.x_axis_height_px),
            ("legend_height_px", self.legend_height_px),
            ("table_row_height_px", self.table_row_height_px),
            ("font_size_px", self.font_size_px),
            ("title_font_size_px", self.title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DashboardError::InvalidConfig(format!(
                    "layout `{name}` must be finite and > 0"
                )));
            }
        }
        if self.chart_height_px <= self.x_axis_height_px + self.legend_height_px {
            return Err(DashboardError::InvalidConfig(
                "chart height must leave room for the plot above axis and legend".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Public dashboard bootstrap configuration.
///
/// Serializable so hosts can keep dashboard setup in a JSON file; every
/// field except the viewport has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_table_title")]
    pub table_title: String,
    #[serde(default = "default_y_axis_label")]
    pub y_axis_label: String,
    #[serde(default = "default_y_min")]
    pub y_min: f64,
    #[serde(default = "default_y_max")]
    pub y_max: f64,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_chart_metrics")]
    pub chart_metrics: Vec<MpgMetric>,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_redraw_on_change")]
    pub redraw_on_change: bool,
    #[serde(default)]
    pub layout: DashboardLayoutConfig,
    #[serde(default)]
    pub buttons: ButtonLayoutConfig,
}

impl DashboardConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            title: default_title(),
            table_title: default_table_title(),
            y_axis_label: default_y_axis_label(),
            y_min: default_y_min(),
            y_max: default_y_max(),
            y_tick_count: default_y_tick_count(),
            chart_metrics: default_chart_metrics(),
            palette: default_palette(),
            redraw_on_change: default_redraw_on_change(),
            layout: DashboardLayoutConfig::default(),
            buttons: ButtonLayoutConfig::default(),
        }
    }

    /// Parses a JSON config document.
    pub fn from_json_str(raw: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, y_tick_count: usize) -> Self {
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_chart_metrics(mut self, metrics: &[MpgMetric]) -> Self {
        self.chart_metrics = metrics.to_vec();
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Controls whether state changes render immediately.
    #[must_use]
    pub fn with_redraw_on_change(mut self, redraw_on_change: bool) -> Self {
        self.redraw_on_change = redraw_on_change;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: DashboardLayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_buttons(mut self, buttons: ButtonLayoutConfig) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.y_min.is_finite() || !self.y_max.is_finite() || self.y_min >= self.y_max {
            return Err(DashboardError::InvalidConfig(format!(
                "y domain must be finite with min < max (got {}..{})",
                self.y_min, self.y_max
            )));
        }
        if self.y_tick_count < 2 {
            return Err(DashboardError::InvalidConfig(
                "y tick count must be >= 2".to_owned(),
            ));
        }
        if self.chart_metrics.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "at least one chart metric is required".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        self.layout.validate()?;
        if !self.buttons.is_valid() {
            return Err(DashboardError::InvalidConfig(
                "button sizes must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1152, 1000))
    }
}

fn default_title() -> String {
    "Toyota Fuel Economy Analysis (2021-2024)".to_owned()
}

fn default_table_title() -> String {
    "Detailed Statistics".to_owned()
}

fn default_y_axis_label() -> String {
    "Miles Per Gallon".to_owned()
}

fn default_y_min() -> f64 {
    20.0
}

fn default_y_max() -> f64 {
    45.0
}

fn default_y_tick_count() -> usize {
    6
}

fn default_chart_metrics() -> Vec<MpgMetric> {
    DEFAULT_CHART_METRICS.to_vec()
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(136.0 / 255.0, 132.0 / 255.0, 216.0 / 255.0),
        Color::rgb(130.0 / 255.0, 202.0 / 255.0, 157.0 / 255.0),
        Color::rgb(255.0 / 255.0, 198.0 / 255.0, 88.0 / 255.0),
        Color::rgb(255.0 / 255.0, 128.0 / 255.0, 66.0 / 255.0),
    ]
}

fn default_redraw_on_change() -> bool {
    true
}
