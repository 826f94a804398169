use serde::{Deserialize, Serialize};

use crate::core::{FilterSelection, Rect};

/// Sizing for the model toggle buttons in the chart header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonLayoutConfig {
    pub height_px: f64,
    pub min_width_px: f64,
    /// Average glyph advance used to size buttons from their label.
    pub char_width_px: f64,
    pub horizontal_padding_px: f64,
    pub gap_px: f64,
}

impl Default for ButtonLayoutConfig {
    fn default() -> Self {
        Self {
            height_px: 36.0,
            min_width_px: 64.0,
            char_width_px: 8.0,
            horizontal_padding_px: 16.0,
            gap_px: 16.0,
        }
    }
}

impl ButtonLayoutConfig {
    #[must_use]
    pub fn is_valid(self) -> bool {
        [
            self.height_px,
            self.min_width_px,
            self.char_width_px,
            self.horizontal_padding_px,
        ]
        .into_iter()
        .all(|value| value.is_finite() && value > 0.0)
            && self.gap_px.is_finite()
            && self.gap_px >= 0.0
    }

    fn width_for(self, label: &str) -> f64 {
        let label_px = label.chars().count() as f64 * self.char_width_px;
        (label_px + 2.0 * self.horizontal_padding_px).max(self.min_width_px)
    }
}

/// One model selector control and its hit area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleButton {
    pub model: String,
    pub bounds: Rect,
    pub active: bool,
}

/// Lays out one toggle button per model, right-aligned against `right_edge`.
///
/// Buttons keep the order of `models` from left to right; `active` mirrors
/// membership in `selection`.
#[must_use]
pub fn layout_toggle_buttons(
    models: &[String],
    selection: &FilterSelection,
    right_edge: f64,
    top: f64,
    config: ButtonLayoutConfig,
) -> Vec<ToggleButton> {
    if models.is_empty() {
        return Vec::new();
    }

    let widths: Vec<f64> = models.iter().map(|model| config.width_for(model)).collect();
    let total = widths.iter().sum::<f64>() + config.gap_px * (widths.len() - 1) as f64;

    let mut x = right_edge - total;
    models
        .iter()
        .zip(widths)
        .map(|(model, width)| {
            let button = ToggleButton {
                model: model.clone(),
                bounds: Rect::new(x, top, width, config.height_px),
                active: selection.is_selected(model),
            };
            x += width + config.gap_px;
            button
        })
        .collect()
}

/// Returns the button under the pointer, if any.
#[must_use]
pub fn hit_test(buttons: &[ToggleButton], x: f64, y: f64) -> Option<&ToggleButton> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    buttons.iter().find(|button| button.bounds.contains(x, y))
}
