use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Everything one dashboard redraw paints, in pixel space.
///
/// Primitives are grouped by kind; backends paint rects, then lines, then
/// texts, keeping push order within each group.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Primitive counts of a frame, used by headless tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameSummary {
    pub lines: usize,
    pub rects: usize,
    pub texts: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    /// Rejects zero-sized viewports and any primitive with non-finite
    /// geometry, non-positive sizes or out-of-range colors.
    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.lines.iter().try_for_each(|line| line.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            lines: self.lines.len(),
            rects: self.rects.len(),
            texts: self.texts.len(),
        }
    }

    /// Texts whose content equals `text`, in draw order.
    pub fn texts_matching<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = &'a TextPrimitive> + 'a {
        self.texts.iter().filter(move |primitive| primitive.text == text)
    }
}
