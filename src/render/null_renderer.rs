use crate::error::DashboardResult;
use crate::render::{FrameSummary, RenderFrame, Renderer};

/// No-op renderer used by tests and headless dashboards.
///
/// Frames are still validated, so invalid geometry surfaces as an error
/// without a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_summary: FrameSummary,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;
        self.last_summary = frame.summary();
        self.render_count += 1;
        Ok(())
    }
}
