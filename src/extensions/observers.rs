use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::FrameSummary;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardContext {
    pub viewport: Viewport,
    pub dataset_len: usize,
    pub selected_len: usize,
    pub filtered_len: usize,
    pub chart_rows_len: usize,
}

/// Events emitted by the dashboard, in the order they happen within one
/// state change: toggle, recompute, render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    ModelToggled { model: String, selected: bool },
    ViewRecomputed { filtered_len: usize, chart_rows_len: usize },
    Resized { width: u32, height: u32 },
    Rendered { summary: FrameSummary },
}

/// Subscription hook for hosts that need to react to dashboard changes.
///
/// Observers see events and a context snapshot; they cannot mutate the
/// dashboard.
pub trait DashboardObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &DashboardEvent, context: DashboardContext);
}
