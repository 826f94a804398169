mod config;
mod dashboard;
mod frame_builder;
mod layout;
mod series_style;
mod table;
mod view;

pub use config::{DashboardConfig, DashboardLayoutConfig};
pub use dashboard::FuelEconomyDashboard;
pub use layout::DashboardLayout;
pub use series_style::{ChartSeries, stroke_style_for, visible_series};
pub use table::{DETAIL_COLUMNS, DetailTable, format_mpg};
pub use view::DashboardView;
