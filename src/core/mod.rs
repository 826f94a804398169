pub mod dataset;
pub mod filter;
pub mod projection;
pub mod record;
pub mod scale;
pub mod selection;
pub mod types;

pub use dataset::FuelDataset;
pub use filter::filter_records;
pub use projection::{
    ChartProjector, ChartRow, DEFAULT_CHART_METRICS, project_chart_rows, series_key,
};
pub use record::{FuelRecord, MpgMetric};
pub use scale::LinearScale;
pub use selection::FilterSelection;
pub use types::{Rect, Viewport};
