mod observers;

pub use observers::{DashboardContext, DashboardEvent, DashboardObserver};
