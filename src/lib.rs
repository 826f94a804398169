//! fuel-dashboard: toggle-filtered fuel-economy chart and detail table.
//!
//! The crate keeps a strict split between the data pipeline (`core`:
//! dataset, selection, filtering, wide-format projection), the dashboard
//! facade and scene building (`api`), pointer handling (`interaction`) and
//! drawing backends (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{DashboardConfig, FuelEconomyDashboard};
pub use error::{DashboardError, DashboardResult};
