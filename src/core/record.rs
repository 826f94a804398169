use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// One row of fuel-economy source data.
///
/// Field names on the wire follow the camel-cased column names the dataset
/// is usually exported with (`cityMPG`, `engineSize`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub year: i32,
    pub model: String,
    #[serde(rename = "cityMPG")]
    pub city_mpg: f64,
    #[serde(rename = "highwayMPG")]
    pub highway_mpg: f64,
    #[serde(rename = "combinedMPG")]
    pub combined_mpg: f64,
    /// Display-only; empty when the source omits it.
    #[serde(default)]
    pub transmission: String,
    #[serde(rename = "engineSize", default)]
    pub engine_size: String,
}

impl FuelRecord {
    #[must_use]
    pub fn new(
        year: i32,
        model: impl Into<String>,
        city_mpg: f64,
        highway_mpg: f64,
        combined_mpg: f64,
    ) -> Self {
        Self {
            year,
            model: model.into(),
            city_mpg,
            highway_mpg,
            combined_mpg,
            transmission: String::new(),
            engine_size: String::new(),
        }
    }

    #[must_use]
    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    #[must_use]
    pub fn with_engine_size(mut self, engine_size: impl Into<String>) -> Self {
        self.engine_size = engine_size.into();
        self
    }

    #[must_use]
    pub fn mpg(&self, metric: MpgMetric) -> f64 {
        match metric {
            MpgMetric::City => self.city_mpg,
            MpgMetric::Highway => self.highway_mpg,
            MpgMetric::Combined => self.combined_mpg,
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        for metric in MpgMetric::ALL {
            let value = self.mpg(metric);
            if !value.is_finite() || value <= 0.0 {
                return Err(DashboardError::InvalidData(format!(
                    "{} mpg for `{}` ({}) must be finite and > 0",
                    metric.label().to_lowercase(),
                    self.model,
                    self.year
                )));
            }
        }
        Ok(())
    }
}

/// Fuel-economy measurement carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MpgMetric {
    City,
    Highway,
    Combined,
}

impl MpgMetric {
    pub const ALL: [MpgMetric; 3] = [MpgMetric::City, MpgMetric::Highway, MpgMetric::Combined];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MpgMetric::City => "City",
            MpgMetric::Highway => "Highway",
            MpgMetric::Combined => "Combined",
        }
    }
}
