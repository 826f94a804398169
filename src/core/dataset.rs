use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::debug;

use crate::core::FuelRecord;
use crate::error::{DashboardError, DashboardResult};

const SAMPLE_TRANSMISSION: &str = "Automatic 8-Speed";
const SAMPLE_ENGINE: &str = "2.5L 4-Cylinder";

/// Immutable, ordered fuel-economy record set.
///
/// Validated once at construction: every `(year, model)` pair is unique and
/// every MPG value is finite and positive. Record order is kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelDataset {
    records: Vec<FuelRecord>,
    models: Vec<String>,
    years: Vec<i32>,
}

impl FuelDataset {
    pub fn from_records(records: Vec<FuelRecord>) -> DashboardResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut models = IndexSet::new();
        let mut years = IndexSet::new();

        for record in &records {
            record.validate()?;
            if !seen.insert((record.year, record.model.as_str())) {
                return Err(DashboardError::DuplicateRecord {
                    year: record.year,
                    model: record.model.clone(),
                });
            }
            models.insert(record.model.clone());
            years.insert(record.year);
        }

        debug!(
            records = records.len(),
            models = models.len(),
            years = years.len(),
            "loaded fuel dataset"
        );

        Ok(Self {
            models: models.into_iter().collect(),
            years: years.into_iter().collect(),
            records,
        })
    }

    /// Parses a JSON array of records and validates it.
    pub fn from_json_str(raw: &str) -> DashboardResult<Self> {
        let records: Vec<FuelRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    /// Toyota Camry and RAV4 figures for model years 2021 to 2024.
    #[must_use]
    pub fn sample() -> Self {
        let rows: [(i32, &str, f64, f64, f64); 8] = [
            (2021, "Camry", 28.0, 39.0, 32.0),
            (2022, "Camry", 28.0, 39.0, 32.0),
            (2023, "Camry", 28.0, 39.0, 32.0),
            (2024, "Camry", 27.0, 38.0, 31.0),
            (2021, "RAV4", 27.0, 35.0, 30.0),
            (2022, "RAV4", 27.0, 35.0, 30.0),
            (2023, "RAV4", 27.0, 34.0, 30.0),
            (2024, "RAV4", 27.0, 34.0, 30.0),
        ];

        let records = rows
            .into_iter()
            .map(|(year, model, city, highway, combined)| {
                FuelRecord::new(year, model, city, highway, combined)
                    .with_transmission(SAMPLE_TRANSMISSION)
                    .with_engine_size(SAMPLE_ENGINE)
            })
            .collect::<Vec<_>>();

        let models = vec!["Camry".to_owned(), "RAV4".to_owned()];
        let years = vec![2021, 2022, 2023, 2024];
        Self {
            records,
            models,
            years,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[FuelRecord] {
        &self.records
    }

    /// Distinct model names in order of first appearance.
    #[must_use]
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Distinct years in order of first appearance.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains_model(&self, model: &str) -> bool {
        self.models.iter().any(|known| known == model)
    }
}

impl Default for FuelDataset {
    fn default() -> Self {
        Self::sample()
    }
}
