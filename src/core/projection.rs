use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{FuelDataset, FuelRecord, MpgMetric};

/// Metrics charted when nothing else is configured.
pub const DEFAULT_CHART_METRICS: [MpgMetric; 2] = [MpgMetric::City, MpgMetric::Highway];

/// Column name of one `(model, metric)` series inside a [`ChartRow`].
#[must_use]
pub fn series_key(model: &str, metric: MpgMetric) -> String {
    format!("{model} - {}", metric.label())
}

/// Wide-format chart row: one per year, one optional value per series key.
///
/// Serializes flat, e.g. `{"year": 2021, "Camry - City": 28.0, "RAV4 - City": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub year: i32,
    #[serde(flatten)]
    pub values: IndexMap<String, Option<f64>>,
}

impl ChartRow {
    /// Value stored under `key`; `None` both for null and for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }

    #[must_use]
    pub fn value(&self, model: &str, metric: MpgMetric) -> Option<f64> {
        self.get(&series_key(model, metric))
    }

    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn populated(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values
            .iter()
            .filter_map(|(key, value)| value.map(|value| (key.as_str(), value)))
    }
}

/// Reshapes flat records into year-keyed [`ChartRow`]s.
///
/// Series keys come from the configured model list; models met during
/// projection that are not in the list get their columns appended, so no
/// record is ever left out of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProjector {
    models: Vec<String>,
    metrics: SmallVec<[MpgMetric; 3]>,
}

impl ChartProjector {
    #[must_use]
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models: IndexSet<String> = models.into_iter().map(Into::into).collect();
        Self {
            models: models.into_iter().collect(),
            metrics: SmallVec::from_slice(&DEFAULT_CHART_METRICS),
        }
    }

    #[must_use]
    pub fn for_dataset(dataset: &FuelDataset) -> Self {
        Self::new(dataset.models().iter().cloned())
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: &[MpgMetric]) -> Self {
        let mut deduped: SmallVec<[MpgMetric; 3]> = SmallVec::new();
        for metric in metrics {
            if !deduped.contains(metric) {
                deduped.push(*metric);
            }
        }
        self.metrics = deduped;
        self
    }

    #[must_use]
    pub fn models(&self) -> &[String] {
        &self.models
    }

    #[must_use]
    pub fn metrics(&self) -> &[MpgMetric] {
        &self.metrics
    }

    /// Series keys of the known models, model-major.
    #[must_use]
    pub fn series_keys(&self) -> Vec<String> {
        self.models
            .iter()
            .flat_map(|model| {
                self.metrics
                    .iter()
                    .map(move |metric| series_key(model, *metric))
            })
            .collect()
    }

    /// Groups `records` by year in order of first appearance.
    ///
    /// Each row carries every series key; keys without a contributing record
    /// stay `None` so the chart can draw a gap.
    #[must_use]
    pub fn project<'a, I>(&self, records: I) -> Vec<ChartRow>
    where
        I: IntoIterator<Item = &'a FuelRecord>,
    {
        let records: Vec<&FuelRecord> = records.into_iter().collect();

        let mut models: IndexSet<&str> = self.models.iter().map(String::as_str).collect();
        for record in &records {
            if models.insert(record.model.as_str()) {
                trace!(model = %record.model, "appending series for unlisted model");
            }
        }

        let template: IndexMap<String, Option<f64>> = models
            .iter()
            .flat_map(|model| {
                self.metrics
                    .iter()
                    .map(move |metric| (series_key(model, *metric), None))
            })
            .collect();

        let mut rows: IndexMap<i32, ChartRow> = IndexMap::new();
        for record in records {
            let row = rows.entry(record.year).or_insert_with(|| ChartRow {
                year: record.year,
                values: template.clone(),
            });
            for metric in &self.metrics {
                row.values
                    .insert(series_key(&record.model, *metric), Some(record.mpg(*metric)));
            }
        }

        rows.into_values().collect()
    }
}

/// Projects `records` using the models they contain as the series set.
#[must_use]
pub fn project_chart_rows<'a, I>(records: I) -> Vec<ChartRow>
where
    I: IntoIterator<Item = &'a FuelRecord>,
{
    ChartProjector::new(Vec::<String>::new()).project(records)
}
