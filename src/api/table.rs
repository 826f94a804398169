use serde::{Deserialize, Serialize};

use crate::core::FuelRecord;

/// Column headers of the detail table, in display order.
pub const DETAIL_COLUMNS: [&str; 7] = [
    "Model",
    "Year",
    "City MPG",
    "Highway MPG",
    "Combined MPG",
    "Engine Size",
    "Transmission",
];

/// Display-ready detail table: one string cell per column and record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DetailTable {
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FuelRecord>,
    {
        Self {
            columns: DETAIL_COLUMNS.iter().map(|column| (*column).to_owned()).collect(),
            rows: records.into_iter().map(detail_cells).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table as left-aligned plain text with a header rule.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_text_row(&mut out, &self.columns, &widths);
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        push_text_row(&mut out, &rule, &widths);
        for row in &self.rows {
            push_text_row(&mut out, row, &widths);
        }
        out
    }
}

/// Formats an MPG value without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_mpg(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn detail_cells(record: &FuelRecord) -> Vec<String> {
    vec![
        record.model.clone(),
        record.year.to_string(),
        format_mpg(record.city_mpg),
        format_mpg(record.highway_mpg),
        format_mpg(record.combined_mpg),
        record.engine_size.clone(),
        record.transmission.clone(),
    ]
}

fn push_text_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
