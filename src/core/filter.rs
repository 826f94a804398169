use crate::core::{FilterSelection, FuelRecord};

/// Returns the records whose model is selected, in their original order.
///
/// An empty selection applies no filter and yields every record.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [FuelRecord],
    selection: &FilterSelection,
) -> Vec<&'a FuelRecord> {
    records
        .iter()
        .filter(|record| selection.admits(&record.model))
        .collect()
}
