use std::collections::BTreeSet;

use fuel_dashboard::core::{
    ChartProjector, FilterSelection, FuelDataset, FuelRecord, filter_records,
};
use proptest::prelude::*;

const MODELS: [&str; 4] = ["Camry", "RAV4", "Prius", "Corolla"];

fn dataset_strategy() -> impl Strategy<Value = FuelDataset> {
    proptest::collection::btree_set((0usize..MODELS.len(), 2015i32..2025), 0..24).prop_flat_map(
        |keys| {
            let keys: Vec<(usize, i32)> = keys.into_iter().collect();
            let len = keys.len();
            (
                Just(keys),
                proptest::collection::vec((10.0f64..60.0, 10.0f64..60.0), len),
            )
                .prop_map(|(keys, mpgs)| {
                    let records = keys
                        .into_iter()
                        .zip(mpgs)
                        .map(|((model, year), (city, highway))| {
                            let combined = (city + highway) / 2.0;
                            FuelRecord::new(year, MODELS[model], city, highway, combined)
                        })
                        .collect();
                    FuelDataset::from_records(records).expect("generated keys are unique")
                })
        },
    )
}

fn toggles_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(MODELS.to_vec()), 0..6)
}

proptest! {
    #[test]
    fn empty_selection_is_identity(dataset in dataset_strategy()) {
        let filtered = filter_records(dataset.records(), &FilterSelection::new());
        prop_assert_eq!(filtered.len(), dataset.len());
        for (kept, original) in filtered.iter().zip(dataset.records()) {
            prop_assert_eq!(*kept, original);
        }
    }

    #[test]
    fn filter_keeps_exactly_selected_models_in_order(
        dataset in dataset_strategy(),
        toggles in toggles_strategy()
    ) {
        let selection = FilterSelection::from_toggles(&toggles);
        prop_assume!(!selection.is_empty());

        let filtered = filter_records(dataset.records(), &selection);
        let expected: Vec<&FuelRecord> = dataset
            .records()
            .iter()
            .filter(|record| selection.is_selected(&record.model))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn double_toggle_restores_selection(
        toggles in toggles_strategy(),
        model in proptest::sample::select(MODELS.to_vec())
    ) {
        let selection = FilterSelection::from_toggles(&toggles);
        let restored = selection.toggled(model).toggled(model);

        let before: BTreeSet<&str> = selection.iter().collect();
        let after: BTreeSet<&str> = restored.iter().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn projection_has_one_row_per_year_with_exact_values(
        dataset in dataset_strategy(),
        toggles in toggles_strategy()
    ) {
        let selection = FilterSelection::from_toggles(&toggles);
        let filtered = filter_records(dataset.records(), &selection);
        let rows = ChartProjector::for_dataset(&dataset).project(filtered.iter().copied());

        let years: BTreeSet<i32> = filtered.iter().map(|record| record.year).collect();
        prop_assert_eq!(rows.len(), years.len());

        for row in &rows {
            let contributing: Vec<&&FuelRecord> =
                filtered.iter().filter(|record| record.year == row.year).collect();
            prop_assert_eq!(row.populated().count(), contributing.len() * 2);
            for record in contributing {
                prop_assert_eq!(
                    row.get(&format!("{} - City", record.model)),
                    Some(record.city_mpg)
                );
                prop_assert_eq!(
                    row.get(&format!("{} - Highway", record.model)),
                    Some(record.highway_mpg)
                );
            }
        }
    }
}
