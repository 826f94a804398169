use fuel_dashboard::core::{
    ChartProjector, FilterSelection, FuelDataset, FuelRecord, MpgMetric, filter_records,
    project_chart_rows,
};

const KEYS: [&str; 4] = ["Camry - City", "Camry - Highway", "RAV4 - City", "RAV4 - Highway"];

fn sample_projector() -> (FuelDataset, ChartProjector) {
    let dataset = FuelDataset::sample();
    let projector = ChartProjector::for_dataset(&dataset);
    (dataset, projector)
}

#[test]
fn unfiltered_sample_projects_four_fully_populated_rows() {
    let (dataset, projector) = sample_projector();
    let filtered = filter_records(dataset.records(), &FilterSelection::new());
    let rows = projector.project(filtered);

    let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
    assert_eq!(years, vec![2021, 2022, 2023, 2024]);
    for row in &rows {
        let keys: Vec<&str> = row.values.keys().map(String::as_str).collect();
        assert_eq!(keys, KEYS);
        assert!(KEYS.iter().all(|key| row.get(key).is_some()));
    }

    assert_eq!(rows[3].get("Camry - City"), Some(27.0));
    assert_eq!(rows[3].get("Camry - Highway"), Some(38.0));
    assert_eq!(rows[2].get("RAV4 - Highway"), Some(34.0));
    assert_eq!(rows[0].get("RAV4 - City"), Some(27.0));
}

#[test]
fn camry_only_selection_leaves_rav4_fields_null() {
    let (dataset, projector) = sample_projector();
    let selection = FilterSelection::new().toggled("Camry");
    let rows = projector.project(filter_records(dataset.records(), &selection));

    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert!(row.get("Camry - City").is_some());
        assert!(row.get("Camry - Highway").is_some());
        assert!(row.has_key("RAV4 - City"));
        assert!(row.has_key("RAV4 - Highway"));
        assert_eq!(row.get("RAV4 - City"), None);
        assert_eq!(row.get("RAV4 - Highway"), None);
    }
}

#[test]
fn year_with_single_model_gets_null_gap_for_the_other() {
    let records = vec![
        FuelRecord::new(2021, "Camry", 28.0, 39.0, 32.0),
        FuelRecord::new(2021, "RAV4", 27.0, 35.0, 30.0),
        FuelRecord::new(2022, "Camry", 28.0, 39.0, 32.0),
    ];
    let dataset = FuelDataset::from_records(records).expect("dataset");
    let rows = ChartProjector::for_dataset(&dataset).project(dataset.records());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].year, 2022);
    assert_eq!(rows[1].value("Camry", MpgMetric::City), Some(28.0));
    assert_eq!(rows[1].value("RAV4", MpgMetric::City), None);
    assert_eq!(rows[1].value("RAV4", MpgMetric::Highway), None);
}

#[test]
fn rows_follow_first_appearance_of_each_year() {
    let records = [
        FuelRecord::new(2023, "Camry", 28.0, 39.0, 32.0),
        FuelRecord::new(2021, "Camry", 28.0, 39.0, 32.0),
        FuelRecord::new(2021, "RAV4", 27.0, 35.0, 30.0),
        FuelRecord::new(2023, "RAV4", 27.0, 34.0, 30.0),
    ];
    let rows = ChartProjector::new(["Camry", "RAV4"]).project(&records);
    let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
    assert_eq!(years, vec![2023, 2021]);
}

#[test]
fn third_model_is_charted_instead_of_dropped() {
    let mut records = FuelDataset::sample().records().to_vec();
    records.push(FuelRecord::new(2024, "Prius", 57.0, 56.0, 57.0));
    let dataset = FuelDataset::from_records(records).expect("dataset");

    let rows = ChartProjector::for_dataset(&dataset).project(dataset.records());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].get("Prius - City"), Some(57.0));
    assert_eq!(rows[0].get("Prius - City"), None);
    assert!(rows[0].has_key("Prius - Highway"));
}

#[test]
fn models_outside_projector_list_get_appended_columns() {
    let records = [
        FuelRecord::new(2021, "Camry", 28.0, 39.0, 32.0),
        FuelRecord::new(2021, "Highlander", 21.0, 28.0, 24.0),
    ];
    let rows = ChartProjector::new(["Camry"]).project(&records);
    let keys: Vec<&str> = rows[0].values.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "Camry - City",
            "Camry - Highway",
            "Highlander - City",
            "Highlander - Highway"
        ]
    );
    assert_eq!(rows[0].get("Highlander - Highway"), Some(28.0));
}

#[test]
fn projection_is_idempotent() {
    let (dataset, projector) = sample_projector();
    let first = projector.project(dataset.records());
    let second = projector.project(dataset.records());
    assert_eq!(first, second);
}

#[test]
fn empty_input_projects_no_rows() {
    let (_, projector) = sample_projector();
    let records: Vec<FuelRecord> = Vec::new();
    assert!(projector.project(&records).is_empty());
    assert!(project_chart_rows(&records).is_empty());
}

#[test]
fn combined_metric_can_be_charted() {
    let (dataset, projector) = sample_projector();
    let projector = projector.with_metrics(&[MpgMetric::Combined]);
    assert_eq!(projector.series_keys(), vec!["Camry - Combined", "RAV4 - Combined"]);

    let rows = projector.project(dataset.records());
    assert_eq!(rows[0].get("Camry - Combined"), Some(32.0));
    assert!(!rows[0].has_key("Camry - City"));
}

#[test]
fn chart_rows_serialize_to_flat_wide_format() {
    let (dataset, projector) = sample_projector();
    let selection = FilterSelection::new().toggled("Camry");
    let rows = projector.project(filter_records(dataset.records(), &selection));

    let json = serde_json::to_value(&rows[0]).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "year": 2021,
            "Camry - City": 28.0,
            "Camry - Highway": 39.0,
            "RAV4 - City": null,
            "RAV4 - Highway": null
        })
    );
}
