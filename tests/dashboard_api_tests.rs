use std::cell::RefCell;
use std::rc::Rc;

use fuel_dashboard::api::{DashboardConfig, FuelEconomyDashboard};
use fuel_dashboard::core::{FuelDataset, FuelRecord, MpgMetric, Viewport};
use fuel_dashboard::extensions::{DashboardContext, DashboardEvent, DashboardObserver};
use fuel_dashboard::render::{LineStrokeStyle, NullRenderer};

fn dashboard() -> FuelEconomyDashboard<NullRenderer> {
    FuelEconomyDashboard::with_sample_data(NullRenderer::default(), DashboardConfig::default())
        .expect("dashboard init")
}

struct Recorder {
    id: String,
    events: Rc<RefCell<Vec<(DashboardEvent, DashboardContext)>>>,
}

impl DashboardObserver for Recorder {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &DashboardEvent, context: DashboardContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

#[test]
fn dashboard_smoke_flow() {
    let mut dashboard = dashboard();
    assert!(dashboard.selection().is_empty());
    assert_eq!(dashboard.filtered_records().len(), 8);
    assert_eq!(dashboard.chart_rows().len(), 4);

    dashboard.toggle_model("Camry").expect("toggle camry");
    assert!(dashboard.is_selected("Camry"));
    assert_eq!(dashboard.filtered_records().len(), 4);
    assert!(dashboard.filtered_records().iter().all(|record| record.model == "Camry"));
    assert_eq!(dashboard.chart_rows().len(), 4);
    for row in dashboard.chart_rows() {
        assert!(row.value("Camry", MpgMetric::City).is_some());
        assert!(row.value("Camry", MpgMetric::Highway).is_some());
        assert_eq!(row.value("RAV4", MpgMetric::City), None);
        assert_eq!(row.value("RAV4", MpgMetric::Highway), None);
    }

    dashboard.toggle_model("Camry").expect("toggle camry back");
    assert!(dashboard.selection().is_empty());
    assert_eq!(dashboard.filtered_records().len(), 8);

    assert_eq!(dashboard.renderer().render_count, 2);
}

#[test]
fn visible_series_follow_selection() {
    let mut dashboard = dashboard();
    assert!(dashboard.visible_series().is_empty());
    assert_eq!(dashboard.filtered_records().len(), 8);

    dashboard.toggle_model("RAV4").expect("toggle rav4");
    let series = dashboard.visible_series();
    assert_eq!(series.len(), 2);
    assert!(series.iter().all(|entry| entry.model == "RAV4"));
    assert_eq!(series[0].stroke_style, LineStrokeStyle::Solid);
    assert_eq!(series[1].stroke_style, LineStrokeStyle::Dashed);

    dashboard.toggle_model("Camry").expect("toggle camry");
    let keys: Vec<&str> = dashboard
        .visible_series()
        .iter()
        .map(|series| series.key.as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["Camry - City", "Camry - Highway", "RAV4 - City", "RAV4 - Highway"]
    );

    dashboard.toggle_model("Camry").expect("toggle camry off");
    dashboard.toggle_model("RAV4").expect("toggle rav4 off");
    assert!(dashboard.visible_series().is_empty());
}

#[test]
fn series_colors_stay_stable_across_toggles() {
    let mut dashboard = dashboard();
    dashboard.toggle_model("Camry").expect("toggle camry");
    dashboard.toggle_model("RAV4").expect("toggle rav4");
    let rav4_color = dashboard
        .visible_series()
        .iter()
        .find(|series| series.model == "RAV4")
        .map(|series| series.color)
        .expect("rav4 series");

    dashboard.toggle_model("Camry").expect("toggle camry off");
    assert_eq!(dashboard.visible_series()[0].color, rav4_color);
}

#[test]
fn unknown_model_filters_everything_out_without_error() {
    let mut dashboard = dashboard();
    dashboard.toggle_model("Corolla").expect("toggle unknown");
    assert!(dashboard.filtered_records().is_empty());
    assert!(dashboard.chart_rows().is_empty());
    assert!(dashboard.visible_series().is_empty());
    dashboard.render().expect("empty dashboard still renders");
}

#[test]
fn clicking_a_button_toggles_its_model() {
    let mut dashboard = dashboard();
    let button = dashboard
        .buttons()
        .iter()
        .find(|button| button.model == "RAV4")
        .cloned()
        .expect("rav4 button");
    assert!(!button.active);

    let center_x = button.bounds.x + button.bounds.width / 2.0;
    let center_y = button.bounds.y + button.bounds.height / 2.0;
    let toggled = dashboard.click(center_x, center_y).expect("click");
    assert_eq!(toggled.as_deref(), Some("RAV4"));
    assert!(dashboard.is_selected("RAV4"));
    assert!(
        dashboard
            .buttons()
            .iter()
            .any(|button| button.model == "RAV4" && button.active)
    );

    let missed = dashboard.click(1.0, 1.0).expect("click outside");
    assert_eq!(missed, None);
    assert!(dashboard.is_selected("RAV4"));
}

#[test]
fn observers_see_toggle_recompute_render_in_order() {
    let mut dashboard = dashboard();
    let events = Rc::new(RefCell::new(Vec::new()));
    dashboard.add_observer(Box::new(Recorder {
        id: "recorder".to_owned(),
        events: Rc::clone(&events),
    }));

    dashboard.toggle_model("Camry").expect("toggle");

    let events = events.borrow();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0].0,
        DashboardEvent::ModelToggled {
            model: "Camry".to_owned(),
            selected: true
        }
    );
    assert_eq!(
        events[1].0,
        DashboardEvent::ViewRecomputed {
            filtered_len: 4,
            chart_rows_len: 4
        }
    );
    assert!(matches!(events[2].0, DashboardEvent::Rendered { .. }));
    assert_eq!(events[2].1.filtered_len, 4);
    assert_eq!(events[2].1.selected_len, 1);
    assert_eq!(events[2].1.dataset_len, 8);
}

#[test]
fn removed_observer_stops_receiving_events() {
    let mut dashboard = dashboard();
    let events = Rc::new(RefCell::new(Vec::new()));
    dashboard.add_observer(Box::new(Recorder {
        id: "recorder".to_owned(),
        events: Rc::clone(&events),
    }));

    assert!(dashboard.remove_observer("recorder"));
    assert!(!dashboard.remove_observer("recorder"));
    assert_eq!(dashboard.observer_count(), 0);

    dashboard.toggle_model("Camry").expect("toggle");
    assert!(events.borrow().is_empty());
}

#[test]
fn redraw_can_be_deferred() {
    let config = DashboardConfig::default().with_redraw_on_change(false);
    let mut dashboard = FuelEconomyDashboard::with_sample_data(NullRenderer::default(), config)
        .expect("dashboard init");

    dashboard.toggle_model("Camry").expect("toggle");
    assert_eq!(dashboard.renderer().render_count, 0);

    dashboard.render().expect("render");
    let renderer = dashboard.into_renderer();
    assert_eq!(renderer.render_count, 1);
    assert!(renderer.last_summary.lines > 0);
}

#[test]
fn detail_table_lists_filtered_rows() {
    let mut dashboard = dashboard();
    dashboard.toggle_model("RAV4").expect("toggle");

    let table = dashboard.detail_table();
    assert_eq!(table.columns[0], "Model");
    assert_eq!(table.len(), 4);
    assert_eq!(
        table.rows[2],
        vec!["RAV4", "2023", "27", "34", "30", "2.5L 4-Cylinder", "Automatic 8-Speed"]
    );

    let text = table.to_text();
    assert_eq!(text.lines().count(), 6);
    assert!(text.starts_with("Model"));
}

#[test]
fn viewport_changes_relayout_buttons() {
    let mut dashboard = dashboard();
    let before = dashboard.buttons()[1].bounds;

    dashboard
        .set_viewport(Viewport::new(800, 900))
        .expect("resize");
    let after = dashboard.buttons()[1].bounds;
    assert!(after.x < before.x);
    assert_eq!(dashboard.viewport(), Viewport::new(800, 900));

    assert!(dashboard.set_viewport(Viewport::new(0, 900)).is_err());
    assert_eq!(dashboard.viewport(), Viewport::new(800, 900));
}

#[test]
fn resize_redraws_only_when_size_changes_and_redraw_is_enabled() {
    let mut dashboard = dashboard();
    let events = Rc::new(RefCell::new(Vec::new()));
    dashboard.add_observer(Box::new(Recorder {
        id: "resize".to_owned(),
        events: Rc::clone(&events),
    }));

    dashboard
        .set_viewport(Viewport::new(900, 1000))
        .expect("resize");
    assert_eq!(dashboard.renderer().render_count, 1);
    {
        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0].0, DashboardEvent::Resized { width: 900, height: 1000 }));
        assert!(matches!(events[1].0, DashboardEvent::Rendered { .. }));
    }

    dashboard
        .set_viewport(Viewport::new(900, 1000))
        .expect("same size");
    assert_eq!(dashboard.renderer().render_count, 1);

    dashboard.set_redraw_on_change(false);
    dashboard
        .set_viewport(Viewport::new(1000, 1000))
        .expect("resize without redraw");
    assert_eq!(dashboard.renderer().render_count, 1);
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = DashboardConfig::default().with_y_domain(45.0, 20.0);
    assert!(FuelEconomyDashboard::with_sample_data(NullRenderer::default(), config).is_err());

    let config = DashboardConfig::new(Viewport::new(0, 0));
    assert!(FuelEconomyDashboard::with_sample_data(NullRenderer::default(), config).is_err());
}

#[test]
fn custom_dataset_with_third_model_gets_a_button_and_series() {
    let mut records = FuelDataset::sample().records().to_vec();
    records.push(FuelRecord::new(2023, "Prius", 57.0, 56.0, 57.0));
    let dataset = FuelDataset::from_records(records).expect("dataset");

    let mut dashboard =
        FuelEconomyDashboard::new(NullRenderer::default(), DashboardConfig::default(), dataset)
            .expect("dashboard init");
    assert_eq!(dashboard.buttons().len(), 3);

    dashboard.toggle_model("Prius").expect("toggle prius");
    assert_eq!(dashboard.filtered_records().len(), 1);
    assert_eq!(dashboard.chart_rows().len(), 1);
    assert_eq!(dashboard.chart_rows()[0].get("Prius - City"), Some(57.0));
    assert_eq!(dashboard.visible_series().len(), 2);
}
