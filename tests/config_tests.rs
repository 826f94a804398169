use fuel_dashboard::DashboardError;
use fuel_dashboard::api::DashboardConfig;
use fuel_dashboard::core::{MpgMetric, Viewport};
use fuel_dashboard::render::Color;

#[test]
fn defaults_match_dashboard_presentation() {
    let config = DashboardConfig::default();
    config.validate().expect("default config is valid");

    assert_eq!(config.title, "Toyota Fuel Economy Analysis (2021-2024)");
    assert_eq!(config.table_title, "Detailed Statistics");
    assert_eq!(config.y_axis_label, "Miles Per Gallon");
    assert_eq!((config.y_min, config.y_max), (20.0, 45.0));
    assert_eq!(config.chart_metrics, vec![MpgMetric::City, MpgMetric::Highway]);
    assert_eq!(config.palette[0], Color::from_hex("#8884d8").expect("hex"));
    assert_eq!(config.palette[1], Color::from_hex("#82ca9d").expect("hex"));
    assert!(config.redraw_on_change);
}

#[test]
fn json_config_only_needs_a_viewport() {
    let config = DashboardConfig::from_json_str(r#"{"viewport": {"width": 900, "height": 700}}"#)
        .expect("minimal config");
    assert_eq!(config.viewport, Viewport::new(900, 700));
    assert_eq!(config, DashboardConfig::new(Viewport::new(900, 700)));
}

#[test]
fn json_config_round_trips_overrides() {
    let config = DashboardConfig::new(Viewport::new(1000, 800))
        .with_title("Fleet MPG")
        .with_chart_metrics(&[MpgMetric::Combined])
        .with_y_domain(0.0, 60.0)
        .with_palette(vec![Color::rgb(0.5, 0.25, 0.125), Color::rgb(1.0, 0.0, 0.75)])
        .with_redraw_on_change(false);

    let raw = serde_json::to_string(&config).expect("serialize");
    let parsed = DashboardConfig::from_json_str(&raw).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_values_are_reported() {
    let base = DashboardConfig::default();

    let err = base
        .clone()
        .with_y_domain(30.0, 30.0)
        .validate()
        .expect_err("flat y domain");
    assert!(matches!(err, DashboardError::InvalidConfig(_)));

    assert!(base.clone().with_y_tick_count(1).validate().is_err());
    assert!(base.clone().with_chart_metrics(&[]).validate().is_err());
    assert!(base.clone().with_palette(Vec::new()).validate().is_err());
    assert!(
        base.clone()
            .with_palette(vec![Color::rgb(2.0, 0.0, 0.0)])
            .validate()
            .is_err()
    );

    let err = DashboardConfig::new(Viewport::new(0, 600))
        .validate()
        .expect_err("zero width");
    assert!(matches!(err, DashboardError::InvalidViewport { width: 0, .. }));
}

#[test]
fn layout_with_no_room_for_plot_is_rejected() {
    let mut config = DashboardConfig::default();
    config.layout.chart_height_px = 40.0;
    assert!(config.validate().is_err());
}
