use fuel_dashboard::api::{DashboardConfig, FuelEconomyDashboard};
use fuel_dashboard::core::FuelDataset;
use fuel_dashboard::render::NullRenderer;
use fuel_dashboard::telemetry::init_default_tracing;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: fuel_dashboard_snapshot <table|chart-rows|frame|png> \
[--select <model>]... [--data <path>] [--config <path>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Table,
    ChartRows,
    Frame,
    Png,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    toggles: Vec<String>,
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let dataset = match &args.data {
        Some(path) => {
            FuelDataset::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?
        }
        None => FuelDataset::sample(),
    };
    let config = match &args.config {
        Some(path) => {
            DashboardConfig::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    }
    .with_redraw_on_change(false);

    match args.command {
        CommandKind::Png => write_png(&args, config, dataset),
        command => {
            let mut dashboard = FuelEconomyDashboard::new(NullRenderer::default(), config, dataset)
                .map_err(|err| err.to_string())?;
            apply_toggles(&mut dashboard, &args.toggles)?;

            let output = match command {
                CommandKind::Table => dashboard.detail_table().to_text(),
                CommandKind::ChartRows => to_json(dashboard.chart_rows())?,
                _ => {
                    let frame = dashboard.build_frame().map_err(|err| err.to_string())?;
                    frame.validate().map_err(|err| err.to_string())?;
                    to_json(&frame.summary())?
                }
            };
            emit(args.output.as_deref(), &output)
        }
    }
}

fn apply_toggles<R: fuel_dashboard::render::Renderer>(
    dashboard: &mut FuelEconomyDashboard<R>,
    toggles: &[String],
) -> Result<(), String> {
    for model in toggles {
        dashboard
            .toggle_model(model)
            .map_err(|err| format!("failed to toggle `{model}`: {err}"))?;
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    args: &CliArgs,
    config: DashboardConfig,
    dataset: FuelDataset,
) -> Result<(), String> {
    use fuel_dashboard::render::CairoRenderer;

    let output = args
        .output
        .as_deref()
        .ok_or_else(|| "png requires --output <path>".to_owned())?;
    let renderer = CairoRenderer::for_viewport(config.viewport).map_err(|err| err.to_string())?;

    let mut dashboard =
        FuelEconomyDashboard::new(renderer, config, dataset).map_err(|err| err.to_string())?;
    apply_toggles(&mut dashboard, &args.toggles)?;
    dashboard.render().map_err(|err| err.to_string())?;
    dashboard
        .renderer()
        .write_png(output)
        .map_err(|err| err.to_string())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _args: &CliArgs,
    _config: DashboardConfig,
    _dataset: FuelDataset,
) -> Result<(), String> {
    Err("png output requires the `cairo-backend` feature".to_owned())
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|err| format!("failed to serialize json: {err}"))
}

fn emit(output: Option<&Path>, content: &str) -> Result<(), String> {
    match output {
        Some(path) => fs::write(path, content)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("table") => CommandKind::Table,
        Some("chart-rows") => CommandKind::ChartRows,
        Some("frame") => CommandKind::Frame,
        Some("png") => CommandKind::Png,
        _ => return Err(USAGE.to_owned()),
    };

    let mut toggles = Vec::new();
    let mut data = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--select" => toggles.push(value()?),
            "--data" => data = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--output" => output = Some(PathBuf::from(value()?)),
            _ => return Err(format!("unknown flag `{flag}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        toggles,
        data,
        config,
        output,
    })
}
