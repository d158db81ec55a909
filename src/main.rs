//! Command-line entry point.
//!
//! Each subcommand maps to one screen of the application. The command builds
//! the events a user would produce on that screen, runs them through the
//! library's event loop, prints the resulting notices and renders the screen.
//!
//! # Commands
//!
//! - (none): Home summary
//! - `register`: Fill the form from options, optionally scan the plate, save
//! - `list [--filter Q]`: Registered motorcycles
//! - `scan <image>`: Recognize a plate without saving
//! - `map`: Visible yard elements after zoom and pan steps
//! - `about`: Version and credits
//!
//! Exit code is 1 when a command ends with an error notice or fails outright.

#![allow(clippy::multiple_crate_versions)]

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand, ValueEnum};
use radar_motu::app::{MapControl, Notice, Runtime};
use radar_motu::capture::{
    CaptureSource, FileImageSource, OcrCapture, PlateCapture, RecognitionResult,
};
use radar_motu::domain::Field;
use radar_motu::registry::ListingStatus;
use radar_motu::storage::JsonStorage;
use radar_motu::ui::{self, render_notice, DEFAULT_COLS};
use radar_motu::yard::PAN_STEP;
use radar_motu::{initialize, observability, AppState, Config, Event, Result, Screen};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "radar-motu", version, about)]
struct Cli {
    /// Configuration file (default: <data dir>/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the registry, log and config
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `radar_motu=trace`
    #[arg(long, global = true, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Print without colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a motorcycle
    Register(RegisterArgs),

    /// List registered motorcycles
    List {
        /// Fuzzy filter on plate, brand, model, color and chassis
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Recognize the plate in an image
    Scan {
        /// Image file to upload
        image: PathBuf,

        #[arg(long, value_enum, default_value_t = SourceArg::Gallery)]
        source: SourceArg,
    },

    /// Show the yard map
    Map(MapArgs),

    /// Show version and credits
    About,
}

#[derive(Debug, Args)]
struct RegisterArgs {
    #[arg(long)]
    plate: Option<String>,

    #[arg(long)]
    brand: Option<String>,

    #[arg(long)]
    model: Option<String>,

    #[arg(long)]
    color: Option<String>,

    #[arg(long)]
    manufacture_year: Option<String>,

    #[arg(long)]
    model_year: Option<String>,

    #[arg(long)]
    chassis: Option<String>,

    /// Fill the plate from this image before saving
    #[arg(long, value_name = "IMAGE")]
    scan: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SourceArg::Camera)]
    source: SourceArg,
}

impl RegisterArgs {
    fn field_events(&self) -> Vec<Event> {
        [
            (Field::Plate, &self.plate),
            (Field::Brand, &self.brand),
            (Field::Model, &self.model),
            (Field::Color, &self.color),
            (Field::ManufactureYear, &self.manufacture_year),
            (Field::ModelYear, &self.model_year),
            (Field::Chassis, &self.chassis),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value.as_ref().map(|value| Event::FieldChanged {
                field,
                value: value.clone(),
            })
        })
        .collect()
    }
}

#[derive(Debug, Args)]
struct MapArgs {
    /// Zoom in this many steps
    #[arg(long, default_value_t = 0, value_name = "STEPS")]
    zoom_in: u32,

    /// Zoom out this many steps
    #[arg(long, default_value_t = 0, value_name = "STEPS")]
    zoom_out: u32,

    /// Pan by DX,DY screen units; repeatable
    #[arg(long, value_parser = parse_pan, allow_hyphen_values = true, value_name = "DX,DY")]
    pan: Vec<PanStep>,

    /// Pan steps of 30 units: left, right, up or down; repeatable
    #[arg(long = "move", value_enum, value_name = "DIRECTION")]
    moves: Vec<Direction>,
}

impl MapArgs {
    fn events(&self) -> Vec<Event> {
        let zoom_in = (0..self.zoom_in).map(|_| MapControl::ZoomIn);
        let zoom_out = (0..self.zoom_out).map(|_| MapControl::ZoomOut);
        let pans = self
            .pan
            .iter()
            .map(|p| MapControl::Pan { dx: p.dx, dy: p.dy });
        let moves = self.moves.iter().map(|d| d.control());

        zoom_in
            .chain(zoom_out)
            .chain(pans)
            .chain(moves)
            .map(Event::Map)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanStep {
    dx: f64,
    dy: f64,
}

fn parse_pan(value: &str) -> std::result::Result<PanStep, String> {
    let (dx, dy) = value
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid offset `{part}`: {e}"))
    };
    Ok(PanStep {
        dx: parse(dx)?,
        dy: parse(dy)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    const fn control(self) -> MapControl {
        match self {
            Self::Left => MapControl::Pan { dx: -PAN_STEP, dy: 0.0 },
            Self::Right => MapControl::Pan { dx: PAN_STEP, dy: 0.0 },
            Self::Up => MapControl::Pan { dx: 0.0, dy: -PAN_STEP },
            Self::Down => MapControl::Pan { dx: 0.0, dy: PAN_STEP },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Camera,
    Gallery,
}

impl From<SourceArg> for CaptureSource {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Camera => Self::Camera,
            SourceArg::Gallery => Self::Gallery,
        }
    }
}

/// Capture collaborator for commands that take no photo.
struct NoCapture;

#[async_trait]
impl PlateCapture for NoCapture {
    async fn capture(&self, _source: CaptureSource) -> Result<Option<RecognitionResult>> {
        Ok(None)
    }
}

type CliRuntime = Runtime<JsonStorage, Box<dyn PlateCapture>>;

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(level) = &cli.trace_level {
        config.trace_level = Some(level.clone());
    }
    if cli.no_color {
        config.no_color = true;
    }

    Ok(config)
}

fn capture_for(config: &Config, image: Option<&PathBuf>) -> Result<Box<dyn PlateCapture>> {
    match image {
        Some(path) => {
            let images = FileImageSource::new(path);
            let client = config.ocr_client()?;
            tracing::info!(
                image = %images.path().display(),
                endpoint = client.endpoint(),
                "capturing plate from file"
            );
            Ok(Box::new(OcrCapture::new(images, client)))
        }
        None => Ok(Box::new(NoCapture)),
    }
}

fn print_notices(state: &AppState, notices: &[Notice]) {
    for notice in notices {
        let line = render_notice(notice, &state.theme);
        if notice.is_error() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Dispatches `events` in order, printing notices as they come.
///
/// Returns `true` if any event produced an error notice.
async fn run_events(runtime: &CliRuntime, state: &mut AppState, events: Vec<Event>) -> Result<bool> {
    let mut failed = false;
    for event in events {
        let notices = runtime.dispatch(state, event).await?;
        failed |= notices.iter().any(Notice::is_error);
        print_notices(state, &notices);
    }
    Ok(failed)
}

/// Fills the form from `args`, runs the optional scan, then submits.
///
/// Returns `true` if either the scan or the save produced an error notice.
async fn register(runtime: &CliRuntime, state: &mut AppState, args: &RegisterArgs) -> Result<bool> {
    let mut events = vec![Event::Navigate(Screen::Register)];
    events.extend(args.field_events());
    if args.scan.is_some() {
        events.push(Event::RequestCapture(args.source.into()));
    }
    let scan_failed = run_events(runtime, state, events).await?;

    let submit_failed = run_events(runtime, state, vec![Event::Submit]).await?;
    if submit_failed {
        println!("{}", ui::render(state, DEFAULT_COLS));
    }
    Ok(scan_failed || submit_failed)
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    observability::init_tracing(&config);
    tracing::info!(data_dir = ?config.data_dir, command = ?cli.command, "radar-motu starting");

    let mut state = initialize(&config);
    let worker = config.open_registry()?;

    let Some(command) = cli.command else {
        println!("{}", ui::render(&state, DEFAULT_COLS));
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Register(args) => {
            let runtime = Runtime::new(worker, capture_for(&config, args.scan.as_ref())?);
            let failed = register(&runtime, &mut state, &args).await?;
            Ok(exit_code(failed))
        }
        Command::List { filter } => {
            let runtime = Runtime::new(worker, capture_for(&config, None)?);

            let mut events = vec![Event::Navigate(Screen::List)];
            if let Some(query) = filter {
                events.push(Event::Filter(query));
            }
            run_events(&runtime, &mut state, events).await?;

            println!("{}", ui::render(&state, DEFAULT_COLS));
            let failed = matches!(state.listing.status(), ListingStatus::LoadFailed(_));
            Ok(exit_code(failed))
        }
        Command::Scan { image, source } => {
            let runtime = Runtime::new(worker, capture_for(&config, Some(&image))?);

            let events = vec![
                Event::Navigate(Screen::Register),
                Event::RequestCapture(source.into()),
            ];
            let failed = run_events(&runtime, &mut state, events).await?;
            Ok(exit_code(failed || state.form.plate.is_empty()))
        }
        Command::Map(args) => {
            let runtime = Runtime::new(worker, capture_for(&config, None)?);

            let mut events = vec![Event::Navigate(Screen::Map)];
            events.extend(args.events());
            run_events(&runtime, &mut state, events).await?;

            println!("{}", ui::render(&state, DEFAULT_COLS));
            Ok(ExitCode::SUCCESS)
        }
        Command::About => {
            state.screen = Screen::About;
            println!("{}", ui::render(&state, DEFAULT_COLS));
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("radar-motu: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pan_values_parse() {
        assert_eq!(parse_pan("30,-15").unwrap(), PanStep { dx: 30.0, dy: -15.0 });
        assert!(parse_pan("30").is_err());
        assert!(parse_pan("a,b").is_err());
    }

    #[test]
    fn register_options_become_field_events() {
        let cli = Cli::parse_from([
            "radar-motu",
            "register",
            "--plate",
            "ABC1D23",
            "--manufacture-year",
            "2022",
        ]);
        let Some(Command::Register(args)) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(
            args.field_events(),
            vec![
                Event::FieldChanged { field: Field::Plate, value: "ABC1D23".into() },
                Event::FieldChanged { field: Field::ManufactureYear, value: "2022".into() },
            ]
        );
    }

    struct Recognizes(&'static str);

    #[async_trait]
    impl PlateCapture for Recognizes {
        async fn capture(&self, _source: CaptureSource) -> Result<Option<RecognitionResult>> {
            Ok(Some(RecognitionResult::Recognized(self.0.to_owned())))
        }
    }

    fn register_args(model_year: &str, extra: &[&str]) -> RegisterArgs {
        let mut argv = vec![
            "radar-motu", "register",
            "--plate", "ABC1D23",
            "--brand", "Honda",
            "--model", "CG 160",
            "--color", "Red",
            "--manufacture-year", "2022",
            "--model-year", model_year,
            "--chassis", "9C2KC2200NR000001",
        ];
        argv.extend_from_slice(extra);
        let Some(Command::Register(args)) = Cli::parse_from(argv).command else {
            panic!("expected register");
        };
        args
    }

    fn cli_runtime(dir: &tempfile::TempDir, capture: Box<dyn PlateCapture>) -> CliRuntime {
        let storage = JsonStorage::new(dir.path().join("registry.json")).unwrap();
        Runtime::new(radar_motu::worker::RegistryWorker::new(storage), capture)
    }

    #[tokio::test]
    async fn rejected_scan_fails_the_register_command() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = cli_runtime(&dir, Box::new(Recognizes("Plate not detected")));
        let mut state = AppState::new(radar_motu::Theme::default().into_plain());

        let args = register_args("2023", &["--scan", "plate.jpg"]);
        assert!(register(&runtime, &mut state, &args).await.unwrap());
    }

    #[tokio::test]
    async fn accepted_scan_and_save_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = cli_runtime(&dir, Box::new(Recognizes("xyz7f89")));
        let mut state = AppState::new(radar_motu::Theme::default().into_plain());

        let args = register_args("2023", &["--scan", "plate.jpg"]);
        assert!(!register(&runtime, &mut state, &args).await.unwrap());

        let saved = runtime.worker().store().load_all().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].plate, "XYZ7F89");
    }

    #[tokio::test]
    async fn malformed_year_option_fails_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = cli_runtime(&dir, Box::new(NoCapture));
        let mut state = AppState::new(radar_motu::Theme::default().into_plain());

        let args = register_args("20ab23", &[]);
        assert!(register(&runtime, &mut state, &args).await.unwrap());
        assert!(runtime.worker().store().load_all().unwrap().is_empty());
    }

    #[test]
    fn map_steps_in_order() {
        let cli = Cli::parse_from([
            "radar-motu", "map", "--zoom-in", "2", "--pan", "-30,10", "--move", "down",
        ]);
        let Some(Command::Map(args)) = cli.command else {
            panic!("expected map");
        };
        assert_eq!(
            args.events(),
            vec![
                Event::Map(MapControl::ZoomIn),
                Event::Map(MapControl::ZoomIn),
                Event::Map(MapControl::Pan { dx: -30.0, dy: 10.0 }),
                Event::Map(MapControl::Pan { dx: 0.0, dy: PAN_STEP }),
            ]
        );
    }
}
