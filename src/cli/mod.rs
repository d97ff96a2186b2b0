//! Command-line front end: loads entries, evaluates the view and prints a report.

pub mod render;
pub mod system_clock;

use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use cashflow_config::{Config, ConfigManager};
use cashflow_core::{CashflowView, Clock, EntrySource, FixedClock};
use cashflow_domain::CertaintyFilter;
use cashflow_storage_json::JsonEntrySource;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use crate::errors::AppError;
use render::{render_json, render_text, RenderOptions, Report};
use system_clock::SystemClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Forward-looking cash-flow calendar.
#[derive(Debug, Parser)]
#[command(name = "cashflow_cli", version)]
pub struct Cli {
    /// Entry document (`startingBalance` + `entries`). Defaults to the configured file.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Project only entries of complete or high certainty.
    #[arg(long)]
    pub high_certainty: bool,

    /// Evaluate day offsets against this date instead of the system clock.
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Directory holding `config/config.json`. Defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "date must use YYYY-MM-DD format".to_string())
}

pub fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let mut handle = stdout.lock();
    run(&cli, is_tty, &mut handle)
}

/// Executes one report pass and writes it to `out`.
pub fn run(cli: &Cli, is_tty: bool, out: &mut dyn Write) -> Result<(), AppError> {
    let config = load_config(cli)?;
    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| config.resolve_data_file());
    let source = JsonEntrySource::new(data_path);
    let document = source.load_document()?;
    info!(source = %source.describe(), "evaluating cash-flow view");

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };
    let mut view = CashflowView::new(document.entries, document.starting_balance)
        .with_filter(CertaintyFilter::from_high_only(cli.high_certainty));

    let mut options = RenderOptions::from_config(&config);
    options.color = options.color
        && is_tty
        && !cli.no_color
        && std::env::var_os("NO_COLOR").is_none();

    let report = Report::build(&mut view, &*clock, options.soon_horizon);
    let rendered = match cli.format {
        OutputFormat::Text => render_text(&report, &options),
        OutputFormat::Json => {
            let mut json = render_json(&report)?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let manager = match &cli.config_dir {
        Some(dir) => ConfigManager::with_base_dir(dir.clone()),
        None => match ConfigManager::from_platform_dirs() {
            Ok(manager) => manager,
            Err(err) => {
                warn!(%err, "falling back to default configuration");
                return Ok(Config::default());
            }
        },
    };
    Ok(manager.load()?)
}
