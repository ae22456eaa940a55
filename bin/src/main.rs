//! enexory CLI - Fetch, clean and summarize Enexory time series.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use enexory_lib::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::{Format, TableSink};

/// Environment variable holding `tracing` filter directives.
const LOG_ENV: &str = "LOGLEVEL";

#[derive(Parser)]
#[command(name = "enexory")]
#[command(about = "Fetch, clean and summarize Enexory time series", long_about = None)]
#[command(version)]
struct Cli {
    /// API key
    #[arg(long, env = "ENEXORY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Series ids to download. Without ids the catalog is printed.
    #[arg(long = "id", num_args = 1..)]
    ids: Vec<SeriesId>,

    /// Start date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    from: Option<String>,

    /// End date (YYYY-MM-DD). Defaults to ten days after the start.
    #[arg(long)]
    to: Option<String>,

    /// Resample step (e.g. 15m, 1h, 4h, 1d)
    #[arg(long, default_value = "4h")]
    step: Step,

    /// Outlier threshold in standard deviations (positive)
    #[arg(long = "sigma", value_parser = parse_sigma, default_value = "10")]
    outliers: OutlierFilter,

    /// Override the REST endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Write the processed table to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format of the processed table (defaults to the output file's extension, or csv)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Do not print the raw response text
    #[arg(short, long)]
    quiet: bool,
}

/// Parses `--sigma` into a validated outlier filter.
fn parse_sigma(s: &str) -> std::result::Result<OutlierFilter, String> {
    let sigmas: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    OutlierFilter::new(sigmas).ok_or_else(|| format!("{sigmas} is not a positive finite number"))
}

/// Installs the global subscriber; logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl Cli {
    /// Resolves `--from`/`--to`, defaulting to `today` and ten days after `today`.
    fn date_range(&self, today: NaiveDate) -> Result<DateRange> {
        let default = DateRange::default_window(today);
        let start = match &self.from {
            Some(s) => parse_date(s).with_context(|| format!("Invalid start date: {s}"))?,
            None => today,
        };
        let end = match &self.to {
            Some(s) => parse_date(s).with_context(|| format!("Invalid end date: {s}"))?,
            None => default.end.date().unwrap_or(today),
        };
        Ok(DateRange::new(start, end)?)
    }

    fn client(&self) -> Result<ApiClient> {
        let mut config = ClientConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        ApiClient::new(ApiKey::new(self.api_key.clone()), config)
            .context("Failed to create HTTP client")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let client = cli.client()?;

    if cli.ids.is_empty() {
        return commands::catalog::show_catalog(&client);
    }

    let range = cli.date_range(chrono::Local::now().date_naive())?;
    let pipeline = Pipeline::new(cli.step).with_filter(cli.outliers);
    let sink = TableSink::from_args(cli.output.clone(), cli.format);

    let mut stdout = std::io::stdout().lock();
    commands::series::show_series(
        &client,
        &cli.ids,
        &range,
        pipeline,
        sink.as_ref(),
        cli.quiet,
        &mut stdout,
    )
}
