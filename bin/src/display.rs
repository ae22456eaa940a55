//! Display utilities and output formatting for the enexory CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use enexory_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output format for the processed table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Guesses the format from a file extension, falling back to CSV.
    pub(crate) fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse::<OutputFormat>().ok())
            .map_or(Self::Csv, Self::from)
    }

    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
            OutputFormat::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Where the processed table goes: a file, or stdout when only a format is given.
#[derive(Debug)]
pub(crate) struct TableSink {
    path: Option<PathBuf>,
    format: Format,
}

impl TableSink {
    /// Returns `None` when neither `--output` nor `--format` was given.
    pub(crate) fn from_args(path: Option<PathBuf>, format: Option<Format>) -> Option<Self> {
        match (path, format) {
            (None, None) => None,
            (path, Some(format)) => Some(Self { path, format }),
            (Some(path), None) => {
                let format = Format::from_path(&path);
                Some(Self {
                    path: Some(path),
                    format,
                })
            }
        }
    }

    /// Writes the table to the sink.
    pub(crate) fn write(&self, table: &TimeTable) -> Result<()> {
        match &self.path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                write_table(table, &mut writer, self.format)?;
                writer.flush()?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                write_table(table, &mut stdout, self.format)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for TableSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Wrote {} table to {}", self.format, path.display()),
            None => write!(f, "Wrote {} table to stdout", self.format),
        }
    }
}

/// Write a table in the specified format.
pub(crate) fn write_table<W: Write>(table: &TimeTable, writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_table(table, writer)?,
        Format::Json => JsonFormatter::new().write_table(table, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_table(table, writer)?,
    }
    Ok(())
}

/// Print a titled summary of a table.
pub(crate) fn print_stage<W: Write>(out: &mut W, title: &str, table: &TimeTable) -> Result<()> {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    write!(out, "{}", describe(table))?;
    Ok(())
}
