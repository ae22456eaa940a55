//! Series command implementation.
//!
//! Downloads the requested series, parses them into a table and runs the
//! post-processing pipeline, printing a summary after every stage.

use anyhow::{Context, Result};
use enexory_lib::prelude::*;
use std::io::Write;
use tracing::info;

use crate::display::{TableSink, print_stage};

/// Download, parse and clean the given series, reporting to `out`.
pub(crate) fn show_series<W: Write>(
    client: &ApiClient,
    ids: &[SeriesId],
    range: &DateRange,
    pipeline: Pipeline,
    sink: Option<&TableSink>,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let catalog = client
        .fetch_catalog()
        .context("Failed to load the series catalog")?
        .catalog;
    let names = catalog.names_for(ids)?;

    let text = client
        .fetch_series(ids, range)
        .with_context(|| format!("Failed to download series for {range}"))?;
    if !quiet {
        writeln!(out, "{text}")?;
    }

    let table = parse_table(&text, &names).context("Failed to parse series data")?;
    print_stage(out, "Parsed", &table)?;

    let table = pipeline.resample(table);
    print_stage(out, &format!("Resampled to {}", pipeline.step()), &table)?;

    let (table, report) = pipeline.remove_outliers(table);
    write!(out, "{report}")?;
    print_stage(
        out,
        &format!("Outliers removed at {} sigma", pipeline.sigmas()),
        &table,
    )?;

    let table = pipeline.fill(table);
    print_stage(out, "Forward filled", &table)?;

    if let Some(sink) = sink {
        sink.write(&table)?;
        info!(rows = table.len(), "{sink}");
    }
    Ok(())
}
