//! Catalog command implementation.

use anyhow::{Context, Result};
use enexory_lib::prelude::*;
use std::io::Write;

/// Print every available series as a JSON object of id → name.
pub(crate) fn show_catalog(client: &ApiClient) -> Result<()> {
    let parsed = client
        .fetch_catalog()
        .context("Failed to load the series catalog")?;

    let mut stdout = std::io::stdout().lock();
    write_catalog_json(&parsed.catalog, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
