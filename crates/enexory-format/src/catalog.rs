//! Catalog output.

use enexory_types::SeriesCatalog;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

use crate::FormatError;

/// Writes the catalog as a JSON object keyed by id, ascending, indented by
/// four spaces.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_catalog_json<W: Write>(catalog: &SeriesCatalog, mut writer: W) -> Result<(), FormatError> {
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    catalog.serialize(&mut serializer)?;
    writeln!(writer)?;
    Ok(())
}
