//! Summaries and output formatters for enexory tables.
//!
//! - [`describe`] - Per-column count, mean, spread and quantiles
//! - [`CsvFormatter`] - Delimited text
//! - [`JsonFormatter`] - JSON array or NDJSON rows
//! - [`write_catalog_json`] - The series catalog as a pretty JSON object

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
#[cfg(feature = "csv")]
mod csv;
mod describe;
mod formatter;
#[cfg(feature = "json")]
mod json;

pub use catalog::write_catalog_json;
#[cfg(feature = "csv")]
pub use crate::csv::CsvFormatter;
pub use describe::{ColumnSummary, TableSummary, describe};
pub use formatter::{FormatError, Formatter, OutputFormat, TIMESTAMP_FORMAT};
#[cfg(feature = "json")]
pub use json::{JsonFormatter, JsonStyle};
