//! Client library for the Enexory time-series API.
//!
//! This is a facade crate that re-exports functionality from the enexory
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use enexory_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::with_defaults(ApiKey::new("my-key"))?;
//!     let catalog = client.fetch_catalog()?.catalog;
//!
//!     let ids = [SeriesId::new(1)];
//!     let range = DateRange::new(parse_date("2024-01-01")?, parse_date("2024-01-11")?)?;
//!     let text = client.fetch_series(&ids, &range)?;
//!     let table = parse_table(&text, &catalog.names_for(&ids)?)?;
//!
//!     let output = Pipeline::default().run(table);
//!     print!("{}", output.outliers);
//!     println!("{}", describe(&output.table));
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use enexory_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use enexory_fetch::{
    ApiClient, CatalogError, CatalogParse, ClientConfig, DecompressError, FetchError, ParseError,
    SkippedLine, inflate_raw, parse_catalog, parse_table, parse_timestamp,
};

// Re-export the pipeline
#[cfg(feature = "pipeline")]
pub use enexory_pipeline::{
    ColumnOutcome, ColumnStats, OutlierFilter, OutlierReport, Pipeline, PipelineOutput,
    Resampler, forward_fill, resample,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use enexory_format::{
    ColumnSummary, CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
    TableSummary, describe, write_catalog_json,
};

/// Prelude module for convenient imports.
///
/// ```
/// use enexory_lib::prelude::*;
/// ```
pub mod prelude {
    pub use enexory_types::{
        ApiKey, DateRange, DateRangeError, Row, SeriesCatalog, SeriesId, Step, TimeTable,
        UnknownSeriesError, parse_date,
    };

    #[cfg(feature = "fetch")]
    pub use enexory_fetch::{ApiClient, ClientConfig, parse_table};

    #[cfg(feature = "pipeline")]
    pub use enexory_pipeline::{OutlierFilter, OutlierReport, Pipeline, PipelineOutput};

    #[cfg(feature = "format")]
    pub use enexory_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, describe, write_catalog_json,
    };
}
