//! Core types for the enexory time-series API client.
//!
//! This crate provides the fundamental data structures used throughout enexory:
//!
//! - [`SeriesId`] - Numeric identifier of a data series on the API
//! - [`SeriesCatalog`] - Mapping of series ids to human-readable names
//! - [`TimeTable`] - Timestamp-indexed table with one optional value per series
//! - [`Step`] - Fixed time step used for resampling
//! - [`DateRange`] - Date range for data retrieval

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod series;
mod step;
mod table;

pub use date_range::{DATE_FORMAT, DateBound, DateRange, parse_date};
pub use error::{DateRangeError, TableError, UnknownSeriesError};
pub use series::{ApiKey, SeriesCatalog, SeriesId};
pub use step::{Step, StepParseError};
pub use table::{Row, TimeTable};
