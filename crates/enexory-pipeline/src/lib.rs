//! Post-processing pipeline for enexory time-series tables.
//!
//! This crate provides the three table transformations and their composition:
//!
//! - [`Resampler`] - Bucket-mean resampling to a fixed [`Step`](enexory_types::Step)
//! - [`OutlierFilter`] - Column-by-column removal of rows far from the mean
//! - [`forward_fill`] - Last-observation-carried-forward gap filling
//! - [`ColumnStats`] - Mean and standard deviation of a column
//! - [`Pipeline`] - All three stages in order

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod fill;
mod outliers;
mod pipeline;
mod resample;
mod stats;

pub use fill::forward_fill;
pub use outliers::{ColumnOutcome, OutlierFilter, OutlierReport};
pub use pipeline::{Pipeline, PipelineOutput};
pub use resample::{Resampler, bucket_start, resample};
pub use stats::ColumnStats;
