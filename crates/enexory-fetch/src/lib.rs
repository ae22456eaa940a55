//! HTTP client and response parsing for the enexory time-series API.
//!
//! This crate provides the data download path:
//!
//! - [`request::ApiRequest`] - JSON request bodies for the REST endpoint
//! - [`ApiClient`] - Blocking HTTP client with a fail-fast status check
//! - [`inflate_raw`] - Raw deflate decompression
//! - [`parse_catalog`] - Series catalog parsing
//! - [`parse_table`] - Semicolon-delimited series data parsing

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod client;
mod decompress;
mod parse;
pub mod request;

pub use catalog::{CatalogError, CatalogParse, SkippedLine, parse_catalog};
pub use client::{ApiClient, ClientConfig, FetchError};
pub use decompress::{DecompressError, inflate_raw};
pub use parse::{ParseError, parse_table, parse_timestamp};
