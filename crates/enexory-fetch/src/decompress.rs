//! Raw deflate decompression for series payloads.

use flate2::read::DeflateDecoder;
use std::io::Read;
use thiserror::Error;

/// Errors that can occur during decompression.
#[derive(Error, Debug)]
pub enum DecompressError {
    /// The payload is not a valid raw deflate stream.
    #[error("raw deflate decompression failed: {0}")]
    Deflate(#[source] std::io::Error),

    /// Empty input data.
    #[error("Empty input data")]
    EmptyInput,
}

/// Inflates a raw deflate stream (no zlib or gzip header).
///
/// Series payloads from the `getdata` method are compressed this way.
///
/// # Errors
///
/// Returns an error if the input is empty or not valid raw deflate.
///
/// # Example
///
/// ```ignore
/// use enexory_fetch::inflate_raw;
///
/// let compressed = /* body of a getdata response */;
/// let text = String::from_utf8(inflate_raw(&compressed)?)?;
/// ```
pub fn inflate_raw(compressed: &[u8]) -> Result<Vec<u8>, DecompressError> {
    if compressed.is_empty() {
        return Err(DecompressError::EmptyInput);
    }

    let mut decompressed = Vec::with_capacity(compressed.len() * 4);
    DeflateDecoder::new(compressed)
        .read_to_end(&mut decompressed)
        .map_err(DecompressError::Deflate)?;

    Ok(decompressed)
}
