//! Series catalog parsing.

use enexory_types::{SeriesCatalog, SeriesId};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Header field holding the series name.
pub const NAME_FIELD: &str = "data_name";

/// Header field holding the numeric series id.
pub const ID_FIELD: &str = "api_id";

const SEPARATOR: char = ';';

/// Errors that make a catalog response unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The response body has no header line.
    #[error("catalog response is empty")]
    Empty,

    /// The header does not name a required field.
    #[error("catalog header is missing the '{field}' field")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

/// A catalog line that was skipped because its id is not numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the response.
    pub line: usize,
    /// The raw id text.
    pub id: String,
    /// All fields of the line.
    pub fields: Vec<String>,
}

/// Result of parsing a catalog response.
#[derive(Debug, Clone, Default)]
pub struct CatalogParse {
    /// Parsed id → name mapping.
    pub catalog: SeriesCatalog,
    /// Lines that were dropped with a warning.
    pub skipped: Vec<SkippedLine>,
}

/// Column positions of the required header fields.
#[derive(Debug, Clone, Copy)]
struct HeaderIndex {
    id: usize,
    name: usize,
}

impl HeaderIndex {
    fn from_header(header: &str) -> Result<Self, CatalogError> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (i, field) in header.split(SEPARATOR).enumerate() {
            // first occurrence wins
            positions.entry(field.trim()).or_insert(i);
        }

        let lookup = |field: &'static str| {
            positions
                .get(field)
                .copied()
                .ok_or(CatalogError::MissingField { field })
        };

        Ok(Self {
            name: lookup(NAME_FIELD)?,
            id: lookup(ID_FIELD)?,
        })
    }

    const fn min_fields(&self) -> usize {
        if self.id > self.name {
            self.id + 1
        } else {
            self.name + 1
        }
    }
}

/// Parses the semicolon-delimited catalog returned by `get_all_data_types`.
///
/// The first line is a header naming the fields; `data_name` and `api_id`
/// must be among them. Lines with too few fields are ignored. Lines whose id
/// is not an integer are logged, recorded in [`CatalogParse::skipped`], and
/// left out of the catalog.
///
/// # Errors
///
/// Returns an error if the body is empty or the header lacks a required field.
pub fn parse_catalog(text: &str) -> Result<CatalogParse, CatalogError> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .filter(|h| !h.trim().is_empty())
        .ok_or(CatalogError::Empty)?;
    let index = HeaderIndex::from_header(header)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        if fields.len() < index.min_fields() {
            if !line.is_empty() {
                debug!(line = line_no, "catalog line has too few fields, ignoring");
            }
            continue;
        }

        let raw_id = fields[index.id];
        match raw_id.trim().parse::<u32>() {
            Ok(id) => entries.push((SeriesId::new(id), fields[index.name].to_string())),
            Err(e) => {
                warn!(line = line_no, id = raw_id, "{e}\n\t{fields:?}");
                skipped.push(SkippedLine {
                    line: line_no,
                    id: raw_id.to_string(),
                    fields: fields.iter().map(|f| (*f).to_string()).collect(),
                });
            }
        }
    }

    Ok(CatalogParse {
        catalog: entries.into_iter().collect(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let text = "api_id;data_name;unit\n1;Spot price;EUR/MWh\n2;Wind forecast;MW\n";
        let parsed = parse_catalog(text).unwrap();

        assert_eq!(parsed.catalog.len(), 2);
        assert_eq!(parsed.catalog.get(SeriesId::new(2)), Some("Wind forecast"));
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_header_order_is_discovered() {
        let text = "unit;data_name;country;api_id\r\nMW;Load;DE;17\r\n";
        let parsed = parse_catalog(text).unwrap();
        assert_eq!(parsed.catalog.get(SeriesId::new(17)), Some("Load"));
    }

    #[test]
    fn test_duplicate_header_field_uses_first() {
        let text = "api_id;data_name;data_name\n5;Spot;Ignored\n";
        let parsed = parse_catalog(text).unwrap();
        assert_eq!(parsed.catalog.get(SeriesId::new(5)), Some("Spot"));
    }

    #[test]
    fn test_missing_api_id_field() {
        let text = "id;data_name\n1;Spot price\n";
        assert_eq!(
            parse_catalog(text).unwrap_err(),
            CatalogError::MissingField { field: ID_FIELD }
        );
    }

    #[test]
    fn test_missing_data_name_field() {
        let text = "api_id;name\n1;Spot price\n";
        assert_eq!(
            parse_catalog(text).unwrap_err(),
            CatalogError::MissingField { field: NAME_FIELD }
        );
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(parse_catalog("").unwrap_err(), CatalogError::Empty);
        assert_eq!(parse_catalog("\n1;x\n").unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_non_numeric_id_is_skipped_with_warning() {
        let text = "api_id;data_name\n1;Spot price\nabc;Broken\n3;Solar\n";
        let parsed = parse_catalog(text).unwrap();

        assert_eq!(parsed.catalog.len(), 2);
        assert_eq!(parsed.catalog.get(SeriesId::new(3)), Some("Solar"));
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 3);
        assert_eq!(parsed.skipped[0].id, "abc");
    }

    #[test]
    fn test_short_lines_are_ignored() {
        let text = "data_name;unit;api_id\nSpot;EUR\n\nSolar;MW;9";
        let parsed = parse_catalog(text).unwrap();

        assert_eq!(parsed.catalog.len(), 1);
        assert_eq!(parsed.catalog.get(SeriesId::new(9)), Some("Solar"));
        assert!(parsed.skipped.is_empty());
    }
}
