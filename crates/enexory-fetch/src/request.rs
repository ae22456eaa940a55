//! Request bodies for the Enexory REST endpoint.

use enexory_types::{ApiKey, DateRange, SeriesId};
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// Default REST endpoint.
pub const API_ENDPOINT: &str = "https://app.enexory.com/rest/";

/// A JSON request body: the credential plus a method and its parameters.
///
/// # Example
///
/// ```
/// use enexory_fetch::request::ApiRequest;
/// use enexory_types::ApiKey;
///
/// let key = ApiKey::new("k");
/// let body = serde_json::to_string(&ApiRequest::all_data_types(&key)).unwrap();
/// assert_eq!(body, r#"{"key":"k","method":"get_all_data_types"}"#);
/// ```
#[derive(Debug, Serialize)]
pub struct ApiRequest<'a> {
    #[serde(serialize_with = "expose_key")]
    key: &'a ApiKey,
    #[serde(flatten)]
    method: Method<'a>,
}

/// API method with its parameters.
#[derive(Debug, Serialize)]
#[serde(tag = "method")]
pub enum Method<'a> {
    /// List every series id and name.
    #[serde(rename = "get_all_data_types")]
    AllDataTypes,
    /// Download data for a set of series over an inclusive date interval.
    #[serde(rename = "getdata")]
    GetData {
        /// Requested series, in column order.
        data_ids: &'a [SeriesId],
        /// Interval start, `YYYY-MM-DD` or a verbatim string.
        date_from: Cow<'a, str>,
        /// Interval end, `YYYY-MM-DD` or a verbatim string.
        date_to: Cow<'a, str>,
    },
}

impl<'a> ApiRequest<'a> {
    /// Body for the catalog request.
    #[must_use]
    pub const fn all_data_types(key: &'a ApiKey) -> Self {
        Self {
            key,
            method: Method::AllDataTypes,
        }
    }

    /// Body for a series data request.
    #[must_use]
    pub fn get_data(key: &'a ApiKey, ids: &'a [SeriesId], range: &'a DateRange) -> Self {
        Self {
            key,
            method: Method::GetData {
                data_ids: ids,
                date_from: range.start.as_param(),
                date_to: range.end.as_param(),
            },
        }
    }
}

fn expose_key<S: Serializer>(key: &&ApiKey, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(key.expose())
}
