//! Blocking HTTP client for the Enexory REST endpoint.

use enexory_types::{ApiKey, DateRange, SeriesId};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::request::{API_ENDPOINT, ApiRequest};
use crate::{CatalogError, CatalogParse, DecompressError, inflate_raw, parse_catalog};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST endpoint every request is posted to.
    pub endpoint: String,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.to_string(),
            user_agent: format!("enexory/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while talking to the API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status other than 200.
    #[error("Response status code: {status}\n\t{body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Series payload is not raw deflate.
    #[error(transparent)]
    Decompress(#[from] DecompressError),

    /// Catalog response is missing required header fields.
    #[error(transparent)]
    MalformedResponse(#[from] CatalogError),

    /// Response text is not UTF-8.
    #[error("response is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A data request needs at least one series id.
    #[error("no series ids requested")]
    NoSeries,
}

/// Fails unless the status is exactly 200, carrying the body text.
fn check_status(status: StatusCode, body: &[u8]) -> Result<(), FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::Remote {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    Ok(())
}

/// Blocking API client bound to one credential.
///
/// Every call is a single POST; there are no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    key: ApiKey,
}

impl ApiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(key: ApiKey, config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            config,
            key,
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults(key: ApiKey) -> Result<Self, reqwest::Error> {
        Self::new(key, ClientConfig::default())
    }

    /// Posts a request and returns the body of a 200 response.
    fn post(&self, request: &ApiRequest<'_>) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        check_status(status, &body)?;
        Ok(body)
    }

    /// Loads the full id → name catalog.
    ///
    /// Lines with a non-numeric id are skipped and listed in
    /// [`CatalogParse::skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Remote`] on a non-200 status and
    /// [`FetchError::MalformedResponse`] if the header lacks `data_name` or
    /// `api_id`.
    pub fn fetch_catalog(&self) -> Result<CatalogParse, FetchError> {
        info!("Loading API data types with ids from {}", self.config.endpoint);
        let body = self.post(&ApiRequest::all_data_types(&self.key))?;
        let text = String::from_utf8(body)?;
        let parsed = parse_catalog(&text)?;
        info!(
            series = parsed.catalog.len(),
            skipped = parsed.skipped.len(),
            "catalog loaded"
        );
        Ok(parsed)
    }

    /// Downloads series data and returns the decompressed delimited text.
    ///
    /// Columns in the result follow the order of `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NoSeries`] for an empty id list (no request is
    /// sent), [`FetchError::Remote`] on a non-200 status and
    /// [`FetchError::Decompress`] if the payload is not raw deflate.
    pub fn fetch_series(&self, ids: &[SeriesId], range: &DateRange) -> Result<String, FetchError> {
        if ids.is_empty() {
            return Err(FetchError::NoSeries);
        }
        info!(
            "Loading data ids {:?} from {} from {}",
            ids.iter().map(SeriesId::get).collect::<Vec<_>>(),
            range,
            self.config.endpoint
        );

        let compressed = self.post(&ApiRequest::get_data(&self.key, ids, range))?;
        let decompressed = inflate_raw(&compressed)?;
        debug!(
            compressed = compressed.len(),
            decompressed = decompressed.len(),
            "series payload inflated"
        );
        Ok(String::from_utf8(decompressed)?)
    }
}
