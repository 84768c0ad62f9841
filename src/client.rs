use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{AlertmanagerError, Result};
use crate::types::{
    Alert, AlertGroup, CreatedSilence, Envelope, Silence, SilenceCreateRequest, Status,
};

/// A decoded response together with its HTTP status
///
/// Only 2xx responses end up here. The body may still be an `error`
/// envelope, which callers must check through [`ApiResponse::is_success`] or
/// [`ApiResponse::into_data`].
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response
    pub status: StatusCode,
    /// Decoded response body
    pub body: Envelope<T>,
}

impl<T> ApiResponse<T> {
    /// Canonical reason phrase of the HTTP status
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }

    /// True when the body is a `success` envelope
    pub fn is_success(&self) -> bool {
        self.body.is_success()
    }

    /// Extract the payload, turning an `error` envelope into
    /// [`AlertmanagerError::Application`]
    pub fn into_data(self) -> Result<T> {
        match self.body {
            Envelope::Success { data } => Ok(data),
            Envelope::Error { error_type, error } => Err(AlertmanagerError::Application {
                error_type,
                message: error,
            }),
        }
    }
}

/// Client for the Alertmanager v1 HTTP API
///
/// Every method performs exactly one HTTP request against
/// `{base_url}/api/{api_version}/...`. Nothing is cached or retried, and
/// the client holds no per-call state, so it can be cloned and used from
/// several tasks at once.
///
/// # Example
///
/// ```rust,no_run
/// use alertmanager_client::{AlertmanagerClient, AlertMatcher, SilenceCreateRequest};
/// use url::Url;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AlertmanagerClient::new(Url::parse("http://localhost:9093")?)?;
///
///     let request = SilenceCreateRequest::new(
///         "2018-03-20T00:00:00.000000000Z",
///         "2018-04-20T23:59:59.999999999Z",
///     )
///     .with_matcher(AlertMatcher::exact("service", "hello"));
///
///     let created = client.create_silence(&request).await?.into_data()?;
///     let silence = client.get_silence(&created.silence_id).await?.into_data()?;
///     println!("{} is {}", silence.id, silence.state());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AlertmanagerClient {
    client: ClientWithMiddleware,
    base_url: Url,
    api_version: String,
}

impl AlertmanagerClient {
    /// Create a client for the `v1` API with no request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the URL
    /// cannot carry a path.
    pub fn new(base_url: Url) -> Result<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    /// Create a client for a specific API version
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Alertmanager instance (e.g., `http://localhost:9093`)
    /// * `api_version` - Segment inserted after `/api/` (e.g., `v1`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the URL
    /// cannot carry a path.
    pub fn with_version(base_url: Url, api_version: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::new(base_url).with_api_version(api_version))
    }

    /// Create a client from a [`ClientConfig`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// cannot carry a path.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(AlertmanagerError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Self::with_client(client, config.base_url.clone(), &config.api_version)
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// This allows you to add custom middleware (retry, auth, logging, etc.)
    ///
    /// # Arguments
    ///
    /// * `client` - Preconfigured middleware client used for every request
    /// * `base_url` - Base URL of the Alertmanager instance
    /// * `api_version` - Segment inserted after `/api/`
    ///
    /// # Errors
    ///
    /// Returns [`AlertmanagerError::InvalidBaseUrl`] if the URL cannot carry a path.
    pub fn with_client(
        client: ClientWithMiddleware,
        base_url: Url,
        api_version: &str,
    ) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(AlertmanagerError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            api_version: api_version.to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the API version segment
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// `GET /status`
    #[instrument(name = "AlertmanagerClient::get_status", skip_all)]
    pub async fn get_status(&self) -> Result<ApiResponse<Status>> {
        let url = self.endpoint(&["status"])?;
        self.execute(self.client.get(url)).await
    }

    /// `GET /receivers`: names of the configured receivers
    #[instrument(name = "AlertmanagerClient::get_receivers", skip_all)]
    pub async fn get_receivers(&self) -> Result<ApiResponse<Vec<String>>> {
        let url = self.endpoint(&["receivers"])?;
        self.execute(self.client.get(url)).await
    }

    /// `GET /alerts/groups`
    #[instrument(name = "AlertmanagerClient::get_alert_groups", skip_all)]
    pub async fn get_alert_groups(&self) -> Result<ApiResponse<Vec<AlertGroup>>> {
        let url = self.endpoint(&["alerts", "groups"])?;
        self.execute(self.client.get(url)).await
    }

    /// `GET /alerts`
    #[instrument(name = "AlertmanagerClient::get_alerts", skip_all)]
    pub async fn get_alerts(&self) -> Result<ApiResponse<Vec<Alert>>> {
        let url = self.endpoint(&["alerts"])?;
        self.execute(self.client.get(url)).await
    }

    /// `GET /silences`
    #[instrument(name = "AlertmanagerClient::get_silences", skip_all)]
    pub async fn get_silences(&self) -> Result<ApiResponse<Vec<Silence>>> {
        let url = self.endpoint(&["silences"])?;
        self.execute(self.client.get(url)).await
    }

    /// `POST /silences`
    ///
    /// The response carries only the id assigned by Alertmanager.
    #[instrument(
        name = "AlertmanagerClient::create_silence",
        skip_all,
        fields(matcher_count = silence.matchers.len())
    )]
    pub async fn create_silence(
        &self,
        silence: &SilenceCreateRequest,
    ) -> Result<ApiResponse<CreatedSilence>> {
        let url = self.endpoint(&["silences"])?;
        self.execute(self.client.post(url).json(silence)).await
    }

    /// `GET /silence/{id}`
    ///
    /// The id is sent as a single path segment and is not validated; an
    /// unknown or malformed id comes back as an HTTP error from the server.
    ///
    /// # Arguments
    ///
    /// * `id` - Silence identifier as returned by [`Self::create_silence`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - Alertmanager returns a non-success status code (e.g. 404 for an unknown id)
    /// - The 2xx body is not a valid silence envelope
    #[instrument(name = "AlertmanagerClient::get_silence", skip_all, fields(silence_id = %id))]
    pub async fn get_silence(&self, id: &str) -> Result<ApiResponse<Silence>> {
        let url = self.endpoint(&["silence", id])?;
        self.execute(self.client.get(url)).await
    }

    /// `DELETE /silence/{id}`
    ///
    /// Expires the silence. Alertmanager sends no payload on success, any
    /// `data` it does send is passed through untyped. A 2xx response with an
    /// empty body (e.g. a `204` from a proxy) counts as a successful deletion.
    ///
    /// # Arguments
    ///
    /// * `id` - Silence identifier, sent as one path segment without validation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - Alertmanager returns a non-success status code
    /// - A non-empty 2xx body is not a valid envelope
    #[instrument(name = "AlertmanagerClient::delete_silence", skip_all, fields(silence_id = %id))]
    pub async fn delete_silence(
        &self,
        id: &str,
    ) -> Result<ApiResponse<Option<serde_json::Value>>> {
        let url = self.endpoint(&["silence", id])?;
        let (status, bytes) = self.send(self.client.delete(url)).await?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("Empty deletion response body");
            Envelope::Success { data: None }
        } else {
            decode(status, &bytes)?
        };

        Ok(ApiResponse { status, body })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AlertmanagerError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .push(&self.api_version)
            .extend(segments);

        debug!(url = %url, "Resolved Alertmanager endpoint");
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>> {
        let (status, bytes) = self.send(request).await?;
        let body = decode(status, &bytes)?;

        Ok(ApiResponse { status, body })
    }

    /// Send the request and read the body of a 2xx response
    async fn send(&self, request: RequestBuilder) -> Result<(StatusCode, Vec<u8>)> {
        let response = request.send().await.map_err(AlertmanagerError::Request)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received Alertmanager response");

        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(AlertmanagerError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
                body: serde_json::from_slice(&bytes).ok(),
            });
        }

        let bytes = response.bytes().await.map_err(AlertmanagerError::ReadBody)?;
        Ok((status, bytes.to_vec()))
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<Envelope<T>> {
    serde_json::from_slice(bytes).map_err(|source| AlertmanagerError::Decode {
        status: status.as_u16(),
        source,
    })
}
