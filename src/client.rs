use std::fmt;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::errors::{LeonardoError, Result};

const DEFAULT_BASE_URL: &str = "https://cloud.leonardo.ai/api/rest/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const API_KEY_ENV: &str = "LEONARDO_API_KEY";

/// Unreserved characters (RFC 3986) pass through; everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use leonardo::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> leonardo::Result<()> {
/// let client = ClientBuilder::new()
///     .api_key("your-api-key")
///     .base_url("https://cloud.leonardo.ai/api/rest/v1")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the API key sent as a bearer credential on every call.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://cloud.leonardo.ai/api/rest/v1`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout (defaults to 30 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Send a custom `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Build the [`Client`].
    ///
    /// If no API key was set via [`api_key`](Self::api_key), the builder will
    /// attempt to read the `LEONARDO_API_KEY` environment variable.
    ///
    /// Returns [`LeonardoError::Authentication`] if no key is available.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| LeonardoError::Authentication {
                message: "API key is required. Pass it to ClientBuilder::api_key() \
                          or set the LEONARDO_API_KEY environment variable."
                    .into(),
            })?;

        let mut http = reqwest::Client::builder().timeout(self.timeout);
        if let Some(ua) = self.user_agent {
            http = http.user_agent(ua);
        }
        let http = http.build()?;

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
            request_timeout: None,
            cancel: None,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Leonardo.ai API client.
///
/// Holds the base URL, the API key and a pooled HTTP client; nothing is
/// mutated after construction, so one value can be shared (or cheaply
/// cloned) across tasks.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full control.
///
/// # Example
///
/// ```no_run
/// use leonardo::{Client, CreateGenerationRequest};
///
/// # async fn example() -> leonardo::Result<()> {
/// let client = Client::new("your-api-key");
///
/// let job = client
///     .create_generation(&CreateGenerationRequest::new("a lighthouse at dusk"))
///     .await?;
/// println!("generation id: {:?}", job.sd_generation_job.generation_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
    request_timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

impl Client {
    /// Create a new client with the given API key and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            http,
            request_timeout: None,
            cancel: None,
        }
    }

    /// Return a handle whose calls are abandoned once `token` is cancelled.
    ///
    /// A call in flight when the token fires returns
    /// [`LeonardoError::Cancelled`] without waiting for the server.
    pub fn with_cancellation(&self, token: CancellationToken) -> Client {
        Client {
            cancel: Some(token),
            ..self.clone()
        }
    }

    /// Return a handle whose calls use `timeout` instead of the client-wide one.
    pub fn with_timeout(&self, timeout: Duration) -> Client {
        Client {
            request_timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated request for `base_url + path`.
    ///
    /// `path` must already be escaped and may carry a query string. When a
    /// body is given it is serialized as JSON and `Content-Type` is set;
    /// otherwise the request has no body and no content type. No I/O happens
    /// here.
    pub fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(LeonardoError::Encoding)?;
            req = req.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        if let Some(timeout) = self.request_timeout {
            req = req.timeout(timeout);
        }

        req.build()
            .map_err(|e| LeonardoError::InvalidRequest(e.to_string()))
    }

    /// Send `request` and decode a 2xx body into `T`.
    ///
    /// Non-2xx responses become [`LeonardoError::Api`] when the body is a
    /// structured API error and [`LeonardoError::Http`] otherwise.
    pub async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T> {
        let (status, body) = self.round_trip(request).await?;
        serde_json::from_slice(&body).map_err(|source| {
            debug!(status = status.as_u16(), error = %source, "response body did not match");
            LeonardoError::Decoding {
                status: status.as_u16(),
                source,
            }
        })
    }

    /// Send `request`, check the status and discard the body.
    pub async fn execute_empty(&self, request: reqwest::Request) -> Result<()> {
        self.round_trip(request).await.map(|_| ())
    }

    // -----------------------------------------------------------------------
    // Crate-internal helpers used by the endpoint wrappers
    // -----------------------------------------------------------------------

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self.build_request::<()>(Method::GET, path, None)?;
        self.execute(req).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self.build_request::<()>(Method::DELETE, path, None)?;
        self.execute(req).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.build_request(Method::POST, path, Some(body))?;
        self.execute(req).await
    }

    /// POST with no request body at all.
    pub(crate) async fn post_bare<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self.build_request::<()>(Method::POST, path, None)?;
        self.execute(req).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.build_request(Method::PUT, path, Some(body))?;
        self.execute(req).await
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Perform exactly one exchange and read the whole body.
    ///
    /// The response is consumed before this returns, on every path.
    async fn round_trip(&self, request: reqwest::Request) -> Result<(StatusCode, Vec<u8>)> {
        let (status, body) = self.dispatch(request).await?;
        if status.is_success() {
            return Ok((status, body));
        }
        Err(error_from_response(status, &body))
    }

    /// Send `request` without interpreting the status, honoring the
    /// cancellation token when one is bound.
    pub(crate) async fn dispatch(&self, request: reqwest::Request) -> Result<(StatusCode, Vec<u8>)> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%method, %path, "sending request");

        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body.to_vec()))
        };

        let outcome = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(%method, %path, "request cancelled");
                    return Err(LeonardoError::Cancelled);
                }
                res = exchange => res,
            },
            None => exchange.await,
        };

        let (status, body) = outcome.map_err(|e| {
            warn!(%method, %path, error = %e, "transport failure");
            LeonardoError::Transport(e)
        })?;
        debug!(%method, %path, status = status.as_u16(), "response received");
        Ok((status, body))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Error body returned by the API on non-2xx responses.
///
/// The human-readable text travels under the `error` key.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default, deserialize_with = "code_as_string")]
    code: String,
    #[serde(rename = "error")]
    message: String,
    #[serde(default)]
    path: Option<String>,
}

/// Some endpoints send a numeric `code`; keep it as text either way.
fn code_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Code>::deserialize(deserializer)? {
        Some(Code::Text(s)) => s,
        Some(Code::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

fn error_from_response(status: StatusCode, body: &[u8]) -> LeonardoError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(err) => {
            debug!(status = status.as_u16(), code = %err.code, "API error");
            LeonardoError::Api {
                status: status.as_u16(),
                code: err.code,
                message: err.message,
                path: err.path,
            }
        }
        Err(_) => {
            debug!(status = status.as_u16(), "API error with unstructured body");
            LeonardoError::Http {
                status: status.as_u16(),
            }
        }
    }
}

/// Percent-escape one path segment so it cannot alter the request target.
pub fn escape_path_segment(segment: &str) -> String {
    // "." and ".." would be collapsed by URL normalization.
    if segment == "." || segment == ".." {
        return segment.replace('.', "%2E");
    }
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// `limit`/`offset` for list endpoints.
///
/// A value of zero or less is left out of the query string entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Render as `?limit=..&offset=..`, or an empty string when nothing is set.
    pub fn query(&self) -> String {
        let mut query_parts: Vec<String> = Vec::new();

        if self.limit > 0 {
            query_parts.push(format!("limit={}", self.limit));
        }
        if self.offset > 0 {
            query_parts.push(format!("offset={}", self.offset));
        }

        if query_parts.is_empty() {
            String::new()
        } else {
            format!("?{}", query_parts.join("&"))
        }
    }
}
