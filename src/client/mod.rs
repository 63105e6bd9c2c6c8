//! HTTP client for the Xsolla API.
//!
//! Gated behind the `client` cargo feature so webhook-only embedders do
//! not pull in `reqwest`.
//!
//! The API has two endpoint tiers sharing one authentication scheme:
//! merchant-scoped paths (token creation, transaction reports, raw
//! subscription lookups) and project-scoped paths (users, subscriptions).
//! Every request carries HTTP Basic auth with the merchant id and secret.

mod subscriptions;
mod tokens;
mod transactions;
mod users;

use std::fmt;
use std::time::Duration;

use reqwest::{StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Base URL for merchant-scoped endpoints.
pub const ENDPOINT_MERCHANT: &str = "https://api.xsolla.com/merchant/v2/merchants";

/// Base URL for project-scoped endpoints.
pub const ENDPOINT_PROJECT: &str = "https://api.xsolla.com/merchant/v2/projects";

const ACCEPT_JSON: &str = "application/json; charset=UTF-8";

/// Default round-trip timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Merchant and project credentials, immutable per client instance.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub merchant_id: u32,
    pub merchant_secret: String,
    pub project_id: u32,
    pub project_secret: String,
}

/// Errors produced by the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error(transparent)]
    Api(#[from] RequestError),

    /// A success response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structured error body of a non-2xx Xsolla response.
///
/// The API does not always return JSON on error, so the unparsed body text
/// is retained in `raw` alongside the parsed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestError {
    /// Raw body text, kept as fallback error text.
    #[serde(skip)]
    pub raw: String,

    #[serde(rename = "http_status_code")]
    pub code: u16,
    pub message: String,
    pub extended_message: String,
    pub request_id: String,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            f.write_str(&self.message)
        } else if !self.raw.is_empty() {
            f.write_str(&self.raw)
        } else {
            f.write_str("empty xsolla request error")
        }
    }
}

impl std::error::Error for RequestError {}

/// Typed HTTP client for the Xsolla API.
///
/// A client instance holds immutable credentials and a shared `reqwest`
/// transport; it is cheap to clone and safe to use from multiple tasks.
/// Every call is a single attempt — retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    sandbox: bool,
}

impl Client {
    /// Create a new `Client` with the default timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: http_client_with_timeout(DEFAULT_TIMEOUT),
            credentials,
            sandbox: false,
        }
    }

    /// Bound every round trip by `timeout`, replacing the transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = http_client_with_timeout(timeout);
        self
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Toggle sandbox mode for token creation.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub(crate) fn project_id(&self) -> u32 {
        self.credentials.project_id
    }

    pub(crate) fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Merchant-scoped URL: `<merchant base>/<merchant id>/<path>`.
    pub(crate) fn merchant_url(&self, path: &str) -> Url {
        endpoint_url(ENDPOINT_MERCHANT, self.credentials.merchant_id, path)
    }

    /// Project-scoped URL: `<project base>/<project id>/<path>`.
    pub(crate) fn project_url(&self, path: &str) -> Url {
        endpoint_url(ENDPOINT_PROJECT, self.credentials.project_id, path)
    }

    pub(crate) async fn get_json<T>(&self, url: Url) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        self.dispatch(self.http.get(url)).await
    }

    pub(crate) async fn post_json<T, B>(&self, url: Url, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
        B: serde::Serialize,
    {
        self.dispatch(self.http.post(url).json(body)).await
    }

    /// Authenticate, send, and classify one request.
    async fn dispatch<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let request = builder
            .basic_auth(
                self.credentials.merchant_id.to_string(),
                Some(&self.credentials.merchant_secret),
            )
            .header(header::ACCEPT, ACCEPT_JSON)
            .build()?;
        debug!(method = %request.method(), url = %request.url(), "xsolla api request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let is_json = content_type_is_json(response.headers());
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "xsolla api response");

        classify_response(status, is_json, &body)
    }
}

fn http_client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

fn content_type_is_json(headers: &header::HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"))
}

/// Build an endpoint URL from a base constant, a tier id, and an
/// operation path.
///
/// The base URLs are compile-time constants, so a parse failure here is a
/// bug in this crate, not a runtime condition — it panics rather than
/// returning a recoverable error.
fn endpoint_url(base: &str, id: u32, path: &str) -> Url {
    Url::parse(&format!("{base}/{id}/{path}"))
        .expect("endpoint base URLs are compile-time constants")
}

/// Classify a response into the operation's result type or an error.
///
/// Non-2xx: best-effort decode of the structured error body when the
/// content type indicates JSON, always retaining the raw body text.
/// 2xx: JSON bodies decode into `T`; non-JSON bodies yield `T::default()`
/// (some success responses are empty).
fn classify_response<T>(status: StatusCode, is_json: bool, body: &[u8]) -> Result<T, ClientError>
where
    T: DeserializeOwned + Default,
{
    if !status.is_success() {
        let mut api_error = RequestError::default();
        if is_json {
            if let Ok(parsed) = serde_json::from_slice::<RequestError>(body) {
                api_error = parsed;
            }
        }
        api_error.raw = String::from_utf8_lossy(body).into_owned();
        return Err(ClientError::Api(api_error));
    }
    if !is_json {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(ClientError::Json)
}
