use super::error::{Error, Result};

use derivative::Derivative;

use itertools::Itertools;

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    StatusCode,
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::time::Duration;

use tracing::{debug, warn};

use url::Url;

mod response;

pub use response::Response;

/// Root of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/";

/// Configuration of a [`Client`].
///
/// ```no_run
/// # use unsplash::client::Client;
/// # use std::time::Duration;
/// # fn main() -> unsplash::error::Result<()> {
/// let client = Client::builder("my-access-key")
///     .user_agent("MyProject/1.0")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(()) }
/// ```
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ClientBuilder {
    base_url: String,
    #[derivative(Debug = "ignore")]
    access_key: String,
    #[derivative(Debug = "ignore")]
    bearer_token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new(access_key: String) -> Self {
        ClientBuilder {
            base_url: String::from(DEFAULT_BASE_URL),
            access_key,
            bearer_token: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Send requests somewhere else than [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Authorize requests with a user's OAuth access token instead of the application's access
    /// key. Obtaining the token is up to the caller.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Abort any request that takes longer than `timeout`. Requests never time out by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let access_key = self.access_key.trim();

        if access_key.is_empty() {
            return Err(Error::CannotCreateClient(String::from(
                "Access key mustn't be empty",
            )));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::CannotCreateClient(format!("Invalid base URL: {}", e)))?;

        // Endpoint paths are joined below the base path.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let authorization = match &self.bearer_token {
            Some(token) => format!("Bearer {}", token),
            None => format!("Client-ID {}", access_key),
        };
        let mut authorization = HeaderValue::from_str(&authorization)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert("Accept-Version", HeaderValue::from_static("v1"));

        let mut builder = reqwest::Client::builder().default_headers(headers);

        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        match builder.build() {
            Ok(client) => Ok(Client { client, url }),
            Err(e) => Err(Error::CannotCreateClient(format!("{:?}", e))),
        }
    }
}

/// Client struct.
///
/// Cheap to clone; clones share the same connection pool. Every request is a plain `async fn`
/// call: dropping the returned future cancels it.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    /// Create a new client sending requests to `url`, authorized with the given access key.
    pub fn new(url: &str, access_key: impl Into<String>) -> Result<Self> {
        Client::builder(access_key).base_url(url).build()
    }

    /// Start configuring a client authorized with the given access key.
    pub fn builder(access_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(access_key.into())
    }

    /// The URL every endpoint is relative to.
    pub fn base_url(&self) -> &Url {
        &self.url
    }

    pub(crate) async fn get_json_endpoint<T>(&self, endpoint: &str) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
    {
        self.get_json_endpoint_query::<T, ()>(endpoint, None).await
    }

    pub(crate) async fn get_json_endpoint_query<T, Q>(
        &self,
        endpoint: &str,
        query: Option<&Q>,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url.join(endpoint).map_err(|e| {
            Error::IllegalArgument(format!("Invalid endpoint \"{}\": {}", endpoint, e))
        })?;

        debug!(%url, "GET");

        let mut request = self.client.get(url);

        if let Some(query) = query {
            request = request.query(query);
        }

        let res = request
            .send()
            .await
            .map_err(|e| Error::CannotSendRequest(e.to_string()))?;

        let status = res.status();
        debug!(url = %res.url(), %status, "response");

        let meta = Response::from_headers(res.headers());
        let headers = res.headers().clone();

        let body = res
            .text()
            .await
            .map_err(|e| Error::CannotSendRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(classify(status, &headers, &body));
        }

        Ok((serde_json::from_str(&body)?, meta))
    }
}

/// Turns an unsuccessful response into the matching [`Error`].
fn classify(status: StatusCode, headers: &HeaderMap, body: &str) -> Error {
    let message = api_message(body).unwrap_or_else(|| {
        format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Error")
        )
    });

    let rate_limited = status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN
            && Response::from_headers(headers).rate_limit_remaining == Some(0));

    match status {
        _ if rate_limited => {
            warn!(%status, "rate limit reached");
            Error::RateLimit(message)
        }
        StatusCode::UNAUTHORIZED => Error::Authorization(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        _ => Error::Server {
            message,
            status: status.as_u16(),
            retry_after: retry_after(headers),
        },
    }
}

/// The API explains failures with `{"errors": ["..."]}`.
fn api_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ApiErrors {
        errors: Vec<String>,
    }

    let errors = serde_json::from_str::<ApiErrors>(body).ok()?.errors;

    if errors.is_empty() {
        None
    } else {
        Some(errors.iter().join(", "))
    }
}

// Only the delay-seconds form of `Retry-After` is understood.
fn retry_after(headers: &HeaderMap) -> Duration {
    headers
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_default()
}
