use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};

use thiserror::Error;

/// Result type for `unsplash`, using [`Error`].
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `unsplash` errors.
///
/// Every variant carries a human readable message, so any error can be shown as text. Server
/// errors additionally expose their status code and retry hint through [`Error::status`] and
/// [`Error::header`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The arguments given to a method are unusable, e.g. an empty username.
    #[error("{0}")]
    IllegalArgument(String),

    /// The response body didn't have the expected shape.
    #[error("{0}")]
    JsonUnmarshalling(String),

    /// The API rejected the credentials of the request (HTTP 401).
    #[error("{0}")]
    Authorization(String),

    /// The queried resource doesn't exist (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// The API answered with any other unsuccessful status.
    ///
    /// `retry_after` is zero when the API didn't say when to try again.
    #[error("{message}")]
    Server {
        message: String,
        status: u16,
        retry_after: Duration,
    },

    /// A [`PhotoOpt`](crate::options::PhotoOpt) failed validation.
    #[error("{0}")]
    InvalidPhotoOpt(String),

    /// A [`ListOpt`](crate::options::ListOpt) failed validation.
    #[error("{0}")]
    InvalidListOpt(String),

    /// A [`StatsOpt`](crate::options::StatsOpt) failed validation.
    #[error("{0}")]
    InvalidStatsOpt(String),

    /// The rate limit of the access key has been reached.
    #[error("{0}")]
    RateLimit(String),

    /// The request couldn't be sent or its response couldn't be read. Contains a description of
    /// the error.
    #[error("Couldn't send request: {0}")]
    CannotSendRequest(String),

    /// The client couldn't be created. Contains a description of the error.
    #[error("Couldn't create client: {0}")]
    CannotCreateClient(String),
}

impl Error {
    /// The HTTP status code of a [`Error::Server`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// How long the API asked to wait before retrying, if it did.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Server { retry_after, .. } if !retry_after.is_zero() => Some(*retry_after),
            _ => None,
        }
    }

    /// Headers worth forwarding to an upstream HTTP response.
    ///
    /// Only a [`Error::Server`] error with a retry hint produces any: a `Retry-After` header
    /// holding the hint in whole seconds.
    pub fn header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(retry_after) = self.retry_after() {
            headers.insert(
                header::RETRY_AFTER,
                HeaderValue::from(retry_after.as_secs()),
            );
        }

        headers
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::JsonUnmarshalling(e.to_string())
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::CannotCreateClient(format!("Invalid header value: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(retry_after: Duration) -> Error {
        Error::Server {
            message: String::from("Service Unavailable"),
            status: 503,
            retry_after,
        }
    }

    #[test]
    fn server_error_without_retry_hint_has_no_headers() {
        let err = server_error(Duration::from_secs(0));

        assert!(err.header().is_empty());
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn server_error_retry_hint_becomes_header() {
        let err = server_error(Duration::from_secs(30));
        let headers = err.header();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Retry-After"], "30");
    }

    #[test]
    fn server_error_retry_hint_is_truncated_to_seconds() {
        let err = server_error(Duration::from_millis(2750));

        assert_eq!(err.header()["Retry-After"], "2");
    }

    #[test]
    fn only_server_errors_have_a_status() {
        assert_eq!(server_error(Duration::from_secs(0)).status(), Some(503));
        assert_eq!(Error::NotFound(String::from("nope")).status(), None);
        assert!(Error::RateLimit(String::from("slow down")).header().is_empty());
    }

    #[test]
    fn errors_display_their_message() {
        assert_eq!(
            Error::IllegalArgument(String::from("Username cannot be empty")).to_string(),
            "Username cannot be empty"
        );
        assert_eq!(server_error(Duration::from_secs(0)).to_string(), "Service Unavailable");
    }

    #[test]
    fn json_errors_are_wrapped() {
        let e = serde_json::from_str::<u64>("\"nope\"").unwrap_err();

        assert!(matches!(Error::from(e), Error::JsonUnmarshalling(_)));
    }
}
