//! Transport for the one-shot info request.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::header::CONTENT_TYPE;

use super::info::Info;

/// Everything that can go wrong while loading `Info`. The page treats every
/// variant the same way; the split only makes the log entry useful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    Network(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not a JSON object.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status(code) => write!(f, "unexpected status {code}"),
            FetchError::Decode(msg) => write!(f, "malformed body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

type InfoFuture = LocalBoxFuture<'static, Result<Info, FetchError>>;

/// Cloneable handle to an async `Info` source.
///
/// Platforms normally let the page build [`InfoClient::http`] from
/// [`AppConfig`](super::config::AppConfig); providing an `InfoClient` through
/// the context replaces the transport for the whole subtree.
#[derive(Clone)]
pub struct InfoClient {
    fetch: Rc<dyn Fn() -> InfoFuture>,
}

impl InfoClient {
    /// `GET url` with `Content-Type: application/json`, parsing the body as `Info`.
    pub fn http(url: impl Into<String>) -> Self {
        let url = url.into();
        let http = reqwest::Client::new();
        Self::from_fn(move || fetch_info(http.clone(), url.clone()))
    }

    pub fn from_fn<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Info, FetchError>> + 'static,
    {
        Self {
            fetch: Rc::new(move || fetch().boxed_local()),
        }
    }

    pub fn fetch(&self) -> InfoFuture {
        (self.fetch)()
    }
}

impl fmt::Debug for InfoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoClient").finish_non_exhaustive()
    }
}

async fn fetch_info(http: reqwest::Client, url: String) -> Result<Info, FetchError> {
    let response = http
        .get(&url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    Info::from_json(&body)
}
