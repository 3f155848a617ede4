use crate::config::Credentials;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, ACCEPT, COOKIE, USER_AGENT};
use thiserror::Error;

pub const ALERTS_ENDPOINT: &str = "https://f95zone.to/account/unread-alert?_xfResponseType=json";
const TOKEN_HEADER: &str = "_xftoken";

pub fn user_agent() -> String {
    format!("F95 Notify/{} (by Official Husko on GitHub)", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Builds the header set for one poll: user agent, JSON accept, and both
/// credential fields.
pub fn poll_headers(credentials: &Credentials) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent())?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(COOKIE, HeaderValue::from_str(&credentials.cookie)?);
    headers.insert(
        HeaderName::from_static(TOKEN_HEADER),
        HeaderValue::from_str(&credentials.token)?,
    );
    Ok(headers)
}

/// Single-attempt GET client. The status code is not inspected; whatever body
/// comes back is handed to the caller.
#[derive(Clone)]
pub struct PollClient {
    http: reqwest::Client,
}

impl PollClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }

    pub async fn get(&self, url: &str, headers: HeaderMap) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).headers(headers).send().await?;
        log::debug!("GET {} -> {}", url, response.status());
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
