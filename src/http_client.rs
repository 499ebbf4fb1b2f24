use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use thiserror::Error;

pub const API_BASE: &str = "https://v3.football.api-sports.io";
const API_KEY_HEADER: &str = "x-apisports-key";
const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Failure taxonomy for a single upstream request. Aggregation treats every
/// variant as "missing data"; the variant only matters for logging.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected http status {0}")]
    BadStatus(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

fn http_client() -> Result<&'static Client, FetchError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))
    })
}

/// Issues one GET against the sports API and returns the raw body.
/// One outbound request per call; no retry, no caching.
pub fn get_body(url: &str, api_key: &str) -> Result<String, FetchError> {
    let client = http_client()?;
    let resp = client
        .get(url)
        .header(API_KEY_HEADER, api_key)
        .send()
        .map_err(classify)?;
    let status = resp.status();
    let body = resp.text().map_err(classify)?;
    if !status.is_success() {
        return Err(FetchError::BadStatus(status.as_u16()));
    }
    Ok(body)
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}
