use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream answered {0}")]
    Status(StatusCode),
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("response was not valid json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no results found for {0:?}")]
    NoResults(String),
}

pub const NO_QUERY: &[(&str, &str)] = &[];

/// Issues a single GET and decodes the body as JSON. No retries, no timeout
/// beyond the client's defaults.
pub async fn get_json<T, Q>(client: &Client, url: &str, query: &Q) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let request = client.get(url).query(query).build().map_err(FetchError::Transport)?;
    info!(url = %request.url(), "GET");

    let response = client.execute(request).await.map_err(FetchError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await.map_err(FetchError::Body)?;
    Ok(serde_json::from_slice(&body)?)
}
