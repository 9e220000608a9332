use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::any,
    Json, Router,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::{
    config::ImageArgs,
    health::health,
    upstream::{get_json, FetchError},
};

pub struct ImageState {
    client: Client,
    search_url: String,
    access_key: String,
    placeholder: String,
}

impl ImageState {
    pub fn new(args: &ImageArgs) -> Self {
        Self {
            client: Client::new(),
            search_url: args.search_url.clone(),
            access_key: args.access_key.clone(),
            placeholder: args.placeholder_image.clone(),
        }
    }

    /// Thumbnail of the first search hit for `bird_name`.
    pub async fn thumbnail(&self, bird_name: &str) -> Result<String, FetchError> {
        let query = [
            ("page", "1"),
            ("query", bird_name),
            ("client_id", self.access_key.as_str()),
            ("per_page", "1"),
        ];
        let response: ImageResponse = get_json(&self.client, &self.search_url, &query).await?;
        response
            .results
            .into_iter()
            .next()
            .map(|result| result.urls.thumb)
            .filter(|thumb| !thumb.is_empty())
            .ok_or_else(|| FetchError::NoResults(bird_name.to_string()))
    }
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    urls: Urls,
}

#[derive(Deserialize)]
struct Urls {
    thumb: String,
}

/// Every path other than `/health`, under any method, is a lookup.
pub fn router(state: ImageState) -> Router {
    Router::new()
        .route("/health", any(health))
        .fallback(bird_image)
        .with_state(Arc::new(state))
}

async fn bird_image(
    State(state): State<Arc<ImageState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<String> {
    // First occurrence wins when the name is repeated
    let bird_name = params
        .into_iter()
        .find(|(key, _)| key == "birdName")
        .map(|(_, value)| value)
        .unwrap_or_default();
    if bird_name.is_empty() {
        return Json(state.placeholder.clone());
    }

    match state.thumbnail(&bird_name).await {
        Ok(thumb) => Json(thumb),
        Err(error) => {
            error!(%error, bird = %bird_name, "failed to fetch image");
            Json(state.placeholder.clone())
        }
    }
}
