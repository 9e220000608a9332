use std::sync::Arc;

use axum::{extract::State, routing::any, Json, Router};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, instrument};

use crate::{
    config::FactoidArgs,
    health::health,
    random::{RandomIndex, SeededRandom, ThreadRandom},
    upstream::{get_json, FetchError, NO_QUERY},
};

const DISGUISED_NAME: &str = "Bird in disguise";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Bird {
    #[serde(alias = "name", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(alias = "description", default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(alias = "image", default, deserialize_with = "null_as_empty")]
    pub image: String,
}

/// Trivia records may leave fields out or set them to `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Bird {
    /// Record served whenever any hop of the lookup fails.
    fn disguised(error: &FetchError, placeholder: &str) -> Self {
        Self {
            name: DISGUISED_NAME.to_string(),
            description: format!("This bird is in disguise because: {error}"),
            image: placeholder.to_string(),
        }
    }
}

pub struct FactoidState {
    client: Client,
    trivia_url: String,
    image_service_url: String,
    placeholder: String,
    bird_count: u32,
    picker: Box<dyn RandomIndex>,
}

impl FactoidState {
    pub fn new(args: &FactoidArgs) -> Self {
        let picker: Box<dyn RandomIndex> = match args.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        Self {
            client: Client::new(),
            trivia_url: args.trivia_url.clone(),
            image_service_url: args.image_service_url.clone(),
            placeholder: args.placeholder_image.clone(),
            bird_count: args.bird_count,
            picker,
        }
    }

    async fn trivia(&self, index: u32) -> Result<Bird, FetchError> {
        let url = format!("{}/{}", self.trivia_url.trim_end_matches('/'), index);
        get_json(&self.client, &url, NO_QUERY).await
    }

    async fn image(&self, bird_name: &str) -> Result<String, FetchError> {
        let url = format!("{}/", self.image_service_url.trim_end_matches('/'));
        get_json(&self.client, &url, &[("birdName", bird_name)]).await
    }

    /// Fetches a random bird and swaps in the image from the lookup service.
    #[instrument(skip(self))]
    pub async fn factoid(&self) -> Bird {
        let index = self.picker.next_index(self.bird_count);

        let mut bird = match self.trivia(index).await {
            Ok(bird) => bird,
            Err(error) => {
                error!(%error, index, "failed to fetch bird factoid");
                return Bird::disguised(&error, &self.placeholder);
            }
        };

        match self.image(&bird.name).await {
            Ok(image) => {
                bird.image = image;
                bird
            }
            Err(error) => {
                error!(%error, bird = %bird.name, "failed to get bird image");
                Bird::disguised(&error, &self.placeholder)
            }
        }
    }
}

/// Every path other than `/health`, under any method, serves a factoid.
pub fn router(state: FactoidState) -> Router {
    Router::new()
        .route("/health", any(health))
        .fallback(bird_factoid)
        .with_state(Arc::new(state))
}

async fn bird_factoid(State(state): State<Arc<FactoidState>>) -> Json<Bird> {
    Json(state.factoid().await)
}
