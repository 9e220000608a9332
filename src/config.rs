use std::net::SocketAddr;

use clap::{Args, Subcommand};

pub const PLACEHOLDER_IMAGE: &str =
    "https://www.pokemonmillennium.net/wp-content/uploads/2015/11/missingno.png";

const UNSPLASH_CLIENT_ID: &str = "P1p3WPuRfpi7BdnG8xOrGKrRSvU1Puxc1aueUWeQVAI";

#[derive(Subcommand)]
pub enum Service {
    /// Look up a bird thumbnail by name
    Image(ImageArgs),
    /// Serve a random bird factoid with an image
    Factoid(FactoidArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ImageArgs {
    #[arg(long, env = "BIRD_IMAGE_LISTEN", default_value = "0.0.0.0:4200")]
    pub listen: SocketAddr,

    #[arg(
        long,
        env = "BIRD_IMAGE_SEARCH_URL",
        default_value = "https://api.unsplash.com/search/photos"
    )]
    pub search_url: String,

    #[arg(
        long,
        env = "BIRD_IMAGE_ACCESS_KEY",
        default_value = UNSPLASH_CLIENT_ID,
        hide_default_value = true
    )]
    pub access_key: String,

    #[arg(long, env = "BIRD_PLACEHOLDER_IMAGE", default_value = PLACEHOLDER_IMAGE)]
    pub placeholder_image: String,
}

#[derive(Args, Clone, Debug)]
pub struct FactoidArgs {
    #[arg(long, env = "BIRD_FACTOID_LISTEN", default_value = "0.0.0.0:4201")]
    pub listen: SocketAddr,

    #[arg(
        long,
        env = "BIRD_TRIVIA_URL",
        default_value = "https://freetestapi.com/api/v1/birds"
    )]
    pub trivia_url: String,

    #[arg(long, env = "BIRD_IMAGE_SERVICE_URL", default_value = "http://localhost:4200")]
    pub image_service_url: String,

    /// Exclusive upper bound of the trivia index
    #[arg(
        long,
        env = "BIRD_COUNT",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub bird_count: u32,

    /// Seed the index picker for reproducible runs
    #[arg(long, env = "BIRD_SEED")]
    pub seed: Option<u64>,

    #[arg(long, env = "BIRD_PLACEHOLDER_IMAGE", default_value = PLACEHOLDER_IMAGE)]
    pub placeholder_image: String,
}
