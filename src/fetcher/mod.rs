pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub const DEFAULT_FACT_URL: &str = "https://catfact.ninja/fact";
pub const DEFAULT_IMAGE_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// The two remote reads the page depends on.
///
/// Both are idempotent GETs. Implementations do not retry and do not cache:
/// every call goes to the network and either yields a fresh value or fails.
#[async_trait]
pub trait CatSource {
    /// Fetch one short piece of cat trivia.
    async fn fetch_fact(&self) -> Result<String>;

    /// Fetch the URL of one random cat picture.
    async fn fetch_image_url(&self) -> Result<String>;
}
