use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::app::{PurrfectError, Result};
use crate::fetcher::CatSource;

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    url: String,
}

pub struct HttpCatSource {
    client: Client,
    fact_url: Url,
    image_url: Url,
}

impl HttpCatSource {
    pub fn new(fact_url: &str, image_url: &str) -> Result<Self> {
        let fact_url = Url::parse(fact_url)?;
        let image_url = Url::parse(image_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("purrfect/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            fact_url,
            image_url,
        })
    }

    async fn get_body(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        response.error_for_status_ref()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl CatSource for HttpCatSource {
    async fn fetch_fact(&self) -> Result<String> {
        let body = self.get_body(&self.fact_url).await?;
        parse_fact(&body, self.fact_url.as_str())
    }

    async fn fetch_image_url(&self) -> Result<String> {
        let body = self.get_body(&self.image_url).await?;
        parse_image_url(&body, self.image_url.as_str())
    }
}

/// Extract the `fact` field from a trivia response.
pub fn parse_fact(body: &[u8], origin: &str) -> Result<String> {
    let response: FactResponse = serde_json::from_slice(body)?;
    let fact = response.fact.trim();
    if fact.is_empty() {
        return Err(PurrfectError::EmptyResponse(origin.to_string()));
    }
    Ok(fact.to_string())
}

/// Extract the `url` of the first element of an image search response.
pub fn parse_image_url(body: &[u8], origin: &str) -> Result<String> {
    let images: Vec<ImageResponse> = serde_json::from_slice(body)?;
    let first = images
        .into_iter()
        .next()
        .ok_or_else(|| PurrfectError::EmptyResponse(origin.to_string()))?;
    let url = Url::parse(first.url.trim())?;
    Ok(url.to_string())
}
