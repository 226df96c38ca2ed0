use std::sync::Arc;

use crate::app::error::Result;
use crate::config::PageConfig;
use crate::fetcher::http_fetcher::HttpCatSource;
use crate::fetcher::CatSource;

pub struct AppContext {
    pub source: Arc<dyn CatSource + Send + Sync>,
}

impl AppContext {
    pub fn new(page: &PageConfig) -> Result<Self> {
        let source: Arc<dyn CatSource + Send + Sync> =
            Arc::new(HttpCatSource::new(&page.fact_url, &page.image_url)?);

        Ok(Self { source })
    }

    pub fn with_source(source: Arc<dyn CatSource + Send + Sync>) -> Self {
        Self { source }
    }
}
