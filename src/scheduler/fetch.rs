use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::domain::PageMsg;
use crate::fetcher::CatSource;
use crate::scheduler::TaskSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Fact,
    Image,
}

/// Spawn one fetch and report its outcome as a message.
///
/// Failures are always logged; whether they reach the screen is up to the
/// page's error policy.
pub fn spawn_fetch(
    tasks: &mut TaskSet,
    source: Arc<dyn CatSource + Send + Sync>,
    kind: FetchKind,
    tx: UnboundedSender<PageMsg>,
) {
    tasks.spawn(async move {
        let msg = run_fetch(source.as_ref(), kind).await;
        // A closed channel means the page is gone; nothing to report to.
        let _ = tx.send(msg);
    });
}

pub async fn run_fetch(source: &(dyn CatSource + Send + Sync), kind: FetchKind) -> PageMsg {
    match kind {
        FetchKind::Fact => match source.fetch_fact().await {
            Ok(fact) => {
                info!("Fetched cat fact ({} chars)", fact.len());
                PageMsg::FactLoaded {
                    fact,
                    at: Local::now(),
                }
            }
            Err(e) => {
                warn!("Failed to fetch cat fact: {}", e);
                PageMsg::FactFailed(e.to_string())
            }
        },
        FetchKind::Image => match source.fetch_image_url().await {
            Ok(url) => {
                info!("Fetched cat image {}", url);
                PageMsg::ImageLoaded {
                    url,
                    at: Local::now(),
                }
            }
            Err(e) => {
                warn!("Failed to fetch cat image: {}", e);
                PageMsg::ImageFailed(e.to_string())
            }
        },
    }
}
