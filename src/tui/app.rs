use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::config::PageConfig;
use crate::domain::{update, Effect, PageMsg, PageState};
use crate::fetcher::CatSource;
use crate::scheduler::fetch::{spawn_fetch, FetchKind};
use crate::scheduler::{ScheduledTask, TaskSet};

/// Clear transient status messages after this many idle ticks.
pub const STATUS_TICKS: u32 = 30;

/// The running page: its state plus everything it has spawned.
///
/// Timers and in-flight fetches belong to the app and are released by
/// [`TuiApp::stop`] or when the app is dropped.
pub struct TuiApp {
    pub page: PageState,
    pub should_quit: bool,
    pub status_message: Option<String>,
    status_ticks: u32,
    source: Arc<dyn CatSource + Send + Sync>,
    tx: UnboundedSender<PageMsg>,
    rx: UnboundedReceiver<PageMsg>,
    timers: Vec<ScheduledTask>,
    fetches: TaskSet,
}

impl TuiApp {
    pub fn new(page: PageState, source: Arc<dyn CatSource + Send + Sync>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            page,
            should_quit: false,
            status_message: None,
            status_ticks: 0,
            source,
            tx,
            rx,
            timers: Vec::new(),
            fetches: TaskSet::new(),
        }
    }

    /// Start the timers this variant needs and the optional initial fetches.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, config: &PageConfig) {
        let variant = self.page.variant;
        info!("Starting {} page", variant);

        if variant.decays() {
            self.timers.push(ScheduledTask::every(
                "decay",
                config.decay_interval(),
                self.tx.clone(),
                PageMsg::DecayTick,
            ));
        }
        if variant.auto_advances() {
            self.timers.push(ScheduledTask::every(
                "carousel",
                config.carousel_interval(),
                self.tx.clone(),
                PageMsg::CarouselTick,
            ));
        }
        if variant.fetches_remote() && config.fetch_on_start {
            self.dispatch(PageMsg::RequestFact);
            self.dispatch(PageMsg::RequestImage);
        }
    }

    /// Release timers and abort outstanding fetches.
    pub fn stop(&mut self) {
        self.timers.clear();
        self.fetches.abort_all();
        debug!("Page stopped");
    }

    /// Apply one message and carry out the effect it asks for.
    pub fn dispatch(&mut self, msg: PageMsg) {
        let (next, effect) = update(&self.page, msg);
        self.page = next;
        self.run_effect(effect);
    }

    /// Apply every message timers and fetches have sent since the last call.
    pub fn drain_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    pub fn active_timers(&self) -> Vec<&'static str> {
        self.timers.iter().map(ScheduledTask::name).collect()
    }

    pub fn pending_fetches(&self) -> usize {
        self.fetches.pending()
    }

    /// Show `message` in the status bar for a full [`STATUS_TICKS`].
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_ticks = 0;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Age the current status message by one idle tick.
    pub fn tick(&mut self) {
        if self.status_message.is_none() {
            return;
        }
        self.status_ticks += 1;
        if self.status_ticks >= STATUS_TICKS {
            self.clear_status();
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchFact => self.fetch(FetchKind::Fact),
            Effect::FetchImage => self.fetch(FetchKind::Image),
            Effect::OpenUrl(url) => match open::that(&url) {
                Ok(()) => self.set_status(format!("Opened {}", url)),
                Err(e) => self.set_status(format!("Failed to open browser: {}", e)),
            },
        }
    }

    fn fetch(&mut self, kind: FetchKind) {
        debug!("Requesting {:?}", kind);
        spawn_fetch(
            &mut self.fetches,
            self.source.clone(),
            kind,
            self.tx.clone(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::app::{PurrfectError, Result};
    use crate::domain::{Happiness, PageSettings, PageVariant};

    /// Serves numbered facts; images fail after the first call.
    #[derive(Default)]
    struct CountingSource {
        facts: AtomicUsize,
        images: AtomicUsize,
    }

    #[async_trait]
    impl CatSource for CountingSource {
        async fn fetch_fact(&self) -> Result<String> {
            let n = self.facts.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("fact #{}", n))
        }

        async fn fetch_image_url(&self) -> Result<String> {
            match self.images.fetch_add(1, Ordering::SeqCst) {
                0 => Ok("https://cdn2.thecatapi.com/images/first.jpg".to_string()),
                _ => Err(PurrfectError::EmptyResponse("rate limited".to_string())),
            }
        }
    }

    fn app(variant: PageVariant, source: Arc<CountingSource>) -> TuiApp {
        let page = PageState::new(variant, PageSettings::default(), Happiness::new(50));
        TuiApp::new(page, source)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_fetches_on_start() {
        let source = Arc::new(CountingSource::default());
        let mut app = app(PageVariant::Live, source.clone());
        app.start(&PageConfig::default());
        settle().await;

        assert_eq!(app.drain_messages(), 2);
        assert_eq!(app.page.fact.as_ref().unwrap().value, "fact #1");
        assert_eq!(
            app.page.remote_image_url(),
            "https://cdn2.thecatapi.com/images/first.jpg"
        );
        assert_eq!(app.active_timers(), vec!["decay"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_without_fetch_on_start() {
        let source = Arc::new(CountingSource::default());
        let mut app = app(PageVariant::Live, source.clone());
        let config = PageConfig {
            fetch_on_start: false,
            ..PageConfig::default()
        };
        app.start(&config);
        settle().await;

        assert_eq!(app.drain_messages(), 0);
        assert!(app.page.fact.is_none());
        assert_eq!(source.facts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetch_replaces_and_failure_keeps_image() {
        let source = Arc::new(CountingSource::default());
        let mut app = app(PageVariant::Live, source.clone());
        app.start(&PageConfig::default());
        settle().await;
        app.drain_messages();

        app.dispatch(PageMsg::RequestFact);
        app.dispatch(PageMsg::RequestImage);
        settle().await;
        assert_eq!(app.drain_messages(), 2);

        assert_eq!(app.page.fact.as_ref().unwrap().value, "fact #2");
        // Second image request failed: previous URL stays.
        assert_eq!(
            app.page.remote_image_url(),
            "https://cdn2.thecatapi.com/images/first.jpg"
        );
        assert_eq!(app.pending_fetches(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_timers_drive_page() {
        let source = Arc::new(CountingSource::default());
        let mut app = app(PageVariant::Gallery, source.clone());
        app.start(&PageConfig::default());
        assert_eq!(app.active_timers(), vec!["decay", "carousel"]);

        tokio::time::sleep(Duration::from_secs(11)).await;
        app.drain_messages();

        // Two carousel advances (5s, 10s) and one decay tick (10s).
        assert_eq!(app.page.carousel.index(), 2);
        assert_eq!(app.page.happiness.level(), 45);
        // Gallery never talks to the network.
        assert_eq!(source.facts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timers() {
        let source = Arc::new(CountingSource::default());
        let mut app = app(PageVariant::Gallery, source);
        app.start(&PageConfig::default());
        app.stop();
        assert!(app.active_timers().is_empty());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(app.drain_messages(), 0);
        assert_eq!(app.page.happiness.level(), 50);
    }

    #[test]
    fn test_status_expires_after_idle_ticks() {
        let mut app = app(PageVariant::Classic, Arc::new(CountingSource::default()));
        app.set_status("Opened a cat".to_string());

        for _ in 0..STATUS_TICKS - 1 {
            app.tick();
        }
        assert!(app.status_message.is_some());

        app.tick();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_new_status_restarts_expiry() {
        let mut app = app(PageVariant::Classic, Arc::new(CountingSource::default()));
        app.set_status("first".to_string());
        for _ in 0..STATUS_TICKS - 1 {
            app.tick();
        }

        app.set_status("second".to_string());
        app.tick();
        assert_eq!(app.status_message.as_deref(), Some("second"));

        for _ in 0..STATUS_TICKS - 2 {
            app.tick();
        }
        assert_eq!(app.status_message.as_deref(), Some("second"));
        app.tick();
        assert!(app.status_message.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_classic_runs_no_timers() {
        let source = Arc::new(CountingSource::default());
        let mut app = app(PageVariant::Classic, source);
        app.start(&PageConfig::default());
        assert!(app.active_timers().is_empty());

        app.dispatch(PageMsg::Pet);
        app.dispatch(PageMsg::Pet);
        assert_eq!(app.page.likes, 2);
    }
}
