//! Timer and fetch tasks owned by a running page.
//!
//! Tasks never touch page state. They send [`PageMsg`]s over an unbounded
//! channel and the UI loop applies them. Both [`ScheduledTask`] and
//! [`TaskSet`] abort their tasks when dropped, so tearing down the page
//! releases everything it started.

pub mod fetch;

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::domain::PageMsg;

/// A recurring timer that emits the same message every `period`.
///
/// The first message is sent one full period after creation.
pub struct ScheduledTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn every(
        name: &'static str,
        period: Duration,
        tx: UnboundedSender<PageMsg>,
        msg: PageMsg,
    ) -> Self {
        debug!("Starting {} timer ({:?})", name, period);

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(msg.clone()).is_err() {
                    // Receiver gone: the page is being torn down.
                    break;
                }
            }
        });

        Self { name, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Stopped {} timer", self.name);
    }
}

/// In-flight one-shot tasks, aborted together on drop.
#[derive(Default)]
pub struct TaskSet {
    handles: Vec<JoinHandle<()>>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(tokio::spawn(future));
    }

    /// Number of tasks that have not completed yet.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}
