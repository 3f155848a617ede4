use crate::alerts;
use crate::client::{self, PollClient};
use crate::config::Credentials;
use crate::notifier::{self, Notifier};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// What one tick ended with. Nothing carries over to the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Notified(u64),
    NoUnread,
    FetchFailed,
    ExtractFailed,
}

pub struct PollLoop {
    client: PollClient,
    credentials: Arc<Credentials>,
    notifier: Arc<dyn Notifier>,
    url: String,
    interval: Duration,
    outcomes: Option<mpsc::UnboundedSender<CycleOutcome>>,
}

impl PollLoop {
    pub fn new(client: PollClient, credentials: Arc<Credentials>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            credentials,
            notifier,
            url: client::ALERTS_ENDPOINT.to_string(),
            interval: POLL_INTERVAL,
            outcomes: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Reports the outcome of every cycle `run` completes.
    pub fn with_outcome_sender(mut self, outcomes: mpsc::UnboundedSender<CycleOutcome>) -> Self {
        self.outcomes = Some(outcomes);
        self
    }

    /// Ticks forever. The first poll happens one interval after start, and a
    /// cycle that overruns the interval causes skipped ticks rather than a
    /// burst of catch-up polls.
    pub async fn run(self) {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!("Polling {} every {:?}", self.url, self.interval);
        loop {
            ticker.tick().await;
            let outcome = self.poll_once().await;
            log::debug!("Poll cycle finished: {:?}", outcome);
            if let Some(outcomes) = &self.outcomes {
                let _ = outcomes.send(outcome);
            }
        }
    }

    pub async fn poll_once(&self) -> CycleOutcome {
        let headers = match client::poll_headers(&self.credentials) {
            Ok(headers) => headers,
            Err(e) => {
                log::error!("Error building request headers: {}", e);
                return CycleOutcome::FetchFailed;
            }
        };

        let body = match self.client.get(&self.url, headers).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Error making GET request: {}", e);
                return CycleOutcome::FetchFailed;
            }
        };
        log::debug!("Response: {}", String::from_utf8_lossy(&body));

        let count = match alerts::extract_unread_count(&body) {
            Ok(count) => count,
            Err(e) => {
                log::error!("Error reading unread count: {}", e);
                return CycleOutcome::ExtractFailed;
            }
        };

        if count == 0 {
            return CycleOutcome::NoUnread;
        }

        log::info!("Total unread: {}", count);
        self.send_notification(count).await;
        CycleOutcome::Notified(count)
    }

    async fn send_notification(&self, count: u64) {
        let notifier = self.notifier.clone();
        let body = notifier::unread_body(count);
        let sent = tokio::task::spawn_blocking(move || notifier.notify(notifier::UNREAD_TITLE, &body)).await;
        if let Err(e) = sent {
            log::error!("Notification task failed: {}", e);
        }
    }
}
