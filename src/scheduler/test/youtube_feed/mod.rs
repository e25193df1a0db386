use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use serenity::{all::Message, async_trait};
use tokio::sync::RwLock;

use crate::{
    error::{feed::FeedError, AppError},
    model::feed::{CycleOutcome, FeedItem},
    scheduler::youtube_feed::FeedPoller,
    service::{
        announcement::AnnouncementGate,
        feed::FeedSource,
        log_channel::LogSink,
        publisher::{AnnouncementPublisher, ChannelHistory},
    },
};

mod run_cycle;
mod seed;

/// Scripted feed response.
enum FeedResponse {
    Link(&'static str),
    Empty,
    Broken,
}

/// Feed returning scripted responses in order, then `Empty`.
#[derive(Clone, Default)]
struct FakeFeed {
    responses: Arc<Mutex<VecDeque<FeedResponse>>>,
    fetches: Arc<AtomicUsize>,
    /// Gate switched off while a fetch is in flight.
    disables: Arc<Mutex<Option<Arc<RwLock<AnnouncementGate>>>>>,
}

impl FakeFeed {
    fn with(responses: Vec<FeedResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            fetches: Arc::default(),
            disables: Arc::default(),
        }
    }

    /// Switches `gate` off during every following fetch.
    fn disable_during_fetch(&self, gate: Arc<RwLock<AnnouncementGate>>) {
        *self.disables.lock().unwrap() = Some(gate);
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for FakeFeed {
    async fn latest(&self) -> Result<FeedItem, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let gate = self.disables.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.write().await.set_enabled(false);
        }

        match self.responses.lock().unwrap().pop_front() {
            Some(FeedResponse::Link(link)) => Ok(FeedItem::from_link(link)),
            Some(FeedResponse::Broken) => Err(FeedError::UnexpectedRoot("html".to_string())),
            Some(FeedResponse::Empty) | None => Err(FeedError::Empty),
        }
    }
}

/// Publisher recording every successful announcement.
///
/// Yields once before recording so concurrent cycles interleave at the send.
#[derive(Clone, Default)]
struct RecordingPublisher {
    published: Arc<Mutex<Vec<FeedItem>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingPublisher {
    fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn published_ids(&self) -> Vec<String> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|item| item.video_id.clone())
            .collect()
    }
}

#[async_trait]
impl AnnouncementPublisher for RecordingPublisher {
    async fn publish(&self, item: &FeedItem) -> Result<(), AppError> {
        tokio::task::yield_now().await;

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::PublishErr("Missing Access".to_string()));
        }

        self.published.lock().unwrap().push(item.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingLog {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogSink for RecordingLog {
    async fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Channel history returning fixed messages, or failing when `None`.
struct FakeHistory(Option<Vec<Message>>);

#[async_trait]
impl ChannelHistory for FakeHistory {
    async fn recent_messages(&self, limit: u8) -> Result<Vec<Message>, AppError> {
        match &self.0 {
            Some(messages) => Ok(messages.iter().take(limit as usize).cloned().collect()),
            None => Err(AppError::InternalError("history unavailable".to_string())),
        }
    }
}

struct Harness {
    poller: FeedPoller<FakeFeed, RecordingPublisher, RecordingLog>,
    feed: FakeFeed,
    publisher: RecordingPublisher,
    log: RecordingLog,
    gate: Arc<RwLock<AnnouncementGate>>,
}

/// Builds a poller over the scripted feed with the gate switched as given.
fn harness(responses: Vec<FeedResponse>, enabled: bool) -> Harness {
    let feed = FakeFeed::with(responses);
    let publisher = RecordingPublisher::default();
    let log = RecordingLog::default();

    let mut gate = AnnouncementGate::new();
    gate.set_enabled(enabled);
    let gate = Arc::new(RwLock::new(gate));

    Harness {
        poller: FeedPoller::new(feed.clone(), publisher.clone(), log.clone(), gate.clone()),
        feed,
        publisher,
        log,
        gate,
    }
}

impl Harness {
    async fn last_announced(&self) -> Option<String> {
        self.gate
            .read()
            .await
            .last_announced_id()
            .map(str::to_string)
    }
}
