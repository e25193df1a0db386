use std::{sync::Arc, time::Duration};

use tokio::sync::RwLock;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::feed::CycleOutcome,
    service::{
        announcement::AnnouncementGate,
        feed::{FeedSource, YouTubeFeedClient},
        log_channel::{LogChannel, LogSink},
        publisher::{AnnouncementPublisher, ChannelAnnouncer, ChannelHistory},
        seed::last_announced_video_id,
    },
};

/// Feed poller wired to YouTube and Discord.
pub type YouTubeFeedPoller = FeedPoller<YouTubeFeedClient, ChannelAnnouncer, LogChannel>;

/// Polls the upload feed and announces uploads the gate lets through.
///
/// The poller never returns errors: every failure is reported to the log sink and
/// the next interval simply tries again.
pub struct FeedPoller<S, P, L> {
    source: S,
    publisher: P,
    log: L,
    gate: Arc<RwLock<AnnouncementGate>>,
}

impl<S, P, L> FeedPoller<S, P, L>
where
    S: FeedSource,
    P: AnnouncementPublisher,
    L: LogSink,
{
    /// Creates a poller sharing the announcement gate with the command handlers.
    ///
    /// # Arguments
    /// - `source` - Feed to poll for the newest upload
    /// - `publisher` - Where announcements are posted
    /// - `log` - Observability sink for every cycle outcome
    /// - `gate` - Shared announcement gate from `BotState`
    pub fn new(source: S, publisher: P, log: L, gate: Arc<RwLock<AnnouncementGate>>) -> Self {
        Self {
            source,
            publisher,
            log,
            gate,
        }
    }

    /// Recovers the last announced upload from the announcement channel history.
    ///
    /// Runs once at startup before the first cycle. A failed history read is
    /// reported and treated as "nothing announced yet".
    ///
    /// # Arguments
    /// - `history` - Announcement channel history reader
    /// - `limit` - Number of recent messages to scan
    ///
    /// # Returns
    /// - `Some(String)` - Video id found in history
    /// - `None` - No announcement found or history unavailable
    pub async fn seed<H>(&self, history: &H, limit: u8) -> Option<String>
    where
        H: ChannelHistory + ?Sized,
    {
        let video_id = match history.recent_messages(limit).await {
            Ok(messages) => last_announced_video_id(&messages),
            Err(e) => {
                self.log
                    .log(&format!("[ERROR] Could not read announcement history: {}", e))
                    .await;
                None
            }
        };

        if !self.gate.write().await.seed(video_id.clone()) {
            tracing::warn!("Announcement gate already seeded; ignoring {:?}", video_id);
            return video_id;
        }

        match &video_id {
            Some(id) => {
                self.log
                    .log(&format!("[SEED] Last announced video: {}", id))
                    .await
            }
            None => {
                self.log
                    .log("[SEED] No previous announcement found in recent history.")
                    .await
            }
        }

        video_id
    }

    /// Runs one poll cycle.
    ///
    /// With announcements disabled nothing is fetched. Otherwise the newest upload
    /// is claimed on the gate before it is published, so overlapping cycles cannot
    /// announce it twice. A failed send is reported and the claim is kept: an upload
    /// is announced at most once.
    ///
    /// # Returns
    /// - `CycleOutcome` - What the cycle did, for logging and tests
    pub async fn run_cycle(&self) -> CycleOutcome {
        if !self.gate.read().await.is_enabled() {
            tracing::debug!("YouTube announcements disabled; skipping feed fetch");
            return CycleOutcome::Disabled;
        }

        let item = match self.source.latest().await {
            Ok(item) => item,
            Err(e) => {
                self.log.log(&format!("[ERROR] YouTube loop: {}", e)).await;
                return CycleOutcome::FetchFailed;
            }
        };

        let claimed = {
            let mut gate = self.gate.write().await;
            // Owner may have switched announcements off while the fetch was in flight
            if gate.is_enabled() {
                Some(gate.claim(&item.video_id))
            } else {
                None
            }
        };

        let Some(claimed) = claimed else {
            self.log
                .log(&format!(
                    "[INFO] Announcements disabled during fetch – not announcing {}.",
                    item.video_id
                ))
                .await;
            return CycleOutcome::Disabled;
        };

        if !claimed {
            self.log
                .log("[INFO] Same video as last time – skipping.")
                .await;
            return CycleOutcome::Skipped(item.video_id);
        }

        match self.publisher.publish(&item).await {
            Ok(()) => {
                self.log
                    .log(&format!("[ANNOUNCED] {}", item.video_id))
                    .await;
                CycleOutcome::Announced(item.video_id)
            }
            Err(e) => {
                self.log
                    .log(&format!(
                        "[ERROR] Failed to announce {}: {}",
                        item.video_id, e
                    ))
                    .await;
                CycleOutcome::PublishFailed(item.video_id)
            }
        }
    }
}

/// Starts the YouTube feed scheduler
///
/// Registers a repeated job running one poll cycle per interval. The first cycle runs
/// one full interval after startup, giving the seed step time to complete.
///
/// # Arguments
/// - `poller`: Seeded feed poller
/// - `interval`: Time between poll cycles
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; call `shutdown` to stop polling
/// - `Err(AppError::SchedulerErr)` - Job could not be created or started
pub async fn start_scheduler<S, P, L>(
    poller: Arc<FeedPoller<S, P, L>>,
    interval: Duration,
) -> Result<JobScheduler, AppError>
where
    S: FeedSource + 'static,
    P: AnnouncementPublisher + 'static,
    L: LogSink + 'static,
{
    let scheduler = JobScheduler::new().await?;

    let job_poller = poller.clone();
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let poller = job_poller.clone();

        Box::pin(async move {
            let outcome = poller.run_cycle().await;
            tracing::debug!("YouTube feed cycle finished: {:?}", outcome);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "YouTube feed scheduler started, polling every {}s",
        interval.as_secs()
    );

    Ok(scheduler)
}
