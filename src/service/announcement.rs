//! Announcement gate for YouTube upload announcements.
//!
//! The gate pairs the owner's manual on/off switch with the id of the last announced
//! upload. The feed poller asks it whether a freshly observed upload should be
//! announced and records the decision through a claim, so two overlapping cycles can
//! never announce the same upload.

/// Manual announcement switch plus last-announced bookkeeping.
///
/// Starts disabled with no remembered upload. Shared through `BotState` behind a
/// `tokio::sync::RwLock`; every mutation is a single assignment under the write lock.
#[derive(Debug, Default)]
pub struct AnnouncementGate {
    enabled: bool,
    last_announced_id: Option<String>,
    seeded: bool,
}

impl AnnouncementGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the manual switch. Authorization is checked by the caller.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flips the manual switch and returns the new state.
    pub fn toggle(&mut self) -> bool {
        let enabled = !self.enabled;
        self.set_enabled(enabled);
        enabled
    }

    pub fn last_announced_id(&self) -> Option<&str> {
        self.last_announced_id.as_deref()
    }

    /// Whether an upload should be announced: switch on and id differs from the last one.
    pub fn should_announce(&self, candidate_id: &str) -> bool {
        self.enabled && self.last_announced_id.as_deref() != Some(candidate_id)
    }

    /// Stores the id recovered from channel history at startup.
    ///
    /// Only the first call has an effect; later calls are ignored so a reconnect can
    /// never move the remembered id.
    ///
    /// # Returns
    /// - `true` - Seed was applied (even when `video_id` is `None`)
    /// - `false` - Gate was already seeded
    pub fn seed(&mut self, video_id: Option<String>) -> bool {
        if self.seeded {
            return false;
        }

        self.seeded = true;
        if video_id.is_some() {
            self.last_announced_id = video_id;
        }
        true
    }

    /// Claims an upload for announcement if [`should_announce`](Self::should_announce) allows it.
    ///
    /// The remembered id is replaced immediately, before anything is sent, and is
    /// never reverted: a send that fails after the claim is not retried, so an
    /// upload is announced at most once.
    ///
    /// # Returns
    /// - `true` - Upload claimed; the caller publishes it
    /// - `false` - Gate disabled or upload already announced
    pub fn claim(&mut self, candidate_id: &str) -> bool {
        if !self.should_announce(candidate_id) {
            return false;
        }

        self.last_announced_id = Some(candidate_id.to_string());
        true
    }
}
