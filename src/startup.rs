use std::{sync::Arc, time::Duration};

use serenity::http::Http;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    error::AppError,
    scheduler::youtube_feed::YouTubeFeedPoller,
    service::{feed::YouTubeFeedClient, publisher::ChannelAnnouncer},
    state::BotState,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Initializes the tracing subscriber.
///
/// Filter defaults to `info` and can be overridden through `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Builds the HTTP client shared by the feed poller and the Hypixel commands.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with user agent and request timeout set
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;

    Ok(client)
}

/// Creates the Discord HTTP client used by the log channel and the announcer.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_token))
}

/// Builds the feed poller and recovers the last announced upload.
///
/// Must complete before the scheduler starts so the first cycle never re-announces
/// an upload announced before the restart.
///
/// # Arguments
/// - `state` - Bot state holding the shared announcement gate
///
/// # Returns
/// - `Ok(YouTubeFeedPoller)` - Seeded poller, ready to be scheduled
/// - `Err(AppError::InternalError)` - Feed URL could not be built from configuration
pub async fn seed_feed_poller(state: &BotState) -> Result<YouTubeFeedPoller, AppError> {
    let config = &state.config;

    let source = YouTubeFeedClient::new(
        state.http_client.clone(),
        &config.youtube_feed_url,
        &config.youtube_channel_id,
    )
    .map_err(|e| AppError::InternalError(format!("Invalid YouTube feed URL: {}", e)))?;
    let announcer = ChannelAnnouncer::new(state.discord_http.clone(), config.announce_channel_id);

    let poller = YouTubeFeedPoller::new(
        source,
        announcer.clone(),
        state.log.clone(),
        state.gate.clone(),
    );
    poller.seed(&announcer, config.seed_scan_limit).await;

    Ok(poller)
}
