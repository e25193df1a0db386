use test_utils::serenity::create_test_message;

use super::*;

const CHANNEL_ID: u64 = 10;
const BOT_ID: u64 = 1;

fn history_with_announcement() -> FakeHistory {
    FakeHistory(Some(vec![
        create_test_message(3, CHANNEL_ID, BOT_ID, "thanks for watching"),
        create_test_message(
            2,
            CHANNEL_ID,
            BOT_ID,
            "@everyone 📢 A new video has just been uploaded!\nhttps://www.youtube.com/watch?v=OLD0002",
        ),
        create_test_message(
            1,
            CHANNEL_ID,
            BOT_ID,
            "@everyone 📢 A new video has just been uploaded!\nhttps://www.youtube.com/watch?v=OLD0001",
        ),
    ]))
}

/// Tests that the newest announced upload is recovered from history.
///
/// Expected: OLD0002 seeded and reported
#[tokio::test]
async fn seeds_newest_announcement() {
    let h = harness(vec![], true);

    let seeded = h.poller.seed(&history_with_announcement(), 20).await;

    assert_eq!(seeded.as_deref(), Some("OLD0002"));
    assert_eq!(h.last_announced().await.as_deref(), Some("OLD0002"));
    assert_eq!(h.log.messages(), vec!["[SEED] Last announced video: OLD0002"]);
}

/// Tests that an upload already announced before a restart is not announced again.
///
/// Expected: first cycle after seeding is Skipped
#[tokio::test]
async fn seeded_upload_is_skipped_after_restart() {
    let h = harness(
        vec![FeedResponse::Link("https://www.youtube.com/watch?v=OLD0002")],
        true,
    );

    h.poller.seed(&history_with_announcement(), 20).await;
    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Skipped("OLD0002".to_string()));
    assert!(h.publisher.published_ids().is_empty());
}

/// Tests that the scan limit bounds how far back history is read.
///
/// Expected: no announcement within the first message, nothing seeded
#[tokio::test]
async fn scan_limit_bounds_history() {
    let h = harness(vec![], true);

    let seeded = h.poller.seed(&history_with_announcement(), 1).await;

    assert_eq!(seeded, None);
    assert_eq!(h.last_announced().await, None);
}

/// Tests that an unreadable history is reported and seeds nothing.
///
/// Expected: None with an `[ERROR]` report, and the next upload announced
#[tokio::test]
async fn history_failure_seeds_nothing() {
    let h = harness(vec![FeedResponse::Link("https://www.youtube.com/watch?v=NEW0001")], true);

    let seeded = h.poller.seed(&FakeHistory(None), 20).await;

    assert_eq!(seeded, None);
    assert!(h.log.messages()[0].starts_with("[ERROR] Could not read announcement history:"));
    assert_eq!(
        h.poller.run_cycle().await,
        CycleOutcome::Announced("NEW0001".to_string())
    );
}

/// Tests that seeding applies only once.
///
/// Expected: second seed leaves the first value in place
#[tokio::test]
async fn seed_applies_once() {
    let h = harness(vec![], true);
    h.poller.seed(&history_with_announcement(), 20).await;

    let other = FakeHistory(Some(vec![create_test_message(
        9,
        CHANNEL_ID,
        BOT_ID,
        "https://www.youtube.com/watch?v=OTHER01",
    )]));
    h.poller.seed(&other, 20).await;

    assert_eq!(h.last_announced().await.as_deref(), Some("OLD0002"));
}
