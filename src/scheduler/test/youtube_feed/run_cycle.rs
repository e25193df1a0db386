use super::*;

const WATCH_LINK: &str = "https://www.youtube.com/watch?v=NEW0001";
const NEWER_LINK: &str = "https://www.youtube.com/watch?v=NEW0002";

/// Tests that a disabled gate skips the cycle entirely.
///
/// Expected: Disabled, no fetch, no announcement, no log report
#[tokio::test]
async fn disabled_gate_does_not_fetch() {
    let h = harness(vec![FeedResponse::Link(WATCH_LINK)], false);

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Disabled);
    assert_eq!(h.feed.fetch_count(), 0);
    assert!(h.publisher.published_ids().is_empty());
    assert!(h.log.messages().is_empty());
    assert_eq!(h.last_announced().await, None);
}

/// Tests that a new upload is announced and remembered.
///
/// Expected: Announced with the id recorded on the gate and reported to the log
#[tokio::test]
async fn announces_new_upload() {
    let h = harness(vec![FeedResponse::Link(WATCH_LINK)], true);

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Announced("NEW0001".to_string()));
    assert_eq!(h.publisher.published_ids(), vec!["NEW0001"]);
    assert_eq!(h.last_announced().await.as_deref(), Some("NEW0001"));
    assert_eq!(h.log.messages(), vec!["[ANNOUNCED] NEW0001"]);
}

/// Tests that the same upload seen twice is announced once.
///
/// Expected: second cycle Skipped with a single announcement overall
#[tokio::test]
async fn same_upload_is_not_announced_twice() {
    let h = harness(
        vec![FeedResponse::Link(WATCH_LINK), FeedResponse::Link(WATCH_LINK)],
        true,
    );

    h.poller.run_cycle().await;
    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Skipped("NEW0001".to_string()));
    assert_eq!(h.publisher.published_ids(), vec!["NEW0001"]);
    assert_eq!(
        h.log.messages().last().map(String::as_str),
        Some("[INFO] Same video as last time – skipping.")
    );
}

/// Tests that a newer upload after an announced one is announced too.
///
/// Expected: both uploads announced in order
#[tokio::test]
async fn newer_upload_is_announced() {
    let h = harness(
        vec![FeedResponse::Link(WATCH_LINK), FeedResponse::Link(NEWER_LINK)],
        true,
    );

    h.poller.run_cycle().await;
    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Announced("NEW0002".to_string()));
    assert_eq!(h.publisher.published_ids(), vec!["NEW0001", "NEW0002"]);
    assert_eq!(h.last_announced().await.as_deref(), Some("NEW0002"));
}

/// Tests that shorts links are announced by their short id.
///
/// Expected: Announced with the id taken from the `/shorts/` path
#[tokio::test]
async fn announces_shorts_upload() {
    let h = harness(
        vec![FeedResponse::Link("https://www.youtube.com/shorts/SHORT42")],
        true,
    );

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Announced("SHORT42".to_string()));
}

/// Tests that a broken feed is reported once and changes nothing.
///
/// Expected: FetchFailed with exactly one `[ERROR]` report
#[tokio::test]
async fn fetch_failure_is_reported_once() {
    let h = harness(vec![FeedResponse::Broken], true);

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::FetchFailed);
    let messages = h.log.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("[ERROR] YouTube loop:"));
    assert!(h.publisher.published_ids().is_empty());
    assert_eq!(h.last_announced().await, None);
}

/// Tests that an empty feed is treated like a fetch failure.
///
/// Expected: FetchFailed with exactly one report naming the empty feed
#[tokio::test]
async fn empty_feed_is_reported_once() {
    let h = harness(vec![FeedResponse::Empty], true);

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::FetchFailed);
    assert_eq!(
        h.log.messages(),
        vec!["[ERROR] YouTube loop: Feed contains no entries"]
    );
}

/// Tests that a failed send keeps the claimed id.
///
/// The send may have reached Discord even though the request failed, so the
/// upload is never retried.
///
/// Expected: PublishFailed with NEW0001 remembered, then Skipped on the next cycle
#[tokio::test]
async fn publish_failure_keeps_claimed_id() {
    let h = harness(
        vec![FeedResponse::Link(WATCH_LINK), FeedResponse::Link(WATCH_LINK)],
        true,
    );
    h.gate.write().await.seed(Some("OLD0001".to_string()));
    h.publisher.set_failing(true);

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::PublishFailed("NEW0001".to_string()));
    assert_eq!(h.last_announced().await.as_deref(), Some("NEW0001"));
    assert!(h.log.messages()[0].starts_with("[ERROR] Failed to announce NEW0001:"));

    h.publisher.set_failing(false);
    let next = h.poller.run_cycle().await;

    assert_eq!(next, CycleOutcome::Skipped("NEW0001".to_string()));
    assert!(h.publisher.published_ids().is_empty());
}

/// Tests that overlapping cycles observing the same upload announce it once.
///
/// The publisher yields before recording, so the second cycle runs while the
/// first is still sending.
///
/// Expected: one Announced, one Skipped, a single announcement
#[tokio::test]
async fn overlapping_cycles_announce_once() {
    let h = harness(
        vec![FeedResponse::Link(WATCH_LINK), FeedResponse::Link(WATCH_LINK)],
        true,
    );

    let (first, second) = tokio::join!(h.poller.run_cycle(), h.poller.run_cycle());

    let mut outcomes = vec![first, second];
    outcomes.sort_by_key(|outcome| matches!(outcome, CycleOutcome::Skipped(_)));
    assert_eq!(
        outcomes,
        vec![
            CycleOutcome::Announced("NEW0001".to_string()),
            CycleOutcome::Skipped("NEW0001".to_string()),
        ]
    );
    assert_eq!(h.publisher.published_ids(), vec!["NEW0001"]);
}

/// Tests that switching the gate off stops announcements from the next cycle.
///
/// Expected: Disabled on the second cycle with only one fetch made
#[tokio::test]
async fn disabling_stops_following_cycles() {
    let h = harness(
        vec![FeedResponse::Link(WATCH_LINK), FeedResponse::Link(NEWER_LINK)],
        true,
    );

    h.poller.run_cycle().await;
    h.gate.write().await.set_enabled(false);
    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Disabled);
    assert_eq!(h.feed.fetch_count(), 1);
    assert_eq!(h.publisher.published_ids(), vec!["NEW0001"]);
}

/// Tests that switching the gate off during a fetch is reported.
///
/// Expected: Disabled with one `[INFO]` report, nothing announced or remembered
#[tokio::test]
async fn disabling_during_fetch_is_reported() {
    let h = harness(vec![FeedResponse::Link(WATCH_LINK)], true);
    h.feed.disable_during_fetch(h.gate.clone());

    let outcome = h.poller.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::Disabled);
    assert_eq!(h.feed.fetch_count(), 1);
    assert_eq!(
        h.log.messages(),
        vec!["[INFO] Announcements disabled during fetch – not announcing NEW0001."]
    );
    assert!(h.publisher.published_ids().is_empty());
    assert_eq!(h.last_announced().await, None);
}
