use std::time::{Duration, Instant};

use tagview_engine::decode;
use tagview_runtime::{
    LocationSink, MemoryLocation, Phase, ViewController, spawn_initial_fetch,
};
use tagview_testing::fixtures::{abc_posts, numbered_posts, sample_posts};
use tagview_testing::{FailingSource, StaticSource};
use tagview_types::ViewState;

const DEBOUNCE: Duration = Duration::from_millis(500);

fn controller_for(query: &str) -> ViewController<MemoryLocation> {
    ViewController::new(decode(query), MemoryLocation::new(query), DEBOUNCE)
}

fn visible_ids(controller: &ViewController<MemoryLocation>) -> Vec<u64> {
    controller.visible().posts.iter().map(|post| post.id).collect()
}

#[test]
fn test_starts_loading_with_normalized_address() {
    let controller = controller_for("page=abc&tags=history");

    assert_eq!(controller.phase(), Phase::Loading);
    assert!(controller.visible().is_empty());
    assert_eq!(
        controller.location().current(),
        "page=1&pageSize=10&tags=history&search="
    );
}

#[test]
fn test_deep_link_reproduced_once_data_arrives() {
    let mut controller = controller_for("page=1&pageSize=2&tags=a&search=");
    controller.on_posts_loaded(abc_posts());

    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(visible_ids(&controller), vec![1, 3]);
    assert_eq!(controller.vocabulary().iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_stale_tags_are_tolerated() {
    let mut controller = controller_for("tags=vanished");
    controller.on_posts_loaded(sample_posts());

    assert!(controller.state().selected_tags().contains("vanished"));
    assert!(controller.visible().is_empty());
}

#[test]
fn test_tag_change_applies_immediately_and_syncs() {
    let mut controller = controller_for("");
    controller.on_posts_loaded(abc_posts());
    let before = controller.location().replacements();

    controller.on_tags_changed(["b"]);

    assert_eq!(visible_ids(&controller), vec![2, 3]);
    assert_eq!(controller.location().replacements(), before + 1);
    assert_eq!(
        controller.location().current(),
        "page=1&pageSize=10&tags=b&search="
    );
}

#[test]
fn test_search_waits_for_debounce() {
    let start = Instant::now();
    let mut controller = controller_for("");
    controller.on_posts_loaded(abc_posts());

    controller.on_search_changed("f", start);
    controller.on_search_changed("fox", start + Duration::from_millis(100));

    assert_eq!(controller.search_input(), "fox");
    assert_eq!(controller.state().search_text(), "");
    assert_eq!(visible_ids(&controller), vec![1, 2, 3]);

    assert!(!controller.poll(start + Duration::from_millis(550)));
    assert!(controller.poll(start + Duration::from_millis(600)));

    assert_eq!(controller.state().search_text(), "fox");
    assert_eq!(visible_ids(&controller), vec![1, 3]);
    assert_eq!(
        controller.location().current(),
        "page=1&pageSize=10&tags=&search=fox"
    );
}

#[test]
fn test_page_change_during_pending_search_keeps_both() {
    let start = Instant::now();
    let mut controller = controller_for("pageSize=1");
    controller.on_posts_loaded(abc_posts());

    controller.on_search_changed("dog", start);
    controller.on_page_changed(2, 1);

    // Page change applied against the committed (empty) search.
    assert_eq!(visible_ids(&controller), vec![2]);
    assert_eq!(controller.state().search_text(), "");

    assert!(controller.poll(start + DEBOUNCE));
    assert_eq!(controller.state().page(), 2);
    assert_eq!(controller.state().search_text(), "dog");
    assert_eq!(visible_ids(&controller), vec![3]);
    assert_eq!(
        controller.location().current(),
        "page=2&pageSize=1&tags=&search=dog"
    );
}

#[test]
fn test_flush_search_applies_now() {
    let mut controller = controller_for("");
    controller.on_posts_loaded(abc_posts());
    controller.on_search_changed("lazy", Instant::now());

    assert!(controller.flush_search());
    assert_eq!(visible_ids(&controller), vec![2]);
    assert!(!controller.search_pending());
}

#[test]
fn test_unchanged_search_does_not_resync() {
    let mut controller = controller_for("search=fox");
    controller.on_posts_loaded(abc_posts());
    let before = controller.location().replacements();

    controller.on_search_changed("fox", Instant::now());
    assert!(!controller.flush_search());
    assert_eq!(controller.location().replacements(), before);
}

#[test]
fn test_paging_stops_at_bounds() {
    let mut controller = controller_for("");
    controller.on_posts_loaded(numbered_posts(25, "t"));

    controller.prev_page();
    assert_eq!(controller.state().page(), 1);

    controller.next_page();
    controller.next_page();
    controller.next_page();
    assert_eq!(controller.state().page(), 3);
    assert_eq!(controller.page_count(), 3);
    assert_eq!(visible_ids(&controller), (21..=25).collect::<Vec<_>>());
}

#[test]
fn test_cycle_page_size_clamps_page() {
    let mut controller = controller_for("page=3");
    controller.on_posts_loaded(numbered_posts(25, "t"));

    controller.cycle_page_size();
    assert_eq!(controller.state().page_size(), 20);
    assert_eq!(controller.state().page(), 2);

    controller.cycle_page_size();
    controller.cycle_page_size();
    assert_eq!(controller.state().page_size(), 100);
    assert_eq!(controller.state().page(), 1);

    controller.cycle_page_size();
    assert_eq!(controller.state().page_size(), 10);
}

#[test]
fn test_failed_fetch_renders_as_empty() {
    let rx = spawn_initial_fetch(FailingSource::default());
    let posts = rx.recv_timeout(Duration::from_secs(5)).unwrap();

    let mut controller = ViewController::new(ViewState::default(), MemoryLocation::default(), DEBOUNCE);
    controller.on_posts_loaded(posts);

    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.visible().is_empty());
    assert!(controller.vocabulary().is_empty());
}

#[test]
fn test_initial_fetch_delivers_batch_once() {
    let rx = spawn_initial_fetch(StaticSource::new(sample_posts()));

    let posts = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(posts.len(), 4);
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}
