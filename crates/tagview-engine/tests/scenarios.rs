use tagview_engine::{compute_visible_page, decode, extract_tags};
use tagview_testing::fixtures::{abc_posts, numbered_posts};
use tagview_types::ViewState;

#[test]
fn test_abc_vocabulary() {
    let vocabulary = extract_tags(&abc_posts());
    assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_deep_link_over_abc_batch() {
    let state = decode("page=1&pageSize=2&tags=a&search=");
    let page = compute_visible_page(&abc_posts(), &state);

    let ids: Vec<u64> = page.posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(page.total, 2);
}

#[test]
fn test_second_page_of_twenty_five() {
    let posts = numbered_posts(25, "t");
    let page = compute_visible_page(&posts, &ViewState::new(2, 10, ["t"], ""));

    let ids: Vec<u64> = page.posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<_>>());
}

#[test]
fn test_out_of_range_page_is_empty() {
    let posts = numbered_posts(5, "t");
    let page = compute_visible_page(&posts, &ViewState::new(100, 10, Vec::<String>::new(), ""));

    assert!(page.is_empty());
    assert_eq!(page.total, 5);
}

#[test]
fn test_empty_batch_yields_empty_view() {
    let state = decode("page=2&tags=history,tech&search=foo");
    assert!(compute_visible_page(&[], &state).is_empty());
    assert!(extract_tags(&[]).is_empty());
}

#[test]
fn test_search_is_body_only_and_case_insensitive() {
    let state = decode("search=FOX");
    let page = compute_visible_page(&abc_posts(), &state);

    let ids: Vec<u64> = page.posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
