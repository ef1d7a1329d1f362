use proptest::prelude::*;
use tagview_engine::{compute_visible_page, decode, encode, filter_posts};
use tagview_types::{Post, ViewState};

fn post_strategy() -> impl Strategy<Value = Post> {
    (
        any::<u64>(),
        "[a-zA-Z ]{0,20}",
        "[a-zA-Z ]{0,60}",
        prop::collection::vec("[a-e]", 0..4),
    )
        .prop_map(|(id, title, body, tags)| Post {
            id,
            title,
            body,
            tags,
        })
}

fn view_state_strategy() -> impl Strategy<Value = ViewState> {
    (
        1u32..10_000,
        1u32..500,
        prop::collection::btree_set("[a-z0-9 &=%?+-]{1,8}", 0..5),
        ".{0,24}",
    )
        .prop_map(|(page, page_size, tags, search)| ViewState::new(page, page_size, tags, search))
}

proptest! {
    #[test]
    fn prop_codec_round_trips(state in view_state_strategy()) {
        prop_assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn prop_tag_filter_keeps_only_tagged_posts(
        posts in prop::collection::vec(post_strategy(), 0..40),
        tags in prop::collection::btree_set("[a-e]", 1..3),
    ) {
        let state = ViewState::new(1, 10, tags.clone(), "");
        for post in filter_posts(&posts, &state) {
            prop_assert!(post.tags.iter().any(|tag| tags.contains(tag)));
        }
    }

    #[test]
    fn prop_search_filter_matches_body(
        posts in prop::collection::vec(post_strategy(), 0..40),
        search in "[a-zA-Z]{1,2}",
    ) {
        let state = ViewState::new(1, 10, Vec::<String>::new(), search.clone());
        for post in filter_posts(&posts, &state) {
            prop_assert!(post.body.to_lowercase().contains(&search.to_lowercase()));
        }
    }

    #[test]
    fn prop_visible_page_is_a_window_of_the_filtered_posts(
        posts in prop::collection::vec(post_strategy(), 0..60),
        page in 1u32..8,
        page_size in 1u32..15,
    ) {
        let state = ViewState::new(page, page_size, Vec::<String>::new(), "");
        let visible = compute_visible_page(&posts, &state);

        prop_assert!(visible.len() <= page_size as usize);
        prop_assert_eq!(visible.total, posts.len());

        let start = ((page - 1) * page_size) as usize;
        let expected: Vec<Post> = posts.iter().skip(start).take(page_size as usize).cloned().collect();
        prop_assert_eq!(visible.posts, expected);
    }
}
