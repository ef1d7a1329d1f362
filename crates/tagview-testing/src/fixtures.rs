//! Post fixtures.

use tagview_types::Post;

/// Build a post with a generated title.
pub fn post(id: u64, body: &str, tags: &[&str]) -> Post {
    Post {
        id,
        title: format!("Post {}", id),
        body: body.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Three posts tagged `["a"]`, `["b"]`, `["a", "b"]`.
pub fn abc_posts() -> Vec<Post> {
    vec![
        post(1, "The quick brown fox.", &["a"]),
        post(2, "Jumps over the lazy dog.", &["b"]),
        post(3, "A fox and a dog walk into a bar.", &["a", "b"]),
    ]
}

/// `count` posts with ids starting at 1, all sharing `tag`.
pub fn numbered_posts(count: u64, tag: &str) -> Vec<Post> {
    (1..=count)
        .map(|id| post(id, &format!("Body of post number {}", id), &[tag]))
        .collect()
}

/// A small batch shaped like the public posts API.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "His mother had always taught him".to_string(),
            body: "His mother had always taught him not to ever think of himself as better than others.".to_string(),
            tags: vec!["history".into(), "american".into(), "crime".into()],
        },
        Post {
            id: 2,
            title: "He was an expert but not in a discipline".to_string(),
            body: "He was an expert but not in a discipline that anyone could fully appreciate.".to_string(),
            tags: vec!["french".into(), "fiction".into(), "english".into()],
        },
        Post {
            id: 3,
            title: "Dave watched as the forest burned up on the hill.".to_string(),
            body: "Dave watched as the forest burned up on the hill, only a few miles from her house.".to_string(),
            tags: vec!["magical".into(), "history".into(), "french".into()],
        },
        Post {
            id: 4,
            title: "All he wanted was a candy bar.".to_string(),
            body: "All he wanted was a candy bar. It didn't seem like a difficult request to comprehend.".to_string(),
            tags: vec!["mystery".into(), "english".into(), "american".into()],
        },
    ]
}

/// JSON body the posts endpoint would return for `posts`.
pub fn response_json(posts: &[Post]) -> String {
    serde_json::json!({
        "posts": posts,
        "total": posts.len(),
        "skip": 0,
        "limit": posts.len(),
    })
    .to_string()
}
