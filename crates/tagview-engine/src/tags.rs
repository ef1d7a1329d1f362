use tagview_types::{Post, TagVocabulary};

/// Distinct tags across every post in the batch.
pub fn extract_tags(posts: &[Post]) -> TagVocabulary {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, tags: &[&str]) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_batch_has_no_tags() {
        assert!(extract_tags(&[]).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let posts = vec![post(1, &["a"]), post(2, &["b"]), post(3, &["a", "b"])];
        let vocabulary = extract_tags(&posts);
        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![post(1, &["x", "y"]), post(2, &["z"])];
        let backward = vec![post(2, &["z"]), post(1, &["y", "x"])];
        assert_eq!(extract_tags(&forward), extract_tags(&backward));
    }
}
