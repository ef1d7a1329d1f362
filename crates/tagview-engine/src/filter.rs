//! Filter and paginate a post batch for a given view state.
//!
//! Order is fixed: tag filter (OR across selected tags), then a
//! case-insensitive substring match on the body, then the page window.

use tagview_types::{Post, ViewState, VisiblePage};

/// Posts that pass the tag and search filters, in batch order.
pub fn filter_posts<'a>(posts: &'a [Post], state: &ViewState) -> Vec<&'a Post> {
    let selected = state.selected_tags();
    let needle = state.search_text().to_lowercase();

    posts
        .iter()
        .filter(|post| selected.is_empty() || post.has_any_tag(selected))
        .filter(|post| needle.is_empty() || post.body.to_lowercase().contains(&needle))
        .collect()
}

/// Slice `[(page-1)*page_size, page*page_size)` out of the filtered posts.
///
/// A window that starts past the end is empty; `page` is not clamped.
pub fn paginate(filtered: &[&Post], page: u32, page_size: u32) -> Vec<Post> {
    let size = page_size.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(size);

    filtered
        .iter()
        .skip(start)
        .take(size)
        .map(|post| (*post).clone())
        .collect()
}

pub fn compute_visible_page(posts: &[Post], state: &ViewState) -> VisiblePage {
    let filtered = filter_posts(posts, state);
    VisiblePage {
        posts: paginate(&filtered, state.page(), state.page_size()),
        total: filtered.len(),
    }
}

/// Number of pages the pagination control offers; never less than 1.
pub fn page_count(total: usize, page_size: u32) -> u32 {
    let size = page_size.max(1) as usize;
    total.div_ceil(size).max(1).try_into().unwrap_or(u32::MAX)
}
