use super::post::Post;

/// Posts shown for the current view, plus how many matched before slicing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisiblePage {
    pub posts: Vec<Post>,
    /// Filtered count before pagination; drives the page counter.
    pub total: usize,
}

impl VisiblePage {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }
}
