use std::collections::BTreeSet;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Everything that decides which posts are visible.
///
/// `page` and `page_size` are always at least 1; zero is replaced by the
/// default on construction and in the setters. Selected tags are not checked
/// against any vocabulary, so a tag that disappeared from the data is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: u32,
    page_size: u32,
    selected_tags: BTreeSet<String>,
    search_text: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            selected_tags: BTreeSet::new(),
            search_text: String::new(),
        }
    }
}

impl ViewState {
    pub fn new<I, S>(page: u32, page_size: u32, tags: I, search_text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::default();
        state.set_page(page);
        state.set_page_size(page_size);
        state.set_selected_tags(tags);
        state.set_search_text(search_text);
        state
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
    }

    pub fn set_selected_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|tag: &String| !tag.is_empty())
            .collect();
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }

    /// Adds the tag if absent, removes it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }
}
