//! View-state controller
//!
//! Owns the current [`ViewState`] and the full post batch. Every mutation
//! goes through one of the `on_*` handlers, which recompute the visible page
//! from scratch and rewrite the location.
//!
//! Tag and page changes apply immediately. Search edits only update the
//! input text; the filter sees them once the debouncer releases them via
//! [`ViewController::poll`] or [`ViewController::flush_search`]. A tag or
//! page change made while an edit is pending uses the last committed search
//! text, and the pending edit recomputes from the then-current state when it
//! lands.

use std::time::{Duration, Instant};

use tagview_engine::{compute_visible_page, encode, extract_tags, page_count};
use tagview_types::{Post, TagVocabulary, ViewState, VisiblePage};

use crate::debounce::SearchDebouncer;
use crate::location::LocationSink;

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetch still outstanding
    Loading,
    /// Batch received (possibly empty)
    Ready,
}

pub struct ViewController<L: LocationSink> {
    state: ViewState,
    search_input: String,
    posts: Vec<Post>,
    vocabulary: TagVocabulary,
    visible: VisiblePage,
    phase: Phase,
    debouncer: SearchDebouncer,
    location: L,
}

impl<L: LocationSink> ViewController<L> {
    /// Start in `Loading` with a (usually deep-linked) initial state.
    pub fn new(initial: ViewState, location: L, debounce: Duration) -> Self {
        let mut controller = Self {
            search_input: initial.search_text().to_string(),
            state: initial,
            posts: Vec::new(),
            vocabulary: TagVocabulary::new(),
            visible: VisiblePage::default(),
            phase: Phase::Loading,
            debouncer: SearchDebouncer::new(debounce),
            location,
        };
        controller.refresh();
        controller
    }

    /// Replace the batch wholesale. Selected tags missing from the new
    /// vocabulary are kept.
    pub fn on_posts_loaded(&mut self, posts: Vec<Post>) {
        tracing::debug!(count = posts.len(), "posts loaded");
        self.vocabulary = extract_tags(&posts);
        self.posts = posts;
        self.phase = Phase::Ready;
        self.refresh();
    }

    pub fn on_tags_changed<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.set_selected_tags(tags);
        self.refresh();
    }

    /// Record a search edit; the filter is rerun once the edit settles.
    pub fn on_search_changed(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.debouncer.push(self.search_input.clone(), now);
    }

    pub fn on_page_changed(&mut self, page: u32, page_size: u32) {
        self.state.set_page(page);
        self.state.set_page_size(page_size);
        self.refresh();
    }

    /// Apply a settled search edit. Returns whether the view changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.take_due(now) {
            Some(text) => self.commit_search(text),
            None => false,
        }
    }

    /// Apply any pending search edit right away.
    pub fn flush_search(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(text) => self.commit_search(text),
            None => false,
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
        self.refresh();
    }

    pub fn clear_tags(&mut self) {
        self.on_tags_changed(Vec::<String>::new());
    }

    /// Step forward, stopping at the last page of the current result.
    pub fn next_page(&mut self) {
        let page = self.state.page();
        if page < self.page_count() {
            self.on_page_changed(page + 1, self.state.page_size());
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.state.page();
        if page > 1 {
            self.on_page_changed(page - 1, self.state.page_size());
        }
    }

    /// Move to the next entry of [`PAGE_SIZE_OPTIONS`], wrapping around, and
    /// pull the page back into range for the new size.
    pub fn cycle_page_size(&mut self) {
        let current = self.state.page_size();
        let next = PAGE_SIZE_OPTIONS
            .iter()
            .copied()
            .find(|size| *size > current)
            .unwrap_or(PAGE_SIZE_OPTIONS[0]);

        let last_page = page_count(self.visible.total, next);
        self.on_page_changed(self.state.page().min(last_page), next);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Text in the search box, which may be ahead of the applied search.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn visible(&self) -> &VisiblePage {
        &self.visible
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.visible.total, self.state.page_size())
    }

    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending search edit is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn commit_search(&mut self, text: String) -> bool {
        if text == self.state.search_text() {
            return false;
        }
        self.state.set_search_text(text);
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.visible = compute_visible_page(&self.posts, &self.state);
        let query = encode(&self.state);
        tracing::trace!(%query, shown = self.visible.len(), total = self.visible.total, "view refreshed");
        self.location.replace(&query);
    }
}
