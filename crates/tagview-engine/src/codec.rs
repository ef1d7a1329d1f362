//! View-state query codec
//!
//! Maps a [`ViewState`] to the flat `page=..&pageSize=..&tags=..&search=..`
//! query used as the shareable address, and back.
//!
//! Decoding never fails: missing, malformed or non-positive values fall back
//! to the defaults. Encoding always writes all four keys so the address fully
//! describes the view.

use tagview_types::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ViewState};
use url::form_urlencoded;

pub const PAGE_KEY: &str = "page";
pub const PAGE_SIZE_KEY: &str = "pageSize";
pub const TAGS_KEY: &str = "tags";
pub const SEARCH_KEY: &str = "search";

const TAG_SEPARATOR: char = ',';

/// Parse a query string (optionally a full address) into a view state.
pub fn decode(query: &str) -> ViewState {
    let query = strip_address_prefix(query.trim());
    let mut state = ViewState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PAGE_KEY => state.set_page(parse_positive(&value).unwrap_or(DEFAULT_PAGE)),
            PAGE_SIZE_KEY => {
                state.set_page_size(parse_positive(&value).unwrap_or(DEFAULT_PAGE_SIZE))
            }
            TAGS_KEY => state.set_selected_tags(value.split(TAG_SEPARATOR)),
            SEARCH_KEY => state.set_search_text(value.into_owned()),
            _ => {}
        }
    }

    state
}

/// Serialize a view state into its query form.
pub fn encode(state: &ViewState) -> String {
    let tags = state
        .selected_tags()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");

    form_urlencoded::Serializer::new(String::new())
        .append_pair(PAGE_KEY, &state.page().to_string())
        .append_pair(PAGE_SIZE_KEY, &state.page_size().to_string())
        .append_pair(TAGS_KEY, &tags)
        .append_pair(SEARCH_KEY, state.search_text())
        .finish()
}

// Accepts "?page=2", "/?page=2" and "https://host/?page=2". A '?' that comes
// after a key/value pair belongs to an unescaped value and is left alone.
fn strip_address_prefix(input: &str) -> &str {
    match input.split_once('?') {
        Some((prefix, rest)) if !prefix.contains('=') && !prefix.contains('&') => rest,
        _ => input,
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
