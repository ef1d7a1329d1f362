//! View components
//!
//! Ratatui widgets (and one console `Display`) that wrap a view model.
//! Views hold a reference to their model and only map it to widgets; no
//! filtering or paging happens here.

pub mod dump;
pub mod filter_bar;
pub mod loading;
pub mod status_bar;
pub mod table;
pub mod tag_picker;

pub use dump::DumpView;
pub use filter_bar::FilterBarView;
pub use loading::LoadingView;
pub use status_bar::StatusBarView;
pub use table::PostTableView;
pub use tag_picker::TagPickerView;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Border style for a control, highlighted when it has focus.
pub(crate) fn focus_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(crate) fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
}

/// A tag rendered as a chip.
pub(crate) fn tag_chip(tag: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", tag),
        Style::default().fg(Color::Black).bg(Color::Gray),
    )
}
