//! Filter bar: selected tags on the left, search input on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{focus_border_style, placeholder_style, tag_chip};
use crate::presentation::view_models::{FilterBarViewModel, Focus};

pub struct FilterBarView<'a> {
    model: &'a FilterBarViewModel,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a FilterBarViewModel) -> Self {
        Self { model }
    }

    fn tags_line(&self) -> Line<'static> {
        if self.model.selected_tags.is_empty() {
            return Line::from(Span::styled("Filter", placeholder_style()));
        }

        let mut spans = Vec::with_capacity(self.model.selected_tags.len() * 2);
        for tag in &self.model.selected_tags {
            spans.push(tag_chip(tag));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn search_line(&self) -> Line<'a> {
        let mut spans = if self.model.search_input.is_empty() {
            vec![Span::styled("Search...", placeholder_style())]
        } else {
            vec![Span::raw(self.model.search_input.as_str())]
        };

        if self.model.focus == Focus::Search {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        if self.model.search_pending {
            spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

        let tags_block = Block::default()
            .title(" Filter ")
            .borders(Borders::ALL)
            .border_style(focus_border_style(self.model.focus == Focus::Tags));
        Paragraph::new(self.tags_line())
            .block(tags_block)
            .render(chunks[0], buf);

        let search_block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(focus_border_style(self.model.focus == Focus::Search));
        Paragraph::new(self.search_line())
            .block(search_block)
            .render(chunks[1], buf);
    }
}
