//! Status bar: page position and key help for the focused control.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{Focus, StatusBarViewModel};

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }

    fn help_keys(&self) -> &'static [(&'static str, &'static str)] {
        match self.model.focus {
            Focus::Table => &[
                ("[←/→]", "page "),
                ("[s]", "size "),
                ("[c]", "clear "),
                ("[tab]", "focus "),
                ("[q]", "uit"),
            ],
            Focus::Tags => &[
                ("[↑/↓]", "move "),
                ("[space]", "toggle "),
                ("[c]", "clear "),
                ("[tab]", "focus "),
            ],
            Focus::Search => &[("[enter]", "apply "), ("[esc]", "back "), ("[tab]", "focus ")],
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!(
                "Page {}/{} ",
                self.model.page, self.model.page_count
            )),
            Span::raw("| "),
            Span::raw(format!("{} / page ", self.model.page_size)),
            Span::raw("| "),
            Span::styled(
                format!("{} matches", self.model.total),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let help_spans: Vec<Span> = self
            .help_keys()
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::raw(*label),
                ]
            })
            .collect();
        Paragraph::new(Line::from(help_spans))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
