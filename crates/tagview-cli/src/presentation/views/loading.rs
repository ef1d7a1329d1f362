use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Full-screen spinner shown while the initial fetch is outstanding.
pub struct LoadingView {
    spinner: char,
}

impl LoadingView {
    pub fn new(spinner: char) -> Self {
        Self { spinner }
    }
}

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.spinner), Style::default().fg(Color::Cyan)),
            Span::raw("Loading..."),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(rows[1], buf);
    }
}
