use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use super::focus_border_style;
use crate::presentation::view_models::TagPickerViewModel;

/// Multi-select list over the tag vocabulary.
pub struct TagPickerView<'a> {
    model: &'a TagPickerViewModel,
}

impl<'a> TagPickerView<'a> {
    pub fn new(model: &'a TagPickerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> ratatui::widgets::Widget for TagPickerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self
            .model
            .options
            .iter()
            .filter(|option| option.selected)
            .count();
        let block = Block::default()
            .title(format!(" Tags {}/{} ", selected, self.model.options.len()))
            .borders(Borders::ALL)
            .border_style(focus_border_style(true));

        let items: Vec<ListItem> = self
            .model
            .options
            .iter()
            .map(|option| {
                let (mark, style) = if option.selected {
                    ("[x] ", Style::default().fg(Color::Green))
                } else {
                    ("[ ] ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(option.name.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default();
        if !self.model.options.is_empty() {
            state.select(Some(self.model.cursor.min(self.model.options.len() - 1)));
        }
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
