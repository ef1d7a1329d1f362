//! Posts table.
//!
//! Columns: ID, Title (22%), Body (60%), Tags. The tags column is dropped
//! below the width breakpoint and the body takes the remaining space.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::{focus_border_style, placeholder_style, tag_chip};
use crate::presentation::view_models::{PostRowViewModel, TableViewModel};

pub struct PostTableView<'a> {
    model: &'a TableViewModel,
    focused: bool,
}

impl<'a> PostTableView<'a> {
    pub fn new(model: &'a TableViewModel, focused: bool) -> Self {
        Self { model, focused }
    }

    fn widths(&self) -> Vec<Constraint> {
        if self.model.show_tags {
            vec![
                Constraint::Length(5),
                Constraint::Percentage(22),
                Constraint::Percentage(60),
                Constraint::Fill(1),
            ]
        } else {
            vec![
                Constraint::Length(5),
                Constraint::Percentage(22),
                Constraint::Fill(1),
            ]
        }
    }

    fn header(&self) -> Row<'static> {
        let mut titles = vec!["ID", "Title", "Body"];
        if self.model.show_tags {
            titles.push("Tags");
        }
        Row::new(titles).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn row(&self, post: &'a PostRowViewModel) -> Row<'a> {
        let mut cells = vec![
            Cell::from(post.id.to_string()),
            Cell::from(post.title.as_str()),
            Cell::from(post.body.as_str()),
        ];
        if self.model.show_tags {
            let mut spans: Vec<Span> = Vec::with_capacity(post.tags.len() * 2);
            for tag in &post.tags {
                spans.push(tag_chip(tag));
                spans.push(Span::raw(" "));
            }
            cells.push(Cell::from(Line::from(spans)));
        }
        Row::new(cells)
    }
}

impl<'a> Widget for PostTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Posts ")
            .borders(Borders::ALL)
            .border_style(focus_border_style(self.focused));

        if self.model.rows.is_empty() {
            Paragraph::new(Span::styled("No data", placeholder_style()))
                .block(block)
                .render(area, buf);
            return;
        }

        let rows: Vec<Row> = self.model.rows.iter().map(|post| self.row(post)).collect();
        let table = Table::new(rows, self.widths())
            .header(self.header())
            .column_spacing(2)
            .block(block);

        Widget::render(table, area, buf);
    }
}
