use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::DumpViewModel;

const BODY_WIDTH: usize = 72;

/// Plain-text rendering of the visible page.
pub struct DumpView<'a> {
    data: &'a DumpViewModel,
}

impl<'a> DumpView<'a> {
    pub fn new(data: &'a DumpViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DumpView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "Address:".bold(), self.data.address)?;
        writeln!(
            f,
            "Page {}/{} · {} per page · {} matches",
            self.data.page, self.data.page_count, self.data.page_size, self.data.total
        )?;

        if self.data.rows.is_empty() {
            writeln!(f, "\n{}", "No data".dimmed())?;
            return Ok(());
        }

        for row in &self.data.rows {
            writeln!(f)?;
            writeln!(f, "{} {}", format!("#{}", row.id).yellow(), row.title.bold())?;
            writeln!(f, "    {}", truncate_text(&row.body, BODY_WIDTH))?;
            if !row.tags.is_empty() {
                writeln!(f, "    {}", row.tags.join(", ").cyan())?;
            }
        }

        Ok(())
    }
}

fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
