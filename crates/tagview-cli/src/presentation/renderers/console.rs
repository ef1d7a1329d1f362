use anyhow::Result;

use crate::presentation::view_models::DumpViewModel;
use crate::presentation::views::DumpView;

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    pub fn render(&self, dump: &DumpViewModel) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(dump)?);
            return Ok(());
        }

        print!("{}", DumpView::new(dump));
        Ok(())
    }
}
