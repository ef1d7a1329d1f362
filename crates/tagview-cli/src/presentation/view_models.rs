use serde::Serialize;

/// Which control receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Tags,
    Search,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Table => Focus::Tags,
            Focus::Tags => Focus::Search,
            Focus::Search => Focus::Table,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Table => Focus::Search,
            Focus::Tags => Focus::Table,
            Focus::Search => Focus::Tags,
        }
    }
}

/// Renderer-owned UI state (not part of the shareable view state).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub tag_cursor: usize,
    pub spinner_frame: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRowViewModel {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptionViewModel {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct FilterBarViewModel {
    pub selected_tags: Vec<String>,
    pub search_input: String,
    pub search_pending: bool,
    pub focus: Focus,
}

#[derive(Debug, Clone)]
pub struct TagPickerViewModel {
    pub options: Vec<TagOptionViewModel>,
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub struct TableViewModel {
    pub rows: Vec<PostRowViewModel>,
    /// False below the width breakpoint
    pub show_tags: bool,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub page: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub total: usize,
    pub focus: Focus,
}

#[derive(Debug, Clone)]
pub struct ReadyScreenViewModel {
    pub address: String,
    pub filter_bar: FilterBarViewModel,
    /// Present while the tag control has focus
    pub tag_picker: Option<TagPickerViewModel>,
    pub table: TableViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone)]
pub enum ScreenViewModel {
    Loading { spinner: char },
    Ready(Box<ReadyScreenViewModel>),
}

/// Output of `tagview dump`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpViewModel {
    pub address: String,
    pub page: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub total: usize,
    pub tags: Vec<String>,
    pub rows: Vec<PostRowViewModel>,
}
