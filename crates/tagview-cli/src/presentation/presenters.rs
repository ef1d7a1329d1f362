//! Presenters: controller state in, view models out. No I/O.

use tagview_runtime::{LocationSink, Phase, ViewController};
use tagview_types::Post;

use super::view_models::{
    DumpViewModel, FilterBarViewModel, Focus, PostRowViewModel, ReadyScreenViewModel,
    ScreenViewModel, StatusBarViewModel, TableViewModel, TagOptionViewModel, TagPickerViewModel,
    UiState,
};

/// Terminal width from which the tags column is shown.
pub const TAGS_COLUMN_MIN_WIDTH: u16 = 120;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn build_screen<L: LocationSink>(
    controller: &ViewController<L>,
    ui: &UiState,
    width: u16,
) -> ScreenViewModel {
    if controller.phase() == Phase::Loading {
        return ScreenViewModel::Loading {
            spinner: SPINNER_FRAMES[ui.spinner_frame % SPINNER_FRAMES.len()],
        };
    }

    let state = controller.state();

    let tag_picker = (ui.focus == Focus::Tags).then(|| TagPickerViewModel {
        options: controller
            .vocabulary()
            .iter()
            .map(|tag| TagOptionViewModel {
                name: tag.to_string(),
                selected: state.selected_tags().contains(tag),
            })
            .collect(),
        cursor: ui.tag_cursor,
    });

    ScreenViewModel::Ready(Box::new(ReadyScreenViewModel {
        address: controller.location().current().to_string(),
        filter_bar: FilterBarViewModel {
            selected_tags: state.selected_tags().iter().cloned().collect(),
            search_input: controller.search_input().to_string(),
            search_pending: controller.search_pending(),
            focus: ui.focus,
        },
        tag_picker,
        table: TableViewModel {
            rows: controller.visible().posts.iter().map(build_row).collect(),
            show_tags: width >= TAGS_COLUMN_MIN_WIDTH,
        },
        status_bar: StatusBarViewModel {
            page: state.page(),
            page_count: controller.page_count(),
            page_size: state.page_size(),
            total: controller.visible().total,
            focus: ui.focus,
        },
    }))
}

pub fn build_dump<L: LocationSink>(controller: &ViewController<L>) -> DumpViewModel {
    let state = controller.state();
    DumpViewModel {
        address: controller.location().current().to_string(),
        page: state.page(),
        page_count: controller.page_count(),
        page_size: state.page_size(),
        total: controller.visible().total,
        tags: controller.vocabulary().iter().map(str::to_string).collect(),
        rows: controller.visible().posts.iter().map(build_row).collect(),
    }
}

fn build_row(post: &Post) -> PostRowViewModel {
    PostRowViewModel {
        id: post.id,
        title: post.title.clone(),
        body: post.body.clone(),
        tags: post.tags.clone(),
    }
}
