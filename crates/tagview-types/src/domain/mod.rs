mod page;
mod post;
mod view_state;

pub use page::VisiblePage;
pub use post::{Post, PostsResponse, TagVocabulary};
pub use view_state::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ViewState};
