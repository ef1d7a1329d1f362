// Engine module - pure view derivation (no I/O, no clocks)
// Every function here is recomputed from the full batch; nothing is cached.

pub mod codec;
pub mod filter;
pub mod tags;

pub use codec::{decode, encode};
pub use filter::{compute_visible_page, filter_posts, page_count, paginate};
pub use tags::extract_tags;
