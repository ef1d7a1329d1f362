// Error types
pub mod error;

// Source abstraction and the gateway boundary
pub mod source;

// Remote HTTP implementation
pub mod http;

pub use error::{Error, Result};
pub use http::{DEFAULT_ENDPOINT, HttpPostSource, POST_LIMIT};
pub use source::{PostSource, load_posts};
