pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod location;

pub use config::{Config, resolve_data_dir};
pub use controller::{PAGE_SIZE_OPTIONS, Phase, ViewController};
pub use debounce::{DEFAULT_DEBOUNCE, SearchDebouncer};
pub use error::{Error, Result};
pub use fetch::spawn_initial_fetch;
pub use location::{LocationSink, MemoryLocation};
