//! Testing infrastructure for tagview tests.
//!
//! - `fixtures`: post batches and response payloads
//! - `sources`: in-memory `PostSource` implementations
//! - `stub_server`: one-shot HTTP server for exercising the real client

pub mod fixtures;
pub mod sources;
pub mod stub_server;

pub use sources::{FailingSource, StaticSource};
pub use stub_server::StubServer;
