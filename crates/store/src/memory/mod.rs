//! In-memory result store implementation.

mod ranking;
mod store;

pub use store::{InMemoryResultStore, RecordCounts};
