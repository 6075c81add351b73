//! HTTP front end for the best-result store.
//!
//! The binary in `main.rs` is the composition root; this library exposes the
//! pieces it assembles so integration tests can build the same application.
pub mod api;
pub mod config;
pub mod logging;

use std::sync::Arc;

use results_store::{InMemoryResultStore, ResultStore, TimedResultStore};

pub use config::ServerConfig;

/// Build the shared store described by `config`.
pub fn build_store(config: &ServerConfig) -> Arc<dyn ResultStore> {
    let store = InMemoryResultStore::with_config(config.store.clone());

    if config.enable_store_timing {
        Arc::new(TimedResultStore::new(store))
    } else {
        Arc::new(store)
    }
}
