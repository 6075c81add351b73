//! Concurrent best-result store for per-user and per-level leaderboards.
//!
//! Every submission is a `(user, level, result)` triple. The store keeps, for
//! each (user, level) pair, the best result ever submitted and exposes it
//! through two views:
//! - [`ResultStore::user_results`]: one user's results across all levels
//! - [`ResultStore::level_results`]: one level's leaderboard across all users
//!
//! Modules are organized by responsibility:
//! - [`types`] holds identifiers and the immutable [`ResultRecord`]
//! - [`traits`] defines the [`ResultStore`] contract
//! - [`memory`] provides the sharded in-memory implementation
//! - [`timed`] provides the execution-time logging decorator
pub mod config;
pub mod error;
pub mod memory;
pub mod timed;
pub mod traits;
pub mod types;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use memory::{InMemoryResultStore, RecordCounts};
pub use timed::TimedResultStore;
pub use traits::{ResultStore, SubmitOutcome};
pub use types::{LevelId, ResultRecord, UserId};
