//! Store contract shared by the in-memory implementation and its decorators.

use crate::error::Result;
use crate::types::{LevelId, ResultRecord, UserId};

/// What a submission did to the stored state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First result for this (user, level) pair.
    Inserted,
    /// The new result beat the stored one, which it replaced.
    Improved { previous: u32 },
    /// The stored result was at least as good; nothing changed.
    Unchanged { best: u32 },
}

impl SubmitOutcome {
    /// Returns true if the submission changed stored state.
    pub const fn is_stored(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// Best-result store with per-user and per-level views.
///
/// Implementations keep one record per (user, level) pair holding the best
/// result ever submitted for it, and expose that record identically through
/// both views. All methods may be called concurrently from any thread.
pub trait ResultStore: Send + Sync {
    /// Record a result, keeping it only if it beats the stored one.
    ///
    /// Callers guarantee `user_id >= 1`, `level_id >= 1`.
    fn submit(&self, user_id: UserId, level_id: LevelId, result: u32) -> Result<SubmitOutcome>;

    /// Best results of a user across levels.
    ///
    /// Sorted by result descending, then level descending, and truncated to
    /// the configured limit. Fails with `UserNotFound` if the user never
    /// submitted anything.
    fn user_results(&self, user_id: UserId) -> Result<Vec<ResultRecord>>;

    /// Leaderboard of a level.
    ///
    /// Sorted by result descending, then user descending, and truncated to
    /// the configured limit. Fails with `LevelNotFound` if nobody ever
    /// submitted a result for the level.
    fn level_results(&self, level_id: LevelId) -> Result<Vec<ResultRecord>>;

    /// Short name used when logging store operations.
    fn name(&self) -> &'static str;
}
