//! Sharded in-memory result store.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::debug;

use super::ranking::top_records;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::traits::{ResultStore, SubmitOutcome};
use crate::types::{LevelId, ResultRecord, UserId};

/// In-memory implementation of [`ResultStore`].
///
/// Both indexes are sharded concurrent maps. A submit holds the user's shard
/// for its whole check-and-update and touches the level index only while
/// holding it, so the lock order is always user index then level index.
/// Readers hold a single shard at a time and copy records out before ranking.
///
/// Thread-safe but not persistent across process restarts.
#[derive(Debug)]
pub struct InMemoryResultStore {
    /// user -> level -> best record
    by_user: DashMap<UserId, HashMap<LevelId, ResultRecord>>,
    /// level -> user -> best record
    by_level: DashMap<LevelId, HashMap<UserId, ResultRecord>>,
    results_limit: usize,
}

/// Number of records held by each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    pub by_user: usize,
    pub by_level: usize,
}

impl InMemoryResultStore {
    /// Create a new empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a new empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            by_user: DashMap::new(),
            by_level: DashMap::new(),
            results_limit: config.results_limit.max(1),
        }
    }

    /// Maximum number of records returned by a query.
    pub fn results_limit(&self) -> usize {
        self.results_limit
    }

    /// Count records in both indexes (for testing/debugging).
    ///
    /// The counts are only guaranteed to match while no submit is in flight.
    pub fn record_counts(&self) -> RecordCounts {
        RecordCounts {
            by_user: self.by_user.iter().map(|levels| levels.len()).sum(),
            by_level: self.by_level.iter().map(|users| users.len()).sum(),
        }
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore for InMemoryResultStore {
    fn submit(&self, user_id: UserId, level_id: LevelId, result: u32) -> Result<SubmitOutcome> {
        // Held until both indexes are updated: same-key writers serialize here.
        let mut user_levels = self.by_user.entry(user_id).or_default();

        let outcome = match user_levels.get(&level_id) {
            Some(existing) if !existing.is_beaten_by(result) => {
                return Ok(SubmitOutcome::Unchanged {
                    best: existing.result,
                });
            }
            Some(existing) => SubmitOutcome::Improved {
                previous: existing.result,
            },
            None => SubmitOutcome::Inserted,
        };

        let record = ResultRecord::new(user_id, level_id, result);
        self.by_level
            .entry(level_id)
            .or_default()
            .insert(user_id, record);
        user_levels.insert(level_id, record);

        debug!(
            user = %user_id,
            level = %level_id,
            result,
            ?outcome,
            "stored result"
        );

        Ok(outcome)
    }

    fn user_results(&self, user_id: UserId) -> Result<Vec<ResultRecord>> {
        let records: Vec<ResultRecord> = match self.by_user.get(&user_id) {
            Some(levels) if !levels.is_empty() => levels.values().copied().collect(),
            _ => {
                debug!(user = %user_id, "no results for user");
                return Err(StoreError::UserNotFound(user_id));
            }
        };

        Ok(top_records(records, self.results_limit, |r| r.level_id))
    }

    fn level_results(&self, level_id: LevelId) -> Result<Vec<ResultRecord>> {
        let records: Vec<ResultRecord> = match self.by_level.get(&level_id) {
            Some(users) if !users.is_empty() => users.values().copied().collect(),
            _ => {
                debug!(level = %level_id, "no results for level");
                return Err(StoreError::LevelNotFound(level_id));
            }
        };

        Ok(top_records(records, self.results_limit, |r| r.user_id))
    }

    fn name(&self) -> &'static str {
        "InMemoryResultStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: u32, level: u32, result: u32) -> ResultRecord {
        ResultRecord::new(UserId(user), LevelId(level), result)
    }

    #[test]
    fn test_submit_outcomes() {
        let store = InMemoryResultStore::new();

        assert_eq!(
            store.submit(UserId(1), LevelId(1), 30).unwrap(),
            SubmitOutcome::Inserted
        );
        assert_eq!(
            store.submit(UserId(1), LevelId(1), 55).unwrap(),
            SubmitOutcome::Improved { previous: 30 }
        );
        assert_eq!(
            store.submit(UserId(1), LevelId(1), 55).unwrap(),
            SubmitOutcome::Unchanged { best: 55 }
        );
        assert_eq!(
            store.submit(UserId(1), LevelId(1), 10).unwrap(),
            SubmitOutcome::Unchanged { best: 55 }
        );
    }

    #[test]
    fn test_improvement_replaces_record_in_both_indexes() {
        let store = InMemoryResultStore::new();
        store.submit(UserId(3), LevelId(4), 10).unwrap();
        store.submit(UserId(3), LevelId(4), 12).unwrap();

        assert_eq!(store.user_results(UserId(3)).unwrap(), vec![record(3, 4, 12)]);
        assert_eq!(store.level_results(LevelId(4)).unwrap(), vec![record(3, 4, 12)]);
        assert_eq!(
            store.record_counts(),
            RecordCounts {
                by_user: 1,
                by_level: 1
            }
        );
    }

    #[test]
    fn test_zero_result_is_stored() {
        let store = InMemoryResultStore::new();
        store.submit(UserId(1), LevelId(1), 0).unwrap();

        assert_eq!(store.user_results(UserId(1)).unwrap(), vec![record(1, 1, 0)]);
    }

    #[test]
    fn test_unknown_keys_are_not_found() {
        let store = InMemoryResultStore::new();
        store.submit(UserId(1), LevelId(1), 5).unwrap();

        assert_eq!(
            store.user_results(UserId(2)),
            Err(StoreError::UserNotFound(UserId(2)))
        );
        assert_eq!(
            store.level_results(LevelId(2)),
            Err(StoreError::LevelNotFound(LevelId(2)))
        );
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let store = InMemoryResultStore::with_config(StoreConfig { results_limit: 0 });
        store.submit(UserId(1), LevelId(1), 5).unwrap();
        store.submit(UserId(1), LevelId(2), 7).unwrap();

        assert_eq!(store.results_limit(), 1);
        assert_eq!(store.user_results(UserId(1)).unwrap(), vec![record(1, 2, 7)]);
    }
}
