//! Execution-time logging around any [`ResultStore`].
//!
//! The decorator sits between the request layer and the store and logs one
//! `info` event per operation. It adds no behavior of its own: results and
//! errors from the wrapped store are passed through unchanged.

use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::traits::{ResultStore, SubmitOutcome};
use crate::types::{LevelId, ResultRecord, UserId};

/// Store decorator that logs how long each operation took.
#[derive(Debug)]
pub struct TimedResultStore<S> {
    inner: S,
}

impl<S: ResultStore> TimedResultStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the decorator.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn timed<T>(&self, operation: &'static str, call: impl FnOnce(&S) -> T) -> T {
        let started = Instant::now();
        let output = call(&self.inner);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;

        info!(
            "Execution time of {}.{} : {} ms",
            self.inner.name(),
            operation,
            elapsed_ms
        );

        output
    }
}

impl<S: ResultStore> ResultStore for TimedResultStore<S> {
    fn submit(&self, user_id: UserId, level_id: LevelId, result: u32) -> Result<SubmitOutcome> {
        self.timed("submit", |store| store.submit(user_id, level_id, result))
    }

    fn user_results(&self, user_id: UserId) -> Result<Vec<ResultRecord>> {
        self.timed("user_results", |store| store.user_results(user_id))
    }

    fn level_results(&self, level_id: LevelId) -> Result<Vec<ResultRecord>> {
        self.timed("level_results", |store| store.level_results(level_id))
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryResultStore;
    use crate::error::StoreError;

    #[test]
    fn test_passes_results_through() {
        let store = TimedResultStore::new(InMemoryResultStore::new());

        assert_eq!(
            store.submit(UserId(1), LevelId(1), 55).unwrap(),
            SubmitOutcome::Inserted
        );
        assert_eq!(
            store.user_results(UserId(1)).unwrap(),
            vec![ResultRecord::new(UserId(1), LevelId(1), 55)]
        );
        assert_eq!(
            store.level_results(LevelId(2)),
            Err(StoreError::LevelNotFound(LevelId(2)))
        );
        assert_eq!(store.name(), "InMemoryResultStore");
    }

    #[test]
    fn test_inner_sees_writes_made_through_decorator() {
        let store = TimedResultStore::new(InMemoryResultStore::new());
        store.submit(UserId(2), LevelId(3), 4).unwrap();

        let inner = store.into_inner();
        assert_eq!(inner.record_counts().by_user, 1);
    }
}
