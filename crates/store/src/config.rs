//! Store configuration and its environment loader.
use std::env;

/// Operational parameters of a result store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Maximum number of records returned by a single user or level query.
    pub results_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { results_limit: 20 }
    }
}

impl StoreConfig {
    /// Create a configuration; a zero limit is raised to 1.
    pub fn new(results_limit: usize) -> Self {
        Self {
            results_limit: results_limit.max(1),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TOP_RESULTS_LIMIT` - Maximum records per query (default: 20, minimum: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(limit) = read_env::<usize>("TOP_RESULTS_LIMIT") {
            config.results_limit = limit.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
