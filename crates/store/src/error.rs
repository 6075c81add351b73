//! Error types raised by result store implementations.

use thiserror::Error;

use crate::types::{LevelId, UserId};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by result store implementations.
///
/// Both variants describe a lookup for a key that has never been written.
/// They leave the store untouched and retrying without a prior submit fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Oops! There are no results for the specified user ID: {0}")]
    UserNotFound(UserId),

    #[error("Oops! There are no results for the specified level ID: {0}")]
    LevelNotFound(LevelId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            StoreError::UserNotFound(UserId(999)).to_string(),
            "Oops! There are no results for the specified user ID: 999"
        );
        assert_eq!(
            StoreError::LevelNotFound(LevelId(999)).to_string(),
            "Oops! There are no results for the specified level ID: 999"
        );
    }
}
