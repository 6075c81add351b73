//! Identifiers and the immutable result record shared by both indexes.
use std::fmt;

/// Identifier of a player submitting results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub u32);

/// Identifier of a numbered level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LevelId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u32> for LevelId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Best result of one user on one level.
///
/// Records are never mutated: a better submission replaces the record in
/// both indexes with a freshly constructed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRecord {
    pub user_id: UserId,
    pub level_id: LevelId,
    pub result: u32,
}

impl ResultRecord {
    pub const fn new(user_id: UserId, level_id: LevelId, result: u32) -> Self {
        Self {
            user_id,
            level_id,
            result,
        }
    }

    /// Returns true if `result` would replace this record.
    #[inline]
    pub const fn is_beaten_by(&self, result: u32) -> bool {
        result > self.result
    }
}
