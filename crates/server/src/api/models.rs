//! Request and response bodies of the HTTP API.
use chrono::{DateTime, Utc};
use results_store::{LevelId, UserId};
use serde::{Deserialize, Serialize};

/// Body of `PUT /setinfo`.
///
/// Fields are wide and optional so that missing or out-of-range values reach
/// [`SetResultRequest::validate`] instead of failing deserialization.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SetResultRequest {
    pub user_id: Option<i64>,
    pub level_id: Option<i64>,
    pub result: Option<i64>,
}

/// A submission that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub user_id: UserId,
    pub level_id: LevelId,
    pub result: u32,
}

impl SetResultRequest {
    /// Check every field and collect one message per violation, in field order.
    pub fn validate(&self) -> Result<Submission, Vec<String>> {
        let mut violations = Vec::new();

        let user_id = check_field("User ID", self.user_id, 1, &mut violations);
        let level_id = check_field("Level ID", self.level_id, 1, &mut violations);
        let result = check_field("Result", self.result, 0, &mut violations);

        match (user_id, level_id, result) {
            (Some(user_id), Some(level_id), Some(result)) if violations.is_empty() => {
                Ok(Submission {
                    user_id: UserId(user_id),
                    level_id: LevelId(level_id),
                    result,
                })
            }
            _ => Err(violations),
        }
    }
}

fn check_field(
    label: &str,
    value: Option<i64>,
    min: u32,
    violations: &mut Vec<String>,
) -> Option<u32> {
    let Some(value) = value else {
        violations.push(format!("{label} cannot be null"));
        return None;
    };

    if value < i64::from(min) {
        violations.push(format!("{label} must be greater than or equal to {min}"));
        return None;
    }

    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            violations.push(format!(
                "{label} must be less than or equal to {}",
                u32::MAX
            ));
            None
        }
    }
}

/// JSON body of every error response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    /// `uri=<request path>`
    pub details: String,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>, path: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            details: format!("uri={path}"),
        }
    }
}
