//! Error types of the HTTP layer and their JSON rendering.
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use results_store::StoreError;

use super::models::ErrorDetails;

/// Errors raised while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Lookup or update rejected by the store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Path user ID outside the range any submission can carry.
    #[error("Oops! There are no results for the specified user ID: {0}")]
    UnknownUser(i64),

    /// Path level ID outside the range any submission can carry.
    #[error("Oops! There are no results for the specified level ID: {0}")]
    UnknownLevel(i64),

    /// Request body failed field validation.
    #[error("[{}]", .0.join(", "))]
    Validation(Vec<String>),

    /// Request could not be parsed (malformed JSON, bad path segment).
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Attach the request path, producing a renderable response error.
    pub fn at(self, req: &HttpRequest) -> RequestError {
        RequestError {
            error: self,
            path: req.path().to_string(),
        }
    }
}

/// An [`ApiError`] together with the path of the request that raised it.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct RequestError {
    error: ApiError,
    path: String,
}

impl RequestError {
    pub fn error(&self) -> &ApiError {
        &self.error
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self.error {
            ApiError::Store(_)
            | ApiError::UnknownUser(_)
            | ApiError::UnknownLevel(_)
            | ApiError::Validation(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.error.to_string();
        tracing::error!("An error occurred! Message: {}", message);

        HttpResponse::build(self.status_code()).json(ErrorDetails::new(message, &self.path))
    }
}
