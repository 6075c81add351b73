//! Request handlers for the result endpoints.
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use results_store::{LevelId, ResultStore, UserId};
use tracing::debug;

use super::errors::{ApiError, RequestError};
use super::models::SetResultRequest;

/// Shared store handle registered as application data.
pub type SharedStore = web::Data<Arc<dyn ResultStore>>;

/// `GET /userinfo/{user_id}`: the user's best results, best first.
pub async fn get_user_info(
    req: HttpRequest,
    store: SharedStore,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, RequestError> {
    let raw = user_id.into_inner();
    let user_id = u32::try_from(raw)
        .map(UserId)
        .map_err(|_| ApiError::UnknownUser(raw).at(&req))?;

    let records = store
        .user_results(user_id)
        .map_err(|e| ApiError::from(e).at(&req))?;

    Ok(HttpResponse::Ok().json(records))
}

/// `GET /levelinfo/{level_id}`: the level's leaderboard, best first.
pub async fn get_level_info(
    req: HttpRequest,
    store: SharedStore,
    level_id: web::Path<i64>,
) -> Result<HttpResponse, RequestError> {
    let raw = level_id.into_inner();
    let level_id = u32::try_from(raw)
        .map(LevelId)
        .map_err(|_| ApiError::UnknownLevel(raw).at(&req))?;

    let records = store
        .level_results(level_id)
        .map_err(|e| ApiError::from(e).at(&req))?;

    Ok(HttpResponse::Ok().json(records))
}

/// `PUT /setinfo`: submit a result; lower-or-equal results are ignored.
pub async fn set_info(
    req: HttpRequest,
    store: SharedStore,
    body: web::Json<SetResultRequest>,
) -> Result<HttpResponse, RequestError> {
    let submission = body
        .validate()
        .map_err(|violations| ApiError::Validation(violations).at(&req))?;

    let outcome = store
        .submit(submission.user_id, submission.level_id, submission.result)
        .map_err(|e| ApiError::from(e).at(&req))?;

    debug!(
        user = %submission.user_id,
        level = %submission.level_id,
        ?outcome,
        "submission handled"
    );

    Ok(HttpResponse::Ok().finish())
}
