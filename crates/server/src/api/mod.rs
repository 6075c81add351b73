//! HTTP API for the result store.
//!
//! Routes:
//! - GET /userinfo/{user_id} - Best results of one user
//! - GET /levelinfo/{level_id} - Leaderboard of one level
//! - PUT /setinfo - Submit a result
//!
//! Every failure, including extractor failures, is answered with HTTP 400
//! and an [`ErrorDetails`] body.
pub mod errors;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use actix_web::{HttpRequest, web};
use results_store::ResultStore;

pub use errors::{ApiError, RequestError};
pub use models::{ErrorDetails, SetResultRequest, Submission};

/// Register routes, shared store and extractor error handlers.
pub fn configure_routes(store: Arc<dyn ResultStore>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(store))
            .app_data(web::JsonConfig::default().error_handler(|err, req| bad_request(err, req)))
            .app_data(web::PathConfig::default().error_handler(|err, req| bad_request(err, req)))
            .route("/userinfo/{user_id}", web::get().to(handlers::get_user_info))
            .route("/levelinfo/{level_id}", web::get().to(handlers::get_level_info))
            .route("/setinfo", web::put().to(handlers::set_info));
    }
}

fn bad_request(err: impl std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).at(req).into()
}
