use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::database::activity_repo::StoreError;
use crate::models::ErrorDetail;
use crate::services::activities_service::SignupError;

fn detail_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorDetail { detail })).into_response()
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::AlreadyRegistered { .. } | StoreError::CapacityExceeded { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        detail_response(status, self.detail())
    }
}

/// Malformed query strings (e.g. no `email`) are rejected before the store is touched.
pub fn query_rejection(rejection: QueryRejection) -> Response {
    tracing::debug!(error = %rejection, "query rejected");
    detail_response(StatusCode::BAD_REQUEST, rejection.body_text())
}
