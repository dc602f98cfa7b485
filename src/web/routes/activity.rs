use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::services::activities_service;
use crate::web::error::query_rejection;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

// `activity_name` arrives percent-decoded and is matched against stored names as-is.
#[tracing::instrument(skip(state, query))]
pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return query_rejection(rejection),
    };

    match activities_service::signup_for_activity(
        state.repo.as_ref(),
        state.capacity,
        &activity_name,
        &query.email,
    )
    .await
    {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}
