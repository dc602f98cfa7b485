use axum::{extract::State, Json};

use crate::models::ActivityMap;
use crate::services::activities_service;
use crate::web::state::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(state.repo.as_ref()).await)
}
