use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::GoalForm;
use super::repo;
use super::repo_types::Goal;
use super::services;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/goals", get(list_goals))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", post(create_goal))
        .route("/goals/:id", put(update_goal).delete(delete_goal))
}

/// GET /goals — every tracked goal in load order.
#[instrument(skip(state))]
pub async fn list_goals(State(state): State<AppState>) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = repo::list_all(&state.db).await?;
    Ok(Json(goals))
}

/// POST /goals — validate, then persist.
#[instrument(skip(state, form))]
pub async fn create_goal(
    State(state): State<AppState>,
    Json(form): Json<GoalForm>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    let fields = services::validate_goal_form(&form)?;
    let goal = repo::insert(&state.db, &fields).await?;
    info!(id = goal.id, title = %goal.title, "goal added");
    Ok((StatusCode::CREATED, Json(goal)))
}

/// PUT /goals/:id — replace every field, including the completed flag.
#[instrument(skip(state, form))]
pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<GoalForm>,
) -> Result<Json<Goal>, ApiError> {
    let fields = services::validate_goal_form(&form)?;
    let goal = repo::update(&state.db, id, &fields)
        .await?
        .ok_or(ApiError::NotFound("goal"))?;
    info!(id = goal.id, "goal updated");
    Ok(Json(goal))
}

/// DELETE /goals/:id — like the food catalog, deleting an id that is
/// already gone reports success.
#[instrument(skip(state))]
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = repo::delete(&state.db, id).await?;
    if deleted {
        info!(id, "goal deleted");
    } else {
        warn!(id, "goal already absent");
    }
    Ok(StatusCode::NO_CONTENT)
}
