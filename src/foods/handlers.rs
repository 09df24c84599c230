use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{CatalogFilter, FoodForm};
use super::repo;
use super::repo_types::FoodRecord;
use super::services;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/foods", get(list_foods))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", post(create_food))
        .route("/foods/:id", put(update_food).delete(delete_food))
}

/// GET /foods — load the catalog and apply the search/category/calorie
/// filter. Without parameters this returns the whole catalog in load
/// order; clients re-issue the request on every filter change.
#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> Result<Json<Vec<FoodRecord>>, ApiError> {
    let catalog = repo::list_all(&state.db).await?;
    let visible: Vec<FoodRecord> = services::filter_catalog(&catalog, &filter)
        .cloned()
        .collect();
    Ok(Json(visible))
}

/// POST /foods — validate the form, then persist. Validation failures
/// never reach storage.
#[instrument(skip(state, form))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(form): Json<FoodForm>,
) -> Result<(StatusCode, Json<FoodRecord>), ApiError> {
    let fields = services::validate_food_form(&form)?;
    let record = repo::insert(&state.db, &fields).await?;
    info!(id = record.id, name = %record.name, "food item added");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /foods/:id — same validation as create; every field but the id is
/// replaced. An id that vanished in the meantime is reported as not found.
#[instrument(skip(state, form))]
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<FoodForm>,
) -> Result<Json<FoodRecord>, ApiError> {
    let fields = services::validate_food_form(&form)?;
    let record = repo::update(&state.db, id, &fields)
        .await?
        .ok_or(ApiError::NotFound("food item"))?;
    info!(id = record.id, "food item updated");
    Ok(Json(record))
}

/// DELETE /foods/:id — deleting an id that is already gone still reports
/// success; clients re-derive ids from a fresh load, so absence is not a
/// user-visible error.
#[instrument(skip(state))]
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = repo::delete(&state.db, id).await?;
    if deleted {
        info!(id, "food item deleted");
    } else {
        warn!(id, "food item already absent");
    }
    Ok(StatusCode::NO_CONTENT)
}
