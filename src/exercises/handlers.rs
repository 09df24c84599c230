use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

use super::data::{self, Exercise, CATEGORIES};

#[derive(Debug, Deserialize)]
pub struct ExerciseFilter {
    #[serde(default)]
    pub category: Option<String>,
}

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercises/categories", get(list_categories))
}

/// GET /exercises — the built-in suggestion catalog, optionally narrowed
/// to one category.
#[instrument]
pub async fn list_exercises(Query(filter): Query<ExerciseFilter>) -> Json<Vec<Exercise>> {
    Json(data::suggestions_for(filter.category.as_deref()))
}

/// GET /exercises/categories — the category names in display order.
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(CATEGORIES.to_vec())
}
