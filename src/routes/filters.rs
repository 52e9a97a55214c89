//! Filter metadata routes: option lists for the dashboard's filter controls.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::models::kpi::AgeRange;
use crate::services::filters;
use crate::AppState;

/// GET /api/filters/age-range — observed participant age bounds.
pub async fn age_range(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AgeRange>>, AppError> {
    let range = filters::age_range(&state.db).await?;
    Ok(ApiResponse::success(range))
}

/// GET /api/filters/genders — distinct gender labels.
pub async fn genders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let labels = filters::genders(&state.db).await?;
    Ok(ApiResponse::success(labels))
}

/// GET /api/filters/workout-types — distinct workout-type labels.
pub async fn workout_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let labels = filters::workout_types(&state.db).await?;
    Ok(ApiResponse::success(labels))
}
