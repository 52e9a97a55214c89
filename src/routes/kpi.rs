//! KPI routes: the fixed catalog of analytical reports.

use axum::{extract::State, Json};
use axum_extra::extract::Query;

use crate::errors::{ApiResponse, AppError};
use crate::models::filters::KpiFilterParams;
use crate::models::kpi::{
    DashboardSummary, ExerciseEffectiveness, FitnessScore, LifestyleBalance,
    NutritionBodyComposition, WorkoutPerformance,
};
use crate::services::kpi;
use crate::AppState;

/// GET /api/kpi/fitness-scores — per-participant fitness efficiency scores.
pub async fn fitness_scores(
    State(state): State<AppState>,
    Query(params): Query<KpiFilterParams>,
) -> Result<Json<ApiResponse<Vec<FitnessScore>>>, AppError> {
    let filters = params.resolve()?;
    let rows = kpi::fitness_scores(&state.db, &filters).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/kpi/exercise-effectiveness — per-exercise effectiveness matrix.
pub async fn exercise_effectiveness(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ExerciseEffectiveness>>>, AppError> {
    let rows = kpi::exercise_effectiveness(&state.db).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/kpi/nutrition-body — nutrition averages and body composition.
pub async fn nutrition_body(
    State(state): State<AppState>,
    Query(params): Query<KpiFilterParams>,
) -> Result<Json<ApiResponse<Vec<NutritionBodyComposition>>>, AppError> {
    let filters = params.resolve()?;
    let rows = kpi::nutrition_body(&state.db, &filters).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/kpi/workout-performance — per-workout-type performance.
pub async fn workout_performance(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<WorkoutPerformance>>>, AppError> {
    let rows = kpi::workout_performance(&state.db).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/kpi/lifestyle-balance — bucketed sub-scores with composite index.
pub async fn lifestyle_balance(
    State(state): State<AppState>,
    Query(params): Query<KpiFilterParams>,
) -> Result<Json<ApiResponse<Vec<LifestyleBalance>>>, AppError> {
    let filters = params.resolve()?;
    let rows = kpi::lifestyle_balance(&state.db, &filters).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/kpi/dashboard-summary — header tiles. Never fails: errors are
/// replaced with the documented fallback payload inside the service.
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> Json<ApiResponse<DashboardSummary>> {
    ApiResponse::success(kpi::dashboard_summary(&state.db).await)
}
