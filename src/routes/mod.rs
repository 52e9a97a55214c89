//! Route definitions for the fitness analytics API.

pub mod filters;
pub mod health;
pub mod kpi;

use axum::routing::get;
use axum::Router;

use crate::AppState;

/// Assemble the full route tree.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api/kpi/fitness-scores", get(kpi::fitness_scores))
        .route(
            "/api/kpi/exercise-effectiveness",
            get(kpi::exercise_effectiveness),
        )
        .route("/api/kpi/nutrition-body", get(kpi::nutrition_body))
        .route(
            "/api/kpi/workout-performance",
            get(kpi::workout_performance),
        )
        .route("/api/kpi/lifestyle-balance", get(kpi::lifestyle_balance))
        .route("/api/kpi/dashboard-summary", get(kpi::dashboard_summary))
        .route("/api/filters/age-range", get(filters::age_range))
        .route("/api/filters/genders", get(filters::genders))
        .route("/api/filters/workout-types", get(filters::workout_types))
}
