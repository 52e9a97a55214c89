//! Filter metadata queries backing the dashboard's filter controls.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::filters::{DEFAULT_AGE_MAX, DEFAULT_AGE_MIN};
use crate::models::kpi::AgeRange;

/// Intermediate row: MIN/MAX are NULL over an empty participant table.
#[derive(Debug, sqlx::FromRow)]
struct AgeRangeRow {
    min_age: Option<i32>,
    max_age: Option<i32>,
}

/// Observed participant age range, falling back to the default bounds on an
/// empty table so the range slider always has endpoints.
pub async fn age_range(pool: &PgPool) -> Result<AgeRange, AppError> {
    let row = sqlx::query_as::<_, AgeRangeRow>(
        "SELECT MIN(age) AS min_age, MAX(age) AS max_age FROM dim_participant",
    )
    .fetch_one(pool)
    .await?;

    Ok(AgeRange {
        min_age: row.min_age.unwrap_or(DEFAULT_AGE_MIN),
        max_age: row.max_age.unwrap_or(DEFAULT_AGE_MAX),
    })
}

/// Distinct gender labels, sorted for stable output.
pub async fn genders(pool: &PgPool) -> Result<Vec<String>, AppError> {
    let labels = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT gender FROM dim_participant ORDER BY gender",
    )
    .fetch_all(pool)
    .await?;
    Ok(labels)
}

/// Distinct workout-type labels, sorted for stable output.
pub async fn workout_types(pool: &PgPool) -> Result<Vec<String>, AppError> {
    let labels = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT workout_type FROM dim_workout ORDER BY workout_type",
    )
    .fetch_all(pool)
    .await?;
    Ok(labels)
}
