//! Typed rows for the KPI report catalog.

use serde::Serialize;

/// Per-participant fitness efficiency score.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct FitnessScore {
    pub participant_id: i64,
    pub age: i32,
    pub gender: String,
    pub calorie_burn_rate: f64,
    pub avg_workout_frequency: f64,
    pub protein_efficiency: f64,
    pub fitness_score: f64,
}

/// Per-exercise effectiveness aggregates.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ExerciseEffectiveness {
    pub exercise_name: String,
    pub participant_count: i64,
    pub total_calories_burned: f64,
    pub calories_per_set: f64,
    pub avg_sets_per_session: f64,
}

/// Per-participant nutrition averages alongside body composition.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct NutritionBodyComposition {
    pub participant_id: i64,
    pub age: i32,
    pub gender: String,
    pub fat_percentage: f64,
    pub avg_daily_protein: f64,
    pub avg_daily_carbs: f64,
    pub avg_daily_fats: f64,
    pub avg_daily_sugar: f64,
    pub avg_daily_calories_burned: f64,
}

/// Per-workout-type performance aggregates.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct WorkoutPerformance {
    pub workout_type: String,
    pub unique_participants: i64,
    pub avg_duration_hr: f64,
    pub avg_calories_burned: f64,
    pub avg_burn_efficiency: f64,
    pub avg_heart_rate_zone: f64,
    pub avg_water_intake: f64,
}

/// Per-participant lifestyle balance with the derived composite index.
#[derive(Debug, Serialize)]
pub struct LifestyleBalance {
    pub participant_id: i64,
    pub age: i32,
    pub gender: String,
    pub nutrition_score: i32,
    pub exercise_score: i32,
    pub recovery_score: i32,
    pub lifestyle_balance_index: f64,
}

/// Aggregate-of-aggregates payload for the dashboard header.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub avg_fitness_score: f64,
    pub avg_burn_rate: f64,
    pub top_exercise: String,
    pub best_workout: String,
    pub avg_balance_index: f64,
    pub total_participants: i64,
    pub total_exercises: i64,
    pub total_workouts: i64,
}

impl DashboardSummary {
    /// Zero-filled payload served when any summary query fails.
    pub fn fallback() -> Self {
        Self {
            avg_fitness_score: 0.0,
            avg_burn_rate: 0.0,
            top_exercise: "N/A".to_string(),
            best_workout: "N/A".to_string(),
            avg_balance_index: 0.0,
            total_participants: 0,
            total_exercises: 0,
            total_workouts: 0,
        }
    }
}

/// Observed participant age range for the dashboard's filter controls.
#[derive(Debug, Serialize)]
pub struct AgeRange {
    pub min_age: i32,
    pub max_age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_summary_is_zero_filled() {
        let summary = DashboardSummary::fallback();
        assert_eq!(summary.avg_fitness_score, 0.0);
        assert_eq!(summary.avg_burn_rate, 0.0);
        assert_eq!(summary.top_exercise, "N/A");
        assert_eq!(summary.best_workout, "N/A");
        assert_eq!(summary.avg_balance_index, 0.0);
        assert_eq!(summary.total_participants, 0);
        assert_eq!(summary.total_exercises, 0);
        assert_eq!(summary.total_workouts, 0);
    }

    #[test]
    fn lifestyle_balance_serializes_all_fields() {
        let row = LifestyleBalance {
            participant_id: 7,
            age: 34,
            gender: "Female".to_string(),
            nutrition_score: 70,
            exercise_score: 100,
            recovery_score: 70,
            lifestyle_balance_index: 80.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["participant_id"], 7);
        assert_eq!(json["lifestyle_balance_index"], 80.0);
    }
}
