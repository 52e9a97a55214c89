//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env). Inserts are guarded by count checks,
//! so re-running against a populated database is a no-op.

use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== fitmetrics Seed Script ===");

    seed_participants(&pool).await?;
    seed_exercises(&pool).await?;
    seed_workouts(&pool).await?;
    seed_workout_sessions(&pool).await?;
    seed_nutrition_intake(&pool).await?;
    seed_exercise_performance(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn seed_participants(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dim_participant")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Participants already exist ({count})");
        return Ok(());
    }

    for i in 0..40i64 {
        let age = 20 + (i * 3) % 55;
        let gender = if i % 2 == 0 { "Male" } else { "Female" };
        let weight_kg = 55.0 + (i * 7 % 45) as f64;
        let fat_percentage = 12.0 + (i * 5 % 23) as f64;

        sqlx::query(
            "INSERT INTO dim_participant (age, gender, weight_kg, fat_percentage)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(age as i32)
        .bind(gender)
        .bind(weight_kg)
        .bind(fat_percentage)
        .execute(pool)
        .await?;
    }

    println!("[done] Created 40 participants");
    Ok(())
}

async fn seed_exercises(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dim_exercise")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Exercises already exist ({count})");
        return Ok(());
    }

    let names = [
        "Bench Press",
        "Deadlift",
        "Squat",
        "Pull Up",
        "Overhead Press",
        "Rowing",
        "Burpees",
        "Lunges",
        "Plank",
        "Kettlebell Swing",
    ];
    for name in names {
        sqlx::query("INSERT INTO dim_exercise (exercise_name) VALUES ($1)")
            .bind(name)
            .execute(pool)
            .await?;
    }

    println!("[done] Created {} exercises", names.len());
    Ok(())
}

async fn seed_workouts(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dim_workout")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Workouts already exist ({count})");
        return Ok(());
    }

    let types = ["Cardio", "Strength", "HIIT", "Yoga", "CrossFit"];
    for workout_type in types {
        sqlx::query("INSERT INTO dim_workout (workout_type) VALUES ($1)")
            .bind(workout_type)
            .execute(pool)
            .await?;
    }

    println!("[done] Created {} workout types", types.len());
    Ok(())
}

async fn seed_workout_sessions(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fact_workout_session")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Workout sessions already exist ({count})");
        return Ok(());
    }

    let participant_ids: Vec<i64> =
        sqlx::query_scalar("SELECT participant_id FROM dim_participant ORDER BY participant_id")
            .fetch_all(pool)
            .await?;
    let workout_ids: Vec<i64> =
        sqlx::query_scalar("SELECT workout_id FROM dim_workout ORDER BY workout_id")
            .fetch_all(pool)
            .await?;

    let mut inserted = 0;
    for (i, participant_id) in participant_ids.iter().enumerate() {
        for session in 0..3usize {
            let k = (i + session) as i64;
            let workout_id = workout_ids[(i + session) % workout_ids.len()];
            let duration = 0.5 + (k % 4) as f64 * 0.5;
            let calories = 180.0 + (k * 37 % 420) as f64;
            let frequency = 2.0 + (k % 5) as f64;
            let resting_bpm = 56 + (k % 22) as i32;
            let max_bpm = 150 + (k % 40) as i32;
            let water = 1.2 + (k % 5) as f64 * 0.5;

            sqlx::query(
                "INSERT INTO fact_workout_session
                    (participant_id, workout_id, session_duration_hr, calories_burned,
                     workout_frequency, max_bpm, resting_bpm, water_intake_l)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(participant_id)
            .bind(workout_id)
            .bind(duration)
            .bind(calories)
            .bind(frequency)
            .bind(max_bpm)
            .bind(resting_bpm)
            .bind(water)
            .execute(pool)
            .await?;
            inserted += 1;
        }
    }

    println!("[done] Created {inserted} workout sessions");
    Ok(())
}

async fn seed_nutrition_intake(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fact_nutrition_intake")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Nutrition intake already exists ({count})");
        return Ok(());
    }

    let participant_ids: Vec<i64> =
        sqlx::query_scalar("SELECT participant_id FROM dim_participant ORDER BY participant_id")
            .fetch_all(pool)
            .await?;

    let mut inserted = 0;
    for (i, participant_id) in participant_ids.iter().enumerate() {
        for day in 0..3usize {
            let k = (i + day) as i64;
            let protein = 45.0 + (k * 11 % 120) as f64;
            let carbs = 120.0 + (k * 23 % 220) as f64;
            let fats = 35.0 + (k * 13 % 60) as f64;
            let sugar = 20.0 + (k * 17 % 65) as f64;
            let cholesterol = 150.0 + (k * 29 % 220) as f64;

            sqlx::query(
                "INSERT INTO fact_nutrition_intake
                    (participant_id, protein_g, carbs_g, fats_g, sugar_g, cholesterol_mg)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(participant_id)
            .bind(protein)
            .bind(carbs)
            .bind(fats)
            .bind(sugar)
            .bind(cholesterol)
            .execute(pool)
            .await?;
            inserted += 1;
        }
    }

    println!("[done] Created {inserted} nutrition intake records");
    Ok(())
}

async fn seed_exercise_performance(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fact_exercise_performance")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Exercise performance already exists ({count})");
        return Ok(());
    }

    let participant_ids: Vec<i64> =
        sqlx::query_scalar("SELECT participant_id FROM dim_participant ORDER BY participant_id")
            .fetch_all(pool)
            .await?;
    let exercise_ids: Vec<i64> =
        sqlx::query_scalar("SELECT exercise_id FROM dim_exercise ORDER BY exercise_id")
            .fetch_all(pool)
            .await?;

    let mut inserted = 0;
    for (i, participant_id) in participant_ids.iter().enumerate() {
        for rep in 0..4usize {
            let k = (i + rep) as i64;
            let exercise_id = exercise_ids[(i * 3 + rep) % exercise_ids.len()];
            let sets = 2 + (k % 4) as i32;
            let burns = 50.0 + (k * 19 % 140) as f64;

            sqlx::query(
                "INSERT INTO fact_exercise_performance
                    (participant_id, exercise_id, sets, burns_calories)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(participant_id)
            .bind(exercise_id)
            .bind(sets)
            .bind(burns)
            .execute(pool)
            .await?;
            inserted += 1;
        }
    }

    println!("[done] Created {inserted} exercise performance rows");
    Ok(())
}
