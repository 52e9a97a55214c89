//! Lifestyle balance index derivation.
//!
//! The lifestyle balance report is a two-stage pipeline: the store query
//! returns three integer sub-scores per participant (nutrition, exercise,
//! recovery — each a sum of fixed bucket awards), and this module applies the
//! composite arithmetic as a second pass over the returned rows.

/// Composite lifestyle balance index: the mean of the three sub-scores,
/// rounded to one decimal place.
pub fn index(nutrition_score: i32, exercise_score: i32, recovery_score: i32) -> f64 {
    let mean = f64::from(nutrition_score + exercise_score + recovery_score) / 3.0;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_mean_of_sub_scores() {
        assert_eq!(index(100, 100, 100), 100.0);
        assert_eq!(index(40, 40, 40), 40.0);
    }

    #[test]
    fn index_rounds_to_one_decimal() {
        // (70 + 100 + 70) / 3 = 80.0
        assert_eq!(index(70, 100, 70), 80.0);
        // (25 + 50 + 50) / 3 = 41.666... -> 41.7
        assert_eq!(index(25, 50, 50), 41.7);
        // (70 + 70 + 100) / 3 = 80.0, order does not matter
        assert_eq!(index(70, 70, 100), 80.0);
    }

    #[test]
    fn mixed_bucket_awards() {
        // Nutrition sub-score example: protein in range (25), sugar out (10),
        // cholesterol in range (25), carbs out (10) = 70. With both exercise
        // rules missed (40) and both recovery rules met (100):
        // (70 + 40 + 100) / 3 = 70.0
        assert_eq!(index(70, 40, 100), 70.0);
    }
}
