//! Filter parameter resolution shared by all filtered KPI reports.

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;

/// Default age range when the caller omits one or both ends. Either end must
/// fall within the accepted [18, 100] window.
pub const DEFAULT_AGE_MIN: i32 = 18;
pub const DEFAULT_AGE_MAX: i32 = 65;

/// Default result limit, further capped per report.
const DEFAULT_LIMIT: i64 = 25;

/// Maximum result limit a caller may request.
const MAX_LIMIT: i64 = 100;

/// Raw filter query parameters as sent by the dashboard.
///
/// `genders` and `workout_types` arrive as repeated query keys
/// (`genders=Male&genders=Female`), which `axum_extra::extract::Query`
/// collects into vectors.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct KpiFilterParams {
    #[validate(range(min = 18, max = 100))]
    pub age_min: Option<i32>,
    #[validate(range(min = 18, max = 100))]
    pub age_max: Option<i32>,
    pub genders: Option<Vec<String>>,
    pub workout_types: Option<Vec<String>>,
    pub limit: Option<i64>,
}

/// Canonical filter bundle consumed by the KPI query engine.
///
/// Produced only by [`KpiFilterParams::resolve`], so every report sees
/// validated ages and defaulted sets. All set-valued members are bound as
/// Postgres arrays, never interpolated into query text.
#[derive(Debug, Clone)]
pub struct KpiFilters {
    pub age_min: i32,
    pub age_max: i32,
    pub genders: Vec<String>,
    pub workout_types: Vec<String>,
    limit: i64,
}

impl KpiFilterParams {
    /// Validate and normalize into the canonical bundle.
    ///
    /// Out-of-range ages and an inverted range are rejected before any query
    /// runs. Omitted parameters take their documented defaults; an explicitly
    /// empty gender set is kept as-is and will match nothing.
    pub fn resolve(self) -> Result<KpiFilters, AppError> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let age_min = self.age_min.unwrap_or(DEFAULT_AGE_MIN);
        let age_max = self.age_max.unwrap_or(DEFAULT_AGE_MAX);
        if age_min > age_max {
            return Err(AppError::Validation(format!(
                "age_min ({age_min}) must not exceed age_max ({age_max})"
            )));
        }

        Ok(KpiFilters {
            age_min,
            age_max,
            genders: self
                .genders
                .unwrap_or_else(|| vec!["Male".to_string(), "Female".to_string()]),
            workout_types: self.workout_types.unwrap_or_default(),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        })
    }
}

impl KpiFilters {
    /// Effective row limit for a report with the given fixed cap.
    ///
    /// The caller-supplied limit can lower a report's cap but never raise it.
    pub fn limit(&self, report_cap: i64) -> i64 {
        self.limit.min(report_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_omitted() {
        let filters = KpiFilterParams::default().resolve().unwrap();
        assert_eq!(filters.age_min, 18);
        assert_eq!(filters.age_max, 65);
        assert_eq!(filters.genders, vec!["Male", "Female"]);
        assert!(filters.workout_types.is_empty());
        assert_eq!(filters.limit(25), 25);
    }

    #[test]
    fn rejects_age_below_lower_bound() {
        let params = KpiFilterParams {
            age_min: Some(12),
            ..Default::default()
        };
        assert!(matches!(
            params.resolve(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_age_above_upper_bound() {
        let params = KpiFilterParams {
            age_max: Some(130),
            ..Default::default()
        };
        assert!(matches!(
            params.resolve(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let params = KpiFilterParams {
            age_min: Some(60),
            age_max: Some(30),
            ..Default::default()
        };
        let err = params.resolve().unwrap_err();
        assert!(err.to_string().contains("age_min"));
    }

    #[test]
    fn accepts_boundary_ages() {
        let params = KpiFilterParams {
            age_min: Some(18),
            age_max: Some(100),
            ..Default::default()
        };
        let filters = params.resolve().unwrap();
        assert_eq!((filters.age_min, filters.age_max), (18, 100));
    }

    #[test]
    fn explicit_empty_gender_set_is_preserved() {
        let params = KpiFilterParams {
            genders: Some(vec![]),
            ..Default::default()
        };
        let filters = params.resolve().unwrap();
        assert!(filters.genders.is_empty());
    }

    #[test]
    fn limit_is_clamped_and_capped() {
        let params = KpiFilterParams {
            limit: Some(500),
            ..Default::default()
        };
        let filters = params.resolve().unwrap();
        assert_eq!(filters.limit(30), 30);

        let params = KpiFilterParams {
            limit: Some(10),
            ..Default::default()
        };
        let filters = params.resolve().unwrap();
        assert_eq!(filters.limit(30), 10);
    }
}
