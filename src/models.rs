use crate::errors::TrackerError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, num::NonZeroU32};

const DEFAULT_WEEKLY_WORKOUTS: NonZeroU32 = NonZeroU32::new(3).unwrap();
const DEFAULT_WEEKLY_CALORIES: NonZeroU32 = NonZeroU32::new(1500).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub u64);

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged exercise session. Records are never edited once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: WorkoutId,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration_minutes: u32,
    pub calories: u32,
    pub date: NaiveDate,
}

/// Weekly targets. Both are strictly positive, which keeps ratio math total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalConfig {
    pub weekly_workout_target: NonZeroU32,
    pub weekly_calorie_target: NonZeroU32,
}

impl GoalConfig {
    pub fn new(workouts: i64, calories: i64) -> Result<Self, TrackerError> {
        Ok(Self {
            weekly_workout_target: positive_target("weekly workout target", workouts)?,
            weekly_calorie_target: positive_target("weekly calorie target", calories)?,
        })
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            weekly_workout_target: DEFAULT_WEEKLY_WORKOUTS,
            weekly_calorie_target: DEFAULT_WEEKLY_CALORIES,
        }
    }
}

fn positive_target(name: &str, value: i64) -> Result<NonZeroU32, TrackerError> {
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| TrackerError::InvalidGoal(format!("{name} must be a positive integer, got {value}")))
}

/// Raw workout input as it arrives from a form or JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutDraft {
    #[serde(rename = "type")]
    pub workout_type: String,
    #[serde(deserialize_with = "text_or_number")]
    pub duration_minutes: String,
    #[serde(deserialize_with = "text_or_number")]
    pub calories: String,
    pub date: String,
}

/// Raw goal input as it arrives from a form or JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalDraft {
    #[serde(deserialize_with = "text_or_number")]
    pub weekly_workout_target: String,
    #[serde(deserialize_with = "text_or_number")]
    pub weekly_calorie_target: String,
}

// Forms deliver strings, JSON clients usually send numbers. Both end up as text
// so that parsing happens in one place.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Totals {
    pub count: usize,
    pub total_calories: u64,
    pub avg_duration_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressRatios {
    pub workout_ratio: f64,
    pub calorie_ratio: f64,
}

/// Half-open interval `[start, end)` covering one Sunday-to-Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct DayCalories {
    pub day: &'static str,
    pub calories: u64,
}

#[derive(Debug, Serialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub workouts: usize,
    pub calories: u64,
    pub daily_calories: Vec<DayCalories>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub today: NaiveDate,
    pub totals: Totals,
    pub goals: GoalConfig,
    pub progress: ProgressRatios,
    pub this_week: WeeklySummary,
    pub types: Vec<TypeShare>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutListResponse {
    pub workouts: Vec<WorkoutRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_config_rejects_non_positive_targets() {
        assert!(matches!(GoalConfig::new(0, 1500), Err(TrackerError::InvalidGoal(_))));
        assert!(matches!(GoalConfig::new(3, -10), Err(TrackerError::InvalidGoal(_))));
        assert!(matches!(
            GoalConfig::new(i64::from(u32::MAX) + 1, 1500),
            Err(TrackerError::InvalidGoal(_))
        ));

        let goals = GoalConfig::new(4, 2000).expect("valid goals");
        assert_eq!(goals.weekly_workout_target.get(), 4);
        assert_eq!(goals.weekly_calorie_target.get(), 2000);
    }

    #[test]
    fn default_goals_match_initial_targets() {
        let goals = GoalConfig::default();
        assert_eq!(goals.weekly_workout_target.get(), 3);
        assert_eq!(goals.weekly_calorie_target.get(), 1500);
    }

    #[test]
    fn draft_accepts_numbers_and_strings() {
        let draft: WorkoutDraft = serde_json::from_value(serde_json::json!({
            "type": "Running",
            "duration_minutes": 30,
            "calories": "300",
            "date": "2026-10-16"
        }))
        .expect("draft");
        assert_eq!(draft.duration_minutes, "30");
        assert_eq!(draft.calories, "300");
    }

    #[test]
    fn record_serializes_type_field() {
        let record = WorkoutRecord {
            id: WorkoutId(7),
            workout_type: "Yoga".to_string(),
            duration_minutes: 45,
            calories: 150,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Yoga");
        assert_eq!(value["id"], 7);
        assert_eq!(value["date"], "2026-10-16");
    }
}
