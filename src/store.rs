use crate::errors::TrackerError;
use crate::models::{GoalConfig, GoalDraft, WorkoutDraft, WorkoutId, WorkoutRecord};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

/// Owns the session's workouts (newest first) and the weekly goals.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    workouts: Vec<WorkoutRecord>,
    goals: GoalConfig,
    last_id: Option<WorkoutId>,
}

impl WorkoutStore {
    pub fn new(goals: GoalConfig) -> Self {
        Self {
            workouts: Vec::new(),
            goals,
            last_id: None,
        }
    }

    pub fn add(&mut self, draft: WorkoutDraft) -> Result<&[WorkoutRecord], TrackerError> {
        self.add_at(draft, Utc::now())
    }

    /// Parses `draft` and prepends it. The id is derived from `created_at`
    /// in milliseconds and is always greater than every id handed out before.
    pub fn add_at(
        &mut self,
        draft: WorkoutDraft,
        created_at: DateTime<Utc>,
    ) -> Result<&[WorkoutRecord], TrackerError> {
        let id = self.next_id(created_at);
        let record = parse_record(id, draft)?;

        info!(
            id = record.id.0,
            workout_type = %record.workout_type,
            date = %record.date,
            "workout recorded"
        );
        self.last_id = Some(id);
        self.workouts.insert(0, record);
        Ok(&self.workouts)
    }

    pub fn remove(&mut self, id: WorkoutId) -> &[WorkoutRecord] {
        let before = self.workouts.len();
        self.workouts.retain(|workout| workout.id != id);
        if self.workouts.len() == before {
            debug!(id = id.0, "no workout to remove");
        } else {
            info!(id = id.0, "workout removed");
        }
        &self.workouts
    }

    pub fn list(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub fn goals(&self) -> GoalConfig {
        self.goals
    }

    pub fn set_goals(&mut self, draft: GoalDraft) -> Result<(), TrackerError> {
        let workouts = parse_goal_field("weekly workout target", &draft.weekly_workout_target)?;
        let calories = parse_goal_field("weekly calorie target", &draft.weekly_calorie_target)?;
        self.goals = GoalConfig::new(workouts, calories)?;
        info!(workouts, calories, "weekly goals updated");
        Ok(())
    }

    fn next_id(&self, created_at: DateTime<Utc>) -> WorkoutId {
        let stamp = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
        match self.last_id {
            Some(WorkoutId(last)) if stamp <= last => WorkoutId(last + 1),
            _ => WorkoutId(stamp),
        }
    }
}

fn parse_record(id: WorkoutId, draft: WorkoutDraft) -> Result<WorkoutRecord, TrackerError> {
    let duration_minutes = parse_amount("duration", &draft.duration_minutes)?;
    let calories = parse_amount("calories", &draft.calories)?;
    let date = NaiveDate::parse_from_str(draft.date.trim(), "%Y-%m-%d").map_err(|err| {
        TrackerError::InvalidRecord(format!("date '{}' is not YYYY-MM-DD: {err}", draft.date))
    })?;

    Ok(WorkoutRecord {
        id,
        workout_type: draft.workout_type.trim().to_string(),
        duration_minutes,
        calories,
        date,
    })
}

fn parse_amount(field: &str, raw: &str) -> Result<u32, TrackerError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidRecord(format!("{field} '{raw}' is not a whole number")))?;
    if value < 0 {
        return Err(TrackerError::InvalidRecord(format!("{field} must not be negative")));
    }
    u32::try_from(value).map_err(|_| TrackerError::InvalidRecord(format!("{field} {value} is too large")))
}

fn parse_goal_field(field: &str, raw: &str) -> Result<i64, TrackerError> {
    raw.trim()
        .parse()
        .map_err(|_| TrackerError::InvalidGoal(format!("{field} '{raw}' is not a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(workout_type: &str, duration: &str, calories: &str, date: &str) -> WorkoutDraft {
        WorkoutDraft {
            workout_type: workout_type.to_string(),
            duration_minutes: duration.to_string(),
            calories: calories.to_string(),
            date: date.to_string(),
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn add_prepends_parsed_record() {
        let mut store = WorkoutStore::default();
        store.add_at(draft("Cycling", "45", "400", "2026-10-14"), at(1_000)).unwrap();
        let list = store
            .add_at(draft("Running", "30", "300", "2026-10-16"), at(2_000))
            .unwrap();

        assert_eq!(list.len(), 2);
        let newest = &list[0];
        assert_eq!(newest.id, WorkoutId(2_000));
        assert_eq!(newest.workout_type, "Running");
        assert_eq!(newest.duration_minutes, 30);
        assert_eq!(newest.calories, 300);
        assert_eq!(newest.date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(store.list()[1].workout_type, "Cycling");
    }

    #[test]
    fn ids_stay_unique_when_clock_repeats_or_goes_back() {
        let mut store = WorkoutStore::default();
        store.add_at(draft("Yoga", "20", "80", "2026-10-16"), at(5_000)).unwrap();
        store.add_at(draft("Yoga", "20", "80", "2026-10-16"), at(5_000)).unwrap();
        store.add_at(draft("Yoga", "20", "80", "2026-10-16"), at(4_000)).unwrap();

        let ids: Vec<u64> = store.list().iter().map(|w| w.id.0).collect();
        assert_eq!(ids, vec![5_002, 5_001, 5_000]);
    }

    #[test]
    fn add_rejects_malformed_fields() {
        let mut store = WorkoutStore::default();
        let cases = [
            draft("Running", "-5", "300", "2026-10-16"),
            draft("Running", "30", "-1", "2026-10-16"),
            draft("Running", "abc", "300", "2026-10-16"),
            draft("Running", "30", "", "2026-10-16"),
            draft("Running", "30", "300", "16/10/2026"),
            draft("Running", "30", "300", "2026-02-30"),
        ];
        for case in cases {
            let err = store.add(case).unwrap_err();
            assert!(matches!(err, TrackerError::InvalidRecord(_)), "{err}");
        }
        assert!(store.list().is_empty());
    }

    #[test]
    fn add_accepts_zero_amounts_and_padded_input() {
        let mut store = WorkoutStore::default();
        let list = store.add(draft(" Walking ", " 0 ", "0", " 2026-10-16 ")).unwrap();
        assert_eq!(list[0].workout_type, "Walking");
        assert_eq!(list[0].duration_minutes, 0);
        assert_eq!(list[0].calories, 0);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = WorkoutStore::default();
        store.add_at(draft("Running", "30", "300", "2026-10-16"), at(1)).unwrap();
        store.add_at(draft("Swimming", "40", "350", "2026-10-15"), at(2)).unwrap();

        let remaining = store.remove(WorkoutId(1));
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|w| w.id != WorkoutId(1)));

        let snapshot = store.list().to_vec();
        assert_eq!(store.remove(WorkoutId(1)), snapshot.as_slice());
        assert_eq!(store.remove(WorkoutId(99)), snapshot.as_slice());
    }

    #[test]
    fn set_goals_replaces_config() {
        let mut store = WorkoutStore::default();
        store
            .set_goals(GoalDraft {
                weekly_workout_target: "5".to_string(),
                weekly_calorie_target: "2500".to_string(),
            })
            .unwrap();
        assert_eq!(store.goals(), GoalConfig::new(5, 2500).unwrap());
    }

    #[test]
    fn set_goals_rejects_non_positive_and_keeps_previous() {
        let mut store = WorkoutStore::default();
        for (workouts, calories) in [("0", "1500"), ("3", "-200"), ("three", "1500")] {
            let err = store
                .set_goals(GoalDraft {
                    weekly_workout_target: workouts.to_string(),
                    weekly_calorie_target: calories.to_string(),
                })
                .unwrap_err();
            assert!(matches!(err, TrackerError::InvalidGoal(_)));
        }
        assert_eq!(store.goals(), GoalConfig::default());
    }
}
