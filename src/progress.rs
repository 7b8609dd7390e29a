use crate::aggregate::this_week_records;
use crate::models::{GoalConfig, ProgressRatios, WorkoutRecord};
use chrono::NaiveDateTime;
use std::num::NonZeroU32;

/// Percent of each weekly target reached, capped at 100. Values are left
/// unrounded for the renderer to format.
pub fn progress_ratios(weekly_count: usize, weekly_calories: u64, goals: &GoalConfig) -> ProgressRatios {
    ProgressRatios {
        workout_ratio: capped_percent(weekly_count as f64, goals.weekly_workout_target),
        calorie_ratio: capped_percent(weekly_calories as f64, goals.weekly_calorie_target),
    }
}

pub fn weekly_progress(workouts: &[WorkoutRecord], goals: &GoalConfig, now: NaiveDateTime) -> ProgressRatios {
    let week = this_week_records(workouts, now);
    let calories = week.iter().map(|w| u64::from(w.calories)).sum();
    progress_ratios(week.len(), calories, goals)
}

fn capped_percent(actual: f64, target: NonZeroU32) -> f64 {
    (actual / f64::from(target.get()) * 100.0).min(100.0)
}
