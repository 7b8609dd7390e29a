use crate::aggregate::{
    WEEKDAY_NAMES, current_week_window, daily_calorie_series, this_week_records, totals, type_distribution,
};
use crate::models::{DashboardResponse, DayCalories, WeeklySummary};
use crate::progress::weekly_progress;
use crate::store::WorkoutStore;
use chrono::{Local, NaiveDateTime};

pub fn build_dashboard(store: &WorkoutStore) -> DashboardResponse {
    build_dashboard_at(Local::now().naive_local(), store)
}

pub fn build_dashboard_at(now: NaiveDateTime, store: &WorkoutStore) -> DashboardResponse {
    let workouts = store.list();
    let goals = store.goals();
    let window = current_week_window(now);

    let series = daily_calorie_series(workouts, now);
    let week_calories = series.iter().sum();

    let daily_calories = series
        .into_iter()
        .zip(WEEKDAY_NAMES)
        .map(|(calories, day)| DayCalories { day, calories })
        .collect();

    DashboardResponse {
        today: now.date(),
        totals: totals(workouts),
        goals,
        progress: weekly_progress(workouts, &goals, now),
        this_week: WeeklySummary {
            week_start: window.first_day(),
            week_end: window.last_day(),
            workouts: this_week_records(workouts, now).len(),
            calories: week_calories,
            daily_calories,
        },
        types: type_distribution(workouts),
    }
}
