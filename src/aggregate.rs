//! Pure aggregations over a workout snapshot.
//!
//! Week computations take the reference instant as an argument so callers
//! decide what "now" means; nothing here reads the clock.

use crate::models::{Totals, TypeShare, WeekWindow, WorkoutRecord};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn totals(workouts: &[WorkoutRecord]) -> Totals {
    let count = workouts.len();
    let total_calories = workouts.iter().map(|w| u64::from(w.calories)).sum();
    let total_duration: u64 = workouts.iter().map(|w| u64::from(w.duration_minutes)).sum();

    Totals {
        count,
        total_calories,
        avg_duration_minutes: rounded_div(total_duration, count as u64),
    }
}

/// The week containing `now`, starting Sunday 00:00:00 (inclusive) and
/// ending seven days later (exclusive).
pub fn current_week_window(now: NaiveDateTime) -> WeekWindow {
    let today = now.date();
    let sunday = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let start = sunday.and_time(NaiveTime::MIN);

    WeekWindow {
        start,
        end: start + Duration::days(7),
    }
}

impl WeekWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let midnight = date.and_time(NaiveTime::MIN);
        self.start <= midnight && midnight < self.end
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        (self.end - Duration::days(1)).date()
    }
}

pub fn this_week_records(workouts: &[WorkoutRecord], now: NaiveDateTime) -> Vec<&WorkoutRecord> {
    let window = current_week_window(now);
    workouts.iter().filter(|w| window.contains(w.date)).collect()
}

/// Calories per weekday of the current week, Sunday first.
pub fn daily_calorie_series(workouts: &[WorkoutRecord], now: NaiveDateTime) -> [u64; 7] {
    let mut series = [0u64; 7];
    for workout in this_week_records(workouts, now) {
        let day = workout.date.weekday().num_days_from_sunday() as usize;
        series[day] += u64::from(workout.calories);
    }
    series
}

/// Share of each workout type, most frequent first. Types with equal counts
/// keep the order in which they first appear in `workouts`.
///
/// Percentages have one decimal and always add up to exactly 100.0: every
/// share is floored to tenths and the leftover tenths go to the shares with
/// the largest remainders.
pub fn type_distribution(workouts: &[WorkoutRecord]) -> Vec<TypeShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for workout in workouts {
        match counts.iter().position(|(name, _)| *name == workout.workout_type) {
            Some(index) => counts[index].1 += 1,
            None => counts.push((workout.workout_type.as_str(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let tenths = apportion_tenths(&counts, workouts.len() as u64);
    counts
        .into_iter()
        .zip(tenths)
        .map(|((name, count), tenths)| TypeShare {
            workout_type: name.to_string(),
            count,
            percentage: tenths as f64 / 10.0,
        })
        .collect()
}

// Largest-remainder split of 1000 tenths of a percent. Equal remainders favour
// the earlier entry.
fn apportion_tenths(counts: &[(&str, usize)], total: u64) -> Vec<u64> {
    const WHOLE: u64 = 1000;

    let mut shares: Vec<(u64, u64)> = counts
        .iter()
        .map(|&(_, count)| {
            let scaled = count as u64 * WHOLE;
            (scaled / total, scaled % total)
        })
        .collect();

    let assigned: u64 = shares.iter().map(|(floor, _)| floor).sum();
    let mut by_remainder: Vec<usize> = (0..shares.len()).collect();
    by_remainder.sort_by(|&a, &b| shares[b].1.cmp(&shares[a].1));
    for &index in by_remainder.iter().take((WHOLE - assigned) as usize) {
        shares[index].0 += 1;
    }

    shares.into_iter().map(|(floor, _)| floor).collect()
}

// Integer division rounding half up; zero when the divisor is zero.
fn rounded_div(numerator: u64, divisor: u64) -> u64 {
    if divisor == 0 {
        return 0;
    }
    (numerator * 2 + divisor) / (divisor * 2)
}
