use crate::models::{DashboardResponse, TypeShare, WorkoutRecord};
use chrono::NaiveDate;

const CHART_HEIGHT_PX: f64 = 250.0;
const CHART_BASE_PX: f64 = 20.0;
const CHART_MIN_SCALE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Deleted,
    GoalsUpdated,
    Invalid,
}

impl Notice {
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "added" => Some(Self::Added),
            "deleted" => Some(Self::Deleted),
            "goals" => Some(Self::GoalsUpdated),
            "invalid" => Some(Self::Invalid),
            _ => None,
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::GoalsUpdated => "goals",
            Self::Invalid => "invalid",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Added => "Workout added successfully! 🎉",
            Self::Deleted => "Workout deleted! 🗑️",
            Self::GoalsUpdated => "Goals updated successfully! 🎯",
            Self::Invalid => "Please check your input and try again.",
        }
    }
}

pub fn render_index(dashboard: &DashboardResponse, workouts: &[WorkoutRecord], notice: Option<Notice>) -> String {
    let goals = &dashboard.goals;
    INDEX_HTML
        .replace("{{TODAY}}", &dashboard.today.to_string())
        .replace("{{TOTAL_WORKOUTS}}", &dashboard.totals.count.to_string())
        .replace("{{TOTAL_CALORIES}}", &dashboard.totals.total_calories.to_string())
        .replace("{{AVG_DURATION}}", &dashboard.totals.avg_duration_minutes.to_string())
        .replace("{{WORKOUT_GOAL}}", &goals.weekly_workout_target.to_string())
        .replace("{{CALORIE_GOAL}}", &goals.weekly_calorie_target.to_string())
        .replace("{{WORKOUT_PROGRESS}}", &format!("{:.1}", dashboard.progress.workout_ratio))
        .replace("{{CALORIE_PROGRESS}}", &format!("{:.1}", dashboard.progress.calorie_ratio))
        .replace("{{WEEKLY_BARS}}", &render_weekly_bars(dashboard))
        .replace("{{TYPE_ROWS}}", &render_type_rows(&dashboard.types))
        .replace("{{WORKOUT_LIST}}", &render_workout_list(workouts))
        .replace("{{NOTICE}}", &render_notice(notice))
}

/// Bar heights in pixels, scaled against the busiest day or 100 calories,
/// whichever is larger.
pub fn weekly_bar_heights(series: &[u64]) -> Vec<f64> {
    let max = series.iter().copied().max().unwrap_or(0).max(CHART_MIN_SCALE) as f64;
    series
        .iter()
        .map(|&calories| calories as f64 / max * CHART_HEIGHT_PX + CHART_BASE_PX)
        .collect()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // keeps labels from being read as template placeholders
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_weekly_bars(dashboard: &DashboardResponse) -> String {
    let days = &dashboard.this_week.daily_calories;
    let series: Vec<u64> = days.iter().map(|d| d.calories).collect();
    days.iter()
        .zip(weekly_bar_heights(&series))
        .map(|(day, height)| {
            format!(
                r#"<div class="bar-slot"><div class="chart-bar" style="height: {height:.0}px" title="{name}: {calories} calories"></div><span>{short}</span></div>"#,
                name = day.day,
                calories = day.calories,
                short = &day.day[..3],
            )
        })
        .collect()
}

fn render_type_rows(types: &[TypeShare]) -> String {
    if types.is_empty() {
        return r#"<p class="empty">No data available yet. Start tracking workouts to see your activity breakdown!</p>"#
            .to_string();
    }
    types
        .iter()
        .map(|share| {
            format!(
                r#"<div class="type-row"><span>{name}</span><div class="type-meter"><div class="meter"><div class="meter-fill" style="width: {pct:.1}%"></div></div><span class="muted">{count} ({pct:.1}%)</span></div></div>"#,
                name = escape_html(&share.workout_type),
                pct = share.percentage,
                count = share.count,
            )
        })
        .collect()
}

fn render_workout_list(workouts: &[WorkoutRecord]) -> String {
    if workouts.is_empty() {
        return r#"<p class="empty">No workouts recorded yet. Add your first workout above!</p>"#.to_string();
    }
    workouts
        .iter()
        .map(|workout| {
            format!(
                r#"<div class="workout-item"><div><h3>{name}</h3><div class="details"><span>📅 {date}</span><span>⏱️ {duration} min</span><span>🔥 {calories} cal</span></div></div><form method="post" action="/workouts/{id}/delete"><button class="delete-btn" type="submit">Delete</button></form></div>"#,
                name = escape_html(&workout.workout_type),
                date = format_date(workout.date),
                duration = workout.duration_minutes,
                calories = workout.calories,
                id = workout.id,
            )
        })
        .collect()
}

fn render_notice(notice: Option<Notice>) -> String {
    match notice {
        Some(notice) => format!(
            r#"<div id="notice" class="notice {kind}">{message}</div>"#,
            kind = notice.as_query(),
            message = notice.message(),
        ),
        None => String::new(),
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Workout Tracker</title>
  <style>
    :root {
      --bg: #eef0fb;
      --ink: #25233a;
      --muted: #6b6880;
      --accent: #667eea;
      --accent-2: #764ba2;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(60, 58, 110, 0.14);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 32px 16px 48px;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 { color: white; text-align: center; margin: 0; font-size: clamp(2rem, 4vw, 2.6rem); }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .card h2 { margin: 0; font-size: 1.3rem; }

    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
    .stat { text-align: center; }
    .stat .value { display: block; font-size: 2rem; font-weight: 700; color: var(--accent); }
    .stat .label { color: var(--muted); text-transform: uppercase; font-size: 0.8rem; letter-spacing: 0.1em; }

    form.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; align-items: end; }
    label { display: grid; gap: 6px; font-size: 0.9rem; color: var(--muted); }
    input { padding: 10px 12px; border-radius: 10px; border: 1px solid #d6d4e6; font-size: 1rem; }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: linear-gradient(45deg, var(--accent), var(--accent-2));
    }

    .progress-row { display: grid; gap: 6px; }
    .meter { background: #e0e0e0; border-radius: 10px; height: 12px; overflow: hidden; flex: 1; }
    .meter-fill { background: linear-gradient(45deg, var(--accent), var(--accent-2)); height: 100%; transition: width 0.5s ease; }
    .progress-row .meter { height: 16px; }

    .chart { display: flex; align-items: flex-end; justify-content: space-between; gap: 8px; height: 300px; }
    .bar-slot { flex: 1; display: grid; gap: 6px; justify-items: center; align-content: end; color: var(--muted); font-size: 0.85rem; }
    .chart-bar { width: 100%; border-radius: 8px 8px 0 0; background: linear-gradient(180deg, var(--accent), var(--accent-2)); }

    .type-row { display: flex; justify-content: space-between; align-items: center; gap: 12px; }
    .type-meter { display: flex; align-items: center; gap: 10px; width: 60%; }
    .muted, .empty { color: var(--muted); }
    .empty { text-align: center; padding: 24px; }

    .workout-item { display: flex; justify-content: space-between; align-items: center; padding: 14px 0; border-bottom: 1px solid #ecebf3; }
    .workout-item h3 { margin: 0 0 6px; }
    .details { display: flex; flex-wrap: wrap; gap: 14px; color: var(--muted); font-size: 0.9rem; }
    .delete-btn { background: #ff5f6d; }

    .notice {
      position: fixed;
      top: 20px;
      right: 20px;
      padding: 14px 20px;
      border-radius: 10px;
      color: white;
      font-weight: 600;
      background: linear-gradient(45deg, #4facfe, #00f2fe);
      box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
    }
    .notice.invalid { background: linear-gradient(45deg, #ff5f6d, #ffc371); }
  </style>
</head>
<body>
  {{NOTICE}}
  <main>
    <h1>Workout Tracker</h1>

    <section class="card stats">
      <div class="stat"><span class="value" id="totalWorkouts">{{TOTAL_WORKOUTS}}</span><span class="label">Total workouts</span></div>
      <div class="stat"><span class="value" id="totalCalories">{{TOTAL_CALORIES}}</span><span class="label">Calories burned</span></div>
      <div class="stat"><span class="value" id="avgDuration">{{AVG_DURATION}}</span><span class="label">Avg minutes</span></div>
    </section>

    <section class="card">
      <h2>Log a workout</h2>
      <form class="grid" method="post" action="/workouts">
        <label>Type
          <input name="type" list="workoutTypes" required />
          <datalist id="workoutTypes">
            <option value="Running"></option>
            <option value="Cycling"></option>
            <option value="Swimming"></option>
            <option value="Weight Training"></option>
            <option value="Yoga"></option>
            <option value="Walking"></option>
          </datalist>
        </label>
        <label>Duration (min)<input name="duration_minutes" type="number" min="0" required /></label>
        <label>Calories<input name="calories" type="number" min="0" required /></label>
        <label>Date<input name="date" type="date" value="{{TODAY}}" required /></label>
        <button type="submit">Add workout</button>
      </form>
    </section>

    <section class="card">
      <h2>Weekly goals</h2>
      <div class="progress-row">
        <span>Workouts: goal {{WORKOUT_GOAL}} ({{WORKOUT_PROGRESS}}%)</span>
        <div class="meter"><div class="meter-fill" id="workoutProgress" style="width: {{WORKOUT_PROGRESS}}%"></div></div>
      </div>
      <div class="progress-row">
        <span>Calories: goal {{CALORIE_GOAL}} ({{CALORIE_PROGRESS}}%)</span>
        <div class="meter"><div class="meter-fill" id="calorieProgress" style="width: {{CALORIE_PROGRESS}}%"></div></div>
      </div>
      <form class="grid" method="post" action="/goals">
        <label>Workouts per week<input name="weekly_workout_target" type="number" min="1" value="{{WORKOUT_GOAL}}" required /></label>
        <label>Calories per week<input name="weekly_calorie_target" type="number" min="1" value="{{CALORIE_GOAL}}" required /></label>
        <button type="submit">Set goals</button>
      </form>
    </section>

    <section class="card">
      <h2>Calories this week</h2>
      <div class="chart" id="weeklyChart">{{WEEKLY_BARS}}</div>
    </section>

    <section class="card">
      <h2>Workout types</h2>
      <div id="workoutTypesChart">{{TYPE_ROWS}}</div>
    </section>

    <section class="card">
      <h2>Recent workouts</h2>
      <div id="workoutsList">{{WORKOUT_LIST}}</div>
    </section>
  </main>
  <script>
    const notice = document.getElementById('notice');
    if (notice) {
      setTimeout(() => notice.remove(), 3000);
      history.replaceState(null, '', '/');
    }
  </script>
</body>
</html>
"#;
