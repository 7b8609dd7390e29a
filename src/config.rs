use crate::models::GoalConfig;
use std::{env, net::SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub initial_goals: GoalConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `PORT`, `WORKOUT_GOAL_SESSIONS` and `WORKOUT_GOAL_CALORIES`.
    /// Unusable values are logged and replaced by the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT value {value:?}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let defaults = GoalConfig::default();
        let sessions = lookup("WORKOUT_GOAL_SESSIONS");
        let calories = lookup("WORKOUT_GOAL_CALORIES");
        let initial_goals = if sessions.is_none() && calories.is_none() {
            defaults
        } else {
            let workouts = parse_or(sessions, i64::from(defaults.weekly_workout_target.get()));
            let calories = parse_or(calories, i64::from(defaults.weekly_calorie_target.get()));
            GoalConfig::new(workouts, calories).unwrap_or_else(|err| {
                warn!("ignoring configured goals: {err}");
                defaults
            })
        };

        Self { port, initial_goals }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or(value: Option<String>, fallback: i64) -> i64 {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring non-numeric goal value {raw:?}");
            fallback
        }),
        None => fallback,
    }
}
