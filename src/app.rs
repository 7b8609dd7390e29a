use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/workouts", post(handlers::submit_workout))
        .route("/workouts/:id/delete", post(handlers::submit_delete))
        .route("/goals", post(handlers::submit_goals))
        .route("/api/workouts", get(handlers::list_workouts).post(handlers::create_workout))
        .route("/api/workouts/:id", delete(handlers::delete_workout))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/goals", get(handlers::get_goals).put(handlers::update_goals))
        .with_state(state)
}
