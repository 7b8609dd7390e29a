use crate::errors::AppError;
use crate::models::{
    DashboardResponse, GoalConfig, GoalDraft, WorkoutDraft, WorkoutId, WorkoutListResponse, WorkoutRecord,
};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::{Notice, render_index};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub notice: Option<String>,
}

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let notice = query.notice.as_deref().and_then(Notice::from_query);
    let store = state.store.lock().await;
    let dashboard = build_dashboard(&store);
    Html(render_index(&dashboard, store.list(), notice))
}

pub async fn list_workouts(State(state): State<AppState>) -> Json<WorkoutListResponse> {
    let store = state.store.lock().await;
    Json(to_list(store.list()))
}

pub async fn create_workout(
    State(state): State<AppState>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<(StatusCode, Json<WorkoutListResponse>), AppError> {
    let mut store = state.store.lock().await;
    let workouts = store.add(draft).inspect_err(|err| warn!("rejected workout: {err}"))?;
    Ok((StatusCode::CREATED, Json(to_list(workouts))))
}

pub async fn delete_workout(State(state): State<AppState>, Path(id): Path<u64>) -> Json<WorkoutListResponse> {
    let mut store = state.store.lock().await;
    Json(to_list(store.remove(WorkoutId(id))))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<DashboardResponse> {
    let store = state.store.lock().await;
    Json(build_dashboard(&store))
}

pub async fn get_goals(State(state): State<AppState>) -> Json<GoalConfig> {
    let store = state.store.lock().await;
    Json(store.goals())
}

pub async fn update_goals(
    State(state): State<AppState>,
    Json(draft): Json<GoalDraft>,
) -> Result<Json<GoalConfig>, AppError> {
    let mut store = state.store.lock().await;
    store.set_goals(draft).inspect_err(|err| warn!("rejected goals: {err}"))?;
    Ok(Json(store.goals()))
}

pub async fn submit_workout(State(state): State<AppState>, Form(draft): Form<WorkoutDraft>) -> Redirect {
    let mut store = state.store.lock().await;
    match store.add(draft) {
        Ok(_) => redirect_with(Notice::Added),
        Err(err) => {
            warn!("rejected workout form: {err}");
            redirect_with(Notice::Invalid)
        }
    }
}

pub async fn submit_delete(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    let mut store = state.store.lock().await;
    store.remove(WorkoutId(id));
    redirect_with(Notice::Deleted)
}

pub async fn submit_goals(State(state): State<AppState>, Form(draft): Form<GoalDraft>) -> Redirect {
    let mut store = state.store.lock().await;
    match store.set_goals(draft) {
        Ok(()) => redirect_with(Notice::GoalsUpdated),
        Err(err) => {
            warn!("rejected goals form: {err}");
            redirect_with(Notice::Invalid)
        }
    }
}

fn redirect_with(notice: Notice) -> Redirect {
    Redirect::to(&format!("/?notice={}", notice.as_query()))
}

fn to_list(workouts: &[WorkoutRecord]) -> WorkoutListResponse {
    WorkoutListResponse {
        workouts: workouts.to_vec(),
    }
}
