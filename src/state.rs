use crate::models::GoalConfig;
use crate::store::WorkoutStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<WorkoutStore>>,
}

impl AppState {
    pub fn new(goals: GoalConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(WorkoutStore::new(goals))),
        }
    }
}
