pub mod aggregate;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use errors::TrackerError;
pub use state::AppState;
pub use store::WorkoutStore;
