use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/nutrition", get(handlers::get_nutrition))
        .route("/api/nutrition/food", post(handlers::add_food))
        .route("/api/nutrition/remove", post(handlers::remove_food))
        .route("/api/nutrition/reset", post(handlers::reset_nutrition))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/goals", post(handlers::update_goals))
        .route("/api/hydration", get(handlers::get_hydration).post(handlers::hydrate))
        .route("/api/hydration/reminders", get(handlers::get_reminders))
        .route("/api/sleep", get(handlers::get_sleep).post(handlers::add_sleep))
        .route("/api/sleep/reset", post(handlers::reset_sleep))
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route("/api/profile", get(handlers::get_profile).post(handlers::update_profile))
        .with_state(state)
}
