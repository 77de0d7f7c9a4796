pub mod fit;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fit API
        .route("/api/v1/fit/templates", get(fit::handle_list_templates))
        .route("/api/v1/fit/settings", post(fit::handle_fit_settings))
        .route("/api/v1/fit/plan", post(fit::handle_render_plan))
        .route("/api/v1/fit/apply", post(fit::handle_apply))
        .route("/api/v1/fit/autofit", post(fit::handle_autofit))
        .with_state(state)
}
