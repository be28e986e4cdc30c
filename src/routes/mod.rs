use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod public;
pub mod todos;
pub mod views;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(todos::router(state.clone()))
        .merge(views::router(state))
}
