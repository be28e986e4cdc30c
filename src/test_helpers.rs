use std::sync::Arc;

use axum::Router;

use crate::{config::AppConfig, routes::router, state::AppState, store::TodoStore};

pub fn test_state() -> Arc<AppState> {
    let cfg = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "info".to_string(),
        seed_demo: false,
    };
    AppState::new(cfg, TodoStore::new())
}

pub fn test_router() -> Router {
    router(test_state())
}
