use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use chrono::{Duration, Utc};
use tower_http::trace::TraceLayer;

use todo_server::{
    config::AppConfig,
    logging::init_tracing,
    routes::router,
    state::AppState,
    store::{TodoDraft, TodoStore},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.log_level);

    let store = TodoStore::new();
    if cfg.seed_demo {
        seed_demo_todos(&store)?;
    }

    let state = AppState::new(cfg.clone(), store);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .context("invalid host/port")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn seed_demo_todos(store: &TodoStore) -> anyhow::Result<()> {
    if !store.is_empty() {
        return Ok(());
    }
    let today = Utc::now().date_naive();

    let overdue = store.create(TodoDraft {
        title: "one title".to_string(),
        body: "one body".to_string(),
        due_date: Some(today - Duration::days(1)),
    })?;
    store.advance(overdue.id)?;

    store.create(TodoDraft {
        title: "two title".to_string(),
        body: "two body".to_string(),
        due_date: None,
    })?;

    let finished = store.create(TodoDraft {
        title: "three title".to_string(),
        body: "three body".to_string(),
        due_date: None,
    })?;
    store.advance(finished.id)?;
    store.advance(finished.id)?;

    store.create(TodoDraft {
        title: "four title".to_string(),
        body: "four body".to_string(),
        due_date: Some(today + Duration::days(5)),
    })?;

    tracing::info!("seeded {} demo todos", store.list().len());
    Ok(())
}
