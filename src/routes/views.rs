use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use tower_http::services::ServeDir;

use crate::{state::AppState, todo::Todo};

#[derive(Template)]
#[template(path = "todos.html")]
struct TodosTemplate {
    rows: Vec<TodoRow>,
    today: String,
}

struct TodoRow {
    title: String,
    body: String,
    status: &'static str,
    border_class: &'static str,
    due_label: String,
}

type HtmlError = (StatusCode, Html<String>);

pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
    Router::new()
        .route("/", get(todos_view))
        .nest_service("/public", ServeDir::new(public_dir))
        .with_state(state)
}

async fn todos_view(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    let today = Utc::now().date_naive();
    let rows = state
        .store
        .list()
        .iter()
        .map(|todo| TodoRow::build(todo, today))
        .collect();
    let rendered = TodosTemplate {
        rows,
        today: today.to_string(),
    }
    .render()
    .map_err(|_| {
        html_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to render todo list",
        )
    })?;
    Ok(Html(rendered))
}

impl TodoRow {
    fn build(todo: &Todo, today: NaiveDate) -> Self {
        let due_label = match todo.due_date {
            None => String::new(),
            Some(due) => {
                if let Some(days) = todo.days_to_due(today) {
                    if days == 1 {
                        "due tomorrow".to_string()
                    } else {
                        format!("due in {days} days")
                    }
                } else if todo.is_overtime(today) {
                    format!("overdue since {due}")
                } else {
                    "due today".to_string()
                }
            }
        };
        Self {
            title: todo.title.clone(),
            body: todo.body.clone(),
            status: todo.status.as_str(),
            border_class: todo.status_class(today),
            due_label,
        }
    }
}

fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}
