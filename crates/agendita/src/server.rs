use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{Local, Utc};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::html;
use crate::store::TaskStore;
use crate::types::{Category, Task};

/// Application state shared across requests
pub struct AppState {
    pub store: RwLock<TaskStore>,
}

/// Hydrate the store and start the web server
pub async fn serve(port: u16, data_dir: PathBuf) -> anyhow::Result<()> {
    let store = TaskStore::load(&data_dir);
    info!(count = store.tasks().len(), "Store hydrated");

    let state = Arc::new(AppState {
        store: RwLock::new(store),
    });

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Server running at http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(board_handler))
        .route("/tasks", post(add_handler))
        .route("/tasks/{id}/toggle", post(toggle_handler))
        .route("/tasks/{id}/advance", post(advance_handler))
        .route("/tasks/{id}/delete", post(delete_handler))
        .route("/api/tasks", get(tasks_handler))
        .with_state(state)
}

/// Serve the weekly board
async fn board_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let store = state.store.read().await;
    let today = Local::now().date_naive();
    Html(html::render_page(store.tasks(), today).into_string())
}

#[derive(Debug, Deserialize)]
struct AddForm {
    text: String,
    #[serde(default)]
    category: Category,
}

/// Create a task for today from the input row
async fn add_handler(State(state): State<Arc<AppState>>, Form(form): Form<AddForm>) -> Redirect {
    let mut store = state.store.write().await;
    match store.add(&form.text, Utc::now(), form.category) {
        Ok(Some(id)) => debug!(%id, "Task added"),
        Ok(None) => debug!("Blank task ignored"),
        Err(e) => warn!(error = %e, "Failed to persist after add"),
    }
    Redirect::to("/")
}

async fn toggle_handler(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    let mut store = state.store.write().await;
    if let Err(e) = store.toggle(&id) {
        warn!(error = %e, "Failed to persist after toggle");
    }
    Redirect::to("/")
}

async fn advance_handler(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    let mut store = state.store.write().await;
    if let Err(e) = store.advance_day(&id) {
        warn!(error = %e, "Failed to persist after advance");
    }
    Redirect::to("/")
}

async fn delete_handler(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    let mut store = state.store.write().await;
    if let Err(e) = store.delete(&id) {
        warn!(error = %e, "Failed to persist after delete");
    }
    Redirect::to("/")
}

/// Return the full task collection as JSON
async fn tasks_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    let store = state.store.read().await;
    Json(store.tasks().to_vec())
}
