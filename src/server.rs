// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface for the query pipeline.
//!
//! Routes:
//! - `GET /`        HTML search form (field `text`)
//! - `POST /`       form-encoded `text`, JSON array of matching courses
//! - `GET /search`  `?q=...`, same JSON array
//! - `GET /health`  record count and fingerprint of the current snapshot
//!
//! The dataset file is re-checked on every request. Its CRC32 is compared to
//! the loaded snapshot and only a changed file is re-parsed. A file that fails
//! to parse leaves the previous snapshot in place, and the request that
//! noticed gets the error.
//!
//! Ranking is CPU work, so it runs on the blocking pool.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dataset::{self, Dataset};
use crate::error::{Error, ErrorPayload, Result};
use crate::search::QueryPipeline;
use crate::types::Course;

// =============================================================================
// DATASET STORE
// =============================================================================

/// The dataset file plus the last snapshot successfully parsed from it.
pub struct DatasetStore {
    path: PathBuf,
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Load `path` once up front. A bad file here is a startup error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let dataset = Dataset::from_file(&path)?;
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(dataset)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current snapshot, without touching the file.
    pub fn snapshot(&self) -> Arc<Dataset> {
        Arc::clone(&self.current.read())
    }

    /// Re-read the file and swap in a new snapshot if its bytes changed.
    pub fn refresh(&self) -> Result<Arc<Dataset>> {
        let bytes = fs::read(&self.path)?;
        let fingerprint = dataset::fingerprint(&bytes);

        {
            let current = self.current.read();
            if current.fingerprint() == fingerprint {
                return Ok(Arc::clone(&current));
            }
        }

        match Dataset::from_json_slice(&bytes) {
            Ok(fresh) => {
                let fresh = Arc::new(fresh);
                *self.current.write() = Arc::clone(&fresh);
                info!(
                    path = %self.path.display(),
                    courses = fresh.len(),
                    fingerprint,
                    "dataset reloaded"
                );
                Ok(fresh)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "reload failed, keeping previous dataset");
                Err(e)
            }
        }
    }
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

pub struct AppState {
    store: DatasetStore,
    pipeline: QueryPipeline,
}

impl AppState {
    pub fn new(store: DatasetStore, pipeline: QueryPipeline) -> Self {
        Self { store, pipeline }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Refresh the snapshot, then rank it. `query` must already be lowercased.
    pub fn query(&self, query: &str) -> Result<Vec<Course>> {
        let dataset = self.store.refresh()?;
        Ok(self
            .pipeline
            .process(&dataset, query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn health(&self) -> Result<Health> {
        let dataset = self.store.refresh()?;
        Ok(Health {
            status: "ok",
            courses: dataset.len(),
            fingerprint: dataset.fingerprint(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub courses: usize,
    pub fingerprint: u32,
}

// =============================================================================
// ROUTES
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchForm {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

const SEARCH_FORM: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>coursedex</title></head>
<body>
<form method="post" action="/">
<input type="text" name="text" autofocus>
<button type="submit">Search</button>
</form>
</body>
</html>
"#;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(form_handler).post(form_search_handler))
        .route("/search", get(query_search_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Bind, serve until Ctrl-C.
pub async fn run_server(state: AppState, bind_addr: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(state));
    let addr = format!("{}:{}", bind_addr, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("coursedex listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// GET /
async fn form_handler() -> Html<&'static str> {
    Html(SEARCH_FORM)
}

/// POST /
async fn form_search_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Response {
    run_query(state, form.text.to_lowercase()).await
}

/// GET /search?q=
async fn query_search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    run_query(state, params.q.to_lowercase()).await
}

/// GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> Response {
    match tokio::task::spawn_blocking(move || state.health()).await {
        Ok(Ok(health)) => Json(health).into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => internal_error(&e),
    }
}

async fn run_query(state: Arc<AppState>, query: String) -> Response {
    match tokio::task::spawn_blocking(move || state.query(&query)).await {
        Ok(Ok(courses)) => Json(courses).into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => internal_error(&e),
    }
}

fn internal_error(e: &tokio::task::JoinError) -> Response {
    let payload = ErrorPayload {
        code: "INTERNAL".to_string(),
        message: format!("internal error: {}", e),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_input_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self.to_payload())).into_response()
    }
}
