//! JSON HTTP server.
//!
//! Exposes smart search and content management for the presentation layer.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`    | `/health` | Health check (returns version) |
//! | `POST`   | `/search` | Smart search: `{ "query": "...", "category": "festivals" }` |
//! | `GET`    | `/content` | List articles (`?category=` optional) |
//! | `POST`   | `/content` | Create an article |
//! | `GET`    | `/content/{id}` | Fetch one article |
//! | `PATCH`  | `/content/{id}` | Partially update an article |
//! | `DELETE` | `/content/{id}` | Delete an article |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "invalid query: query is required" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404),
//! `retrieval_failed` (503), `internal` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so browser clients can
//! call the API directly.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use pura_search_core::error::SearchError;
use pura_search_core::models::{
    Category, Document, NewContent, SearchQuery, SearchResponse, UpdateContent,
};
use pura_search_core::search::{smart_search, SearchParams};
use pura_search_core::store::ContentStore;

use crate::config::Config;
use crate::content::open_store;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ContentStore>,
    params: SearchParams,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, params: SearchParams) -> Self {
        Self { store, params }
    }
}

/// Starts the HTTP server against the configured SQLite database.
///
/// Binds to `[server].bind` and runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let state = AppState::new(Arc::new(store), config.search.params());

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "server listening");
    println!("Pura Search server listening on http://{}", config.server.bind);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Build the router. Exposed so tests and embedding binaries can serve it
/// over any listener and store.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/search", post(handle_search))
        .route("/content", get(handle_list).post(handle_create))
        .route(
            "/content/{id}",
            get(handle_get).patch(handle_update).delete(handle_delete),
        )
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`, `"not_found"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

fn retrieval_failed(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::SERVICE_UNAVAILABLE,
        code: "retrieval_failed".to_string(),
        message: message.into(),
    }
}

fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: message.into(),
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery(_)
            | SearchError::InvalidCategory(_)
            | SearchError::InvalidContent(_) => bad_request(err.to_string()),
            SearchError::Retrieval(ref source) => {
                error!(error = %source, "corpus retrieval failed");
                retrieval_failed(err.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        error!(error = %err, "store operation failed");
        internal(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        bad_request(rejection.body_text())
    }
}

fn parse_category(raw: Option<&str>) -> Result<Option<Category>, AppError> {
    raw.map(Category::from_str)
        .transpose()
        .map_err(AppError::from)
}

fn content_not_found(id: i64) -> AppError {
    not_found(format!("content not found: {}", id))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /search ============

/// Request body for `POST /search`.
#[derive(Deserialize)]
struct SearchBody {
    query: String,
    #[serde(default)]
    category: Option<String>,
}

async fn handle_search(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(body) = body?;
    let query = SearchQuery::parse(&body.query, body.category.as_deref())?;
    let response = smart_search(state.store.as_ref(), &query, &state.params).await?;
    Ok(Json(response))
}

// ============ /content ============

#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    category: Option<String>,
}

async fn handle_list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Document>>, AppError> {
    let Query(params) = params?;
    let category = parse_category(params.category.as_deref())?;
    Ok(Json(state.store.list_content(category).await?))
}

/// Request body for `POST /content`. The category is kept as a string so an
/// unknown name yields the standard error envelope.
#[derive(Deserialize)]
struct CreateBody {
    title: String,
    category: String,
    content: String,
}

async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let Json(body) = body?;
    let input = NewContent {
        title: body.title,
        category: Category::from_str(&body.category)?,
        content: body.content,
    };
    input.validate()?;
    let doc = state.store.create_content(&input).await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

async fn handle_get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Document>, AppError> {
    let Path(id) = id?;
    state
        .store
        .get_content(id)
        .await?
        .map(Json)
        .ok_or_else(|| content_not_found(id))
}

#[derive(Deserialize)]
struct UpdateBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

async fn handle_update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateBody>, JsonRejection>,
) -> Result<Json<Document>, AppError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let input = UpdateContent {
        id,
        title: body.title,
        category: parse_category(body.category.as_deref())?,
        content: body.content,
    };
    input.validate()?;
    state
        .store
        .update_content(&input)
        .await?
        .map(Json)
        .ok_or_else(|| content_not_found(id))
}

#[derive(Serialize)]
struct DeleteResponse {
    deleted: bool,
}

async fn handle_delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(id) = id?;
    let deleted = state.store.delete_content(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}
