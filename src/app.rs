// The HTTP surface: routes requests onto the parser and the action dispatcher.

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{
        Method, StatusCode, Uri,
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod model;
pub mod parser;
pub mod supervisor;
pub mod ui;

use model::{ActionResult, ServiceStatus};
use supervisor::{ServiceManager, SupervisorError};
use ui::IndexPage;

/// Everything a handler needs. Holds no service data: each request asks the
/// manager afresh.
#[derive(Clone)]
pub struct AppState {
    manager: Arc<dyn ServiceManager>,
    index: IndexPage,
}

impl AppState {
    pub fn new(manager: Arc<dyn ServiceManager>, index: IndexPage) -> Self {
        Self { manager, index }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Supervisor(#[from] SupervisorError),
    #[error("failed to read dashboard page")]
    Index(#[source] std::io::Error),
    #[error("blocking task failed")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let cause = std::error::Error::source(&self).map(ToString::to_string);
        tracing::error!(error = %self, cause = ?cause, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

pub fn router(state: AppState) -> Router {
    // Only the JSON endpoints carry the allow-origin header.
    let api = Router::new()
        .route("/api/services", get(list_services))
        .route("/api/services/{*target}", post(run_action))
        .method_not_allowed_fallback(not_found)
        .route_layer(CorsLayer::new().allow_origin(Any));

    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .method_not_allowed_fallback(not_found)
        .merge(api)
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(preflight))
}

async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.index.load().await.map_err(AppError::Index)?;
    Ok(([(CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response())
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceStatus>>, AppError> {
    let manager = Arc::clone(&state.manager);
    let services =
        tokio::task::spawn_blocking(move || supervisor::list_services(manager.as_ref())).await??;
    Ok(Json(services))
}

/// A failed or rejected action is still a 200; the verdict lives in `ok`.
async fn run_action(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let Some((name, action)) = action_target(uri.path()) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let manager = Arc::clone(&state.manager);
    let result =
        tokio::task::spawn_blocking(move || supervisor::dispatch(manager.as_ref(), &name, &action))
            .await??;
    Ok(Json(result).into_response())
}

/// Splits `/api/services/<name>/<action>` on every `/`. Segments are taken
/// as-is: empty ones are kept and nothing is percent-decoded.
fn action_target(path: &str) -> Option<(String, String)> {
    match path.split('/').collect::<Vec<_>>().as_slice() {
        ["", "api", "services", name, action] => Some((name.to_string(), action.to_string())),
        _ => None,
    }
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Answers every OPTIONS request, whatever the path, before routing.
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
        ],
    )
        .into_response()
}
