//! HTTP server for the fallback component preview.
//!
//! Routes (both prefixes are accepted for every read endpoint):
//!
//! - `GET /` - static fallback page if present, otherwise the generated page
//! - `GET /component-source`, `GET /api/component-source` - raw file content
//! - `POST /api/component-source` - overwrite the file (write access only)
//! - `GET /status`, `GET /api/status` - file and server metadata
//! - `GET /watch?lastModified=<ms>`, `GET /api/watch` - change polling
//!
//! Unmatched routes return 404, or redirect to `/` when write access is on.

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::render;
use crate::source::{self, FileSnapshot};
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

type SharedConfig = Arc<ServerConfig>;

/// Fallback preview server.
pub struct PreviewServer {
    config: SharedConfig,
}

impl PreviewServer {
    /// Create a server for the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Configuration this server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Validate the configuration, bind, and serve until the process exits.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound`/`NotAFile` before anything is bound if the
    /// target file is missing, `Bind` if the port is unavailable.
    pub async fn start(self) -> Result<()> {
        self.config.validate()?;

        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!("Preview server running at {}", self.config.server_url());
        tracing::info!("Serving component: {}", self.config.component_path.display());
        match self.config.existing_fallback_html() {
            Some(page) => tracing::info!("Using fallback HTML from: {}", page.display()),
            None => tracing::info!("Using generated HTML (fallback HTML not found)"),
        }
        if self.config.allow_write {
            tracing::info!("Write access enabled: POST /api/component-source");
        }

        axum::serve(listener, self.router())
            .await
            .map_err(ServerError::Serve)
    }

    /// Build the axum router with all routes.
    pub fn router(&self) -> Router {
        let config = self.config.clone();

        let router = Router::new()
            .route("/", get(handle_index))
            .route("/component-source", get(handle_source))
            .route("/status", get(handle_status))
            .route("/api/status", get(handle_status))
            .route("/watch", get(handle_watch))
            .route("/api/watch", get(handle_watch));

        let router = if config.allow_write {
            router
                .route(
                    "/api/component-source",
                    get(handle_source).post(handle_write),
                )
                .fallback(handle_redirect)
        } else {
            router
                .route("/api/component-source", get(handle_source))
                .fallback(handle_not_found)
        };

        router
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(config)
    }
}

/// Serve the static fallback page or the generated preview page.
async fn handle_index(State(config): State<SharedConfig>) -> Response {
    if let Some(page) = config.existing_fallback_html() {
        return match tokio::fs::read(page).await {
            Ok(content) => html_response(content),
            Err(e) => {
                tracing::error!("Error reading fallback HTML {}: {}", page.display(), e);
                text_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error reading fallback HTML: {}", e),
                )
            }
        };
    }

    let snapshot = match FileSnapshot::read(&config.component_path).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("{}", e);
            return text_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match render::render(
        &snapshot,
        &config.component_path,
        config.resolved_poll_interval(),
    ) {
        Ok(html) => html_response(html),
        Err(e) => text_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// Return the component source as plain text.
async fn handle_source(State(config): State<SharedConfig>) -> Response {
    tracing::debug!("Serving source of {}", config.component_path.display());

    match FileSnapshot::read(&config.component_path).await {
        Ok(snapshot) => text_response(StatusCode::OK, snapshot.content),
        Err(e) => {
            tracing::error!("{}", e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct WriteRequest {
    code: Option<String>,
}

/// Overwrite the component with the `code` field of a JSON body.
async fn handle_write(State(config): State<SharedConfig>, body: Bytes) -> Response {
    let code = match serde_json::from_slice::<WriteRequest>(&body) {
        Ok(WriteRequest { code: Some(code) }) => code,
        Ok(WriteRequest { code: None }) => {
            return write_failure(StatusCode::BAD_REQUEST, "Missing 'code' field in request body");
        }
        Err(e) => {
            return write_failure(
                StatusCode::BAD_REQUEST,
                &format!("Invalid JSON body: {}", e),
            );
        }
    };

    match source::write(&config.component_path, &code).await {
        Ok(()) => {
            tracing::info!(
                "Updated {} ({} bytes)",
                config.component_path.display(),
                code.len()
            );
            Json(json!({ "success": true })).into_response()
        }
        Err(e) => {
            tracing::error!("{}", e);
            write_failure(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Report file and server metadata.
async fn handle_status(State(config): State<SharedConfig>) -> Response {
    match source::stat(&config.component_path).await {
        Ok(stat) => Json(json!({
            "status": "ok",
            "component": {
                "path": config.component_path.display().to_string(),
                "size": stat.size,
                "modified": stat.modified_rfc3339(),
                "exists": true,
            },
            "server": {
                "timestamp": chrono::Utc::now()
                    .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                "port": config.port,
                "fallback_html_exists": config.fallback_html_exists(),
                "allow_write": config.allow_write,
            },
        }))
        .into_response(),
        Err(e) => status_failure(e),
    }
}

#[derive(Debug, Deserialize)]
struct WatchQuery {
    #[serde(rename = "lastModified")]
    last_modified: Option<String>,
}

/// Compare the client's last-seen modification time with the file's.
///
/// Times are whole milliseconds. Missing or unparsable `lastModified` values
/// count as 0, so the first poll always reports a change; a fractional value
/// is compared as given.
async fn handle_watch(
    State(config): State<SharedConfig>,
    Query(query): Query<WatchQuery>,
) -> Response {
    let since = query
        .last_modified
        .as_deref()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);

    match source::stat(&config.component_path).await {
        Ok(stat) => {
            let current = stat.modified_ms();
            Json(json!({
                "changed": current as f64 > since,
                "lastModified": current,
            }))
            .into_response()
        }
        Err(e) => status_failure(e),
    }
}

async fn handle_redirect() -> Redirect {
    Redirect::to("/")
}

async fn handle_not_found() -> Response {
    text_response(StatusCode::NOT_FOUND, "Not Found".to_string())
}

fn html_response(content: impl Into<Body>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        content.into(),
    )
        .into_response()
}

fn text_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response()
}

fn write_failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

fn status_failure(err: ServerError) -> Response {
    tracing::error!("{}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "message": err.to_string() })),
    )
        .into_response()
}
