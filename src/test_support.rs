//! Test helpers: an in-process stub of the AutoNotes backend.
//!
//! The stub binds an ephemeral local port, answers the four API routes and
//! counts every request so tests can assert how often an endpoint was hit.

use axum::extract::{Multipart, Path as AxumPath, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Per-endpoint request counters.
#[derive(Default)]
pub struct Counters {
    pub health: AtomicUsize,
    pub youtube: AtomicUsize,
    pub upload: AtomicUsize,
    pub export: AtomicUsize,
}

/// Knobs for shaping stub responses.
pub struct StubConfig {
    /// Status code for the YouTube generate route.
    pub youtube_status: u16,
    /// When failing, the `detail` string to attach. None sends a plain body.
    pub youtube_detail: Option<String>,
    /// Value of the `success` field on 200 responses.
    pub success_flag: bool,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            youtube_status: 200,
            youtube_detail: None,
            success_flag: true,
        }
    }
}

#[derive(Clone)]
struct StubState {
    counters: Arc<Counters>,
    config: Arc<StubConfig>,
}

/// A running stub backend.
pub struct StubBackend {
    pub base_url: String,
    pub counters: Arc<Counters>,
}

/// Spawn the stub on an ephemeral port and return its address and counters.
/// The server task ends when the test's runtime shuts down.
pub async fn spawn_stub(config: StubConfig) -> StubBackend {
    let counters = Arc::new(Counters::default());
    let state = StubState {
        counters: counters.clone(),
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/", get(health))
        .route("/api/generate-notes/youtube", post(youtube))
        .route("/api/generate-notes/upload", post(upload))
        .route("/api/export/{format}", post(export))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{}", addr),
        counters,
    }
}

fn sample_notes() -> Value {
    json!({
        "formatted": "# Notes\n\n## Key Points\n- Alpha\n- Beta",
        "structured": {
            "introduction": "Intro",
            "key_points": ["Alpha", "Beta"],
            "examples": [],
            "conclusion": "Done",
            "summary": "Intro. Done."
        }
    })
}

async fn health(State(state): State<StubState>) -> Json<Value> {
    state.counters.health.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "message": "AutoNotes Pro API is running" }))
}

async fn youtube(State(state): State<StubState>, Json(req): Json<Value>) -> Response {
    state.counters.youtube.fetch_add(1, Ordering::SeqCst);

    if state.config.youtube_status != 200 {
        let status = StatusCode::from_u16(state.config.youtube_status).unwrap();
        return match &state.config.youtube_detail {
            Some(detail) => (status, Json(json!({ "detail": detail }))).into_response(),
            None => (status, "stub failure".to_string()).into_response(),
        };
    }

    let url = req.get("url").and_then(Value::as_str).unwrap_or_default();
    Json(json!({
        "success": state.config.success_flag,
        "transcript": format!("Transcript for {}", url),
        "notes": sample_notes(),
    }))
    .into_response()
}

async fn upload(State(state): State<StubState>, mut multipart: Multipart) -> Response {
    state.counters.upload.fetch_add(1, Ordering::SeqCst);

    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "missing file field" })),
            )
                .into_response()
        }
    };

    let field_name = field.name().unwrap_or_default().to_string();
    let file_name = field.file_name().unwrap_or_default().to_string();
    let bytes = field.bytes().await.unwrap();

    Json(json!({
        "success": true,
        "transcript": format!(
            "Received {} ({} bytes) via field '{}'",
            file_name,
            bytes.len(),
            field_name
        ),
        "notes": sample_notes(),
    }))
    .into_response()
}

async fn export(
    State(state): State<StubState>,
    AxumPath(format): AxumPath<String>,
    Json(body): Json<Value>,
) -> Response {
    state.counters.export.fetch_add(1, Ordering::SeqCst);

    let formatted = body["notes"]["formatted"].as_str().unwrap_or_default();
    format!("%{}-export%\n{}", format, formatted)
        .into_bytes()
        .into_response()
}
