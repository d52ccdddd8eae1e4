//! In-process fake upstreams for tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub query: String,
    pub variables: String,
}

#[derive(Clone)]
struct RankApiState {
    body: &'static str,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
}

async fn graphql(
    State(state): State<RankApiState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.queries.lock().unwrap().push(RecordedQuery {
        query: params.get("query").cloned().unwrap_or_default(),
        variables: params.get("variables").cloned().unwrap_or_default(),
    });
    ([(CONTENT_TYPE, "application/json")], state.body)
}

/// Fake ranking service answering every query with `body`.
///
/// Returns the endpoint URL and the queries it received.
pub async fn fake_rank_api(body: &'static str) -> (String, Arc<Mutex<Vec<RecordedQuery>>>) {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/graphql", get(graphql))
        .with_state(RankApiState {
            body,
            queries: queries.clone(),
        });
    let addr = spawn(app).await;
    (format!("http://{}/graphql", addr), queries)
}

#[derive(Debug, Clone)]
pub struct RecordedRegistration {
    pub application_id: String,
    pub authorization: String,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct DiscordApiState {
    status: StatusCode,
    calls: Arc<Mutex<Vec<RecordedRegistration>>>,
}

async fn overwrite_commands(
    State(state): State<DiscordApiState>,
    Path(application_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.calls.lock().unwrap().push(RecordedRegistration {
        application_id,
        authorization,
        body,
    });
    (state.status, "[]")
}

/// Fake Discord API whose command overwrite endpoint answers with `status`.
///
/// Returns the API base URL and the registrations it received.
pub async fn fake_discord_api(
    status: StatusCode,
) -> (String, Arc<Mutex<Vec<RecordedRegistration>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/applications/:application_id/commands",
            put(overwrite_commands),
        )
        .with_state(DiscordApiState {
            status,
            calls: calls.clone(),
        });
    let addr = spawn(app).await;
    (format!("http://{}", addr), calls)
}
