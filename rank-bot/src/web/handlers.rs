//! Interactions endpoint handlers.
//!
//! A single route receives everything Discord sends:
//! 1. Reject methods other than POST and PATCH
//! 2. Validate configuration secrets
//! 3. PATCH re-registers the command schema
//! 4. POST verifies the signature, then dispatches the interaction

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::commands::{all_commands, CommandRegistry};
use crate::config::Credentials;
use crate::interaction;
use crate::rank::RankClient;
use crate::web::response::{
    plain_text, PrettyJson, INTERNAL_SERVER_ERROR, INVALID_METHOD, INVALID_REQUEST,
    INVALID_SIGNATURE,
};
use crate::web::signature::{verify_interaction_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::Config;

/// Upper bound on interaction bodies.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rank_client: RankClient,
    pub registry: CommandRegistry,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let rank_client = RankClient::new(http.clone(), config.rank_api_url.clone());
        let registry = CommandRegistry::new(http, config.discord_api_base.clone());
        Self {
            config: Arc::new(config),
            rank_client,
            registry,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Interactions
// =============================================================================

/// Interactions endpoint accepting any method.
pub async fn interactions(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();

    if method != Method::POST && method != Method::PATCH {
        warn!(method = %method, "interaction_invalid_method");
        return plain_text(StatusCode::METHOD_NOT_ALLOWED, INVALID_METHOD);
    }

    let credentials = match state.config.credentials() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "config_invalid");
            return plain_text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR);
        }
    };

    if method == Method::PATCH {
        return sync_commands(&state, &credentials).await;
    }

    handle_interaction(&state, &credentials, request).await
}

/// Re-register the command schema and report whether Discord accepted it.
async fn sync_commands(state: &AppState, credentials: &Credentials<'_>) -> Response {
    info!(application_id = %credentials.application_id, "command_sync_requested");

    let ok = match state
        .registry
        .overwrite(
            credentials.application_id,
            credentials.discord_token,
            &all_commands(),
        )
        .await
    {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "command_sync_failed");
            false
        }
    };

    PrettyJson(ok).into_response()
}

async fn handle_interaction(
    state: &AppState,
    credentials: &Credentials<'_>,
    request: Request,
) -> Response {
    let (parts, body) = request.into_parts();

    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    let (signature, timestamp) = match (header(SIGNATURE_HEADER), header(TIMESTAMP_HEADER)) {
        (Some(s), Some(t)) => (s, t),
        (signature, timestamp) => {
            warn!(
                has_signature = signature.is_some(),
                has_timestamp = timestamp.is_some(),
                "interaction_signature_headers_missing"
            );
            return plain_text(StatusCode::BAD_REQUEST, INVALID_SIGNATURE);
        }
    };

    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "interaction_body_read_failed");
            return plain_text(StatusCode::BAD_REQUEST, INVALID_SIGNATURE);
        }
    };

    if !verify_interaction_signature(credentials.public_key, &signature, &timestamp, &body) {
        warn!(body_length = body.len(), "interaction_signature_invalid");
        return plain_text(StatusCode::BAD_REQUEST, INVALID_SIGNATURE);
    }

    match interaction::respond(&body, &state.rank_client).await {
        Some(response) => PrettyJson(response).into_response(),
        None => plain_text(StatusCode::BAD_REQUEST, INVALID_REQUEST),
    }
}
