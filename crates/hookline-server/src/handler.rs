//! Request handlers.

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use hookline_core::Outcome;
use serde::Deserialize;
use std::sync::Arc;

/// Slash-command form fields. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HookForm {
    pub token: String,
    pub text: String,
}

/// `POST` webhook. Plain-text replies:
///
/// - 401 when the token does not match; nothing is parsed.
/// - 200 `logged event <id>` once the sink accepted the event.
/// - 200 `ignored: <reason>` for malformed payloads and unknown kinds.
/// - 500 when the sink fails.
pub async fn receive_hook(
    State(state): State<AppState>,
    Form(form): Form<HookForm>,
) -> (StatusCode, String) {
    if !state.auth.verify(&form.token) {
        tracing::warn!("authentication failed");
        return (StatusCode::UNAUTHORIZED, "unauthorized\n".to_string());
    }
    tracing::debug!(text = %form.text, "received payload");

    let event = match state.pipeline.process(&form.text) {
        Outcome::Event(event) => event,
        Outcome::Rejected(rejection) => {
            return (StatusCode::OK, format!("ignored: {rejection}\n"));
        }
    };

    let id = event.id.clone();
    let sink = Arc::clone(&state.sink);
    match tokio::task::spawn_blocking(move || sink.append(&event)).await {
        Ok(Ok(())) => {
            tracing::info!(%id, "event recorded");
            (StatusCode::OK, format!("logged event {id}\n"))
        }
        Ok(Err(err)) => {
            tracing::error!(%id, %err, "failed to record event");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to record event\n".to_string())
        }
        Err(err) => {
            tracing::error!(%id, %err, "sink task did not complete");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to record event\n".to_string())
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}
