//! HTTP surface: one POST route receiving the platform's webhook calls.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use stalker_core::{Error, Result, WebhookRequest};

use crate::dispatcher::Dispatcher;

/// Exact body returned when the request is not a recognizable webhook call.
pub const INVALID_WEBHOOK_MESSAGE: &str =
    "Invalid Webhook Request (expecting v1 or v2 webhook request)";

/// Build the webhook router.
pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", post(handle_webhook))
        .with_state(dispatcher)
}

/// Serve the webhook on `bind` until the process is stopped.
pub async fn serve(bind: &str, dispatcher: Dispatcher) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "webhook listening");
    axum::serve(listener, router(dispatcher)).await?;
    Ok(())
}

async fn handle_webhook(State(dispatcher): State<Dispatcher>, body: Bytes) -> Response {
    let request: WebhookRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(%error, "unparseable webhook body");
            return (StatusCode::BAD_REQUEST, INVALID_WEBHOOK_MESSAGE).into_response();
        }
    };

    if request.result.is_none() {
        tracing::warn!("webhook request without result payload");
        return (StatusCode::BAD_REQUEST, INVALID_WEBHOOK_MESSAGE).into_response();
    }

    match dispatcher.dispatch(&request).await {
        Ok(reply) => Json(reply).into_response(),
        Err(error @ Error::MalformedRequest(_)) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(error) => {
            // dispatch only fails on shape validation; anything else is a bug
            tracing::error!(%error, "dispatch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}
