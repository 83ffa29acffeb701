//! Intent dispatch: webhook request in, platform reply out.

use std::sync::Arc;

use stalker_core::{
    Error, Result, UserLookup, UserResource, WebhookReply, WebhookRequest, WebhookResult,
};

use crate::intent::Intent;

/// Fixed reply for unrecognized intents.
pub const DEFAULT_REPLY: &str = "This message is a default one!";

/// Maps recognized intents onto user-data lookups.
#[derive(Clone)]
pub struct Dispatcher {
    lookup: Arc<dyn UserLookup>,
}

impl Dispatcher {
    /// Create a dispatcher backed by the given fetcher.
    pub fn new(lookup: Arc<dyn UserLookup>) -> Self {
        Self { lookup }
    }

    /// Handle one webhook request.
    ///
    /// Returns `Err` only when the request fails shape validation (no
    /// `result`, no `action`). Every failure past that point is folded
    /// into the reply text, so the platform always gets a reply.
    pub async fn dispatch(&self, request: &WebhookRequest) -> Result<WebhookReply> {
        tracing::info!(request = ?request, "webhook request");

        let result = request
            .result
            .as_ref()
            .ok_or_else(|| Error::MalformedRequest("missing result payload".to_string()))?;
        let action = result
            .action
            .as_deref()
            .ok_or_else(|| Error::MalformedRequest("missing action".to_string()))?;

        let reply = match Intent::from_action(action).resource() {
            Some(resource) => self.handle_lookup(result, resource).await,
            None => WebhookReply::text(DEFAULT_REPLY),
        };

        tracing::info!(reply = ?reply, "webhook reply");
        Ok(reply)
    }

    /// Run one lookup intent. The `user` parameter is validated before any
    /// network call; failures become the reply text.
    async fn handle_lookup(&self, result: &WebhookResult, resource: UserResource) -> WebhookReply {
        let outcome = match result.parameters.get("user") {
            Some(user) if !user.trim().is_empty() => self.lookup.lookup(user, resource).await,
            _ => Err(Error::MissingParameter("user".to_string())),
        };

        match outcome {
            Ok(sentence) => WebhookReply::text(sentence),
            Err(error) => {
                tracing::warn!(%error, "lookup failed");
                WebhookReply::text(error.to_string())
            }
        }
    }
}
