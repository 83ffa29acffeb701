//! Webhook wire types shared across crates.
//!
//! The inbound shape is the Dialogflow v1 webhook request; the outbound
//! shape is the reply structure the platform expects back. Field names on
//! the wire are camelCase where Dialogflow uses camelCase.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound webhook request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// The classified intent payload. A request without it is malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<WebhookResult>,

    /// Metadata about the platform the user spoke through.
    #[serde(
        rename = "originalRequest",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_request: Option<OriginalRequest>,
}

/// The intent classification inside a webhook request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookResult {
    /// Intent name used as the dispatch key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Intent parameters, e.g. `user` -> GitHub username.
    #[serde(default)]
    pub parameters: HashMap<String, String>,

    /// Input contexts. Carried through but not consulted by any handler.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<Value>,
}

/// Source platform metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OriginalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Outbound reply body.
///
/// `speech` and `display_text` are always both populated: the only
/// constructors either set both from one string or fill the missing side
/// from the other, so a reply with an empty side cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookReply {
    /// Spoken response.
    pub speech: String,

    /// Displayed response.
    #[serde(rename = "displayText")]
    pub display_text: String,

    /// Optional rich response payload, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Optional output contexts, passed through unchanged.
    #[serde(rename = "contextOut", default, skip_serializing_if = "Option::is_none")]
    pub context_out: Option<Vec<Value>>,
}

impl WebhookReply {
    /// Build a reply that speaks and displays the same text.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            speech: text.clone(),
            display_text: text,
            data: None,
            context_out: None,
        }
    }

    /// Build a reply from spoken text with an optional display override.
    /// An absent display side takes the spoken text.
    pub fn spoken(speech: impl Into<String>, display_text: Option<String>) -> Self {
        let speech = speech.into();
        let display_text = display_text.unwrap_or_else(|| speech.clone());
        Self {
            speech,
            display_text,
            data: None,
            context_out: None,
        }
    }

    /// Attach a rich response payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach output contexts.
    pub fn with_contexts(mut self, contexts: Vec<Value>) -> Self {
        self.context_out = Some(contexts);
        self
    }
}

impl From<String> for WebhookReply {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for WebhookReply {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// Which GitHub sub-resource to fetch for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserResource {
    /// The user profile itself (no endpoint suffix).
    Profile,
    /// Users this user follows.
    Following,
    /// Users following this user.
    Followers,
    /// Public repositories owned by this user.
    Repos,
    /// Repositories this user has starred.
    Starred,
}

impl UserResource {
    /// Extra path segment appended to `/users/{username}`, if any.
    pub fn path_segment(self) -> Option<&'static str> {
        match self {
            UserResource::Profile => None,
            UserResource::Following => Some("following"),
            UserResource::Followers => Some("followers"),
            UserResource::Repos => Some("repos"),
            UserResource::Starred => Some("starred"),
        }
    }
}
