//! Core types, error handling, and configuration for stalker-bot.
//!
//! This crate provides the abstractions shared by the webhook dispatcher
//! and the GitHub fetcher: the Dialogflow wire types, the error taxonomy,
//! the `UserLookup` seam, and the TOML configuration.

pub mod config;
pub mod error;
pub mod lookup;
pub mod types;

pub use config::{Config, GithubConfig, ServerConfig};
pub use error::{Error, Result};
pub use lookup::UserLookup;
pub use types::{
    OriginalRequest, UserResource, WebhookReply, WebhookRequest, WebhookResult,
};
