//! Intent dispatcher and HTTP webhook server for stalker-bot.
//!
//! Receives Dialogflow webhook calls, routes the classified intent to a
//! GitHub user-data lookup, and answers in the reply shape the platform
//! expects.

pub mod dispatcher;
pub mod intent;
pub mod server;

pub use dispatcher::{Dispatcher, DEFAULT_REPLY};
pub use intent::Intent;
pub use server::{router, serve, INVALID_WEBHOOK_MESSAGE};
