//! Command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::CommandContext;
use super::intent::CommandIntent;
use crate::middleware::MessageContext;

pub const GENERIC_APOLOGY: &str =
    "Sorry, I encountered an error processing your message. Please try again or type 'help' for assistance.";

/// Trait for chat command handlers
///
/// Each handler answers one or more command intents. Handlers are registered with a
/// CommandRegistry and dispatched by the CommandRouter. An error returned from `handle`
/// is logged by the router and answered with `apology()`; it never reaches the sender.
///
/// # Example
///
/// ```ignore
/// pub struct HelpHandler;
///
/// #[async_trait]
/// impl CommandHandler for HelpHandler {
///     fn intents(&self) -> &'static [CommandIntent] {
///         &[CommandIntent::Help]
///     }
///
///     async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()> {
///         ctx.reply(message, "...").await
///     }
/// }
/// ```
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Intent(s) this handler answers
    fn intents(&self) -> &'static [CommandIntent];

    /// Reply sent when `handle` fails
    fn apology(&self) -> &'static str {
        GENERIC_APOLOGY
    }

    async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()>;
}
