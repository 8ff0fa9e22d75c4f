//! Command router
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};
use log::{debug, error};
use std::sync::Arc;

use super::context::CommandContext;
use super::handlers::create_all_handlers;
use super::intent::CommandIntent;
use super::registry::CommandRegistry;
use crate::middleware::MessageContext;

/// Classifies message text and dispatches to the registered handler
///
/// Handler failures end here: they are logged and answered with the handler's apology.
pub struct CommandRouter {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandRouter {
    pub fn new(registry: CommandRegistry, context: Arc<CommandContext>) -> Self {
        Self { registry, context }
    }

    /// Router with every built-in handler registered
    pub fn with_default_handlers(context: Arc<CommandContext>) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        Self::new(registry, context)
    }

    pub fn context(&self) -> &Arc<CommandContext> {
        &self.context
    }

    /// Route one message; returns the intent it was classified as
    pub async fn route(&self, message: &MessageContext) -> Result<CommandIntent> {
        let intent = CommandIntent::classify(&message.content);
        let handler = self
            .registry
            .get(intent)
            .or_else(|| self.registry.get(CommandIntent::Fallback))
            .ok_or_else(|| anyhow!("No handler registered for {intent}"))?;

        debug!("Routing '{intent}' for {}", message.sender_address);

        if let Err(e) = handler.handle(Arc::clone(&self.context), message).await {
            error!(
                "Failed to handle '{intent}' for {}: {e}",
                message.sender_address
            );
            if let Err(send_err) = self.context.reply(message, handler.apology()).await {
                error!("Failed to send apology: {send_err}");
            }
        }

        Ok(intent)
    }
}
