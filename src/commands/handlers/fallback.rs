//! Fallback handler for messages that match no command keyword

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::backend::MessageType;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::commands::intent::CommandIntent;
use crate::middleware::MessageContext;

pub const FALLBACK_TEXT: &str = "I'm your Voltz event networking assistant! 🚀

I can help you with:
• Finding your best matches
• Event information
• Profile updates
• Networking tips

Type 'help' to see all available commands!";

pub struct FallbackHandler;

#[async_trait]
impl CommandHandler for FallbackHandler {
    fn intents(&self) -> &'static [CommandIntent] {
        &[CommandIntent::Fallback]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()> {
        ctx.reply(message, FALLBACK_TEXT).await?;
        ctx.log_activity(message, MessageType::Fallback).await;
        Ok(())
    }
}
