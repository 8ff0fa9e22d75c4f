//! Help handler
//!
//! Handles: help

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::backend::MessageType;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::commands::intent::CommandIntent;
use crate::middleware::MessageContext;

pub const HELP_TEXT: &str = r#"🤖 **Voltz Agent Commands**

I can help you with the following:

**Networking:**
• `matches` - View your AI-powered matches
• `profile` - Check your profile information
• `events` - See your upcoming events

**Information:**
• `help` - Show this help message

**Tips for Better Networking:**
💡 Complete your profile to get better matches
🎯 RSVP to events to meet like-minded people
💬 Reach out to your matches before the event
⭐ Build your reputation by attending events

**Need More Help?**
Visit our website or reach out to our support team.

Let me know what you'd like to do! 🚀"#;

pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    fn intents(&self) -> &'static [CommandIntent] {
        &[CommandIntent::Help]
    }

    async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()> {
        ctx.reply(message, HELP_TEXT).await?;
        ctx.log_activity(message, MessageType::Help).await;

        info!("✅ Help message sent to {}", message.sender_address);
        Ok(())
    }
}
