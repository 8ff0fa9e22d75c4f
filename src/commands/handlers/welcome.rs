//! Welcome message for conversations the agent has not seen before
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::info;

use crate::backend::MessageType;
use crate::commands::context::CommandContext;
use crate::middleware::MessageContext;

pub struct WelcomeHandler;

impl WelcomeHandler {
    /// Greet the sender, by the name on the profile attached to the message when there is one
    pub async fn greet(&self, ctx: &CommandContext, message: &MessageContext) -> Result<()> {
        info!("Sending welcome message to {}", message.sender_address);

        let name = message
            .user_profile
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("there");

        ctx.reply(message, &welcome_text(name)).await?;
        ctx.log_activity(message, MessageType::Welcome).await;

        info!("✅ Welcome message sent to {}", message.sender_address);
        Ok(())
    }
}

pub fn welcome_text(name: &str) -> String {
    format!(
        r#"Hey {name}! 👋 Welcome to Voltz!

I'm your AI-powered event networking assistant. I'm here to help you:

✨ **Find Your Best Matches**
I'll notify you about attendees with similar interests and goals

🎯 **Event Updates**
Get real-time updates about events you're attending

💡 **Networking Tips**
Get AI-powered conversation starters and connection suggestions

📊 **Track Your Network**
View your reputation and connections

**Quick Commands:**
• `matches` - See your latest matches
• `events` - View your upcoming events
• `profile` - Check your profile
• `help` - See all available commands

Let's make your next event unforgettable! 🚀"#
    )
}
