//! Profile handler
//!
//! Handles: profile
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::backend::{MessageType, Profile};
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::commands::intent::CommandIntent;
use crate::middleware::MessageContext;

pub const NO_PROFILE: &str = "I couldn't find your profile. Make sure you've completed your profile setup in the Voltz app! 👤";

const PROFILE_APOLOGY: &str =
    "Sorry, I couldn't fetch your profile right now. Please try again later.";

pub struct ProfileHandler;

#[async_trait]
impl CommandHandler for ProfileHandler {
    fn intents(&self) -> &'static [CommandIntent] {
        &[CommandIntent::Profile]
    }

    fn apology(&self) -> &'static str {
        PROFILE_APOLOGY
    }

    async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()> {
        info!("Fetching profile for {}", message.sender_address);

        match &message.user_profile {
            Some(profile) => {
                ctx.reply(message, &format_profile(profile)).await?;
                info!("✅ Profile sent to {}", message.sender_address);
            }
            None => ctx.reply(message, NO_PROFILE).await?,
        }

        ctx.log_activity(message, MessageType::Profile).await;
        Ok(())
    }
}

pub fn format_profile(profile: &Profile) -> String {
    let mut text = String::from("👤 **Your Voltz Profile**\n\n");
    text.push_str(&format!(
        "**Name:** {}\n",
        profile.name.as_deref().unwrap_or("Not set")
    ));

    if let Some(title) = &profile.title {
        text.push_str(&format!("**Title:** {title}\n"));
    }
    if let Some(company) = &profile.company {
        text.push_str(&format!("**Company:** {company}\n"));
    }
    if let Some(bio) = &profile.bio {
        text.push_str(&format!("\n**Bio:** {bio}\n"));
    }
    if !profile.interests.is_empty() {
        text.push_str(&format!("\n**Interests:** {}\n", profile.interests.join(", ")));
    }
    if !profile.goals.is_empty() {
        text.push_str(&format!("\n**Goals:** {}\n", profile.goals.join(", ")));
    }
    if let Some(reputation) = profile.reputation {
        text.push_str(&format!("\n⭐ **Reputation:** {reputation} points\n"));
    }
    if let Some(attended) = profile.events_attended {
        text.push_str(&format!("📅 **Events Attended:** {attended}\n"));
    }
    if let Some(connections) = profile.connections_count {
        text.push_str(&format!("🤝 **Connections:** {connections}\n"));
    }

    text.push_str("\n💡 Tip: Keep your profile updated to get better matches!");
    text
}
