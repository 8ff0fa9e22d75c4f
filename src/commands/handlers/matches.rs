//! Match handler
//!
//! Handles: matches
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::backend::{Match, MessageType};
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::commands::intent::CommandIntent;
use crate::core::{join_limited, take_preview};
use crate::middleware::MessageContext;

pub const NO_MATCHES: &str = "You don't have any new matches yet. Make sure to complete your profile and RSVP to events to get matched with other attendees! 🎯";

const MATCHES_APOLOGY: &str =
    "Sorry, I couldn't fetch your matches right now. Please try again later.";

/// Common interests shown per match
const MAX_INTERESTS: usize = 3;

pub struct MatchesHandler;

#[async_trait]
impl CommandHandler for MatchesHandler {
    fn intents(&self) -> &'static [CommandIntent] {
        &[CommandIntent::Matches]
    }

    fn apology(&self) -> &'static str {
        MATCHES_APOLOGY
    }

    async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()> {
        info!("Fetching matches for {}", message.sender_address);
        let matches = ctx.backend.get_user_matches(&message.sender_address).await;

        if matches.is_empty() {
            ctx.reply(message, NO_MATCHES).await?;
        } else {
            ctx.reply(message, &format_matches(&matches)).await?;
            info!(
                "✅ Sent {} matches to {}",
                matches.len(),
                message.sender_address
            );
        }

        ctx.log_activity(message, MessageType::Matches).await;
        Ok(())
    }
}

/// Numbered list of the top matches
pub fn format_matches(matches: &[Match]) -> String {
    let mut text = String::from("🎯 **Your Top Matches**\n\n");

    for (index, m) in take_preview(matches).iter().enumerate() {
        text.push_str(&format!(
            "{}. **{}** ({}% match)\n",
            index + 1,
            m.name.as_deref().unwrap_or("Anonymous"),
            m.score_percent()
        ));
        text.push_str(&format!(
            "   {} at {}\n",
            m.title.as_deref().unwrap_or("Attendee"),
            m.company.as_deref().unwrap_or("N/A")
        ));

        if !m.common_interests.is_empty() {
            text.push_str(&format!(
                "   🤝 Common interests: {}\n",
                join_limited(&m.common_interests, MAX_INTERESTS)
            ));
        }

        if let Some(starter) = &m.conversation_starter {
            text.push_str(&format!("   💡 Ice breaker: \"{starter}\"\n"));
        }

        text.push('\n');
    }

    text.push_str("Reach out and start networking! 🚀");
    text
}
