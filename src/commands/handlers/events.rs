//! Event handler
//!
//! Handles: events
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::backend::{Event, MessageType};
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::commands::intent::CommandIntent;
use crate::core::take_preview;
use crate::middleware::MessageContext;

pub const NO_EVENTS: &str = "You don't have any upcoming events yet. Browse available events and RSVP to start networking! 🎉";

const EVENTS_APOLOGY: &str =
    "Sorry, I couldn't fetch your events right now. Please try again later.";

pub struct EventsHandler;

#[async_trait]
impl CommandHandler for EventsHandler {
    fn intents(&self) -> &'static [CommandIntent] {
        &[CommandIntent::Events]
    }

    fn apology(&self) -> &'static str {
        EVENTS_APOLOGY
    }

    async fn handle(&self, ctx: Arc<CommandContext>, message: &MessageContext) -> Result<()> {
        info!("Fetching events for {}", message.sender_address);
        let events = ctx.backend.get_user_events(&message.sender_address).await;

        if events.is_empty() {
            ctx.reply(message, NO_EVENTS).await?;
        } else {
            ctx.reply(message, &format_events(&events)).await?;
            info!("✅ Sent {} events to {}", events.len(), message.sender_address);
        }

        ctx.log_activity(message, MessageType::Events).await;
        Ok(())
    }
}

/// Start time as "Feb 27, 2026 at 3:30 PM" (UTC)
fn format_start(event: &Event) -> String {
    match event.start_date {
        Some(start) => format!(
            "{} at {}",
            start.format("%b %-d, %Y"),
            start.format("%-I:%M %p")
        ),
        None => "Date TBA".to_string(),
    }
}

pub fn format_events(events: &[Event]) -> String {
    let mut text = String::from("📅 **Your Upcoming Events**\n\n");

    for (index, event) in take_preview(events).iter().enumerate() {
        text.push_str(&format!(
            "{}. **{}**\n",
            index + 1,
            event.name.as_deref().unwrap_or("Untitled event")
        ));
        text.push_str(&format!(
            "   📍 {}\n",
            event.location.as_deref().unwrap_or("Location TBA")
        ));
        text.push_str(&format!("   🕐 {}\n", format_start(event)));

        if let Some(attendees) = event.attendee_count.filter(|&n| n > 0) {
            text.push_str(&format!("   👥 {attendees} attendees\n"));
        }
        if let Some(potential) = event.match_count.filter(|&n| n > 0) {
            text.push_str(&format!("   ✨ {potential} potential matches\n"));
        }

        text.push('\n');
    }

    text.push_str("Get ready to network! 🚀");
    text
}
