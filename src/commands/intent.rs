//! Command intent classification
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::fmt;

use crate::backend::MessageType;
use crate::core::normalize_command_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandIntent {
    Help,
    Profile,
    Matches,
    Events,
    Fallback,
}

/// Keywords checked in order; the first substring hit wins
const KEYWORDS: &[(&str, CommandIntent)] = &[
    ("help", CommandIntent::Help),
    ("profile", CommandIntent::Profile),
    ("match", CommandIntent::Matches),
    ("event", CommandIntent::Events),
];

impl CommandIntent {
    pub fn classify(text: &str) -> Self {
        let normalized = normalize_command_text(text);
        KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, intent)| *intent)
            .unwrap_or(CommandIntent::Fallback)
    }

    pub fn message_type(self) -> MessageType {
        match self {
            CommandIntent::Help => MessageType::Help,
            CommandIntent::Profile => MessageType::Profile,
            CommandIntent::Matches => MessageType::Matches,
            CommandIntent::Events => MessageType::Events,
            CommandIntent::Fallback => MessageType::Fallback,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommandIntent::Help => "help",
            CommandIntent::Profile => "profile",
            CommandIntent::Matches => "matches",
            CommandIntent::Events => "events",
            CommandIntent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for CommandIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
