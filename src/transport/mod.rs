//! # Transport Layer
//!
//! The chat network the agent talks through. Message transport, encryption and
//! conversation streaming belong to the implementation; the agent only needs to know
//! its own address and how to reply on a conversation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod console;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use console::{parse_console_line, ConsoleTransport};
pub use memory::{MemoryTransport, SentMessage};

/// One inbound chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub sender_address: String,
    pub content: String,
    pub conversation_id: String,
}

impl InboundMessage {
    pub fn new(sender_address: &str, content: &str, conversation_id: &str) -> Self {
        InboundMessage {
            sender_address: sender_address.to_string(),
            content: content.to_string(),
            conversation_id: conversation_id.to_string(),
        }
    }
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// The agent's own address on this transport
    fn address(&self) -> &str;

    /// Send a UTF-8 text reply on a conversation
    async fn send_text(&self, conversation_id: &str, text: &str) -> Result<()>;
}
