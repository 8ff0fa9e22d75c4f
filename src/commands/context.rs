//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use std::sync::Arc;

use crate::backend::{ActivityLog, BackendApi, MessageType};
use crate::middleware::MessageContext;
use crate::transport::ChatTransport;

/// Services every handler needs: backend access and a way to reply
#[derive(Clone)]
pub struct CommandContext {
    pub backend: Arc<dyn BackendApi>,
    pub transport: Arc<dyn ChatTransport>,
}

impl CommandContext {
    pub fn new(backend: Arc<dyn BackendApi>, transport: Arc<dyn ChatTransport>) -> Self {
        Self { backend, transport }
    }

    pub fn agent_address(&self) -> &str {
        self.transport.address()
    }

    /// Reply on the message's conversation
    pub async fn reply(&self, message: &MessageContext, text: &str) -> Result<()> {
        self.transport
            .send_text(&message.conversation_id, text)
            .await
    }

    /// Record the interaction with the backend. Never fails.
    pub async fn log_activity(&self, message: &MessageContext, message_type: MessageType) {
        self.backend
            .log_message_activity(ActivityLog::now(
                self.agent_address(),
                &message.sender_address,
                message_type,
            ))
            .await;
    }
}
