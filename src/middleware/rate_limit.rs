//! Rate limiting stage
//!
//! Denied senders get one fixed warning per denied message and the chain stops.

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use super::{MessageContext, Middleware, Next};
use crate::features::RateLimitStore;
use crate::transport::ChatTransport;

pub const RATE_LIMIT_WARNING: &str =
    "⏱️ You're sending messages too quickly. Please wait a moment and try again.";

pub struct RateLimitMiddleware {
    store: Arc<RateLimitStore>,
    transport: Arc<dyn ChatTransport>,
}

impl RateLimitMiddleware {
    pub fn new(store: Arc<RateLimitStore>, transport: Arc<dyn ChatTransport>) -> Self {
        Self { store, transport }
    }
}

#[async_trait]
impl Middleware for RateLimitMiddleware {
    fn name(&self) -> &'static str {
        "rate_limit"
    }

    async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()> {
        if !self.store.check(&ctx.sender_address).is_allowed() {
            warn!("Rate limit exceeded for {}", ctx.sender_address);
            self.transport
                .send_text(&ctx.conversation_id, RATE_LIMIT_WARNING)
                .await?;
            return Ok(());
        }

        next.run(ctx).await
    }
}
