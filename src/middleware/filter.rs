//! Content filter stage: drops the agent's own messages and empty messages silently.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::{MessageContext, Middleware, Next};
use crate::core::same_address;

pub struct FilterMiddleware {
    own_address: String,
}

impl FilterMiddleware {
    pub fn new(own_address: String) -> Self {
        Self { own_address }
    }
}

#[async_trait]
impl Middleware for FilterMiddleware {
    fn name(&self) -> &'static str {
        "filter"
    }

    async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()> {
        if same_address(&ctx.sender_address, &self.own_address) {
            debug!("Ignoring message from self");
            return Ok(());
        }

        if ctx.content.is_empty() {
            debug!("Ignoring empty message from {}", ctx.sender_address);
            return Ok(());
        }

        next.run(ctx).await
    }
}
