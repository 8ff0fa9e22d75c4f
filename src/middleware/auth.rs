//! Authentication stage
//!
//! Advisory only: looks up the sender's profile and attaches it to the context, but
//! senders without a profile still proceed.

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use super::{MessageContext, Middleware, Next};
use crate::backend::BackendApi;

pub struct AuthMiddleware {
    backend: Arc<dyn BackendApi>,
}

impl AuthMiddleware {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Middleware for AuthMiddleware {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()> {
        ctx.user_profile = self.backend.get_user_profile(&ctx.sender_address).await;
        if ctx.user_profile.is_none() {
            warn!("No profile found for {}", ctx.sender_address);
        }

        next.run(ctx).await
    }
}
