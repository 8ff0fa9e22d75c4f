//! # Middleware Chain
//!
//! Ordered message-processing stages that run before command routing. Each stage gets
//! the message context and a [`Next`] continuation. Calling `next.run(ctx)` continues the
//! chain; returning without calling it halts processing for that message with no reply
//! and no error.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Logging, rate limiting, filtering and profile lookup stages

pub mod auth;
pub mod filter;
pub mod logging;
pub mod rate_limit;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::backend::{BackendApi, Profile};
use crate::features::RateLimitStore;
use crate::transport::{ChatTransport, InboundMessage};

pub use auth::AuthMiddleware;
pub use filter::FilterMiddleware;
pub use logging::LoggingMiddleware;
pub use rate_limit::{RateLimitMiddleware, RATE_LIMIT_WARNING};

/// Per-message state carried through the chain
#[derive(Debug, Clone)]
pub struct MessageContext {
    pub sender_address: String,
    pub content: String,
    pub conversation_id: String,
    /// Filled by the auth stage when the sender has a profile
    pub user_profile: Option<Profile>,
}

impl From<InboundMessage> for MessageContext {
    fn from(msg: InboundMessage) -> Self {
        MessageContext {
            sender_address: msg.sender_address,
            content: msg.content,
            conversation_id: msg.conversation_id,
            user_profile: None,
        }
    }
}

/// One stage of the chain
#[async_trait]
pub trait Middleware: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()>;
}

/// Continuation into the remaining stages
pub struct Next<'a> {
    stages: &'a [Arc<dyn Middleware>],
    reached_end: &'a mut bool,
}

impl<'a> Next<'a> {
    pub async fn run(self, ctx: &mut MessageContext) -> Result<()> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                stage
                    .handle(
                        ctx,
                        Next {
                            stages: rest,
                            reached_end: self.reached_end,
                        },
                    )
                    .await
            }
            None => {
                *self.reached_end = true;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Every stage called `next`; the message goes on to routing
    Completed,
    /// A stage stopped the chain
    Halted,
}

#[derive(Clone, Default)]
pub struct MiddlewareChain {
    stages: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// logging → rate limiting → content filtering → authentication
    pub fn standard(
        rate_limits: Arc<RateLimitStore>,
        backend: Arc<dyn BackendApi>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        let own_address = transport.address().to_string();
        Self::new()
            .with(Arc::new(LoggingMiddleware))
            .with(Arc::new(RateLimitMiddleware::new(rate_limits, transport)))
            .with(Arc::new(FilterMiddleware::new(own_address)))
            .with(Arc::new(AuthMiddleware::new(backend)))
    }

    pub fn with(mut self, stage: Arc<dyn Middleware>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub async fn run(&self, ctx: &mut MessageContext) -> Result<ChainOutcome> {
        let mut reached_end = false;
        Next {
            stages: &self.stages,
            reached_end: &mut reached_end,
        }
        .run(ctx)
        .await?;

        Ok(if reached_end {
            ChainOutcome::Completed
        } else {
            ChainOutcome::Halted
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::transport::MemoryTransport;
    use std::sync::Mutex;

    const AGENT: &str = "0xagent";

    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        proceed: bool,
    }

    #[async_trait]
    impl Middleware for Recorder {
        fn name(&self) -> &'static str {
            self.label
        }

        async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()> {
            self.log.lock().unwrap().push(format!("enter {}", self.label));
            if self.proceed {
                next.run(ctx).await?;
            }
            self.log.lock().unwrap().push(format!("exit {}", self.label));
            Ok(())
        }
    }

    fn ctx(sender: &str, content: &str) -> MessageContext {
        InboundMessage::new(sender, content, "conv-1").into()
    }

    #[tokio::test]
    async fn test_stages_run_in_order_and_complete() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = MiddlewareChain::new()
            .with(Arc::new(Recorder { label: "a", log: log.clone(), proceed: true }))
            .with(Arc::new(Recorder { label: "b", log: log.clone(), proceed: true }));

        let outcome = chain.run(&mut ctx("0xAAA", "hi")).await.unwrap();

        assert_eq!(outcome, ChainOutcome::Completed);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["enter a", "enter b", "exit b", "exit a"]
        );
    }

    #[tokio::test]
    async fn test_stage_not_calling_next_halts() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = MiddlewareChain::new()
            .with(Arc::new(Recorder { label: "stop", log: log.clone(), proceed: false }))
            .with(Arc::new(Recorder { label: "never", log: log.clone(), proceed: true }));

        let outcome = chain.run(&mut ctx("0xAAA", "hi")).await.unwrap();

        assert_eq!(outcome, ChainOutcome::Halted);
        assert_eq!(*log.lock().unwrap(), vec!["enter stop", "exit stop"]);
    }

    #[tokio::test]
    async fn test_empty_chain_completes() {
        let outcome = MiddlewareChain::new()
            .run(&mut ctx("0xAAA", "hi"))
            .await
            .unwrap();
        assert_eq!(outcome, ChainOutcome::Completed);
    }

    #[tokio::test]
    async fn test_standard_chain_order() {
        let transport = Arc::new(MemoryTransport::new(AGENT));
        let chain = MiddlewareChain::standard(
            Arc::new(RateLimitStore::default()),
            Arc::new(MockBackend::default()),
            transport,
        );
        assert_eq!(
            chain.stage_names(),
            vec!["logging", "rate_limit", "filter", "auth"]
        );
    }

    #[tokio::test]
    async fn test_standard_chain_rate_limits_then_filters() {
        let transport = Arc::new(MemoryTransport::new(AGENT));
        let backend = Arc::new(MockBackend::default());
        let chain = MiddlewareChain::standard(
            Arc::new(RateLimitStore::new(2, std::time::Duration::from_secs(60))),
            backend.clone(),
            transport.clone(),
        );

        assert_eq!(
            chain.run(&mut ctx("0xAAA", "help")).await.unwrap(),
            ChainOutcome::Completed
        );
        // Empty content still counts against the limit, then is filtered silently
        assert_eq!(
            chain.run(&mut ctx("0xAAA", "")).await.unwrap(),
            ChainOutcome::Halted
        );
        assert!(transport.sent().is_empty());

        assert_eq!(
            chain.run(&mut ctx("0xAAA", "help")).await.unwrap(),
            ChainOutcome::Halted
        );
        assert_eq!(transport.sent_texts(), vec![RATE_LIMIT_WARNING]);

        // Auth ran only for the message that got through
        assert_eq!(backend.profile_lookups.lock().unwrap().len(), 1);
    }
}
