//! Logging stage: records each message on entry and its processing time on exit.

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::time::Instant;
use uuid::Uuid;

use super::{MessageContext, Middleware, Next};

pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        info!(
            "[{request_id}] message_received from={} conversation={}",
            ctx.sender_address, ctx.conversation_id
        );

        let result = next.run(ctx).await;

        info!(
            "[{request_id}] message_processed from={} in {}ms",
            ctx.sender_address,
            start.elapsed().as_millis()
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{ChainOutcome, MiddlewareChain};
    use crate::transport::InboundMessage;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts its calls and then halts, proceeds or fails
    struct Inner {
        calls: AtomicUsize,
        proceed: bool,
        fail: bool,
    }

    impl Inner {
        fn new(proceed: bool, fail: bool) -> Arc<Self> {
            Arc::new(Inner {
                calls: AtomicUsize::new(0),
                proceed,
                fail,
            })
        }
    }

    #[async_trait]
    impl Middleware for Inner {
        fn name(&self) -> &'static str {
            "inner"
        }

        async fn handle(&self, ctx: &mut MessageContext, next: Next<'_>) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(anyhow!("inner stage failed"));
            }
            if self.proceed {
                next.run(ctx).await?;
            }
            Ok(())
        }
    }

    fn ctx() -> MessageContext {
        InboundMessage::new("0xAAA", "help", "conv").into()
    }

    #[tokio::test]
    async fn test_logging_alone_completes() {
        let chain = MiddlewareChain::new().with(Arc::new(LoggingMiddleware));
        assert_eq!(chain.run(&mut ctx()).await.unwrap(), ChainOutcome::Completed);
    }

    #[tokio::test]
    async fn test_proceeds_into_later_stage() {
        let inner = Inner::new(true, false);
        let chain = MiddlewareChain::new()
            .with(Arc::new(LoggingMiddleware))
            .with(inner.clone());

        assert_eq!(chain.run(&mut ctx()).await.unwrap(), ChainOutcome::Completed);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_later_halt_is_passed_through() {
        let inner = Inner::new(false, false);
        let chain = MiddlewareChain::new()
            .with(Arc::new(LoggingMiddleware))
            .with(inner.clone());

        assert_eq!(chain.run(&mut ctx()).await.unwrap(), ChainOutcome::Halted);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_later_error_is_returned() {
        let inner = Inner::new(true, true);
        let chain = MiddlewareChain::new()
            .with(Arc::new(LoggingMiddleware))
            .with(inner.clone());

        let err = chain.run(&mut ctx()).await.unwrap_err();
        assert!(err.to_string().contains("inner stage failed"));
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }
}
