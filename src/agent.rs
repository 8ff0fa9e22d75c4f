//! # Voltz Agent
//!
//! Per-message pipeline: middleware chain, a welcome for new conversations, then command
//! routing. Nothing that goes wrong with one message is fatal; the sender gets an
//! apology and the agent keeps serving.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use dashmap::DashMap;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::backend::BackendApi;
use crate::commands::{CommandContext, CommandIntent, CommandRouter, WelcomeHandler, GENERIC_APOLOGY};
use crate::features::RateLimitStore;
use crate::middleware::{ChainOutcome, MessageContext, MiddlewareChain};
use crate::transport::{ChatTransport, InboundMessage};

/// Conversations idle this long are forgotten and greeted again on their next message
pub const CONVERSATION_IDLE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Passed the chain and was answered by a command handler
    Routed(CommandIntent),
    /// A middleware stage stopped processing
    Halted,
    /// Chain or routing failed; the sender got a generic apology
    Failed,
}

pub struct VoltzAgent {
    chain: MiddlewareChain,
    router: CommandRouter,
    welcome: WelcomeHandler,
    /// Conversation id to the time of its last routed message
    seen_conversations: DashMap<String, Instant>,
    rate_limits: Arc<RateLimitStore>,
}

impl VoltzAgent {
    /// Build the agent with the standard middleware chain and every built-in handler
    pub fn new(
        backend: Arc<dyn BackendApi>,
        transport: Arc<dyn ChatTransport>,
        rate_limits: Arc<RateLimitStore>,
    ) -> Self {
        let chain = MiddlewareChain::standard(
            Arc::clone(&rate_limits),
            Arc::clone(&backend),
            Arc::clone(&transport),
        );
        let context = Arc::new(CommandContext::new(backend, transport));

        info!("⚙️  Middleware configured: {}", chain.stage_names().join(" → "));

        VoltzAgent {
            chain,
            router: CommandRouter::with_default_handlers(context),
            welcome: WelcomeHandler,
            seen_conversations: DashMap::new(),
            rate_limits,
        }
    }

    pub fn address(&self) -> &str {
        self.router.context().agent_address()
    }

    pub fn rate_limits(&self) -> &Arc<RateLimitStore> {
        &self.rate_limits
    }

    pub async fn handle_message(&self, message: InboundMessage) -> MessageOutcome {
        let mut ctx = MessageContext::from(message);

        let outcome = match self.chain.run(&mut ctx).await {
            Ok(ChainOutcome::Halted) => return MessageOutcome::Halted,
            Ok(ChainOutcome::Completed) => self.respond(&ctx).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(intent) => MessageOutcome::Routed(intent),
            Err(e) => {
                error!("Error processing message from {}: {e}", ctx.sender_address);
                if let Err(send_err) = self.router.context().reply(&ctx, GENERIC_APOLOGY).await {
                    error!("Failed to send error message: {send_err}");
                }
                MessageOutcome::Failed
            }
        }
    }

    async fn respond(&self, ctx: &MessageContext) -> anyhow::Result<CommandIntent> {
        let first_seen = self
            .seen_conversations
            .insert(ctx.conversation_id.clone(), Instant::now())
            .is_none();
        if first_seen {
            info!("💬 New conversation with {}", ctx.sender_address);
            if let Err(e) = self.welcome.greet(self.router.context(), ctx).await {
                error!("Failed to send welcome message: {e}");
            }
        }

        self.router.route(ctx).await
    }

    /// Forget conversations idle for longer than [`CONVERSATION_IDLE_TTL`] at `now`.
    /// Returns how many were dropped.
    pub fn forget_idle_conversations(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.seen_conversations.retain(|_, last_seen| {
            let active = now.saturating_duration_since(*last_seen) <= CONVERSATION_IDLE_TTL;
            if !active {
                removed += 1;
            }
            active
        });
        removed
    }

    pub fn tracked_conversations(&self) -> usize {
        self.seen_conversations.len()
    }

    /// Spawn the periodic idle-conversation sweep. Runs until the returned handle is aborted.
    pub fn spawn_conversation_sweeper(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                let removed = self.forget_idle_conversations(Instant::now());
                if removed > 0 {
                    debug!("Forgot {removed} idle conversations");
                }
            }
        })
    }

    /// Process inbound messages in arrival order until the channel closes
    pub async fn run(&self, mut inbound: mpsc::Receiver<InboundMessage>) {
        info!("🎉 Voltz Agent is now online at {}", self.address());
        while let Some(message) = inbound.recv().await {
            self.handle_message(message).await;
        }
        info!("⏸️  Inbound stream closed, agent stopping");
    }
}
