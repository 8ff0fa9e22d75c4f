// Core layer - configuration, wallet identity, reply helpers
pub mod core;

// Features layer - rate limiting
pub mod features;

// Backend API access
pub mod backend;

// Chat transports
pub mod transport;

// Message pipeline
pub mod middleware;

// Command routing and handlers
pub mod commands;

// Application layer
pub mod agent;

pub use agent::{MessageOutcome, VoltzAgent};
pub use backend::{BackendApi, BackendGateway};
pub use commands::{CommandIntent, CommandRouter};
pub use crate::core::{AgentWallet, Config};
pub use features::{RateLimitDecision, RateLimitStore};
pub use middleware::{ChainOutcome, MessageContext, Middleware, MiddlewareChain};
pub use transport::{ChatTransport, ConsoleTransport, InboundMessage, MemoryTransport};
