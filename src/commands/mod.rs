//! # Command System
//!
//! Keyword routing of chat messages to command handlers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod context;
pub mod handler;
pub mod handlers;
pub mod intent;
pub mod registry;
pub mod router;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::{CommandHandler, GENERIC_APOLOGY};
pub use handlers::{create_all_handlers, WelcomeHandler};
pub use intent::CommandIntent;
pub use registry::CommandRegistry;
pub use router::CommandRouter;
