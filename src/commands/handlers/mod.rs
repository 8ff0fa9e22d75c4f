//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod events;
pub mod fallback;
pub mod help;
pub mod matches;
pub mod profile;
pub mod welcome;

use std::sync::Arc;

use super::handler::CommandHandler;

pub use welcome::WelcomeHandler;

/// Create all routed command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn CommandHandler>> {
    vec![
        Arc::new(help::HelpHandler),
        Arc::new(profile::ProfileHandler),
        Arc::new(matches::MatchesHandler),
        Arc::new(events::EventsHandler),
        Arc::new(fallback::FallbackHandler),
    ]
}
