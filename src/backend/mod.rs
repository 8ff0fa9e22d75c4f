//! # Backend Layer
//!
//! Access to the Voltz CRUD API used by middleware and command handlers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod gateway;
pub mod models;

use async_trait::async_trait;

pub use gateway::BackendGateway;
pub use models::{ActivityLog, AgentStats, Event, HealthStatus, Match, MessageType, Profile};

/// Backend operations the agent depends on
///
/// Implementations never fail: reads fall back to `None` or an empty list and
/// `log_message_activity` swallows its own errors.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn test_connection(&self) -> bool;

    async fn get_user_profile(&self, address: &str) -> Option<Profile>;

    async fn get_user_matches(&self, address: &str) -> Vec<Match>;

    async fn get_user_events(&self, address: &str) -> Vec<Event>;

    async fn get_event_details(&self, event_id: &str) -> Option<Event>;

    async fn log_message_activity(&self, activity: ActivityLog);
}
