//! # Core Module
//!
//! Configuration, wallet identity and shared text utilities for the agent.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod response;
pub mod wallet;

// Re-export commonly used items
pub use config::{ApiSettings, Config};
pub use response::{join_limited, normalize_command_text, take_preview, MAX_LIST_ITEMS};
pub use wallet::{same_address, AgentWallet};
