//! # Features Layer
//!
//! Self-contained agent features.

pub mod rate_limiting;

pub use rate_limiting::{RateLimitDecision, RateLimitStore, DEFAULT_SWEEP_INTERVAL};
