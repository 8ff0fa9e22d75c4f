//! # Rate Limiting Feature
//!
//! Fixed window message limits per sender address.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod limiter;

pub use limiter::{
    RateLimitDecision, RateLimitEntry, RateLimitStore, DEFAULT_MAX_PER_WINDOW,
    DEFAULT_SWEEP_INTERVAL, DEFAULT_WINDOW,
};
