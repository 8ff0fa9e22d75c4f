//! # Feature: Rate Limiting
//!
//! Prevents spam with a fixed window counter per sender address. Uses DashMap so the
//! read-check-write for one sender happens under that key's shard lock, which keeps
//! `check_and_record` atomic on the multi-threaded runtime.
//!
//! The window does not slide: a sender can fit `max_per_window` messages right before a
//! reset and another `max_per_window` right after it.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Messages allowed per sender within one window
pub const DEFAULT_MAX_PER_WINDOW: u32 = 10;
/// Window length (1 minute)
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(60_000);
/// How often expired windows are swept (5 minutes)
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(300_000);

/// Counter state for one sender
#[derive(Debug, Clone, Copy)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_reset_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allow,
    Deny,
}

impl RateLimitDecision {
    pub fn is_allowed(self) -> bool {
        self == RateLimitDecision::Allow
    }
}

pub struct RateLimitStore {
    entries: DashMap<String, RateLimitEntry>,
    max_per_window: u32,
    window: Duration,
    sweep_interval: Duration,
}

impl RateLimitStore {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        RateLimitStore {
            entries: DashMap::new(),
            max_per_window,
            window,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    pub fn with_sweep_interval(mut self, sweep_interval: Duration) -> Self {
        self.sweep_interval = sweep_interval;
        self
    }

    pub fn max_per_window(&self) -> u32 {
        self.max_per_window
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a message from `subject_key` at `now` and decide whether it may proceed.
    ///
    /// A denied message leaves the entry untouched, so denial never extends the window.
    pub fn check_and_record(&self, subject_key: &str, now: Instant) -> RateLimitDecision {
        let fresh = RateLimitEntry {
            count: 1,
            window_reset_at: now + self.window,
        };

        match self.entries.entry(subject_key.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(fresh);
                RateLimitDecision::Allow
            }
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if now > entry.window_reset_at {
                    *entry = fresh;
                    RateLimitDecision::Allow
                } else if entry.count >= self.max_per_window {
                    RateLimitDecision::Deny
                } else {
                    entry.count += 1;
                    RateLimitDecision::Allow
                }
            }
        }
    }

    /// Check against the current time
    pub fn check(&self, subject_key: &str) -> RateLimitDecision {
        self.check_and_record(subject_key, Instant::now())
    }

    /// Drop every entry whose window expired before `now`. Returns how many were removed.
    pub fn sweep(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let live = entry.window_reset_at >= now;
            if !live {
                removed += 1;
            }
            live
        });
        removed
    }

    /// Current entry for a sender, if any
    pub fn entry(&self, subject_key: &str) -> Option<RateLimitEntry> {
        self.entries.get(subject_key).map(|e| *e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spawn the periodic sweep. Runs until the returned handle is aborted.
    pub fn spawn_sweeper(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.sweep_interval);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let removed = self.sweep(Instant::now());
                if removed > 0 {
                    debug!("Rate limit sweep removed {removed} expired entries");
                }
            }
        })
    }
}

impl Default for RateLimitStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_WINDOW, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENDER: &str = "0xAAA";

    #[test]
    fn test_allows_up_to_limit() {
        let store = RateLimitStore::default();
        let t0 = Instant::now();

        for _ in 0..10 {
            assert_eq!(store.check_and_record(SENDER, t0), RateLimitDecision::Allow);
        }
        assert_eq!(store.entry(SENDER).map(|e| e.count), Some(10));
    }

    #[test]
    fn test_denies_over_limit_without_mutation() {
        let store = RateLimitStore::default();
        let t0 = Instant::now();

        for _ in 0..10 {
            store.check_and_record(SENDER, t0);
        }
        let before = store.entry(SENDER).unwrap();

        assert_eq!(store.check_and_record(SENDER, t0), RateLimitDecision::Deny);
        assert_eq!(
            store.check_and_record(SENDER, t0 + Duration::from_millis(59_000)),
            RateLimitDecision::Deny
        );

        let after = store.entry(SENDER).unwrap();
        assert_eq!(after.count, 10);
        assert_eq!(after.window_reset_at, before.window_reset_at);
    }

    #[test]
    fn test_fresh_window_after_reset() {
        let store = RateLimitStore::default();
        let t0 = Instant::now();

        for _ in 0..10 {
            assert!(store.check_and_record(SENDER, t0).is_allowed());
        }
        assert!(!store.check_and_record(SENDER, t0).is_allowed());

        let t1 = t0 + Duration::from_millis(61_000);
        assert_eq!(store.check_and_record(SENDER, t1), RateLimitDecision::Allow);

        let entry = store.entry(SENDER).unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.window_reset_at, t1 + DEFAULT_WINDOW);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let store = RateLimitStore::new(1, Duration::from_millis(100));
        let t0 = Instant::now();

        assert!(store.check_and_record(SENDER, t0).is_allowed());
        // now == window_reset_at is still inside the window
        assert!(!store
            .check_and_record(SENDER, t0 + Duration::from_millis(100))
            .is_allowed());
        assert!(store
            .check_and_record(SENDER, t0 + Duration::from_millis(101))
            .is_allowed());
    }

    #[test]
    fn test_boundary_doubling_is_accepted() {
        let store = RateLimitStore::new(2, Duration::from_millis(1_000));
        let t0 = Instant::now();

        let late = t0 + Duration::from_millis(999);
        let early_next = t0 + Duration::from_millis(1_001);

        assert!(store.check_and_record(SENDER, t0).is_allowed());
        assert!(store.check_and_record(SENDER, late).is_allowed());
        assert!(store.check_and_record(SENDER, early_next).is_allowed());
        assert!(store.check_and_record(SENDER, early_next).is_allowed());
        assert!(!store.check_and_record(SENDER, early_next).is_allowed());
    }

    #[test]
    fn test_per_sender_isolation() {
        let store = RateLimitStore::new(1, Duration::from_secs(1));
        let t0 = Instant::now();

        assert!(store.check_and_record("user1", t0).is_allowed());
        assert!(store.check_and_record("user2", t0).is_allowed());
        assert!(!store.check_and_record("user1", t0).is_allowed());
        assert!(!store.check_and_record("user2", t0).is_allowed());
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let store = RateLimitStore::new(10, Duration::from_millis(1_000));
        let t0 = Instant::now();

        store.check_and_record("old", t0);
        store.check_and_record("new", t0 + Duration::from_millis(5_000));

        let removed = store.sweep(t0 + Duration::from_millis(2_000));
        assert_eq!(removed, 1);
        assert!(store.entry("old").is_none());
        assert!(store.entry("new").is_some());

        // Expiry exactly at now is kept
        let removed = store.sweep(t0 + Duration::from_millis(6_000));
        assert_eq!(removed, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sweep_count_ignores_concurrent_inserts() {
        let store = RateLimitStore::new(10, Duration::from_millis(1_000));
        let t0 = Instant::now();
        for i in 0..200 {
            store.check_and_record(&format!("old-{i}"), t0);
        }
        let sweep_at = t0 + Duration::from_millis(2_000);

        let removed = std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..200 {
                    store.check_and_record(&format!("new-{i}"), sweep_at);
                }
            });
            store.sweep(sweep_at)
        });

        assert_eq!(removed, 200);
        assert_eq!(store.len(), 200);
    }

    #[test]
    fn test_sweep_does_not_change_decisions() {
        let store = RateLimitStore::new(1, Duration::from_millis(1_000));
        let t0 = Instant::now();

        assert!(store.check_and_record(SENDER, t0).is_allowed());
        store.sweep(t0 + Duration::from_millis(500));
        assert!(!store
            .check_and_record(SENDER, t0 + Duration::from_millis(600))
            .is_allowed());

        let later = t0 + Duration::from_millis(2_000);
        store.sweep(later);
        assert!(store.is_empty());
        assert!(store.check_and_record(SENDER, later).is_allowed());
    }

    #[tokio::test]
    async fn test_sweeper_task_clears_expired_entries() {
        let store = Arc::new(
            RateLimitStore::new(5, Duration::from_millis(10))
                .with_sweep_interval(Duration::from_millis(20)),
        );
        store.check(SENDER);
        assert_eq!(store.len(), 1);

        let handle = Arc::clone(&store).spawn_sweeper();
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert!(store.is_empty());
    }
}
