//! Per-address submission limiting.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::RateLimitConfig;

/// Admission decisions keyed by client identifier.
///
/// Implementations must make the read-increment-check sequence atomic
/// per client: requests for the same address race across worker threads.
pub trait RateLimitStore: Send + Sync {
    /// Record one request from `client_id` and decide whether it is
    /// within the allowance.
    fn admit(&self, client_id: &str) -> bool;

    /// Drop state that can no longer affect a decision.
    fn prune(&self) {}
}

struct WindowEntry {
    count: u32,
    window_start: Instant,
}

/// Fixed-window counter store.
///
/// The window starts at the first request from an address and resets
/// once it has fully elapsed; the count within a window is capped. The
/// sharded map keeps one entry per address, updated under that entry's
/// lock.
pub struct FixedWindowLimiter {
    entries: DashMap<String, WindowEntry>,
    window: Duration,
    max_requests: u32,
}

impl FixedWindowLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            entries: DashMap::new(),
            window,
            max_requests,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(Duration::from_secs(config.window_secs), config.max_requests)
    }

    /// Length of one window; also the sweep interval.
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl RateLimitStore for FixedWindowLimiter {
    fn admit(&self, client_id: &str) -> bool {
        let now = Instant::now();
        let mut entry = self
            .entries
            .entry(client_id.to_string())
            .or_insert(WindowEntry {
                count: 0,
                window_start: now,
            });

        if now.duration_since(entry.window_start) >= self.window {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;
        entry.count <= self.max_requests
    }

    fn prune(&self) {
        let now = Instant::now();
        let window = self.window;
        self.entries
            .retain(|_, entry| now.duration_since(entry.window_start) < window);
    }
}
