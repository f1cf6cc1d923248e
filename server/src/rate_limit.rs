use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy)]
struct Window {
    index: u64,
    count: u32,
}

/// Fixed-window request counter keyed by client address.
///
/// Process-local and reset on restart, which is fine at this traffic level.
/// Held in shared state rather than a global so it can be swapped for a
/// distributed counter without touching the handlers.
pub struct RateLimiter {
    started: Instant,
    window: Duration,
    max: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max: u32) -> Self {
        Self {
            started: Instant::now(),
            window,
            max,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request for `key` and report whether it is allowed.
    pub async fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now()).await
    }

    async fn allow_at(&self, key: &str, now: Instant) -> bool {
        let index = (now.duration_since(self.started).as_millis()
            / self.window.as_millis().max(1)) as u64;

        let mut lock = self.windows.lock().await;
        let window = lock.entry(key.to_string()).or_insert(Window { index, count: 0 });

        if window.index != index {
            window.index = index;
            window.count = 0;
        }

        if window.count >= self.max {
            return false;
        }

        window.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allows_up_to_max() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 3);

        for _ in 0..3 {
            assert!(limiter.allow("1.2.3.4").await);
        }
        assert!(!limiter.allow("1.2.3.4").await);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 1);

        assert!(limiter.allow("1.2.3.4").await);
        assert!(!limiter.allow("1.2.3.4").await);
        assert!(limiter.allow("5.6.7.8").await);
    }

    #[tokio::test]
    async fn test_window_resets_count() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 1);
        let start = limiter.started;

        assert!(limiter.allow_at("1.2.3.4", start).await);
        assert!(!limiter.allow_at("1.2.3.4", start + Duration::from_secs(59)).await);
        assert!(limiter.allow_at("1.2.3.4", start + Duration::from_secs(61)).await);
    }
}
