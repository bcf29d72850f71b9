//! Token bucket rate limiter keyed by peer address.
//!
//! Claims are the brute-force surface: a keyphrase partitions the store and
//! the passcode space behind it is only 10,000 values. The limiter caps how
//! fast one peer can walk that space.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn full(capacity: u32, now: Instant) -> Self {
        Self {
            tokens: capacity as f64,
            last_refill: now,
        }
    }

    fn take(&mut self, capacity: u32, refill_per_sec: f64, now: Instant) -> bool {
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * refill_per_sec).min(capacity as f64);
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

#[derive(Clone)]
pub struct RateLimiter {
    buckets: Arc<Mutex<HashMap<String, TokenBucket>>>,
    capacity: u32,
    refill_per_sec: f64,
}

impl RateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
            capacity: requests_per_minute,
            refill_per_sec: requests_per_minute as f64 / 60.0,
        }
    }

    /// Returns whether the keyed caller may proceed, consuming one token.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut buckets = match self.buckets.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket::full(self.capacity, now))
            .take(self.capacity, self.refill_per_sec, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_up_to_capacity_then_denied() {
        let limiter = RateLimiter::new(5);
        for _ in 0..5 {
            assert!(limiter.check("10.0.0.1"));
        }
        assert!(!limiter.check("10.0.0.1"));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(1);
        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.2"));
    }

    #[test]
    fn test_tokens_refill_over_time() {
        // 6000/min = 100 tokens per second; 50ms buys back a few.
        let limiter = RateLimiter::new(6000);
        for _ in 0..6000 {
            assert!(limiter.check("10.0.0.1"));
        }
        assert!(!limiter.check("10.0.0.1"));
        std::thread::sleep(std::time::Duration::from_millis(50));
        assert!(limiter.check("10.0.0.1"));
    }
}
