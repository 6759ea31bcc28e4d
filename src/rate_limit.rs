use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum-spacing limiter with a burst of one.
///
/// Admissions are at least `interval` apart. The lock is held while a caller
/// sleeps for its slot, so concurrent callers queue up in arrival order and a
/// caller that gives up (its future is dropped) does not consume a slot.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// A limiter that admits every call immediately.
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next call may proceed. Cancel-safe.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }
        let mut next_slot = self.next_slot.lock().await;
        if let Some(at) = *next_slot {
            if at > Instant::now() {
                tracing::trace!(wait_ms = (at - Instant::now()).as_millis() as u64, "rate limited");
                tokio::time::sleep_until(at).await;
            }
        }
        *next_slot = Some(Instant::now() + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_first_call_is_immediate() {
        let limiter = RateLimiter::new(Duration::from_millis(120));
        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_are_spaced_by_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(120));
        let start = Instant::now();
        for _ in 0..4 {
            limiter.acquire().await;
        }
        assert!(Instant::now() - start >= Duration::from_millis(360));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_time_is_not_banked() {
        let limiter = RateLimiter::new(Duration::from_millis(100));
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        // only one immediate admission after a long idle period
        assert!(Instant::now() - start >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_admissions_are_serialized() {
        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(50)));
        let start = Instant::now();
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move {
                    limiter.acquire().await;
                    Instant::now()
                })
            })
            .collect();

        let mut admitted = Vec::new();
        for handle in handles {
            admitted.push(handle.await.unwrap());
        }
        admitted.sort();
        for pair in admitted.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(50));
        }
        assert!(*admitted.last().unwrap() - start >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_waiter_does_not_consume_slot() {
        let limiter = RateLimiter::new(Duration::from_secs(10));
        limiter.acquire().await;

        let gave_up = tokio::time::timeout(Duration::from_secs(1), limiter.acquire()).await;
        assert!(gave_up.is_err());

        let start = Instant::now();
        limiter.acquire().await;
        assert!(Instant::now() - start <= Duration::from_secs(9));
    }

    #[tokio::test]
    async fn test_unlimited_never_waits() {
        let limiter = RateLimiter::unlimited();
        for _ in 0..1000 {
            limiter.acquire().await;
        }
        assert!(limiter.interval().is_zero());
    }
}
