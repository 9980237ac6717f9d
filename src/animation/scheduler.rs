//! Timer abstraction so the controller can be paced by real time in
//! production and driven instantly in tests.

use std::time::Duration;

use async_trait::async_trait;

/// Cooperative delay source for the animation sequence.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Production scheduler backed by tokio timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Scheduler that never waits; every delay completes immediately.
///
/// Keeps the controller's suspension points (each `sleep` still yields) while
/// making full runs instantaneous and deterministic.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct InstantScheduler {
    sleeps: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "mock"))]
impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delays the controller has requested so far.
    pub fn sleep_count(&self) -> usize {
        self.sleeps.load(std::sync::atomic::Ordering::Acquire)
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl Scheduler for InstantScheduler {
    async fn sleep(&self, _duration: Duration) {
        self.sleeps
            .fetch_add(1, std::sync::atomic::Ordering::AcqRel);
        tokio::task::yield_now().await;
    }
}
