use std::env;
use std::time::Duration;

use super::error::{AnimationError, AnimationResult};

/// Default pause between row scans.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 3900;
/// Default delay before the reference images return to their slots.
pub const DEFAULT_RESET_DELAY_MS: u64 = 1500;
/// Default delay before the scanned row is collapsed.
pub const DEFAULT_COLLAPSE_DELAY_MS: u64 = 2000;
/// Default pause between the final collapse and the ranking reveal.
pub const DEFAULT_RANK_DELAY_MS: u64 = 1000;
/// Default pause between the ranking reveal and restart readiness.
pub const DEFAULT_RESTART_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pacing configuration for the animation sequence.
///
/// Within one tick: scan at 0, reference reset at `reset_delay`, row collapse
/// at `collapse_delay`, next scan at `tick_interval`.
pub struct AnimationConfig {
    /// Period between row scans.
    pub tick_interval: Duration,
    /// Offset into the tick at which the reference images reset.
    pub reset_delay: Duration,
    /// Offset into the tick at which the scanned row collapses.
    pub collapse_delay: Duration,
    /// Pause after the final collapse before ranking.
    pub rank_delay: Duration,
    /// Pause after ranking before restart readiness.
    pub restart_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
            collapse_delay: Duration::from_millis(DEFAULT_COLLAPSE_DELAY_MS),
            rank_delay: Duration::from_millis(DEFAULT_RANK_DELAY_MS),
            restart_delay: Duration::from_millis(DEFAULT_RESTART_DELAY_MS),
        }
    }
}

impl AnimationConfig {
    const ENV_TICK_MS: &'static str = "VISMATCH_TICK_MS";
    const ENV_RESET_MS: &'static str = "VISMATCH_RESET_MS";
    const ENV_COLLAPSE_MS: &'static str = "VISMATCH_COLLAPSE_MS";
    const ENV_RANK_MS: &'static str = "VISMATCH_RANK_MS";
    const ENV_RESTART_MS: &'static str = "VISMATCH_RESTART_MS";

    /// Loads pacing from environment variables (with defaults).
    pub fn from_env() -> AnimationResult<Self> {
        let defaults = Self::default();
        let config = Self {
            tick_interval: parse_ms_from_env(Self::ENV_TICK_MS, defaults.tick_interval),
            reset_delay: parse_ms_from_env(Self::ENV_RESET_MS, defaults.reset_delay),
            collapse_delay: parse_ms_from_env(Self::ENV_COLLAPSE_MS, defaults.collapse_delay),
            rank_delay: parse_ms_from_env(Self::ENV_RANK_MS, defaults.rank_delay),
            restart_delay: parse_ms_from_env(Self::ENV_RESTART_MS, defaults.restart_delay),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the staged offsets fit inside one tick.
    pub fn validate(&self) -> AnimationResult<()> {
        if self.reset_delay > self.collapse_delay || self.collapse_delay > self.tick_interval {
            return Err(AnimationError::InvalidPacing {
                reset_ms: self.reset_delay.as_millis() as u64,
                collapse_ms: self.collapse_delay.as_millis() as u64,
                tick_ms: self.tick_interval.as_millis() as u64,
            });
        }
        Ok(())
    }

    /// All delays zeroed, for deterministic tests.
    #[cfg(any(test, feature = "mock"))]
    pub fn for_testing() -> Self {
        Self {
            tick_interval: Duration::ZERO,
            reset_delay: Duration::ZERO,
            collapse_delay: Duration::ZERO,
            rank_delay: Duration::ZERO,
            restart_delay: Duration::ZERO,
        }
    }
}

fn parse_ms_from_env(var_name: &str, default: Duration) -> Duration {
    env::var(var_name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
