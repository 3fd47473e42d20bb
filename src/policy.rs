//! Shrink tuning for the directory and the segment pool.
//!
//! The defaults reproduce the long-standing behaviour: the directory halves once
//! fewer than ~42% of its slots are in use, and the pool trims itself down to a
//! fifth of the live segment count once it holds more than ~83% of it.
//!
//! Policies are plain data and can be loaded from any serde format:
//!
//! ```rust
//! use segdeque::ShrinkPolicy;
//!
//! let policy: ShrinkPolicy = serde_json::from_str(r#"{ "directory_slack": 3.0 }"#).unwrap();
//! assert_eq!(policy.directory_slack, 3.0);
//! assert_eq!(policy.pool_retain_divisor, 5);
//! policy.validate().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Hysteresis knobs used when segments are released.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShrinkPolicy {
    /// The directory halves when `segments * directory_slack < capacity`.
    ///
    /// Must be at least 2.0 so a halved directory is never immediately regrown.
    pub directory_slack: f64,
    /// The pool trims when `pooled * pool_trigger > segments`.
    pub pool_trigger: f64,
    /// After trimming, the pool keeps `segments / pool_retain_divisor` segments.
    pub pool_retain_divisor: usize,
}

impl ShrinkPolicy {
    /// Directory slack used by [`ShrinkPolicy::default`].
    pub const DEFAULT_DIRECTORY_SLACK: f64 = 2.4;
    /// Pool trigger used by [`ShrinkPolicy::default`].
    pub const DEFAULT_POOL_TRIGGER: f64 = 1.2;
    /// Pool retain divisor used by [`ShrinkPolicy::default`].
    pub const DEFAULT_POOL_RETAIN_DIVISOR: usize = 5;

    /// Returns the default policy.
    pub const fn new() -> Self {
        Self {
            directory_slack: Self::DEFAULT_DIRECTORY_SLACK,
            pool_trigger: Self::DEFAULT_POOL_TRIGGER,
            pool_retain_divisor: Self::DEFAULT_POOL_RETAIN_DIVISOR,
        }
    }

    /// Checks that every knob is in its accepted range.
    ///
    /// # Errors
    /// Returns the first offending field as a [`PolicyError`].
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.directory_slack.is_finite() || self.directory_slack < 2.0 {
            return Err(PolicyError::DirectorySlack(self.directory_slack));
        }
        if !self.pool_trigger.is_finite() || self.pool_trigger <= 0.0 {
            return Err(PolicyError::PoolTrigger(self.pool_trigger));
        }
        if self.pool_retain_divisor == 0 {
            return Err(PolicyError::PoolRetainDivisor);
        }
        Ok(())
    }

    /// Whether a directory of `capacity` slots holding `segments` should halve.
    #[inline]
    pub(crate) fn should_shrink_directory(&self, segments: usize, capacity: usize) -> bool {
        (segments as f64) * self.directory_slack < capacity as f64 && capacity / 2 > segments
    }

    /// Whether a pool of `pooled` spare segments is oversized for `segments` live ones.
    #[inline]
    pub(crate) fn should_trim_pool(&self, pooled: usize, segments: usize) -> bool {
        (pooled as f64) * self.pool_trigger > segments as f64
    }

    /// How many spare segments survive a pool trim.
    #[inline]
    pub(crate) fn pool_retain(&self, segments: usize) -> usize {
        segments / self.pool_retain_divisor
    }
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        Self::new()
    }
}
