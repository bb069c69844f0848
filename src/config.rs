//! Sampler configuration parameters
//!
//! Debounce and hold windows are counted in poll ticks, so their wall-clock
//! length scales with `poll_interval_ms`.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Consecutive identical samples required before a state change is accepted
    pub debounce_threshold: u8,
    /// Consecutive active samples after which a press is reported as held
    pub hold_threshold: u16,
    /// Polling cadence (milliseconds)
    pub poll_interval_ms: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            debounce_threshold: 3,
            hold_threshold: 20,
            poll_interval_ms: 20, // 50 Hz
        }
    }
}

impl SamplerConfig {
    /// Reject settings that would make the state machine meaningless.
    /// Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_threshold == 0 {
            return Err(Error::Config("debounce_threshold must be at least 1"));
        }
        if self.hold_threshold <= u16::from(self.debounce_threshold) {
            return Err(Error::Config("hold_threshold must exceed debounce_threshold"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    /// Time a switch must be stable before a press registers.
    pub fn debounce_window(&self) -> Duration {
        self.poll_interval() * u32::from(self.debounce_threshold)
    }

    /// Time a switch must stay active before it is reported as held.
    pub fn hold_window(&self) -> Duration {
        self.poll_interval() * u32::from(self.hold_threshold)
    }
}
