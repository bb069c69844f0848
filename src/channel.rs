//! Input channel model: pin id, electrical polarity and pull configuration.
//!
//! ## Polarity vs pull
//!
//! | Pull       | Resting level | Conventional polarity |
//! |------------|---------------|-----------------------|
//! | `PullUp`   | high          | `ActiveLow`           |
//! | `PullDown` | low           | `ActiveHigh`          |
//! | `None`     | floating      | `ActiveHigh`          |
//!
//! Polarity alone decides what a raw level *means*; pull only describes
//! where the line sits when nothing drives it.

use serde::{Deserialize, Serialize};

/// Pin / channel identifier (one bit of a 16-bit IO bank on the scripted source).
pub type ChannelId = u8;

/// Mapping between raw electrical level and logical "active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Raw low = active (switch to ground, pulled up).
    ActiveLow,
    /// Raw high = active.
    ActiveHigh,
}

impl Polarity {
    /// Conventional polarity for a switch wired against the given pull.
    pub const fn for_pull(pull: Pull) -> Self {
        match pull {
            Pull::PullUp => Self::ActiveLow,
            Pull::PullDown | Pull::None => Self::ActiveHigh,
        }
    }

    /// Normalize a raw level to "active".
    pub const fn is_active(self, raw_high: bool) -> bool {
        match self {
            Self::ActiveLow => !raw_high,
            Self::ActiveHigh => raw_high,
        }
    }
}

/// Pull resistor configuration of the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pull {
    PullUp,
    PullDown,
    None,
}

impl Pull {
    /// Level the line rests at when undriven, if defined.
    pub const fn resting_level(self) -> Option<bool> {
        match self {
            Self::PullUp => Some(true),
            Self::PullDown => Some(false),
            Self::None => None,
        }
    }
}

/// One registered input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputChannel {
    pub id: ChannelId,
    pub polarity: Polarity,
    pub pull: Pull,
}

impl InputChannel {
    pub const fn new(id: ChannelId, polarity: Polarity, pull: Pull) -> Self {
        Self { id, polarity, pull }
    }

    /// Switch wired to ground with a pull-up (the common push-button case).
    pub const fn pulled_up(id: ChannelId) -> Self {
        Self::new(id, Polarity::ActiveLow, Pull::PullUp)
    }

    /// Whether the undriven line reads as active. A switch wired against its
    /// own pull reads inactive at rest.
    pub fn idles_active(&self) -> bool {
        self.pull
            .resting_level()
            .is_some_and(|level| self.polarity.is_active(level))
    }
}
