//! Unified error types for the switch sampler.
//!
//! A single `Error` enum that every subsystem converts into. All variants
//! are `Copy` so they pass through the poll loop without allocation.

use core::fmt;

use crate::channel::ChannelId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible sampler operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The channel id is already registered.
    InvalidChannel(ChannelId),
    /// The channel id was never registered (or has been removed).
    UnknownChannel(ChannelId),
    /// The fixed-capacity channel table is full.
    CapacityExhausted,
    /// Configuration is invalid.
    Config(&'static str),
    /// The sample source failed to produce a reading.
    Source(SourceError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel(id) => write!(f, "channel {id} already registered"),
            Self::UnknownChannel(id) => write!(f, "channel {id} not registered"),
            Self::CapacityExhausted => write!(f, "channel table full"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Source(e) => write!(f, "source: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sample source errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The underlying pin read returned an error.
    ReadFailed(ChannelId),
    /// No pin is bound to this channel id.
    Unbound(ChannelId),
    /// Scripted step index is beyond the script length.
    StepOutOfRange(usize),
    /// Pin number does not fit in a 16-bit IO bank.
    PinOutOfRange(ChannelId),
    /// Requested script length exceeds the fixed capacity.
    ScriptTooLong(usize),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(id) => write!(f, "read failed on channel {id}"),
            Self::Unbound(id) => write!(f, "no pin bound to channel {id}"),
            Self::StepOutOfRange(step) => write!(f, "step {step} out of range"),
            Self::PinOutOfRange(pin) => write!(f, "pin {pin} out of range"),
            Self::ScriptTooLong(len) => write!(f, "script of {len} steps too long"),
        }
    }
}

impl core::error::Error for SourceError {}

impl From<SourceError> for Error {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
