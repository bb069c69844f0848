//! Port traits — the boundary between the debounce core and the outside world.
//!
//! ```text
//!   SampleSource ──▶ SwitchPoller (domain) ──▶ EventSink
//! ```
//!
//! A scripted IO bank and an `embedded-hal` pin reader both implement
//! [`SampleSource`]; the poller consumes either through generics and never
//! touches hardware directly.

use crate::channel::ChannelId;
use crate::error::SourceError;

use super::events::SwitchEvent;

// ───────────────────────────────────────────────────────────────
// Sample source (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Produces raw levels, one step at a time.
///
/// A poll syncs the device before reading it: `sample` returns the level of
/// the step the next [`advance`](Self::advance) will commit, and `advance`
/// is only called once every channel has been read. Until then `sample`
/// must return the same level for the same channel however often it is
/// called, so a failed read leaves the source where it was.
pub trait SampleSource {
    /// Raw electrical level of `channel` on the upcoming step (`true` = high).
    fn sample(&mut self, channel: ChannelId) -> Result<bool, SourceError>;

    /// Commit the upcoming step. Real hardware has nothing to do here.
    fn advance(&mut self) {}
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn sample(&mut self, channel: ChannelId) -> Result<bool, SourceError> {
        (**self).sample(channel)
    }

    fn advance(&mut self) {
        (**self).advance();
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / consumers)
// ───────────────────────────────────────────────────────────────

/// The poller emits one [`SwitchEvent`] per debounced transition through
/// this port. Adapters decide where it goes.
pub trait EventSink {
    fn emit(&mut self, event: &SwitchEvent);
}

/// Sink that drops everything, for callers that only poll `is_pressed`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &SwitchEvent) {}
}
