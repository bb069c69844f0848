//! Inbound commands to the poller.
//!
//! Actions requested from outside the poll loop (console, scenario replay)
//! that the [`SwitchPoller`](super::service::SwitchPoller) applies between
//! ticks.

use crate::channel::{ChannelId, Polarity, Pull};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    /// Add a channel to the poll set.
    Register {
        channel: ChannelId,
        polarity: Polarity,
        pull: Pull,
    },

    /// Remove a channel from the poll set.
    Deregister(ChannelId),

    /// Forget a channel's debounce history.
    Reset(ChannelId),

    /// Forget every channel's debounce history.
    ResetAll,
}
