//! Outbound switch events.
//!
//! The [`SwitchPoller`](super::service::SwitchPoller) emits these through
//! the [`EventSink`](super::ports::EventSink) port whenever a channel's
//! debounced state changes.

use serde::{Deserialize, Serialize};

use crate::channel::ChannelId;
use crate::debounce::SwitchTransition;

/// A debounced transition on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchEvent {
    pub channel: ChannelId,
    pub transition: SwitchTransition,
    /// Poll tick (zero-based) on which the transition was confirmed.
    pub tick: u64,
}

impl SwitchEvent {
    /// `(channel, held_down)` in the shape of a classic press callback.
    /// Releases yield `None`.
    pub fn as_press(&self) -> Option<(ChannelId, bool)> {
        match self.transition {
            SwitchTransition::Pressed => Some((self.channel, false)),
            SwitchTransition::Held => Some((self.channel, true)),
            SwitchTransition::Released { .. } => None,
        }
    }
}
