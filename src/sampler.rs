//! Debounced digital input sampler: the channel registry.
//!
//! Owns one [`Debouncer`] per registered channel in a fixed-capacity table
//! (no heap). Slots are kept sorted by channel id so iteration order is
//! stable across ticks.
//!
//! The sampler performs no locking. If it lives in a concurrent host,
//! every `tick` for a given instance must come from one poll owner.

use heapless::Vec;
use log::{debug, warn};

use crate::channel::{ChannelId, InputChannel, Polarity, Pull};
use crate::config::SamplerConfig;
use crate::debounce::{Debouncer, SwitchState, SwitchTransition};
use crate::error::{Error, Result};

/// Maximum number of channels (one 16-bit IO bank).
pub const MAX_CHANNELS: usize = 16;

#[derive(Debug, Clone, Copy)]
struct ChannelSlot {
    channel: InputChannel,
    debouncer: Debouncer,
}

pub struct DebouncedSampler {
    config: SamplerConfig,
    slots: Vec<ChannelSlot, MAX_CHANNELS>,
}

impl DebouncedSampler {
    /// Build a sampler. Fails if the configuration does not validate.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            slots: Vec::new(),
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    // ── Registration ──────────────────────────────────────────

    /// Register a channel: run length 0, confirmed state unpressed.
    pub fn register_channel(&mut self, id: ChannelId, polarity: Polarity, pull: Pull) -> Result<()> {
        let index = match self.find(id) {
            Ok(_) => return Err(Error::InvalidChannel(id)),
            Err(index) => index,
        };

        let channel = InputChannel::new(id, polarity, pull);
        if channel.idles_active() {
            warn!("Sampler: channel {} reads active at rest ({:?}/{:?})", id, polarity, pull);
        }

        let slot = ChannelSlot {
            channel,
            debouncer: Debouncer::new(&self.config),
        };
        self.slots
            .insert(index, slot)
            .map_err(|_| Error::CapacityExhausted)?;
        debug!("Sampler: registered channel {} ({:?}, {:?})", id, polarity, pull);
        Ok(())
    }

    /// Register using the conventional polarity for the given pull.
    pub fn register_switch(&mut self, id: ChannelId, pull: Pull) -> Result<()> {
        self.register_channel(id, Polarity::for_pull(pull), pull)
    }

    pub fn deregister_channel(&mut self, id: ChannelId) -> Result<InputChannel> {
        let index = self.find(id).map_err(|_| Error::UnknownChannel(id))?;
        Ok(self.slots.remove(index).channel)
    }

    /// Drop all history for a channel; it reads unpressed until re-confirmed.
    pub fn reset_channel(&mut self, id: ChannelId) -> Result<()> {
        self.slot_mut(id)?.debouncer.reset();
        Ok(())
    }

    // ── Sampling ──────────────────────────────────────────────

    /// Consume one raw sample (`true` = electrically high) for `id`.
    pub fn tick(&mut self, id: ChannelId, raw_high: bool) -> Result<()> {
        self.feed(id, raw_high).map(|_| ())
    }

    /// Like [`tick`](Self::tick) but returns the transition it caused.
    pub fn feed(&mut self, id: ChannelId, raw_high: bool) -> Result<Option<SwitchTransition>> {
        let slot = self.slot_mut(id)?;
        let active = slot.channel.polarity.is_active(raw_high);
        let transition = slot.debouncer.update(active);
        if let Some(t) = transition {
            debug!("Sampler: channel {} {:?}", id, t);
        }
        Ok(transition)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Debounced pressed state (held counts as pressed).
    pub fn is_pressed(&self, id: ChannelId) -> Result<bool> {
        self.state(id).map(SwitchState::is_pressed)
    }

    pub fn is_held(&self, id: ChannelId) -> Result<bool> {
        self.state(id).map(|s| s == SwitchState::Held)
    }

    pub fn state(&self, id: ChannelId) -> Result<SwitchState> {
        Ok(self.slot(id)?.debouncer.state())
    }

    pub fn channel(&self, id: ChannelId) -> Result<InputChannel> {
        Ok(self.slot(id)?.channel)
    }

    /// Registered channel ids, ascending.
    pub fn channels(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.slots.iter().map(|s| s.channel.id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // ── Internal ──────────────────────────────────────────────

    fn find(&self, id: ChannelId) -> core::result::Result<usize, usize> {
        self.slots.binary_search_by_key(&id, |s| s.channel.id)
    }

    fn slot(&self, id: ChannelId) -> Result<&ChannelSlot> {
        let index = self.find(id).map_err(|_| Error::UnknownChannel(id))?;
        Ok(&self.slots[index])
    }

    fn slot_mut(&mut self, id: ChannelId) -> Result<&mut ChannelSlot> {
        let index = self.find(id).map_err(|_| Error::UnknownChannel(id))?;
        Ok(&mut self.slots[index])
    }
}
