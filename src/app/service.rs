//! Poll service — the loop body around the sampler.
//!
//! [`SwitchPoller`] owns a [`DebouncedSampler`] and a tick counter. Each
//! call to [`poll`](SwitchPoller::poll) is one time step:
//!
//! ```text
//!  SampleSource ──▶ ┌──────────────────────┐ ──▶ EventSink
//!   (one read per   │     SwitchPoller     │   (one event per
//!    channel)       │  DebouncedSampler    │    transition)
//!                   └──────────────────────┘
//! ```
//!
//! The owner decides the cadence (timer task, main loop, or test driver)
//! and calls `poll` once per [`poll_interval`](SwitchPoller::poll_interval).

use core::time::Duration;

use heapless::Vec;
use log::{info, warn};

use crate::channel::ChannelId;
use crate::config::SamplerConfig;
use crate::debounce::SwitchState;
use crate::error::{Error, Result};
use crate::sampler::{DebouncedSampler, MAX_CHANNELS};

use super::commands::PollerCommand;
use super::events::SwitchEvent;
use super::ports::{EventSink, SampleSource};

// ───────────────────────────────────────────────────────────────
// SwitchPoller
// ───────────────────────────────────────────────────────────────

pub struct SwitchPoller {
    sampler: DebouncedSampler,
    tick_count: u64,
}

impl SwitchPoller {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        Ok(Self::with_sampler(DebouncedSampler::new(config)?))
    }

    /// Wrap a sampler whose channels are already registered.
    pub fn with_sampler(sampler: DebouncedSampler) -> Self {
        Self {
            sampler,
            tick_count: 0,
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one time step: sync → read every channel → debounce → emit.
    ///
    /// The source is read at the step this poll commits, so the first poll
    /// already sees the step after the power-on level. All channels are
    /// read before the step is committed or any channel is fed, so a failed
    /// read leaves every debouncer and the source position untouched.
    pub fn poll(&mut self, source: &mut impl SampleSource, sink: &mut impl EventSink) -> Result<()> {
        let mut readings: Vec<(ChannelId, bool), MAX_CHANNELS> = Vec::new();
        for id in self.sampler.channels() {
            let raw = source.sample(id).inspect_err(|e| {
                warn!("Poller: tick {} aborted: {}", self.tick_count, e);
            })?;
            readings
                .push((id, raw))
                .map_err(|_| Error::CapacityExhausted)?;
        }
        source.advance();

        for (id, raw) in readings {
            if let Some(transition) = self.sampler.feed(id, raw)? {
                sink.emit(&SwitchEvent {
                    channel: id,
                    transition,
                    tick: self.tick_count,
                });
            }
        }

        self.tick_count += 1;
        Ok(())
    }

    /// Run `ticks` consecutive polls, stopping at the first error.
    pub fn poll_n(
        &mut self,
        ticks: usize,
        source: &mut impl SampleSource,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        for _ in 0..ticks {
            self.poll(source, sink)?;
        }
        Ok(())
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(&mut self, cmd: PollerCommand) -> Result<()> {
        match cmd {
            PollerCommand::Register { channel, polarity, pull } => {
                self.sampler.register_channel(channel, polarity, pull)?;
                info!("Poller: channel {} added", channel);
            }
            PollerCommand::Deregister(channel) => {
                self.sampler.deregister_channel(channel)?;
                info!("Poller: channel {} removed", channel);
            }
            PollerCommand::Reset(channel) => self.sampler.reset_channel(channel)?,
            PollerCommand::ResetAll => {
                let ids: Vec<ChannelId, MAX_CHANNELS> = self.sampler.channels().collect();
                for id in ids {
                    self.sampler.reset_channel(id)?;
                }
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_pressed(&self, channel: ChannelId) -> Result<bool> {
        self.sampler.is_pressed(channel)
    }

    pub fn state(&self, channel: ChannelId) -> Result<SwitchState> {
        self.sampler.state(channel)
    }

    pub fn sampler(&self) -> &DebouncedSampler {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut DebouncedSampler {
        &mut self.sampler
    }

    /// Completed poll ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Cadence the owner should call [`poll`](Self::poll) at.
    pub fn poll_interval(&self) -> Duration {
        self.sampler.config().poll_interval()
    }
}
