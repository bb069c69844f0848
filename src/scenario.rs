//! JSON scenario replay for desktop simulation.
//!
//! ```json
//! {
//!   "config":   { "debounce_threshold": 3 },
//!   "channels": [ { "id": 0, "pull": "PullUp" } ],
//!   "script":   [ 1, 1, 0, 0, 0, 0 ]
//! }
//! ```
//!
//! `script` holds one 16-bit bank per step. Step 0 is the level at power-on;
//! each poll syncs to the next step before reading it, so a script of `n`
//! banks replays as `n - 1` ticks. A channel without an explicit `polarity`
//! gets the conventional one for its pull.

use heapless::Vec as FixedVec;
use serde::{Deserialize, Serialize};

use crate::adapters::scripted::ScriptedSource;
use crate::app::ports::EventSink;
use crate::app::service::SwitchPoller;
use crate::channel::{ChannelId, Polarity, Pull};
use crate::config::SamplerConfig;
use crate::debounce::SwitchState;
use crate::error::{Error, Result};
use crate::sampler::{DebouncedSampler, MAX_CHANNELS};

/// Upper bound on ticks in one replay.
pub const MAX_REPLAY_TICKS: usize = 1 << 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub id: ChannelId,
    pub pull: Pull,
    #[serde(default)]
    pub polarity: Option<Polarity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SamplerConfig,
    pub channels: Vec<ChannelSpec>,
    pub script: Vec<u16>,
}

/// Debounced state of every channel after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub states: FixedVec<(ChannelId, SwitchState), MAX_CHANNELS>,
}

impl TickReport {
    pub fn is_pressed(&self, channel: ChannelId) -> Option<bool> {
        self.states
            .iter()
            .find(|(id, _)| *id == channel)
            .map(|(_, s)| s.is_pressed())
    }
}

impl Scenario {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Build the poller and source described by this scenario.
    pub fn build(&self) -> Result<(SwitchPoller, ScriptedSource)> {
        let mut sampler = DebouncedSampler::new(self.config)?;
        for ch in &self.channels {
            let polarity = ch.polarity.unwrap_or(Polarity::for_pull(ch.pull));
            sampler.register_channel(ch.id, polarity, ch.pull)?;
        }
        let source = ScriptedSource::from_banks(&self.script)?;
        Ok((SwitchPoller::with_sampler(sampler), source))
    }

    /// Poll once per scripted step after power-on plus `extra_ticks` on the
    /// settled last bank, reporting every channel after each tick.
    ///
    /// Fails with [`Error::Config`] when the tick count exceeds
    /// [`MAX_REPLAY_TICKS`].
    pub fn run(&self, extra_ticks: usize, sink: &mut impl EventSink) -> Result<Vec<TickReport>> {
        let ticks = self
            .script
            .len()
            .saturating_sub(1)
            .checked_add(extra_ticks)
            .filter(|&t| t <= MAX_REPLAY_TICKS)
            .ok_or(Error::Config("scenario tick count too large"))?;
        let (mut poller, mut source) = self.build()?;
        let mut reports = Vec::new();

        for _ in 0..ticks {
            let tick = poller.tick_count();
            poller.poll(&mut source, sink)?;

            let mut states = FixedVec::new();
            for id in poller.sampler().channels() {
                states
                    .push((id, poller.state(id)?))
                    .map_err(|_| Error::CapacityExhausted)?;
            }
            reports.push(TickReport { tick, states });
        }
        Ok(reports)
    }
}
