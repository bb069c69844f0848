//! Mock adapters for integration tests.
//!
//! `RecordingSink` keeps every emitted event; `CountingSource` wraps a
//! scripted bank and records how often each channel was read.

use std::collections::HashMap;

use switchpoll::adapters::scripted::ScriptedSource;
use switchpoll::app::events::SwitchEvent;
use switchpoll::app::ports::{EventSink, SampleSource};
use switchpoll::{ChannelId, SourceError, SwitchTransition};

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<SwitchEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn transitions_for(&self, channel: ChannelId) -> Vec<SwitchTransition> {
        self.events
            .iter()
            .filter(|e| e.channel == channel)
            .map(|e| e.transition)
            .collect()
    }

    /// `(key, held_down)` pairs in the shape of a press callback.
    pub fn presses(&self) -> Vec<(ChannelId, bool)> {
        self.events.iter().filter_map(SwitchEvent::as_press).collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &SwitchEvent) {
        self.events.push(*event);
    }
}

// ── CountingSource ────────────────────────────────────────────

pub struct CountingSource {
    pub inner: ScriptedSource,
    pub reads: HashMap<ChannelId, usize>,
    pub advances: usize,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn new(inner: ScriptedSource) -> Self {
        Self {
            inner,
            reads: HashMap::new(),
            advances: 0,
        }
    }

    pub fn reads_of(&self, channel: ChannelId) -> usize {
        self.reads.get(&channel).copied().unwrap_or(0)
    }
}

impl SampleSource for CountingSource {
    fn sample(&mut self, channel: ChannelId) -> Result<bool, SourceError> {
        *self.reads.entry(channel).or_default() += 1;
        self.inner.sample(channel)
    }

    fn advance(&mut self) {
        self.advances += 1;
        self.inner.advance();
    }
}
