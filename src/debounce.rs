//! Per-channel debounce state machine.
//!
//! Consumes one polarity-normalized sample per tick ("is the line active?")
//! and tracks the run length of identical samples.
//!
//! ```text
//!              N active                  hold_threshold active
//!  Unpressed ────────────▶ Pressed ───────────────────────────▶ Held
//!      ▲                      │                                  │
//!      └──────────────────────┴──────── N inactive ──────────────┘
//! ```
//!
//! A run shorter than the debounce threshold never changes the confirmed
//! state, no matter how often it repeats.

use serde::{Deserialize, Serialize};

use crate::config::SamplerConfig;

/// Confirmed (debounced) logical state of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwitchState {
    #[default]
    Unpressed,
    /// Freshly pressed, not yet held past the hold threshold.
    Pressed,
    /// Pressed continuously for at least the hold threshold.
    Held,
}

impl SwitchState {
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed | Self::Held)
    }
}

/// Confirmed-state change produced by a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchTransition {
    Pressed,
    Held,
    Released { was_held: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    /// Last normalized sample; `None` until the first tick.
    candidate: Option<bool>,
    /// Consecutive ticks `candidate` has been seen.
    run: u16,
    confirmed: SwitchState,
    threshold: u16,
    hold_threshold: u16,
}

impl Debouncer {
    pub fn new(config: &SamplerConfig) -> Self {
        Self {
            candidate: None,
            run: 0,
            confirmed: SwitchState::Unpressed,
            threshold: u16::from(config.debounce_threshold),
            hold_threshold: config.hold_threshold,
        }
    }

    pub fn state(&self) -> SwitchState {
        self.confirmed
    }

    /// Length of the current run of identical samples.
    pub fn run_length(&self) -> u16 {
        self.run
    }

    /// Forget all history; back to unpressed with an empty run.
    pub fn reset(&mut self) {
        self.candidate = None;
        self.run = 0;
        self.confirmed = SwitchState::Unpressed;
    }

    /// Feed one normalized sample. Returns the transition, if any.
    pub fn update(&mut self, active: bool) -> Option<SwitchTransition> {
        if self.candidate == Some(active) {
            self.run = self.run.saturating_add(1);
        } else {
            self.candidate = Some(active);
            self.run = 1;
        }

        if self.run >= self.threshold && active != self.confirmed.is_pressed() {
            return Some(if active {
                self.confirmed = SwitchState::Pressed;
                SwitchTransition::Pressed
            } else {
                let was_held = self.confirmed == SwitchState::Held;
                self.confirmed = SwitchState::Unpressed;
                SwitchTransition::Released { was_held }
            });
        }

        if active && self.confirmed == SwitchState::Pressed && self.run >= self.hold_threshold {
            self.confirmed = SwitchState::Held;
            return Some(SwitchTransition::Held);
        }

        None
    }
}
