//! Scripted IO bank — a step-indexed stand-in for real GPIO.
//!
//! Each step holds one 16-bit bank value; bit `n` is the raw level of pin
//! `n`. [`read_value`](ScriptedSource::read_value) reads the current step
//! and never moves time; [`run_loop`](ScriptedSource::run_loop) steps to
//! the next value. Step 0 is the level at power-on.
//!
//! As a [`SampleSource`] the bank is synced before it is read: `sample`
//! peeks at the next step and `advance` commits it. A poller therefore
//! sees step 1 on its first poll, step 2 on its second, and so on.
//!
//! ```text
//!  step:   0       1       2       3  ...
//!  bank: 0x0001  0x0001  0x0000  0x0000
//!  pin0:   H       H       L       L
//! ```
//!
//! Past the last step the final bank value repeats, so a script describes
//! a line that settles at its last level.

use heapless::Vec;

use crate::app::ports::SampleSource;
use crate::channel::ChannelId;
use crate::error::SourceError;

/// Maximum scripted steps.
pub const SCRIPT_CAPACITY: usize = 64;

/// Pins per bank.
pub const BANK_WIDTH: u8 = 16;

#[derive(Debug, Clone)]
pub struct ScriptedSource {
    banks: Vec<u16, SCRIPT_CAPACITY>,
    step: usize,
}

impl ScriptedSource {
    /// An all-low script of `steps` steps.
    pub fn new(steps: usize) -> Result<Self, SourceError> {
        let mut banks = Vec::new();
        banks
            .resize(steps, 0)
            .map_err(|()| SourceError::ScriptTooLong(steps))?;
        Ok(Self { banks, step: 0 })
    }

    /// One bank value per step.
    pub fn from_banks(banks: &[u16]) -> Result<Self, SourceError> {
        let banks = Vec::from_slice(banks).map_err(|()| SourceError::ScriptTooLong(banks.len()))?;
        Ok(Self { banks, step: 0 })
    }

    /// Script a single pin; every other pin stays low.
    pub fn from_levels(pin: ChannelId, levels: &[bool]) -> Result<Self, SourceError> {
        let mut source = Self::new(levels.len())?;
        for (step, &high) in levels.iter().enumerate() {
            source.set_level(step, pin, high)?;
        }
        Ok(source)
    }

    /// Set the full bank value returned at `step`.
    pub fn set_value_for_reading(&mut self, step: usize, bank: u16) -> Result<(), SourceError> {
        let slot = self
            .banks
            .get_mut(step)
            .ok_or(SourceError::StepOutOfRange(step))?;
        *slot = bank;
        Ok(())
    }

    /// Set one pin's level at `step`, leaving the rest of the bank alone.
    pub fn set_level(&mut self, step: usize, pin: ChannelId, high: bool) -> Result<(), SourceError> {
        let mask = pin_mask(pin)?;
        let slot = self
            .banks
            .get_mut(step)
            .ok_or(SourceError::StepOutOfRange(step))?;
        if high {
            *slot |= mask;
        } else {
            *slot &= !mask;
        }
        Ok(())
    }

    /// Zero every step and rewind to step 0.
    pub fn reset_io(&mut self) {
        self.banks.iter_mut().for_each(|b| *b = 0);
        self.step = 0;
    }

    /// Move to the next step.
    pub fn run_loop(&mut self) {
        self.step = self.step.saturating_add(1);
    }

    /// Raw level of `pin` at the current step.
    pub fn read_value(&self, pin: ChannelId) -> Result<bool, SourceError> {
        Ok(self.current_bank() & pin_mask(pin)? != 0)
    }

    /// Raw level of `pin` one step ahead, without moving.
    pub fn peek_value(&self, pin: ChannelId) -> Result<bool, SourceError> {
        Ok(self.bank_at(self.step.saturating_add(1)) & pin_mask(pin)? != 0)
    }

    /// Bank value at the current step (the last one once the script has run out).
    pub fn current_bank(&self) -> u16 {
        self.bank_at(self.step)
    }

    fn bank_at(&self, step: usize) -> u16 {
        self.banks
            .get(step)
            .or_else(|| self.banks.last())
            .copied()
            .unwrap_or(0)
    }

    /// Steps taken so far.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Every scripted step has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.step >= self.banks.len()
    }
}

impl SampleSource for ScriptedSource {
    fn sample(&mut self, channel: ChannelId) -> Result<bool, SourceError> {
        self.peek_value(channel)
    }

    fn advance(&mut self) {
        self.run_loop();
    }
}

fn pin_mask(pin: ChannelId) -> Result<u16, SourceError> {
    if pin < BANK_WIDTH {
        Ok(1 << pin)
    } else {
        Err(SourceError::PinOutOfRange(pin))
    }
}
