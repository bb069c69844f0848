//! `embedded-hal` input pin adapter.
//!
//! Binds channel ids to [`InputPin`]s and implements [`SampleSource`] by
//! reading `is_high()` on every sample. Pins must share one type; on most
//! HALs that means the degraded / type-erased pin (`AnyPin`, `ErasedPin`).
//!
//! Pull configuration belongs to the HAL and must be applied before the
//! pin is bound here.

use embedded_hal::digital::{Error as _, InputPin};
use heapless::Vec;
use log::warn;

use crate::app::ports::SampleSource;
use crate::channel::ChannelId;
use crate::error::{Error, SourceError};

pub struct HalPinSource<P, const N: usize> {
    pins: Vec<(ChannelId, P), N>,
}

impl<P: InputPin, const N: usize> HalPinSource<P, N> {
    pub fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Attach `pin` as the source of `channel`.
    pub fn bind(&mut self, channel: ChannelId, pin: P) -> Result<(), Error> {
        if self.pins.iter().any(|(id, _)| *id == channel) {
            return Err(Error::InvalidChannel(channel));
        }
        self.pins
            .push((channel, pin))
            .map_err(|_| Error::CapacityExhausted)
    }

    /// Detach and return the pin bound to `channel`.
    pub fn unbind(&mut self, channel: ChannelId) -> Option<P> {
        let index = self.pins.iter().position(|(id, _)| *id == channel)?;
        Some(self.pins.swap_remove(index).1)
    }

    pub fn is_bound(&self, channel: ChannelId) -> bool {
        self.pins.iter().any(|(id, _)| *id == channel)
    }
}

impl<P: InputPin, const N: usize> Default for HalPinSource<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin, const N: usize> SampleSource for HalPinSource<P, N> {
    fn sample(&mut self, channel: ChannelId) -> Result<bool, SourceError> {
        let (_, pin) = self
            .pins
            .iter_mut()
            .find(|(id, _)| *id == channel)
            .ok_or(SourceError::Unbound(channel))?;
        pin.is_high().map_err(|e| {
            warn!("HalPinSource: channel {} read error: {:?}", channel, e.kind());
            SourceError::ReadFailed(channel)
        })
    }
}
