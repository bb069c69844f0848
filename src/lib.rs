//! Debounced digital switch sampler.
//!
//! Turns a noisy raw level stream into a stable unpressed / pressed / held
//! classification per channel. Input comes from any [`SampleSource`]: the
//! scripted IO bank for tests and simulation, or an `embedded-hal` pin on
//! real hardware.
//!
//! [`SampleSource`]: app::ports::SampleSource

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod channel;
pub mod config;
pub mod debounce;
pub mod error;
pub mod sampler;
pub mod scenario;

pub use channel::{ChannelId, InputChannel, Polarity, Pull};
pub use config::SamplerConfig;
pub use debounce::{SwitchState, SwitchTransition};
pub use error::{Error, Result, SourceError};
pub use sampler::DebouncedSampler;
