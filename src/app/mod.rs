//! Application core. Poll orchestration, zero I/O.
//!
//! The [`SwitchPoller`](service::SwitchPoller) drives the debounce sampler
//! once per tick. All interaction with pins happens through the **port
//! traits** in [`ports`], keeping this layer testable with scripted input.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
