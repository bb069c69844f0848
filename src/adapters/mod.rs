//! Hexagonal adapters — concrete implementations of the port traits.
//!
//! | Adapter         | Implements       | Backing                         |
//! |-----------------|------------------|---------------------------------|
//! | `ScriptedSource`| `SampleSource`   | step-indexed 16-bit IO bank     |
//! | `HalPinSource`  | `SampleSource`   | `embedded-hal` 1.0 `InputPin`   |
//! | `LogEventSink`  | `EventSink`      | `log` facade                    |

pub mod hal_pin;
pub mod log_sink;
pub mod scripted;
