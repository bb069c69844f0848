//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the poller against
//! scripted sources and recording sinks. All tests run on the host with no
//! real hardware required.

mod mock_io;
mod poller_tests;
mod switch_input_tests;
