//! A consumer that owns a pulled-up switch and reacts to it once per check,
//! driven by a scripted 30-step IO bank.

use switchpoll::adapters::scripted::ScriptedSource;
use switchpoll::app::ports::EventSink;
use switchpoll::app::service::SwitchPoller;
use switchpoll::{ChannelId, Pull, SamplerConfig, SwitchState};

use crate::mock_io::RecordingSink;

/// Reads the switch through the poller and turns it into a status string.
struct SwitchReactor {
    poller: SwitchPoller,
    pin: ChannelId,
}

impl SwitchReactor {
    fn new(pin: ChannelId) -> Self {
        let mut poller = SwitchPoller::new(SamplerConfig::default()).unwrap();
        poller.sampler_mut().register_switch(pin, Pull::PullUp).unwrap();
        Self { poller, pin }
    }

    fn check_and_react(&mut self, io: &mut ScriptedSource, sink: &mut impl EventSink) -> &'static str {
        self.poller.poll(io, sink).unwrap();
        match self.poller.state(self.pin).unwrap() {
            SwitchState::Unpressed => "UNPRESSED",
            SwitchState::Pressed => "PRESSED",
            SwitchState::Held => "HELD",
        }
    }
}

/// High at power-on and on the first poll, then low for the rest of the script.
fn high_then_low() -> ScriptedSource {
    let mut io = ScriptedSource::new(30).unwrap();
    io.reset_io();
    io.set_value_for_reading(0, 0x0001).unwrap();
    io.set_value_for_reading(1, 0x0001).unwrap();
    for step in 2..30 {
        io.set_value_for_reading(step, 0x0000).unwrap();
    }
    io
}

#[test]
fn raw_bank_reads_step_with_run_loop() {
    let mut io = ScriptedSource::new(6).unwrap();
    io.set_value_for_reading(0, 0x0001).unwrap();
    io.set_value_for_reading(1, 0x0000).unwrap();

    let first = io.read_value(0).unwrap();
    let output: u8 = if first { 0xff } else { 0x00 };
    io.run_loop();
    let second = io.read_value(0).unwrap();

    assert!(first);
    assert_eq!(output, 0xff);
    assert!(!second);
}

#[test]
fn switch_reads_pressed_only_after_debounce() {
    let mut io = high_then_low();
    let mut sink = RecordingSink::new();
    let mut reactor = SwitchReactor::new(0);

    assert_eq!(reactor.check_and_react(&mut io, &mut sink), "UNPRESSED");

    // The next three checks see three lows; the third confirms the press.
    assert_eq!(reactor.check_and_react(&mut io, &mut sink), "UNPRESSED");
    assert_eq!(reactor.check_and_react(&mut io, &mut sink), "UNPRESSED");
    assert_eq!(reactor.check_and_react(&mut io, &mut sink), "PRESSED");
    assert_eq!(sink.presses(), [(0, false)]);
}

#[test]
fn switch_reads_held_past_hold_limit() {
    let mut io = high_then_low();
    let mut sink = RecordingSink::new();
    let mut reactor = SwitchReactor::new(0);

    // One high check, then 19 lows.
    let mut last = "";
    for _ in 0..20 {
        last = reactor.check_and_react(&mut io, &mut sink);
    }
    assert_eq!(last, "PRESSED");

    assert_eq!(reactor.check_and_react(&mut io, &mut sink), "HELD");
    assert_eq!(sink.presses(), [(0, false), (0, true)]);
}
