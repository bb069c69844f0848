//! Poller-level flows over several channels.

use switchpoll::adapters::scripted::ScriptedSource;
use switchpoll::app::commands::PollerCommand;
use switchpoll::app::service::SwitchPoller;
use switchpoll::{Error, Polarity, Pull, SamplerConfig, SourceError, SwitchTransition};

use crate::mock_io::{CountingSource, RecordingSink};

fn poller_with(channels: &[(u8, Polarity, Pull)]) -> SwitchPoller {
    let mut poller = SwitchPoller::new(SamplerConfig::default()).unwrap();
    for &(channel, polarity, pull) in channels {
        poller
            .handle_command(PollerCommand::Register { channel, polarity, pull })
            .unwrap();
    }
    poller
}

#[test]
fn each_channel_read_once_per_tick() {
    let mut poller = poller_with(&[
        (0, Polarity::ActiveLow, Pull::PullUp),
        (5, Polarity::ActiveHigh, Pull::PullDown),
    ]);
    let mut source = CountingSource::new(ScriptedSource::new(4).unwrap());
    let mut sink = RecordingSink::new();

    poller.poll_n(4, &mut source, &mut sink).unwrap();

    assert_eq!(source.reads_of(0), 4);
    assert_eq!(source.reads_of(5), 4);
    assert_eq!(source.advances, 4);
}

#[test]
fn channels_debounce_independently() {
    let mut poller = poller_with(&[
        (0, Polarity::ActiveLow, Pull::PullUp),
        (1, Polarity::ActiveHigh, Pull::PullDown),
    ]);
    // pin0 stays high (idle), pin1 chatters, settles high, then low.
    // Bank 0 is the power-on level; poll k reads bank k, the last one repeats.
    let banks = [0b01, 0b11, 0b01, 0b11, 0b11, 0b11, 0b01, 0b01, 0b01];
    let mut source = ScriptedSource::from_banks(&banks).unwrap();
    let mut sink = RecordingSink::new();

    poller.poll_n(banks.len(), &mut source, &mut sink).unwrap();

    assert!(sink.transitions_for(0).is_empty());
    assert_eq!(
        sink.transitions_for(1),
        [SwitchTransition::Pressed, SwitchTransition::Released { was_held: false }]
    );
    let ticks: Vec<u64> = sink.events.iter().map(|e| e.tick).collect();
    assert_eq!(ticks, [4, 7]);
}

#[test]
fn pin_outside_bank_aborts_tick() {
    let mut poller = poller_with(&[(20, Polarity::ActiveHigh, Pull::None)]);
    let mut source = CountingSource::new(ScriptedSource::new(2).unwrap());
    let mut sink = RecordingSink::new();

    assert_eq!(
        poller.poll(&mut source, &mut sink),
        Err(Error::Source(SourceError::PinOutOfRange(20)))
    );
    assert_eq!(source.advances, 0);
    assert_eq!(poller.tick_count(), 0);
}

#[test]
fn deregistered_channel_is_no_longer_read() {
    let mut poller = poller_with(&[
        (0, Polarity::ActiveLow, Pull::PullUp),
        (1, Polarity::ActiveLow, Pull::PullUp),
    ]);
    poller.handle_command(PollerCommand::Deregister(1)).unwrap();

    let mut source = CountingSource::new(ScriptedSource::new(1).unwrap());
    poller.poll(&mut source, &mut RecordingSink::new()).unwrap();

    assert_eq!(source.reads_of(1), 0);
    assert_eq!(poller.is_pressed(1), Err(Error::UnknownChannel(1)));
}

#[test]
fn duplicate_register_command_rejected() {
    let mut poller = poller_with(&[(3, Polarity::ActiveLow, Pull::PullUp)]);
    let cmd = PollerCommand::Register {
        channel: 3,
        polarity: Polarity::ActiveHigh,
        pull: Pull::PullDown,
    };
    assert_eq!(poller.handle_command(cmd), Err(Error::InvalidChannel(3)));
}
