//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each switch transition to the `log`
//! facade. Whatever logger the binary installs decides where it lands.

use log::info;

use crate::app::events::SwitchEvent;
use crate::app::ports::EventSink;
use crate::debounce::SwitchTransition;

/// Adapter that logs every [`SwitchEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &SwitchEvent) {
        match event.transition {
            SwitchTransition::Pressed => {
                info!("SWITCH | ch={} | tick={} | PRESSED", event.channel, event.tick);
            }
            SwitchTransition::Held => {
                info!("SWITCH | ch={} | tick={} | HELD", event.channel, event.tick);
            }
            SwitchTransition::Released { was_held } => {
                info!(
                    "SWITCH | ch={} | tick={} | RELEASED{}",
                    event.channel,
                    event.tick,
                    if was_held { " (after hold)" } else { "" },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{LevelFilter, Log, Metadata, Record};

    use super::*;

    /// Keeps every formatted record so the sink's output can be inspected.
    struct Capture(Mutex<Vec<String>>);

    impl Log for Capture {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(format!("{}", record.args()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    fn event(transition: SwitchTransition, tick: u64) -> SwitchEvent {
        SwitchEvent { channel: 7, transition, tick }
    }

    #[test]
    fn logs_one_line_per_transition() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Info);

        let mut sink = LogEventSink::default();
        sink.emit(&event(SwitchTransition::Pressed, 40));
        sink.emit(&event(SwitchTransition::Held, 57));
        sink.emit(&event(SwitchTransition::Released { was_held: true }, 63));
        sink.emit(&event(SwitchTransition::Released { was_held: false }, 90));

        let lines: Vec<String> = CAPTURE
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.starts_with("SWITCH | ch=7 |"))
            .cloned()
            .collect();
        assert_eq!(
            lines,
            [
                "SWITCH | ch=7 | tick=40 | PRESSED",
                "SWITCH | ch=7 | tick=57 | HELD",
                "SWITCH | ch=7 | tick=63 | RELEASED (after hold)",
                "SWITCH | ch=7 | tick=90 | RELEASED",
            ]
        );
    }
}
