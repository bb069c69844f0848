//! Fuzz target: `Scenario::from_json` + `Scenario::run`
//!
//! Arbitrary text must either fail to parse, fail with a typed error, or
//! replay to exactly one report per tick.
//!
//! cargo fuzz run fuzz_scenario

#![no_main]

use libfuzzer_sys::fuzz_target;
use switchpoll::app::ports::NullSink;
use switchpoll::scenario::Scenario;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(scenario) = Scenario::from_json(text) else {
        return;
    };
    if let Ok(reports) = scenario.run(2, &mut NullSink) {
        assert_eq!(reports.len(), scenario.script.len().saturating_sub(1) + 2);
    }
});
