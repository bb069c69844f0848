//! Fuzz target: `DebouncedSampler::feed`
//!
//! The first byte picks the debounce threshold, the rest are raw banks
//! (bit 0 per channel polarity). Asserts the machine never panics and
//! that `Held` is only ever reached through `Pressed`.
//!
//! cargo fuzz run fuzz_sample_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use switchpoll::{DebouncedSampler, Pull, SamplerConfig, SwitchState, SwitchTransition};

fuzz_target!(|data: &[u8]| {
    let Some((&first, samples)) = data.split_first() else {
        return;
    };
    let debounce_threshold = (first % 8) + 1;
    let config = SamplerConfig {
        debounce_threshold,
        hold_threshold: u16::from(debounce_threshold) + u16::from(first >> 3) + 1,
        ..SamplerConfig::default()
    };
    let mut sampler = DebouncedSampler::new(config).expect("generated config is valid");
    sampler.register_switch(0, Pull::PullUp).unwrap();
    sampler.register_switch(1, Pull::PullDown).unwrap();

    for &byte in samples {
        for (id, bit) in [(0u8, 0u8), (1, 1)] {
            let before = sampler.state(id).unwrap();
            let transition = sampler.feed(id, byte & (1 << bit) != 0).unwrap();
            if transition == Some(SwitchTransition::Held) {
                assert_eq!(before, SwitchState::Pressed, "held must follow pressed");
            }
        }
    }
});
