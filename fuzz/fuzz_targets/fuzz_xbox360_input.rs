//! Fuzzes the Xbox 360 input report decoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_xbox360_input
#![no_main]
use libfuzzer_sys::fuzz_target;
use xbox_controller_protocol::{DecoderConfig, Xbox360InputReport, decode};

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes.
    let _ = decode(data, &DecoderConfig::default());
    if let Ok(report) = Xbox360InputReport::parse(data) {
        let state = report.to_state(&DecoderConfig::xinput_defaults());
        assert!(state.axes().iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(Xbox360InputReport::parse(&report.to_bytes()), Ok(report));
    }
});
