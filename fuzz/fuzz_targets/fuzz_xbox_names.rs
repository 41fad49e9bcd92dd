//! Fuzzes axis and button name parsing.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_xbox_names
#![no_main]
use libfuzzer_sys::fuzz_target;
use xbox_controller_protocol::{XboxAxis, XboxButton};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must name itself back.
        if let Ok(axis) = s.parse::<XboxAxis>() {
            assert_eq!(axis.name().parse::<XboxAxis>(), Ok(axis));
        }
        if let Ok(button) = s.parse::<XboxButton>() {
            assert_eq!(button.name().parse::<XboxButton>(), Ok(button));
        }
    }
});
