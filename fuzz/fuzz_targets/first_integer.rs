#![no_main]
use libfuzzer_sys::fuzz_target;
use sectorscope::extract::first_integer;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Extraction must never panic, only degrade to 0.
        let _ = first_integer(input);
    }
});
