#![no_main]
use libfuzzer_sys::fuzz_target;
use sectorscope::extract::currency_amount;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Long comma runs and overlong digit runs must not panic.
        let _ = currency_amount(input);
    }
});
