#![no_main]
use libfuzzer_sys::fuzz_target;
use sectorscope::extract::labeled_count;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Use part of the input as the label too, so metacharacters in
        // labels get exercised.
        let mid = input.len() / 2;
        if input.is_char_boundary(mid) {
            let (label, text) = input.split_at(mid);
            let _ = labeled_count(text, label);
        }
        let _ = labeled_count(input, "routers");
    }
});
