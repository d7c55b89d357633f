#![no_main]

use libfuzzer_sys::fuzz_target;

use trigcalc_orchestration::input::{parse_input, parse_terms};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Split on the first newline: angle, then terms
    let (angle, terms) = text.split_once('\n').unwrap_or((text, ""));

    assert!(parse_terms(terms) > 0);
    if let Ok(input) = parse_input(angle, terms) {
        assert!(input.angle.is_finite());
    }
});
