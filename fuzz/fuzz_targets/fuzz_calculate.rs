#![no_main]

use libfuzzer_sys::fuzz_target;

use trigcalc_orchestration::display::{ResultDisplay, LOOKUP_UNAVAILABLE};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let angle = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    if !angle.is_finite() {
        return;
    }
    // Capped for speed
    let terms = u32::from(u16::from_le_bytes([data[8], data[9]])) % 500;

    // Should not panic, and the lookup pair stays coupled
    let results = trigcalc_core::calculate(angle, terms);
    let display = ResultDisplay::from_results(&results);
    assert_eq!(
        display.sin_lookup == LOOKUP_UNAVAILABLE,
        display.cos_lookup == LOOKUP_UNAVAILABLE
    );
});
