#![no_main]

use libfuzzer_sys::fuzz_target;
use mumu_theory::{modal_step_span, Mode, ScaleDegree};

// Arbitrary degree/steps/mode combinations must never panic, must span zero
// semitones for zero steps, and must displace by at least one semitone per
// scale step (every validated mode step is positive).
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let degree = ScaleDegree(data[0] as usize);
    let num_steps = i16::from_le_bytes([data[1], data[2]]) as i32;
    let steps: Vec<u8> = data[3..]
        .iter()
        .take(16)
        .map(|&b| (b % 12).max(1))
        .collect();
    let Ok(mode) = Mode::new(steps) else {
        return;
    };

    assert_eq!(modal_step_span(degree, 0, &mode), 0);

    let span = modal_step_span(degree, num_steps, &mode);
    if num_steps >= 0 {
        assert!(span >= num_steps);
    } else {
        assert!(span <= num_steps);
    }
});
