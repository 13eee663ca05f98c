#![no_main]

use libfuzzer_sys::fuzz_target;

use keycalc_core::{calculate, CalculatorEngine};

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };
    // Should not panic, and replays must agree
    let mut engine = CalculatorEngine::new();
    let display = engine.run(script);
    assert_eq!(display.to_string(), calculate(script).to_string());
    assert!(engine.state().check_invariants().is_ok());
});
