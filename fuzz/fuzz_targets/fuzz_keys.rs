#![no_main]

use libfuzzer_sys::fuzz_target;

use keycalc_core::{CalculatorEngine, Digit};

const SYMBOLS: [&str; 10] = ["+", "-", "*", "/", "=", "C", "x", "\u{f7}", "AC", "%"];

fuzz_target!(|data: &[u8]| {
    let mut engine = CalculatorEngine::new();
    for &byte in data {
        // Low values press digits, the rest pick a symbol
        match Digit::try_from(byte % 20) {
            Ok(digit) => engine.submit_digit(digit),
            Err(_) => engine.submit_operator(SYMBOLS[usize::from(byte % 10)]),
        }
        if let Err(violation) = engine.state().check_invariants() {
            panic!("invariant violated: {violation}");
        }
    }
    let _ = engine.display_value().to_string();
});
