//! Fuzz target for the segmented code input
//!
//! Drives a real passcode form and the reference model with the same
//! operations and compares them after each one.
//!
//! # Strategy
//!
//! - Code length: 1..=12 cells, chosen by the fuzzer
//! - Operations: digits, letters, backspace, focus moves, arbitrary pastes
//!
//! # Invariants
//!
//! - Form and model agree on code, focused cell and completion count
//! - Code is digits only and never longer than the cell count
//! - Exactly one focus handle reports focus

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stagebook_app::OtpForm;
use stagebook_harness::{CodeModel, CodeObservation, CodeOp};

#[derive(Debug, Arbitrary)]
struct Input {
    length: u8,
    ops: Vec<CodeOp>,
}

fuzz_target!(|input: Input| {
    let length = usize::from(input.length % 12) + 1;
    let mut model = CodeModel::new(length);
    let mut form = OtpForm::new("9876543210", length, 30);

    for op in &input.ops {
        model.apply(op);
        op.apply_to_form(&mut form);

        assert_eq!(model.observe(), CodeObservation::of_form(&form), "diverged after {op:?}");
        assert!(form.code().len() <= length);
        assert!(form.code().bytes().all(|b| b.is_ascii_digit()));

        let focused = form.input().handles().iter().filter(|h| h.is_focused()).count();
        assert_eq!(focused, 1);
    }
});
