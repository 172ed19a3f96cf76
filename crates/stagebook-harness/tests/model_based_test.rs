//! Model-based tests for the segmented code input.
//!
//! Random operation sequences are applied to both [`CodeModel`] and a real
//! `OtpForm`; the observable state must match after every operation.

use proptest::prelude::*;
use stagebook_app::OtpForm;
use stagebook_harness::{CodeModel, CodeObservation, CodeOp};

fn op_strategy() -> impl Strategy<Value = CodeOp> {
    prop_oneof![
        8 => (0u8..10).prop_map(CodeOp::Digit),
        1 => Just(CodeOp::Letter),
        3 => Just(CodeOp::Backspace),
        1 => Just(CodeOp::Left),
        1 => Just(CodeOp::Right),
        1 => Just(CodeOp::Home),
        1 => Just(CodeOp::End),
        2 => "[0-9 -]{0,10}".prop_map(CodeOp::Paste),
        1 => any::<String>().prop_map(CodeOp::Paste),
    ]
}

proptest! {
    #[test]
    fn form_matches_model(
        length in 1usize..9,
        ops in prop::collection::vec(op_strategy(), 0..100),
    ) {
        let mut model = CodeModel::new(length);
        let mut form = OtpForm::new("9876543210", length, 30);

        for op in &ops {
            model.apply(op);
            op.apply_to_form(&mut form);
            prop_assert_eq!(model.observe(), CodeObservation::of_form(&form), "after {:?}", op);
        }
    }

    /// Completion fires once per transition into the full state, never more
    /// often than the code could have been filled.
    #[test]
    fn completions_bounded_by_fills(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut form = OtpForm::new("9876543210", 6, 30);
        let mut was_complete = false;
        let mut transitions = 0;

        for op in &ops {
            op.apply_to_form(&mut form);
            let complete = form.code().len() == 6;
            if complete && !was_complete {
                transitions += 1;
            }
            was_complete = complete;
        }
        prop_assert_eq!(form.completions(), transitions);
    }
}

#[test]
fn paste_into_middle_replaces_everything() {
    let mut model = CodeModel::new(6);
    let mut form = OtpForm::new("9876543210", 6, 30);
    let ops = [CodeOp::Digit(1), CodeOp::Digit(2), CodeOp::Paste("98 76".into())];

    for op in &ops {
        model.apply(op);
        op.apply_to_form(&mut form);
    }

    assert_eq!(CodeObservation::of_form(&form), model.observe());
    assert_eq!(form.code(), "9876");
    assert_eq!(form.input().focused_cell(), 4);
}
