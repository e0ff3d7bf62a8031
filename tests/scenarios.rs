//! End-to-end calculator sessions driven through keypad labels.

use abacus::core::{CalcError, Operator, Outcome, Phase};
use abacus::engine::{Calculator, Digit, ErrorPolicy, Snapshot};
use abacus::CalculatorBuilder;
use std::sync::{Arc, Mutex};

fn session(labels: &[&str]) -> Calculator {
    let mut calc = Calculator::new();
    for label in labels {
        calc.press(label).unwrap();
    }
    calc
}

#[test]
fn digits_and_decimal_build_a_number() {
    let calc = session(&["1", "2", ".", "5"]);
    assert_eq!(calc.display_text(), "12.5");
}

#[test]
fn addition_then_equals() {
    let mut calc = session(&["5"]);

    calc.choose_operator(Operator::Add);
    assert_eq!(calc.stored_operand(), Some(5.0));
    assert_eq!(calc.pending_operator(), Some(Operator::Add));
    assert!(calc.replace_next());

    calc.enter_digit(Digit::new(3).unwrap());
    assert_eq!(calc.display_text(), "3");

    calc.equals();
    assert_eq!(calc.display_text(), "8");
    assert_eq!(calc.stored_operand(), None);
    assert_eq!(calc.pending_operator(), None);

    let entry = calc.history().last().unwrap();
    assert_eq!(entry.lhs, 5.0);
    assert_eq!(entry.operator, Operator::Add);
    assert_eq!(entry.rhs, 3.0);
    assert_eq!(entry.result, Outcome::Number(8.0));
}

#[test]
fn division_by_zero() {
    let calc = session(&["1", "0", "÷", "0", "="]);

    assert_eq!(calc.display_text(), "Error");
    let entry = calc.history().last().unwrap();
    assert_eq!((entry.lhs, entry.operator, entry.rhs), (10.0, Operator::Divide, 0.0));
    assert_eq!(entry.result, Outcome::Error(CalcError::DivisionByZero));
}

#[test]
fn percent_of_fifty() {
    let calc = session(&["5", "0", "%"]);
    assert_eq!(calc.display_text(), "0.5");
}

#[test]
fn result_feeds_next_operation() {
    let calc = session(&["4", "×", "2", "=", "-", "1", "="]);
    assert_eq!(calc.display_text(), "7");

    let lines: Vec<String> = calc.history_lines().collect();
    assert_eq!(lines, vec!["4 × 2 = 8", "8 - 1 = 7"]);
}

#[test]
fn typing_after_result_starts_new_number() {
    let calc = session(&["4", "×", "2", "=", "9"]);
    assert_eq!(calc.display_text(), "9");
    assert_eq!(calc.phase(), Phase::Entering);
}

#[test]
fn recovery_after_error() {
    let mut calc = session(&["7", "÷", "0", "="]);
    assert_eq!(calc.phase(), Phase::Error);

    for label in ["6", "+", "1", "="] {
        calc.press(label).unwrap();
    }
    assert_eq!(calc.display_text(), "7");
    assert_eq!(calc.history().len(), 2);
}

#[test]
fn latched_error_requires_clear() {
    let mut calc = CalculatorBuilder::new()
        .error_policy(ErrorPolicy::Latch)
        .build()
        .unwrap();
    for label in ["7", "÷", "0", "=", "5", "⌫", "."] {
        calc.press(label).unwrap();
    }
    assert_eq!(calc.display_text(), "Error");

    for label in ["AC", "5", "+", "1", "="] {
        calc.press(label).unwrap();
    }
    assert_eq!(calc.display_text(), "6");
}

#[test]
fn presentation_layer_renders_from_snapshots() {
    let frames: Arc<Mutex<Vec<Snapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&frames);

    let mut calc = CalculatorBuilder::new()
        .on_change(move |snapshot| sink.lock().unwrap().push(snapshot.clone()))
        .build()
        .unwrap();
    for label in ["2", "+", "3", "="] {
        calc.press(label).unwrap();
    }

    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1].pending_text().as_deref(), Some("2 +"));
    assert_eq!(frames[2].display_text, "3");

    let last = frames.last().unwrap();
    assert_eq!(last.display_text, "5");
    assert_eq!(last.pending_text(), None);
    assert_eq!(last.history_lines(), vec!["2 + 3 = 5"]);
    assert_eq!(last, &calc.snapshot());
}

#[test]
fn snapshot_json_shape() {
    let calc = session(&["9", "÷"]);
    let json: serde_json::Value = serde_json::from_str(&calc.snapshot().to_json().unwrap()).unwrap();

    assert_eq!(json["display_text"], "9");
    assert_eq!(json["pending_operand_text"], "9");
    assert_eq!(json["pending_operator"], "Divide");
    assert_eq!(json["phase"], "AwaitingOperand");
    assert!(json["history_entries"].as_array().unwrap().is_empty());
}

#[test]
fn overflowed_session_survives_json() {
    let mut labels = vec!["9"];
    labels.extend(std::iter::repeat("×").take(12));
    let mut calc = session(&labels);
    assert_eq!(calc.display_text(), "Infinity");

    // Infinity - Infinity
    calc.press("-").unwrap();
    calc.press("-").unwrap();
    assert_eq!(calc.display_text(), "NaN");

    let snapshot = calc.snapshot();
    let json = snapshot.to_json().unwrap();
    assert!(!json.contains("null"));

    let restored: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.display_text, "NaN");
    assert_eq!(restored.history_lines(), snapshot.history_lines());
    assert_eq!(
        restored.history_lines().last().map(String::as_str),
        Some("Infinity - Infinity = NaN")
    );

    let overflow = &restored.history_entries[restored.history_entries.len() - 3];
    assert_eq!(overflow.result, Outcome::Number(f64::INFINITY));
}
