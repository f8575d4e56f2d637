//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{HistoryLog, Operator, Phase};
use tally::engine::{CalcError, CalculatorEngine, Outcome};
use tally::format::{render_number, NumberFormatter};
use tally::math::{combination, factorial, permutation, round_to};

prop_compose! {
    fn arbitrary_operator()(variant in 0..5u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            3 => Operator::Divide,
            _ => Operator::Power,
        }
    }
}

prop_compose! {
    fn arbitrary_token()(index in 0..11usize) -> char {
        "0123456789.".chars().nth(index).unwrap_or('0')
    }
}

fn enter(engine: &mut CalculatorEngine, operand: u32) {
    for digit in operand.to_string().chars() {
        engine.append_digit(digit);
    }
}

proptest! {
    #[test]
    fn compute_combines_previous_and_current(
        lhs in 0u32..10_000,
        rhs in 1u32..100,
        operator in arbitrary_operator(),
    ) {
        let rhs = if operator == Operator::Power { rhs % 6 } else { rhs };
        let mut engine = CalculatorEngine::new();
        enter(&mut engine, lhs);
        engine.choose_operator(operator).unwrap();
        enter(&mut engine, rhs);
        prop_assert_eq!(engine.compute().unwrap(), Outcome::Updated);

        let expected = operator.apply(f64::from(lhs), f64::from(rhs)).unwrap();
        prop_assert_eq!(engine.current_operand(), render_number(round_to(expected, 10)));
        prop_assert_ne!(engine.phase(), Phase::OperatorPending);
    }

    #[test]
    fn operand_holds_at_most_one_decimal_point(
        tokens in prop::collection::vec(arbitrary_token(), 0..30)
    ) {
        let mut engine = CalculatorEngine::new();
        for token in tokens {
            engine.append_digit(token);
        }
        let operand = engine.current_operand();
        prop_assert!(operand.matches('.').count() <= 1);
        prop_assert!(!operand.is_empty());
        prop_assert!(!(operand.len() > 1 && operand.starts_with('0') && !operand.starts_with("0.")));
    }

    #[test]
    fn deleting_never_empties_the_operand(
        tokens in prop::collection::vec(arbitrary_token(), 0..10),
        deletions in 0usize..15,
    ) {
        let mut engine = CalculatorEngine::new();
        for token in tokens {
            engine.append_digit(token);
        }
        for _ in 0..deletions {
            engine.delete_last_char();
        }
        prop_assert!(!engine.current_operand().is_empty());
    }

    #[test]
    fn reset_returns_to_initial(
        lhs in 0u32..1000,
        operator in arbitrary_operator(),
    ) {
        let mut engine = CalculatorEngine::new();
        enter(&mut engine, lhs);
        engine.choose_operator(operator).unwrap();
        engine.reset();
        prop_assert_eq!(engine.phase(), Phase::Initial);
        prop_assert_eq!(engine.previous_operand(), "");
        prop_assert_eq!(engine.current_operand(), "0");
    }

    #[test]
    fn division_by_zero_always_resets(lhs in 0u32..1_000_000) {
        let mut engine = CalculatorEngine::new();
        enter(&mut engine, lhs);
        engine.choose_operator(Operator::Divide).unwrap();
        prop_assert_eq!(engine.compute(), Err(CalcError::DivisionByZero));
        prop_assert!(engine.state().is_initial());
    }

    #[test]
    fn history_never_exceeds_capacity(capacity in 1usize..30, records in 0usize..60) {
        let mut history = HistoryLog::with_capacity(capacity);
        for i in 0..records {
            history.record(format!("{i} + 0"), i.to_string());
            prop_assert!(history.len() <= capacity);
        }
        if records > 0 {
            let newest = (records - 1).to_string();
            prop_assert_eq!(history.latest().map(|e| e.result.as_str()), Some(newest.as_str()));
        }
    }

    #[test]
    fn load_from_history_sets_exact_text(value in "[0-9]{1,12}(\\.[0-9]{1,6})?") {
        let mut engine = CalculatorEngine::new();
        engine.load_from_history(&value);
        prop_assert_eq!(engine.current_operand(), value.as_str());
    }

    #[test]
    fn grouping_preserves_digits(value in 1u64..u64::MAX, fraction in "[0-9]{0,5}") {
        let formatter = NumberFormatter::default();
        let text = format!("{value}.{fraction}");
        let formatted = formatter.format(&text);

        let (integer, rest) = formatted.split_once('.').unwrap();
        prop_assert_eq!(rest, fraction.as_str());
        prop_assert_eq!(integer.replace(' ', ""), value.to_string());
        for (i, group) in integer.split(' ').enumerate() {
            if i == 0 {
                prop_assert!(!group.is_empty() && group.len() <= 3);
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }

    #[test]
    fn factorial_grows_by_n(n in 1u32..20) {
        let n = f64::from(n);
        prop_assert_eq!(factorial(n).unwrap() / factorial(n - 1.0).unwrap(), n);
    }

    #[test]
    fn combination_is_symmetric((n, k) in (0u32..60).prop_flat_map(|n| (Just(n), 0..=n))) {
        let (n, k) = (f64::from(n), f64::from(k));
        prop_assert_eq!(combination(n, k).unwrap(), combination(n, n - k).unwrap());
    }

    #[test]
    fn permutation_is_combination_times_k_factorial(
        (n, k) in (0u32..15).prop_flat_map(|n| (Just(n), 0..=n))
    ) {
        let (n, k) = (f64::from(n), f64::from(k));
        prop_assert_eq!(
            permutation(n, k).unwrap(),
            combination(n, k).unwrap() * factorial(k).unwrap()
        );
    }
}
