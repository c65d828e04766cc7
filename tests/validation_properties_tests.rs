use formfields::config::{FailureMode, Rule, ValidationPolicy};
use formfields::expression::MiniJinjaEngine;
use formfields::{InputField, Pattern, ValidationFailure, ValidationRules, Validator};
use test_log::test;

fn with_rules(rules: ValidationRules) -> InputField {
    InputField::new("field", "Field").with_validation(rules)
}

fn string_of(length: usize) -> String {
    "a".repeat(length)
}

#[test]
fn length_bounds_are_inclusive() {
    let engine = MiniJinjaEngine::new();
    let validator = Validator::new(&engine, ValidationPolicy::default());

    for (min, max) in [(1, 1), (1, 4), (3, 8), (5, 20)] {
        let field =
            with_rules(ValidationRules::default().with_min_length(min).with_max_length(max));

        assert!(validator.validate_input(&field, &string_of(min)).is_ok());
        assert!(validator.validate_input(&field, &string_of(max)).is_ok());
        assert_eq!(
            validator.validate_input(&field, &string_of(min - 1)),
            Err(ValidationFailure::TooShort { min, actual: min - 1 })
        );
        assert_eq!(
            validator.validate_input(&field, &string_of(max + 1)),
            Err(ValidationFailure::TooLong { max, actual: max + 1 })
        );
    }
}

#[test]
fn required_rejects_only_empty_values() {
    let engine = MiniJinjaEngine::new();
    let validator = Validator::new(&engine, ValidationPolicy::default());
    let field = InputField::new("name", "Name").with_required(true);

    assert_eq!(validator.validate_input(&field, ""), Err(ValidationFailure::MissingValue));
    for value in ["a", " ", "Jane Doe"] {
        assert!(validator.validate_input(&field, value).is_ok());
    }
}

#[test]
fn not_required_never_yields_missing_value() {
    let engine = MiniJinjaEngine::new();
    let policy = ValidationPolicy::default().with_mode(FailureMode::Collect);
    let validator = Validator::new(&engine, policy);
    let field = with_rules(ValidationRules::default().with_min_length(2));

    let failures = validator.check_input(&field, "");
    assert!(!failures.contains(&ValidationFailure::MissingValue));
}

#[test]
fn pattern_matches_digits() {
    let engine = MiniJinjaEngine::new();
    let validator = Validator::new(&engine, ValidationPolicy::default());
    let field =
        with_rules(ValidationRules::default().with_pattern(Pattern::new("^[0-9]+$").unwrap()));

    assert!(validator.validate_input(&field, "123").is_ok());
    assert_eq!(
        validator.validate_input(&field, "12a"),
        Err(ValidationFailure::PatternMismatch { pattern: "^[0-9]+$".to_string() })
    );
}

#[test]
fn custom_function_message_is_reported_verbatim() {
    let engine = MiniJinjaEngine::new();
    let validator = Validator::new(&engine, ValidationPolicy::default());
    let field = with_rules(
        ValidationRules::default()
            .with_custom_fn(|value| (value == "x").then(|| "bad".to_string())),
    );

    assert_eq!(
        validator.validate_input(&field, "x"),
        Err(ValidationFailure::CustomFailure("bad".to_string()))
    );
    assert!(validator.validate_input(&field, "y").is_ok());
}

#[test]
fn default_order_runs_structural_checks_before_custom() {
    let engine = MiniJinjaEngine::new();
    let validator = Validator::new(&engine, ValidationPolicy::default());
    let field = with_rules(
        ValidationRules::default()
            .with_max_length(2)
            .with_pattern(Pattern::new("^[0-9]+$").unwrap())
            .with_custom_fn(|_| Some("custom".to_string())),
    );

    assert_eq!(
        validator.validate_input(&field, "abc"),
        Err(ValidationFailure::TooLong { max: 2, actual: 3 })
    );
}

#[test]
fn policy_order_decides_which_failure_comes_first() {
    let engine = MiniJinjaEngine::new();
    let policy = ValidationPolicy::default().with_order([
        Rule::Custom,
        Rule::Pattern,
        Rule::MaxLength,
    ]);
    let validator = Validator::new(&engine, policy);
    let field = with_rules(
        ValidationRules::default()
            .with_max_length(2)
            .with_pattern(Pattern::new("^[0-9]+$").unwrap())
            .with_custom_fn(|_| Some("custom".to_string())),
    );

    assert_eq!(
        validator.validate_input(&field, "abc"),
        Err(ValidationFailure::CustomFailure("custom".to_string()))
    );
}

#[test]
fn collect_mode_reports_failures_in_policy_order() {
    let engine = MiniJinjaEngine::new();
    let policy = ValidationPolicy::load("tests/fixtures/strict_policy.yaml").unwrap();
    assert_eq!(policy.mode, FailureMode::Collect);
    let validator = Validator::new(&engine, policy);
    let field = with_rules(
        ValidationRules::default()
            .with_max_length(2)
            .with_pattern(Pattern::new("^[0-9]+$").unwrap())
            .with_custom_fn(|_| Some("custom".to_string())),
    );

    assert_eq!(
        validator.check_input(&field, "abc"),
        vec![
            ValidationFailure::PatternMismatch { pattern: "^[0-9]+$".to_string() },
            ValidationFailure::TooLong { max: 2, actual: 3 },
            ValidationFailure::CustomFailure("custom".to_string()),
        ]
    );
}

#[test]
fn validator_is_usable_across_threads() {
    let field = with_rules(
        ValidationRules::default()
            .with_min_length(2)
            .with_custom_fn(|value| value.contains(' ').then(|| "no spaces".to_string())),
    );

    std::thread::scope(|scope| {
        for value in ["ok", "a b", "x"] {
            let field = &field;
            scope.spawn(move || {
                let engine = MiniJinjaEngine::new();
                let validator = Validator::new(&engine, ValidationPolicy::default());
                let result = validator.validate_input(field, value);
                match value {
                    "ok" => assert!(result.is_ok()),
                    "a b" => assert_eq!(
                        result,
                        Err(ValidationFailure::CustomFailure("no spaces".to_string()))
                    ),
                    _ => assert!(matches!(result, Err(ValidationFailure::TooShort { .. }))),
                }
            });
        }
    });
}
