use crate::expression::{
    Expression, ExpressionError, MAX_NESTING_DEPTH, evaluate_equation, is_valid, normalize, parse,
    values_equal,
};

fn eval(text: &str) -> Result<f64, ExpressionError> {
    parse(&normalize(text))?.evaluate()
}

fn assert_evaluates(text: &str, expected: f64) {
    let result = eval(text);
    assert!(result.is_ok(), "'{}' failed: {:?}", text, result);
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "'{}' evaluated to {}, expected {}",
            text,
            value,
            expected
        );
    }
}

#[test]
fn test_operator_precedence() {
    assert_evaluates("2 + 3 * 4", 14.0);
    assert_evaluates("(2 + 3) * 4", 20.0);
    assert_evaluates("10 - 4 - 3", 3.0);
    assert_evaluates("100 / 10 / 5", 2.0);
    assert_evaluates("2 * 3 ^ 2", 18.0);
    assert_evaluates("10 % 1 + 1", 1.0);
    assert_evaluates("10 % 1 % 1", 0.0);
    assert_evaluates("10 / 4", 2.5);
}

#[test]
fn test_power_is_right_associative() {
    assert_evaluates("2 ^ 3 ^ 2", 512.0);
    assert_evaluates("(2 ^ 3) ^ 2", 64.0);
}

#[test]
fn test_unary_operators() {
    assert_evaluates("++4", 4.0);
    assert_evaluates("-+4", -4.0);
    assert_evaluates("--4", 4.0);
    assert_evaluates("2 * -3", -6.0);
    assert_evaluates("-2 ^ 2", -4.0);
    assert_evaluates("(-2) ^ 2", 4.0);
    assert_evaluates("2 ^ -1", 0.5);
}

#[test]
fn test_modulo_takes_sign_of_divisor() {
    assert_evaluates("7 % 3", 1.0);
    assert_evaluates("-1 % 3", 2.0);
    assert_evaluates("1 % -3", -2.0);
    assert_evaluates("5.5 % 2", 1.5);
}

#[test]
fn test_double_star_is_power() {
    assert_eq!(normalize("2 * * 3"), "2^3");
    assert_evaluates("2 * * 3", 8.0);
    assert_evaluates("2**3", 8.0);
}

#[test]
fn test_double_slash_is_floor_division() {
    assert_eq!(normalize("6 / / 2"), "6//2");
    assert_evaluates("6 / / 2", 3.0);
    assert_evaluates("7 // 2", 3.0);
    assert_evaluates("-7 // 2", -4.0);
    assert_evaluates("7 // -2", -4.0);
    assert_evaluates("2 + 7 // 2 * 2", 8.0);
    assert_eq!(eval("1 // 0"), Err(ExpressionError::DivisionByZero));
    assert!(matches!(
        parse("6///2"),
        Err(ExpressionError::UnexpectedToken { .. })
    ));
    assert!(is_valid("6 / / 2 = 3"));
    assert!(!is_valid("7 / / 2 = 3.5"));
}

#[test]
fn test_whitespace_joins_digits() {
    assert_eq!(normalize(" 1 0 = 1 0 "), "10=10");
    assert!(is_valid("1 0 = 10"));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse(""), Err(ExpressionError::EmptyExpression));
    assert_eq!(parse("1++"), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(parse("(1 + 2"), Err(ExpressionError::UnbalancedParentheses));
    assert_eq!(parse("1 + 2)"), Err(ExpressionError::UnbalancedParentheses));
    assert_eq!(
        parse("x"),
        Err(ExpressionError::UnexpectedCharacter {
            ch: 'x',
            position: 0
        })
    );
    assert!(matches!(
        parse("2(3)"),
        Err(ExpressionError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        parse("*+4"),
        Err(ExpressionError::UnexpectedToken { .. })
    ));
    assert_eq!(parse("05"), Err(ExpressionError::LeadingZero("05".to_string())));
}

#[test]
fn test_deep_nesting_is_rejected() {
    let depth = MAX_NESTING_DEPTH + 10;
    let parens = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse(&parens),
        Err(ExpressionError::NestingTooDeep(MAX_NESTING_DEPTH))
    );

    let negations = format!("{}1", "-".repeat(depth));
    assert_eq!(
        parse(&negations),
        Err(ExpressionError::NestingTooDeep(MAX_NESTING_DEPTH))
    );

    assert_evaluates(&format!("{}1{}", "(".repeat(20), ")".repeat(20)), 1.0);
}

#[test]
fn test_long_operator_chains_are_rejected() {
    let depth = MAX_NESTING_DEPTH + 10;
    for op in ["+", "-", "*", "/", "//", "%"] {
        let chain = format!("{}1", format!("1 {} ", op).repeat(depth));
        assert_eq!(
            parse(&chain),
            Err(ExpressionError::NestingTooDeep(MAX_NESTING_DEPTH)),
            "chain of '{}'",
            op
        );
    }

    let longest = format!("{}1", "1 + ".repeat(MAX_NESTING_DEPTH));
    assert_evaluates(&longest, (MAX_NESTING_DEPTH + 1) as f64);
    assert!(!is_valid(&format!("{}1 = 1", "1 + ".repeat(100_000))));
}

#[test]
fn test_evaluation_failures() {
    assert_eq!(eval("1 / 0"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("5 % 0"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("1 / (2 - 2)"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("0 ^ -1"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("(-8) ^ 0.5"), Err(ExpressionError::ComplexResult));
    assert_eq!(eval("9 ^ 9 ^ 9"), Err(ExpressionError::Overflow));
}

#[test]
fn test_zero_powers() {
    assert_evaluates("0 ^ 0", 1.0);
    assert_evaluates("0 ^ 2", 0.0);
    assert_evaluates("(-2) ^ 3", -8.0);
}

#[test]
fn test_separator_count() {
    assert_eq!(
        evaluate_equation("1 + 1"),
        Err(ExpressionError::SeparatorCount(0))
    );
    assert_eq!(
        evaluate_equation("1 = 1 = 1"),
        Err(ExpressionError::SeparatorCount(2))
    );
    assert_eq!(evaluate_equation("1 + 1 = 2"), Ok(true));
    assert_eq!(evaluate_equation("1 + 1 = 3"), Ok(false));
}

#[test]
fn test_is_valid_never_fails_outward() {
    assert!(is_valid("1 + 1 = 2"));
    assert!(!is_valid("1 + 1 = 3"));
    assert!(!is_valid("1 / 0 = 1"));
    assert!(!is_valid("1 + = 1"));
    assert!(!is_valid("05 = 5"));
    assert!(!is_valid("= 1"));
    assert!(!is_valid(""));
}

// Naive float equality would reject these.
#[test]
fn test_fractional_sides_use_tolerance() {
    assert!(is_valid("0.1 + 0.2 = 0.3"));
    assert!(is_valid("0.100 + 0.2 = 0.3"));
    assert!(is_valid("1 / 3 * 3 = 1"));
    assert!(!is_valid("1 / 3 = 0.333"));
    assert!(!is_valid("3 = 3.0000001"));
}

#[test]
fn test_near_zero_side_uses_tolerance() {
    assert!(is_valid("0.100 + 0.200 - 0.300 = 0"));
    assert!(is_valid("0 = 0.3 - 0.1 - 0.2"));
    assert!(values_equal(0.1 + 0.2 - 0.3, 0.0));
    assert!(!is_valid("0.100 + 0.200 - 0.310 = 0"));
}

#[test]
fn test_values_equal() {
    assert!(values_equal(3.0, 3.0));
    assert!(values_equal(0.1 + 0.2, 0.3));
    assert!(!values_equal(1e16, 1e16 + 2.0));
    assert!(!values_equal(0.5, 0.6));
}

#[test]
fn test_repeated_evaluation_is_idempotent() {
    let text = "10 % 1 + 1 = 1";
    let first = is_valid(text);
    for _ in 0..5 {
        assert_eq!(is_valid(text), first);
    }
}

#[test]
fn test_display_reparses_to_same_tree() {
    for text in [
        "2 ^ 3 ^ 2",
        "(2 ^ 3) ^ 2",
        "-2 ^ 2",
        "(-2) ^ 2",
        "10 - (2 - 3)",
        "-(1 + 2)",
        "2 * -3",
        "(1 + 2) % 4 / 5",
        "7 // (2 * 3) // 1",
    ] {
        let parsed = parse(text);
        assert!(parsed.is_ok(), "'{}' failed to parse", text);
        if let Ok(expr) = parsed {
            let shown = expr.to_string();
            assert_eq!(parse(&shown), Ok(expr), "'{}' displayed as '{}'", text, shown);
        }
    }
}

#[test]
fn test_display_format() {
    let expr = Expression::Sub(
        Box::new(Expression::Number(10.0)),
        Box::new(Expression::Sub(
            Box::new(Expression::Number(2.0)),
            Box::new(Expression::Number(3.0)),
        )),
    );
    assert_eq!(expr.to_string(), "10 - (2 - 3)");
}
