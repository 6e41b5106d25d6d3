use crate::alphabet::{
    AlphabetError, BASE_ALPHABET_SIZE, FRACTION_ORDINATE, FULL_ALPHABET_SIZE, Operator, Symbol,
    alphabet, axis_labels, ordinate,
};

#[test]
fn test_operator_ordinates_follow_declared_order() {
    for (expected, symbol) in (1u8..).zip(["+", "-", "*", "/", "%", "^"]) {
        assert_eq!(ordinate(symbol), Ok(expected), "operator {}", symbol);
    }
}

#[test]
fn test_digit_ordinates_follow_declared_order() {
    for d in 0u8..10 {
        assert_eq!(ordinate(&d.to_string()), Ok(7 + d));
    }
}

#[test]
fn test_every_fraction_collapses_to_one_ordinate() {
    assert_eq!(ordinate("0.010"), Ok(17));
    assert_eq!(ordinate("0.500"), Ok(17));
    assert_eq!(ordinate("0.990"), Ok(17));
    assert_eq!(Symbol::Fraction(42).ordinate(), FRACTION_ORDINATE);
}

#[test]
fn test_unknown_symbols_are_rejected() {
    for bad in ["", "=", "?", "10", "0.5", "0.000", "0.015", "1.000", "0.1000", "x"] {
        assert_eq!(
            ordinate(bad),
            Err(AlphabetError::InvalidSymbol(bad.to_string())),
            "symbol {:?}",
            bad
        );
    }
}

#[test]
fn test_alphabet_sizes() {
    assert_eq!(alphabet(false).len(), 16);
    assert_eq!(alphabet(true).len(), 115);
    assert_eq!(BASE_ALPHABET_SIZE, 16);
    assert_eq!(FULL_ALPHABET_SIZE, 115);
}

#[test]
fn test_alphabet_order_is_operators_digits_fractions() {
    let full = alphabet(true);
    assert_eq!(full.first(), Some(&Symbol::Operator(Operator::Add)));
    assert_eq!(full.get(5), Some(&Symbol::Operator(Operator::Pow)));
    assert_eq!(full.get(6), Some(&Symbol::Digit(0)));
    assert_eq!(full.get(15), Some(&Symbol::Digit(9)));
    assert_eq!(full.get(16), Some(&Symbol::Fraction(1)));
    assert_eq!(full.last(), Some(&Symbol::Fraction(99)));
    assert_eq!(&full[..16], alphabet(false));
}

#[test]
fn test_ordinates_match_alphabet_positions() {
    for (index, symbol) in alphabet(false).iter().enumerate() {
        assert_eq!(usize::from(symbol.ordinate()), index + 1);
    }
}

#[test]
fn test_fraction_display_uses_three_decimals() {
    assert_eq!(Symbol::Fraction(1).to_string(), "0.010");
    assert_eq!(Symbol::Fraction(50).to_string(), "0.500");
    assert_eq!(Symbol::Fraction(99).to_string(), "0.990");
}

#[test]
fn test_symbol_text_round_trips_through_parse() {
    for symbol in alphabet(true) {
        assert_eq!(symbol.to_string().parse::<Symbol>(), Ok(*symbol));
    }
}

#[test]
fn test_axis_labels() {
    let labels = axis_labels(false);
    assert_eq!(labels.len(), 16);
    assert_eq!(labels.first(), Some(&(1, "+".to_string())));
    assert_eq!(labels.get(6), Some(&(7, "0".to_string())));

    let with_fractions = axis_labels(true);
    assert_eq!(with_fractions.last(), Some(&(17, "frac".to_string())));
}
