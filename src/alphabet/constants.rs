use crate::alphabet::symbol::{Operator, Symbol};

pub const OPERATORS: [Operator; 6] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Rem,
    Operator::Pow,
];

pub const DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

pub const FRACTION_COUNT: usize = 99;
pub const BASE_ALPHABET_SIZE: usize = OPERATORS.len() + DIGITS.len();
pub const FULL_ALPHABET_SIZE: usize = BASE_ALPHABET_SIZE + FRACTION_COUNT;

pub(crate) const DIGIT_ORDINATE_BASE: u8 = 7;
pub const FRACTION_ORDINATE: u8 = 17;

const fn build_alphabet() -> [Symbol; FULL_ALPHABET_SIZE] {
    let mut out = [Symbol::Digit(0); FULL_ALPHABET_SIZE];
    let mut i = 0;
    while i < OPERATORS.len() {
        out[i] = Symbol::Operator(OPERATORS[i]);
        i += 1;
    }
    let mut d = 0;
    while d < DIGITS.len() {
        out[OPERATORS.len() + d] = Symbol::Digit(DIGITS[d]);
        d += 1;
    }
    let mut h = 0;
    while h < FRACTION_COUNT {
        out[BASE_ALPHABET_SIZE + h] = Symbol::Fraction(h as u8 + 1);
        h += 1;
    }
    out
}

// Operators, then digits, then fractions. The base alphabet is a prefix.
static ALPHABET: [Symbol; FULL_ALPHABET_SIZE] = build_alphabet();

/// Substitution alphabet in enumeration order
pub fn alphabet(include_fractions: bool) -> &'static [Symbol] {
    if include_fractions {
        &ALPHABET
    } else {
        &ALPHABET[..BASE_ALPHABET_SIZE]
    }
}

/// Tick labels for a presentation axis, as `(ordinate, label)` pairs
pub fn axis_labels(include_fractions: bool) -> Vec<(u8, String)> {
    let mut labels: Vec<(u8, String)> = alphabet(false)
        .iter()
        .map(|symbol| (symbol.ordinate(), symbol.to_string()))
        .collect();
    if include_fractions {
        labels.push((FRACTION_ORDINATE, "frac".to_string()));
    }
    labels
}
