/// Tolerance used when either side of an equation is non-integral
pub const EPSILON: f64 = 1e-9;

/// The equality separator splitting an equation into two sides
pub const EQUALS: char = '=';

/// Alternative spelling of `^`, produced when two `*` wildcards meet
pub const POWER_ALIAS: &str = "**";

/// Floor division, produced when two `/` wildcards meet
pub const FLOOR_DIV: &str = "//";

/// Parenthesis, unary and binary-operator nesting allowed before a parse is rejected
pub const MAX_NESTING_DEPTH: usize = 256;
