use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _)
                | Expression::Div(_, _)
                | Expression::FloorDiv(_, _)
                | Expression::Rem(_, _) => 2,
                Expression::Neg(_) => 3,
                Expression::Pow(_, _) => 4,
                Expression::Number(_) => 5,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Left operands need parens only when they bind looser than the
        // operator; right operands also when they bind equally, except for
        // the right-associative `^`.
        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            symbol: &str,
            r: &Expression,
            own: u8,
        ) -> fmt::Result {
            let need_l = if own == 4 {
                precedence(l) <= own
            } else {
                precedence(l) < own
            };
            let need_r = if own == 4 {
                precedence(r) < 3
            } else {
                precedence(r) <= own
            };
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, l, "+", r, 1),
                Expression::Sub(l, r) => write_binary(f, l, "-", r, 1),
                Expression::Mul(l, r) => write_binary(f, l, "*", r, 2),
                Expression::Div(l, r) => write_binary(f, l, "/", r, 2),
                Expression::FloorDiv(l, r) => write_binary(f, l, "//", r, 2),
                Expression::Rem(l, r) => write_binary(f, l, "%", r, 2),
                Expression::Pow(l, r) => write_binary(f, l, "^", r, 4),
                Expression::Neg(e) => {
                    write!(f, "-")?;
                    write_with_parens(f, e, precedence(e) < 3)
                }
            }
        }

        fmt_expression(f, self)
    }
}
