//! Recursive-descent parser for textbook rational-expression input.
//!
//! Accepts ASCII text as produced by the catalog normalizer: `^` powers,
//! explicit `*` `/` operators, implicit multiplication (`2x`, `3(x+1)`,
//! `(x-1)(x+2)`), decimals, and a single variable letter.

use crate::poly::Poly;
use crate::rational::RationalExpr;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error near '{0}'")]
    Syntax(String),
    #[error("unconsumed input: '{0}'")]
    UnconsumedInput(String),
    #[error("expected a single variable, found '{0}' and '{1}'")]
    MixedVariables(char, char),
    #[error("missing '=' in equation")]
    MissingEquals,
    #[error("equation has more than one '='")]
    MultipleEquals,
}

fn number(input: &str) -> IResult<&str, RationalExpr> {
    let (input, whole) = digit1(input)?;
    let (input, frac) = opt(preceded(char('.'), digit1))(input)?;
    let mut numer: BigInt = whole.parse().expect("digit1 yields a valid integer");
    let mut denom = BigInt::one();
    if let Some(frac) = frac {
        for c in frac.chars() {
            numer = numer * 10 + c.to_digit(10).expect("digit1 yields digits");
            denom *= 10;
        }
    }
    let value = BigRational::new(numer, denom);
    Ok((input, RationalExpr::from_poly(Poly::constant(value))))
}

fn variable(input: &str) -> IResult<&str, RationalExpr> {
    let (input, _) = satisfy(|c| c.is_ascii_alphabetic())(input)?;
    Ok((input, RationalExpr::from_poly(Poly::x())))
}

fn parens(input: &str) -> IResult<&str, RationalExpr> {
    delimited(
        preceded(multispace0, char('(')),
        expr,
        preceded(multispace0, char(')')),
    )(input)
}

fn atom(input: &str) -> IResult<&str, RationalExpr> {
    preceded(multispace0, alt((number, variable, parens)))(input)
}

fn exponent(input: &str) -> IResult<&str, u32> {
    let (input, digits) = preceded(pair(multispace0, char('^')), preceded(multispace0, digit1))(input)?;
    let value = digits.parse().unwrap_or(0);
    Ok((input, value))
}

fn power(input: &str) -> IResult<&str, RationalExpr> {
    let (input, base) = atom(input)?;
    let (input, exp) = opt(exponent)(input)?;
    let value = match exp {
        Some(e) => base.pow(e),
        None => base,
    };
    Ok((input, value))
}

fn unary(input: &str) -> IResult<&str, RationalExpr> {
    alt((
        map(preceded(pair(multispace0, char('-')), unary), |e| e.neg()),
        power,
    ))(input)
}

#[derive(Clone, Copy)]
enum TermOp {
    Mul,
    Div,
    Implicit,
}

fn term(input: &str) -> IResult<&str, RationalExpr> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0(alt((
        map(
            pair(preceded(multispace0, char('*')), unary),
            |(_, e)| (TermOp::Mul, e),
        ),
        map(
            pair(preceded(multispace0, char('/')), unary),
            |(_, e)| (TermOp::Div, e),
        ),
        // Implicit multiplication: an adjacent factor with no operator.
        map(power, |e| (TermOp::Implicit, e)),
    )))(input)?;
    let value = rest.into_iter().fold(first, |acc, (op, e)| match op {
        TermOp::Mul | TermOp::Implicit => acc.mul(&e),
        TermOp::Div => acc.div(&e),
    });
    Ok((input, value))
}

fn expr(input: &str) -> IResult<&str, RationalExpr> {
    let (input, first) = term(input)?;
    let (input, rest) = many0(pair(
        preceded(multispace0, alt((char('+'), char('-')))),
        term,
    ))(input)?;
    let value = rest.into_iter().fold(first, |acc, (op, e)| match op {
        '+' => acc.add(&e),
        _ => acc.sub(&e),
    });
    Ok((input, value))
}

fn check_single_variable(input: &str) -> Result<(), ParseError> {
    let mut seen: Option<char> = None;
    for c in input.chars().filter(|c| c.is_ascii_alphabetic()) {
        match seen {
            None => seen = Some(c),
            Some(first) if first != c => return Err(ParseError::MixedVariables(first, c)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Parse a rational expression in one variable.
pub fn parse_rational(input: &str) -> Result<RationalExpr, ParseError> {
    check_single_variable(input)?;
    match expr(input) {
        Ok((rest, value)) => {
            let rest = rest.trim();
            if rest.is_empty() {
                Ok(value)
            } else {
                Err(ParseError::UnconsumedInput(rest.to_string()))
            }
        }
        Err(_) => Err(ParseError::Syntax(input.trim().to_string())),
    }
}

/// Parse `lhs = rhs` where both sides are rational expressions.
pub fn parse_equation(input: &str) -> Result<(RationalExpr, RationalExpr), ParseError> {
    let mut sides = input.split('=');
    let lhs = sides.next().ok_or(ParseError::MissingEquals)?;
    let rhs = sides.next().ok_or(ParseError::MissingEquals)?;
    if sides.next().is_some() {
        return Err(ParseError::MultipleEquals);
    }
    Ok((parse_rational(lhs)?, parse_rational(rhs)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> Poly {
        Poly::new(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    #[test]
    fn test_parse_polynomial() {
        let e = parse_rational("x^2 - 4").unwrap();
        assert_eq!(e.numer, poly(&[-4, 0, 1]));
        assert!(e.denom.is_one());
    }

    #[test]
    fn test_parse_implicit_multiplication() {
        let e = parse_rational("2x^2 + 1").unwrap();
        assert_eq!(e.numer, poly(&[1, 0, 2]));

        let e = parse_rational("(x - 2)(x + 2)").unwrap();
        assert_eq!(e.numer, poly(&[-4, 0, 1]));
    }

    #[test]
    fn test_parse_quotient() {
        let e = parse_rational("(x^2 - 4)/(x + 2)").unwrap();
        assert_eq!(e.numer, poly(&[-4, 0, 1]));
        assert_eq!(e.denom, poly(&[2, 1]));
    }

    #[test]
    fn test_parse_sum_of_fractions() {
        // 1/(x + 1) + 2/(x - 1)
        let e = parse_rational("1/(x + 1) + 2/(x - 1)").unwrap();
        // = (3x + 1) / (x^2 - 1)
        let (reduced, _) = e.simplified();
        assert_eq!(reduced.numer, poly(&[1, 3]));
        assert_eq!(reduced.denom, poly(&[-1, 0, 1]));
    }

    #[test]
    fn test_parse_decimal() {
        let e = parse_rational("0.5x").unwrap();
        assert_eq!(
            e.numer,
            Poly::monomial(BigRational::new(BigInt::from(1), BigInt::from(2)), 1)
        );
    }

    #[test]
    fn test_parse_unary_minus() {
        let e = parse_rational("-x + 3").unwrap();
        assert_eq!(e.numer, poly(&[3, -1]));
    }

    #[test]
    fn test_parse_equation() {
        let (lhs, rhs) = parse_equation("1/(x - 2) = 3/(x + 2)").unwrap();
        assert_eq!(lhs.denom, poly(&[-2, 1]));
        assert_eq!(rhs.denom, poly(&[2, 1]));
    }

    #[test]
    fn test_mixed_variables_rejected() {
        assert_eq!(
            parse_rational("x + y"),
            Err(ParseError::MixedVariables('x', 'y'))
        );
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(matches!(
            parse_rational("x + 2 )"),
            Err(ParseError::UnconsumedInput(_))
        ));
    }

    #[test]
    fn test_double_equals_rejected() {
        assert_eq!(
            parse_equation("x = 1 = 2"),
            Err(ParseError::MultipleEquals)
        );
    }
}
