//! Rational expressions: a quotient of two polynomials.

use crate::poly::Poly;
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// `numer / denom`. A plain polynomial is represented with `denom = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalExpr {
    pub numer: Poly,
    pub denom: Poly,
}

impl RationalExpr {
    pub fn new(numer: Poly, denom: Poly) -> RationalExpr {
        RationalExpr { numer, denom }
    }

    pub fn from_poly(p: Poly) -> RationalExpr {
        RationalExpr {
            numer: p,
            denom: Poly::from_int(1),
        }
    }

    pub fn is_polynomial(&self) -> bool {
        self.denom.is_constant()
    }

    /// Cancel the common polynomial factor. Returns the reduced
    /// expression and the monic factor that was cancelled (1 when the
    /// quotient was already in lowest terms).
    pub fn simplified(&self) -> (RationalExpr, Poly) {
        let g = Poly::gcd(&self.numer, &self.denom);
        if g.is_zero() || g.is_one() {
            return (self.clone(), Poly::from_int(1));
        }
        let (n, _) = self.numer.div_rem(&g).expect("gcd is non-zero");
        let (d, _) = self.denom.div_rem(&g).expect("gcd is non-zero");
        (RationalExpr { numer: n, denom: d }, g)
    }

    /// Values of x excluded from the domain: rational roots of the
    /// denominator as given (before any cancellation).
    pub fn restrictions(&self) -> Vec<BigRational> {
        self.denom.rational_roots()
    }

    /// Evaluate at `x`; `None` when the denominator vanishes there.
    pub fn eval_f64(&self, x: f64) -> Option<f64> {
        let d = self.denom.eval_f64(x);
        if !d.is_finite() || d.abs() < 1e-9 {
            return None;
        }
        let n = self.numer.eval_f64(x);
        if !n.is_finite() {
            return None;
        }
        Some(n / d)
    }

    pub fn add(&self, rhs: &RationalExpr) -> RationalExpr {
        RationalExpr {
            numer: &(&self.numer * &rhs.denom) + &(&rhs.numer * &self.denom),
            denom: &self.denom * &rhs.denom,
        }
    }

    pub fn sub(&self, rhs: &RationalExpr) -> RationalExpr {
        RationalExpr {
            numer: &(&self.numer * &rhs.denom) - &(&rhs.numer * &self.denom),
            denom: &self.denom * &rhs.denom,
        }
    }

    pub fn mul(&self, rhs: &RationalExpr) -> RationalExpr {
        RationalExpr {
            numer: &self.numer * &rhs.numer,
            denom: &self.denom * &rhs.denom,
        }
    }

    pub fn div(&self, rhs: &RationalExpr) -> RationalExpr {
        RationalExpr {
            numer: &self.numer * &rhs.denom,
            denom: &self.denom * &rhs.numer,
        }
    }

    pub fn neg(&self) -> RationalExpr {
        RationalExpr {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }

    pub fn pow(&self, exp: u32) -> RationalExpr {
        let mut acc = RationalExpr::from_poly(Poly::from_int(1));
        for _ in 0..exp {
            acc = acc.mul(self);
        }
        acc
    }

    /// Horizontal asymptote of `y = self`, by degree comparison:
    /// lower numerator degree gives `y = 0`, equal degrees give the ratio
    /// of leading coefficients, higher numerator degree gives none.
    pub fn horizontal_asymptote(&self) -> Option<f64> {
        let n = self.numer.degree();
        let d = self.denom.degree();
        if self.numer.is_zero() || n < d {
            Some(0.0)
        } else if n == d {
            let ratio = self.numer.leading() / self.denom.leading();
            ratio.to_f64()
        } else {
            None
        }
    }
}

impl std::fmt::Display for RationalExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_polynomial() && self.denom.is_one() {
            return write!(f, "{}", self.numer);
        }
        let numer = self.numer.to_string();
        let denom = self.denom.to_string();
        let wrap = |s: &str| {
            if s.contains(' ') {
                format!("({s})")
            } else {
                s.to_string()
            }
        };
        write!(f, "{}/{}", wrap(&numer), wrap(&denom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn poly(coeffs: &[i64]) -> Poly {
        Poly::new(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    #[test]
    fn test_simplify_cancels_common_factor() {
        // (x^2 - 4)/(x + 2) -> x - 2, cancelled factor x + 2
        let expr = RationalExpr::new(poly(&[-4, 0, 1]), poly(&[2, 1]));
        let (reduced, cancelled) = expr.simplified();
        assert_eq!(reduced.numer, poly(&[-2, 1]));
        assert!(reduced.denom.is_one());
        assert_eq!(cancelled, poly(&[2, 1]));
    }

    #[test]
    fn test_simplify_lowest_terms_is_identity() {
        let expr = RationalExpr::new(poly(&[1]), poly(&[-2, 1]));
        let (reduced, cancelled) = expr.simplified();
        assert_eq!(reduced, expr);
        assert!(cancelled.is_one());
    }

    #[test]
    fn test_restrictions() {
        // 1/(x^2 - 4): x != 2, x != -2
        let expr = RationalExpr::new(poly(&[1]), poly(&[-4, 0, 1]));
        let restrictions = expr.restrictions();
        assert_eq!(restrictions.len(), 2);
    }

    #[test]
    fn test_eval_at_pole_is_none() {
        let expr = RationalExpr::new(poly(&[1]), poly(&[-2, 1]));
        assert!(expr.eval_f64(2.0).is_none());
        assert_eq!(expr.eval_f64(3.0), Some(1.0));
    }

    #[test]
    fn test_horizontal_asymptote() {
        // (2x^2 + 1)/(x^2 - 4) -> y = 2
        let expr = RationalExpr::new(poly(&[1, 0, 2]), poly(&[-4, 0, 1]));
        assert_eq!(expr.horizontal_asymptote(), Some(2.0));
        // 1/(x - 2) -> y = 0
        let expr = RationalExpr::new(poly(&[1]), poly(&[-2, 1]));
        assert_eq!(expr.horizontal_asymptote(), Some(0.0));
        // x^2/(x - 1) -> none
        let expr = RationalExpr::new(poly(&[0, 0, 1]), poly(&[-1, 1]));
        assert_eq!(expr.horizontal_asymptote(), None);
    }

    #[test]
    fn test_display() {
        let expr = RationalExpr::new(poly(&[-4, 0, 1]), poly(&[2, 1]));
        assert_eq!(expr.to_string(), "(x^2 - 4)/(x + 2)");
    }
}
