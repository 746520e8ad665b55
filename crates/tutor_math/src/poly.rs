//! Dense univariate polynomials over `BigRational`, ascending coefficient
//! order. Small textbook degrees only; no sparse representation needed.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// A polynomial in one variable. The zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    coeffs: Vec<BigRational>,
}

impl Poly {
    /// Build from ascending coefficients, trimming trailing zeros.
    pub fn new(mut coeffs: Vec<BigRational>) -> Poly {
        while coeffs.last().map(Zero::is_zero).unwrap_or(false) {
            coeffs.pop();
        }
        Poly { coeffs }
    }

    pub fn zero() -> Poly {
        Poly { coeffs: Vec::new() }
    }

    pub fn constant(value: BigRational) -> Poly {
        Poly::new(vec![value])
    }

    pub fn from_int(value: i64) -> Poly {
        Poly::constant(BigRational::from_integer(BigInt::from(value)))
    }

    /// The monomial `coeff * x^degree`.
    pub fn monomial(coeff: BigRational, degree: usize) -> Poly {
        if coeff.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![BigRational::zero(); degree + 1];
        coeffs[degree] = coeff;
        Poly { coeffs }
    }

    /// The variable itself.
    pub fn x() -> Poly {
        Poly::monomial(BigRational::one(), 1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Degree; the zero polynomial reports 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Leading coefficient; 0 for the zero polynomial.
    pub fn leading(&self) -> BigRational {
        self.coeffs.last().cloned().unwrap_or_else(BigRational::zero)
    }

    pub fn coeff(&self, degree: usize) -> BigRational {
        self.coeffs
            .get(degree)
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    pub fn eval_rational(&self, x: &BigRational) -> BigRational {
        let mut acc = BigRational::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    pub fn eval_f64(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c.to_f64().unwrap_or(f64::NAN);
        }
        acc
    }

    pub fn scale(&self, factor: &BigRational) -> Poly {
        if factor.is_zero() {
            return Poly::zero();
        }
        Poly::new(self.coeffs.iter().map(|c| c * factor).collect())
    }

    /// Polynomial long division. `None` when dividing by zero.
    pub fn div_rem(&self, divisor: &Poly) -> Option<(Poly, Poly)> {
        if divisor.is_zero() {
            return None;
        }
        let mut rem = self.clone();
        let mut quot = Poly::zero();
        let dlead = divisor.leading();
        while !rem.is_zero() && rem.degree() >= divisor.degree() {
            let shift = rem.degree() - divisor.degree();
            let factor = rem.leading() / &dlead;
            let term = Poly::monomial(factor, shift);
            quot = &quot + &term;
            rem = &rem - &(divisor * &term);
        }
        Some((quot, rem))
    }

    /// Monic greatest common divisor (Euclid). `gcd(0, 0) = 0`.
    pub fn gcd(a: &Poly, b: &Poly) -> Poly {
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b).expect("non-zero divisor");
            a = b;
            b = r;
        }
        if a.is_zero() {
            return a;
        }
        let lead = a.leading();
        a.scale(&lead.recip())
    }

    /// Distinct rational roots via the rational root theorem, ascending.
    ///
    /// Coefficients too large for the divisor enumeration yield an empty
    /// list; the bounded numeric search in the solver does not depend on
    /// this being complete.
    pub fn rational_roots(&self) -> Vec<BigRational> {
        if self.is_constant() {
            return Vec::new();
        }

        // Clear denominators to get integer coefficients.
        let denom_lcm = self
            .coeffs
            .iter()
            .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
        let mut ints: Vec<BigInt> = self
            .coeffs
            .iter()
            .map(|c| c.numer() * (&denom_lcm / c.denom()))
            .collect();

        let mut roots = Vec::new();

        // Factor out x^k: zero constant term means 0 is a root.
        while ints.first().map(Zero::is_zero).unwrap_or(false) {
            if !roots.contains(&BigRational::zero()) {
                roots.push(BigRational::zero());
            }
            ints.remove(0);
        }
        if ints.len() < 2 {
            roots.sort();
            return roots;
        }

        let (Some(a0), Some(an)) = (
            ints.first().and_then(|n| n.abs().to_i128()),
            ints.last().and_then(|n| n.abs().to_i128()),
        ) else {
            roots.sort();
            return roots;
        };

        for p in divisors(a0) {
            for q in &divisors(an) {
                for sign in [1i128, -1] {
                    let candidate =
                        BigRational::new(BigInt::from(sign * p), BigInt::from(*q));
                    if self.eval_rational(&candidate).is_zero() && !roots.contains(&candidate) {
                        roots.push(candidate);
                    }
                }
            }
        }
        roots.sort();
        roots
    }
}

fn divisors(n: i128) -> Vec<i128> {
    if n == 0 {
        return vec![1];
    }
    let n = n.abs();
    let mut out = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            out.push(d);
            if d != n / d {
                out.push(n / d);
            }
        }
        d += 1;
    }
    out
}

impl std::ops::Add for &Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            coeffs.push(self.coeff(i) + rhs.coeff(i));
        }
        Poly::new(coeffs)
    }
}

impl std::ops::Sub for &Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            coeffs.push(self.coeff(i) - rhs.coeff(i));
        }
        Poly::new(coeffs)
    }
}

impl std::ops::Mul for &Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Poly::new(coeffs)
    }
}

impl std::ops::Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly::new(self.coeffs.iter().map(|c| -c).collect())
    }
}

fn format_coeff(c: &BigRational) -> String {
    if c.denom().is_one() {
        format!("{}", c.numer())
    } else {
        format!("{}/{}", c.numer(), c.denom())
    }
}

impl std::fmt::Display for Poly {
    /// Descending-power display with `x` as the variable: `2x^2 + x - 4`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for degree in (0..self.coeffs.len()).rev() {
            let c = &self.coeffs[degree];
            if c.is_zero() {
                continue;
            }
            let abs = c.abs();
            if first {
                if c.is_negative() {
                    f.write_str("-")?;
                }
                first = false;
            } else if c.is_negative() {
                f.write_str(" - ")?;
            } else {
                f.write_str(" + ")?;
            }
            let show_coeff = degree == 0 || !abs.is_one();
            if show_coeff {
                f.write_str(&format_coeff(&abs))?;
            }
            match degree {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{degree}")?,
            }
        }
        Ok(())
    }
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
    fn test_display() {
        // x^2 - 4
        assert_eq!(poly(&[-4, 0, 1]).to_string(), "x^2 - 4");
        // 2x^2 + x - 4
        assert_eq!(poly(&[-4, 1, 2]).to_string(), "2x^2 + x - 4");
        assert_eq!(poly(&[0]).to_string(), "0");
        assert_eq!(poly(&[0, -1]).to_string(), "-x");
    }

    #[test]
    fn test_mul_and_div_rem_round_trip() {
        let a = poly(&[-2, 1]); // x - 2
        let b = poly(&[2, 1]); // x + 2
        let product = &a * &b;
        assert_eq!(product, poly(&[-4, 0, 1]));

        let (q, r) = product.div_rem(&b).unwrap();
        assert_eq!(q, a);
        assert!(r.is_zero());
    }

    #[test]
    fn test_gcd_of_shared_factor() {
        // gcd(x^2 - 4, x + 2) = x + 2 (monic)
        let g = Poly::gcd(&poly(&[-4, 0, 1]), &poly(&[2, 1]));
        assert_eq!(g, poly(&[2, 1]));
    }

    #[test]
    fn test_rational_roots_quadratic() {
        // x^2 - x - 6 = (x - 3)(x + 2)
        let roots = poly(&[-6, -1, 1]).rational_roots();
        let expected: Vec<BigRational> = [-2i64, 3]
            .iter()
            .map(|&r| BigRational::from_integer(BigInt::from(r)))
            .collect();
        assert_eq!(roots, expected);
    }

    #[test]
    fn test_rational_roots_with_fraction() {
        // 2x - 1 has root 1/2
        let roots = poly(&[-1, 2]).rational_roots();
        assert_eq!(roots, vec![BigRational::new(BigInt::from(1), BigInt::from(2))]);
    }

    #[test]
    fn test_rational_roots_zero_root() {
        // x^2 + 2x = x(x + 2)
        let roots = poly(&[0, 2, 1]).rational_roots();
        assert_eq!(roots.len(), 2);
        assert!(roots.contains(&BigRational::zero()));
    }

    #[test]
    fn test_eval() {
        let p = poly(&[-4, 0, 1]); // x^2 - 4
        assert_eq!(p.eval_f64(3.0), 5.0);
        assert!(p
            .eval_rational(&BigRational::from_integer(BigInt::from(2)))
            .is_zero());
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(128))]

            /// Long division reconstructs the dividend: a = q*b + r with
            /// deg(r) < deg(b).
            #[test]
            fn div_rem_reconstructs(
                a_coeffs in vec(-9i64..10, 1..6),
                b_coeffs in vec(-9i64..10, 1..4),
            ) {
                let a = poly(&a_coeffs);
                let b = poly(&b_coeffs);
                prop_assume!(!b.is_zero());
                let (q, r) = a.div_rem(&b).unwrap();
                prop_assert_eq!(&(&q * &b) + &r, a);
                prop_assert!(r.is_zero() || r.degree() < b.degree());
            }

            /// The gcd divides both inputs exactly.
            #[test]
            fn gcd_divides_both(
                a_coeffs in vec(-9i64..10, 1..5),
                b_coeffs in vec(-9i64..10, 1..5),
            ) {
                let a = poly(&a_coeffs);
                let b = poly(&b_coeffs);
                prop_assume!(!a.is_zero() && !b.is_zero());
                let g = Poly::gcd(&a, &b);
                let (_, ra) = a.div_rem(&g).unwrap();
                let (_, rb) = b.div_rem(&g).unwrap();
                prop_assert!(ra.is_zero());
                prop_assert!(rb.is_zero());
            }
        }
    }
}
