//! Rational arithmetic in lowest terms with a positive denominator.

use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

impl Rational {
    /// Construct and reduce. The denominator must be nonzero.
    pub fn new(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "denominator must be nonzero");
        let sign = if denom < 0 { -1 } else { 1 };
        let g = gcd(numer, denom);
        Rational {
            numer: sign * numer / g,
            denom: sign * denom / g,
        }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn abs(self) -> Self {
        Rational::new(self.numer.abs(), self.denom)
    }

    /// Raise to an integer power; negative exponents invert the rational.
    pub fn pow(self, exp: i32) -> Self {
        let magnitude = exp.unsigned_abs();
        let (numer, denom) = if exp >= 0 {
            (self.numer.pow(magnitude), self.denom.pow(magnitude))
        } else {
            (self.denom.pow(magnitude), self.numer.pow(magnitude))
        };
        Rational::new(numer, denom)
    }

    /// `base` raised to this rational, as a real number.
    pub fn expreal(self, base: f64) -> f64 {
        base.powf(self.numer as f64 / self.denom as f64)
    }
}

impl Add for Rational {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Rational::new(
            self.numer * other.denom + other.numer * self.denom,
            self.denom * other.denom,
        )
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Rational::new(
            self.numer * other.denom - other.numer * self.denom,
            self.denom * other.denom,
        )
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Rational::new(self.numer * other.numer, self.denom * other.denom)
    }
}

impl Div for Rational {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        assert!(other.numer != 0, "division by zero rational");
        Rational::new(self.numer * other.denom, self.denom * other.numer)
    }
}
