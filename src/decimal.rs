//! Arbitrary-precision signed decimal arithmetic.
//!
//! A value is `mantissa * 10^(-scale)` with the mantissa an arbitrary
//! precision integer. Values are kept normalized (no trailing zeros in the
//! fractional part), so equality is plain field equality after alignment.

use rug::ops::Pow;
use rug::Integer;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone)]
pub struct Decimal {
    mantissa: Integer,
    scale: usize,
}

impl Decimal {
    /// Parse from a plain decimal literal: optional sign, digits, optional
    /// fractional part. Anything else is `None`.
    pub fn try_from(input: &str) -> Option<Decimal> {
        let input = input.trim();
        let (sign, rest) = match input.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, input.strip_prefix('+').unwrap_or(input)),
        };

        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let digits = format!("{}{}", int_part, frac_part);
        let mantissa = digits.parse::<Integer>().ok()? * sign;
        let mut value = Decimal {
            mantissa,
            scale: frac_part.len(),
        };
        value.normalize();
        Some(value)
    }

    fn normalize(&mut self) {
        while self.scale > 0 && self.mantissa.is_divisible_u(10) {
            self.mantissa /= 10;
            self.scale -= 1;
        }
    }

    /// Both mantissas brought to a common scale.
    fn aligned(&self, other: &Decimal) -> (Integer, Integer, usize) {
        let scale = self.scale.max(other.scale);
        let lift = |d: &Decimal| {
            d.mantissa.clone() * Integer::from(10u32).pow((scale - d.scale) as u32)
        };
        (lift(self), lift(other), scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (a, b, scale) = self.aligned(&other);
        let mut result = Decimal {
            mantissa: a + b,
            scale,
        };
        result.normalize();
        result
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let (a, b, scale) = self.aligned(&other);
        let mut result = Decimal {
            mantissa: a - b,
            scale,
        };
        result.normalize();
        result
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = Decimal {
            mantissa: self.mantissa * other.mantissa,
            scale: self.scale + other.scale,
        };
        result.normalize();
        result
    }
}
