//! Complex numbers over f64 with the usual field operations.

use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn real(&self) -> f64 {
        self.re
    }

    pub fn imag(&self) -> f64 {
        self.im
    }

    pub fn conjugate(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// e^z = e^re * (cos im + i sin im)
    pub fn exp(&self) -> Self {
        let magnitude = self.re.exp();
        Complex::new(magnitude * self.im.cos(), magnitude * self.im.sin())
    }
}

impl Add for Complex {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Mul for Complex {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.im * other.re + self.re * other.im,
        )
    }
}

impl Div for Complex {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        let denom = other.re * other.re + other.im * other.im;
        Complex::new(
            (self.re * other.re + self.im * other.im) / denom,
            (self.im * other.re - self.re * other.im) / denom,
        )
    }
}
