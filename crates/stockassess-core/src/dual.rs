//! Forward-mode dual numbers.
//!
//! A [`Dual`] carries a value and one directional derivative. Seeding an
//! input with [`Dual::variable`] and evaluating any routine generic over
//! [`Scalar`] yields the exact derivative of the result with respect to that
//! input in a single pass:
//!
//! - `(a, a') + (b, b') = (a + b, a' + b')`
//! - `(a, a') * (b, b') = (ab, a'b + ab')`
//! - `(a, a') / (b, b') = (a/b, (a'b - ab') / b²)`
//! - `exp(a, a') = (eᵃ, eᵃ a')`, `ln(a, a') = (ln a, a'/a)`
//!
//! # Example
//!
//! ```rust
//! use stockassess_core::{Dual, Scalar};
//!
//! // d/dx (x * exp(x)) at x = 0 is 1
//! let x = Dual::variable(0.0_f64);
//! let y = x * x.exp();
//! assert_eq!(y.value, 0.0);
//! assert_eq!(y.deriv, 1.0);
//! ```

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Float, One, Zero};

use crate::scalar::Scalar;

/// A value paired with its derivative along one direction.
///
/// Equality and ordering compare the primal `value` only, so a dual number
/// behaves like its value in comparisons and selections.
#[derive(Debug, Clone, Copy)]
pub struct Dual<T = f64> {
    /// The primal value.
    pub value: T,
    /// The directional derivative.
    pub deriv: T,
}

impl<T: Float> Dual<T> {
    /// Creates a dual number with explicit value and derivative.
    pub fn new(value: T, deriv: T) -> Self {
        Self { value, deriv }
    }

    /// Creates a constant (zero derivative).
    pub fn constant(value: T) -> Self {
        Self {
            value,
            deriv: T::zero(),
        }
    }

    /// Creates the independent variable (unit derivative).
    pub fn variable(value: T) -> Self {
        Self {
            value,
            deriv: T::one(),
        }
    }
}

impl<T: Float> PartialEq for Dual<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Float> PartialOrd for Dual<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Float> Add for Dual<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.deriv + rhs.deriv)
    }
}

impl<T: Float> Sub for Dual<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.deriv - rhs.deriv)
    }
}

impl<T: Float> Mul for Dual<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Product rule
        Self::new(
            self.value * rhs.value,
            self.deriv * rhs.value + self.value * rhs.deriv,
        )
    }
}

impl<T: Float> Div for Dual<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        // Quotient rule
        Self::new(
            self.value / rhs.value,
            (self.deriv * rhs.value - self.value * rhs.deriv) / (rhs.value * rhs.value),
        )
    }
}

impl<T: Float> Neg for Dual<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, -self.deriv)
    }
}

impl<T: Float> AddAssign for Dual<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> SubAssign for Dual<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Float> MulAssign for Dual<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Float> DivAssign for Dual<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Float> Zero for Dual<T> {
    fn zero() -> Self {
        Self::constant(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<T: Float> One for Dual<T> {
    fn one() -> Self {
        Self::constant(T::one())
    }
}

impl<T> Scalar for Dual<T>
where
    T: Float + Debug + Send + Sync,
{
    fn from_f64(value: f64) -> Self {
        Self::constant(T::from(value).unwrap_or_else(T::nan))
    }

    fn value(self) -> f64 {
        self.value.to_f64().unwrap_or(f64::NAN)
    }

    fn ln(self) -> Self {
        Self::new(self.value.ln(), self.deriv / self.value)
    }

    fn exp(self) -> Self {
        let e = self.value.exp();
        Self::new(e, self.deriv * e)
    }

    fn powf(self, n: Self) -> Self {
        let v = self.value.powf(n.value);
        let mut deriv = n.value * self.value.powf(n.value - T::one()) * self.deriv;
        // The ln(x) term only exists when the exponent itself varies; skipping
        // it keeps x <= 0 with a constant exponent finite.
        if !n.deriv.is_zero() {
            deriv = deriv + v * self.value.ln() * n.deriv;
        }
        Self::new(v, deriv)
    }

    fn powi(self, n: i32) -> Self {
        let v = self.value.powi(n);
        let scale = T::from(n).unwrap_or_else(T::nan);
        Self::new(v, scale * self.value.powi(n - 1) * self.deriv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors() {
        let c = Dual::constant(3.0);
        assert_relative_eq!(c.deriv, 0.0);

        let x = Dual::variable(3.0);
        assert_relative_eq!(x.value, 3.0);
        assert_relative_eq!(x.deriv, 1.0);
    }

    #[test]
    fn test_product_and_quotient_rules() {
        let x = Dual::variable(2.0);
        let three = Dual::constant(3.0);

        // d/dx (3x^2) = 6x = 12
        let y = three * x * x;
        assert_relative_eq!(y.value, 12.0);
        assert_relative_eq!(y.deriv, 12.0);

        // d/dx (1/x) = -1/x^2 = -0.25
        let r = Dual::one() / x;
        assert_relative_eq!(r.value, 0.5);
        assert_relative_eq!(r.deriv, -0.25);
    }

    #[test]
    fn test_transcendentals() {
        let x = Dual::variable(1.5);

        let e = x.exp();
        assert_relative_eq!(e.value, 1.5_f64.exp());
        assert_relative_eq!(e.deriv, 1.5_f64.exp());

        let l = Scalar::ln(x);
        assert_relative_eq!(l.value, 1.5_f64.ln());
        assert_relative_eq!(l.deriv, 1.0 / 1.5);
    }

    #[test]
    fn test_powers() {
        let x = Dual::variable(2.0);

        let cube = x.powi(3);
        assert_relative_eq!(cube.value, 8.0);
        assert_relative_eq!(cube.deriv, 12.0);

        let root = x.powf(Dual::constant(0.5));
        assert_relative_eq!(root.value, 2.0_f64.sqrt());
        assert_relative_eq!(root.deriv, 0.5 / 2.0_f64.sqrt());

        // d/dx x^x = x^x (ln x + 1)
        let self_pow = x.powf(x);
        assert_relative_eq!(self_pow.value, 4.0);
        assert_relative_eq!(self_pow.deriv, 4.0 * (2.0_f64.ln() + 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_powf_negative_base_constant_exponent() {
        let x = Dual::variable(-2.0);
        let sq = x.powf(Dual::constant(2.0));
        assert_relative_eq!(sq.value, 4.0);
        assert_relative_eq!(sq.deriv, -4.0);
    }

    #[test]
    fn test_comparisons_ignore_derivative() {
        let a = Dual::new(1.0, 5.0);
        let b = Dual::new(1.0, -5.0);
        assert!(a == b);
        assert!(Dual::constant(0.5) < a);
        assert!(Dual::<f64>::zero().is_zero());
    }

    #[test]
    fn test_assign_ops() {
        let mut acc = Dual::constant(1.0);
        acc += Dual::variable(2.0);
        acc *= Dual::constant(2.0);
        acc -= Dual::constant(1.0);
        acc /= Dual::constant(5.0);
        assert_relative_eq!(acc.value, 1.0);
        assert_relative_eq!(acc.deriv, 0.4);
    }

    #[test]
    fn test_from_f64_is_constant() {
        let c = <Dual as Scalar>::from_f64(0.01);
        assert_relative_eq!(c.value, 0.01);
        assert_relative_eq!(c.deriv, 0.0);
        assert_relative_eq!(c.value(), 0.01);
    }
}
