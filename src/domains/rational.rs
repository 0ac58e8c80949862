use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use rand::Rng;
use rug::{Complete, Integer, Rational as ArbitraryPrecisionRational};

use super::{EuclideanDomain, Field, NearZero, Ring};

/// The field of rational numbers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RationalField;

impl RationalField {
    pub fn new() -> RationalField {
        RationalField
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

/// An arbitrary-precision rational number, always stored in canonical form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rational(ArbitraryPrecisionRational);

impl Rational {
    /// Create the fraction `num/den` in canonical form.
    ///
    /// Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Rational {
        Rational(ArbitraryPrecisionRational::from((num, den)))
    }

    pub fn numer(&self) -> &Integer {
        self.0.numer()
    }

    pub fn denom(&self) -> &Integer {
        self.0.denom()
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn into_inner(self) -> ArbitraryPrecisionRational {
        self.0
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational(ArbitraryPrecisionRational::from(n))
    }
}

impl From<ArbitraryPrecisionRational> for Rational {
    fn from(r: ArbitraryPrecisionRational) -> Rational {
        Rational(r)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational((&a.0 + &b.0).complete())
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational((&a.0 - &b.0).complete())
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational((&a.0 * &b.0).complete())
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 += &b.0;
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 -= &b.0;
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 *= &b.0;
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        a.0 += (&b.0 * &c.0).complete();
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        a.0 -= (&b.0 * &c.0).complete();
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Rational(-a.0.clone())
    }

    fn zero(&self) -> Self::Element {
        Rational(ArbitraryPrecisionRational::new())
    }

    fn one(&self) -> Self::Element {
        Rational::from(1)
    }

    fn nth(&self, n: i64) -> Self::Element {
        Rational::from(n)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.0.cmp0() == Ordering::Equal
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        *a.0.numer() == 1 && *a.0.denom() == 1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Rational::from(rng.gen_range(range.0..range.1))
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        self.zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), self.zero())
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let num = a.0.numer().gcd_ref(b.0.numer()).complete();
        let den = a.0.denom().lcm_ref(b.0.denom()).complete();
        Rational(ArbitraryPrecisionRational::from((num, den)))
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational((&a.0 / &b.0).complete())
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 /= &b.0;
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        Rational(a.0.clone().recip())
    }
}

impl NearZero for RationalField {
    /// The representation is exact, so only the true zero is near zero.
    fn is_near_zero(&self, a: &Self::Element) -> bool {
        Self::is_zero(a)
    }
}
