//! Multiple-precision floating point numbers with a fixed working precision.

use std::f64::consts::{LOG10_2, LOG2_10};
use std::fmt::{self, Debug, Display, Formatter};

use rand::Rng;
use rug::{ops::CompleteRound, Assign, Float as MultiPrecisionFloat};

use super::{EuclideanDomain, Field, NearZero, RealField, Ring};

/// Magnitudes below this threshold count as zero unless the field is
/// configured otherwise.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// A field of floating point numbers with a fixed binary working precision.
///
/// Every element produced through the field is rounded to the configured
/// precision, so a field behaves like a fixed significant-digit context. The
/// tolerance decides when accumulated rounding error counts as zero; see
/// [NearZero]. Two fields with different configurations coexist freely, as
/// the configuration is carried by the field value itself.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FloatField {
    prec: u32,
    tolerance: f64,
}

impl FloatField {
    /// Create a field with `prec` binary digits of working precision.
    pub fn new(prec: u32) -> FloatField {
        FloatField {
            prec,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Create a field that tracks `digits` significant decimal digits,
    /// with a minimum of 53 binary digits (`f64` precision).
    pub fn with_digits(digits: u32) -> FloatField {
        FloatField::new(((digits as f64 * LOG2_10).ceil() as u32).max(53))
    }

    /// Replace the near-zero tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> FloatField {
        self.tolerance = tolerance;
        self
    }

    pub fn prec(&self) -> u32 {
        self.prec
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Parse a decimal string into an element of this field, rounded to the
    /// field's working precision.
    pub fn parse(&self, s: &str) -> Result<Float, String> {
        Ok(Float(
            MultiPrecisionFloat::parse(s)
                .map_err(|e| e.to_string())?
                .complete(self.prec),
        ))
    }
}

impl Display for FloatField {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// A multiple-precision floating point number.
#[derive(Clone, PartialEq)]
pub struct Float(MultiPrecisionFloat);

impl Float {
    pub fn new(prec: u32) -> Float {
        Float(MultiPrecisionFloat::new(prec))
    }

    pub fn with_val<T>(prec: u32, val: T) -> Float
    where
        MultiPrecisionFloat: Assign<T>,
    {
        Float(MultiPrecisionFloat::with_val(prec, val))
    }

    pub fn prec(&self) -> u32 {
        self.0.prec()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn into_inner(self) -> MultiPrecisionFloat {
        self.0
    }
}

impl From<MultiPrecisionFloat> for Float {
    fn from(value: MultiPrecisionFloat) -> Float {
        Float(value)
    }
}

impl Debug for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // print only the significant digits
        if f.precision().is_none() {
            f.write_fmt(format_args!(
                "{0:.1$}",
                self.0,
                (self.0.prec() as f64 * LOG10_2).floor() as usize
            ))
        } else {
            Display::fmt(&self.0, f)
        }
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Float) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Ring for FloatField {
    type Element = Float;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Float(MultiPrecisionFloat::with_val(self.prec, &a.0 + &b.0))
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Float(MultiPrecisionFloat::with_val(self.prec, &a.0 - &b.0))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Float(MultiPrecisionFloat::with_val(self.prec, &a.0 * &b.0))
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
        a.0 += &b.0 * &c.0;
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        a.0 -= &b.0 * &c.0;
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Float(MultiPrecisionFloat::with_val(self.prec, -&a.0))
    }

    fn zero(&self) -> Self::Element {
        Float::new(self.prec)
    }

    fn one(&self) -> Self::Element {
        Float::with_val(self.prec, 1)
    }

    fn nth(&self, n: i64) -> Self::Element {
        Float::with_val(self.prec, n)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.0.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.0 == 1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Float::with_val(self.prec, rng.gen_range(range.0..range.1))
    }
}

impl EuclideanDomain for FloatField {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        self.zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), self.zero())
    }

    fn gcd(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        self.one()
    }
}

impl Field for FloatField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Float(MultiPrecisionFloat::with_val(self.prec, &a.0 / &b.0))
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 /= &b.0;
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        Float(a.0.clone().recip())
    }
}

impl NearZero for FloatField {
    fn is_near_zero(&self, a: &Self::Element) -> bool {
        a.0.clone().abs() < self.tolerance
    }
}

impl RealField for FloatField {
    fn abs(&self, a: &Self::Element) -> Self::Element {
        Float(a.0.clone().abs())
    }

    fn sqrt(&self, a: &Self::Element) -> Self::Element {
        Float(a.0.clone().sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digit_precision() {
        let field = FloatField::with_digits(30);
        assert!(field.prec() >= (30.0 * LOG2_10) as u32);

        // 30 significant digits are enough to keep 1 + 1e-25 from collapsing
        let one = field.one();
        let tiny = field.parse("1e-25").unwrap();
        let sum = field.add(&one, &tiny);
        assert!(sum != one);
    }

    #[test]
    fn parse_rounds_to_field_precision() {
        let field = FloatField::new(64);
        let x = field.parse("5.262").unwrap();
        assert_eq!(x.prec(), 64);
        assert!((x.to_f64() - 5.262).abs() < 1e-12);
        assert!(field.parse("not a number").is_err());
    }

    #[test]
    fn near_zero_tolerance() {
        let field = FloatField::with_digits(30);
        assert!(field.is_near_zero(&field.parse("1e-11").unwrap()));
        assert!(field.is_near_zero(&field.parse("-1e-11").unwrap()));
        assert!(!field.is_near_zero(&field.parse("1e-9").unwrap()));

        let loose = field.with_tolerance(1e-3);
        assert!(loose.is_near_zero(&loose.parse("1e-4").unwrap()));
        assert!(!loose.is_near_zero(&loose.parse("1e-2").unwrap()));
    }

    #[test]
    fn field_arithmetic() {
        let field = FloatField::with_digits(30);
        let a = field.parse("1.5").unwrap();
        let b = field.parse("0.5").unwrap();

        assert_eq!(field.add(&a, &b), field.nth(2));
        assert_eq!(field.mul(&a, &b), field.parse("0.75").unwrap());
        assert_eq!(field.div(&a, &b), field.nth(3));
        assert!(field.is_one(&field.mul(&b, &field.inv(&b))));

        let mut acc = field.zero();
        field.add_mul_assign(&mut acc, &a, &b);
        assert_eq!(acc, field.parse("0.75").unwrap());
    }
}
