//! Defines the algebraic traits and the scalar domains used by the solver.
//!
//! The core trait is [Ring], which has two binary operations, addition and
//! multiplication. Each ring has an associated element type, that should not
//! be confused with the ring type itself. For example:
//! - [RationalField](rational::RationalField) has elements of type
//!   [Rational](rational::Rational).
//! - [FloatField](float::FloatField) has elements of type
//!   [Float](float::Float).
//!
//! The ring elements do not implement operations such as addition or
//! multiplication themselves; the ring does. This lets a domain carry
//! configuration, such as a working precision or a near-zero tolerance, that
//! every operation respects. All containers in this crate are generic over
//! the domain type.
//!
//! [`Field`] extends [`EuclideanDomain`] with division and inversion.
//! [`NearZero`] separates exact domains from rounded ones: it decides when an
//! element should be treated as zero during elimination.

pub mod float;
pub mod rational;

use std::fmt::{Debug, Display};

/// A ring is a set with two binary operations, addition and multiplication.
///
/// The ring object itself performs the arithmetic on its associated
/// [Element](Ring::Element) type and is cheap to copy around.
pub trait Ring: Clone + Copy + PartialEq + Debug + Display {
    type Element: Clone + PartialEq + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Perform `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    /// Perform `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;
}

/// A Euclidean domain is a ring that supports division with remainder,
/// quotients, and gcds.
pub trait EuclideanDomain: Ring {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}

/// A field is a ring that supports division and inversion.
pub trait Field: EuclideanDomain {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn inv(&self, a: &Self::Element) -> Self::Element;
}

/// A ring that can decide whether an element should be treated as zero.
///
/// Exact domains compare with true zero. Rounded domains compare the
/// magnitude against a tolerance, absorbing residual error that elimination
/// leaves behind. Pivot selection and solvability classification go through
/// this test rather than [Ring::is_zero].
pub trait NearZero: Ring {
    fn is_near_zero(&self, a: &Self::Element) -> bool;
}

/// A field whose elements approximate real numbers.
pub trait RealField: Field + NearZero {
    fn abs(&self, a: &Self::Element) -> Self::Element;
    fn sqrt(&self, a: &Self::Element) -> Self::Element;
}
