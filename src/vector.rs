use std::fmt::{Display, Formatter, Write};
use std::ops::Index;

use smallvec::SmallVec;

use crate::domains::{NearZero, RealField, Ring};

/// Error from constructing a vector without any coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EmptyVectorError;

impl Display for EmptyVectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a vector must have at least one coordinate")
    }
}

/// Error from normalizing a vector whose magnitude is near zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ZeroVectorError;

impl Display for ZeroVectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot normalize a zero vector")
    }
}

/// An immutable, fixed-dimension tuple of scalars from the domain `F`.
///
/// The dimension is fixed at construction and every operation returns a new
/// vector.
#[derive(Clone, PartialEq, Debug)]
pub struct Vector<F: Ring> {
    coordinates: SmallVec<[F::Element; 4]>,
    field: F,
}

impl<F: Ring> Vector<F> {
    /// Create a vector from its coordinates. Fails if no coordinates are
    /// given, as a zero-dimensional vector has no meaning here.
    pub fn new(
        coordinates: impl IntoIterator<Item = F::Element>,
        field: F,
    ) -> Result<Vector<F>, EmptyVectorError> {
        let coordinates: SmallVec<[F::Element; 4]> = coordinates.into_iter().collect();
        if coordinates.is_empty() {
            return Err(EmptyVectorError);
        }
        Ok(Vector { coordinates, field })
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn coordinates(&self) -> &[F::Element] {
        &self.coordinates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F::Element> {
        self.coordinates.iter()
    }

    pub fn add(&self, rhs: &Vector<F>) -> Vector<F> {
        assert_eq!(self.dimension(), rhs.dimension());

        Vector {
            coordinates: self
                .iter()
                .zip(rhs.iter())
                .map(|(a, b)| self.field.add(a, b))
                .collect(),
            field: self.field,
        }
    }

    pub fn sub(&self, rhs: &Vector<F>) -> Vector<F> {
        assert_eq!(self.dimension(), rhs.dimension());

        Vector {
            coordinates: self
                .iter()
                .zip(rhs.iter())
                .map(|(a, b)| self.field.sub(a, b))
                .collect(),
            field: self.field,
        }
    }

    /// Multiply every coordinate by `c`.
    pub fn scale(&self, c: &F::Element) -> Vector<F> {
        Vector {
            coordinates: self.iter().map(|a| self.field.mul(a, c)).collect(),
            field: self.field,
        }
    }

    /// Compute `self * c + rhs` coordinate-wise.
    pub fn mul_add(&self, c: &F::Element, rhs: &Vector<F>) -> Vector<F> {
        assert_eq!(self.dimension(), rhs.dimension());

        Vector {
            coordinates: self
                .iter()
                .zip(rhs.iter())
                .map(|(a, b)| {
                    let mut r = b.clone();
                    self.field.add_mul_assign(&mut r, a, c);
                    r
                })
                .collect(),
            field: self.field,
        }
    }

    pub fn dot(&self, rhs: &Vector<F>) -> F::Element {
        assert_eq!(self.dimension(), rhs.dimension());

        let mut acc = self.field.zero();
        for (a, b) in self.iter().zip(rhs.iter()) {
            self.field.add_mul_assign(&mut acc, a, b);
        }
        acc
    }
}

impl<F: Ring + NearZero> Vector<F> {
    /// Index of the first coordinate that is not near zero, or `None` if
    /// every coordinate is near zero.
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.coordinates
            .iter()
            .position(|c| !self.field.is_near_zero(c))
    }

    pub fn is_near_zero(&self) -> bool {
        self.first_nonzero_index().is_none()
    }
}

impl<F: RealField> Vector<F> {
    pub fn magnitude(&self) -> F::Element {
        self.field.sqrt(&self.dot(self))
    }

    /// Scale the vector to unit magnitude.
    pub fn normalized(&self) -> Result<Vector<F>, ZeroVectorError> {
        let magnitude = self.magnitude();
        if self.field.is_near_zero(&magnitude) {
            return Err(ZeroVectorError);
        }
        Ok(self.scale(&self.field.inv(&magnitude)))
    }
}

impl<F: Ring> Index<usize> for Vector<F> {
    type Output = F::Element;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<F: Ring> Display for Vector<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            Display::fmt(c, f)?;
        }
        f.write_char('}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::float::FloatField;
    use crate::domains::rational::{Rational, RationalField};

    fn rational_vector(coords: &[i64]) -> Vector<RationalField> {
        let field = RationalField::new();
        Vector::new(coords.iter().map(|&c| field.nth(c)), field).unwrap()
    }

    #[test]
    fn empty_construction_fails() {
        let field = RationalField::new();
        assert_eq!(Vector::new([], field), Err(EmptyVectorError));
    }

    #[test]
    fn arithmetic() {
        let field = RationalField::new();
        let a = rational_vector(&[1, 2, 3]);
        let b = rational_vector(&[4, -1, 2]);

        assert_eq!(a.add(&b), rational_vector(&[5, 1, 5]));
        assert_eq!(a.sub(&b), rational_vector(&[-3, 3, 1]));
        assert_eq!(a.scale(&field.nth(2)), rational_vector(&[2, 4, 6]));
        assert_eq!(a.dot(&b), Rational::from(8));
        assert_eq!(
            a.mul_add(&field.nth(-2), &b),
            rational_vector(&[2, -5, -4])
        );
    }

    #[test]
    fn operations_leave_operands_untouched() {
        let a = rational_vector(&[1, 2, 3]);
        let b = rational_vector(&[4, -1, 2]);
        let _ = a.add(&b);
        let _ = a.dot(&b);
        assert_eq!(a, rational_vector(&[1, 2, 3]));
        assert_eq!(b, rational_vector(&[4, -1, 2]));
    }

    #[test]
    fn first_nonzero_index_uses_tolerance() {
        let field = FloatField::with_digits(30);
        let v = Vector::new(
            [
                field.parse("1e-12").unwrap(),
                field.parse("3.0").unwrap(),
                field.zero(),
            ],
            field,
        )
        .unwrap();

        assert_eq!(v.first_nonzero_index(), Some(1));
        assert!(!v.is_near_zero());

        let w = Vector::new([field.parse("1e-12").unwrap(), field.zero()], field).unwrap();
        assert_eq!(w.first_nonzero_index(), None);
        assert!(w.is_near_zero());
    }

    #[test]
    fn magnitude_and_normalization() {
        let field = FloatField::with_digits(30);
        let v = Vector::new([field.nth(3), field.nth(4)], field).unwrap();
        assert_eq!(v.magnitude(), field.nth(5));

        let unit = v.normalized().unwrap();
        assert!(field.is_near_zero(&field.sub(&unit.magnitude(), &field.one())));

        let zero = Vector::new([field.zero(), field.zero()], field).unwrap();
        assert_eq!(zero.normalized(), Err(ZeroVectorError));
    }
}
