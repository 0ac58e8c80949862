use std::fmt::{Display, Formatter};

use crate::domains::{NearZero, Ring};
use crate::vector::Vector;

/// A single linear equation: the set of points `x` satisfying
/// `normal · x = constant`.
#[derive(Clone, PartialEq, Debug)]
pub struct Hyperplane<F: Ring> {
    normal: Vector<F>,
    constant: F::Element,
}

impl<F: Ring> Hyperplane<F> {
    pub fn new(normal: Vector<F>, constant: F::Element) -> Hyperplane<F> {
        Hyperplane { normal, constant }
    }

    /// The number of variables the equation ranges over.
    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    pub fn normal(&self) -> &Vector<F> {
        &self.normal
    }

    pub fn constant_term(&self) -> &F::Element {
        &self.constant
    }

    /// Coefficient of the `j`-th variable.
    ///
    /// Panics if `j` is out of range.
    pub fn coefficient(&self, j: usize) -> &F::Element {
        &self.normal[j]
    }

    /// Evaluate the left-hand side of the equation at `point`.
    pub fn evaluate(&self, point: &Vector<F>) -> F::Element {
        self.normal.dot(point)
    }
}

impl<F: Ring + NearZero> Hyperplane<F> {
    /// Column of the pivot candidate: the first coefficient that is not near
    /// zero, or `None` for a degenerate equation with an all-near-zero
    /// normal vector.
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.normal.first_nonzero_index()
    }
}

impl<F: Ring> Display for Hyperplane<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.normal, f)?;
        f.write_str(" = ")?;
        Display::fmt(&self.constant, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::float::FloatField;
    use crate::domains::rational::RationalField;
    use crate::domains::Ring;

    #[test]
    fn accessors() {
        let field = RationalField::new();
        let plane = Hyperplane::new(
            Vector::new([field.nth(2), field.nth(0), field.nth(-1)], field).unwrap(),
            field.nth(4),
        );

        assert_eq!(plane.dimension(), 3);
        assert_eq!(*plane.coefficient(0), field.nth(2));
        assert_eq!(*plane.coefficient(2), field.nth(-1));
        assert_eq!(*plane.constant_term(), field.nth(4));
        assert_eq!(plane.first_nonzero_index(), Some(0));
    }

    #[test]
    fn evaluate_left_hand_side() {
        let field = RationalField::new();
        let plane = Hyperplane::new(
            Vector::new([field.nth(1), field.nth(2)], field).unwrap(),
            field.nth(7),
        );
        let point = Vector::new([field.nth(3), field.nth(2)], field).unwrap();

        assert_eq!(plane.evaluate(&point), field.nth(7));
    }

    #[test]
    fn degenerate_normal_has_no_pivot() {
        let field = FloatField::with_digits(30);
        let plane = Hyperplane::new(
            Vector::new([field.parse("1e-14").unwrap(), field.zero()], field).unwrap(),
            field.one(),
        );

        assert_eq!(plane.first_nonzero_index(), None);
    }
}
