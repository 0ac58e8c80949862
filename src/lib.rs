//! Solves systems of linear equations, represented as intersecting
//! hyperplanes, by Gaussian elimination.
//!
//! A [LinearSystem](system::LinearSystem) is an ordered collection of
//! [hyperplanes](hyperplane::Hyperplane) sharing one dimension. Solving
//! reduces an independent copy of the system to triangular form, then to
//! reduced row echelon form, and classifies the outcome: a unique solution
//! vector, an inconsistent system, or an underdetermined one.
//!
//! Scalars come from a [domain](domains::Field): arbitrary-precision
//! [rationals](domains::rational::RationalField) for exact arithmetic, or
//! multiple-precision [floats](domains::float::FloatField) with a
//! construction-time working precision and near-zero tolerance.
//!
//! ```
//! use linsolve::domains::rational::{Rational, RationalField};
//! use linsolve::domains::Ring;
//! use linsolve::hyperplane::Hyperplane;
//! use linsolve::system::LinearSystem;
//! use linsolve::vector::Vector;
//!
//! let field = RationalField::new();
//! let plane = |coefficients: [i64; 3], constant: i64| {
//!     Hyperplane::new(
//!         Vector::new(coefficients.iter().map(|&c| field.nth(c)), field).unwrap(),
//!         field.nth(constant),
//!     )
//! };
//!
//! // x + y + z = 1, x - y + 2z = 2, x + 2y - z = 0
//! let system = LinearSystem::new(vec![
//!     plane([1, 1, 1], 1),
//!     plane([1, -1, 2], 2),
//!     plane([1, 2, -1], 0),
//! ])
//! .unwrap();
//!
//! let solution = system.compute_solution().unwrap();
//! assert_eq!(solution[0], field.nth(1));
//! assert_eq!(solution[1], Rational::new(-1, 3));
//! assert_eq!(solution[2], Rational::new(1, 3));
//! ```

pub mod domains;
pub mod hyperplane;
pub mod system;
pub mod vector;
