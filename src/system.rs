//! Gaussian elimination over an ordered collection of hyperplanes.

use std::fmt::{Display, Formatter, Write};
use std::ops::Index;

use crate::domains::{Field, NearZero};
use crate::hyperplane::Hyperplane;
use crate::vector::Vector;

/// Error from constructing a system or assigning one of its rows.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SystemError {
    /// A system needs at least one equation to derive its dimension from.
    Empty,
    /// All hyperplanes in a system must live in the same dimension.
    DimensionMismatch { expected: usize, found: usize },
}

impl Display for SystemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Empty => f.write_str("a linear system needs at least one equation"),
            SystemError::DimensionMismatch { expected, found } => f.write_fmt(format_args!(
                "all hyperplanes in the system should live in the same dimension \
                 (expected {}, found {})",
                expected, found
            )),
        }
    }
}

/// Error from the linear solver.
#[derive(Debug)]
pub enum SolveError<F: Field + NearZero> {
    /// The reduced system contains a contradictory equation `0 = k` with a
    /// constant `k` that is not near zero.
    Inconsistent,
    /// Fewer pivots than variables: the solution set is not a single point.
    Underdetermined {
        pivots: usize,
        variables: usize,
        /// The reduced row echelon form that exposed the rank deficiency.
        rref: Option<LinearSystem<F>>,
    },
}

impl<F: Field + NearZero> Display for SolveError<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Inconsistent => {
                f.write_str("no solutions: the system contains a contradictory equation")
            }
            SolveError::Underdetermined {
                pivots, variables, ..
            } => f.write_fmt(format_args!(
                "infinitely many solutions: {} pivots for {} variables",
                pivots, variables
            )),
        }
    }
}

/// An ordered sequence of hyperplanes sharing one dimension.
///
/// Rows are replaced in place by the row operations, but the reduction entry
/// points ([compute_triangular_form](LinearSystem::compute_triangular_form),
/// [compute_rref](LinearSystem::compute_rref),
/// [compute_solution](LinearSystem::compute_solution)) work on an independent
/// copy and never touch the receiver.
#[derive(Clone, PartialEq, Debug)]
pub struct LinearSystem<F: Field + NearZero> {
    rows: Vec<Hyperplane<F>>,
    dimension: usize,
    field: F,
}

impl<F: Field + NearZero> LinearSystem<F> {
    /// Create a system from an ordered sequence of hyperplanes. The dimension
    /// of the first hyperplane becomes the dimension of the system; every
    /// other hyperplane must match it.
    pub fn new(rows: Vec<Hyperplane<F>>) -> Result<LinearSystem<F>, SystemError> {
        let first = rows.first().ok_or(SystemError::Empty)?;
        let dimension = first.dimension();
        let field = first.normal().field();

        for row in &rows {
            if row.dimension() != dimension {
                return Err(SystemError::DimensionMismatch {
                    expected: dimension,
                    found: row.dimension(),
                });
            }
        }

        Ok(LinearSystem {
            rows,
            dimension,
            field,
        })
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of variables.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn rows(&self) -> &[Hyperplane<F>] {
        &self.rows
    }

    /// Replace row `i`. Fails if the new hyperplane lives in a different
    /// dimension than the system; panics if `i` is out of range.
    pub fn set_row(&mut self, i: usize, row: Hyperplane<F>) -> Result<(), SystemError> {
        if row.dimension() != self.dimension {
            return Err(SystemError::DimensionMismatch {
                expected: self.dimension,
                found: row.dimension(),
            });
        }
        self.rows[i] = row;
        Ok(())
    }

    /// Exchange rows `i` and `j`.
    ///
    /// Panics if either index is out of range.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Multiply the normal vector and constant term of row `i` by
    /// `coefficient`. A zero coefficient is permitted and produces a
    /// degenerate row.
    pub fn scale_row(&mut self, i: usize, coefficient: &F::Element) {
        let normal = self.rows[i].normal().scale(coefficient);
        let constant = self.field.mul(self.rows[i].constant_term(), coefficient);
        self.rows[i] = Hyperplane::new(normal, constant);
    }

    /// Replace row `target` with `coefficient * row source + row target`,
    /// applied to the normal vectors and the constant terms. The fundamental
    /// elimination primitive.
    pub fn add_scaled_row(&mut self, coefficient: &F::Element, source: usize, target: usize) {
        let normal = self.rows[source]
            .normal()
            .mul_add(coefficient, self.rows[target].normal());
        let mut constant = self.rows[target].constant_term().clone();
        self.field
            .add_mul_assign(&mut constant, coefficient, self.rows[source].constant_term());
        self.rows[target] = Hyperplane::new(normal, constant);
    }

    /// The pivot column of each row: the index of the first coefficient that
    /// is not near zero, or `None` for a row whose normal vector is entirely
    /// near zero. A `None` row may still carry a nonzero constant term,
    /// signaling a contradiction.
    pub fn pivot_indices(&self) -> Vec<Option<usize>> {
        self.rows.iter().map(|p| p.first_nonzero_index()).collect()
    }

    /// Reduce an independent copy of the system to triangular form, where
    /// the pivot column strictly increases with the row index.
    ///
    /// A near-zero pivot candidate triggers a search for a row strictly
    /// below with a usable coefficient in the same column; when the search
    /// fails the column is exhausted and the cursor moves right without
    /// advancing the row. Elimination is strictly forward: once a row is
    /// processed, nothing below its pivot column is disturbed again.
    pub fn compute_triangular_form(&self) -> LinearSystem<F> {
        let mut system = self.clone();

        let num_equations = system.len();
        let num_variables = system.dimension;

        let mut j = 0;
        for i in 0..num_equations {
            while j < num_variables {
                if system.field.is_near_zero(system.rows[i].coefficient(j)) {
                    if !system.swap_with_row_below(i, j) {
                        j += 1;
                        continue;
                    }
                }

                system.clear_column_below(i, j);
                j += 1;
                break;
            }
        }

        system
    }

    /// Reduce an independent copy of the system to reduced row echelon form:
    /// triangular form in which every pivot equals one and is the only
    /// nonzero entry in its column. Rows without a pivot are left untouched.
    pub fn compute_rref(&self) -> LinearSystem<F> {
        let mut system = self.compute_triangular_form();
        let pivot_indices = system.pivot_indices();

        for i in (0..system.len()).rev() {
            let Some(j) = pivot_indices[i] else {
                continue;
            };
            system.scale_row_to_unit_coefficient(i, j);
            system.clear_column_above(i, j);
        }

        system
    }

    /// Run Gaussian elimination and classify the outcome.
    ///
    /// Returns the unique solution when one exists. A contradictory row in
    /// the reduced system yields [SolveError::Inconsistent]; fewer pivots
    /// than variables yields [SolveError::Underdetermined]. Both reflect
    /// genuine properties of the input, not transient faults.
    pub fn compute_solution(&self) -> Result<Vector<F>, SolveError<F>> {
        let rref = self.compute_rref();

        for row in rref.rows() {
            if row.first_nonzero_index().is_none()
                && !rref.field.is_near_zero(row.constant_term())
            {
                return Err(SolveError::Inconsistent);
            }
        }

        let pivot_indices = rref.pivot_indices();
        let num_pivots = pivot_indices.iter().filter(|p| p.is_some()).count();
        let num_variables = rref.dimension;

        if num_pivots < num_variables {
            return Err(SolveError::Underdetermined {
                pivots: num_pivots,
                variables: num_variables,
                rref: Some(rref),
            });
        }

        // with as many pivots as variables, row i holds the pivot of column i
        debug_assert!(pivot_indices[..num_variables]
            .iter()
            .enumerate()
            .all(|(i, p)| *p == Some(i)));

        let coordinates = (0..num_variables).map(|i| rref.rows[i].constant_term().clone());
        Ok(Vector::new(coordinates, self.field).expect("the system dimension is at least one"))
    }

    /// Search strictly below `row` for a coefficient in `col` that is not
    /// near zero and swap it up. Returns whether a swap happened.
    fn swap_with_row_below(&mut self, row: usize, col: usize) -> bool {
        for k in row + 1..self.len() {
            if !self.field.is_near_zero(self.rows[k].coefficient(col)) {
                self.swap_rows(row, k);
                return true;
            }
        }

        false
    }

    /// Eliminate the coefficient in `col` from every row strictly below
    /// `row`, using `row` as the pivot row.
    fn clear_column_below(&mut self, row: usize, col: usize) {
        let pivot = self.rows[row].coefficient(col).clone();

        for k in row + 1..self.len() {
            let term = self.rows[k].coefficient(col);
            if self.field.is_near_zero(term) {
                continue;
            }
            let alpha = self.field.neg(&self.field.div(term, &pivot));
            self.add_scaled_row(&alpha, row, k);
        }
    }

    /// Eliminate the coefficient in `col` from every row strictly above
    /// `row`. The pivot must already be scaled to one.
    fn clear_column_above(&mut self, row: usize, col: usize) {
        for k in (0..row).rev() {
            let term = self.rows[k].coefficient(col);
            if self.field.is_near_zero(term) {
                continue;
            }
            let alpha = self.field.neg(term);
            self.add_scaled_row(&alpha, row, k);
        }
    }

    /// Scale row `row` so its coefficient in `col` becomes exactly one.
    fn scale_row_to_unit_coefficient(&mut self, row: usize, col: usize) {
        let coefficient = self.rows[row].coefficient(col).clone();
        if !self.field.is_one(&coefficient) {
            self.scale_row(row, &self.field.inv(&coefficient));
        }
    }
}

impl<F: Field + NearZero> Index<usize> for LinearSystem<F> {
    type Output = Hyperplane<F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<F: Field + NearZero> Display for LinearSystem<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            Display::fmt(row, f)?;
        }
        f.write_char('}')
    }
}
