use linsolve::domains::float::FloatField;
use linsolve::domains::rational::{Rational, RationalField};
use linsolve::domains::{NearZero, Ring};
use linsolve::hyperplane::Hyperplane;
use linsolve::system::{LinearSystem, SolveError, SystemError};
use linsolve::vector::Vector;

fn rational_plane(coefficients: &[i64], constant: i64) -> Hyperplane<RationalField> {
    let field = RationalField::new();
    Hyperplane::new(
        Vector::new(coefficients.iter().map(|&c| field.nth(c)), field).unwrap(),
        field.nth(constant),
    )
}

fn decimal_plane(
    field: FloatField,
    coefficients: &[&str],
    constant: &str,
) -> Hyperplane<FloatField> {
    Hyperplane::new(
        Vector::new(coefficients.iter().map(|c| field.parse(c).unwrap()), field).unwrap(),
        field.parse(constant).unwrap(),
    )
}

#[test]
fn unique_solution_over_the_rationals() {
    let system = LinearSystem::new(vec![
        rational_plane(&[1, 1, 1], 1),
        rational_plane(&[1, -1, 2], 2),
        rational_plane(&[1, 2, -1], 0),
    ])
    .unwrap();

    let solution = system.compute_solution().unwrap();
    assert_eq!(solution[0], Rational::from(1));
    assert_eq!(solution[1], Rational::new(-1, 3));
    assert_eq!(solution[2], Rational::new(1, 3));

    for row in system.rows() {
        assert_eq!(row.evaluate(&solution), *row.constant_term());
    }
}

#[test]
fn contradictory_equations_are_inconsistent() {
    let system = LinearSystem::new(vec![
        rational_plane(&[1, 1], 1),
        rational_plane(&[2, 2], 3),
    ])
    .unwrap();

    assert!(matches!(
        system.compute_solution(),
        Err(SolveError::Inconsistent)
    ));
}

#[test]
fn dependent_equations_are_underdetermined() {
    let system = LinearSystem::new(vec![
        rational_plane(&[1, 1, 1], 1),
        rational_plane(&[2, 2, 2], 2),
    ])
    .unwrap();

    assert!(matches!(
        system.compute_solution(),
        Err(SolveError::Underdetermined {
            pivots: 1,
            variables: 3,
            ..
        })
    ));
}

#[test]
fn mixed_dimensions_are_rejected() {
    let result = LinearSystem::new(vec![
        rational_plane(&[1, 1], 1),
        rational_plane(&[1, 1, 1], 1),
    ]);

    assert_eq!(
        result.unwrap_err(),
        SystemError::DimensionMismatch {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn overdetermined_decimal_system() {
    // four equations in three variables, consistent, from measured
    // decimal data; 30 significant digits as the working precision
    let field = FloatField::with_digits(30);
    let planes = vec![
        decimal_plane(field, &["5.262", "2.739", "-9.878"], "-3.441"),
        decimal_plane(field, &["5.111", "6.358", "7.638"], "-2.152"),
        decimal_plane(field, &["2.016", "-9.924", "-1.367"], "-9.278"),
        decimal_plane(field, &["2.167", "-13.543", "-18.883"], "-10.567"),
    ];
    let system = LinearSystem::new(planes).unwrap();
    let before = system.clone();

    let solution = system.compute_solution().unwrap();

    let expected = [
        -1.177_201_875_789_958_5,
        0.707_150_558_138_740_8,
        -0.082_663_584_902_282_89,
    ];
    for (i, e) in expected.iter().enumerate() {
        assert!((solution[i].to_f64() - e).abs() < 1e-9);
    }

    // substituting the solution back reproduces every constant term
    for row in system.rows() {
        let residual = field.sub(&row.evaluate(&solution), row.constant_term());
        assert!(field.is_near_zero(&residual));
    }

    // the caller's system is never modified
    assert_eq!(system, before);
}

#[test]
fn near_zero_coefficients_count_as_zero() {
    // a single row whose coefficients sit below the tolerance but whose
    // constant does not: contradictory, not underdetermined
    let field = FloatField::with_digits(30);
    let system = LinearSystem::new(vec![decimal_plane(
        field,
        &["1e-11", "-1e-12"],
        "1.0",
    )])
    .unwrap();

    assert!(matches!(
        system.compute_solution(),
        Err(SolveError::Inconsistent)
    ));
}

#[test]
fn tolerance_is_a_property_of_the_field() {
    // the same data classifies differently under a loosened tolerance
    let strict = FloatField::with_digits(30);
    let loose = strict.with_tolerance(1e-2);

    let rows = |field: FloatField| {
        vec![
            decimal_plane(field, &["1e-3", "0"], "5e-4"),
            decimal_plane(field, &["0", "1"], "2"),
        ]
    };

    let solution = LinearSystem::new(rows(strict))
        .unwrap()
        .compute_solution()
        .unwrap();
    assert!((solution[0].to_f64() - 0.5).abs() < 1e-12);
    assert!((solution[1].to_f64() - 2.0).abs() < 1e-12);

    assert!(matches!(
        LinearSystem::new(rows(loose)).unwrap().compute_solution(),
        Err(SolveError::Underdetermined {
            pivots: 1,
            variables: 2,
            ..
        })
    ));
}
