//! Geometric objects of the plane, represented as multivectors, and queries on them.
//!
//! Objects are built in their *direct* representation, which is the outer product of points
//! lying on them:
//!
//! | object     | grade | constructor                           |
//! |------------|-------|---------------------------------------|
//! | point      | 1     | [`point()`]                           |
//! | point pair | 2     | [`intersection()`] of a line and a circle, or of two circles |
//! | flat point | 2     | [`intersection()`] of two lines, or `p ^ ei` |
//! | circle     | 3     | [`circle()`], [`circle_through()`]    |
//! | line       | 3     | [`line()`], [`line_from_equation()`]  |
//!
//! Functions that extract points return them as *normalized* points: `e0` coefficient 1 and
//! `ei` coefficient `½(x² + y²)`, exactly as [`point()`] would build them.

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::{AlgebraError, Blade, DEFAULT_TOLERANCE, Multivector};

/// Coordinate type used for Euclidean positions.
pub type FreeCoordinate = f64;

/// Euclidean point type used at the boundary between multivectors and ordinary coordinates.
pub type FreePoint = euclid::default::Point2D<FreeCoordinate>;

/// Embeds the Euclidean point `(x, y)` as a null vector:
/// `e0 + x e1 + y e2 + ½(x² + y²) ei`.
///
/// ```
/// use gar_cga::{Blade, geometry::point};
///
/// let p = point(3.0, 4.0);
/// assert_eq!(p[Blade::EI], 12.5);
/// assert_eq!(p.quadratic_norm(), 0.0);
/// ```
#[inline]
pub fn point(x: FreeCoordinate, y: FreeCoordinate) -> Multivector {
    let mut mv = Multivector::ZERO;
    mv[Blade::E1] = x;
    mv[Blade::E2] = y;
    mv[Blade::EI] = 0.5 * mv.quadratic_norm();
    mv[Blade::E0] = 1.0;
    mv
}

impl From<FreePoint> for Multivector {
    /// Embeds the point using [`point()`].
    #[inline]
    fn from(p: FreePoint) -> Self {
        point(p.x, p.y)
    }
}

/// Returns the line through two points, `p1 ^ p2 ^ ei`.
///
/// If the points coincide, the result is zero.
#[inline]
pub fn line(p1: &Multivector, p2: &Multivector) -> Multivector {
    p1.outer(p2).outer(&Multivector::blade(Blade::EI))
}

/// Returns the line of points `(x, y)` satisfying `a x + b y + c = 0`.
///
/// This is the dual of the vector `a e1 + b e2 - c ei`, and so is a direct line of the same
/// kind as [`line()`] produces (up to scale).
#[inline]
pub fn line_from_equation(a: f64, b: f64, c: f64) -> Multivector {
    let mut dual_line = Multivector::ZERO;
    dual_line[Blade::E1] = a;
    dual_line[Blade::E2] = b;
    dual_line[Blade::EI] = -c;
    dual_line.dual()
}

/// Returns the circle with center `(x, y)` and radius `r`.
///
/// This is the dual of the *dual circle* `center - ½ r² ei`.
#[inline]
pub fn circle(x: FreeCoordinate, y: FreeCoordinate, r: f64) -> Multivector {
    let mut dual_circle = point(x, y);
    dual_circle[Blade::EI] -= 0.5 * r * r;
    dual_circle.dual()
}

/// Returns the circle through three points, `p1 ^ p2 ^ p3`.
///
/// If the points are collinear, the result is the line through them.
#[inline]
pub fn circle_through(p1: &Multivector, p2: &Multivector, p3: &Multivector) -> Multivector {
    p1.outer(p2).outer(p3)
}

/// Returns the dual representation of a circle or line `c`: a vector which, for a circle,
/// is its center point minus `½ r² ei`, up to scale.
#[inline]
pub fn dual_circle(c: &Multivector) -> Multivector {
    c.undual()
}

/// Scales `mv` so that its inner product with `ei` is `-1`: `-mv / (mv | ei)`.
///
/// For a vector this makes the `e0` coefficient 1.
///
/// Returns an error if `mv | ei` is not invertible, as for flat objects.
#[inline]
pub fn normalize(mv: &Multivector) -> Result<Multivector, AlgebraError> {
    Ok(-mv.checked_div(&mv.inner(&Multivector::blade(Blade::EI)))?)
}

/// Re-embeds the grade 1 part of `mv` as a [`point()`], using the Euclidean position given
/// by the ratios of its coefficients. Any other grades are ignored.
///
/// Returns [`AlgebraError::Degenerate`] if the `e0` coefficient is zero (relative to
/// [`DEFAULT_TOLERANCE`]), which is the case for directions and points at infinity.
#[inline]
pub fn normalize_point(mv: &Multivector) -> Result<Multivector, AlgebraError> {
    let vector = mv.grade_part(1);
    let weight = vector[Blade::E0];
    if weight.abs() <= DEFAULT_TOLERANCE * vector.finite_magnitude_squared().sqrt() {
        return Err(AlgebraError::Degenerate {
            operation: "normalizing a point",
        });
    }
    Ok(point(vector[Blade::E1] / weight, vector[Blade::E2] / weight))
}

/// Returns the Euclidean position represented by `mv`.
///
/// `mv` may be a point of any weight, whose grade 1 part is used, or a flat point
/// (grade 2, such as `p ^ ei` or the [`intersection()`] of two lines).
#[inline]
pub fn euclidean(mv: &Multivector) -> Result<FreePoint, AlgebraError> {
    let grades = mv.grades();
    let (weight, x, y) = if grades.contains(&1) {
        (mv[Blade::E0], mv[Blade::E1], mv[Blade::E2])
    } else if grades[..] == [2] {
        (mv[Blade::E0I], mv[Blade::E1I], mv[Blade::E2I])
    } else {
        return Err(AlgebraError::NotHomogeneous { grades });
    };

    let magnitude = (weight * weight + x * x + y * y).sqrt();
    if weight.abs() <= DEFAULT_TOLERANCE * magnitude {
        return Err(AlgebraError::Degenerate {
            operation: "finding the position of a point at infinity",
        });
    }
    Ok(FreePoint::new(x / weight, y / weight))
}

/// Returns the intersection (meet) of two objects, computed as the regressive product
/// `!(!a ^ !b)`.
///
/// The intersection of a line and a circle, or of two circles, is a point pair, which may
/// be imaginary if they do not actually cross; see [`are_intersected()`].
/// The intersection of two lines is a flat point.
#[inline]
pub fn intersection(a: &Multivector, b: &Multivector) -> Multivector {
    a.regressive(b)
}

/// Returns whether the intersection of `a` and `b` is real: its square is positive.
#[inline]
pub fn are_intersected(a: &Multivector, b: &Multivector) -> bool {
    let meet = intersection(a, b);
    meet.inner(&meet).scalar_part() > 0.0
}

/// Returns whether the point `p` lies strictly inside the circle `c`.
///
/// This compares the point against the dual circle: with both normalized,
/// `p · σ = ½(r² - d²)`, where `d` is the distance from the center, which is positive
/// exactly when the point is inside.
/// Returns false if `c` is not a circle (for example, a line).
#[inline]
pub fn is_point_in_circle(p: &Multivector, c: &Multivector) -> bool {
    let sigma = dual_circle(c);
    let weights = p[Blade::E0] * sigma[Blade::E0];
    if weights == 0.0 {
        log::debug!("is_point_in_circle() given a non-round object; treating as outside");
        return false;
    }
    p.inner(&sigma).scalar_part() / weights > 0.0
}

/// Returns the point on line `l` nearest to the point `p`.
///
/// This is the normalized contraction `-(p ⌋ l) / ((p ⌋ l) | ei)`, re-embedded.
#[inline]
pub fn project_point_on_line(p: &Multivector, l: &Multivector) -> Result<Multivector, AlgebraError> {
    let contracted = p.left_contraction(l);
    normalize_point(&-normalize(&contracted)?)
}

/// Returns the center of the circle `c`, computed as `-c / (ei ⌋ c)`.
///
/// Returns [`AlgebraError::Degenerate`] if `c` is a line, which has no center.
#[inline]
pub fn center_of_circle(c: &Multivector) -> Result<Multivector, AlgebraError> {
    let divisor = Multivector::blade(Blade::EI).left_contraction(c);
    let inverse = divisor
        .inverse_relative_to(divisor.finite_magnitude_squared())
        .map_err(|_| AlgebraError::Degenerate {
            operation: "finding the center of a line",
        })?;
    normalize_point(&(-c).geometric(&inverse))
}

/// Returns the squared radius of the circle `c`.
///
/// The result is negative for an imaginary circle, such as one built by [`circle_through()`]
/// with a negative squared radius, or by [`circle()`] with an imaginary `r`.
#[inline]
pub fn squared_radius(c: &Multivector) -> Result<f64, AlgebraError> {
    let sigma = dual_circle(c);
    let weight = sigma[Blade::E0];
    if weight.abs() <= DEFAULT_TOLERANCE * sigma.finite_magnitude_squared().sqrt() {
        return Err(AlgebraError::Degenerate {
            operation: "finding the radius of a line",
        });
    }
    Ok(sigma.inner(&sigma).scalar_part() / (weight * weight))
}

/// Returns the radius of the circle `c`.
///
/// Returns an error if `c` is a line or an imaginary circle.
#[inline]
pub fn radius(c: &Multivector) -> Result<f64, AlgebraError> {
    let squared = squared_radius(c)?;
    if squared < 0.0 {
        return Err(AlgebraError::Degenerate {
            operation: "finding the real radius of an imaginary circle",
        });
    }
    Ok(squared.sqrt())
}

/// Splits a real point pair into its two points, `(pp ± √(pp²)) / -(ei | pp)`.
///
/// Returns [`AlgebraError::ImaginaryPointPair`] if the square of `pp` is negative, which is
/// the case when the intersected objects do not meet.
/// A pair whose square is zero within tolerance is a tangent contact, and both returned
/// points are the same.
#[inline]
pub fn split_point_pair(pp: &Multivector) -> Result<[Multivector; 2], AlgebraError> {
    let square = pp.scalar_product(pp);
    if square < -DEFAULT_TOLERANCE * pp.finite_magnitude_squared() {
        return Err(AlgebraError::ImaginaryPointPair { square });
    }
    let root = square.max(0.0).sqrt();
    let denominator = -pp.inner(&Multivector::blade(Blade::EI));
    let inverse = denominator
        .inverse_relative_to(denominator.finite_magnitude_squared())
        .map_err(|_| {
            log::debug!("split_point_pair() could not locate the points of {pp}");
            AlgebraError::Degenerate {
                operation: "splitting a point pair whose points are not located",
            }
        })?;
    let first = (pp + root).geometric(&inverse);
    let second = (pp - root).geometric(&inverse);
    Ok([normalize_point(&first)?, normalize_point(&second)?])
}

/// Returns the first point of the point pair `pp`; see [`split_point_pair()`].
#[inline]
pub fn first_point_from_point_pair(pp: &Multivector) -> Result<Multivector, AlgebraError> {
    let [first, _] = split_point_pair(pp)?;
    Ok(first)
}

/// Returns the second point of the point pair `pp`; see [`split_point_pair()`].
#[inline]
pub fn second_point_from_point_pair(pp: &Multivector) -> Result<Multivector, AlgebraError> {
    let [_, second] = split_point_pair(pp)?;
    Ok(second)
}

/// Returns the point on the circle `c` nearest to the point `p`.
///
/// This intersects the circle with the line through `p` and the circle's center, and picks
/// the nearer of the two intersection points.
/// Returns an error if `p` is the center of the circle, from which every point of it is
/// equally near.
#[inline]
pub fn project_point_on_circle(p: &Multivector, c: &Multivector) -> Result<Multivector, AlgebraError> {
    let center = center_of_circle(c)?;
    let [a, b] = split_point_pair(&intersection(&line(p, &center), c))?;
    if distance(p, &a) <= distance(p, &b) {
        Ok(a)
    } else {
        Ok(b)
    }
}

/// Returns the Euclidean distance between two normalized points, `‖p2 - p1‖`.
#[inline]
pub fn distance(p1: &Multivector, p2: &Multivector) -> f64 {
    (p2 - p1).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::point2;
    use pretty_assertions::assert_eq;

    const TOL: f64 = 1e-9;

    fn assert_at(mv: &Multivector, expected: FreePoint) {
        let actual = euclidean(mv).unwrap();
        assert!(
            (actual - expected).length() < TOL,
            "expected {expected:?}, got {actual:?} from {mv}"
        );
        assert!(
            mv.approx_eq(&point(expected.x, expected.y), TOL),
            "not a normalized point: {mv}"
        );
    }

    #[test]
    fn point_is_null_and_normalized() {
        let p = point(3.0, 4.0);
        assert_eq!(p.grade(), Ok(1));
        assert_eq!(p[Blade::E0], 1.0);
        assert_eq!(p[Blade::EI], 12.5);
        assert_eq!(p.quadratic_norm(), 0.0);
        assert_eq!(Multivector::from(point2(3.0, 4.0)), p);
    }

    #[test]
    fn circle_coefficients() {
        let c = circle(0.0, 0.0, 10.0);
        assert_eq!(c.grade(), Ok(3));
        assert_eq!(
            c,
            Multivector::from_iter([(Blade::E012, 1.0), (Blade::E12I, 50.0)])
        );
        assert_eq!(c.inner(&c).scalar_part(), 100.0);
    }

    #[test]
    fn line_grade_and_flatness() {
        let l = line(&point(1.0, 1.0), &point(4.0, 5.0));
        assert_eq!(l.grade(), Ok(3));
        assert!(l.outer(&Multivector::blade(Blade::EI)).is_empty());
        assert!(line(&point(1.0, 1.0), &point(1.0, 1.0)).is_empty());
    }

    #[test]
    fn line_from_equation_matches_line_through_points() {
        // x - y + 1 = 0 passes through (0, 1) and (2, 3)
        let from_equation = line_from_equation(1.0, -1.0, 1.0);
        let from_points = line(&point(0.0, 1.0), &point(2.0, 3.0));
        assert!(from_equation.outer(&point(0.0, 1.0)).is_negligible(TOL));
        assert!(from_equation.outer(&point(2.0, 3.0)).is_negligible(TOL));
        // Same line up to scale: their meet vanishes
        let ratio = from_points[Blade::E01I] / from_equation[Blade::E01I];
        assert!(from_points.approx_eq(&(&from_equation * ratio), TOL));
    }

    #[test]
    fn two_lines_meet_at_flat_point() {
        let vertical = line_from_equation(1.0, 0.0, -3.0);
        let horizontal = line(&point(0.0, -2.0), &point(1.0, -2.0));
        let meet = intersection(&vertical, &horizontal);
        assert_eq!(meet.grade(), Ok(2));
        let position = euclidean(&meet).unwrap();
        assert!((position - point2(3.0, -2.0)).length() < TOL, "{position:?}");
    }

    #[test]
    fn parallel_lines_meet_at_infinity() {
        let a = line(&point(3.0, 0.0), &point(3.0, 5.0));
        let b = line(&point(4.0, 0.0), &point(4.0, 5.0));
        assert!(matches!(
            euclidean(&intersection(&a, &b)),
            Err(AlgebraError::Degenerate { .. })
        ));
    }

    #[test]
    fn line_circle_intersection_points() {
        let l = line(&point(-20.0, 1.0), &point(20.0, 1.0));
        let c = circle(0.0, 0.0, 10.0);
        assert!(are_intersected(&l, &c));
        let pp = intersection(&l, &c);
        assert_eq!(pp.grade(), Ok(2));
        let [a, b] = split_point_pair(&pp).unwrap();
        let x = 99.0f64.sqrt();
        assert_at(&a, point2(x, 1.0));
        assert_at(&b, point2(-x, 1.0));
        assert_at(&first_point_from_point_pair(&pp).unwrap(), point2(x, 1.0));
        assert_at(&second_point_from_point_pair(&pp).unwrap(), point2(-x, 1.0));
    }

    #[test]
    fn missing_line_gives_imaginary_pair() {
        let l = line(&point(-20.0, 30.0), &point(20.0, 30.0));
        let c = circle(0.0, 0.0, 10.0);
        assert!(!are_intersected(&l, &c));
        assert!(matches!(
            split_point_pair(&intersection(&l, &c)),
            Err(AlgebraError::ImaginaryPointPair { square }) if square < 0.0
        ));
    }

    #[test]
    fn point_in_circle_uses_sign() {
        let c = circle(2.0, -3.0, 4.0);
        assert!(is_point_in_circle(&point(2.0, -2.0), &c));
        assert!(is_point_in_circle(&point(4.0, -1.0), &c));
        assert!(!is_point_in_circle(&point(9.0, 9.0), &c));
        assert!(!is_point_in_circle(&point(2.0, 1.5), &c));

        // Orientation and scale of the circle do not matter
        let through = circle_through(&point(6.0, -3.0), &point(2.0, 1.0), &point(-2.0, -3.0));
        let reversed = circle_through(&point(2.0, 1.0), &point(6.0, -3.0), &point(-2.0, -3.0));
        for c in [&through, &reversed, &(&through * -7.0)] {
            assert!(is_point_in_circle(&point(2.0, -2.0), c));
            assert!(!is_point_in_circle(&point(9.0, 9.0), c));
        }
    }

    #[test]
    fn point_in_line_is_false() {
        let l = line(&point(0.0, 0.0), &point(1.0, 0.0));
        assert!(!is_point_in_circle(&point(0.0, 0.0), &l));
    }

    #[test]
    fn projection_onto_line() {
        let l = line(&point(0.0, 2.0), &point(4.0, 2.0));
        assert_at(&project_point_on_line(&point(3.0, 7.0), &l).unwrap(), point2(3.0, 2.0));

        let diagonal = line_from_equation(1.0, -1.0, 0.0);
        assert_at(
            &project_point_on_line(&point(0.0, 2.0), &diagonal).unwrap(),
            point2(1.0, 1.0),
        );
    }

    #[test]
    fn center_and_radius() {
        let c = circle(2.0, -3.0, 4.0);
        assert_at(&center_of_circle(&c).unwrap(), point2(2.0, -3.0));
        assert!((squared_radius(&c).unwrap() - 16.0).abs() < TOL);
        assert!((radius(&c).unwrap() - 4.0).abs() < TOL);

        let through = circle_through(&point(6.0, -3.0), &point(2.0, 1.0), &point(-2.0, -3.0));
        assert_eq!(through.grade(), Ok(3));
        assert_at(&center_of_circle(&through).unwrap(), point2(2.0, -3.0));
        assert!((squared_radius(&through).unwrap() - 16.0).abs() < TOL);
    }

    #[test]
    fn circles_far_from_origin() {
        // Coordinates are large enough that the `ei` coefficients dwarf everything else.
        const FAR_TOL: f64 = 1e-4;
        for (cx, cy) in [(7e5, 7e5), (1e6, 1e6), (-3e6, 2e6)] {
            let c = circle(cx, cy, 5.0);
            let center = euclidean(&center_of_circle(&c).unwrap()).unwrap();
            assert!(
                (center - point2(cx, cy)).length() < FAR_TOL,
                "center {center:?} of circle at ({cx}, {cy})"
            );
            assert!((radius(&c).unwrap() - 5.0).abs() < FAR_TOL);

            let chord = line(&point(cx - 20.0, cy + 3.0), &point(cx + 20.0, cy + 3.0));
            let [a, b] = split_point_pair(&intersection(&chord, &c)).unwrap();
            let (a, b) = (euclidean(&a).unwrap(), euclidean(&b).unwrap());
            assert!((a - point2(cx + 4.0, cy + 3.0)).length() < FAR_TOL, "{a:?}");
            assert!((b - point2(cx - 4.0, cy + 3.0)).length() < FAR_TOL, "{b:?}");

            let miss = line(&point(cx - 20.0, cy + 30.0), &point(cx + 20.0, cy + 30.0));
            assert!(matches!(
                split_point_pair(&intersection(&miss, &c)),
                Err(AlgebraError::ImaginaryPointPair { .. })
            ));
        }
    }

    #[test]
    fn line_has_no_center() {
        let l = line(&point(0.0, 0.0), &point(1.0, 0.0));
        assert!(matches!(
            center_of_circle(&l),
            Err(AlgebraError::Degenerate { .. })
        ));
        assert!(matches!(
            squared_radius(&l),
            Err(AlgebraError::Degenerate { .. })
        ));
    }

    #[test]
    fn projection_onto_circle_picks_nearer_point() {
        let c = circle(0.0, 0.0, 10.0);
        assert_at(
            &project_point_on_circle(&point(0.0, 20.0), &c).unwrap(),
            point2(0.0, 10.0),
        );
        assert_at(
            &project_point_on_circle(&point(-3.0, 4.0), &c).unwrap(),
            point2(-6.0, 8.0),
        );
    }

    #[test]
    fn distances() {
        assert!((distance(&point(1.0, 1.0), &point(4.0, 5.0)) - 5.0).abs() < TOL);
        assert_eq!(distance(&point(1.0, 1.0), &point(1.0, 1.0)), 0.0);
    }

    #[test]
    fn normalize_scaled_point() {
        let p = point(1.0, 2.0) * 3.0;
        assert!(normalize(&p).unwrap().approx_eq(&point(1.0, 2.0), TOL));
        assert_at(&normalize_point(&p).unwrap(), point2(1.0, 2.0));
        assert!(matches!(
            normalize_point(&Multivector::blade(Blade::E1)),
            Err(AlgebraError::Degenerate { .. })
        ));
    }
}
