//! Recognizing which geometric object a [`Multivector`] represents.

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::{Blade, Multivector};

/// Tolerance for the zero tests made by [`classify()`], applied after rescaling the
/// multivector so that the mean absolute value of its coefficients is 1.
///
/// Whether an object is null is judged relative to its distance from the origin: the square
/// is compared against this tolerance times the
/// [`finite_magnitude_squared()`](Multivector::finite_magnitude_squared) of the object, or of
/// its dual vector for a circle.
pub const CLASSIFICATION_TOLERANCE: f64 = 1e3 * f64::EPSILON;

/// The kind of geometric object a multivector represents, as determined by [`classify()`].
///
/// The [`Display`](core::fmt::Display) form is a short human-readable description.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumIter)]
#[non_exhaustive]
pub enum Classification {
    /// All coefficients are zero.
    #[strum(serialize = "zero")]
    Zero,
    /// More than one grade is present, so it is not a single object.
    #[strum(serialize = "non-homogeneous multivector")]
    NonHomogeneous,

    /// Grade 0.
    #[strum(serialize = "scalar")]
    Scalar,

    /// Grade 1, null, round: a point.
    #[strum(serialize = "point")]
    Point,
    /// Grade 1, positive square, round: the dual representation of a real circle.
    #[strum(serialize = "dual circle")]
    DualCircle,
    /// Grade 1, negative square, round: the dual representation of an imaginary circle.
    #[strum(serialize = "imaginary dual circle")]
    ImaginaryDualCircle,
    /// Grade 1, flat: the dual representation of a line.
    #[strum(serialize = "dual line")]
    DualLine,

    /// Grade 2, null, round: a point with a direction.
    #[strum(serialize = "tangent vector")]
    TangentVector,
    /// Grade 2, positive square, round: two real points.
    #[strum(serialize = "point pair")]
    PointPair,
    /// Grade 2, negative square, round: the intersection of objects that do not meet.
    #[strum(serialize = "imaginary point pair")]
    ImaginaryPointPair,
    /// Grade 2, containing `ei`: the intersection of two lines.
    #[strum(serialize = "flat point")]
    FlatPoint,
    /// Grade 2, flat but not containing `ei`: the dual of a flat point.
    #[strum(serialize = "dual flat point")]
    DualFlatPoint,

    /// Grade 3, null, round: a circle of zero radius, which is the dual of a point.
    #[strum(serialize = "dual point")]
    DualPoint,
    /// Grade 3, positive square, round: a circle.
    #[strum(serialize = "circle")]
    Circle,
    /// Grade 3, negative square, round: a circle with imaginary radius.
    #[strum(serialize = "imaginary circle")]
    ImaginaryCircle,
    /// Grade 3, flat: a line.
    #[strum(serialize = "line")]
    Line,

    /// Grade 4.
    #[strum(serialize = "pseudoscalar")]
    Pseudoscalar,
}

/// Determines which geometric object `mv` represents, from its grade, the sign of its square,
/// and whether it is *round* (has a nonzero outer product with the point at infinity `ei`).
///
/// All zero tests use [`CLASSIFICATION_TOLERANCE`] after rescaling, so classification does
/// not depend on the scale of `mv`.
///
/// ```
/// use gar_cga::{Classification, classify, geometry};
///
/// assert_eq!(classify(&geometry::circle(1.0, 2.0, 3.0)), Classification::Circle);
/// assert_eq!(classify(&geometry::point(1.0, 2.0)).to_string(), "point");
/// ```
#[inline]
pub fn classify(mv: &Multivector) -> Classification {
    use Classification as C;

    let grades = mv.grades();
    let grade = match grades[..] {
        [] => return C::Zero,
        [grade] => grade,
        _ => return C::NonHomogeneous,
    };

    // Rescale so that the mean absolute coefficient of the blade is 1.
    let block = mv.grade_block(grade).unwrap_or_default();
    let mean = block.iter().map(|c| c.abs()).sum::<f64>() / block.len() as f64;
    let mv = mv / mean;

    let square = mv.inner(&mv).scalar_part();
    let ei = Multivector::blade(Blade::EI);
    let with_infinity = ei.outer(&mv);
    // Linear in the weight, which is tiny after rescaling an object far from the origin.
    let round = with_infinity.norm() > CLASSIFICATION_TOLERANCE;
    // Rounding error in `square` grows with the squared distance from the origin.
    let position_scale = match grade {
        3 => mv.undual().finite_magnitude_squared(),
        _ => mv.finite_magnitude_squared(),
    };
    let null = square.abs() <= CLASSIFICATION_TOLERANCE * position_scale;

    match (grade, round) {
        (0, _) => C::Scalar,
        (1, true) if null => C::Point,
        (1, true) if square > 0.0 => C::DualCircle,
        (1, true) => C::ImaginaryDualCircle,
        (1, false) => C::DualLine,
        (2, true) if null => C::TangentVector,
        (2, true) if square > 0.0 => C::PointPair,
        (2, true) => C::ImaginaryPointPair,
        (2, false) if with_infinity.is_negligible(CLASSIFICATION_TOLERANCE) => C::FlatPoint,
        (2, false) => C::DualFlatPoint,
        (3, true) if null => C::DualPoint,
        (3, true) if square > 0.0 => C::Circle,
        (3, true) => C::ImaginaryCircle,
        (3, false) => C::Line,
        _ => C::Pseudoscalar,
    }
}

impl Multivector {
    /// Determines which geometric object this multivector represents; see [`classify()`].
    #[inline]
    pub fn classify(&self) -> Classification {
        classify(self)
    }
}
