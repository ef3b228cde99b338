//! Products of single-grade blocks of coefficients.
//!
//! Each kernel takes the coefficients of one grade from each operand, in the order given by
//! [`GRADE_BLADES`](crate::basis::GRADE_BLADES), and *adds* its result into `out`, which must
//! be the block of the result grade. The tables below select the kernel for a pair of grades.

// The kernels are plain sums of products; fusing them would not change the result meaningfully.
#![allow(clippy::suboptimal_flops)]

mod geometric;
mod inner;
mod outer;

use crate::GRADE_COUNT;

/// Signature shared by all kernels: `out += a ∘ b` for some product `∘`.
pub(crate) type Kernel = fn(a: &[f64], b: &[f64], out: &mut [f64]);

/// Multiplies every coefficient of `b` by the scalar `a[0]`.
fn scalar_times(a: &[f64], b: &[f64], out: &mut [f64]) {
    for (o, &x) in out.iter_mut().zip(b) {
        *o += a[0] * x;
    }
}

/// Multiplies every coefficient of `a` by the scalar `b[0]`.
fn times_scalar(a: &[f64], b: &[f64], out: &mut [f64]) {
    for (o, &x) in out.iter_mut().zip(a) {
        *o += x * b[0];
    }
}

/// Outer product kernels, indexed by operand grades. The result grade is their sum;
/// pairs whose sum exceeds 4 always produce zero and have no kernel.
pub(crate) static OUTER: [[Option<Kernel>; GRADE_COUNT]; GRADE_COUNT] = [
    [
        Some(scalar_times),
        Some(scalar_times),
        Some(scalar_times),
        Some(scalar_times),
        Some(scalar_times),
    ],
    [
        Some(times_scalar),
        Some(outer::vector_vector),
        Some(outer::vector_bivector),
        Some(outer::vector_trivector),
        None,
    ],
    [
        Some(times_scalar),
        Some(outer::bivector_vector),
        Some(outer::bivector_bivector),
        None,
        None,
    ],
    [
        Some(times_scalar),
        Some(outer::trivector_vector),
        None,
        None,
        None,
    ],
    [Some(times_scalar), None, None, None, None],
];

/// Inner product kernels, indexed by operand grades. The result grade is the absolute
/// difference of the operand grades. A scalar operand scales the other one.
pub(crate) static INNER: [[Kernel; GRADE_COUNT]; GRADE_COUNT] = [
    [
        scalar_times,
        scalar_times,
        scalar_times,
        scalar_times,
        scalar_times,
    ],
    [
        times_scalar,
        inner::vector_vector,
        inner::vector_bivector,
        inner::vector_trivector,
        inner::vector_quadvector,
    ],
    [
        times_scalar,
        inner::bivector_vector,
        inner::bivector_bivector,
        inner::bivector_trivector,
        inner::bivector_quadvector,
    ],
    [
        times_scalar,
        inner::trivector_vector,
        inner::trivector_bivector,
        inner::trivector_trivector,
        inner::trivector_quadvector,
    ],
    [
        times_scalar,
        inner::quadvector_vector,
        inner::quadvector_bivector,
        inner::quadvector_trivector,
        inner::quadvector_quadvector,
    ],
];

/// Kernels for the remainder of the geometric product once its outer and inner parts are
/// accounted for, paired with the grade of their result.
pub(crate) static GEOMETRIC_MIDDLE: [[Option<(usize, Kernel)>; GRADE_COUNT]; GRADE_COUNT] = [
    [None; GRADE_COUNT],
    [None; GRADE_COUNT],
    [
        None,
        None,
        Some((2, geometric::bivector_bivector)),
        Some((3, geometric::bivector_trivector)),
        None,
    ],
    [
        None,
        None,
        Some((3, geometric::trivector_bivector)),
        Some((2, geometric::trivector_trivector)),
        None,
    ],
    [None; GRADE_COUNT],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_table_covers_exactly_grades_up_to_4() {
        for (g1, row) in OUTER.iter().enumerate() {
            for (g2, kernel) in row.iter().enumerate() {
                assert_eq!(kernel.is_some(), g1 + g2 <= 4, "{g1} ^ {g2}");
            }
        }
    }

    #[test]
    fn kernels_accumulate() {
        // e1 ^ e2 = e12, added onto an existing coefficient
        let mut out = [0.0, 0.0, 0.0, 5.0, 0.0, 0.0];
        OUTER[1][1].unwrap()(&[0.0, 1.0, 0.0, 0.0], &[0.0, 0.0, 1.0, 0.0], &mut out);
        assert_eq!(out, [0.0, 0.0, 0.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn null_vectors_inner_product() {
        // e0 · ei = -1
        let mut out = [0.0];
        INNER[1][1](&[1.0, 0.0, 0.0, 0.0], &[0.0, 0.0, 0.0, 1.0], &mut out);
        assert_eq!(out, [-1.0]);
        let mut out = [0.0];
        INNER[1][1](&[1.0, 0.0, 0.0, 0.0], &[1.0, 0.0, 0.0, 0.0], &mut out);
        assert_eq!(out, [0.0]);
    }
}
