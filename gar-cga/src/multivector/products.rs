//! Products of multivectors, computed grade by grade using the kernels of [`crate::kernels`].

use crate::Multivector;
use crate::kernels::{GEOMETRIC_MIDDLE, INNER, OUTER};

/// Which product [`Multivector::product()`] computes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Product {
    Outer,
    Inner,
    LeftContraction,
    RightContraction,
    /// Inner product, except that it is zero when either operand is a scalar.
    Hestenes,
    Geometric,
}

impl Multivector {
    /// Sums the chosen product over every pair of nonzero grades of the operands.
    fn product(&self, other: &Self, kind: Product) -> Self {
        let mut result = Self::ZERO;
        for (ga, a) in self.nonzero_blocks() {
            for (gb, b) in other.nonzero_blocks() {
                let inner_grade = ga.abs_diff(gb);
                match kind {
                    Product::Outer => {
                        if let Some(kernel) = OUTER[ga][gb] {
                            kernel(a, b, result.block_mut(ga + gb));
                        }
                    }
                    Product::Inner => INNER[ga][gb](a, b, result.block_mut(inner_grade)),
                    Product::LeftContraction => {
                        if ga <= gb {
                            INNER[ga][gb](a, b, result.block_mut(inner_grade));
                        }
                    }
                    Product::RightContraction => {
                        if ga >= gb {
                            INNER[ga][gb](a, b, result.block_mut(inner_grade));
                        }
                    }
                    Product::Hestenes => {
                        if ga != 0 && gb != 0 {
                            INNER[ga][gb](a, b, result.block_mut(inner_grade));
                        }
                    }
                    Product::Geometric => {
                        if ga == 0 || gb == 0 {
                            // Outer and inner products with a scalar are both the scalar
                            // multiple, so only one of them is counted.
                            if let Some(kernel) = OUTER[ga][gb] {
                                kernel(a, b, result.block_mut(ga + gb));
                            }
                        } else {
                            if let Some(kernel) = OUTER[ga][gb] {
                                kernel(a, b, result.block_mut(ga + gb));
                            }
                            INNER[ga][gb](a, b, result.block_mut(inner_grade));
                            if let Some((grade, kernel)) = GEOMETRIC_MIDDLE[ga][gb] {
                                kernel(a, b, result.block_mut(grade));
                            }
                        }
                    }
                }
            }
        }
        result.prune();
        result
    }

    /// Outer (wedge) product, `self ^ other`.
    ///
    /// The outer product of objects spans the object through all of them: for example,
    /// the outer product of two points and [`ei`](crate::Blade::EI) is the line through
    /// the two points.
    #[inline]
    #[must_use]
    pub fn outer(&self, other: &Self) -> Self {
        self.product(other, Product::Outer)
    }

    /// Inner product, `self | other`.
    ///
    /// For each pair of grades `g1` and `g2` this is the grade `|g1 - g2|` part of their
    /// geometric product. A scalar operand multiplies the other operand.
    #[inline]
    #[must_use]
    pub fn inner(&self, other: &Self) -> Self {
        self.product(other, Product::Inner)
    }

    /// Left contraction, which is the [inner product](Self::inner) restricted to pairs of
    /// grades where the grade of `self` is at most the grade of `other`.
    #[inline]
    #[must_use]
    pub fn left_contraction(&self, other: &Self) -> Self {
        self.product(other, Product::LeftContraction)
    }

    /// Right contraction, which is the [inner product](Self::inner) restricted to pairs of
    /// grades where the grade of `self` is at least the grade of `other`.
    #[inline]
    #[must_use]
    pub fn right_contraction(&self, other: &Self) -> Self {
        self.product(other, Product::RightContraction)
    }

    /// Hestenes inner product: the [inner product](Self::inner), but zero whenever either
    /// operand grade is a scalar.
    #[inline]
    #[must_use]
    pub fn hestenes_product(&self, other: &Self) -> Self {
        self.product(other, Product::Hestenes)
    }

    /// Scalar product: the scalar part of the geometric product.
    #[inline]
    pub fn scalar_product(&self, other: &Self) -> f64 {
        self.geometric(other).scalar_part()
    }

    /// Geometric product, `self * other`.
    #[inline]
    #[must_use]
    pub fn geometric(&self, other: &Self) -> Self {
        self.product(other, Product::Geometric)
    }

    /// Regressive product, `!(!self ^ !other)`.
    ///
    /// This computes the meet of two objects given in their direct representation;
    /// for example the point pair where a line crosses a circle.
    #[inline]
    #[must_use]
    pub fn regressive(&self, other: &Self) -> Self {
        self.dual().outer(&other.dual()).dual()
    }

    /// Outer product of `self` with the dual of `other`.
    #[inline]
    #[must_use]
    pub fn outer_primal_dual(&self, other: &Self) -> Self {
        self.outer(&other.dual())
    }

    /// Outer product of the dual of `self` with `other`.
    #[inline]
    #[must_use]
    pub fn outer_dual_primal(&self, other: &Self) -> Self {
        self.dual().outer(other)
    }

    /// Outer product of the duals of both operands.
    #[inline]
    #[must_use]
    pub fn outer_dual_dual(&self, other: &Self) -> Self {
        self.dual().outer(&other.dual())
    }
}
