use arrayvec::ArrayVec;

use crate::GRADE_COUNT;

/// Errors from operations on [`Multivector`](crate::Multivector)s whose result would otherwise
/// be undefined.
///
/// Operators such as `/` do not return this error; they follow IEEE 754 and produce
/// non-finite coefficients instead. The methods that do return it are the checked
/// counterparts of those operators and the geometric extraction functions.
#[derive(Clone, Debug, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum AlgebraError {
    /// blade index {index} is out of range; there are 16 blades
    InvalidBladeIndex {
        /// The rejected index.
        index: usize,
    },

    /// multivector is not homogeneous; it has the grades {grades:?}
    NotHomogeneous {
        /// Grades that have nonzero coefficients. Empty if the multivector is zero.
        grades: ArrayVec<usize, GRADE_COUNT>,
    },

    /// multivector is not invertible; its quadratic norm is {quadratic_norm}
    NotInvertible {
        /// The quadratic norm, which is zero or close to it.
        quadratic_norm: f64,
    },

    /// point pair is imaginary; its square is {square}
    ImaginaryPointPair {
        /// The square of the point pair, which is negative.
        square: f64,
    },

    /// {operation} is undefined for this degenerate object
    Degenerate {
        /// Which operation could not be performed.
        operation: &'static str,
    },
}

impl core::error::Error for AlgebraError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn messages() {
        assert_eq!(
            AlgebraError::InvalidBladeIndex { index: 20 }.to_string(),
            "blade index 20 is out of range; there are 16 blades"
        );
        let mut grades = ArrayVec::new();
        grades.push(1);
        grades.push(3);
        assert_eq!(
            AlgebraError::NotHomogeneous { grades }.to_string(),
            "multivector is not homogeneous; it has the grades [1, 3]"
        );
        assert_eq!(
            AlgebraError::Degenerate {
                operation: "center of circle"
            }
            .to_string(),
            "center of circle is undefined for this degenerate object"
        );
    }
}
