//! Basis blades of the algebra, and the constant tables that describe how they are laid out.

use alloc::string::String;
use core::fmt;

use crate::AlgebraError;

/// Number of basis vectors that generate the algebra: `e0`, `e1`, `e2`, `ei`.
pub const DIMENSION: usize = 4;

/// Number of distinct grades, 0 (scalars) through 4 (pseudoscalars).
pub const GRADE_COUNT: usize = DIMENSION + 1;

/// Number of basis blades, over all grades.
pub const BLADE_COUNT: usize = 1 << DIMENSION;

/// Largest number of blades of a single grade (the bivectors).
pub const MAX_GRADE_SIZE: usize = 6;

/// Number of blades of each grade.
pub const GRADE_SIZES: [usize; GRADE_COUNT] = [1, 4, 6, 4, 1];

/// Position of the first blade of each grade within [`Blade::ALL`].
pub const GRADE_STARTS: [usize; GRADE_COUNT] = [0, 1, 5, 11, 15];

/// Names of the basis vectors, as used in blade names.
pub const BASIS_VECTOR_NAMES: [&str; DIMENSION] = ["0", "1", "2", "i"];

/// Inner products of pairs of basis vectors, in the order `e0`, `e1`, `e2`, `ei`.
pub const METRIC: [[f64; DIMENSION]; DIMENSION] = [
    [0.0, 0.0, 0.0, -1.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [-1.0, 0.0, 0.0, 0.0],
];

/// Grade of the blade whose bitmask is the index.
pub(crate) const BLADE_GRADE: [usize; BLADE_COUNT] =
    [0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4];

/// Position, within its grade block, of the blade whose bitmask is the index.
pub(crate) const BLADE_OFFSET: [usize; BLADE_COUNT] =
    [0, 0, 1, 0, 2, 1, 3, 0, 3, 2, 4, 1, 5, 2, 3, 0];

/// Bitmasks of the blades of each grade, in the order they are stored in a grade block.
pub(crate) const GRADE_BLADES: [&[u8]; GRADE_COUNT] = [
    &[0b0000],
    &[0b0001, 0b0010, 0b0100, 0b1000],
    &[0b0011, 0b0101, 0b1001, 0b0110, 0b1010, 0b1100],
    &[0b0111, 0b1011, 0b1101, 0b1110],
    &[0b1111],
];

/// Sign that reversion applies to each grade.
pub(crate) const REVERSE_SIGNS: [f64; GRADE_COUNT] = [1.0, 1.0, -1.0, -1.0, 1.0];

/// For each grade, where each blade of that grade lands within grade `4 - grade`
/// when multiplied by the pseudoscalar.
pub(crate) const DUAL_PERMUTATIONS: [&[usize]; GRADE_COUNT] = [
    &[0],
    &[0, 2, 1, 3],
    &[1, 0, 3, 2, 5, 4],
    &[0, 2, 1, 3],
    &[0],
];

/// For each source grade, the sign picked up by each *destination* position of the dual.
pub(crate) const DUAL_SIGNS: [&[f64]; GRADE_COUNT] = [
    &[1.0],
    &[1.0, 1.0, -1.0, -1.0],
    &[-1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
    &[-1.0, 1.0, -1.0, 1.0],
    &[-1.0],
];

/// The square of the pseudoscalar, which is also its own inverse up to this sign.
pub const PSEUDOSCALAR_SQUARE: f64 = -1.0;

const BLADE_NAMES: [&str; BLADE_COUNT] = [
    "1", "e0", "e1", "e01", "e2", "e02", "e12", "e012", "ei", "e0i", "e1i", "e01i", "e2i", "e02i",
    "e12i", "e012i",
];

/// Identifies one of the 16 basis blades.
///
/// Internally, a blade is the bitmask of the basis vectors it is the outer product of:
/// bit 0 is `e0`, bit 1 is `e1`, bit 2 is `e2`, and bit 3 is `ei`.
/// This is also the blade's *index* as accepted by [`Multivector::get_index()`].
///
/// [`Multivector::get_index()`]: crate::Multivector::get_index
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Blade(u8);

impl Blade {
    /// The scalar unit, `1`.
    pub const SCALAR: Self = Self(0b0000);
    /// The origin point.
    pub const E0: Self = Self(0b0001);
    /// The first Euclidean axis.
    pub const E1: Self = Self(0b0010);
    /// The second Euclidean axis.
    pub const E2: Self = Self(0b0100);
    /// The point at infinity.
    pub const EI: Self = Self(0b1000);
    #[allow(missing_docs)]
    pub const E01: Self = Self(0b0011);
    #[allow(missing_docs)]
    pub const E02: Self = Self(0b0101);
    #[allow(missing_docs)]
    pub const E0I: Self = Self(0b1001);
    /// The Euclidean plane's unit bivector.
    pub const E12: Self = Self(0b0110);
    #[allow(missing_docs)]
    pub const E1I: Self = Self(0b1010);
    #[allow(missing_docs)]
    pub const E2I: Self = Self(0b1100);
    #[allow(missing_docs)]
    pub const E012: Self = Self(0b0111);
    #[allow(missing_docs)]
    pub const E01I: Self = Self(0b1011);
    #[allow(missing_docs)]
    pub const E02I: Self = Self(0b1101);
    #[allow(missing_docs)]
    pub const E12I: Self = Self(0b1110);
    /// The pseudoscalar.
    pub const E012I: Self = Self(0b1111);

    /// All blades, ordered by grade and then in the order they are stored within a grade.
    pub const ALL: [Self; BLADE_COUNT] = [
        Self::SCALAR,
        Self::E0,
        Self::E1,
        Self::E2,
        Self::EI,
        Self::E01,
        Self::E02,
        Self::E0I,
        Self::E12,
        Self::E1I,
        Self::E2I,
        Self::E012,
        Self::E01I,
        Self::E02I,
        Self::E12I,
        Self::E012I,
    ];

    /// Returns the blade with the given bitmask index, or an error if it is not less than 16.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, AlgebraError> {
        if index < BLADE_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(AlgebraError::InvalidBladeIndex { index })
        }
    }

    /// Returns the blade stored at `offset` within the block for `grade`.
    ///
    /// Panics if either is out of range.
    #[inline]
    pub fn from_grade_offset(grade: usize, offset: usize) -> Self {
        Self(GRADE_BLADES[grade][offset])
    }

    /// Returns the bitmask index of this blade.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the grade of this blade, i.e. how many basis vectors it is the product of.
    #[inline]
    pub const fn grade(self) -> usize {
        BLADE_GRADE[self.0 as usize]
    }

    /// Returns the position of this blade within the coefficients of its grade.
    #[inline]
    pub const fn offset(self) -> usize {
        BLADE_OFFSET[self.0 as usize]
    }

    /// Returns the conventional name of this blade, such as `"e12i"`, or `"1"` for the scalar.
    #[inline]
    pub const fn name(self) -> &'static str {
        BLADE_NAMES[self.0 as usize]
    }
}

impl fmt::Debug for Blade {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blade({})", self.name())
    }
}

impl fmt::Display for Blade {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for Blade {
    type Error = AlgebraError;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Returns a textual table of the metric, one row per basis vector, headed by
/// [`BASIS_VECTOR_NAMES`].
///
/// ```
/// assert_eq!(
///     gar_cga::metric_table(),
///     "   e0  e1  e2  ei\ne0  0   0   0  -1\ne1  0   1   0   0\ne2  0   0   1   0\nei -1   0   0   0\n",
/// );
/// ```
#[inline]
pub fn metric_table() -> String {
    let mut table = String::from("  ");
    for name in BASIS_VECTOR_NAMES {
        table += &format!(" e{name} ");
    }
    table.truncate(table.trim_end().len());
    table.push('\n');
    for (row, name) in METRIC.iter().zip(BASIS_VECTOR_NAMES) {
        table += &format!("e{name}");
        for value in row {
            table += &format!("{value:>3} ");
        }
        table.truncate(table.trim_end().len());
        table.push('\n');
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn tables_agree() {
        for (position, blade) in Blade::ALL.into_iter().enumerate() {
            let grade = blade.grade();
            assert_eq!(
                GRADE_STARTS[grade] + blade.offset(),
                position,
                "{blade} is out of place"
            );
            assert_eq!(blade.index().count_ones() as usize, grade);
            assert_eq!(Blade::from_grade_offset(grade, blade.offset()), blade);
        }
        assert_eq!(GRADE_SIZES.iter().sum::<usize>(), BLADE_COUNT);
        for (grade, blades) in GRADE_BLADES.iter().enumerate() {
            assert_eq!(blades.len(), GRADE_SIZES[grade]);
            assert_eq!(DUAL_PERMUTATIONS[grade].len(), GRADE_SIZES[grade]);
            assert_eq!(DUAL_SIGNS[grade].len(), GRADE_SIZES[4 - grade]);
        }
    }

    #[test]
    fn dual_permutations_are_involutions() {
        for permutation in DUAL_PERMUTATIONS {
            for (i, &j) in permutation.iter().enumerate() {
                assert_eq!(permutation[j], i);
            }
        }
    }

    #[test]
    fn from_index_range() {
        assert_eq!(Blade::from_index(15), Ok(Blade::E012I));
        assert_eq!(
            Blade::try_from(16),
            Err(AlgebraError::InvalidBladeIndex { index: 16 })
        );
    }

    #[test]
    fn names() {
        assert_eq!(Blade::E0I.to_string(), "e0i");
        assert_eq!(Blade::SCALAR.to_string(), "1");
        assert_eq!(format!("{:?}", Blade::E12), "Blade(e12)");
    }
}
