//! [`Multivector`], the general element of the algebra.

use core::fmt;
use core::ops;

use arrayvec::ArrayVec;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::basis::{DUAL_PERMUTATIONS, DUAL_SIGNS, REVERSE_SIGNS};
use crate::{AlgebraError, Blade, GRADE_COUNT, GRADE_SIZES, MAX_GRADE_SIZE};

mod operators;
mod products;


/// Relative tolerance used when deciding whether a computed quantity is zero, such as the
/// quadratic norm of a multivector that is to be inverted.
///
/// It is relative to the sum of squares of the coefficients involved.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// The coefficients of one grade.
pub(crate) type Block = ArrayVec<f64, MAX_GRADE_SIZE>;

/// An element of the conformal geometric algebra of the plane: a linear combination of the 16
/// basis [`Blade`]s.
///
/// Coefficients are stored grouped by grade, and a grade with no stored coefficients takes no
/// space and no time in products. Reading a coefficient of an absent grade gives zero;
/// writing one allocates that grade.
///
/// The products of the algebra are available as methods and as operators:
///
/// | operator | method                                     |
/// |----------|--------------------------------------------|
/// | `a ^ b`  | [`outer()`](Self::outer)                   |
/// | `a \| b` | [`inner()`](Self::inner)                   |
/// | `a * b`  | [`geometric()`](Self::geometric)           |
/// | `a < b`  | [`left_contraction()`](Self::left_contraction), as a method only  |
/// | `a > b`  | [`right_contraction()`](Self::right_contraction), as a method only |
/// | `!a`     | [`dual()`](Self::dual)                     |
/// | `a / b`  | `a * b.inverse()`, see [`checked_div()`](Self::checked_div) |
///
/// `a / b` does not check that `b` is invertible and may produce infinite or NaN coefficients.
///
/// Equality compares coefficients exactly, treating absent grades as zero.
#[derive(Clone, Default)]
pub struct Multivector {
    blocks: [Option<Block>; GRADE_COUNT],
}

impl Multivector {
    /// The zero multivector, which has no grades.
    pub const ZERO: Self = Self {
        blocks: [const { None }; GRADE_COUNT],
    };

    /// Constructs a multivector with only a scalar part.
    #[inline]
    pub fn scalar(value: f64) -> Self {
        let mut mv = Self::ZERO;
        mv[Blade::SCALAR] = value;
        mv
    }

    /// Constructs a multivector that is the given blade with coefficient 1.
    #[inline]
    pub fn blade(blade: Blade) -> Self {
        let mut mv = Self::ZERO;
        mv[blade] = 1.0;
        mv
    }

    /// Constructs a multivector containing only the given grade, with coefficients in
    /// the order of [`Blade::ALL`].
    ///
    /// Returns [`None`] if the grade is out of range or the number of coefficients does not
    /// match the grade.
    #[inline]
    pub fn from_grade(grade: usize, coefficients: &[f64]) -> Option<Self> {
        if GRADE_SIZES.get(grade) != Some(&coefficients.len()) {
            return None;
        }
        let mut mv = Self::ZERO;
        mv.blocks[grade] = Some(coefficients.iter().copied().collect());
        Some(mv)
    }

    /// Returns the coefficient of the given blade.
    #[inline]
    pub fn get(&self, blade: Blade) -> f64 {
        self.blocks[blade.grade()]
            .as_ref()
            .map_or(0.0, |block| block[blade.offset()])
    }

    /// Sets the coefficient of the given blade, allocating its grade if needed.
    #[inline]
    pub fn set(&mut self, blade: Blade, value: f64) {
        self.block_mut(blade.grade())[blade.offset()] = value;
    }

    /// Returns the coefficient of the blade with the given bitmask index
    /// (see [`Blade`] for the meaning of indices).
    #[inline]
    pub fn get_index(&self, index: usize) -> Result<f64, AlgebraError> {
        Ok(self.get(Blade::from_index(index)?))
    }

    /// Sets the coefficient of the blade with the given bitmask index.
    #[inline]
    pub fn set_index(&mut self, index: usize, value: f64) -> Result<(), AlgebraError> {
        self.set(Blade::from_index(index)?, value);
        Ok(())
    }

    /// Returns the stored coefficients of one grade, or [`None`] if that grade is absent.
    #[inline]
    pub fn grade_block(&self, grade: usize) -> Option<&[f64]> {
        self.blocks.get(grade)?.as_deref()
    }

    /// Returns the block of the given grade, allocating it as zeros if absent.
    pub(crate) fn block_mut(&mut self, grade: usize) -> &mut Block {
        self.blocks[grade].get_or_insert_with(|| {
            let mut block = Block::new();
            for _ in 0..GRADE_SIZES[grade] {
                block.push(0.0);
            }
            block
        })
    }

    /// Iterates over the stored blocks that have any nonzero coefficient.
    pub(crate) fn nonzero_blocks(&self) -> impl Iterator<Item = (usize, &[f64])> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(grade, block)| Some((grade, block.as_deref()?)))
            .filter(|(_, block)| block.iter().any(|&c| c != 0.0))
    }

    /// Drops stored blocks whose coefficients are all zero.
    pub(crate) fn prune(&mut self) {
        for block in &mut self.blocks {
            if block.as_ref().is_some_and(|b| b.iter().all(|&c| c == 0.0)) {
                *block = None;
            }
        }
    }

    /// Iterates over all 16 coefficients, in the order of [`Blade::ALL`].
    #[inline]
    pub fn coefficients(&self) -> impl Iterator<Item = (Blade, f64)> {
        Blade::ALL.into_iter().map(|blade| (blade, self.get(blade)))
    }

    /// Returns the grades that have at least one nonzero coefficient, in increasing order.
    #[inline]
    pub fn grades(&self) -> ArrayVec<usize, GRADE_COUNT> {
        self.nonzero_blocks().map(|(grade, _)| grade).collect()
    }

    /// Returns the single grade of this multivector.
    ///
    /// Returns [`AlgebraError::NotHomogeneous`] if it has more than one grade with nonzero
    /// coefficients, or none at all.
    #[inline]
    pub fn grade(&self) -> Result<usize, AlgebraError> {
        match self.grades()[..] {
            [grade] => Ok(grade),
            _ => Err(AlgebraError::NotHomogeneous {
                grades: self.grades(),
            }),
        }
    }

    /// Returns whether exactly one grade has nonzero coefficients.
    #[inline]
    pub fn is_homogeneous(&self) -> bool {
        self.grades().len() == 1
    }

    /// Sets all coefficients to zero and releases all grades.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns whether every coefficient is exactly zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nonzero_blocks().next().is_none()
    }

    /// Returns whether every coefficient has an absolute value of at most `tolerance`.
    #[inline]
    pub fn is_negligible(&self, tolerance: f64) -> bool {
        self.coefficients().all(|(_, c)| c.abs() <= tolerance)
    }

    /// Returns whether every coefficient of `self - other` has an absolute value of at most
    /// `tolerance`.
    #[inline]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self - other).is_negligible(tolerance)
    }

    /// Returns the sum of the squares of all coefficients.
    ///
    /// This ignores the metric; it measures how large the numbers are, for use in tolerances.
    #[inline]
    pub fn coefficient_magnitude_squared(&self) -> f64 {
        self.coefficients().map(|(_, c)| c * c).sum()
    }

    /// Returns the sum of the squares of the coefficients of blades that do not contain `ei`.
    ///
    /// Coefficients of `ei` blades grow with the square of the distance from the origin and
    /// do not contribute to the [quadratic norm](Self::quadratic_norm) on their own.
    #[inline]
    pub fn finite_magnitude_squared(&self) -> f64 {
        self.coefficients()
            .filter(|&(blade, _)| blade.index() & Blade::EI.index() == 0)
            .map(|(_, c)| c * c)
            .sum()
    }

    /// Returns the part of this multivector of the given grade.
    #[inline]
    #[must_use]
    pub fn grade_part(&self, grade: usize) -> Self {
        let mut part = Self::ZERO;
        if let Some(Some(block)) = self.blocks.get(grade) {
            part.blocks[grade] = Some(block.clone());
        }
        part
    }

    /// Returns the scalar coefficient.
    #[inline]
    pub fn scalar_part(&self) -> f64 {
        self.get(Blade::SCALAR)
    }

    /// Returns the reverse, which reverses the order of the vector factors of every blade.
    /// This negates grades 2 and 3.
    #[inline]
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = self.clone();
        for (grade, block) in reversed.blocks.iter_mut().enumerate() {
            if let Some(block) = block {
                block.iter_mut().for_each(|c| *c *= REVERSE_SIGNS[grade]);
            }
        }
        reversed
    }

    /// Returns the dual, which is the geometric product with the pseudoscalar `e012i`.
    ///
    /// Each grade `g` maps to grade `4 - g`. Applying the dual twice negates the multivector;
    /// see [`undual()`](Self::undual).
    #[inline]
    #[must_use]
    pub fn dual(&self) -> Self {
        let mut dual = Self::ZERO;
        for (grade, block) in self.nonzero_blocks() {
            let out = dual.block_mut(4 - grade);
            for (&c, &destination) in block.iter().zip(DUAL_PERMUTATIONS[grade]) {
                out[destination] = c * DUAL_SIGNS[grade][destination];
            }
        }
        dual
    }

    /// Returns the inverse of [`dual()`](Self::dual).
    #[inline]
    #[must_use]
    pub fn undual(&self) -> Self {
        -self.dual()
    }

    /// Returns the quadratic norm, which is the scalar part of `self.reverse() | self`.
    ///
    /// It is zero for points, and may be negative.
    #[inline]
    pub fn quadratic_norm(&self) -> f64 {
        self.reverse().inner(self).scalar_part()
    }

    /// Returns the square root of the absolute value of the [quadratic
    /// norm](Self::quadratic_norm).
    #[inline]
    pub fn norm(&self) -> f64 {
        self.quadratic_norm().abs().sqrt()
    }

    /// Returns the inverse of this multivector, `self.reverse() / self.quadratic_norm()`,
    /// which is exact for versors and blades.
    ///
    /// Returns [`AlgebraError::NotInvertible`] if the quadratic norm is zero relative to the
    /// size of the coefficients (see [`DEFAULT_TOLERANCE`]), or not finite.
    #[inline]
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        self.inverse_relative_to(self.coefficient_magnitude_squared())
    }

    /// [`inverse()`](Self::inverse), but with the quadratic norm compared against
    /// `magnitude_squared` instead of the squares of all coefficients.
    pub(crate) fn inverse_relative_to(&self, magnitude_squared: f64) -> Result<Self, AlgebraError> {
        let quadratic_norm = self.quadratic_norm();
        if !quadratic_norm.is_finite()
            || quadratic_norm.abs() <= DEFAULT_TOLERANCE * magnitude_squared
        {
            return Err(AlgebraError::NotInvertible { quadratic_norm });
        }
        Ok(self.reverse() / quadratic_norm)
    }

    /// Divides by `divisor`, as `self * divisor.inverse()`, checking that the divisor is
    /// invertible.
    #[inline]
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, AlgebraError> {
        Ok(self * &divisor.inverse()?)
    }

    /// Applies this versor to `x`: `self * x * self.reverse()`.
    ///
    /// For a versor built by [`versor::translator()`](crate::versor::translator) or
    /// [`versor::rotor()`](crate::versor::rotor), this moves `x` by that transformation.
    #[inline]
    #[must_use]
    pub fn sandwich(&self, x: &Self) -> Self {
        &(self * x) * &self.reverse()
    }
}

macro_rules! blade_constructors {
    ($($name:ident => $blade:ident),* $(,)?) => {
        $(
            #[doc = concat!("Returns the basis blade `", stringify!($name), "` as a multivector.")]
            #[inline]
            pub fn $name() -> Multivector {
                Multivector::blade(Blade::$blade)
            }
        )*
    };
}

blade_constructors!(
    e0 => E0,
    e1 => E1,
    e2 => E2,
    ei => EI,
    e01 => E01,
    e02 => E02,
    e0i => E0I,
    e12 => E12,
    e1i => E1I,
    e2i => E2I,
    e012 => E012,
    e01i => E01I,
    e02i => E02I,
    e12i => E12I,
    e012i => E012I,
);

/// Returns the pseudoscalar `I = e012i`, whose square is [`PSEUDOSCALAR_SQUARE`](crate::PSEUDOSCALAR_SQUARE).
#[inline]
pub fn pseudoscalar() -> Multivector {
    e012i()
}

impl ops::Index<Blade> for Multivector {
    type Output = f64;

    /// Returns the coefficient of the given blade, which is zero if its grade is absent.
    #[inline]
    fn index(&self, blade: Blade) -> &f64 {
        match &self.blocks[blade.grade()] {
            Some(block) => &block[blade.offset()],
            None => &0.0,
        }
    }
}

impl ops::IndexMut<Blade> for Multivector {
    /// Returns the coefficient of the given blade, allocating its grade if absent.
    #[inline]
    fn index_mut(&mut self, blade: Blade) -> &mut f64 {
        &mut self.block_mut(blade.grade())[blade.offset()]
    }
}

impl From<f64> for Multivector {
    #[inline]
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<Blade> for Multivector {
    #[inline]
    fn from(blade: Blade) -> Self {
        Self::blade(blade)
    }
}

impl FromIterator<(Blade, f64)> for Multivector {
    /// Sums the given blade coefficients.
    #[inline]
    fn from_iter<T: IntoIterator<Item = (Blade, f64)>>(iter: T) -> Self {
        let mut mv = Self::ZERO;
        for (blade, value) in iter {
            mv[blade] += value;
        }
        mv
    }
}

impl PartialEq for Multivector {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Blade::ALL.iter().all(|&blade| self.get(blade) == other.get(blade))
    }
}

impl fmt::Debug for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Multivector(0)");
        }
        f.debug_map()
            .entries(
                self.coefficients()
                    .filter(|&(_, c)| c != 0.0)
                    .map(|(blade, c)| (blade.name(), c)),
            )
            .finish()
    }
}

/// Formats as a sum of terms, such as `1 + 42*e0 - 2*e12i`, omitting zero coefficients.
/// The zero multivector is formatted as `0`.
impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (blade, c) in self.coefficients().filter(|&(_, c)| c != 0.0) {
            let magnitude = match (first, c < 0.0) {
                (true, _) => c,
                (false, true) => {
                    f.write_str(" - ")?;
                    -c
                }
                (false, false) => {
                    f.write_str(" + ")?;
                    c
                }
            };
            if blade == Blade::SCALAR {
                write!(f, "{magnitude}")?;
            } else {
                write!(f, "{magnitude}*{blade}")?;
            }
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
