//! Operator trait implementations for [`Multivector`].
//!
//! Every binary operator is implemented on references, and then forwarded for the
//! combinations of owned and borrowed operands.

use core::ops;

use crate::{Blade, GRADE_COUNT, Multivector};

/// Implements a binary operator and its assigning form in terms of a method taking two
/// references, for all combinations of owned and borrowed operands.
macro_rules! forward_binop {
    ($trait:ident :: $op:ident, $assign_trait:ident :: $assign_op:ident, $method:ident) => {
        impl ops::$trait<&Multivector> for &Multivector {
            type Output = Multivector;
            #[inline]
            fn $op(self, rhs: &Multivector) -> Multivector {
                self.$method(rhs)
            }
        }
        impl ops::$trait<Multivector> for &Multivector {
            type Output = Multivector;
            #[inline]
            fn $op(self, rhs: Multivector) -> Multivector {
                self.$method(&rhs)
            }
        }
        impl ops::$trait<&Multivector> for Multivector {
            type Output = Multivector;
            #[inline]
            fn $op(self, rhs: &Multivector) -> Multivector {
                self.$method(rhs)
            }
        }
        impl ops::$trait<Multivector> for Multivector {
            type Output = Multivector;
            #[inline]
            fn $op(self, rhs: Multivector) -> Multivector {
                self.$method(&rhs)
            }
        }
        impl ops::$assign_trait<&Multivector> for Multivector {
            #[inline]
            fn $assign_op(&mut self, rhs: &Multivector) {
                *self = self.$method(rhs);
            }
        }
        impl ops::$assign_trait<Multivector> for Multivector {
            #[inline]
            fn $assign_op(&mut self, rhs: Multivector) {
                *self = self.$method(&rhs);
            }
        }
    };
}

forward_binop!(Add::add, AddAssign::add_assign, plus);
forward_binop!(Sub::sub, SubAssign::sub_assign, minus);
forward_binop!(BitXor::bitxor, BitXorAssign::bitxor_assign, outer);
forward_binop!(BitOr::bitor, BitOrAssign::bitor_assign, inner);
forward_binop!(Mul::mul, MulAssign::mul_assign, geometric);
forward_binop!(Div::div, DivAssign::div_assign, unchecked_div);

impl Multivector {
    fn plus(&self, other: &Self) -> Self {
        self.zip_blocks(other, |a, b| a + b)
    }

    fn minus(&self, other: &Self) -> Self {
        self.zip_blocks(other, |a, b| a - b)
    }

    /// `self * other.reverse() / other.quadratic_norm()`, without checking for division by
    /// zero.
    fn unchecked_div(&self, other: &Self) -> Self {
        self.geometric(&(other.reverse() / other.quadratic_norm()))
    }

    /// Combines coefficients grade by grade. Grades absent from both operands stay absent.
    fn zip_blocks(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut result = Self::ZERO;
        for grade in 0..GRADE_COUNT {
            let (a, b) = (self.grade_block(grade), other.grade_block(grade));
            if a.is_none() && b.is_none() {
                continue;
            }
            for (offset, out) in result.block_mut(grade).iter_mut().enumerate() {
                let ca = a.map_or(0.0, |block| block[offset]);
                let cb = b.map_or(0.0, |block| block[offset]);
                *out = f(ca, cb);
            }
        }
        result
    }

    fn map_coefficients(mut self, f: impl Fn(f64) -> f64) -> Self {
        for block in self.blocks.iter_mut().flatten() {
            block.iter_mut().for_each(|c| *c = f(*c));
        }
        self
    }
}

impl ops::Neg for Multivector {
    type Output = Multivector;
    #[inline]
    fn neg(self) -> Multivector {
        self.map_coefficients(|c| -c)
    }
}

impl ops::Neg for &Multivector {
    type Output = Multivector;
    #[inline]
    fn neg(self) -> Multivector {
        -self.clone()
    }
}

/// The dual; see [`Multivector::dual()`].
impl ops::Not for Multivector {
    type Output = Multivector;
    #[inline]
    fn not(self) -> Multivector {
        self.dual()
    }
}

/// The dual; see [`Multivector::dual()`].
impl ops::Not for &Multivector {
    type Output = Multivector;
    #[inline]
    fn not(self) -> Multivector {
        self.dual()
    }
}

// Scalar operands. Multiplication and division scale every coefficient; addition and
// subtraction affect only the scalar part.

impl ops::Mul<f64> for Multivector {
    type Output = Multivector;
    #[inline]
    fn mul(self, rhs: f64) -> Multivector {
        self.map_coefficients(|c| c * rhs)
    }
}

impl ops::Mul<f64> for &Multivector {
    type Output = Multivector;
    #[inline]
    fn mul(self, rhs: f64) -> Multivector {
        self.clone() * rhs
    }
}

impl ops::Mul<Multivector> for f64 {
    type Output = Multivector;
    #[inline]
    fn mul(self, rhs: Multivector) -> Multivector {
        rhs.map_coefficients(|c| self * c)
    }
}

impl ops::Mul<&Multivector> for f64 {
    type Output = Multivector;
    #[inline]
    fn mul(self, rhs: &Multivector) -> Multivector {
        self * rhs.clone()
    }
}

impl ops::MulAssign<f64> for Multivector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = core::mem::take(self) * rhs;
    }
}

impl ops::Div<f64> for Multivector {
    type Output = Multivector;
    #[inline]
    fn div(self, rhs: f64) -> Multivector {
        self.map_coefficients(|c| c / rhs)
    }
}

impl ops::Div<f64> for &Multivector {
    type Output = Multivector;
    #[inline]
    fn div(self, rhs: f64) -> Multivector {
        self.clone() / rhs
    }
}

impl ops::DivAssign<f64> for Multivector {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = core::mem::take(self) / rhs;
    }
}

impl ops::Add<f64> for Multivector {
    type Output = Multivector;
    #[inline]
    fn add(mut self, rhs: f64) -> Multivector {
        self[Blade::SCALAR] += rhs;
        self
    }
}

impl ops::Add<f64> for &Multivector {
    type Output = Multivector;
    #[inline]
    fn add(self, rhs: f64) -> Multivector {
        self.clone() + rhs
    }
}

impl ops::Add<Multivector> for f64 {
    type Output = Multivector;
    #[inline]
    fn add(self, rhs: Multivector) -> Multivector {
        rhs + self
    }
}

impl ops::Sub<f64> for Multivector {
    type Output = Multivector;
    #[inline]
    fn sub(mut self, rhs: f64) -> Multivector {
        self[Blade::SCALAR] -= rhs;
        self
    }
}

impl ops::Sub<f64> for &Multivector {
    type Output = Multivector;
    #[inline]
    fn sub(self, rhs: f64) -> Multivector {
        self.clone() - rhs
    }
}

impl ops::Sub<Multivector> for f64 {
    type Output = Multivector;
    #[inline]
    fn sub(self, rhs: Multivector) -> Multivector {
        -rhs + self
    }
}

impl ops::AddAssign<f64> for Multivector {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self[Blade::SCALAR] += rhs;
    }
}

impl ops::SubAssign<f64> for Multivector {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self[Blade::SCALAR] -= rhs;
    }
}

impl core::iter::Sum for Multivector {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}
