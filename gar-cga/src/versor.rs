//! Versors: multivectors that transform other multivectors by [`Multivector::sandwich()`].
//!
//! ```
//! use gar_cga::geometry::{circle, point};
//! use gar_cga::versor::translator;
//!
//! let moved = translator(3.0, -1.0).sandwich(&point(1.0, 1.0));
//! assert!(moved.approx_eq(&point(4.0, 0.0), 1e-12));
//!
//! let moved_circle = translator(3.0, -1.0).sandwich(&circle(0.0, 0.0, 2.0));
//! assert!(moved_circle.approx_eq(&circle(3.0, -1.0, 2.0), 1e-12));
//! ```

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::{Blade, Multivector};

/// Returns the translator that moves objects by `(dx, dy)`: `1 - ½(dx e1 + dy e2) ei`.
#[inline]
pub fn translator(dx: f64, dy: f64) -> Multivector {
    let mut versor = Multivector::scalar(1.0);
    versor[Blade::E1I] = -0.5 * dx;
    versor[Blade::E2I] = -0.5 * dy;
    versor
}

/// Returns the rotor that rotates objects counterclockwise by `angle` radians about the
/// origin: `cos(angle/2) - sin(angle/2) e12`.
#[inline]
pub fn rotor(angle: f64) -> Multivector {
    let (sin, cos) = (angle / 2.0).sin_cos();
    let mut versor = Multivector::scalar(cos);
    versor[Blade::E12] = -sin;
    versor
}

/// Returns the rotor that rotates objects counterclockwise by `angle` radians about the
/// point `(x, y)`.
#[inline]
pub fn rotor_about(x: f64, y: f64, angle: f64) -> Multivector {
    &(&translator(x, y) * &rotor(angle)) * &translator(-x, -y)
}
