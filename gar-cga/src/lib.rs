//! Conformal geometric algebra of the Euclidean plane.
//!
//! The algebra is generated by four basis vectors `e0`, `e1`, `e2`, `ei`, where `e1` and `e2`
//! span the Euclidean plane, `e0` is the point at the origin, and `ei` is the point at infinity.
//! They obey the metric `e1·e1 = e2·e2 = 1`, `e0·ei = -1`, and `e0·e0 = ei·ei = 0`.
//!
//! * [`Multivector`] stores a general element of the algebra and implements its products as
//!   operators: `^` is the outer product, `|` the inner product, `*` the geometric product,
//!   and `!` the dual.
//! * [`geometry`] builds points, lines, and circles, and extracts intersections,
//!   projections, and centers from them.
//! * [`versor`] builds translations and rotations, applied with [`Multivector::sandwich`].
//! * [`classify()`] recognizes which geometric object a multivector represents.
//!
//! ```
//! use gar_cga::geometry::{circle, line, intersection};
//!
//! let c = circle(0.0, 0.0, 10.0);
//! let l = line(&gar_cga::geometry::point(-20.0, 0.0), &gar_cga::geometry::point(20.0, 0.0));
//! let pair = intersection(&l, &c);
//! assert_eq!(pair.grade(), Ok(2));
//! ```
//!
//! ## Package features
//!
//! This package, `gar-cga`, defines the following feature flags:
//!
//! * `"std"` (enabled by default):
//!   Uses the platform's floating-point math functions.
//!   If disabled, the library becomes `no_std` compatible, and float math is provided by
//!   [`libm`](https://docs.rs/libm) through `num-traits`.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

mod basis;
pub use basis::*;

mod classify;
pub use classify::*;

mod error;
pub use error::*;

pub mod geometry;

mod kernels;

mod multivector;
pub use multivector::*;

pub mod versor;

// reexport for convenience of our tests and of callers using `FreePoint`
#[doc(hidden)]
pub use euclid;
