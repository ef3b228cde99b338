//! A 2D light and shadow raytracer whose geometry is computed with the conformal geometric
//! algebra of [`gar_cga`].
//!
//! A [`Scene`] holds point [`Light`]s and circular occluders. A [`Renderer`] computes, for
//! every pixel, how much light reaches it, by testing whether the segment from each light to
//! the pixel crosses an occluder, and produces a [`Rendering`]: an intensity image.
//!
//! ```
//! use gar_render::{Light, RenderOptions, Renderer, Scene};
//! use gar_cga::geometry::FreePoint;
//!
//! let mut scene = Scene::new();
//! scene.add_light(Light::new(30.0, FreePoint::new(-10.0, 0.0)));
//! scene.add_occluder(5.0, 0.0, 3.0);
//!
//! let renderer = Renderer::new(RenderOptions::default()).unwrap();
//! let rendering = renderer.render(&scene);
//! assert_eq!(rendering.image.width(), 80);
//! ```
//!
//! ## Package features
//!
//! This package, `gar-render`, defines the following feature flags:
//!
//! * `"auto-threads"`:
//!   Enable use of threads for parallel rendering, via [`rayon`]’s global thread pool.
//!   This feature does not affect the public API, only performance and dependencies.
//! * `"std"` (enabled by default):
//!   If disabled, the library becomes `no_std` compatible, at this cost:
//!   * [`print_scene()`] is not available.
//!   * Float math in [`gar_cga`] is provided by `libm`.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// -------------------------------------------------------------------------------------------------

mod light;
pub use light::Light;

mod renderer;
pub use renderer::{RenderInfo, RenderOptions, Renderer, Rendering};

mod scene;
pub use scene::{Occluder, Scene};

mod shading;
pub use shading::{ease_in, lerp, shade};

mod text;
#[cfg(feature = "std")]
pub use text::print_scene;

// -------------------------------------------------------------------------------------------------

/// An error indicating that a [`Renderer`] could not be created with the given options.
#[derive(Clone, Debug, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum RenderError {
    /// The viewport has no pixels.
    #[displaydoc("viewport of {width}×{height} pixels is empty")]
    EmptyViewport {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// The size of a pixel in scene units is not a positive finite number.
    #[displaydoc("pixel scale {0} is not a positive finite number")]
    InvalidScale(f64),
    /// The ambient light level is not within `0.0..=1.0`.
    #[displaydoc("ambient light level {0} is not between 0 and 1")]
    InvalidAmbient(f32),
}

impl core::error::Error for RenderError {}
