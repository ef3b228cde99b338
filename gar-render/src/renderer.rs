use core::fmt;

use gar_cga::geometry::FreePoint;
use imgref::ImgVec;

use crate::{RenderError, Scene, shade};

/// Options controlling how a [`Renderer`] maps a [`Scene`] to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct RenderOptions {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// Size of a pixel, in scene units.
    pub scale: f64,
    /// The scene position that appears at the center of the image.
    pub center: FreePoint,
    /// Whether occluders block light.
    pub shadows: bool,
    /// Light level of pixels which no light reaches.
    pub ambient: f32,
}

impl RenderOptions {
    /// Returns the scene position at the center of the given pixel.
    ///
    /// Pixel rows are numbered from the top of the image, and the scene's Y axis points up.
    #[inline]
    pub fn pixel_center(&self, x: usize, y: usize) -> FreePoint {
        FreePoint::new(
            self.center.x + (x as f64 + 0.5 - self.width as f64 / 2.0) * self.scale,
            self.center.y + (self.height as f64 / 2.0 - (y as f64 + 0.5)) * self.scale,
        )
    }

    fn validate(&self) -> Result<(), RenderError> {
        let &Self {
            width,
            height,
            scale,
            center: _,
            shadows: _,
            ambient,
        } = self;
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyViewport { width, height });
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidScale(scale));
        }
        if !(0.0..=1.0).contains(&ambient) {
            return Err(RenderError::InvalidAmbient(ambient));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    /// An 80×40 image of the region around the origin, one scene unit per pixel,
    /// with shadows and a dim ambient light.
    #[inline]
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            scale: 1.0,
            center: FreePoint::origin(),
            shadows: true,
            ambient: 0.1,
        }
    }
}

/// Renders [`Scene`]s into intensity images.
#[derive(Clone, Debug)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Constructs a renderer, or returns an error if `options` describe an empty or
    /// invalid image.
    #[inline]
    pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Constructs a renderer whose options are known to be valid.
    pub(crate) fn new_unchecked(options: RenderOptions) -> Self {
        debug_assert_eq!(options.validate(), Ok(()));
        Self { options }
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Computes the light level of every pixel of the image.
    #[inline]
    pub fn render(&self, scene: &Scene) -> Rendering {
        let RenderOptions { width, height, .. } = self.options;
        let mut data = vec![0.0f32; width * height];
        let info = trace_image(scene, &self.options, &mut data);
        log::trace!("rendered {width}×{height} pixels: {info}");
        Rendering {
            image: ImgVec::new(data, width, height),
            info,
        }
    }
}

/// Computes every pixel of the image into `output`, in left-right then top-bottom order.
#[cfg(feature = "auto-threads")]
fn trace_image(scene: &Scene, options: &RenderOptions, output: &mut [f32]) -> RenderInfo {
    use rayon::iter::{IndexedParallelIterator as _, IntoParallelIterator as _, ParallelIterator as _};
    use rayon::slice::ParallelSliceMut as _;

    output
        .par_chunks_mut(options.width)
        .enumerate()
        .map(move |(y, raster_row)| {
            raster_row
                .into_par_iter()
                .enumerate()
                .map(move |(x, pixel_out)| {
                    let (level, info) = shade(scene, options.pixel_center(x, y), options);
                    *pixel_out = level;
                    info
                })
        })
        .flatten()
        .sum()
}

/// Computes every pixel of the image into `output`, in left-right then top-bottom order.
#[cfg(not(feature = "auto-threads"))]
fn trace_image(scene: &Scene, options: &RenderOptions, output: &mut [f32]) -> RenderInfo {
    let mut total_info = RenderInfo::default();
    for (y, raster_row) in output.chunks_mut(options.width).enumerate() {
        for (x, pixel_out) in raster_row.iter_mut().enumerate() {
            let (level, info) = shade(scene, options.pixel_center(x, y), options);
            *pixel_out = level;
            total_info += info;
        }
    }
    total_info
}

/// The result of [`Renderer::render()`].
#[derive(Clone, Debug)]
#[expect(clippy::exhaustive_structs)]
pub struct Rendering {
    /// Light level of each pixel, from 0 (dark) to 1 (fully lit).
    pub image: ImgVec<f32>,
    /// Statistics about the work done.
    pub info: RenderInfo,
}

/// Performance info about a rendering.
///
/// The contents of this structure are subject to change; use [`Debug`] or
/// [`Display`](fmt::Display) to view it.
/// The [`Default`] value is the zero value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct RenderInfo {
    pub(crate) pixels: usize,
    /// Number of occluders tested against a light ray.
    pub(crate) shadow_tests: usize,
    /// Number of light contributions that were blocked.
    pub(crate) occluded: usize,
    /// Number of crossings of an occluder that could not be located.
    pub(crate) degenerate: usize,
}

impl RenderInfo {
    /// Returns the number of pixels computed.
    #[inline]
    pub fn pixels(&self) -> usize {
        self.pixels
    }

    /// Returns the number of light contributions that were blocked by occluders.
    #[inline]
    pub fn occluded(&self) -> usize {
        self.occluded
    }
}

impl core::ops::Add for RenderInfo {
    type Output = Self;
    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
impl core::ops::AddAssign<RenderInfo> for RenderInfo {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.pixels += other.pixels;
        self.shadow_tests += other.shadow_tests;
        self.occluded += other.occluded;
        self.degenerate += other.degenerate;
    }
}
impl core::iter::Sum for RenderInfo {
    #[inline]
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut sum = Self::default();
        for part in iter {
            sum += part;
        }
        sum
    }
}

impl fmt::Display for RenderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let &Self {
            pixels,
            shadow_tests,
            occluded,
            degenerate,
        } = self;
        write!(
            f,
            "{pixels} pixels, {shadow_tests} shadow tests, {occluded} occluded"
        )?;
        if degenerate > 0 {
            write!(f, ", {degenerate} degenerate")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Light;
    use alloc::string::ToString as _;
    use pretty_assertions::assert_eq;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_light(Light::new(15.0, FreePoint::new(-8.0, 0.0)));
        scene.add_occluder(0.0, 0.0, 3.0);
        scene
    }

    #[test]
    fn invalid_options() {
        let mut options = RenderOptions::default();
        options.width = 0;
        assert_eq!(
            Renderer::new(options).unwrap_err(),
            RenderError::EmptyViewport {
                width: 0,
                height: 40
            }
        );

        let mut options = RenderOptions::default();
        options.scale = f64::NAN;
        assert!(matches!(
            Renderer::new(options),
            Err(RenderError::InvalidScale(_))
        ));

        let mut options = RenderOptions::default();
        options.ambient = 1.5;
        assert_eq!(
            Renderer::new(options).unwrap_err(),
            RenderError::InvalidAmbient(1.5)
        );
    }

    #[test]
    fn pixel_centers() {
        let options = RenderOptions {
            width: 4,
            height: 2,
            scale: 2.0,
            center: FreePoint::new(10.0, 20.0),
            ..RenderOptions::default()
        };
        assert_eq!(options.pixel_center(0, 0), FreePoint::new(7.0, 21.0));
        assert_eq!(options.pixel_center(3, 1), FreePoint::new(13.0, 19.0));
    }

    #[test]
    fn render_matches_shade() {
        let scene = scene();
        let options = RenderOptions {
            width: 20,
            height: 10,
            ..RenderOptions::default()
        };
        let rendering = Renderer::new(options).unwrap().render(&scene);
        assert_eq!(rendering.image.width(), 20);
        assert_eq!(rendering.image.height(), 10);
        assert_eq!(rendering.info.pixels(), 200);

        let mut expected_info = RenderInfo::default();
        for y in 0..10 {
            for x in 0..20 {
                let (level, info) = shade(&scene, options.pixel_center(x, y), &options);
                assert_eq!(rendering.image[(x, y)], level, "pixel {x}, {y}");
                expected_info += info;
            }
        }
        assert_eq!(rendering.info, expected_info);
    }

    #[test]
    fn shadow_is_cast_away_from_light() {
        let scene = scene();
        let rendering = Renderer::new(RenderOptions::default())
            .unwrap()
            .render(&scene);
        let options = RenderOptions::default();
        // pixel nearest to (4.5, 0.5), behind the occluder as seen from the light
        let behind = rendering.image[(44usize, 19usize)];
        // pixel nearest to (-4.5, 0.5), between the light and the occluder
        let between = rendering.image[(35usize, 19usize)];
        assert_eq!(options.pixel_center(44, 19), FreePoint::new(4.5, 0.5));
        assert_eq!(behind, options.ambient);
        assert!(between > 0.5, "{between}");
        assert!(rendering.info.occluded() > 0);
    }

    #[test]
    fn info_display() {
        let info = RenderInfo {
            pixels: 10,
            shadow_tests: 4,
            occluded: 2,
            degenerate: 0,
        };
        assert_eq!(info.to_string(), "10 pixels, 4 shadow tests, 2 occluded");
        assert_eq!(
            (info + info).to_string(),
            "20 pixels, 8 shadow tests, 4 occluded"
        );
    }
}
