//! Text-based rendering output.

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use alloc::string::String;

use crate::Rendering;
#[cfg(any(feature = "std", test))]
use crate::{RenderInfo, RenderOptions, Renderer, Scene};
#[cfg(any(feature = "std", test))]
use gar_cga::geometry::FreePoint;

/// Characters for increasing light levels.
const RAMP: &[u8] = b" .:-=+*#%@";

impl Rendering {
    /// Converts the image to “ASCII art”, one character per pixel and one line per row,
    /// with brighter characters for higher light levels.
    #[inline]
    pub fn to_ascii(&self) -> String {
        let mut text = String::with_capacity((self.image.width() + 1) * self.image.height());
        for row in self.image.rows() {
            text.extend(row.iter().copied().map(level_char));
            text.push('\n');
        }
        text
    }
}

fn level_char(level: f32) -> char {
    let steps = (RAMP.len() - 1) as f32;
    let index = (level.clamp(0.0, 1.0) * steps).round() as usize;
    char::from(RAMP[index])
}

/// Print an image of the given scene as “ASCII art”.
///
/// Intended for use in tests, to visualize the results in case of failure.
/// Accordingly, it always writes to the same destination as [`print!`](std::print) (which is
/// redirected when tests are run).
///
/// The view is chosen to contain every light's reach and every occluder. The text output is
/// 80 columns wide; characters are not square, so the picture is stretched vertically.
#[cfg(any(feature = "std", test))]
pub fn print_scene(scene: &Scene) {
    print_scene_impl(scene, &mut |s| {
        std::print!("{s}");
    });
}

/// Version of `print_scene` that takes a destination, for testing.
#[cfg(any(feature = "std", test))]
fn print_scene_impl(scene: &Scene, write: &mut dyn FnMut(&str)) -> RenderInfo {
    let mut options = RenderOptions::default();

    let extents = scene
        .lights()
        .iter()
        .map(|light| (light.position, light.size))
        .chain(
            scene
                .occluders()
                .iter()
                .map(|occluder| (occluder.center(), occluder.radius())),
        )
        .fold(None, |bounds: Option<(FreePoint, FreePoint)>, (center, r)| {
            let low = FreePoint::new(center.x - r, center.y - r);
            let high = FreePoint::new(center.x + r, center.y + r);
            Some(match bounds {
                None => (low, high),
                Some((min, max)) => (min.min(low), max.max(high)),
            })
        });
    if let Some((min, max)) = extents {
        let size = max - min;
        let scale = (size.x / options.width as f64).max(size.y / options.height as f64);
        if scale.is_finite() && scale > 0.0 {
            options.scale = scale;
            options.center = min.lerp(max, 0.5);
        }
    }

    let rendering = Renderer::new_unchecked(options).render(scene);
    write(&rendering.to_ascii());
    rendering.info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Light;
    use imgref::ImgVec;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_characters() {
        assert_eq!(level_char(0.0), ' ');
        assert_eq!(level_char(0.1), '.');
        assert_eq!(level_char(0.5), '+');
        assert_eq!(level_char(1.0), '@');
        assert_eq!(level_char(7.0), '@');
        assert_eq!(level_char(-1.0), ' ');
    }

    #[test]
    fn to_ascii_layout() {
        let rendering = Rendering {
            image: ImgVec::new(vec![0.0, 0.5, 1.0, 1.0, 0.5, 0.0], 3, 2),
            info: RenderInfo::default(),
        };
        assert_eq!(rendering.to_ascii(), " +@\n@+ \n");
    }

    #[test]
    fn print_empty_scene() {
        let mut output = String::new();
        let info = print_scene_impl(&Scene::new(), &mut |s| output += s);
        print!("{output}");
        assert_eq!(info.pixels(), 80 * 40);
        let expected_line = ".".repeat(80) + "\n";
        assert_eq!(output, expected_line.repeat(40));
    }

    #[test]
    fn print_scene_test() {
        let mut scene = Scene::new();
        scene.add_light(Light::new(20.0, FreePoint::new(-10.0, 0.0)));
        scene.add_occluder(0.0, 0.0, 4.0);

        let mut output = String::new();
        let info = print_scene_impl(&scene, &mut |s| output += s);
        print!("{output}");

        let lines: alloc::vec::Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 40);
        assert!(lines.iter().all(|line| line.len() == 80));
        // Row 20 is just below the horizontal line through the light and the occluder.
        let middle = lines[20].as_bytes();
        // brightest at the light
        assert_eq!(middle[40], b'@');
        // (-19.5, -0.5), lit but farther from the light
        assert_eq!(middle[30], b'#');
        // the occluder itself, and the shadow behind it, receive only ambient light
        assert_eq!(middle[50], b'.');
        assert_eq!(middle[56], b'.');
        assert!(info.occluded() > 0);
    }
}
