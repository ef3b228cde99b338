//! Computing the light level at a single position.

use gar_cga::Multivector;
use gar_cga::geometry::{
    FreePoint, are_intersected, distance, euclidean, intersection, is_point_in_circle, line,
    point, split_point_pair,
};

use crate::{Light, Occluder, RenderInfo, RenderOptions, Scene};

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
#[allow(clippy::suboptimal_flops, reason = "mul_add is not available in no_std")]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Quadratic easing: goes from `b` at time `t = 0` to `b + c` at time `t = d`, starting slowly.
#[inline]
#[allow(clippy::suboptimal_flops, reason = "mul_add is not available in no_std")]
pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

/// Computes the light level, in `0.0..=1.0`, at `position` in `scene`.
///
/// Each light contributes `1 - (distance / size)²` to positions within its reach, unless
/// [`RenderOptions::shadows`] is enabled and an occluder lies between the light and the
/// position, or the position is inside an occluder. The sum of contributions is clamped and
/// then raised by the [ambient level](RenderOptions::ambient).
///
/// Also returns statistics about the work done.
#[inline]
pub fn shade(scene: &Scene, position: FreePoint, options: &RenderOptions) -> (f32, RenderInfo) {
    let mut info = RenderInfo {
        pixels: 1,
        ..RenderInfo::default()
    };
    let p = point(position.x, position.y);

    let inside_occluder = options.shadows
        && scene
            .occluders()
            .iter()
            .any(|occluder| is_point_in_circle(&p, occluder.circle()));

    let mut total: f64 = 0.0;
    if !inside_occluder {
        for light in scene.lights() {
            let light_point = light.point();
            let d = distance(&light_point, &p);
            if d >= light.size {
                continue;
            }
            if options.shadows {
                let ray = line(&light_point, &p);
                let blocked = scene.occluders().iter().any(|occluder| {
                    blocks_segment(occluder, &ray, light, position, &mut info)
                });
                if blocked {
                    info.occluded += 1;
                    continue;
                }
            }
            total += lerp(1.0, 0.0, ease_in(d, 0.0, 1.0, light.size));
        }
    }

    let level = lerp(f64::from(options.ambient), 1.0, total.clamp(0.0, 1.0));
    (level as f32, info)
}

/// Returns whether `occluder` crosses the segment from `light` to `position`, which lies on
/// the line `ray`.
fn blocks_segment(
    occluder: &Occluder,
    ray: &Multivector,
    light: &Light,
    position: FreePoint,
    info: &mut RenderInfo,
) -> bool {
    info.shadow_tests += 1;
    if !are_intersected(ray, occluder.circle()) {
        return false;
    }
    match split_point_pair(&intersection(ray, occluder.circle())) {
        Ok(crossings) => crossings.iter().any(|crossing| {
            euclidean(crossing).is_ok_and(|c| is_on_segment(c, light.position, position))
        }),
        Err(_) => {
            info.degenerate += 1;
            false
        }
    }
}

/// `q` is assumed to be on the line through `a` and `b`.
fn is_on_segment(q: FreePoint, a: FreePoint, b: FreePoint) -> bool {
    let ab = b - a;
    let t = (q - a).dot(ab) / ab.square_length();
    (0.0..=1.0).contains(&t)
}
