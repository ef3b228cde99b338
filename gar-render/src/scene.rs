use alloc::vec::Vec;

use gar_cga::Multivector;
use gar_cga::geometry::{FreePoint, circle};

use crate::Light;

/// A circular object which blocks light.
#[derive(Clone, Debug, PartialEq)]
pub struct Occluder {
    center: FreePoint,
    radius: f64,
    /// Direct circle representation, used for all shadow tests.
    circle: Multivector,
}

impl Occluder {
    /// Constructs an occluder with the given center and radius.
    #[inline]
    pub fn new(center: FreePoint, radius: f64) -> Self {
        Self {
            center,
            radius,
            circle: circle(center.x, center.y, radius),
        }
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn center(&self) -> FreePoint {
        self.center
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the circle of this occluder, as a grade 3 multivector.
    #[inline]
    pub fn circle(&self) -> &Multivector {
        &self.circle
    }
}

/// The lights and occluders to be rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    lights: Vec<Light>,
    occluders: Vec<Occluder>,
}

impl Scene {
    /// Constructs a scene with nothing in it.
    #[inline]
    pub const fn new() -> Self {
        Self {
            lights: Vec::new(),
            occluders: Vec::new(),
        }
    }

    /// Adds a light to the scene.
    #[inline]
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Adds a circular occluder with center `(x, y)` and radius `r` to the scene.
    #[inline]
    pub fn add_occluder(&mut self, x: f64, y: f64, r: f64) {
        self.occluders.push(Occluder::new(FreePoint::new(x, y), r));
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Allows moving or resizing the lights.
    #[inline]
    pub fn lights_mut(&mut self) -> &mut [Light] {
        &mut self.lights
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn occluders(&self) -> &[Occluder] {
        &self.occluders
    }

    /// Removes all lights and occluders.
    #[inline]
    pub fn clear(&mut self) {
        self.lights.clear();
        self.occluders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gar_cga::Classification;
    use gar_cga::geometry::{center_of_circle, euclidean, radius};

    #[test]
    fn occluder_circle_matches_parameters() {
        let occluder = Occluder::new(FreePoint::new(2.0, -3.0), 4.0);
        let c = occluder.circle();
        assert_eq!(c.classify(), Classification::Circle);
        let center = euclidean(&center_of_circle(c).unwrap()).unwrap();
        assert!((center - occluder.center()).length() < 1e-12);
        assert!((radius(c).unwrap() - occluder.radius()).abs() < 1e-12);
    }

    #[test]
    fn scene_contents() {
        let mut scene = Scene::new();
        assert_eq!(scene, Scene::default());
        scene.add_light(Light::default());
        scene.add_occluder(1.0, 2.0, 3.0);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.occluders()[0].center(), FreePoint::new(1.0, 2.0));

        scene.lights_mut()[0].position = FreePoint::new(5.0, 5.0);
        assert_eq!(scene.lights()[0].position, FreePoint::new(5.0, 5.0));

        scene.clear();
        assert!(scene.lights().is_empty() && scene.occluders().is_empty());
    }
}
