use gar_cga::Multivector;
use gar_cga::geometry::{FreePoint, point};

/// A point light source whose light reaches a limited distance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_structs)]
pub struct Light {
    /// Distance, in scene units, beyond which this light contributes nothing.
    pub size: f64,
    /// Position of the light in the scene.
    pub position: FreePoint,
}

impl Light {
    /// Constructs a light of the given reach at the given position.
    #[inline]
    pub const fn new(size: f64, position: FreePoint) -> Self {
        Self { size, position }
    }

    /// Returns the position of this light as a conformal point.
    #[inline]
    pub fn point(&self) -> Multivector {
        point(self.position.x, self.position.y)
    }
}

impl Default for Light {
    /// A light of size 50 at the origin.
    #[inline]
    fn default() -> Self {
        Self::new(50.0, FreePoint::origin())
    }
}
