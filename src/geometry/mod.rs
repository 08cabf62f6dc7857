//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. All coordinates
//! are in pixels, integer coordinates are pixel centers.

use euclid::{Point2D, Box2D, Vector2D};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;
pub type V2 = Vector2D<f64, PixelSpace>;

pub trait BoundingBox {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace>;
}

/// Signed distance function
pub trait SDF {
  fn sdf(&self, pixel: P2) -> f64;
}

/// Something inside a rectangular area.
pub trait Shape: SDF + BoundingBox {
  fn fill(self, level: crate::drawing::Level) -> crate::drawing::Fill<Self> where Self: Sized {
    crate::drawing::Fill { shape: self, level }
  }
}
impl <T> Shape for T where T: SDF + BoundingBox {}

/// Winding number of a polygon around `point`. The polygon is implicitly closed by an edge
/// from its last vertex back to the first one.
///
/// Non-zero means `point` is inside under the non-zero rule. The sign depends on orientation.
pub fn winding_number(point: P2, polygon: &[P2]) -> i32 {
  // > 0 when `point` is left of the edge a -> b
  let side = |a: P2, b: P2| (b - a).cross(point - a);

  polygon.iter()
    .zip(polygon.iter().cycle().skip(1))
    .fold(0, |winding, (&a, &b)| {
      if a.y <= point.y {
        if b.y > point.y && side(a, b) > 0.0 { winding + 1 } else { winding }
      } else if b.y <= point.y && side(a, b) < 0.0 {
        winding - 1
      } else {
        winding
      }
    })
}
