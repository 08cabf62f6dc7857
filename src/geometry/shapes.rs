use {
  super::{BoundingBox, SDF, P2, PixelSpace, V2},
  euclid::Box2D
};

/// Filled disk
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disk {
  pub center: P2,
  pub radius: f64
}

/// Line segment `a -> b` stroked with `width`, round caps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Capsule {
  pub a: P2,
  pub b: P2,
  pub width: f64
}

impl BoundingBox for Disk {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )}}

impl BoundingBox for Capsule {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    let half_width = self.width / 2.0;
    Box2D::from_points([self.a, self.b])
      .inflate(half_width, half_width)
  }}

impl SDF for Disk {
  fn sdf(&self, pixel: P2) -> f64 {
    (pixel - self.center).length() - self.radius
  }
}

impl SDF for Capsule {
  fn sdf(&self, pixel: P2) -> f64 {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let h = match ba.square_length() {
      len if len > 0.0 => (pa.dot(ba) / len).clamp(0.0, 1.0),
      _ => 0.0
    };
    (pa - ba * h).length() - self.width / 2.0
  }
}
