use {
  crate::{
    config::Config,
    geometry::P2,
    noise::NoiseProfile
  },
  num_complex::Complex,
  std::ops::RangeInclusive
};

/// Polar origin of a subject in pixel space: `(radius + offset, radius + offset)`.
pub fn center(radius: f64, offset: f64) -> P2 {
  P2::splat(radius + offset)
}

/// `samples` evenly spaced values over `sweep`, both ends included.
pub fn angles(samples: usize, sweep: RangeInclusive<f64>) -> impl Iterator<Item = f64> {
  let (start, end) = sweep.into_inner();
  let step = match samples {
    0 | 1 => 0.0,
    n => (end - start) / (n - 1) as f64
  };
  (0..samples).map(move |i| match i {
    i if i + 1 == samples && samples > 1 => end,
    i => start + step * i as f64
  })
}

/// Outline of a subject, ordered by angle.
///
/// Each sampled angle θ gives a radius `radius · m(θ)`, converted to Cartesian coordinates,
/// flipped vertically (image rows grow downwards) and moved to [`center`].
pub fn contour(profile: &NoiseProfile, radius: f64, offset: f64, config: &Config) -> Vec<P2> {
  let origin = center(radius, offset).to_vector();
  angles(config.samples, config.sweep.clone())
    .map(|theta| {
      let z = Complex::from_polar(radius * profile.multiplier(theta), theta);
      P2::new(z.re, -z.im) + origin
    })
    .collect()
}
