//! Radius modulation of the subject outline.
//!
//! A short Fourier series with randomized weights and phases. Harmonic `k` has wave number `k`
//! and its weight is drawn from `[0, 1/k)`, so fine detail is suppressed (a brownian-like
//! spectrum). The series is periodic in `2π`.
//!
//! The multiplier is not clamped. With extreme weights it can drop to zero or below, which
//! folds the outline through its center; the subject rasterizer rejects such outlines when
//! they no longer enclose the fill seed.

use {
  rand::Rng,
  std::f64::consts::TAU
};

pub const HARMONICS: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NoiseProfile {
  weights: [f64; HARMONICS],
  /// Fractional turns, `[0, 1)`.
  phases: [f64; HARMONICS]
}

impl NoiseProfile {
  pub fn new(weights: [f64; HARMONICS], phases: [f64; HARMONICS]) -> Self {
    Self { weights, phases }
  }

  /// All weights zero: a perfect circle.
  pub fn flat() -> Self {
    Self::new([0.0; HARMONICS], [0.0; HARMONICS])
  }

  pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let phases = std::array::from_fn(|_| rng.gen_range(0.0..1.0));
    let weights = std::array::from_fn(|k| rng.gen_range(0.0..1.0) / (k + 1) as f64);
    Self { weights, phases }
  }

  pub fn weights(&self) -> &[f64; HARMONICS] {
    &self.weights
  }

  pub fn phases(&self) -> &[f64; HARMONICS] {
    &self.phases
  }

  /// `m(θ) = 1 + Σ wₖ·sin(kθ + 2π·pₖ)`, with the fundamental damped by `0.25`.
  pub fn multiplier(&self, theta: f64) -> f64 {
    self.weights.iter()
      .zip(&self.phases)
      .enumerate()
      .map(|(k, (weight, phase))| {
        let term = weight * ((k + 1) as f64 * theta + TAU * phase).sin();
        if k == 0 { 0.25 * term } else { term }
      })
      .sum::<f64>() + 1.0
  }
}
