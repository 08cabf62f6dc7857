use {
  crate::error::{Error, Result},
  std::{f64::consts::TAU, ops::RangeInclusive}
};

/// Generation parameters shared by the subject and the marker of one test case.
///
/// ```
/// # use blotch::Config;
/// let config = Config::default()
///   .with_resolution(1000)
///   .with_max_disks(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Side of the square canvas, in pixels.
  pub resolution: u32,
  /// Number of contour points.
  pub samples: usize,
  /// Angular range swept by the contour, in radians. At least one full turn, so the stroked
  /// outline closes on itself.
  pub sweep: RangeInclusive<f64>,
  /// Outline stroke width, in pixels.
  pub stroke_width: f64,
  /// Upper bound (inclusive) of the marker disk count.
  pub max_disks: u32
}

impl Default for Config {
  fn default() -> Self {
    Self {
      resolution: 10000,
      samples: 400,
      sweep: -16.0..=16.0,
      stroke_width: 2.0,
      max_disks: 100
    }
  }
}

impl Config {
  pub fn with_resolution(mut self, resolution: u32) -> Self {
    self.resolution = resolution;
    self
  }

  pub fn with_samples(mut self, samples: usize) -> Self {
    self.samples = samples;
    self
  }

  pub fn with_sweep(mut self, sweep: RangeInclusive<f64>) -> Self {
    self.sweep = sweep;
    self
  }

  pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
    self.stroke_width = stroke_width;
    self
  }

  pub fn with_max_disks(mut self, max_disks: u32) -> Self {
    self.max_disks = max_disks;
    self
  }

  pub fn validate(&self) -> Result<()> {
    let (start, end) = (*self.sweep.start(), *self.sweep.end());
    let problem = if self.resolution == 0 {
      "resolution must be positive".to_string()
    } else if self.samples < 2 {
      format!("at least 2 contour samples are required, got {}", self.samples)
    } else if !(start.is_finite() && end.is_finite() && start < end) {
      format!("sweep {}..={} is not a finite, non-empty range", start, end)
    } else if end - start < TAU {
      format!("sweep {}..={} is shorter than a full turn, the outline would stay open", start, end)
    } else if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
      format!("stroke width {} must be positive", self.stroke_width)
    } else {
      return Ok(())
    };
    Err(Error::Config(problem))
  }
}
