use {
  crate::{
    analysis::ForegroundConvention,
    config::Config,
    contour,
    drawing::{self, BinaryImage, Level},
    error::{Error, Result},
    geometry::{self, P2},
    noise::NoiseProfile
  },
  rand::Rng
};

/// The irregular blob. Dark silhouette on a light canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Subject {
  pub radius_scale: u32,
  pub offset: u32
}

impl Subject {
  pub const CONVENTION: ForegroundConvention = ForegroundConvention::DarkOnLight;

  pub fn new(radius_scale: u32, offset: u32) -> Self {
    Self { radius_scale, offset }
  }

  /// Flood fill seed, the polar origin of the outline.
  pub fn seed(&self) -> (u32, u32) {
    let c = self.radius_scale.saturating_add(self.offset);
    (c, c)
  }

  pub fn outline(&self, profile: &NoiseProfile, config: &Config) -> Vec<P2> {
    contour::contour(profile, self.radius_scale as f64, self.offset as f64, config)
  }

  /// Stroke the outline and fill its interior.
  ///
  /// The seed must be on the canvas, enclosed by the outline (non-zero winding) and clear of
  /// the stroke; otherwise the fill would leak or do nothing, and [`Error::UnenclosedSeed`] is
  /// returned instead of an image.
  pub fn render(&self, profile: &NoiseProfile, config: &Config) -> Result<BinaryImage> {
    config.validate()?;
    let outline = self.outline(profile, config);
    let mut image = BinaryImage::square(config.resolution, Level::Light);
    drawing::stroke_polyline(&mut image, &outline, config.stroke_width, Level::Dark);

    let (x, y) = self.seed();
    let enclosed = x < config.resolution && y < config.resolution
      && geometry::winding_number(P2::new(x as f64, y as f64), &outline) != 0
      && image.get(x, y) == Level::Light;
    if !enclosed {
      return Err(Error::UnenclosedSeed { x, y });
    }
    drawing::flood_fill(&mut image, (x, y), Level::Dark);
    Ok(image)
  }

  pub fn generate<R: Rng + ?Sized>(&self, config: &Config, rng: &mut R) -> Result<BinaryImage> {
    self.render(&NoiseProfile::sample(rng), config)
  }
}
