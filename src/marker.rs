use {
  crate::{
    analysis::ForegroundConvention,
    config::Config,
    drawing::{BinaryImage, Draw, Level},
    error::Result,
    geometry::{Disk, Shape, P2}
  },
  rand::Rng
};

/// Randomly scattered disks over the subject's bounding square. Light disks on a dark canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MarkerField {
  pub radius_scale: u32,
  pub offset: u32
}

impl MarkerField {
  pub const CONVENTION: ForegroundConvention = ForegroundConvention::LightOnDark;

  pub fn new(radius_scale: u32, offset: u32) -> Self {
    Self { radius_scale, offset }
  }

  /// Disk radii are drawn from `[1, radius_scale / 100)`, collapsing to 1 for small subjects.
  pub fn max_disk_radius(&self) -> u32 {
    (self.radius_scale / 100).max(2)
  }

  /// Up to `config.max_disks` disks (inclusive), centered in `[offset, 2 * radius_scale + offset)`.
  pub fn sample_disks<R: Rng + ?Sized>(&self, config: &Config, rng: &mut R) -> Vec<Disk> {
    let count = rng.gen_range(0..=config.max_disks);
    let max_radius = self.max_disk_radius();
    let start = self.offset as u64;
    let end = start + (2 * self.radius_scale as u64).max(1);

    (0..count).map(|_| {
      let radius = rng.gen_range(1..max_radius);
      let x = rng.gen_range(start..end);
      let y = rng.gen_range(start..end);
      Disk {
        center: P2::new(x as f64, y as f64),
        radius: radius as f64
      }
    }).collect()
  }

  pub fn render(&self, disks: &[Disk], config: &Config) -> Result<BinaryImage> {
    config.validate()?;
    let mut image = BinaryImage::square(config.resolution, Level::Dark);
    disks.iter()
      .for_each(|disk| disk.fill(Level::Light).draw(&mut image));
    Ok(image)
  }

  pub fn generate<R: Rng + ?Sized>(&self, config: &Config, rng: &mut R) -> Result<BinaryImage> {
    let disks = self.sample_disks(config, rng);
    self.render(&disks, config)
  }
}
