//! Synthetic blob/marker fixtures and a packed-bitmap overlap analyzer.
//!
//! Two images are generated in the same square frame:
//! - a *subject*: an irregular dark blob on a light canvas. Its outline is a polar curve whose
//!   radius is modulated by a short random Fourier series ([`noise::NoiseProfile`]), swept over
//!   several turns, stroked and flood-filled;
//! - a *marker*: up to 100 light disks scattered over the subject's bounding square.
//!
//! The analyzer counts the subject's foreground pixels and how many of them the marker covers,
//! on bit-packed words, either in a single pass or split in chunks over a fixed-size
//! [`analysis::WorkerPool`]. Both strategies give identical counts. A subject is *positive* when
//! more than 10% of it is covered.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   blotch::{Config, Result, WorkerPool},
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! let config = Config::default(); // 10000x10000 canvas
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//!
//! blotch::generate_subject("subject.png", 3000, 500, &config, &mut rng)?;
//! blotch::generate_marker("marker.png", 3000, 500, &config, &mut rng)?;
//!
//! let positive = blotch::analyze("subject.png", "marker.png")?;
//! let pool = WorkerPool::with_available_parallelism()?;
//! assert_eq!(positive, blotch::analyze_parallel("subject.png", "marker.png", &pool)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Polarity
//! The stored level of the foreground differs between the two images: the subject is dark on
//! light, the marker light on dark. This is never implicit, see
//! [`analysis::ForegroundConvention`], [`Subject::CONVENTION`] and [`MarkerField::CONVENTION`].

use {
  rand::Rng,
  std::path::Path
};

pub mod error;
pub mod config;
pub mod geometry;
pub mod drawing;
pub mod noise;
pub mod contour;
pub mod subject;
pub mod marker;
pub mod analysis;
pub mod classify;
pub mod util;


pub use {
  error::{Error, Result},
  config::Config,
  drawing::{BinaryImage, Level},
  subject::Subject,
  marker::MarkerField,
  analysis::{OverlapCounts, PackedBitmap, WorkerPool}
};

/// Render a random subject and save it to `path`.
pub fn generate_subject<R: Rng + ?Sized>(
  path: impl AsRef<Path>,
  radius_scale: u32,
  offset: u32,
  config: &Config,
  rng: &mut R
) -> Result<()> {
  Subject::new(radius_scale, offset)
    .generate(config, rng)?
    .save(path)
}

/// Render a random marker field and save it to `path`.
pub fn generate_marker<R: Rng + ?Sized>(
  path: impl AsRef<Path>,
  radius_scale: u32,
  offset: u32,
  config: &Config,
  rng: &mut R
) -> Result<()> {
  MarkerField::new(radius_scale, offset)
    .generate(config, rng)?
    .save(path)
}

/// Verdict for a subject/marker pair of image files, single pass.
pub fn analyze(subject_path: impl AsRef<Path>, marker_path: impl AsRef<Path>) -> Result<bool> {
  let (subject, marker) = open_pair(subject_path, marker_path)?;
  analyze_images(&subject, &marker)
}

/// Verdict for a subject/marker pair of image files, one chunk per pool worker.
pub fn analyze_parallel(
  subject_path: impl AsRef<Path>,
  marker_path: impl AsRef<Path>,
  pool: &WorkerPool
) -> Result<bool> {
  let (subject, marker) = open_pair(subject_path, marker_path)?;
  analyze_images_parallel(&subject, &marker, pool)
}

pub fn analyze_images(subject: &BinaryImage, marker: &BinaryImage) -> Result<bool> {
  classify::is_positive(measure(subject, marker)?)
}

pub fn analyze_images_parallel(subject: &BinaryImage, marker: &BinaryImage, pool: &WorkerPool) -> Result<bool> {
  classify::is_positive(measure_parallel(subject, marker, pool)?)
}

/// Subject size and overlap, single pass.
pub fn measure(subject: &BinaryImage, marker: &BinaryImage) -> Result<OverlapCounts> {
  let (subject, marker) = pack_pair(subject, marker)?;
  analysis::count_sequential(&subject, &marker)
}

/// Subject size and overlap, one chunk per pool worker.
pub fn measure_parallel(subject: &BinaryImage, marker: &BinaryImage, pool: &WorkerPool) -> Result<OverlapCounts> {
  let (subject, marker) = pack_pair(subject, marker)?;
  pool.count(&subject, &marker)
}

fn open_pair(subject_path: impl AsRef<Path>, marker_path: impl AsRef<Path>) -> Result<(BinaryImage, BinaryImage)> {
  Ok((BinaryImage::open(subject_path)?, BinaryImage::open(marker_path)?))
}

fn pack_pair(subject: &BinaryImage, marker: &BinaryImage) -> Result<(PackedBitmap, PackedBitmap)> {
  if subject.dimensions() != marker.dimensions() {
    return Err(Error::DimensionMismatch {
      subject: subject.dimensions(),
      marker: marker.dimensions()
    });
  }
  Ok((
    PackedBitmap::pack(subject, Subject::CONVENTION),
    PackedBitmap::pack(marker, MarkerField::CONVENTION)
  ))
}
