//! .
//!
//! Every failure the library can report. A verdict is never produced from an input that hit
//! one of these.

/// Pixel dimensions, `(width, height)`.
pub type Dimensions = (u32, u32);

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("image dimensions differ: subject is {subject:?}, marker is {marker:?}")]
  DimensionMismatch {
    subject: Dimensions,
    marker: Dimensions
  },

  #[error("subject has no foreground pixels, overlap ratio is undefined")]
  EmptySubject,

  #[error("image is not two-level: pixel ({x}, {y}) has value {value}")]
  MalformedImage {
    x: u32,
    y: u32,
    value: u8
  },

  #[error("flood fill seed ({x}, {y}) is not enclosed by the contour")]
  UnenclosedSeed {
    x: u32,
    y: u32
  },

  #[error("invalid chunking: {0}")]
  InvalidChunking(String),

  #[error("chunk #{index} spans words {start}..{end}, but the bitmap has {len}")]
  ChunkOutOfBounds {
    index: usize,
    start: usize,
    end: usize,
    len: usize
  },

  #[error("invalid configuration: {0}")]
  Config(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error(transparent)]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
